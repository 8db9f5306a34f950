//! Behavioural tests for catalog suppliers and their fallback.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;
use wayfarer_core::{
    CatalogError, CatalogProvider, FallbackCatalog, PointOfInterest, SqliteCatalog,
    VenueTopology, sample_catalog,
    test_support::{FailingCatalog, poi, write_sqlite_catalog},
};

enum Supplier {
    Sqlite(SqliteCatalog),
    Failing,
}

struct CatalogWorld {
    temp_dir: TempDir,
    supplier: RefCell<Option<Supplier>>,
    exhibits: RefCell<Vec<PointOfInterest>>,
    venue: RefCell<Option<VenueTopology>>,
    error: RefCell<Option<CatalogError>>,
}

#[fixture]
fn world() -> CatalogWorld {
    CatalogWorld {
        temp_dir: TempDir::new().expect("create temp dir"),
        supplier: RefCell::new(None),
        exhibits: RefCell::new(Vec::new()),
        venue: RefCell::new(None),
        error: RefCell::new(None),
    }
}

fn persist(world: &CatalogWorld, exhibits: &[PointOfInterest]) {
    let path = world.temp_dir.path().join("catalog.db");
    write_sqlite_catalog(&path, exhibits, None).expect("persist catalog");
    let catalog = SqliteCatalog::open(&path).expect("open catalog");
    world.supplier.replace(Some(Supplier::Sqlite(catalog)));
}

fn resolve<P: CatalogProvider>(
    primary: P,
) -> Result<(Vec<PointOfInterest>, Option<VenueTopology>), CatalogError> {
    let catalog = FallbackCatalog::new(primary, sample_catalog());
    Ok((catalog.exhibits()?, catalog.venue()?))
}

#[given("an empty SQLite catalog")]
fn given_empty(world: &CatalogWorld) {
    persist(world, &[]);
}

#[given("a SQLite catalog with 2 active exhibits and no layout")]
fn given_two(world: &CatalogWorld) {
    persist(
        world,
        &[poi("a1", 3, 10, (1.0, 1.0)), poi("a2", 5, 10, (2.0, 2.0))],
    );
}

#[given("a failing catalog supplier")]
fn given_failing(world: &CatalogWorld) {
    world.supplier.replace(Some(Supplier::Failing));
}

#[when("I resolve the catalog with the sample fallback")]
fn when_resolve(world: &CatalogWorld) {
    let supplier = world.supplier.borrow();
    let result = match supplier.as_ref().expect("supplier configured") {
        Supplier::Sqlite(catalog) => resolve(catalog),
        Supplier::Failing => resolve(FailingCatalog),
    };
    match result {
        Ok((exhibits, venue)) => {
            world.exhibits.replace(exhibits);
            world.venue.replace(venue);
        }
        Err(err) => {
            world.error.replace(Some(err));
        }
    }
}

#[then("{count} exhibits are available")]
fn then_count(world: &CatalogWorld, count: usize) {
    assert!(world.error.borrow().is_none(), "unexpected catalog error");
    assert_eq!(world.exhibits.borrow().len(), count);
}

#[then("the venue is the sample layout")]
fn then_sample_venue(world: &CatalogWorld) {
    let venue = world.venue.borrow();
    let venue = venue.as_ref().expect("venue resolved");
    assert_eq!(venue.name.as_deref(), Some("南湖纪念馆标准布局"));
}

#[then("resolving the catalog fails")]
fn then_fails(world: &CatalogWorld) {
    assert!(matches!(
        *world.error.borrow(),
        Some(CatalogError::Supplier { .. })
    ));
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn empty_catalog_falls_back(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn persisted_exhibits_win(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn failing_supplier_is_reported(world: CatalogWorld) {
    let _ = world;
}
