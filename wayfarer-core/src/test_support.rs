//! Test-only helpers shared by unit, behaviour and downstream crate tests.

use geo::Coord;

use crate::{
    CatalogError, CatalogProvider, Importance, PointOfInterest, StaticCatalog, VenueTopology,
};

/// Build an exhibit without validation.
///
/// `importance` is clamped into range; `category` and `description` default
/// to empty strings.
pub fn poi(id: &str, importance: u8, visit_duration: u32, (x, y): (f64, f64)) -> PointOfInterest {
    PointOfInterest {
        id: id.to_owned(),
        name: format!("Exhibit {id}"),
        description: String::new(),
        location: Coord { x, y },
        importance: Importance::saturating(importance),
        visit_duration,
        category: String::new(),
        period: String::new(),
    }
}

/// A venue with entrance and exit only.
pub fn venue((ex, ey): (f64, f64), (xx, xy): (f64, f64)) -> VenueTopology {
    VenueTopology {
        name: None,
        entrance: Coord { x: ex, y: ey },
        exit: Coord { x: xx, y: xy },
        restrooms: Vec::new(),
        rest_areas: Vec::new(),
        emergency_exits: Vec::new(),
        walkways: Vec::new(),
    }
}

/// A [`StaticCatalog`] over `exhibits` with an origin-to-origin venue.
pub fn memory_catalog<I>(exhibits: I) -> StaticCatalog
where
    I: IntoIterator<Item = PointOfInterest>,
{
    StaticCatalog::new(
        exhibits.into_iter().collect(),
        Some(venue((0.0, 0.0), (0.0, 0.0))),
    )
}

/// Catalog whose every call fails.
#[derive(Debug, Copy, Clone, Default)]
pub struct FailingCatalog;

impl CatalogProvider for FailingCatalog {
    fn exhibits(&self) -> Result<Vec<PointOfInterest>, CatalogError> {
        Err(CatalogError::Supplier {
            message: "exhibits unavailable".to_owned(),
        })
    }

    fn venue(&self) -> Result<Option<VenueTopology>, CatalogError> {
        Err(CatalogError::Supplier {
            message: "venue unavailable".to_owned(),
        })
    }
}

#[cfg(feature = "store-sqlite")]
mod sqlite {
    use std::path::Path;

    use geo::Coord;
    use rusqlite::{Connection, params};

    use crate::{PointOfInterest, VenueTopology};

    /// Create an empty catalog database at `path` and return the open
    /// connection.
    pub fn write_sqlite_schema(path: &Path) -> rusqlite::Result<Connection> {
        let connection = Connection::open(path)?;
        connection.execute_batch(
            "CREATE TABLE exhibits (
                 id TEXT PRIMARY KEY,
                 name TEXT NOT NULL,
                 description TEXT,
                 location_x REAL NOT NULL,
                 location_y REAL NOT NULL,
                 importance INTEGER NOT NULL,
                 visit_duration INTEGER NOT NULL,
                 category TEXT,
                 period TEXT,
                 is_active INTEGER NOT NULL DEFAULT 1
             );
             CREATE TABLE venue_layouts (
                 name TEXT NOT NULL,
                 entrance_x REAL NOT NULL,
                 entrance_y REAL NOT NULL,
                 exit_x REAL NOT NULL,
                 exit_y REAL NOT NULL,
                 restrooms TEXT,
                 rest_areas TEXT,
                 emergency_exits TEXT,
                 walkways TEXT,
                 is_active INTEGER NOT NULL DEFAULT 1
             );",
        )?;
        Ok(connection)
    }

    /// Persist `exhibits` and an optional active `venue` to a new database.
    pub fn write_sqlite_catalog(
        path: &Path,
        exhibits: &[PointOfInterest],
        venue: Option<&VenueTopology>,
    ) -> rusqlite::Result<()> {
        let mut connection = write_sqlite_schema(path)?;
        let tx = connection.transaction()?;
        for poi in exhibits {
            tx.execute(
                "INSERT INTO exhibits VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 1)",
                params![
                    poi.id,
                    poi.name,
                    poi.description,
                    poi.location.x,
                    poi.location.y,
                    poi.importance.get(),
                    poi.visit_duration,
                    poi.category,
                    poi.period,
                ],
            )?;
        }
        if let Some(venue) = venue {
            let walkways: Vec<Vec<[f64; 2]>> = venue
                .walkways
                .iter()
                .map(|line| line.coords().copied().map(pair).collect())
                .collect();
            tx.execute(
                "INSERT INTO venue_layouts VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 1)",
                params![
                    venue.name.clone().unwrap_or_default(),
                    venue.entrance.x,
                    venue.entrance.y,
                    venue.exit.x,
                    venue.exit.y,
                    to_json(&pairs(&venue.restrooms))?,
                    to_json(&pairs(&venue.rest_areas))?,
                    to_json(&pairs(&venue.emergency_exits))?,
                    to_json(&walkways)?,
                ],
            )?;
        }
        tx.commit()
    }

    const fn pair(coord: Coord<f64>) -> [f64; 2] {
        [coord.x, coord.y]
    }

    fn pairs(points: &[Coord<f64>]) -> Vec<[f64; 2]> {
        points.iter().copied().map(pair).collect()
    }

    fn to_json<T: serde::Serialize>(value: &T) -> rusqlite::Result<String> {
        serde_json::to_string(value)
            .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))
    }
}

#[cfg(feature = "store-sqlite")]
pub use sqlite::{write_sqlite_catalog, write_sqlite_schema};
