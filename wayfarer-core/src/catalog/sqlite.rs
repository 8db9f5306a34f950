//! Read-only catalog backed by a SQLite database.
//!
//! The schema holds two tables:
//!
//! - `exhibits(id, name, description, location_x, location_y, importance,
//!   visit_duration, category, period, is_active)`
//! - `venue_layouts(name, entrance_x, entrance_y, exit_x, exit_y, restrooms,
//!   rest_areas, emergency_exits, walkways, is_active)`, where the amenity
//!   columns hold JSON arrays of `[x, y]` pairs and `walkways` holds an array
//!   of such arrays.
//!
//! Only rows with a non-zero `is_active` are returned.

use std::path::{Path, PathBuf};

use geo::{Coord, LineString};
use log::debug;
use rusqlite::{Connection, OpenFlags, Row};
use thiserror::Error;

use super::{CatalogError, CatalogProvider};
use crate::{CoordinateError, PointOfInterest, PointOfInterestError, VenueTopology};

const EXHIBITS_QUERY: &str = "SELECT id, name, description, location_x, location_y, importance, \
     visit_duration, category, period FROM exhibits WHERE is_active != 0 ORDER BY id";

const VENUE_QUERY: &str = "SELECT name, entrance_x, entrance_y, exit_x, exit_y, restrooms, \
     rest_areas, emergency_exits, walkways FROM venue_layouts WHERE is_active != 0 \
     ORDER BY rowid LIMIT 1";

/// Error raised when reading or validating a persisted catalog.
#[derive(Debug, Error)]
pub enum SqliteCatalogError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A stored exhibit failed validation.
    #[error("exhibit {id} is invalid: {source}")]
    InvalidExhibit {
        /// Identifier of the offending row.
        id: String,
        /// Validation failure.
        #[source]
        source: PointOfInterestError,
    },
    /// An amenity column of a layout was not a JSON coordinate array.
    #[error("layout '{layout}' has malformed {column}: {source}")]
    InvalidAmenities {
        /// Name of the layout row.
        layout: String,
        /// Column that failed to parse.
        column: &'static str,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A layout coordinate was not finite.
    #[error("layout '{layout}' is invalid: {source}")]
    InvalidVenue {
        /// Name of the layout row.
        layout: String,
        /// Validation failure.
        #[source]
        source: CoordinateError,
    },
    /// Generic SQLite error when reading rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only catalog over a SQLite file.
///
/// Each call opens its own read-only connection, so one catalog can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    path: PathBuf,
}

impl SqliteCatalog {
    /// Open a catalog, checking that the database can be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SqliteCatalogError> {
        let catalog = Self {
            path: path.as_ref().to_path_buf(),
        };
        catalog.connect()?;
        Ok(catalog)
    }

    /// Location of the backing database.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all active exhibits ordered by id.
    pub fn load_exhibits(&self) -> Result<Vec<PointOfInterest>, SqliteCatalogError> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(EXHIBITS_QUERY)?;
        let mut rows = statement.query([])?;
        let mut exhibits = Vec::new();
        while let Some(row) = rows.next()? {
            exhibits.push(exhibit_from_row(row)?);
        }
        debug!(
            "loaded {} active exhibits from {}",
            exhibits.len(),
            self.path.display()
        );
        Ok(exhibits)
    }

    /// Load the first active venue layout.
    pub fn load_venue(&self) -> Result<Option<VenueTopology>, SqliteCatalogError> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(VENUE_QUERY)?;
        let mut rows = statement.query([])?;
        match rows.next()? {
            Some(row) => venue_from_row(row).map(Some),
            None => Ok(None),
        }
    }

    fn connect(&self) -> Result<Connection, SqliteCatalogError> {
        Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
            |source| SqliteCatalogError::OpenDatabase {
                path: self.path.clone(),
                source,
            },
        )
    }
}

impl CatalogProvider for SqliteCatalog {
    fn exhibits(&self) -> Result<Vec<PointOfInterest>, CatalogError> {
        Ok(self.load_exhibits()?)
    }

    fn venue(&self) -> Result<Option<VenueTopology>, CatalogError> {
        Ok(self.load_venue()?)
    }
}

fn exhibit_from_row(row: &Row<'_>) -> Result<PointOfInterest, SqliteCatalogError> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let x: f64 = row.get(3)?;
    let y: f64 = row.get(4)?;
    let importance: i64 = row.get(5)?;
    let visit_duration: i64 = row.get(6)?;
    let category: Option<String> = row.get(7)?;
    let period: Option<String> = row.get(8)?;

    // Out-of-range integers map to values the constructor rejects.
    let importance = u8::try_from(importance).unwrap_or(0);
    let visit_duration = u32::try_from(visit_duration).unwrap_or(0);

    PointOfInterest::new(id.clone(), name, Coord { x, y }, importance, visit_duration)
        .map(|poi| {
            poi.with_description(description.unwrap_or_default())
                .with_category(category.unwrap_or_default())
                .with_period(period.unwrap_or_default())
        })
        .map_err(|source| SqliteCatalogError::InvalidExhibit { id, source })
}

fn venue_from_row(row: &Row<'_>) -> Result<VenueTopology, SqliteCatalogError> {
    let layout: String = row.get(0)?;
    let entrance = Coord {
        x: row.get(1)?,
        y: row.get(2)?,
    };
    let exit = Coord {
        x: row.get(3)?,
        y: row.get(4)?,
    };
    let restrooms = points_column(row, 5, "restrooms", &layout)?;
    let rest_areas = points_column(row, 6, "rest_areas", &layout)?;
    let emergency_exits = points_column(row, 7, "emergency_exits", &layout)?;
    let walkways: Vec<Vec<[f64; 2]>> = json_column(row, 8, "walkways", &layout)?;

    let invalid = |source: CoordinateError| SqliteCatalogError::InvalidVenue {
        layout: layout.clone(),
        source,
    };
    VenueTopology::new(entrance, exit)
        .and_then(|venue| venue.with_restrooms(restrooms))
        .and_then(|venue| venue.with_rest_areas(rest_areas))
        .and_then(|venue| venue.with_emergency_exits(emergency_exits))
        .and_then(|venue| {
            venue.with_walkways(
                walkways
                    .into_iter()
                    .map(|path| path.into_iter().map(pair_to_coord).collect::<LineString<f64>>())
                    .collect(),
            )
        })
        .map(|venue| venue.with_name(layout.clone()))
        .map_err(invalid)
}

fn points_column(
    row: &Row<'_>,
    index: usize,
    column: &'static str,
    layout: &str,
) -> Result<Vec<Coord<f64>>, SqliteCatalogError> {
    let pairs: Vec<[f64; 2]> = json_column(row, index, column, layout)?;
    Ok(pairs.into_iter().map(pair_to_coord).collect())
}

fn json_column<T>(
    row: &Row<'_>,
    index: usize,
    column: &'static str,
    layout: &str,
) -> Result<T, SqliteCatalogError>
where
    T: serde::de::DeserializeOwned + Default,
{
    let raw: Option<String> = row.get(index)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => {
            serde_json::from_str(text).map_err(|source| SqliteCatalogError::InvalidAmenities {
                layout: layout.to_owned(),
                column,
                source,
            })
        }
    }
}

const fn pair_to_coord([x, y]: [f64; 2]) -> Coord<f64> {
    Coord { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_sqlite_catalog, write_sqlite_schema};
    use crate::{CatalogProvider, sample_catalog};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    #[rstest]
    fn round_trips_sample_catalog(temp_dir: TempDir) {
        let path = temp_dir.path().join("catalog.db");
        let sample = sample_catalog();
        write_sqlite_catalog(&path, &sample.exhibits, sample.venue.as_ref()).expect("write db");

        let catalog = SqliteCatalog::open(&path).expect("open catalog");
        assert_eq!(catalog.exhibits().expect("exhibits"), sample.exhibits);
        assert_eq!(catalog.venue().expect("venue"), sample.venue);
    }

    #[rstest]
    fn skips_inactive_rows(temp_dir: TempDir) {
        let path = temp_dir.path().join("catalog.db");
        let connection = write_sqlite_schema(&path).expect("schema");
        connection
            .execute_batch(
                "INSERT INTO exhibits VALUES ('b', 'B', NULL, 1.0, 1.0, 3, 5, 'x', 'y', 1);
                 INSERT INTO exhibits VALUES ('a', 'A', NULL, 2.0, 2.0, 3, 5, 'x', 'y', 0);",
            )
            .expect("insert rows");
        drop(connection);

        let catalog = SqliteCatalog::open(&path).expect("open catalog");
        let ids: Vec<_> = catalog
            .load_exhibits()
            .expect("exhibits")
            .into_iter()
            .map(|poi| poi.id)
            .collect();
        assert_eq!(ids, vec!["b".to_owned()]);
        assert!(catalog.load_venue().expect("venue").is_none());
    }

    #[rstest]
    #[case("INSERT INTO exhibits VALUES ('bad', 'Bad', NULL, 0.0, 0.0, 9, 5, '', '', 1)")]
    #[case("INSERT INTO exhibits VALUES ('neg', 'Neg', NULL, 0.0, 0.0, 3, -1, '', '', 1)")]
    fn rejects_invalid_exhibits(temp_dir: TempDir, #[case] insert: &str) {
        let path = temp_dir.path().join("catalog.db");
        let connection = write_sqlite_schema(&path).expect("schema");
        connection.execute_batch(insert).expect("insert row");
        drop(connection);

        let catalog = SqliteCatalog::open(&path).expect("open catalog");
        let err = catalog.load_exhibits().expect_err("invalid row");
        assert!(matches!(err, SqliteCatalogError::InvalidExhibit { .. }));
    }

    #[rstest]
    fn rejects_malformed_amenities(temp_dir: TempDir) {
        let path = temp_dir.path().join("catalog.db");
        let connection = write_sqlite_schema(&path).expect("schema");
        connection
            .execute_batch(
                "INSERT INTO venue_layouts VALUES
                 ('hall', 0.0, 0.0, 1.0, 1.0, 'not json', '[]', '[]', '[]', 1);",
            )
            .expect("insert layout");
        drop(connection);

        let catalog = SqliteCatalog::open(&path).expect("open catalog");
        let err = catalog.load_venue().expect_err("malformed restrooms");
        assert!(matches!(
            err,
            SqliteCatalogError::InvalidAmenities {
                column: "restrooms",
                ..
            }
        ));
    }

    #[rstest]
    fn open_fails_for_missing_file(temp_dir: TempDir) {
        let err = SqliteCatalog::open(temp_dir.path().join("absent.db")).expect_err("missing db");
        assert!(matches!(err, SqliteCatalogError::OpenDatabase { .. }));
    }
}
