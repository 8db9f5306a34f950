//! Catalog and input-file resolution shared by the CLI commands.

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use serde::de::DeserializeOwned;
use wayfarer_core::{CatalogProvider, FallbackCatalog, StaticCatalog, sample_catalog};
use wayfarer_fs::EntryKind;

use crate::{ARG_CATALOG, ARG_CATALOG_DB, CliError};

/// Where a command reads exhibits and the venue layout from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CatalogSource {
    /// JSON file holding a serialised [`StaticCatalog`].
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Read-only `SQLite` catalog; wins over `catalog` when both are set.
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

impl CatalogSource {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if let Some(path) = &self.catalog_db {
            require_existing(path, ARG_CATALOG_DB)?;
        }
        if let Some(path) = &self.catalog {
            require_existing(path, ARG_CATALOG)?;
        }
        Ok(())
    }
}

/// Builds the catalog supplier for the current invocation.
pub(crate) trait CatalogBuilder {
    fn build(&self, source: &CatalogSource) -> Result<Box<dyn CatalogProvider>, CliError>;
}

/// Resolves `--catalog-db`, then `--catalog`, then the built-in sample data.
///
/// Persisted catalogs are paired with the sample catalog so an empty store
/// still yields a usable venue.
pub(crate) struct DefaultCatalogBuilder;

impl CatalogBuilder for DefaultCatalogBuilder {
    fn build(&self, source: &CatalogSource) -> Result<Box<dyn CatalogProvider>, CliError> {
        if let Some(path) = &source.catalog_db {
            return open_sqlite(path);
        }
        if let Some(path) = &source.catalog {
            let primary: StaticCatalog = load_json(path, ARG_CATALOG)?;
            info!(
                "using catalog file {path} with {} exhibits",
                primary.exhibits.len()
            );
            return Ok(Box::new(FallbackCatalog::new(primary, sample_catalog())));
        }
        info!("using the built-in sample catalog");
        Ok(Box::new(sample_catalog()))
    }
}

#[cfg(feature = "store-sqlite")]
fn open_sqlite(path: &Utf8Path) -> Result<Box<dyn CatalogProvider>, CliError> {
    use wayfarer_core::{CatalogError, SqliteCatalog};

    let store = SqliteCatalog::open(path.as_std_path()).map_err(CatalogError::from)?;
    info!("using SQLite catalog {path}");
    Ok(Box::new(FallbackCatalog::new(store, sample_catalog())))
}

#[cfg(not(feature = "store-sqlite"))]
fn open_sqlite(_path: &Utf8Path) -> Result<Box<dyn CatalogProvider>, CliError> {
    Err(CliError::MissingFeature {
        feature: "store-sqlite",
        action: "reading --catalog-db",
    })
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match wayfarer_fs::entry_kind(path) {
        Ok(EntryKind::File) => Ok(()),
        Ok(EntryKind::Other) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Ok(EntryKind::Missing) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and decode a JSON input file.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let text = wayfarer_fs::read_utf8(path).map_err(|source| CliError::ReadInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}
