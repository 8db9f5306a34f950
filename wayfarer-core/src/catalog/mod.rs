//! Catalog suppliers: where exhibits and venue layouts come from.
//!
//! The optimizer never reaches for global data. Callers hand it a
//! [`CatalogProvider`], typically a persisted catalog wrapped in a
//! [`FallbackCatalog`] whose fallback is [`sample_catalog`].

use std::cmp::Reverse;

use log::warn;
use thiserror::Error;

use crate::{PointOfInterest, VenueTopology};

mod sample;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use sample::sample_catalog;
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteCatalog, SqliteCatalogError};

/// Errors raised by catalog suppliers.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The SQLite catalog could not be read.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    Sqlite(#[from] SqliteCatalogError),
    /// A custom supplier failed.
    #[error("catalog supplier failed: {message}")]
    Supplier {
        /// Human-readable cause.
        message: String,
    },
}

/// Read-only access to a venue's exhibits and active layout.
///
/// # Examples
/// ```
/// use wayfarer_core::{CatalogProvider, StaticCatalog};
///
/// let catalog = StaticCatalog::default();
/// assert!(catalog.exhibits()?.is_empty());
/// assert!(catalog.venue()?.is_none());
/// # Ok::<(), wayfarer_core::CatalogError>(())
/// ```
pub trait CatalogProvider {
    /// All active exhibits in catalog order.
    fn exhibits(&self) -> Result<Vec<PointOfInterest>, CatalogError>;

    /// The active venue layout, if one exists.
    fn venue(&self) -> Result<Option<VenueTopology>, CatalogError>;
}

impl<T: CatalogProvider + ?Sized> CatalogProvider for &T {
    fn exhibits(&self) -> Result<Vec<PointOfInterest>, CatalogError> {
        (**self).exhibits()
    }

    fn venue(&self) -> Result<Option<VenueTopology>, CatalogError> {
        (**self).venue()
    }
}

/// In-memory catalog owning its exhibits and venue.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticCatalog {
    /// Exhibits in catalog order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exhibits: Vec<PointOfInterest>,
    /// Venue layout.
    #[cfg_attr(feature = "serde", serde(default))]
    pub venue: Option<VenueTopology>,
}

impl StaticCatalog {
    /// Create a catalog from exhibits and an optional venue.
    pub const fn new(exhibits: Vec<PointOfInterest>, venue: Option<VenueTopology>) -> Self {
        Self { exhibits, venue }
    }
}

impl CatalogProvider for StaticCatalog {
    fn exhibits(&self) -> Result<Vec<PointOfInterest>, CatalogError> {
        Ok(self.exhibits.clone())
    }

    fn venue(&self) -> Result<Option<VenueTopology>, CatalogError> {
        Ok(self.venue.clone())
    }
}

/// Consult `primary` first and `fallback` when it has nothing to offer.
///
/// Exhibits and venue are resolved independently: a primary catalog with
/// exhibits but no layout yields its own exhibits with the fallback layout.
/// Errors from the primary are returned, not masked.
///
/// # Examples
/// ```
/// use wayfarer_core::{CatalogProvider, FallbackCatalog, StaticCatalog, sample_catalog};
///
/// let catalog = FallbackCatalog::new(StaticCatalog::default(), sample_catalog());
/// assert_eq!(catalog.exhibits()?.len(), 8);
/// assert!(catalog.venue()?.is_some());
/// # Ok::<(), wayfarer_core::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FallbackCatalog<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackCatalog<P, F> {
    /// Pair a primary supplier with its fallback.
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: CatalogProvider, F: CatalogProvider> CatalogProvider for FallbackCatalog<P, F> {
    fn exhibits(&self) -> Result<Vec<PointOfInterest>, CatalogError> {
        let exhibits = self.primary.exhibits()?;
        if exhibits.is_empty() {
            warn!("primary catalog has no active exhibits; using fallback");
            return self.fallback.exhibits();
        }
        Ok(exhibits)
    }

    fn venue(&self) -> Result<Option<VenueTopology>, CatalogError> {
        match self.primary.venue()? {
            Some(venue) => Ok(Some(venue)),
            None => {
                warn!("primary catalog has no active venue layout; using fallback");
                self.fallback.venue()
            }
        }
    }
}

/// The `limit` most important exhibits, ties kept in catalog order.
///
/// # Examples
/// ```
/// use wayfarer_core::{popular_exhibits, sample_catalog};
///
/// let top = popular_exhibits(&sample_catalog(), 2)?;
/// let ids: Vec<_> = top.iter().map(|poi| poi.id.as_str()).collect();
/// assert_eq!(ids, ["001", "002"]);
/// # Ok::<(), wayfarer_core::CatalogError>(())
/// ```
pub fn popular_exhibits<P>(catalog: &P, limit: usize) -> Result<Vec<PointOfInterest>, CatalogError>
where
    P: CatalogProvider + ?Sized,
{
    let mut exhibits = catalog.exhibits()?;
    exhibits.sort_by_key(|poi| Reverse(poi.importance));
    exhibits.truncate(limit);
    Ok(exhibits)
}
