//! Core domain types for the Wayfarer itinerary engine.
//!
//! The crate defines the value types exchanged between the venue catalog,
//! the route optimizer and the downstream presentation layer:
//!
//! - [`PointOfInterest`] and [`VenueTopology`] describe what a venue offers.
//! - [`VisitorProfile`] captures one visitor's request after
//!   [`normalize_preferences`] has cleaned up raw input.
//! - [`Itinerary`] is the ordered result with its [`RouteSummary`].
//!
//! Constructors return `Result` so malformed data (non-finite coordinates,
//! out-of-range importance, zero dwell time) is rejected at the boundary and
//! never reaches the optimizer. The [`Planner`] and [`Enhancer`] traits are
//! the seams that concrete engines plug into.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod audience;
pub mod catalog;
pub mod geometry;
mod enhancer;
mod itinerary;
mod planner;
mod poi;
mod preferences;
mod profile;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod venue;

pub use audience::{AgeGroup, GroupType, PhysicalAbility, UnknownVariant, VisitPurpose};
pub use catalog::{
    CatalogError, CatalogProvider, FallbackCatalog, StaticCatalog, popular_exhibits,
    sample_catalog,
};
#[cfg(feature = "store-sqlite")]
pub use catalog::{SqliteCatalog, SqliteCatalogError};
pub use enhancer::Enhancer;
pub use geometry::{
    CoordinateError, DEFAULT_WALKING_SPEED_MPS, DistanceMetric, Metric, distance,
    estimate_walking_time, manhattan_distance,
};
pub use itinerary::{Difficulty, Itinerary, RouteSummary};
pub use planner::{PlanError, Planner};
pub use poi::{Importance, PointOfInterest, PointOfInterestError};
pub use preferences::{NormalizationPolicy, RawPreferences, normalize_preferences};
pub use profile::VisitorProfile;
pub use venue::VenueTopology;
