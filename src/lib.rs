//! Facade crate for the Wayfarer visit planner.
//!
//! This crate re-exports the core domain types and exposes the optimizer,
//! analytics and narrative layers behind feature flags.

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    AgeGroup, CatalogError, CatalogProvider, Difficulty, Enhancer, FallbackCatalog, GroupType,
    Importance, Itinerary, NormalizationPolicy, PhysicalAbility, PlanError, Planner,
    PointOfInterest, RawPreferences, RouteSummary, StaticCatalog, VenueTopology, VisitPurpose,
    VisitorProfile, normalize_preferences, popular_exhibits, sample_catalog,
};

#[cfg(feature = "store-sqlite")]
pub use wayfarer_core::{SqliteCatalog, SqliteCatalogError};

#[cfg(feature = "optimizer")]
pub use wayfarer_optimizer::{
    RouteOptimizer, RouteOptimizerConfig, VisitPeriod, optimize_route, reorder_for_time_of_day,
};

#[cfg(feature = "analytics")]
pub use wayfarer_analytics::{ExportFormat, RouteReport, analyse, export};

#[cfg(feature = "narrative")]
pub use wayfarer_narrative::{Audience, TemplateNarrator};
