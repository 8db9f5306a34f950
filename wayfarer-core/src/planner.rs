use thiserror::Error;

use crate::{CatalogError, CatalogProvider, Itinerary, VisitorProfile};

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Error)]
pub enum PlanError {
    /// The catalog supplier failed.
    #[error("catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
    /// The catalog supplier had no active venue layout.
    #[error("catalog has no active venue layout")]
    MissingVenue,
}

/// Produce an itinerary for a visitor from a catalog supplier.
///
/// Route construction itself never fails; errors come only from the
/// supplier. Planners must be `Send + Sync` so one instance can serve
/// concurrent requests against the same catalog.
///
/// # Examples
/// ```
/// use wayfarer_core::{
///     CatalogProvider, Itinerary, PlanError, Planner, RouteSummary, StaticCatalog,
///     VisitorProfile,
/// };
///
/// struct EmptyPlanner;
///
/// impl Planner for EmptyPlanner {
///     fn plan(
///         &self,
///         catalog: &dyn CatalogProvider,
///         _visitor: &VisitorProfile,
///     ) -> Result<Itinerary, PlanError> {
///         catalog.venue()?.ok_or(PlanError::MissingVenue)?;
///         Ok(Itinerary::new(Vec::new(), RouteSummary::default(), Vec::new()))
///     }
/// }
///
/// let result = EmptyPlanner.plan(&StaticCatalog::default(), &VisitorProfile::new(60));
/// assert!(matches!(result, Err(PlanError::MissingVenue)));
/// ```
pub trait Planner: Send + Sync {
    /// Plan a visit using the supplier's exhibits and venue.
    fn plan(
        &self,
        catalog: &dyn CatalogProvider,
        visitor: &VisitorProfile,
    ) -> Result<Itinerary, PlanError>;
}
