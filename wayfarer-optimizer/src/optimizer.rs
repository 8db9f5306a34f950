//! The five-stage route optimizer.

use log::debug;
use wayfarer_core::{
    CatalogProvider, DEFAULT_WALKING_SPEED_MPS, DistanceMetric, Importance, Itinerary, Metric,
    PlanError, Planner, PointOfInterest, VenueTopology, VisitorProfile,
};

use crate::{
    assembly::assemble, capacity::apply_capacity, filter::filter_by_interest,
    selection::select_within_budget, sequence::nearest_neighbour,
};

/// How nearest-neighbour sequencing settles equal distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The candidate met first in selection order wins.
    #[default]
    FirstSeen,
    /// The candidate with the smallest id wins.
    ById,
}

/// Tunables for [`RouteOptimizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptimizerConfig {
    /// Share of the time budget, in percent, that dwell time may use.
    pub buffer_percent: u32,
    /// Interest matches below this count trigger the must-see fallback.
    pub min_candidates: usize,
    /// Rank at or above which exhibits join the fallback.
    pub fallback_importance: Importance,
    /// Stop cap for visitors with low stamina.
    pub low_capacity: usize,
    /// Stop cap for visitors with medium stamina.
    pub medium_capacity: usize,
    /// Distance metric for sequencing and route length.
    pub metric: Metric,
    /// Sequencing tie-break policy.
    pub tie_break: TieBreak,
    /// Walking pace used for the summary's walking minutes.
    pub walking_speed_mps: f64,
}

impl Default for RouteOptimizerConfig {
    fn default() -> Self {
        Self {
            buffer_percent: 80,
            min_candidates: 3,
            fallback_importance: Importance::saturating(4),
            low_capacity: 5,
            medium_capacity: 7,
            metric: Metric::Euclidean,
            tie_break: TieBreak::FirstSeen,
            walking_speed_mps: DEFAULT_WALKING_SPEED_MPS,
        }
    }
}

/// Deterministic itinerary builder.
///
/// The optimizer holds only configuration. It never mutates its inputs and is
/// safe to share between threads.
///
/// # Examples
/// ```
/// use wayfarer_core::{CatalogProvider, VisitorProfile, sample_catalog};
/// use wayfarer_optimizer::RouteOptimizer;
///
/// let catalog = sample_catalog();
/// let venue = catalog.venue()?.expect("sample venue");
/// let itinerary = RouteOptimizer::default().optimize(
///     &catalog.exhibits()?,
///     &venue,
///     &VisitorProfile::new(90),
/// );
/// assert!(itinerary.summary().estimated_time <= 72);
/// # Ok::<(), wayfarer_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: RouteOptimizerConfig,
}

impl RouteOptimizer {
    /// Construct an optimizer with explicit configuration.
    #[must_use]
    pub const fn new(config: RouteOptimizerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RouteOptimizerConfig {
        &self.config
    }

    /// Build an itinerary using the configured metric.
    #[must_use]
    pub fn optimize(
        &self,
        catalog: &[PointOfInterest],
        venue: &VenueTopology,
        visitor: &VisitorProfile,
    ) -> Itinerary {
        self.optimize_with(&self.config.metric, catalog, venue, visitor)
    }

    /// Build an itinerary using a caller-supplied metric.
    #[must_use]
    pub fn optimize_with<M>(
        &self,
        metric: &M,
        catalog: &[PointOfInterest],
        venue: &VenueTopology,
        visitor: &VisitorProfile,
    ) -> Itinerary
    where
        M: DistanceMetric + ?Sized,
    {
        let config = &self.config;
        let candidates = filter_by_interest(
            catalog,
            &visitor.interests,
            config.min_candidates,
            config.fallback_importance,
        );
        let selected =
            select_within_budget(candidates, visitor.available_time, config.buffer_percent);
        let capped = apply_capacity(
            selected,
            visitor.physical_ability,
            config.low_capacity,
            config.medium_capacity,
        );
        let route = nearest_neighbour(venue.entrance, capped, metric, config.tie_break);
        let itinerary = assemble(route, venue, visitor, metric, config.walking_speed_mps);
        debug!(
            "planned {} stops, {} minutes, {:.2} units",
            itinerary.summary().total_exhibits,
            itinerary.summary().estimated_time,
            itinerary.summary().total_distance
        );
        itinerary
    }
}

impl Planner for RouteOptimizer {
    fn plan(
        &self,
        catalog: &dyn CatalogProvider,
        visitor: &VisitorProfile,
    ) -> Result<Itinerary, PlanError> {
        let venue = catalog.venue()?.ok_or(PlanError::MissingVenue)?;
        let exhibits = catalog.exhibits()?;
        Ok(self.optimize(&exhibits, &venue, visitor))
    }
}

/// Build an itinerary with the default configuration.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::{Difficulty, VenueTopology, VisitorProfile};
/// use wayfarer_optimizer::optimize_route;
///
/// let venue = VenueTopology::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 })?;
/// let itinerary = optimize_route(&[], &venue, &VisitorProfile::new(60));
///
/// assert_eq!(itinerary.summary().total_exhibits, 0);
/// assert!((itinerary.summary().total_distance - 5.0).abs() < 1e-9);
/// assert_eq!(itinerary.summary().difficulty, Difficulty::Simple);
/// # Ok::<(), wayfarer_core::CoordinateError>(())
/// ```
#[must_use]
pub fn optimize_route(
    catalog: &[PointOfInterest],
    venue: &VenueTopology,
    visitor: &VisitorProfile,
) -> Itinerary {
    RouteOptimizer::default().optimize(catalog, venue, visitor)
}
