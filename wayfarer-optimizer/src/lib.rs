//! Itinerary optimizer for Wayfarer.
//!
//! [`RouteOptimizer`] turns a catalog, a venue layout and a visitor profile
//! into an [`Itinerary`](wayfarer_core::Itinerary) in five stages, each working
//! on the previous stage's output:
//!
//! 1. interest filtering with a must-see fallback for narrow interests,
//! 2. greedy selection by importance within 80% of the time budget,
//! 3. a stop cap by physical ability,
//! 4. nearest-neighbour sequencing from the entrance,
//! 5. assembly of the summary and advice.
//!
//! Both greedy stages are deliberate heuristics. Neither selection nor
//! sequencing is optimal, and callers rely on their exact tie-break order.
//! The optimizer is total: odd input yields a short or empty itinerary, never
//! an error.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assembly;
mod capacity;
mod filter;
mod optimizer;
mod schedule;
mod selection;
mod sequence;

pub use assembly::{
    CORE_EXHIBITS_ADVICE, INTERACTIVE_ADVICE, LONG_ROUTE_STOPS, MID_ROUTE_REST_ADVICE,
    REST_STOP_ADVICE, SHORT_VISIT_MINUTES,
};
pub use optimizer::{RouteOptimizer, RouteOptimizerConfig, TieBreak, optimize_route};
pub use schedule::{INTERACTIVE_MARKERS, VisitPeriod, reorder_for_time_of_day};
