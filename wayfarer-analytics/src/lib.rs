//! Derived views over a planned [`Itinerary`].
//!
//! Everything here reads an itinerary and builds a fresh value from it:
//! distribution counts ([`route_statistics`]), a comfort score
//! ([`accessibility_score`]), export renderings ([`export`]) and a sharing
//! blurb ([`sharing_summary`]). [`analyse`] gathers the non-export views into
//! one [`RouteReport`].

#![forbid(unsafe_code)]

mod accessibility;
mod export;
mod sharing;
mod statistics;

use serde::{Deserialize, Serialize};
use wayfarer_core::Itinerary;

pub use accessibility::{
    AccessibilityLevel, AccessibilityReport, CHALLENGING_SUGGESTION, LONG_VISIT_SUGGESTION,
    MANY_STOPS_SUGGESTION, MAX_SCORE, accessibility_score,
};
pub use export::{ExportError, ExportFormat, export};
pub use sharing::{DEFAULT_HASHTAGS, HIGHLIGHT_COUNT, SharingSummary, sharing_summary};
pub use statistics::{RouteStatistics, UNCATEGORISED, UNKNOWN_PERIOD, route_statistics};

/// Statistics, accessibility and sharing text for one itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteReport {
    /// Distribution counts.
    pub statistics: RouteStatistics,
    /// Comfort score.
    pub accessibility: AccessibilityReport,
    /// Sharing blurb.
    pub sharing: SharingSummary,
}

/// Compute every analytics view for `itinerary`.
///
/// # Examples
/// ```
/// use wayfarer_analytics::analyse;
/// use wayfarer_core::Itinerary;
///
/// let report = analyse(&Itinerary::default(), "Lakeside Memorial");
/// assert_eq!(report.statistics.total_exhibits, 0);
/// assert_eq!(report.accessibility.score, 100);
/// ```
#[must_use]
pub fn analyse(itinerary: &Itinerary, venue_name: &str) -> RouteReport {
    RouteReport {
        statistics: route_statistics(itinerary),
        accessibility: accessibility_score(itinerary),
        sharing: sharing_summary(itinerary, venue_name),
    }
}
