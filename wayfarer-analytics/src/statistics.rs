//! Distribution counts over the stops of an itinerary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wayfarer_core::{Itinerary, PointOfInterest};

/// Label used for stops with a blank category.
pub const UNCATEGORISED: &str = "uncategorised";
/// Label used for stops with a blank period.
pub const UNKNOWN_PERIOD: &str = "unknown period";

/// Counts of stops grouped by importance, category and period.
///
/// Maps are ordered so serialised output is stable between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteStatistics {
    /// Number of stops.
    pub total_exhibits: usize,
    /// Sum of dwell times in minutes.
    pub total_duration: u32,
    /// Stops per importance rank.
    pub importance_distribution: BTreeMap<u8, usize>,
    /// Stops per category tag.
    pub category_distribution: BTreeMap<String, usize>,
    /// Stops per historical period tag.
    pub period_distribution: BTreeMap<String, usize>,
}

impl RouteStatistics {
    fn record(&mut self, poi: &PointOfInterest) {
        self.total_exhibits = self.total_exhibits.saturating_add(1);
        self.total_duration = self.total_duration.saturating_add(poi.visit_duration);
        bump(
            self.importance_distribution
                .entry(poi.importance.get())
                .or_default(),
        );
        bump(
            self.category_distribution
                .entry(label_or(&poi.category, UNCATEGORISED))
                .or_default(),
        );
        bump(
            self.period_distribution
                .entry(label_or(&poi.period, UNKNOWN_PERIOD))
                .or_default(),
        );
    }
}

const fn bump(count: &mut usize) {
    *count = count.saturating_add(1);
}

fn label_or(tag: &str, fallback: &str) -> String {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Summarise the stops of `itinerary`.
///
/// The itinerary is only read.
///
/// # Examples
/// ```
/// use wayfarer_analytics::route_statistics;
/// use wayfarer_core::{Itinerary, RouteSummary};
///
/// let stats = route_statistics(&Itinerary::new(Vec::new(), RouteSummary::default(), Vec::new()));
/// assert_eq!(stats.total_exhibits, 0);
/// assert!(stats.category_distribution.is_empty());
/// ```
#[must_use]
pub fn route_statistics(itinerary: &Itinerary) -> RouteStatistics {
    itinerary
        .stops()
        .iter()
        .fold(RouteStatistics::default(), |mut stats, poi| {
            stats.record(poi);
            stats
        })
}
