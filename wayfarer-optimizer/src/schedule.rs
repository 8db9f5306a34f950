//! Time-of-day reordering of an exhibit list.
//!
//! This is an advisory pass over an existing list, for example an itinerary's
//! stops. It is not part of route optimisation.

use std::cmp::Reverse;

use wayfarer_core::{Importance, PointOfInterest};

/// Category fragments that mark hands-on exhibits.
pub const INTERACTIVE_MARKERS: [&str; 2] = ["互动", "interactive"];

/// Exhibits kept beyond the must-see ones in the evening.
const EVENING_EXTRAS: usize = 3;

const EVENING_IMPORTANCE: Importance = Importance::saturating(4);

/// Part of the day a visit starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitPeriod {
    /// 09:00 until 11:00.
    Morning,
    /// 11:00 until 13:00.
    Midday,
    /// 13:00 until 16:00.
    Afternoon,
    /// Any other hour.
    Evening,
}

impl VisitPeriod {
    /// Classify a 24-hour clock hour.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_optimizer::VisitPeriod;
    ///
    /// assert_eq!(VisitPeriod::from_hour(9), VisitPeriod::Morning);
    /// assert_eq!(VisitPeriod::from_hour(12), VisitPeriod::Midday);
    /// assert_eq!(VisitPeriod::from_hour(8), VisitPeriod::Evening);
    /// ```
    #[must_use]
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            9..=10 => Self::Morning,
            11..=12 => Self::Midday,
            13..=15 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Return the period as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

impl std::fmt::Display for VisitPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reorder `points` to suit the hour of day.
///
/// - Morning: most important first.
/// - Midday: interactive exhibits first.
/// - Afternoon: unchanged.
/// - Evening: exhibits ranked 4 or 5, then at most three others.
///
/// Every reordering is stable.
///
/// # Examples
/// ```
/// use wayfarer_core::sample_catalog;
/// use wayfarer_optimizer::reorder_for_time_of_day;
///
/// let exhibits = sample_catalog().exhibits;
/// let midday = reorder_for_time_of_day(&exhibits, 12);
/// assert_eq!(midday.first().map(|poi| poi.id.as_str()), Some("008"));
/// ```
#[must_use]
pub fn reorder_for_time_of_day(points: &[PointOfInterest], hour: u8) -> Vec<PointOfInterest> {
    match VisitPeriod::from_hour(hour) {
        VisitPeriod::Morning => {
            let mut ordered = points.to_vec();
            ordered.sort_by_key(|poi| Reverse(poi.importance));
            ordered
        }
        VisitPeriod::Midday => {
            let (interactive, others): (Vec<_>, Vec<_>) =
                points.iter().cloned().partition(is_interactive);
            interactive.into_iter().chain(others).collect()
        }
        VisitPeriod::Afternoon => points.to_vec(),
        VisitPeriod::Evening => {
            let (must_see, others): (Vec<_>, Vec<_>) = points
                .iter()
                .cloned()
                .partition(|poi| poi.importance >= EVENING_IMPORTANCE);
            must_see
                .into_iter()
                .chain(others.into_iter().take(EVENING_EXTRAS))
                .collect()
        }
    }
}

fn is_interactive(poi: &PointOfInterest) -> bool {
    let category = poi.category.to_lowercase();
    INTERACTIVE_MARKERS
        .iter()
        .any(|marker| category.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use wayfarer_core::test_support::poi;

    #[fixture]
    fn exhibits() -> Vec<PointOfInterest> {
        vec![
            poi("a", 3, 5, (0.0, 0.0)),
            poi("b", 5, 5, (0.0, 0.0)),
            poi("c", 2, 5, (0.0, 0.0)).with_category("Interactive lab"),
            poi("d", 4, 5, (0.0, 0.0)),
            poi("e", 1, 5, (0.0, 0.0)),
            poi("f", 2, 5, (0.0, 0.0)),
            poi("g", 3, 5, (0.0, 0.0)),
        ]
    }

    fn ids(pois: &[PointOfInterest]) -> Vec<&str> {
        pois.iter().map(|poi| poi.id.as_str()).collect()
    }

    #[rstest]
    #[case(9, vec!["b", "d", "a", "g", "c", "f", "e"])]
    #[case(12, vec!["c", "a", "b", "d", "e", "f", "g"])]
    #[case(14, vec!["a", "b", "c", "d", "e", "f", "g"])]
    #[case(18, vec!["b", "d", "a", "c", "e"])]
    #[case(7, vec!["b", "d", "a", "c", "e"])]
    fn reorders_by_period(
        exhibits: Vec<PointOfInterest>,
        #[case] hour: u8,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(ids(&reorder_for_time_of_day(&exhibits, hour)), expected);
    }

    #[rstest]
    #[case(10, VisitPeriod::Morning)]
    #[case(11, VisitPeriod::Midday)]
    #[case(13, VisitPeriod::Afternoon)]
    #[case(16, VisitPeriod::Evening)]
    #[case(0, VisitPeriod::Evening)]
    fn period_boundaries(#[case] hour: u8, #[case] expected: VisitPeriod) {
        assert_eq!(VisitPeriod::from_hour(hour), expected);
    }
}
