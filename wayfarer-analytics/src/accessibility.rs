//! Comfort score for a planned route.
//!
//! The score adds three banded components: stop count, dwell minutes and
//! difficulty. Each component that lands in its worst band also contributes a
//! suggestion for the visitor.

use serde::{Deserialize, Serialize};
use wayfarer_core::{Difficulty, Itinerary};

/// Highest possible score.
pub const MAX_SCORE: u8 = 100;

/// Suggestion attached when a route has many stops.
pub const MANY_STOPS_SUGGESTION: &str = "The route includes many exhibits; take breaks as needed.";
/// Suggestion attached when a route runs long.
pub const LONG_VISIT_SUGGESTION: &str = "The visit is long; stop at a rest area along the way.";
/// Suggestion attached to challenging routes.
pub const CHALLENGING_SUGGESTION: &str = "The route is demanding; go at a pace that suits you.";

/// Qualitative band for an accessibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessibilityLevel {
    /// Score of 80 or more.
    Excellent,
    /// Score from 60 to 79.
    Good,
    /// Anything lower.
    Fair,
}

impl AccessibilityLevel {
    /// Band a score.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_analytics::AccessibilityLevel;
    ///
    /// assert_eq!(AccessibilityLevel::from_score(80), AccessibilityLevel::Excellent);
    /// assert_eq!(AccessibilityLevel::from_score(79), AccessibilityLevel::Good);
    /// assert_eq!(AccessibilityLevel::from_score(59), AccessibilityLevel::Fair);
    /// ```
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            _ => Self::Fair,
        }
    }

    /// Return the label as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
        }
    }
}

impl std::fmt::Display for AccessibilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`accessibility_score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    /// Score in `0..=100`.
    pub score: u8,
    /// Band for `score`.
    pub level: AccessibilityLevel,
    /// Advice for each component in its worst band.
    pub suggestions: Vec<String>,
}

const fn stop_points(stops: usize) -> (u8, Option<&'static str>) {
    match stops {
        0..=5 => (30, None),
        6..=8 => (20, None),
        _ => (10, Some(MANY_STOPS_SUGGESTION)),
    }
}

const fn duration_points(minutes: u32) -> (u8, Option<&'static str>) {
    match minutes {
        0..=60 => (30, None),
        61..=90 => (20, None),
        _ => (10, Some(LONG_VISIT_SUGGESTION)),
    }
}

const fn difficulty_points(difficulty: Difficulty) -> (u8, Option<&'static str>) {
    match difficulty {
        Difficulty::Simple => (40, None),
        Difficulty::Moderate => (30, None),
        Difficulty::Challenging => (20, Some(CHALLENGING_SUGGESTION)),
    }
}

/// Score how comfortable `itinerary` is likely to be.
///
/// Stop count comes from the stops themselves; dwell minutes and difficulty
/// come from the summary.
///
/// # Examples
/// ```
/// use wayfarer_analytics::{AccessibilityLevel, accessibility_score};
/// use wayfarer_core::{Itinerary, RouteSummary};
///
/// let report = accessibility_score(&Itinerary::new(Vec::new(), RouteSummary::default(), Vec::new()));
/// assert_eq!(report.score, 100);
/// assert_eq!(report.level, AccessibilityLevel::Excellent);
/// ```
#[must_use]
pub fn accessibility_score(itinerary: &Itinerary) -> AccessibilityReport {
    let summary = itinerary.summary();
    let components = [
        stop_points(itinerary.stops().len()),
        duration_points(summary.estimated_time),
        difficulty_points(summary.difficulty),
    ];
    let score = components
        .iter()
        .fold(0_u8, |total, (points, _)| total.saturating_add(*points))
        .min(MAX_SCORE);
    let suggestions = components
        .iter()
        .filter_map(|(_, suggestion)| suggestion.map(str::to_owned))
        .collect();
    AccessibilityReport {
        score,
        level: AccessibilityLevel::from_score(score),
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use wayfarer_core::{RouteSummary, test_support::poi};

    fn route(stops: usize, minutes: u32, difficulty: Difficulty) -> Itinerary {
        let points = (0..stops)
            .map(|index| poi(&format!("{index:03}"), 3, 5, (0.0, 0.0)))
            .collect();
        let summary = RouteSummary {
            total_exhibits: stops,
            estimated_time: minutes,
            difficulty,
            ..RouteSummary::default()
        };
        Itinerary::new(points, summary, Vec::new())
    }

    #[rstest]
    fn four_short_simple_stops_score_full_marks() {
        let report = accessibility_score(&route(4, 50, Difficulty::Simple));
        assert_eq!(report.score, 100);
        assert_eq!(report.level, AccessibilityLevel::Excellent);
        assert!(report.suggestions.is_empty());
    }

    #[rstest]
    #[case(5, 60, Difficulty::Moderate, 90, AccessibilityLevel::Excellent)]
    #[case(6, 61, Difficulty::Moderate, 70, AccessibilityLevel::Good)]
    #[case(8, 90, Difficulty::Challenging, 60, AccessibilityLevel::Good)]
    #[case(9, 91, Difficulty::Challenging, 40, AccessibilityLevel::Fair)]
    fn bands_each_component(
        #[case] stops: usize,
        #[case] minutes: u32,
        #[case] difficulty: Difficulty,
        #[case] score: u8,
        #[case] level: AccessibilityLevel,
    ) {
        let report = accessibility_score(&route(stops, minutes, difficulty));
        assert_eq!(report.score, score);
        assert_eq!(report.level, level);
    }

    #[rstest]
    fn worst_bands_collect_every_suggestion() {
        let report = accessibility_score(&route(12, 150, Difficulty::Challenging));
        assert_eq!(
            report.suggestions,
            [
                MANY_STOPS_SUGGESTION,
                LONG_VISIT_SUGGESTION,
                CHALLENGING_SUGGESTION
            ]
        );
    }
}
