//! Itineraries: the ordered result of planning a visit.
//!
//! An [`Itinerary`] is built once by a planner and then only ever replaced,
//! never edited in place. Enhancers consume one itinerary and hand back a new
//! value with extra recommendations attached.

use crate::PointOfInterest;

/// Coarse effort label derived from the number of stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Up to three stops.
    #[default]
    Simple,
    /// Four to six stops.
    Moderate,
    /// Seven or more stops.
    Challenging,
}

impl Difficulty {
    /// Classify a route by its stop count.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_stop_count(3), Difficulty::Simple);
    /// assert_eq!(Difficulty::from_stop_count(4), Difficulty::Moderate);
    /// assert_eq!(Difficulty::from_stop_count(7), Difficulty::Challenging);
    /// ```
    pub const fn from_stop_count(stops: usize) -> Self {
        match stops {
            0..=3 => Self::Simple,
            4..=6 => Self::Moderate,
            _ => Self::Challenging,
        }
    }

    /// Return the label as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Challenging => "challenging",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate figures for an itinerary.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Number of stops.
    pub total_exhibits: usize,
    /// Sum of dwell times in minutes. Walking is not included.
    pub estimated_time: u32,
    /// Straight-line length of entrance, stops and exit in venue units.
    pub total_distance: f64,
    /// Walking minutes for `total_distance` at the default pace.
    pub walking_minutes: u32,
    /// Effort label.
    pub difficulty: Difficulty,
}

/// An ordered visit plan with its summary and advice.
///
/// # Examples
/// ```
/// use wayfarer_core::{Itinerary, RouteSummary};
///
/// let itinerary = Itinerary::new(Vec::new(), RouteSummary::default(), Vec::new())
///     .with_recommendation("Start early");
/// assert!(itinerary.stops().is_empty());
/// assert_eq!(itinerary.recommendations(), ["Start early".to_string()]);
/// assert!(!itinerary.is_enhanced());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    stops: Vec<PointOfInterest>,
    summary: RouteSummary,
    recommendations: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    enhanced: bool,
}

impl Itinerary {
    /// Assemble an itinerary that has not been enhanced.
    pub fn new(
        stops: Vec<PointOfInterest>,
        summary: RouteSummary,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            stops,
            summary,
            recommendations,
            enhanced: false,
        }
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[PointOfInterest] {
        &self.stops
    }

    /// Aggregate figures.
    pub const fn summary(&self) -> &RouteSummary {
        &self.summary
    }

    /// Advice strings in the order they were added.
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Whether an [`Enhancer`](crate::Enhancer) has annotated this itinerary.
    pub const fn is_enhanced(&self) -> bool {
        self.enhanced
    }

    /// Append one recommendation.
    #[must_use]
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    /// Mark the itinerary as enhanced.
    #[must_use]
    pub const fn into_enhanced(mut self) -> Self {
        self.enhanced = true;
        self
    }

    /// Split into stops, summary and recommendations.
    pub fn into_parts(self) -> (Vec<PointOfInterest>, RouteSummary, Vec<String>) {
        (self.stops, self.summary, self.recommendations)
    }
}
