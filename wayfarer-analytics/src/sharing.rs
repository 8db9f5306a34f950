//! Short blurb for posting a planned route.

use serde::{Deserialize, Serialize};
use wayfarer_core::Itinerary;

/// Number of stop names quoted as highlights.
pub const HIGHLIGHT_COUNT: usize = 3;

/// Hashtags attached to every shared route.
pub const DEFAULT_HASHTAGS: [&str; 3] = ["#museum", "#heritagewalk", "#routeplanning"];

/// Text for a social post about an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharingSummary {
    /// Headline naming the venue.
    pub title: String,
    /// One sentence with the stop count and highlights.
    pub description: String,
    /// Names of the first stops joined with commas; absent for empty routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<String>,
    /// Tags to append to the post.
    pub hashtags: Vec<String>,
}

/// Build a sharing blurb for `itinerary` at `venue_name`.
///
/// # Examples
/// ```
/// use wayfarer_analytics::sharing_summary;
/// use wayfarer_core::{Itinerary, RouteSummary};
///
/// let summary = sharing_summary(
///     &Itinerary::new(Vec::new(), RouteSummary::default(), Vec::new()),
///     "Lakeside Memorial",
/// );
/// assert_eq!(summary.title, "My route through Lakeside Memorial");
/// assert!(summary.highlights.is_none());
/// ```
#[must_use]
pub fn sharing_summary(itinerary: &Itinerary, venue_name: &str) -> SharingSummary {
    let count = itinerary.summary().total_exhibits;
    let highlights = (!itinerary.stops().is_empty()).then(|| {
        itinerary
            .stops()
            .iter()
            .take(HIGHLIGHT_COUNT)
            .map(|poi| poi.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    });
    let mut description = format!("A planned route covering {count} exhibits");
    if let Some(names) = &highlights {
        description.push_str(", featuring ");
        description.push_str(names);
    }
    description.push('.');

    SharingSummary {
        title: format!("My route through {venue_name}"),
        description,
        highlights,
        hashtags: DEFAULT_HASHTAGS.iter().map(|&tag| tag.to_owned()).collect(),
    }
}
