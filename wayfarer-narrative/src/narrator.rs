//! Static-template stand-in for a text-generation backend.

use log::debug;
use wayfarer_core::{Enhancer, Itinerary, PointOfInterest};

use crate::Audience;

/// Advice appended when the itinerary has no stops to point at.
pub const GENERIC_LINGER_ADVICE: &str =
    "Based on your interests, linger a little longer at the exhibits that catch your eye.";

/// Template-driven narrator.
///
/// Produces the same text for the same input, which keeps enhanced
/// itineraries reproducible in tests.
///
/// # Examples
/// ```
/// use wayfarer_core::{Enhancer, Itinerary};
/// use wayfarer_narrative::TemplateNarrator;
///
/// let enhanced = TemplateNarrator::new().enhance(Itinerary::default());
/// assert!(enhanced.is_enhanced());
/// assert_eq!(enhanced.recommendations().len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    /// Create a narrator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Describe `poi` for `audience`.
    ///
    /// [`Audience::General`] gets the exhibit's own description.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use wayfarer_core::PointOfInterest;
    /// use wayfarer_narrative::{Audience, TemplateNarrator};
    ///
    /// let poi = PointOfInterest::new("001", "Founding hall", Coord { x: 0.0, y: 0.0 }, 5, 15)?
    ///     .with_description("Where the first meeting was held.");
    ///
    /// assert!(TemplateNarrator::describe(&poi, Audience::Child).starts_with("Hey there"));
    /// assert_eq!(TemplateNarrator::describe(&poi, Audience::General), poi.description);
    /// # Ok::<(), wayfarer_core::PointOfInterestError>(())
    /// ```
    #[must_use]
    pub fn describe(poi: &PointOfInterest, audience: Audience) -> String {
        let name = &poi.name;
        match audience {
            Audience::Child => format!("Hey there! {name} is a very special place..."),
            Audience::Adult => format!("{name} carries real historical weight..."),
            Audience::Researcher => format!("From a scholarly point of view, {name}..."),
            Audience::General => poi.description.clone(),
        }
    }

    /// Advice pointing at the most important stop, first one on ties.
    fn linger_advice(stops: &[PointOfInterest]) -> String {
        stops
            .iter()
            .rev()
            .max_by_key(|poi| poi.importance)
            .map_or_else(
                || GENERIC_LINGER_ADVICE.to_owned(),
                |poi| {
                    format!(
                        "Based on your interests, linger a little longer at {}.",
                        poi.name
                    )
                },
            )
    }
}

impl Enhancer for TemplateNarrator {
    fn enhance(&self, itinerary: Itinerary) -> Itinerary {
        let advice = Self::linger_advice(itinerary.stops());
        debug!(
            "template narrator annotating itinerary with {} stops",
            itinerary.stops().len()
        );
        itinerary.with_recommendation(advice).into_enhanced()
    }
}
