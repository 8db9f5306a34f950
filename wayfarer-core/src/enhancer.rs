use crate::Itinerary;

/// Post-processing step that annotates a finished itinerary.
///
/// Implementations take ownership and return a new value with their
/// annotations appended and [`Itinerary::is_enhanced`] set. A text-generation
/// backend can sit behind this trait without the planner knowing.
///
/// # Examples
/// ```
/// use wayfarer_core::{Enhancer, Itinerary, RouteSummary};
///
/// struct Cheer;
///
/// impl Enhancer for Cheer {
///     fn enhance(&self, itinerary: Itinerary) -> Itinerary {
///         itinerary.with_recommendation("Enjoy the visit").into_enhanced()
///     }
/// }
///
/// let plain = Itinerary::new(Vec::new(), RouteSummary::default(), Vec::new());
/// let enhanced = Cheer.enhance(plain);
/// assert!(enhanced.is_enhanced());
/// assert_eq!(enhanced.recommendations().len(), 1);
/// ```
pub trait Enhancer: Send + Sync {
    /// Annotate `itinerary`.
    fn enhance(&self, itinerary: Itinerary) -> Itinerary;
}
