//! Itinerary assembly: summary figures and rule-based advice.

use std::iter;

use wayfarer_core::{
    AgeGroup, Difficulty, DistanceMetric, GroupType, Itinerary, PointOfInterest, RouteSummary,
    VenueTopology, VisitorProfile, estimate_walking_time, geometry::path_length,
};

/// Advice for visitors under twelve.
pub const INTERACTIVE_ADVICE: &str =
    "Spend extra time in the interactive zones to keep the visit engaging.";
/// Advice for families.
pub const REST_STOP_ADVICE: &str =
    "Pause at the rest areas along the way so every member of the party keeps pace.";
/// Advice for routes with more than [`LONG_ROUTE_STOPS`] stops.
pub const MID_ROUTE_REST_ADVICE: &str =
    "This is a long route; take a short break at a rest area midway.";
/// Advice for budgets under [`SHORT_VISIT_MINUTES`].
pub const CORE_EXHIBITS_ADVICE: &str = "Time is tight; concentrate on the core exhibits.";

/// Routes with more stops than this get the mid-route rest advice.
pub const LONG_ROUTE_STOPS: usize = 6;
/// Budgets below this many minutes get the core-exhibit advice.
pub const SHORT_VISIT_MINUTES: u32 = 60;

pub(crate) fn assemble<M>(
    route: Vec<PointOfInterest>,
    venue: &VenueTopology,
    visitor: &VisitorProfile,
    metric: &M,
    walking_speed_mps: f64,
) -> Itinerary
where
    M: DistanceMetric + ?Sized,
{
    let estimated_time = route
        .iter()
        .fold(0_u32, |total, poi| total.saturating_add(poi.visit_duration));
    let path = iter::once(venue.entrance)
        .chain(route.iter().map(|poi| poi.location))
        .chain(iter::once(venue.exit));
    let total_distance = path_length(metric, path);

    let summary = RouteSummary {
        total_exhibits: route.len(),
        estimated_time,
        total_distance,
        walking_minutes: estimate_walking_time(total_distance, walking_speed_mps),
        difficulty: Difficulty::from_stop_count(route.len()),
    };
    let recommendations = recommendations(visitor, route.len());
    Itinerary::new(route, summary, recommendations)
}

/// Independent advice rules; any subset may fire, in a fixed order.
pub(crate) fn recommendations(visitor: &VisitorProfile, stops: usize) -> Vec<String> {
    [
        (visitor.age_group == AgeGroup::Child, INTERACTIVE_ADVICE),
        (visitor.group_type == GroupType::Family, REST_STOP_ADVICE),
        (stops > LONG_ROUTE_STOPS, MID_ROUTE_REST_ADVICE),
        (
            visitor.available_time < SHORT_VISIT_MINUTES,
            CORE_EXHIBITS_ADVICE,
        ),
    ]
    .into_iter()
    .filter(|(fires, _)| *fires)
    .map(|(_, advice)| advice.to_owned())
    .collect()
}
