//! Property-based tests for the route optimizer.
//!
//! # Invariants tested
//!
//! - **Capacity:** stop count never exceeds the cap for the visitor's stamina.
//! - **Budget:** dwell time never exceeds 80% of the available time.
//! - **Permutation:** every stop comes from the catalog and appears once.
//! - **Completeness:** when nothing is filtered or capped, every exhibit is
//!   visited.
//! - **Summary:** counts, dwell time and difficulty agree with the stops.
//! - **Determinism:** identical inputs give identical itineraries.

mod proptest_support;

use std::collections::HashSet;

use proptest::prelude::*;
use wayfarer_core::{
    Difficulty, PhysicalAbility, PointOfInterest, VisitorProfile, test_support::venue,
};
use wayfarer_optimizer::{RouteOptimizer, RouteOptimizerConfig, TieBreak, optimize_route};

use proptest_support::{capacity_cap, catalog_strategy, visitor_strategy};

fn plan(catalog: &[PointOfInterest], visitor: &VisitorProfile) -> wayfarer_core::Itinerary {
    optimize_route(catalog, &venue((0.0, 0.0), (50.0, 40.0)), visitor)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn stop_count_respects_capacity(
        catalog in catalog_strategy(0, 25),
        visitor in visitor_strategy(),
    ) {
        let itinerary = plan(&catalog, &visitor);
        prop_assert!(itinerary.stops().len() <= capacity_cap(visitor.physical_ability));
    }

    #[test]
    fn dwell_time_respects_budget(
        catalog in catalog_strategy(0, 25),
        visitor in visitor_strategy(),
    ) {
        let itinerary = plan(&catalog, &visitor);
        let dwell = u64::from(itinerary.summary().estimated_time);
        prop_assert!(dwell * 100 <= u64::from(visitor.available_time) * 80);
    }

    #[test]
    fn stops_are_unique_catalog_members(
        catalog in catalog_strategy(0, 25),
        visitor in visitor_strategy(),
    ) {
        let itinerary = plan(&catalog, &visitor);
        let known: HashSet<&str> = catalog.iter().map(|poi| poi.id.as_str()).collect();
        let mut seen = HashSet::new();
        for stop in itinerary.stops() {
            prop_assert!(known.contains(stop.id.as_str()));
            prop_assert!(seen.insert(stop.id.as_str()), "{} visited twice", stop.id);
        }
    }

    #[test]
    fn unconstrained_routes_visit_every_exhibit(catalog in catalog_strategy(0, 6)) {
        let dwell: u64 = catalog.iter().map(|poi| u64::from(poi.visit_duration)).sum();
        prop_assume!(dwell * 100 <= 300 * 80);
        let visitor = VisitorProfile::new(300).with_physical_ability(PhysicalAbility::High);
        let itinerary = plan(&catalog, &visitor);

        let mut expected: Vec<_> = catalog.iter().map(|poi| poi.id.clone()).collect();
        let mut visited: Vec<_> = itinerary.stops().iter().map(|poi| poi.id.clone()).collect();
        expected.sort();
        visited.sort();
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn summary_agrees_with_stops(
        catalog in catalog_strategy(0, 25),
        visitor in visitor_strategy(),
    ) {
        let itinerary = plan(&catalog, &visitor);
        let summary = itinerary.summary();
        let dwell: u32 = itinerary.stops().iter().map(|poi| poi.visit_duration).sum();
        prop_assert_eq!(summary.total_exhibits, itinerary.stops().len());
        prop_assert_eq!(summary.estimated_time, dwell);
        prop_assert_eq!(summary.difficulty, Difficulty::from_stop_count(itinerary.stops().len()));
        prop_assert!(summary.total_distance >= 64.0);
    }

    #[test]
    fn optimisation_is_deterministic(
        catalog in catalog_strategy(0, 25),
        visitor in visitor_strategy(),
    ) {
        let optimizer = RouteOptimizer::new(RouteOptimizerConfig {
            tie_break: TieBreak::ById,
            ..RouteOptimizerConfig::default()
        });
        let site = venue((0.0, 0.0), (50.0, 40.0));
        let first = optimizer.optimize(&catalog, &site, &visitor);
        let second = optimizer.optimize(&catalog, &site, &visitor);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tie_break_does_not_change_the_stop_set(
        catalog in catalog_strategy(0, 25),
        visitor in visitor_strategy(),
    ) {
        let by_id = RouteOptimizer::new(RouteOptimizerConfig {
            tie_break: TieBreak::ById,
            ..RouteOptimizerConfig::default()
        });
        let site = venue((0.0, 0.0), (50.0, 40.0));
        let mut first: Vec<_> = plan(&catalog, &visitor)
            .stops()
            .iter()
            .map(|poi| poi.id.clone())
            .collect();
        let mut second: Vec<_> = by_id
            .optimize(&catalog, &site, &visitor)
            .stops()
            .iter()
            .map(|poi| poi.id.clone())
            .collect();
        first.sort();
        second.sort();
        prop_assert_eq!(first, second);
    }
}
