//! Proptest strategies for optimizer property tests.

use geo::Coord;
use proptest::prelude::*;
use wayfarer_core::{Importance, PhysicalAbility, PointOfInterest, VisitorProfile};

/// Category tags drawn on by generated exhibits and interests.
pub const CATEGORIES: [&str; 4] = ["relics", "photographs", "calligraphy", "interactive"];

/// Strategy for one exhibit with a placeholder id.
fn poi_strategy() -> impl Strategy<Value = PointOfInterest> {
    (
        -100.0_f64..100.0_f64,
        -100.0_f64..100.0_f64,
        1_u8..=5_u8,
        1_u32..=60_u32,
        proptest::sample::select(CATEGORIES.to_vec()),
    )
        .prop_map(|(x, y, importance, visit_duration, category)| PointOfInterest {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            location: Coord { x, y },
            importance: Importance::saturating(importance),
            visit_duration,
            category: category.to_owned(),
            period: String::new(),
        })
}

/// Strategy for catalogs of `min..=max` exhibits with unique ids.
pub fn catalog_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<PointOfInterest>> {
    proptest::collection::vec(poi_strategy(), min..=max).prop_map(|pois| {
        pois.into_iter()
            .enumerate()
            .map(|(index, mut poi)| {
                poi.id = format!("{index:03}");
                poi.name = format!("Exhibit {index}");
                poi
            })
            .collect()
    })
}

/// Strategy for normalised visitor profiles.
pub fn visitor_strategy() -> impl Strategy<Value = VisitorProfile> {
    (
        30_u32..=300_u32,
        proptest::sample::select(PhysicalAbility::ALL.to_vec()),
        proptest::sample::subsequence(CATEGORIES.to_vec(), 0..=2),
    )
        .prop_map(|(minutes, ability, interests)| {
            VisitorProfile::new(minutes)
                .with_physical_ability(ability)
                .with_interests(interests)
        })
}

/// Largest stop count allowed for `ability` under the default configuration.
#[must_use]
pub const fn capacity_cap(ability: PhysicalAbility) -> usize {
    match ability {
        PhysicalAbility::Low => 5,
        PhysicalAbility::Medium => 7,
        PhysicalAbility::High => usize::MAX,
    }
}
