//! Behavioural tests for raw request normalisation.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfarer_core::{AgeGroup, PhysicalAbility, RawPreferences, VisitorProfile};

#[derive(Default)]
struct PreferencesWorld {
    raw: RefCell<RawPreferences>,
    profile: RefCell<Option<VisitorProfile>>,
}

#[fixture]
fn world() -> PreferencesWorld {
    PreferencesWorld::default()
}

fn profile(world: &PreferencesWorld) -> VisitorProfile {
    world
        .profile
        .borrow()
        .clone()
        .expect("request should be normalised first")
}

#[given("a request with no fields")]
fn given_empty(world: &PreferencesWorld) {
    world.raw.replace(RawPreferences::default());
}

#[given("a request for a {age} visitor with {minutes} minutes")]
fn given_request(world: &PreferencesWorld, age: String, minutes: i64) {
    world.raw.replace(RawPreferences {
        age_group: Some(age.trim_matches('"').to_owned()),
        available_time: Some(minutes),
        ..RawPreferences::default()
    });
}

#[when("I normalise the request")]
fn when_normalise(world: &PreferencesWorld) {
    let profile = world.raw.borrow().normalize();
    world.profile.replace(Some(profile));
}

#[then("the visitor is an adult with medium ability")]
fn then_defaults(world: &PreferencesWorld) {
    let profile = profile(world);
    assert_eq!(profile.age_group, AgeGroup::Adult);
    assert_eq!(profile.physical_ability, PhysicalAbility::Medium);
}

#[then("the visitor is a child")]
fn then_child(world: &PreferencesWorld) {
    assert_eq!(profile(world).age_group, AgeGroup::Child);
}

#[then("the time budget is {minutes} minutes")]
fn then_budget(world: &PreferencesWorld, minutes: u32) {
    assert_eq!(profile(world).available_time, minutes);
}

#[scenario(path = "tests/features/preferences.feature", index = 0)]
fn missing_fields(world: PreferencesWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/preferences.feature", index = 1)]
fn unknown_bands(world: PreferencesWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/preferences.feature", index = 2)]
fn recognised_bands(world: PreferencesWorld) {
    let _ = world;
}
