//! Behavioural tests for the analytics views using rstest-bdd.
#![expect(clippy::expect_used, reason = "tests require contextual panics")]

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfarer_analytics::{CHALLENGING_SUGGESTION, RouteReport, analyse};
use wayfarer_core::{Itinerary, PhysicalAbility, VisitorProfile, sample_catalog};
use wayfarer_optimizer::optimize_route;

#[derive(Default)]
struct AnalyticsWorld {
    itinerary: RefCell<Itinerary>,
    venue_name: RefCell<String>,
    report: RefCell<Option<RouteReport>>,
}

impl AnalyticsWorld {
    fn plan(&self, visitor: &VisitorProfile) {
        let catalog = sample_catalog();
        let venue = catalog.venue.expect("sample venue");
        self.itinerary
            .replace(optimize_route(&catalog.exhibits, &venue, visitor));
    }

    fn report(&self) -> RouteReport {
        self.report
            .borrow()
            .clone()
            .expect("the route should be analysed first")
    }
}

#[fixture]
fn world() -> AnalyticsWorld {
    AnalyticsWorld::default()
}

fn unquote(text: &str) -> &str {
    text.trim_matches('"')
}

#[given("the sample memorial route for visitors interested in {interest} with {minutes} minutes")]
fn given_interest_route(world: &AnalyticsWorld, interest: String, minutes: u32) {
    world.plan(&VisitorProfile::new(minutes).with_interest(unquote(&interest)));
}

#[given("a high-stamina sample memorial route of {minutes} minutes")]
fn given_high_stamina_route(world: &AnalyticsWorld, minutes: u32) {
    world.plan(&VisitorProfile::new(minutes).with_physical_ability(PhysicalAbility::High));
}

#[when("I analyse the route")]
fn when_analyse(world: &AnalyticsWorld) {
    world.venue_name.replace("Lakeside Memorial".to_owned());
    let report = analyse(&world.itinerary.borrow(), &world.venue_name.borrow());
    world.report.replace(Some(report));
}

#[then("the accessibility score is {score}")]
fn then_score(world: &AnalyticsWorld, score: u8) {
    assert_eq!(world.report().accessibility.score, score);
}

#[then("the accessibility level is {level}")]
fn then_level(world: &AnalyticsWorld, level: String) {
    assert_eq!(world.report().accessibility.level.as_str(), unquote(&level));
}

#[then("the route has {count} exhibits worth {minutes} minutes")]
fn then_totals(world: &AnalyticsWorld, count: usize, minutes: u32) {
    let statistics = world.report().statistics;
    assert_eq!(statistics.total_exhibits, count);
    assert_eq!(statistics.total_duration, minutes);
    assert_eq!(statistics.importance_distribution.values().sum::<usize>(), count);
}

#[then("a suggestion warns that the route is demanding")]
fn then_demanding(world: &AnalyticsWorld) {
    assert!(
        world
            .report()
            .accessibility
            .suggestions
            .iter()
            .any(|text| text == CHALLENGING_SUGGESTION)
    );
}

#[then("the sharing title names {venue}")]
fn then_title(world: &AnalyticsWorld, venue: String) {
    assert!(world.report().sharing.title.contains(unquote(&venue)));
}

#[then("the highlights name {count} exhibits")]
fn then_highlights(world: &AnalyticsWorld, count: usize) {
    let highlights = world.report().sharing.highlights.expect("route has stops");
    assert_eq!(highlights.split(", ").count(), count);
}

#[scenario(path = "tests/features/analytics.feature", index = 0)]
fn comfortable_route(world: AnalyticsWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/analytics.feature", index = 1)]
fn demanding_route(world: AnalyticsWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/analytics.feature", index = 2)]
fn sharing_text(world: AnalyticsWorld) {
    let _ = world;
}
