//! Behaviour-driven tests for the routing pipeline.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{RouteDecision, RouteError, Router, hash_slot};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    router: Router,
    command: Vec<String>,
    decision: Option<RouteDecision>,
    error: Option<RouteError>,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("the command line {line}")]
fn given_command(world: &mut TestWorld, line: QuotedString) {
    world.command = line
        .as_str()
        .split_whitespace()
        .map(str::to_owned)
        .collect();
}

#[given("an empty command")]
fn given_empty_command(world: &mut TestWorld) {
    world.command.clear();
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the command is routed")]
fn when_routed(world: &mut TestWorld) {
    match world.router.route(&world.command) {
        Ok(decision) => world.decision = Some(decision),
        Err(error) => world.error = Some(error),
    }
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

fn decision(world: &TestWorld) -> &RouteDecision {
    if let Some(error) = world.error.as_ref() {
        panic!("routing failed: {error}");
    }
    world.decision.as_ref().expect("decision should be set")
}

#[then("the canonical name is {name}")]
fn then_canonical_name(world: &mut TestWorld, name: QuotedString) {
    assert_eq!(decision(world).name(), name.as_str());
}

#[then("the flags are {flags}")]
fn then_flags(world: &mut TestWorld, flags: QuotedString) {
    assert_eq!(decision(world).flags().to_string(), flags.as_str());
}

#[then("the command is forwarded to the slot of {key}")]
fn then_forwarded_to(world: &mut TestWorld, key: QuotedString) {
    let decision = decision(world);
    assert!(!decision.is_rejected(), "expected forward, got {decision:?}");
    assert_eq!(decision.slot(), Some(hash_slot(key.as_str().as_bytes())));
}

#[then("the command is forwarded without a slot")]
fn then_forwarded_without_slot(world: &mut TestWorld) {
    let decision = decision(world);
    assert!(!decision.is_rejected(), "expected forward, got {decision:?}");
    assert_eq!(decision.slot(), None);
}

#[then("the command is rejected")]
fn then_rejected(world: &mut TestWorld) {
    let decision = decision(world);
    assert!(decision.is_rejected(), "expected reject, got {decision:?}");
    assert_eq!(decision.slot(), None);
}

#[then("routing fails with {message}")]
fn then_fails(world: &mut TestWorld, message: QuotedString) {
    let error = world.error.as_ref().expect("error should be set");
    let rendered = error.to_string();
    assert!(
        rendered.contains(message.as_str()),
        "expected error to contain '{}', got: {rendered}",
        message.as_str()
    );
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(path = "tests/features/routing.feature")]
fn routing_behaviour(world: TestWorld) {
    let _ = world;
}
