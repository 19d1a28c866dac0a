//! Tests for the [`Router`] pipeline.

use rstest::{fixture, rstest};

use crate::{
    Disposition, OpFlags, RouteError, Router, RouterConfig, RouterConfigError, SlotCount,
    hash_slot, hash_slot_in,
};

#[fixture]
fn router() -> Router {
    Router::default()
}

#[rstest]
fn forwards_reads_with_slot(router: Router) {
    let decision = router.route(&["get", "foo"]).expect("valid");
    assert_eq!(decision.name(), "GET");
    assert_eq!(decision.flags(), OpFlags::NONE);
    assert_eq!(decision.disposition(), Disposition::Forward);
    assert_eq!(decision.key_index(), 1);
    assert_eq!(decision.slot(), Some(289));
}

#[rstest]
fn forwards_multi_key_commands_by_representative_key(router: Router) {
    let decision = router
        .route(&["evalsha", "sha", "2", "{tag}a", "{tag}b"])
        .expect("valid");
    assert_eq!(decision.key_index(), 3);
    assert_eq!(decision.slot(), Some(hash_slot(b"tag")));
}

#[rstest]
#[case::keys(&["KEYS", "*"])]
#[case::blpop(&["blpop", "queue", "0"])]
#[case::multi(&["MULTI"])]
#[case::migrate(&["MIGRATE", "host", "6379", "key", "0", "1000"])]
fn rejects_forbidden_commands_without_hashing(router: Router, #[case] command: &[&str]) {
    let decision = router.route(command).expect("valid");
    assert!(decision.is_rejected());
    assert!(decision.flags().is_not_allowed());
    assert_eq!(decision.slot(), None);
}

#[rstest]
fn forwards_keyless_commands_without_slot(router: Router) {
    let decision = router.route(&["PING"]).expect("valid");
    assert_eq!(decision.disposition(), Disposition::Forward);
    assert_eq!(decision.slot(), None);
}

#[rstest]
fn unknown_commands_are_routable(router: Router) {
    let decision = router.route(&["FOOBAR", "k"]).expect("valid");
    assert_eq!(decision.flags(), OpFlags::MAY_WRITE);
    assert_eq!(decision.disposition(), Disposition::Forward);
    assert_eq!(decision.slot(), Some(hash_slot(b"k")));
}

#[rstest]
fn propagates_validation_errors(router: Router) {
    let empty: [&str; 0] = [];
    assert_eq!(router.route(&empty), Err(RouteError::MalformedCommand));
    assert!(matches!(
        router.route(&[""]),
        Err(RouteError::NameLength { .. })
    ));
}

#[test]
fn honours_configured_limits() {
    let config = RouterConfig::new(16_384, 4).expect("valid config");
    let router = Router::new(config);
    let slots = SlotCount::new(16_384).expect("non-zero");

    let decision = router.route(&["SET", "foo", "bar"]).expect("valid");
    assert_eq!(decision.slot(), Some(hash_slot_in(b"foo", slots)));
    assert_eq!(
        router.route(&["HGETALL", "h"]),
        Err(RouteError::NameLength { length: 7, max: 4 })
    );
}

#[rstest]
#[case::zero_slots(0, 64, RouterConfigError::ZeroSlots)]
#[case::zero_length(1024, 0, RouterConfigError::ZeroNameLength)]
fn config_rejects_zero_values(
    #[case] slots: u32,
    #[case] max_name_length: usize,
    #[case] expected: RouterConfigError,
) {
    assert_eq!(RouterConfig::new(slots, max_name_length), Err(expected));
}

#[test]
fn decision_serializes_for_operators() {
    let decision = Router::default()
        .route(&["SET", "foo", "bar"])
        .expect("valid");
    let json = serde_json::to_value(&decision).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "SET",
            "flags": "write",
            "disposition": "forward",
            "key_index": 1,
            "slot": 289,
        })
    );
}
