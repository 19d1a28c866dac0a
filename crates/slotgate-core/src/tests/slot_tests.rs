//! Tests for hash tags and slot hashing.

use rstest::rstest;

use crate::{MAX_SLOT_NUM, SlotCount, hash_slot, hash_slot_in, hash_tag};

#[test]
fn checksum_is_crc32_ieee() {
    assert_eq!(crc32fast::hash(b"123456789"), 0xCBF4_3926);
    assert_eq!(hash_slot(b"123456789"), 0xCBF4_3926 % MAX_SLOT_NUM);
}

#[rstest]
#[case::foo("foo", 289)]
#[case::bar("bar", 170)]
#[case::user("user1000", 870)]
#[case::key("key1", 80)]
#[case::empty("", 0)]
fn reference_slots(#[case] key: &str, #[case] slot: u32) {
    assert_eq!(hash_slot(key.as_bytes()), slot);
}

#[test]
fn tagged_keys_share_a_slot() {
    let following = hash_slot(b"{user1000}.following");
    let followers = hash_slot(b"{user1000}.followers");
    assert_eq!(following, followers);
    assert_eq!(following, hash_slot(b"user1000"));
}

#[rstest]
#[case::whole_key("plain", "plain")]
#[case::prefix_tag("{user1000}.following", "user1000")]
#[case::middle_tag("a{b}c", "b")]
#[case::first_tag_wins("{a}{b}", "a")]
#[case::empty_tag("{}", "")]
#[case::empty_tag_with_suffix("{}rest", "")]
#[case::unclosed("{unclosed", "{unclosed")]
#[case::close_before_open("}a{b", "}a{b")]
#[case::nested_open("{{a}}", "{a")]
#[case::only_close("a}b", "a}b")]
fn hash_tag_extraction(#[case] key: &str, #[case] expected: &str) {
    assert_eq!(hash_tag(key.as_bytes()), expected.as_bytes());
}

#[test]
fn unclosed_tag_hashes_whole_key() {
    assert_eq!(hash_slot(b"{unclosed"), 429);
}

#[test]
fn empty_tag_hashes_empty_string() {
    assert_eq!(hash_slot(b"{}abc"), hash_slot(b""));
    assert_eq!(hash_slot(b"{}abc"), 0);
}

#[test]
fn hashing_is_deterministic_and_in_range() {
    for index in 0..2_000_u32 {
        let key = format!("key:{index}");
        let slot = hash_slot(key.as_bytes());
        assert_eq!(slot, hash_slot(key.as_bytes()));
        assert!(slot < MAX_SLOT_NUM);
    }
}

#[rstest]
#[case::redis_cluster(16_384, 9505)]
#[case::single(1, 0)]
#[case::reference(1024, 289)]
fn custom_slot_counts(#[case] count: u32, #[case] expected: u32) {
    let slots = SlotCount::new(count).expect("non-zero");
    assert_eq!(hash_slot_in(b"foo", slots), expected);
}

#[test]
fn slot_count_rejects_zero() {
    assert!(SlotCount::new(0).is_none());
    assert_eq!(SlotCount::default(), SlotCount::DEFAULT);
    assert_eq!(SlotCount::DEFAULT.get(), 1024);
    assert_eq!(SlotCount::DEFAULT.to_string(), "1024");
}
