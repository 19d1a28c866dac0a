//! Key to slot hashing.
//!
//! The slot of a key is `crc32(tag) % slot_count`, where `tag` is the content
//! of the first complete `{...}` pair in the key, or the whole key when no
//! such pair exists. Every cluster component must compute the same value, so
//! both the checksum (CRC-32, IEEE polynomial) and the tag rule are fixed.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Serialize, Serializer};

/// Number of slots the reference deployment partitions its keyspace into.
pub const MAX_SLOT_NUM: u32 = 1024;

const TAG_BEGIN: u8 = b'{';
const TAG_END: u8 = b'}';

/// Total number of hash slots; never zero.
///
/// # Example
///
/// ```
/// use slotgate_core::SlotCount;
///
/// assert_eq!(SlotCount::default().get(), 1024);
/// assert!(SlotCount::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotCount(NonZeroU32);

impl SlotCount {
    /// The reference slot count, [`MAX_SLOT_NUM`].
    pub const DEFAULT: Self = match NonZeroU32::new(MAX_SLOT_NUM) {
        Some(count) => Self(count),
        None => panic!("MAX_SLOT_NUM must be non-zero"),
    };

    /// Creates a slot count, returning `None` for zero.
    #[must_use]
    pub const fn new(count: u32) -> Option<Self> {
        match NonZeroU32::new(count) {
            Some(non_zero) => Some(Self(non_zero)),
            None => None,
        }
    }

    /// Returns the slot count as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for SlotCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SlotCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SlotCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.get())
    }
}

/// Returns the bytes of `key` that participate in hashing.
///
/// Only the first `{` is considered. When a `}` follows it, the bytes strictly
/// between the two are returned, which may be empty. Otherwise the whole key
/// is returned.
///
/// # Example
///
/// ```
/// use slotgate_core::hash_tag;
///
/// assert_eq!(hash_tag(b"{user1000}.following"), b"user1000");
/// assert_eq!(hash_tag(b"{}key"), b"");
/// assert_eq!(hash_tag(b"{unclosed"), b"{unclosed");
/// ```
#[must_use]
pub fn hash_tag(key: &[u8]) -> &[u8] {
    key.iter()
        .position(|byte| *byte == TAG_BEGIN)
        .and_then(|begin| key.get(begin + 1..))
        .and_then(|rest| {
            rest.iter()
                .position(|byte| *byte == TAG_END)
                .and_then(|end| rest.get(..end))
        })
        .unwrap_or(key)
}

/// Computes the slot of `key` among `slots` slots.
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "the divisor is a NonZeroU32 so the remainder cannot panic"
)]
pub fn hash_slot_in(key: &[u8], slots: SlotCount) -> u32 {
    crc32fast::hash(hash_tag(key)) % slots.0
}

/// Computes the slot of `key` using [`MAX_SLOT_NUM`] slots.
///
/// # Example
///
/// ```
/// use slotgate_core::hash_slot;
///
/// assert_eq!(hash_slot(b"{user1000}.following"), hash_slot(b"user1000"));
/// assert!(hash_slot(b"anything") < 1024);
/// ```
#[must_use]
pub fn hash_slot(key: &[u8]) -> u32 {
    hash_slot_in(key, SlotCount::DEFAULT)
}
