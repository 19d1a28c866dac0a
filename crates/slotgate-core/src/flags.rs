//! Safety flags attached to every command descriptor.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Serialize, Serializer};

/// Bitset describing how a command may be proxied.
///
/// The three bits are independent. [`OpFlags::is_read_only`] and
/// [`OpFlags::is_not_allowed`] are evaluated separately by the caller, with
/// `NOT_ALLOWED` taking precedence for the reject decision.
///
/// # Example
///
/// ```
/// use slotgate_core::OpFlags;
///
/// let flags = OpFlags::WRITE | OpFlags::NOT_ALLOWED;
/// assert!(!flags.is_read_only());
/// assert!(flags.is_not_allowed());
/// assert_eq!(flags.to_string(), "write|not_allowed");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OpFlags(u32);

impl OpFlags {
    /// No flags: a plain read command.
    pub const NONE: Self = Self(0);
    /// The command mutates data.
    pub const WRITE: Self = Self(1);
    /// The command is unknown or ambiguous and must be treated as mutating.
    pub const MAY_WRITE: Self = Self(1 << 1);
    /// The command must never be proxied to a sharded backend.
    pub const NOT_ALLOWED: Self = Self(1 << 2);

    const MUTATING: Self = Self(Self::WRITE.0 | Self::MAY_WRITE.0);

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Combines two flag sets. Usable in constant contexts.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` when no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Holds iff neither `WRITE` nor `MAY_WRITE` is set.
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        self.0 & Self::MUTATING.0 == 0
    }

    /// Holds iff `NOT_ALLOWED` is set.
    #[must_use]
    pub const fn is_not_allowed(self) -> bool {
        self.0 & Self::NOT_ALLOWED.0 != 0
    }

    fn names(self) -> impl Iterator<Item = &'static str> {
        [
            (Self::WRITE, "write"),
            (Self::MAY_WRITE, "may_write"),
            (Self::NOT_ALLOWED, "not_allowed"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
    }
}

impl BitOr for OpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for OpFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for OpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (index, name) in self.names().enumerate() {
            if index > 0 {
                f.write_str("|")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl Serialize for OpFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
