//! Case-insensitive command name canonicalization.
//!
//! A fixed 256-entry translation table maps ASCII letters of either case to
//! their uppercase form. Every other byte maps to [`NO_MAPPING`], which stops
//! canonicalization at that position.

/// Sentinel stored in [`CHARMAP`] for bytes that are not ASCII letters.
pub const NO_MAPPING: u8 = 0;

/// Byte translation table used by [`canonicalize`].
///
/// Built at compile time and never mutated.
pub static CHARMAP: [u8; 256] = build_charmap();

#[expect(
    clippy::indexing_slicing,
    reason = "every u8 value is a valid index into a 256-entry table"
)]
const fn build_charmap() -> [u8; 256] {
    let mut map = [NO_MAPPING; 256];
    let mut byte = 0_u8;
    loop {
        map[byte as usize] = match byte {
            b'A'..=b'Z' => byte,
            b'a'..=b'z' => byte - b'a' + b'A',
            _ => NO_MAPPING,
        };
        if byte == u8::MAX {
            break;
        }
        byte += 1;
    }
    map
}

/// Capacity of the inline buffer holding an uppercase name.
///
/// No entry of the command table is longer than this, so a longer name is
/// never looked up.
pub const NAME_BUFFER_LEN: usize = 64;

/// Uppercase command name held in a fixed inline buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpperName {
    bytes: [u8; NAME_BUFFER_LEN],
    len: usize,
}

impl UpperName {
    const EMPTY: Self = Self {
        bytes: [NO_MAPPING; NAME_BUFFER_LEN],
        len: 0,
    };

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only CHARMAP output (ASCII letters) is ever written.
        std::str::from_utf8(self.bytes.get(..self.len).unwrap_or_default()).unwrap_or_default()
    }

    /// Returns the length of the name in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the empty name.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Outcome of running a command name through [`CHARMAP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canonical {
    /// Every byte was an ASCII letter; holds the uppercase spelling.
    Upper(UpperName),
    /// Every byte was an ASCII letter but the name does not fit in
    /// [`NAME_BUFFER_LEN`] bytes.
    Overlong {
        /// Length of the name in bytes.
        length: usize,
    },
    /// The byte at `position` has no table entry.
    NonAlphabetic {
        /// Offset of the first byte without a mapping.
        position: usize,
    },
}

/// Translates `name` to its canonical uppercase form without allocating.
///
/// Stops at the first byte that is not an ASCII letter.
///
/// # Example
///
/// ```
/// use slotgate_core::{Canonical, canonicalize};
///
/// let Canonical::Upper(upper) = canonicalize(b"hGetAll") else {
///     panic!("alphabetic name");
/// };
/// assert_eq!(upper.as_str(), "HGETALL");
/// assert_eq!(canonicalize(b"get2"), Canonical::NonAlphabetic { position: 3 });
/// ```
#[must_use]
pub fn canonicalize(name: &[u8]) -> Canonical {
    let mut upper = UpperName::EMPTY;
    for (position, &byte) in name.iter().enumerate() {
        let Some(mapped) = translate(byte) else {
            return Canonical::NonAlphabetic { position };
        };
        if let Some(slot) = upper.bytes.get_mut(position) {
            *slot = mapped;
        }
    }
    if name.len() > NAME_BUFFER_LEN {
        return Canonical::Overlong { length: name.len() };
    }
    upper.len = name.len();
    Canonical::Upper(upper)
}

fn translate(byte: u8) -> Option<u8> {
    CHARMAP
        .get(usize::from(byte))
        .copied()
        .filter(|mapped| *mapped != NO_MAPPING)
}
