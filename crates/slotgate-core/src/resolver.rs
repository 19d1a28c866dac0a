//! Command info resolution.
//!
//! Validates the structured command, canonicalizes its name and classifies
//! it against the static table. Names that are not provably a known entry
//! are never treated as safe: they resolve with `MAY_WRITE`.

use std::borrow::Cow;

use tracing::trace;

use crate::canonical::{Canonical, canonicalize};
use crate::error::RouteError;
use crate::flags::OpFlags;
use crate::table::{CommandInfo, lookup};

/// Default maximum accepted command-name length in bytes.
pub const MAX_NAME_LENGTH: usize = 64;

/// Tracing target for resolution events.
pub(crate) const RESOLVER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::resolver");

/// How a command name was classified.
///
/// Only [`Classification::Known`] carries table flags. Both other outcomes
/// resolve to `MAY_WRITE` and are still routable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The canonical name is present in the classification table.
    Known(&'static CommandInfo),
    /// The name is purely alphabetic but not in the table.
    Unknown(String),
    /// The name contains a byte outside `A-Z`/`a-z` and was uppercased by the
    /// general-purpose fallback.
    Irregular(String),
}

impl Classification {
    /// Returns the canonical name.
    #[must_use]
    pub const fn name(&self) -> &str {
        match self {
            Self::Known(info) => info.name(),
            Self::Unknown(name) | Self::Irregular(name) => name.as_str(),
        }
    }

    /// Returns the safety flags for this outcome.
    #[must_use]
    pub const fn flags(&self) -> OpFlags {
        match self {
            Self::Known(info) => info.flags(),
            Self::Unknown(_) | Self::Irregular(_) => OpFlags::MAY_WRITE,
        }
    }

    /// Returns `true` when the name matched a table entry.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Consumes the classification and returns its canonical name.
    #[must_use]
    pub fn into_name(self) -> Cow<'static, str> {
        match self {
            Self::Known(info) => Cow::Borrowed(info.name()),
            Self::Unknown(name) | Self::Irregular(name) => Cow::Owned(name),
        }
    }
}

/// Classifies `command` with an explicit name length limit.
///
/// # Errors
///
/// Returns [`RouteError::MalformedCommand`] when `command` is empty and
/// [`RouteError::NameLength`] when the name is empty or longer than
/// `max_name_length`.
pub fn classify<A: AsRef<[u8]>>(
    command: &[A],
    max_name_length: usize,
) -> Result<Classification, RouteError> {
    let name = command
        .first()
        .map(AsRef::as_ref)
        .ok_or(RouteError::MalformedCommand)?;
    if name.is_empty() || name.len() > max_name_length {
        return Err(RouteError::name_length(name.len(), max_name_length));
    }

    match canonicalize(name) {
        Canonical::Upper(upper) => Ok(lookup(upper.as_str()).map_or_else(
            || Classification::Unknown(upper.as_str().to_owned()),
            Classification::Known,
        )),
        Canonical::Overlong { .. } => Ok(Classification::Unknown(
            String::from_utf8_lossy(&name.to_ascii_uppercase()).into_owned(),
        )),
        Canonical::NonAlphabetic { position } => {
            let upper: String = String::from_utf8_lossy(name)
                .chars()
                .map(simple_uppercase)
                .collect();
            trace!(
                target: RESOLVER_TARGET,
                position,
                name = %upper,
                "command name is not purely alphabetic"
            );
            Ok(Classification::Irregular(upper))
        }
    }
}

/// Uppercases one character when it has a single-character mapping.
///
/// Characters whose uppercase form expands (such as `ß`) are kept as they are.
fn simple_uppercase(character: char) -> char {
    let mut upper = character.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => character,
    }
}

/// Resolves `command` to its canonical name and safety flags using the
/// default [`MAX_NAME_LENGTH`].
///
/// # Errors
///
/// See [`classify`].
///
/// # Example
///
/// ```
/// use slotgate_core::{OpFlags, resolve};
///
/// let (name, flags) = resolve(&["Get", "k"]).expect("valid command");
/// assert_eq!(name, "GET");
/// assert!(flags.is_read_only());
///
/// let (name, flags) = resolve(&["foobar"]).expect("valid command");
/// assert_eq!(name, "FOOBAR");
/// assert_eq!(flags, OpFlags::MAY_WRITE);
/// ```
pub fn resolve<A: AsRef<[u8]>>(
    command: &[A],
) -> Result<(Cow<'static, str>, OpFlags), RouteError> {
    let classification = classify(command, MAX_NAME_LENGTH)?;
    let flags = classification.flags();
    Ok((classification.into_name(), flags))
}
