//! Errors surfaced while resolving a command.
//!
//! Both variants are local to one request: the caller replies with a protocol
//! error and keeps the connection open. Neither is retryable since resolution
//! is deterministic.

use thiserror::Error;

/// Errors produced by [`resolve`](crate::resolve) and
/// [`Router::route`](crate::Router::route).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The structured command had no elements.
    #[error("bad multi-bulk for command")]
    MalformedCommand,
    /// The command name was empty or longer than the configured maximum.
    #[error("bad command length, too short or too long: {length} bytes (max {max})")]
    NameLength {
        /// Length of the rejected name in bytes.
        length: usize,
        /// Maximum accepted length in bytes.
        max: usize,
    },
}

impl RouteError {
    /// Creates a name length error.
    #[must_use]
    pub const fn name_length(length: usize, max: usize) -> Self {
        Self::NameLength { length, max }
    }
}
