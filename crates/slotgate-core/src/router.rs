//! Per-command routing pipeline.
//!
//! [`Router`] runs the resolver, rejects forbidden commands, then extracts
//! the routing key and hashes it. Slot-to-backend resolution belongs to the
//! caller.

use std::borrow::Cow;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::error::RouteError;
use crate::flags::OpFlags;
use crate::key::{extract_key, key_index};
use crate::resolver::{MAX_NAME_LENGTH, classify};
use crate::slot::{SlotCount, hash_slot_in};

/// Tracing target for routing decisions.
pub(crate) const ROUTER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::router");

/// Errors raised when building a [`RouterConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterConfigError {
    /// The slot count was zero.
    #[error("slot count must be greater than zero")]
    ZeroSlots,
    /// The maximum command-name length was zero.
    #[error("maximum command name length must be greater than zero")]
    ZeroNameLength,
}

/// Deployment constants that every proxy instance must agree on.
///
/// # Example
///
/// ```
/// use slotgate_core::RouterConfig;
///
/// let config = RouterConfig::default();
/// assert_eq!(config.slot_count().get(), 1024);
/// assert_eq!(config.max_name_length(), 64);
/// assert!(RouterConfig::new(0, 64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    slot_count: SlotCount,
    max_name_length: usize,
}

impl RouterConfig {
    /// Creates a configuration from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`RouterConfigError`] when either value is zero.
    pub const fn new(slot_count: u32, max_name_length: usize) -> Result<Self, RouterConfigError> {
        let Some(slots) = SlotCount::new(slot_count) else {
            return Err(RouterConfigError::ZeroSlots);
        };
        if max_name_length == 0 {
            return Err(RouterConfigError::ZeroNameLength);
        }
        Ok(Self {
            slot_count: slots,
            max_name_length,
        })
    }

    /// Returns the number of hash slots.
    #[must_use]
    pub const fn slot_count(&self) -> SlotCount {
        self.slot_count
    }

    /// Returns the maximum accepted command-name length.
    #[must_use]
    pub const fn max_name_length(&self) -> usize {
        self.max_name_length
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            slot_count: SlotCount::DEFAULT,
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

/// What the caller should do with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// The command carries `NOT_ALLOWED` and must not reach a backend.
    Reject,
    /// The command may be forwarded.
    Forward,
}

/// Result of routing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDecision {
    name: Cow<'static, str>,
    flags: OpFlags,
    disposition: Disposition,
    key_index: usize,
    slot: Option<u32>,
}

impl RouteDecision {
    /// Returns the canonical command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the safety flags.
    #[must_use]
    pub const fn flags(&self) -> OpFlags {
        self.flags
    }

    /// Returns whether the command is rejected or forwarded.
    #[must_use]
    pub const fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Returns `true` when the command must be rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self.disposition, Disposition::Reject)
    }

    /// Returns the argument position the routing key is taken from.
    #[must_use]
    pub const fn key_index(&self) -> usize {
        self.key_index
    }

    /// Returns the target slot.
    ///
    /// `None` for rejected commands and for commands without a routing key.
    #[must_use]
    pub const fn slot(&self) -> Option<u32> {
        self.slot
    }
}

/// Stateless routing pipeline over the static tables.
///
/// # Example
///
/// ```
/// use slotgate_core::{Disposition, Router, hash_slot};
///
/// let router = Router::default();
/// let decision = router.route(&["set", "{user1000}.name", "x"]).expect("valid");
/// assert_eq!(decision.name(), "SET");
/// assert_eq!(decision.disposition(), Disposition::Forward);
/// assert_eq!(decision.slot(), Some(hash_slot(b"user1000")));
///
/// let rejected = router.route(&["KEYS", "*"]).expect("valid");
/// assert!(rejected.is_rejected());
/// assert_eq!(rejected.slot(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    /// Creates a router for the given deployment constants.
    #[must_use]
    pub const fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Routes a structured command.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteError`] from command validation.
    pub fn route<A: AsRef<[u8]>>(&self, command: &[A]) -> Result<RouteDecision, RouteError> {
        let classification = classify(command, self.config.max_name_length)?;
        let flags = classification.flags();
        let name = classification.into_name();
        let key_index = key_index(&name);

        if flags.is_not_allowed() {
            debug!(
                target: ROUTER_TARGET,
                command = %name,
                %flags,
                "rejecting command that must not be proxied"
            );
            return Ok(RouteDecision {
                name,
                flags,
                disposition: Disposition::Reject,
                key_index,
                slot: None,
            });
        }

        let slot =
            extract_key(command, &name).map(|key| hash_slot_in(key, self.config.slot_count));
        debug!(
            target: ROUTER_TARGET,
            command = %name,
            %flags,
            slot = ?slot,
            "routing command"
        );
        Ok(RouteDecision {
            name,
            flags,
            disposition: Disposition::Forward,
            key_index,
            slot,
        })
    }
}
