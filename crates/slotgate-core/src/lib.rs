//! Routing decision core for a proxy in front of a slot-sharded key-value
//! store.
//!
//! For every inbound multi-bulk command the proxy needs three answers before
//! forwarding a byte: is the command well formed, is it safe to execute
//! through a sharding proxy, and which slot does its key map to. This crate
//! answers all three without I/O or mutable state; the only shared data are
//! two read-only tables built once per process.
//!
//! # Pipeline
//!
//! - [`canonicalize`] maps a command name to uppercase through [`CHARMAP`]
//! - [`lookup`] consults the static [`COMMAND_TABLE`]
//! - [`classify`] and [`resolve`] validate the command and produce its
//!   canonical name and [`OpFlags`], falling back to `MAY_WRITE` for
//!   unrecognised names
//! - [`extract_key`] picks the routing key and [`hash_slot`] maps it to a slot
//! - [`Router`] composes the above into one [`RouteDecision`]
//!
//! # Example
//!
//! ```
//! use slotgate_core::{extract_key, hash_slot, resolve};
//!
//! let command: [&[u8]; 2] = [b"get", b"{user1000}.following"];
//! let (name, flags) = resolve(&command).expect("valid command");
//! assert!(flags.is_read_only() && !flags.is_not_allowed());
//!
//! let key = extract_key(&command, &name).expect("GET carries a key");
//! assert_eq!(hash_slot(key), hash_slot(b"user1000"));
//! ```

mod canonical;
mod error;
mod flags;
mod key;
mod resolver;
mod router;
mod slot;
mod table;

pub use canonical::{CHARMAP, Canonical, NAME_BUFFER_LEN, NO_MAPPING, UpperName, canonicalize};
pub use error::RouteError;
pub use flags::OpFlags;
pub use key::{DEFAULT_KEY_INDEX, MULTI_KEY_INDEX, extract_key, key_index};
pub use resolver::{Classification, MAX_NAME_LENGTH, classify, resolve};
pub use router::{Disposition, RouteDecision, Router, RouterConfig, RouterConfigError};
pub use slot::{MAX_SLOT_NUM, SlotCount, hash_slot, hash_slot_in, hash_tag};
pub use table::{COMMAND_TABLE, CommandInfo, commands, lookup};

#[cfg(test)]
mod tests;
