//! Routing key selection.
//!
//! The key is normally the first argument. Commands that combine several
//! keys route by the argument at index 3 instead; this picks one
//! representative key and does not check that the others share its slot.

/// Index of the routing key for commands without an override.
pub const DEFAULT_KEY_INDEX: usize = 1;

/// Index of the routing key for the multi-key commands listed in
/// [`key_index`].
pub const MULTI_KEY_INDEX: usize = 3;

/// Returns the position of the routing key for a canonical command name.
///
/// # Example
///
/// ```
/// use slotgate_core::key_index;
///
/// assert_eq!(key_index("GET"), 1);
/// assert_eq!(key_index("EVALSHA"), 3);
/// ```
#[must_use]
pub fn key_index(name: &str) -> usize {
    match name {
        "ZINTERSTORE" | "ZUNIONSTORE" | "EVAL" | "EVALSHA" => MULTI_KEY_INDEX,
        _ => DEFAULT_KEY_INDEX,
    }
}

/// Returns the routing key of `command`, or `None` when it has too few
/// arguments to carry one.
///
/// # Example
///
/// ```
/// use slotgate_core::extract_key;
///
/// let eval = ["EVAL", "script", "2", "key1", "key2"];
/// assert_eq!(extract_key(&eval, "EVAL"), Some(&b"key1"[..]));
/// assert_eq!(extract_key(&["PING"], "PING"), None);
/// ```
#[must_use]
pub fn extract_key<'c, A: AsRef<[u8]>>(command: &'c [A], name: &str) -> Option<&'c [u8]> {
    command.get(key_index(name)).map(AsRef::as_ref)
}
