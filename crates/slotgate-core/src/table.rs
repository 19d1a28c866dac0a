//! Static command classification table.
//!
//! The entries below are the authoritative proxy safety policy and must stay
//! identical across every cluster component: name, `WRITE`, `MAY_WRITE` and
//! `NOT_ALLOWED` bits alike. Administrative, blocking, transactional,
//! replication, pub/sub and slot-migration commands carry `NOT_ALLOWED`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::flags::OpFlags;

/// Canonical name and safety flags of a known command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CommandInfo {
    name: &'static str,
    flags: OpFlags,
}

impl CommandInfo {
    /// Creates a descriptor.
    #[must_use]
    pub const fn new(name: &'static str, flags: OpFlags) -> Self {
        Self { name, flags }
    }

    /// Returns the canonical uppercase name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the safety flags.
    #[must_use]
    pub const fn flags(&self) -> OpFlags {
        self.flags
    }
}

const READ: OpFlags = OpFlags::NONE;
const WRITE: OpFlags = OpFlags::WRITE;
const FORBIDDEN: OpFlags = OpFlags::NOT_ALLOWED;
const WRITE_FORBIDDEN: OpFlags = OpFlags::WRITE.union(OpFlags::NOT_ALLOWED);

/// Every command the proxy recognises, sorted by name.
pub static COMMAND_TABLE: &[CommandInfo] = &[
    CommandInfo::new("APPEND", WRITE),
    CommandInfo::new("AUTH", READ),
    CommandInfo::new("BGREWRITEAOF", FORBIDDEN),
    CommandInfo::new("BGSAVE", FORBIDDEN),
    CommandInfo::new("BITCOUNT", READ),
    CommandInfo::new("BITOP", WRITE_FORBIDDEN),
    CommandInfo::new("BITPOS", READ),
    CommandInfo::new("BLPOP", WRITE_FORBIDDEN),
    CommandInfo::new("BRPOP", WRITE_FORBIDDEN),
    CommandInfo::new("BRPOPLPUSH", WRITE_FORBIDDEN),
    CommandInfo::new("CLIENT", FORBIDDEN),
    CommandInfo::new("COMMAND", READ),
    CommandInfo::new("CONFIG", FORBIDDEN),
    CommandInfo::new("DBSIZE", FORBIDDEN),
    CommandInfo::new("DEBUG", FORBIDDEN),
    CommandInfo::new("DECR", WRITE),
    CommandInfo::new("DECRBY", WRITE),
    CommandInfo::new("DEL", WRITE),
    CommandInfo::new("DISCARD", FORBIDDEN),
    CommandInfo::new("DUMP", READ),
    CommandInfo::new("ECHO", READ),
    CommandInfo::new("EVAL", WRITE),
    CommandInfo::new("EVALSHA", WRITE),
    CommandInfo::new("EXEC", FORBIDDEN),
    CommandInfo::new("EXISTS", READ),
    CommandInfo::new("EXPIRE", WRITE),
    CommandInfo::new("EXPIREAT", WRITE),
    CommandInfo::new("FLUSHALL", WRITE_FORBIDDEN),
    CommandInfo::new("FLUSHDB", WRITE_FORBIDDEN),
    CommandInfo::new("GET", READ),
    CommandInfo::new("GETBIT", READ),
    CommandInfo::new("GETRANGE", READ),
    CommandInfo::new("GETSET", WRITE),
    CommandInfo::new("HDEL", WRITE),
    CommandInfo::new("HEXISTS", READ),
    CommandInfo::new("HGET", READ),
    CommandInfo::new("HGETALL", READ),
    CommandInfo::new("HINCRBY", WRITE),
    CommandInfo::new("HINCRBYFLOAT", WRITE),
    CommandInfo::new("HKEYS", READ),
    CommandInfo::new("HLEN", READ),
    CommandInfo::new("HMGET", READ),
    CommandInfo::new("HMSET", WRITE),
    CommandInfo::new("HSCAN", READ),
    CommandInfo::new("HSET", WRITE),
    CommandInfo::new("HSETNX", WRITE),
    CommandInfo::new("HVALS", READ),
    CommandInfo::new("INCR", WRITE),
    CommandInfo::new("INCRBY", WRITE),
    CommandInfo::new("INCRBYFLOAT", WRITE),
    CommandInfo::new("INFO", READ),
    CommandInfo::new("KEYS", FORBIDDEN),
    CommandInfo::new("LASTSAVE", FORBIDDEN),
    CommandInfo::new("LATENCY", FORBIDDEN),
    CommandInfo::new("LINDEX", READ),
    CommandInfo::new("LINSERT", WRITE),
    CommandInfo::new("LLEN", READ),
    CommandInfo::new("LPOP", WRITE),
    CommandInfo::new("LPUSH", WRITE),
    CommandInfo::new("LPUSHX", WRITE),
    CommandInfo::new("LRANGE", READ),
    CommandInfo::new("LREM", WRITE),
    CommandInfo::new("LSET", WRITE),
    CommandInfo::new("LTRIM", WRITE),
    CommandInfo::new("MGET", READ),
    CommandInfo::new("MIGRATE", WRITE_FORBIDDEN),
    CommandInfo::new("MONITOR", FORBIDDEN),
    CommandInfo::new("MOVE", WRITE_FORBIDDEN),
    CommandInfo::new("MSET", WRITE),
    CommandInfo::new("MSETNX", WRITE_FORBIDDEN),
    CommandInfo::new("MULTI", FORBIDDEN),
    CommandInfo::new("OBJECT", FORBIDDEN),
    CommandInfo::new("PERSIST", WRITE),
    CommandInfo::new("PEXPIRE", WRITE),
    CommandInfo::new("PEXPIREAT", WRITE),
    CommandInfo::new("PFADD", WRITE),
    CommandInfo::new("PFCOUNT", READ),
    CommandInfo::new("PFDEBUG", WRITE),
    CommandInfo::new("PFMERGE", WRITE),
    CommandInfo::new("PFSELFTEST", READ),
    CommandInfo::new("PING", READ),
    CommandInfo::new("PSETEX", WRITE),
    CommandInfo::new("PSUBSCRIBE", FORBIDDEN),
    CommandInfo::new("PSYNC", FORBIDDEN),
    CommandInfo::new("PTTL", READ),
    CommandInfo::new("PUBLISH", FORBIDDEN),
    CommandInfo::new("PUBSUB", READ),
    CommandInfo::new("PUNSUBSCRIBE", FORBIDDEN),
    CommandInfo::new("RANDOMKEY", FORBIDDEN),
    CommandInfo::new("RENAME", WRITE_FORBIDDEN),
    CommandInfo::new("RENAMENX", WRITE_FORBIDDEN),
    CommandInfo::new("REPLCONF", FORBIDDEN),
    CommandInfo::new("RESTORE", WRITE_FORBIDDEN),
    CommandInfo::new("ROLE", READ),
    CommandInfo::new("RPOP", WRITE),
    CommandInfo::new("RPOPLPUSH", WRITE),
    CommandInfo::new("RPUSH", WRITE),
    CommandInfo::new("RPUSHX", WRITE),
    CommandInfo::new("SADD", WRITE),
    CommandInfo::new("SAVE", FORBIDDEN),
    CommandInfo::new("SCAN", FORBIDDEN),
    CommandInfo::new("SCARD", READ),
    CommandInfo::new("SCRIPT", FORBIDDEN),
    CommandInfo::new("SDIFF", READ),
    CommandInfo::new("SDIFFSTORE", WRITE),
    CommandInfo::new("SELECT", READ),
    CommandInfo::new("SET", WRITE),
    CommandInfo::new("SETBIT", WRITE),
    CommandInfo::new("SETEX", WRITE),
    CommandInfo::new("SETNX", WRITE),
    CommandInfo::new("SETRANGE", WRITE),
    CommandInfo::new("SHUTDOWN", FORBIDDEN),
    CommandInfo::new("SINTER", READ),
    CommandInfo::new("SINTERSTORE", WRITE),
    CommandInfo::new("SISMEMBER", READ),
    CommandInfo::new("SLAVEOF", FORBIDDEN),
    CommandInfo::new("SLOTSCHECK", FORBIDDEN),
    CommandInfo::new("SLOTSDEL", WRITE_FORBIDDEN),
    CommandInfo::new("SLOTSHASHKEY", READ),
    CommandInfo::new("SLOTSINFO", FORBIDDEN),
    CommandInfo::new("SLOTSMAPPING", READ),
    CommandInfo::new("SLOTSMGRTONE", WRITE_FORBIDDEN),
    CommandInfo::new("SLOTSMGRTSLOT", WRITE_FORBIDDEN),
    CommandInfo::new("SLOTSMGRTTAGONE", WRITE_FORBIDDEN),
    CommandInfo::new("SLOTSMGRTTAGSLOT", WRITE_FORBIDDEN),
    CommandInfo::new("SLOTSRESTORE", WRITE),
    CommandInfo::new("SLOTSSCAN", READ),
    CommandInfo::new("SLOWLOG", FORBIDDEN),
    CommandInfo::new("SMEMBERS", READ),
    CommandInfo::new("SMOVE", WRITE),
    CommandInfo::new("SORT", WRITE),
    CommandInfo::new("SPOP", WRITE),
    CommandInfo::new("SRANDMEMBER", READ),
    CommandInfo::new("SREM", WRITE),
    CommandInfo::new("SSCAN", READ),
    CommandInfo::new("STRLEN", READ),
    CommandInfo::new("SUBSCRIBE", FORBIDDEN),
    CommandInfo::new("SUBSTR", READ),
    CommandInfo::new("SUNION", READ),
    CommandInfo::new("SUNIONSTORE", WRITE),
    CommandInfo::new("SYNC", FORBIDDEN),
    CommandInfo::new("TIME", FORBIDDEN),
    CommandInfo::new("TTL", READ),
    CommandInfo::new("TYPE", READ),
    CommandInfo::new("UNSUBSCRIBE", FORBIDDEN),
    CommandInfo::new("UNWATCH", FORBIDDEN),
    CommandInfo::new("WATCH", FORBIDDEN),
    CommandInfo::new("ZADD", WRITE),
    CommandInfo::new("ZCARD", READ),
    CommandInfo::new("ZCOUNT", READ),
    CommandInfo::new("ZINCRBY", WRITE),
    CommandInfo::new("ZINTERSTORE", WRITE),
    CommandInfo::new("ZLEXCOUNT", READ),
    CommandInfo::new("ZRANGE", READ),
    CommandInfo::new("ZRANGEBYLEX", READ),
    CommandInfo::new("ZRANGEBYSCORE", READ),
    CommandInfo::new("ZRANK", READ),
    CommandInfo::new("ZREM", WRITE),
    CommandInfo::new("ZREMRANGEBYLEX", WRITE),
    CommandInfo::new("ZREMRANGEBYRANK", WRITE),
    CommandInfo::new("ZREMRANGEBYSCORE", WRITE),
    CommandInfo::new("ZREVRANGE", READ),
    CommandInfo::new("ZREVRANGEBYLEX", READ),
    CommandInfo::new("ZREVRANGEBYSCORE", READ),
    CommandInfo::new("ZREVRANK", READ),
    CommandInfo::new("ZSCAN", READ),
    CommandInfo::new("ZSCORE", READ),
    CommandInfo::new("ZUNIONSTORE", WRITE),
];

static INDEX: Lazy<HashMap<&'static str, &'static CommandInfo>> = Lazy::new(|| {
    COMMAND_TABLE
        .iter()
        .map(|info| (info.name, info))
        .collect()
});

/// Looks up a canonical (uppercase) command name.
///
/// # Example
///
/// ```
/// use slotgate_core::{OpFlags, lookup};
///
/// let info = lookup("FLUSHALL").expect("known command");
/// assert_eq!(info.flags(), OpFlags::WRITE | OpFlags::NOT_ALLOWED);
/// assert!(lookup("flushall").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CommandInfo> {
    INDEX.get(name).copied()
}

/// Iterates over the full table in name order.
pub fn commands() -> impl Iterator<Item = &'static CommandInfo> {
    COMMAND_TABLE.iter()
}
