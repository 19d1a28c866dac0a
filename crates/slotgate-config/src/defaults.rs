use crate::logging::LogFormat;

/// Number of hash slots in the reference deployment.
///
/// Must match every other cluster component; changing it remaps every key.
pub const DEFAULT_SLOT_COUNT: u32 = 1024;

/// Longest command name accepted before a request is rejected.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 64;

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter expression used by the binaries.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Default logging format for the binaries.
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default slot count, as a function for serde.
pub fn default_slot_count() -> u32 {
    DEFAULT_SLOT_COUNT
}

/// Default maximum command-name length, as a function for serde.
pub fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}
