use std::time::Duration;

use crate::logging::LogFormat;
use crate::script_type::ScriptType;

/// Default log filter expression used by the daemon.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Inactivity window after which the balance reminder may be shown.
///
/// Four weeks, expressed in milliseconds so it can be overridden with a plain
/// integer from the environment or the command line.
pub const DEFAULT_INACTIVITY_THRESHOLD_MS: u64 = 4 * 7 * 24 * 60 * 60 * 1000;

/// Default log filter expression used by the daemon.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Default logging format for the daemon.
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Script type wallets are migrated to when an upgrade is required.
pub fn default_upgrade_script_type() -> ScriptType {
    ScriptType::P2wpkh
}

/// Default inactivity window as a [`Duration`].
pub fn default_inactivity_threshold() -> Duration {
    Duration::from_millis(DEFAULT_INACTIVITY_THRESHOLD_MS)
}
