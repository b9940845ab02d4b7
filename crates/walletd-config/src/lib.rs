//! Shared configuration for the wallet lifecycle daemon.
//!
//! Values are layered by `ortho_config`: built-in defaults, then an optional
//! configuration file (`--config-path`), then `WALLETD_*` environment
//! variables, then command-line flags. The daemon reads logging settings and
//! the wallet maintenance policy from here; per-user usage state (reminder
//! opt-in, last-used timestamps) lives with the wallet application and is not
//! part of this configuration.

mod defaults;
mod logging;
mod script_type;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_INACTIVITY_THRESHOLD_MS, DEFAULT_LOG_FILTER, default_inactivity_threshold,
    default_log_filter, default_log_filter_string, default_log_format,
    default_upgrade_script_type,
};
pub use logging::{LogFormat, LogFormatParseError};
pub use ortho_config::{OrthoConfig, OrthoError};
pub use script_type::{ScriptType, ScriptTypeParseError};

/// Resolved daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "WALLETD")]
pub struct Config {
    /// Tracing filter expression, e.g. `info` or `walletd=debug`.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for structured logs.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Script type targeted when a wallet needs a deterministic upgrade.
    #[ortho_config(default = default_upgrade_script_type())]
    pub upgrade_script_type: ScriptType,
    /// Milliseconds of inactivity after which the balance reminder applies.
    #[ortho_config(default = DEFAULT_INACTIVITY_THRESHOLD_MS)]
    pub inactivity_threshold_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            upgrade_script_type: default_upgrade_script_type(),
            inactivity_threshold_ms: DEFAULT_INACTIVITY_THRESHOLD_MS,
        }
    }
}

impl Config {
    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Output format for structured logs.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Script type targeted by the deterministic upgrade.
    #[must_use]
    pub fn upgrade_script_type(&self) -> ScriptType {
        self.upgrade_script_type
    }

    /// Inactivity window after which the balance reminder applies.
    #[must_use]
    pub fn inactivity_threshold(&self) -> Duration {
        Duration::from_millis(self.inactivity_threshold_ms)
    }
}
