//! Log output formats accepted by `--log-format` and `WALLETD_LOG_FORMAT`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Shape of the records the daemon writes to stderr.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per lifecycle record, for log shippers.
    #[default]
    Json,
    /// Terse single-line text for reading on a terminal.
    Compact,
}

/// Error returned when a log format name is not recognised.
pub type LogFormatParseError = strum::ParseError;
