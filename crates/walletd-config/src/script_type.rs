//! Output-script types a wallet can be migrated to.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Template used to lock transaction outputs to a spending condition.
///
/// The variant names follow the conventional script abbreviations so the
/// same spelling works in configuration files, environment variables, and
/// command-line flags (`p2pkh`, `p2wpkh`).
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ScriptType {
    /// Legacy pay-to-public-key-hash outputs.
    P2pkh,
    /// Native segwit pay-to-witness-public-key-hash outputs.
    #[default]
    P2wpkh,
}

/// Errors encountered while parsing a [`ScriptType`] from text.
pub type ScriptTypeParseError = strum::ParseError;
