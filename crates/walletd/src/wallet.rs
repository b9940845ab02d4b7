//! Wallet collaborator surface used by the lifecycle maintenance path.
//!
//! The daemon never owns key material. It asks the wallet whether a
//! deterministic migration is still outstanding and delegates the migration
//! and the maintenance pass back to the wallet library.

use std::sync::Arc;

use thiserror::Error;

pub use walletd_config::ScriptType;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Operations the lifecycle handler needs from a wallet.
///
/// Implementations must be safe to call from the lifecycle worker thread
/// while the rest of the application may be using the same wallet.
pub trait Wallet: Send + Sync {
    /// Reports whether the wallet still needs migrating to a deterministic
    /// key chain producing `script_type` outputs.
    ///
    /// This is the single source of truth for "is migration outstanding".
    fn requires_deterministic_upgrade(&self, script_type: ScriptType) -> bool;

    /// Reports whether the wallet's private keys are encrypted.
    fn is_encrypted(&self) -> bool;

    /// Migrates the wallet to a deterministic key chain for `script_type`.
    fn upgrade_to_deterministic(&self, script_type: ScriptType) -> Result<(), UpgradeError>;

    /// Runs the wallet's self-check and repair pass.
    fn do_maintenance(&self, strict: bool) -> Result<(), MaintenanceError>;
}

impl<T> Wallet for Arc<T>
where
    T: Wallet + ?Sized,
{
    fn requires_deterministic_upgrade(&self, script_type: ScriptType) -> bool {
        (**self).requires_deterministic_upgrade(script_type)
    }

    fn is_encrypted(&self) -> bool {
        (**self).is_encrypted()
    }

    fn upgrade_to_deterministic(&self, script_type: ScriptType) -> Result<(), UpgradeError> {
        (**self).upgrade_to_deterministic(script_type)
    }

    fn do_maintenance(&self, strict: bool) -> Result<(), MaintenanceError> {
        (**self).do_maintenance(strict)
    }
}

/// Error raised when migrating a wallet to a deterministic key chain fails.
#[derive(Debug, Error)]
#[error("deterministic upgrade to {script_type} failed: {message}")]
pub struct UpgradeError {
    /// Script type the upgrade targeted.
    pub script_type: ScriptType,
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl UpgradeError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(script_type: ScriptType, message: impl Into<String>) -> Self {
        Self {
            script_type,
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(
        script_type: ScriptType,
        message: impl Into<String>,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self {
            script_type,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-readable message describing the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Error raised by the wallet maintenance pass.
#[derive(Debug, Error)]
#[error("wallet maintenance failed: {message}")]
pub struct MaintenanceError {
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl MaintenanceError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-readable message describing the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
