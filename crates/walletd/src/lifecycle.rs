//! Structured reporting for lifecycle maintenance events.

use std::sync::Arc;

use walletd_config::Config;

use crate::bootstrap::BootstrapError;
use crate::event::LifecycleEvent;
use crate::wallet::{MaintenanceError, ScriptType, UpgradeError};

/// Target used for lifecycle diagnostics.
pub(crate) const LIFECYCLE_TARGET: &str = "walletd::lifecycle";

/// Why the deterministic upgrade did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeSkipReason {
    /// The wallet is already deterministic for the target script type.
    NotRequired,
    /// The wallet is encrypted; migration waits for an interactive unlock.
    Encrypted,
}

/// Observer trait used to surface lifecycle handling to telemetry sinks.
pub trait LifecycleReporter: Send + Sync {
    /// Invoked after the receiver has been built from configuration.
    fn bootstrap_succeeded(&self, config: &Config);

    /// Invoked when building the receiver fails.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// Invoked when an event identifier has been classified.
    fn event_received(&self, identifier: &str, event: LifecycleEvent);

    /// Invoked when an event requires no work.
    fn event_ignored(&self, identifier: &str);

    /// Invoked when the deterministic upgrade is skipped.
    fn upgrade_skipped(&self, script_type: ScriptType, reason: UpgradeSkipReason);

    /// Invoked after the deterministic upgrade succeeds.
    fn upgrade_completed(&self, script_type: ScriptType);

    /// Invoked when the deterministic upgrade fails.
    fn upgrade_failed(&self, error: &UpgradeError);

    /// Invoked after the maintenance pass succeeds.
    fn maintenance_completed(&self);

    /// Invoked when the maintenance pass fails.
    fn maintenance_failed(&self, error: &MaintenanceError);

    /// Invoked after the recurring sync has been ensured.
    fn sync_ensured(&self);

    /// Invoked when the reminder notifier has been asked to run.
    fn reminder_requested(&self);

    /// Invoked when reminder conditions are not met.
    fn reminder_not_eligible(&self);
}

impl<T> LifecycleReporter for Arc<T>
where
    T: LifecycleReporter + ?Sized,
{
    fn bootstrap_succeeded(&self, config: &Config) {
        (**self).bootstrap_succeeded(config);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn event_received(&self, identifier: &str, event: LifecycleEvent) {
        (**self).event_received(identifier, event);
    }

    fn event_ignored(&self, identifier: &str) {
        (**self).event_ignored(identifier);
    }

    fn upgrade_skipped(&self, script_type: ScriptType, reason: UpgradeSkipReason) {
        (**self).upgrade_skipped(script_type, reason);
    }

    fn upgrade_completed(&self, script_type: ScriptType) {
        (**self).upgrade_completed(script_type);
    }

    fn upgrade_failed(&self, error: &UpgradeError) {
        (**self).upgrade_failed(error);
    }

    fn maintenance_completed(&self) {
        (**self).maintenance_completed();
    }

    fn maintenance_failed(&self, error: &MaintenanceError) {
        (**self).maintenance_failed(error);
    }

    fn sync_ensured(&self) {
        (**self).sync_ensured();
    }

    fn reminder_requested(&self) {
        (**self).reminder_requested();
    }

    fn reminder_not_eligible(&self) {
        (**self).reminder_not_eligible();
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredLifecycleReporter;

impl StructuredLifecycleReporter {
    /// Builds a new reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LifecycleReporter for StructuredLifecycleReporter {
    fn bootstrap_succeeded(&self, config: &Config) {
        tracing::info!(
            target: LIFECYCLE_TARGET,
            event = "bootstrap_succeeded",
            upgrade_script_type = %config.upgrade_script_type(),
            inactivity_threshold_ms = config.inactivity_threshold_ms,
            log_filter = %config.log_filter(),
            log_format = ?config.log_format(),
            "lifecycle receiver ready"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: LIFECYCLE_TARGET,
            event = "bootstrap_failed",
            error = %error,
            "lifecycle receiver bootstrap failed"
        );
    }

    fn event_received(&self, identifier: &str, event: LifecycleEvent) {
        tracing::info!(
            target: LIFECYCLE_TARGET,
            event = "event_received",
            identifier,
            kind = %event,
            "got lifecycle event"
        );
    }

    fn event_ignored(&self, identifier: &str) {
        tracing::debug!(
            target: LIFECYCLE_TARGET,
            event = "event_ignored",
            identifier,
            "lifecycle event needs no maintenance"
        );
    }

    fn upgrade_skipped(&self, script_type: ScriptType, reason: UpgradeSkipReason) {
        tracing::info!(
            target: LIFECYCLE_TARGET,
            event = "upgrade_skipped",
            script_type = %script_type,
            reason = ?reason,
            "deterministic upgrade skipped"
        );
    }

    fn upgrade_completed(&self, script_type: ScriptType) {
        tracing::info!(
            target: LIFECYCLE_TARGET,
            event = "upgrade_completed",
            script_type = %script_type,
            "wallet upgraded to deterministic key chain"
        );
    }

    fn upgrade_failed(&self, error: &UpgradeError) {
        tracing::error!(
            target: LIFECYCLE_TARGET,
            event = "upgrade_failed",
            script_type = %error.script_type,
            message = %error.message(),
            error = ?error,
            "deterministic upgrade failed"
        );
    }

    fn maintenance_completed(&self) {
        tracing::debug!(
            target: LIFECYCLE_TARGET,
            event = "maintenance_completed",
            "wallet maintenance completed"
        );
    }

    fn maintenance_failed(&self, error: &MaintenanceError) {
        tracing::error!(
            target: LIFECYCLE_TARGET,
            event = "maintenance_failed",
            message = %error.message(),
            error = ?error,
            "failed doing wallet maintenance"
        );
    }

    fn sync_ensured(&self) {
        tracing::info!(
            target: LIFECYCLE_TARGET,
            event = "sync_ensured",
            "recurring blockchain sync ensured"
        );
    }

    fn reminder_requested(&self) {
        tracing::info!(
            target: LIFECYCLE_TARGET,
            event = "reminder_requested",
            "wallet inactive; requesting balance reminder"
        );
    }

    fn reminder_not_eligible(&self) {
        tracing::debug!(
            target: LIFECYCLE_TARGET,
            event = "reminder_not_eligible",
            "balance reminder conditions not met"
        );
    }
}
