//! Test double for [`LifecycleReporter`] that records events for assertions.

use std::sync::Mutex;

use walletd_config::Config;

use crate::bootstrap::BootstrapError;
use crate::event::LifecycleEvent;
use crate::lifecycle::{LifecycleReporter, UpgradeSkipReason};
use crate::wallet::{MaintenanceError, ScriptType, UpgradeError};

/// Lifecycle events tracked during tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LifecycleRecord {
    BootstrapSucceeded,
    BootstrapFailed(String),
    EventReceived(LifecycleEvent),
    EventIgnored,
    UpgradeSkipped(UpgradeSkipReason),
    UpgradeCompleted(ScriptType),
    UpgradeFailed(String),
    MaintenanceCompleted,
    MaintenanceFailed(String),
    SyncEnsured,
    ReminderRequested,
    ReminderNotEligible,
}

/// Records lifecycle events for assertions.
#[derive(Debug, Default)]
pub struct RecordingLifecycleReporter {
    records: Mutex<Vec<LifecycleRecord>>,
}

impl RecordingLifecycleReporter {
    /// Captures a copy of the recorded events.
    #[must_use]
    pub fn records(&self) -> Vec<LifecycleRecord> {
        self.records
            .lock()
            .expect("lifecycle reporter mutex poisoned")
            .clone()
    }

    fn record(&self, record: LifecycleRecord) {
        self.records
            .lock()
            .expect("lifecycle reporter mutex poisoned")
            .push(record);
    }
}

impl LifecycleReporter for RecordingLifecycleReporter {
    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(LifecycleRecord::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(LifecycleRecord::BootstrapFailed(error.to_string()));
    }

    fn event_received(&self, _identifier: &str, event: LifecycleEvent) {
        self.record(LifecycleRecord::EventReceived(event));
    }

    fn event_ignored(&self, _identifier: &str) {
        self.record(LifecycleRecord::EventIgnored);
    }

    fn upgrade_skipped(&self, _script_type: ScriptType, reason: UpgradeSkipReason) {
        self.record(LifecycleRecord::UpgradeSkipped(reason));
    }

    fn upgrade_completed(&self, script_type: ScriptType) {
        self.record(LifecycleRecord::UpgradeCompleted(script_type));
    }

    fn upgrade_failed(&self, error: &UpgradeError) {
        self.record(LifecycleRecord::UpgradeFailed(error.message().to_owned()));
    }

    fn maintenance_completed(&self) {
        self.record(LifecycleRecord::MaintenanceCompleted);
    }

    fn maintenance_failed(&self, error: &MaintenanceError) {
        self.record(LifecycleRecord::MaintenanceFailed(error.message().to_owned()));
    }

    fn sync_ensured(&self) {
        self.record(LifecycleRecord::SyncEnsured);
    }

    fn reminder_requested(&self) {
        self.record(LifecycleRecord::ReminderRequested);
    }

    fn reminder_not_eligible(&self) {
        self.record(LifecycleRecord::ReminderNotEligible);
    }
}
