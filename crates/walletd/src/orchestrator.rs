//! Lifecycle event orchestration.

use std::sync::Arc;
use std::time::Duration;

use walletd_config::Config;

use crate::event::LifecycleEvent;
use crate::lifecycle::LifecycleReporter;
use crate::reminder::{ReminderNotifier, UsageState, is_reminder_eligible};
use crate::sync::SyncScheduler;
use crate::upgrade::{UpgradeOutcome, upgrade_wallet};
use crate::wallet::{ScriptType, Wallet};

/// Collaborators the orchestrator acts upon.
#[derive(Clone)]
pub struct WalletServices {
    /// Wallet whose key chain and internal state are maintained.
    pub wallet: Arc<dyn Wallet>,
    /// User usage preferences and history.
    pub usage: Arc<dyn UsageState>,
    /// Recurring blockchain sync scheduler.
    pub scheduler: Arc<dyn SyncScheduler>,
    /// Inactivity reminder notifier.
    pub notifier: Arc<dyn ReminderNotifier>,
}

/// Summary of the steps taken for one lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandleOutcome {
    /// Upgrade pass result, present for package-replaced events.
    pub upgrade: Option<UpgradeOutcome>,
    /// Whether the recurring sync was ensured.
    pub sync_ensured: bool,
    /// Whether the reminder notifier was invoked.
    pub reminder_requested: bool,
}

/// Policy applied to every handled lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenancePolicy {
    /// Script type the deterministic upgrade targets.
    pub upgrade_script_type: ScriptType,
    /// Inactivity window after which the balance reminder applies.
    pub inactivity_threshold: Duration,
}

impl MaintenancePolicy {
    /// Derives the policy from the resolved daemon configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            upgrade_script_type: config.upgrade_script_type(),
            inactivity_threshold: config.inactivity_threshold(),
        }
    }
}

impl Default for MaintenancePolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Stateless dispatcher for lifecycle maintenance.
///
/// The orchestrator keeps no mutable state of its own, so concurrent or
/// redelivered events are safe as long as the collaborators are.
#[derive(Clone)]
pub struct BootstrapOrchestrator {
    policy: MaintenancePolicy,
    reporter: Arc<dyn LifecycleReporter>,
}

impl BootstrapOrchestrator {
    /// Builds an orchestrator applying `policy`.
    #[must_use]
    pub fn new(policy: MaintenancePolicy, reporter: Arc<dyn LifecycleReporter>) -> Self {
        Self { policy, reporter }
    }

    /// Policy applied to handled events.
    #[must_use]
    pub fn policy(&self) -> MaintenancePolicy {
        self.policy
    }

    /// Handles one lifecycle event against the supplied collaborators.
    ///
    /// `Other` events touch no collaborator. Package replacement runs the
    /// upgrade step first; both relevant events then ensure the recurring
    /// sync and evaluate the inactivity reminder. Upgrade and maintenance
    /// failures are reported but never stop the later steps.
    #[must_use]
    pub fn handle(
        &self,
        event: LifecycleEvent,
        wallet: &dyn Wallet,
        config: &dyn UsageState,
        scheduler: &dyn SyncScheduler,
        notifier: &dyn ReminderNotifier,
    ) -> HandleOutcome {
        if !event.is_relevant() {
            return HandleOutcome::default();
        }

        let upgrade = (event == LifecycleEvent::PackageReplaced).then(|| {
            upgrade_wallet(wallet, self.policy.upgrade_script_type, &*self.reporter)
        });

        scheduler.ensure_scheduled(true);
        self.reporter.sync_ensured();

        let reminder_requested = is_reminder_eligible(config, self.policy.inactivity_threshold);
        if reminder_requested {
            self.reporter.reminder_requested();
            notifier.maybe_show_reminder();
        } else {
            self.reporter.reminder_not_eligible();
        }

        HandleOutcome {
            upgrade,
            sync_ensured: true,
            reminder_requested,
        }
    }

    /// Classifies `identifier` and handles it against `services`.
    #[must_use]
    pub fn dispatch(&self, identifier: &str, services: &WalletServices) -> HandleOutcome {
        let event = LifecycleEvent::classify(identifier);
        self.reporter.event_received(identifier, event);
        if !event.is_relevant() {
            self.reporter.event_ignored(identifier);
        }
        self.handle(
            event,
            &*services.wallet,
            &*services.usage,
            &*services.scheduler,
            &*services.notifier,
        )
    }
}
