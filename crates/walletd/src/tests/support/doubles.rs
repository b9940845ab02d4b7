//! Recording collaborators shared by the unit and behaviour suites.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use crate::orchestrator::WalletServices;
use crate::reminder::{ReminderNotifier, UsageState};
use crate::sync::SyncScheduler;
use crate::wallet::{MaintenanceError, ScriptType, UpgradeError, Wallet};

/// Wallet whose answers and failures are scripted by the test.
///
/// A successful upgrade clears the "upgrade required" flag, mirroring a real
/// wallet that is already deterministic afterwards.
#[derive(Debug, Default)]
pub struct ScriptedWallet {
    requires_upgrade: AtomicBool,
    encrypted: AtomicBool,
    fail_upgrade: AtomicBool,
    fail_maintenance: AtomicBool,
    upgrades: AtomicUsize,
    maintenance_runs: AtomicUsize,
}

impl ScriptedWallet {
    pub fn set_requires_upgrade(&self, value: bool) {
        self.requires_upgrade.store(value, Ordering::SeqCst);
    }

    pub fn set_encrypted(&self, value: bool) {
        self.encrypted.store(value, Ordering::SeqCst);
    }

    pub fn fail_upgrade(&self) {
        self.fail_upgrade.store(true, Ordering::SeqCst);
    }

    pub fn fail_maintenance(&self) {
        self.fail_maintenance.store(true, Ordering::SeqCst);
    }

    pub fn upgrades(&self) -> usize {
        self.upgrades.load(Ordering::SeqCst)
    }

    pub fn maintenance_runs(&self) -> usize {
        self.maintenance_runs.load(Ordering::SeqCst)
    }
}

impl Wallet for ScriptedWallet {
    fn requires_deterministic_upgrade(&self, _script_type: ScriptType) -> bool {
        self.requires_upgrade.load(Ordering::SeqCst)
    }

    fn is_encrypted(&self) -> bool {
        self.encrypted.load(Ordering::SeqCst)
    }

    fn upgrade_to_deterministic(&self, script_type: ScriptType) -> Result<(), UpgradeError> {
        self.upgrades.fetch_add(1, Ordering::SeqCst);
        if self.fail_upgrade.load(Ordering::SeqCst) {
            return Err(UpgradeError::new(script_type, "key chain locked by test"));
        }
        self.requires_upgrade.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn do_maintenance(&self, _strict: bool) -> Result<(), MaintenanceError> {
        self.maintenance_runs.fetch_add(1, Ordering::SeqCst);
        if self.fail_maintenance.load(Ordering::SeqCst) {
            return Err(MaintenanceError::new("intentional maintenance failure"));
        }
        Ok(())
    }
}

/// Usage state with adjustable answers.
#[derive(Debug, Default)]
pub struct FixedUsage {
    remind_balance: AtomicBool,
    used: AtomicBool,
    last_used_ago_ms: AtomicU64,
}

impl FixedUsage {
    pub fn new(remind_balance: bool, used: bool, last_used_ago: Duration) -> Self {
        let usage = Self::default();
        usage.set(remind_balance, used, last_used_ago);
        usage
    }

    pub fn set(&self, remind_balance: bool, used: bool, last_used_ago: Duration) {
        self.remind_balance.store(remind_balance, Ordering::SeqCst);
        self.used.store(used, Ordering::SeqCst);
        let millis = u64::try_from(last_used_ago.as_millis()).unwrap_or(u64::MAX);
        self.last_used_ago_ms.store(millis, Ordering::SeqCst);
    }
}

impl UsageState for FixedUsage {
    fn remind_balance_enabled(&self) -> bool {
        self.remind_balance.load(Ordering::SeqCst)
    }

    fn has_been_used(&self) -> bool {
        self.used.load(Ordering::SeqCst)
    }

    fn last_used_ago(&self) -> Duration {
        Duration::from_millis(self.last_used_ago_ms.load(Ordering::SeqCst))
    }
}

/// Scheduler that counts `ensure_scheduled` calls.
#[derive(Debug, Default)]
pub struct CountingScheduler {
    calls: AtomicUsize,
    forced: AtomicUsize,
}

impl CountingScheduler {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn forced_calls(&self) -> usize {
        self.forced.load(Ordering::SeqCst)
    }
}

impl SyncScheduler for CountingScheduler {
    fn ensure_scheduled(&self, force: bool) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if force {
            self.forced.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Notifier that counts reminder requests.
#[derive(Debug, Default)]
pub struct CountingNotifier {
    calls: AtomicUsize,
}

impl CountingNotifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReminderNotifier for CountingNotifier {
    fn maybe_show_reminder(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Completion token that counts how often it was finished.
#[derive(Debug, Clone, Default)]
pub struct RecordingToken {
    finished: Arc<AtomicUsize>,
}

impl RecordingToken {
    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    /// Boxed token sharing this recorder's counter.
    pub fn token(&self) -> Box<dyn crate::receiver::CompletionToken> {
        let finished = Arc::clone(&self.finished);
        Box::new(move || {
            finished.fetch_add(1, Ordering::SeqCst);
        })
    }
}

/// Bundles the doubles into a [`WalletServices`] value.
pub fn services(
    wallet: &Arc<ScriptedWallet>,
    usage: &Arc<FixedUsage>,
    scheduler: &Arc<dyn SyncScheduler>,
    notifier: &Arc<CountingNotifier>,
) -> WalletServices {
    WalletServices {
        wallet: wallet.clone(),
        usage: usage.clone(),
        scheduler: Arc::clone(scheduler),
        notifier: notifier.clone(),
    }
}
