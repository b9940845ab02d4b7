//! Deterministic wallet upgrade and maintenance step.
//!
//! Runs only for package-replaced events. Neither the upgrade nor the
//! maintenance pass may abort the surrounding lifecycle handling: failures are
//! reported and swallowed here.

use crate::lifecycle::{LifecycleReporter, UpgradeSkipReason};
use crate::wallet::{ScriptType, Wallet};

/// What happened to the deterministic upgrade during one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeDecision {
    /// The upgrade ran and succeeded.
    Upgraded,
    /// The upgrade ran and failed; the failure was reported.
    Failed,
    /// The upgrade did not run.
    Skipped(UpgradeSkipReason),
}

/// Result of one upgrade and maintenance pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeOutcome {
    /// Upgrade branch taken.
    pub decision: UpgradeDecision,
    /// Whether the maintenance pass succeeded.
    pub maintenance_ok: bool,
}

/// Upgrades `wallet` to a deterministic key chain when required and possible,
/// then runs a lenient maintenance pass.
///
/// Encrypted wallets are never upgraded here: no background path has access
/// to the spending password, so migration waits for the next interactive
/// unlock.
#[must_use]
pub fn upgrade_wallet(
    wallet: &dyn Wallet,
    target: ScriptType,
    reporter: &dyn LifecycleReporter,
) -> UpgradeOutcome {
    let decision = if !wallet.requires_deterministic_upgrade(target) {
        reporter.upgrade_skipped(target, UpgradeSkipReason::NotRequired);
        UpgradeDecision::Skipped(UpgradeSkipReason::NotRequired)
    } else if wallet.is_encrypted() {
        reporter.upgrade_skipped(target, UpgradeSkipReason::Encrypted);
        UpgradeDecision::Skipped(UpgradeSkipReason::Encrypted)
    } else {
        match wallet.upgrade_to_deterministic(target) {
            Ok(()) => {
                reporter.upgrade_completed(target);
                UpgradeDecision::Upgraded
            }
            Err(error) => {
                reporter.upgrade_failed(&error);
                UpgradeDecision::Failed
            }
        }
    };

    let maintenance_ok = match wallet.do_maintenance(false) {
        Ok(()) => {
            reporter.maintenance_completed();
            true
        }
        Err(error) => {
            reporter.maintenance_failed(&error);
            false
        }
    };

    UpgradeOutcome {
        decision,
        maintenance_ok,
    }
}
