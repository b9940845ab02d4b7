//! Lifecycle maintenance for the wallet daemon.
//!
//! The platform delivers a handful of lifecycle events to the wallet: the
//! device finished booting, or the application package was replaced by an
//! update. On either event the daemon makes sure a recurring blockchain sync
//! is scheduled and, if the user has neglected a funded wallet for long
//! enough, asks for an inactivity reminder. After an update it also migrates
//! the wallet to a deterministic key chain when that is still outstanding and
//! runs the wallet's maintenance pass.
//!
//! Delivery happens on a callback that must return quickly, so
//! [`BootstrapReceiver`] hands each event to its own worker thread and keeps
//! the delivery open with a [`CompletionToken`] until the worker ends.
//!
//! ## Failure contract
//!
//! Upgrade and maintenance are advisory. Their errors are reported through
//! the [`LifecycleReporter`] and never prevent sync scheduling or the
//! reminder check. Encrypted wallets are never upgraded on this path: no
//! background code may ask for, or assume, the spending password.

mod bootstrap;
mod event;
mod lifecycle;
mod orchestrator;
mod receiver;
mod reminder;
mod sync;
mod telemetry;
mod upgrade;
mod wallet;

pub use bootstrap::{
    BootstrapError, ConfigLoader, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
};
pub use event::{BOOT_COMPLETED, LifecycleEvent, PACKAGE_REPLACED};
pub use lifecycle::{LifecycleReporter, StructuredLifecycleReporter, UpgradeSkipReason};
pub use orchestrator::{BootstrapOrchestrator, HandleOutcome, MaintenancePolicy, WalletServices};
pub use receiver::{BootstrapReceiver, CompletionToken, ReceiverError, ReceiverHandle};
pub use reminder::{
    BalanceReminder, BalanceSource, InactivityReminder, ReminderNotifier, ReminderSink,
    UsageState, is_reminder_eligible,
};
pub use sync::{
    OCCASIONAL_USE_THRESHOLD, PeriodicSyncScheduler, RECENT_USE_THRESHOLD, SyncSchedule,
    SyncScheduler, sync_interval_for,
};
pub use telemetry::{TelemetryError, TelemetryHandle};
pub use upgrade::{UpgradeDecision, UpgradeOutcome, upgrade_wallet};
pub use wallet::{MaintenanceError, ScriptType, UpgradeError, Wallet};

#[cfg(test)]
mod tests;
