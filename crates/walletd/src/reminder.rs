//! Inactivity reminder eligibility and the balance-aware notifier.
//!
//! The lifecycle handler only decides whether the user *may* be reminded.
//! Whether a reminder is actually shown is up to the [`ReminderNotifier`];
//! [`BalanceReminder`] suppresses it for empty wallets.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::lifecycle::LIFECYCLE_TARGET;

/// Read-only view of the user's wallet usage preferences and history.
pub trait UsageState: Send + Sync {
    /// Whether the user opted in to balance reminders.
    fn remind_balance_enabled(&self) -> bool;

    /// Whether the wallet has ever been opened by the user.
    fn has_been_used(&self) -> bool;

    /// Time elapsed since the wallet was last opened.
    fn last_used_ago(&self) -> Duration;
}

impl<T> UsageState for Arc<T>
where
    T: UsageState + ?Sized,
{
    fn remind_balance_enabled(&self) -> bool {
        (**self).remind_balance_enabled()
    }

    fn has_been_used(&self) -> bool {
        (**self).has_been_used()
    }

    fn last_used_ago(&self) -> Duration {
        (**self).last_used_ago()
    }
}

/// Collaborator that may surface an inactivity reminder to the user.
pub trait ReminderNotifier: Send + Sync {
    /// Shows the reminder if the notifier's own conditions allow it.
    fn maybe_show_reminder(&self);
}

impl<T> ReminderNotifier for Arc<T>
where
    T: ReminderNotifier + ?Sized,
{
    fn maybe_show_reminder(&self) {
        (**self).maybe_show_reminder();
    }
}

/// Returns `true` when an inactivity reminder may be shown.
///
/// All three conditions must hold: reminders are enabled, the wallet has been
/// used at least once, and the last use lies strictly further back than
/// `threshold`.
#[must_use]
pub fn is_reminder_eligible(config: &dyn UsageState, threshold: Duration) -> bool {
    config.remind_balance_enabled() && config.has_been_used() && config.last_used_ago() > threshold
}

/// Source of the wallet's spendable balance estimate.
pub trait BalanceSource: Send + Sync {
    /// Estimated balance in satoshis, including unconfirmed incoming funds.
    fn estimated_balance_sats(&self) -> u64;
}

/// Reminder payload handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityReminder {
    /// Balance the wallet holds, in satoshis.
    pub balance_sats: u64,
}

/// Presentation layer that displays reminders.
pub trait ReminderSink: Send + Sync {
    /// Displays the reminder.
    fn post(&self, reminder: InactivityReminder);
}

/// Notifier that only reminds users whose wallet still holds funds.
pub struct BalanceReminder {
    balance: Arc<dyn BalanceSource>,
    sink: Arc<dyn ReminderSink>,
}

impl BalanceReminder {
    /// Builds a notifier over the supplied balance source and sink.
    #[must_use]
    pub fn new(balance: Arc<dyn BalanceSource>, sink: Arc<dyn ReminderSink>) -> Self {
        Self { balance, sink }
    }
}

impl ReminderNotifier for BalanceReminder {
    fn maybe_show_reminder(&self) {
        let balance_sats = self.balance.estimated_balance_sats();
        if balance_sats == 0 {
            debug!(
                target: LIFECYCLE_TARGET,
                event = "reminder_suppressed",
                "wallet is empty; skipping inactivity reminder"
            );
            return;
        }
        self.sink.post(InactivityReminder { balance_sats });
    }
}
