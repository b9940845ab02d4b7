//! Recurring blockchain synchronisation scheduling.
//!
//! [`PeriodicSyncScheduler`] holds a single job slot: ensuring a schedule
//! either creates it or refreshes it in place, so redelivered lifecycle
//! events can never stack duplicate sync jobs.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::info;

use crate::reminder::UsageState;

/// Target used for sync scheduling diagnostics.
const SYNC_TARGET: &str = "walletd::sync";

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Usage younger than this keeps the wallet on the short sync interval.
pub const RECENT_USE_THRESHOLD: Duration = HOUR;
/// Usage younger than this keeps the wallet on the half-day interval.
pub const OCCASIONAL_USE_THRESHOLD: Duration = Duration::from_secs(2 * 24 * 60 * 60);

/// Collaborator responsible for keeping a recurring sync scheduled.
pub trait SyncScheduler: Send + Sync {
    /// Ensures a recurring sync exists.
    ///
    /// Calls are idempotent with respect to the number of schedules: at most
    /// one recurring sync exists afterwards. When `force` is set an existing
    /// schedule is refreshed with the current parameters.
    fn ensure_scheduled(&self, force: bool);
}

impl<T> SyncScheduler for Arc<T>
where
    T: SyncScheduler + ?Sized,
{
    fn ensure_scheduled(&self, force: bool) {
        (**self).ensure_scheduled(force);
    }
}

/// Parameters of the active recurring sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSchedule {
    /// Time between sync runs.
    pub interval: Duration,
    /// Number of times the schedule was (re)installed.
    pub generation: u64,
}

/// Chooses the sync interval from how recently the wallet was used.
///
/// Active wallets sync every fifteen minutes, occasionally used wallets twice
/// a day, and dormant wallets once a day.
#[must_use]
pub fn sync_interval_for(last_used_ago: Duration) -> Duration {
    if last_used_ago < RECENT_USE_THRESHOLD {
        MINUTE * 15
    } else if last_used_ago < OCCASIONAL_USE_THRESHOLD {
        HOUR * 12
    } else {
        DAY
    }
}

/// Single-slot scheduler deriving its interval from wallet usage.
pub struct PeriodicSyncScheduler {
    usage: Arc<dyn UsageState>,
    slot: Mutex<Option<SyncSchedule>>,
}

impl PeriodicSyncScheduler {
    /// Builds a scheduler with no schedule installed.
    #[must_use]
    pub fn new(usage: Arc<dyn UsageState>) -> Self {
        Self {
            usage,
            slot: Mutex::new(None),
        }
    }

    /// Returns the active schedule, if one is installed.
    #[must_use]
    pub fn current(&self) -> Option<SyncSchedule> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SyncScheduler for PeriodicSyncScheduler {
    fn ensure_scheduled(&self, force: bool) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = slot.as_ref()
            && !force
        {
            info!(
                target: SYNC_TARGET,
                event = "sync_schedule_kept",
                interval_secs = existing.interval.as_secs(),
                "recurring sync already scheduled"
            );
            return;
        }

        let interval = sync_interval_for(self.usage.last_used_ago());
        let generation = slot.map_or(1, |existing| existing.generation + 1);
        *slot = Some(SyncSchedule {
            interval,
            generation,
        });
        info!(
            target: SYNC_TARGET,
            event = "sync_scheduled",
            interval_secs = interval.as_secs(),
            generation,
            "recurring sync scheduled"
        );
    }
}
