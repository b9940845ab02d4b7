//! Classification of system lifecycle events.

use std::fmt;

/// Identifier delivered once the device has finished booting.
pub const BOOT_COMPLETED: &str = "android.intent.action.BOOT_COMPLETED";

/// Identifier delivered after the application package was replaced.
pub const PACKAGE_REPLACED: &str = "android.intent.action.MY_PACKAGE_REPLACED";

/// Lifecycle trigger relevant to wallet maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The device finished booting.
    BootCompleted,
    /// The application was updated in place.
    PackageReplaced,
    /// Any other event; handled as a no-op.
    Other,
}

impl LifecycleEvent {
    /// Maps a raw event identifier onto a lifecycle event.
    ///
    /// Matching is exact. Unrecognised identifiers map to
    /// [`LifecycleEvent::Other`].
    #[must_use]
    pub fn classify(identifier: &str) -> Self {
        match identifier {
            BOOT_COMPLETED => Self::BootCompleted,
            PACKAGE_REPLACED => Self::PackageReplaced,
            _ => Self::Other,
        }
    }

    /// Whether the event triggers any maintenance at all.
    #[must_use]
    pub fn is_relevant(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BootCompleted => "boot_completed",
            Self::PackageReplaced => "package_replaced",
            Self::Other => "other",
        };
        formatter.write_str(label)
    }
}
