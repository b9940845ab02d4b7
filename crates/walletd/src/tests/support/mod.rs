//! Test harness utilities for the lifecycle suites.

mod doubles;
mod reporter;

pub use doubles::{
    CountingNotifier, CountingScheduler, FixedUsage, RecordingToken, ScriptedWallet, services,
};
pub use reporter::{LifecycleRecord, RecordingLifecycleReporter};
pub use world::{TestWorld, world};
