//! Off-thread delivery of lifecycle events.
//!
//! The event source expects its callback to return promptly but lets the
//! receiver hold the delivery open with a [`CompletionToken`]. Every delivery
//! spawns exactly one worker thread; the token travels with the worker and is
//! finished exactly once when the worker ends, whether it returns, panics, or
//! never starts.

use std::io;
use std::thread;

use thiserror::Error;
use tracing::{debug, error};

use crate::orchestrator::{BootstrapOrchestrator, HandleOutcome, WalletServices};
use crate::telemetry::TelemetryHandle;

/// Target used for receiver diagnostics.
const RECEIVER_TARGET: &str = "walletd::receiver";

const WORKER_NAME: &str = "walletd-lifecycle";

/// Keep-alive handed over by the event source for one delivery.
pub trait CompletionToken: Send {
    /// Signals the event source that handling has finished.
    fn finish(self: Box<Self>);
}

impl<F> CompletionToken for F
where
    F: FnOnce() + Send,
{
    fn finish(self: Box<Self>) {
        (*self)();
    }
}

/// Finishes the wrapped token when dropped.
struct PendingGuard {
    token: Option<Box<dyn CompletionToken>>,
}

impl PendingGuard {
    fn new(token: Box<dyn CompletionToken>) -> Self {
        Self { token: Some(token) }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            token.finish();
        }
    }
}

/// Errors surfaced while delivering an event to the worker.
#[derive(Debug, Error)]
pub enum ReceiverError {
    /// The worker thread could not be spawned.
    #[error("failed to spawn lifecycle worker: {source}")]
    Spawn {
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
    /// The worker thread panicked before finishing.
    #[error("lifecycle worker panicked")]
    WorkerPanic,
}

/// Handle to the worker processing one delivery.
///
/// Dropping the handle detaches the worker; it still runs to completion.
#[derive(Debug)]
pub struct ReceiverHandle {
    handle: thread::JoinHandle<HandleOutcome>,
}

impl ReceiverHandle {
    /// Waits for the worker and returns its outcome.
    pub fn join(self) -> Result<HandleOutcome, ReceiverError> {
        self.handle.join().map_err(|_| ReceiverError::WorkerPanic)
    }
}

/// Entry point for lifecycle events from the platform.
#[derive(Clone)]
pub struct BootstrapReceiver {
    orchestrator: BootstrapOrchestrator,
    services: WalletServices,
    telemetry: Option<TelemetryHandle>,
}

impl BootstrapReceiver {
    /// Builds a receiver dispatching to `services` through `orchestrator`.
    #[must_use]
    pub fn new(orchestrator: BootstrapOrchestrator, services: WalletServices) -> Self {
        Self {
            orchestrator,
            services,
            telemetry: None,
        }
    }

    /// Records that global telemetry was installed for this receiver.
    #[must_use]
    pub fn with_telemetry(mut self, handle: TelemetryHandle) -> Self {
        self.telemetry = Some(handle);
        self
    }

    /// Telemetry handle, present when built through bootstrap.
    #[must_use]
    pub fn telemetry(&self) -> Option<TelemetryHandle> {
        self.telemetry
    }

    /// Orchestrator used for each delivery.
    #[must_use]
    pub fn orchestrator(&self) -> &BootstrapOrchestrator {
        &self.orchestrator
    }

    /// Accepts one event delivery and hands it to a worker thread.
    ///
    /// Returns as soon as the worker is running. `token` is finished when the
    /// worker ends; if the worker cannot be spawned it is finished before this
    /// method returns the error.
    pub fn on_receive(
        &self,
        identifier: &str,
        token: Box<dyn CompletionToken>,
    ) -> Result<ReceiverHandle, ReceiverError> {
        debug!(
            target: RECEIVER_TARGET,
            event = "delivery_accepted",
            identifier,
            "got lifecycle delivery"
        );
        let guard = PendingGuard::new(token);
        let orchestrator = self.orchestrator.clone();
        let services = self.services.clone();
        let identifier = identifier.to_owned();

        let spawned = thread::Builder::new()
            .name(WORKER_NAME.to_owned())
            .spawn(move || {
                let _guard = guard;
                orchestrator.dispatch(&identifier, &services)
            });

        match spawned {
            Ok(handle) => Ok(ReceiverHandle { handle }),
            Err(source) => {
                error!(
                    target: RECEIVER_TARGET,
                    event = "worker_spawn_failed",
                    error = %source,
                    "failed to spawn lifecycle worker"
                );
                Err(ReceiverError::Spawn { source })
            }
        }
    }
}
