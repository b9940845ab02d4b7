//! Receiver bootstrap: configuration, telemetry, and collaborator wiring.

use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;

use walletd_config::Config;

use crate::lifecycle::LifecycleReporter;
use crate::orchestrator::{BootstrapOrchestrator, MaintenancePolicy, WalletServices};
use crate::receiver::BootstrapReceiver;
use crate::telemetry::{self, TelemetryError};

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the daemon configuration.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`Config::load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader returning a fixed configuration.
#[derive(Debug, Default, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Builds a loader that always yields `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
}

/// Builds a lifecycle receiver from configuration and collaborators.
///
/// Loads configuration through `loader`, installs telemetry, and derives the
/// maintenance policy. Failures are reported to `reporter` before being
/// returned.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn LifecycleReporter>,
    services: WalletServices,
) -> Result<BootstrapReceiver, BootstrapError> {
    let config = loader.load().map_err(|source| {
        let error = BootstrapError::Configuration { source };
        reporter.bootstrap_failed(&error);
        error
    })?;

    let handle = telemetry::initialise(&config).map_err(|source| {
        let error = BootstrapError::Telemetry { source };
        reporter.bootstrap_failed(&error);
        error
    })?;

    let orchestrator =
        BootstrapOrchestrator::new(MaintenancePolicy::from_config(&config), reporter.clone());
    reporter.bootstrap_succeeded(&config);

    Ok(BootstrapReceiver::new(orchestrator, services).with_telemetry(handle))
}
