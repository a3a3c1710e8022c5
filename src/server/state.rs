//! Server shared state
//!
//! Everything here is fixed at startup; handlers only read it.

use crate::config::{Config, SimulatorLink};
use crate::error::{Error, Result};
use crate::geo::MonitoringOrigin;
use crate::random::pseudo::ThreadRandom;
use crate::random::RandomSource;
use crate::strikes::{HttpSource, InProcessSource, SimulatorClient, StrikeSimulator};
use std::sync::Arc;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<Config>,

    /// Point and radius the report filters against
    pub origin: MonitoringOrigin,

    simulator: Arc<StrikeSimulator>,
    rng: Arc<dyn RandomSource>,
    http: reqwest::Client,
}

impl AppState {
    /// Create new application state backed by the thread RNG
    pub fn new(config: Config) -> Result<Self> {
        Self::with_rng(config, Arc::new(ThreadRandom::new()))
    }

    /// Create application state with a specific random source
    ///
    /// # Errors
    /// Any error from `Config::validate`.
    pub fn with_rng(config: Config, rng: Arc<dyn RandomSource>) -> Result<Self> {
        config.validate()?;
        let origin = MonitoringOrigin::from_config(&config.monitoring)?;
        let simulator = Arc::new(StrikeSimulator::new(origin.center, &config.simulator));

        Ok(Self {
            config: Arc::new(config),
            origin,
            simulator,
            rng,
            http: reqwest::Client::new(),
        })
    }

    /// Random source shared by all handlers
    pub fn rng(&self) -> &dyn RandomSource {
        self.rng.as_ref()
    }

    /// The strike simulator served at `/api/kma/lightning-strikes`
    pub fn simulator(&self) -> &StrikeSimulator {
        &self.simulator
    }

    /// Pick the strike source for one report request
    ///
    /// `request_base` is the scheme and host the request arrived on; it is
    /// only used by the `http` link when no base URL is configured.
    pub fn strike_source(&self, request_base: Option<&str>) -> Result<SimulatorClient> {
        match self.config.report.link {
            SimulatorLink::InProcess => Ok(SimulatorClient::InProcess(InProcessSource::new(
                self.simulator.clone(),
                self.rng.clone(),
            ))),
            SimulatorLink::Http => {
                let base = self
                    .config
                    .report
                    .base_url
                    .as_deref()
                    .or(request_base)
                    .ok_or_else(|| {
                        Error::Upstream("no simulator base URL and no request host".to_string())
                    })?;
                Ok(SimulatorClient::Http(HttpSource::with_client(
                    self.http.clone(),
                    base,
                )))
            }
        }
    }
}
