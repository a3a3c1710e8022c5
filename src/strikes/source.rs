//! Strike sources for the report
//!
//! The report asks a `StrikeSource` for the current batch. By default that is
//! the simulator running in the same process; the `http` link instead calls
//! the simulator endpoint, either at a configured base URL or at the host the
//! report request came in on.

use crate::constants::paths;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::strikes::{SimulatorResponse, StrikeRecord, StrikeSimulator};
use std::sync::Arc;
use tracing::debug;

/// Trait for anything that can hand the report a strike batch
pub trait StrikeSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Fetch the current batch of strikes
    fn fetch(&self) -> impl std::future::Future<Output = Result<Vec<StrikeRecord>>> + Send;
}

/// Direct call into a simulator in the same process
#[derive(Clone)]
pub struct InProcessSource {
    simulator: Arc<StrikeSimulator>,
    rng: Arc<dyn RandomSource>,
}

impl InProcessSource {
    pub fn new(simulator: Arc<StrikeSimulator>, rng: Arc<dyn RandomSource>) -> Self {
        Self { simulator, rng }
    }
}

impl StrikeSource for InProcessSource {
    fn name(&self) -> &'static str {
        "in_process"
    }

    async fn fetch(&self) -> Result<Vec<StrikeRecord>> {
        Ok(self.simulator.simulate(self.rng.as_ref()))
    }
}

/// Simulator reached over HTTP
///
/// No timeout and no retry: a hung simulator hangs the report.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source for the simulator served under `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a source sharing an existing client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Full URL of the strikes endpoint
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, paths::STRIKES)
    }
}

impl StrikeSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> Result<Vec<StrikeRecord>> {
        let url = self.url();
        debug!(%url, "fetching strikes");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!("{} returned {}", url, status)));
        }

        let body: SimulatorResponse = response.json().await?;
        Ok(body.data)
    }
}

/// The source chosen for one report request
#[derive(Clone)]
pub enum SimulatorClient {
    InProcess(InProcessSource),
    Http(HttpSource),
}

impl StrikeSource for SimulatorClient {
    fn name(&self) -> &'static str {
        match self {
            Self::InProcess(s) => s.name(),
            Self::Http(s) => s.name(),
        }
    }

    async fn fetch(&self) -> Result<Vec<StrikeRecord>> {
        match self {
            Self::InProcess(s) => s.fetch().await,
            Self::Http(s) => s.fetch().await,
        }
    }
}
