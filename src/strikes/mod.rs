//! Lightning strike data
//!
//! Record types shared by the simulator endpoint and the report, the
//! simulator itself, and the sources the report can pull strikes from.

pub mod simulator;
pub mod source;

pub use simulator::StrikeSimulator;
pub use source::{HttpSource, InProcessSource, SimulatorClient, StrikeSource};

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// One simulated lightning strike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeRecord {
    /// Prefix plus a random 4-digit number; not unique across a batch
    #[serde(default)]
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Peak current in kiloamperes
    #[serde(rename = "intensity_kA")]
    pub intensity_ka: u32,
}

impl StrikeRecord {
    /// Position of the strike
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Body of `GET /api/kma/lightning-strikes`
///
/// Every field defaults on decode so a sparse upstream body still parses;
/// a missing `data` reads as no strikes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub data: Vec<StrikeRecord>,
}

impl SimulatorResponse {
    /// Wrap a batch in a success envelope
    pub fn success(source: impl Into<String>, data: Vec<StrikeRecord>) -> Self {
        Self {
            status: "success".to_string(),
            source: source.into(),
            data,
        }
    }
}
