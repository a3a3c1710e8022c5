//! Proximity report
//!
//! Keeps the strikes that fall inside the monitoring radius.

use crate::geo::MonitoringOrigin;
use crate::strikes::StrikeRecord;
use serde::{Deserialize, Serialize};

/// Body of a successful `GET /api/gmp/lightning-report`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub status: String,
    pub report_for: String,
    pub nearby_strikes_count: usize,
    pub strikes: Vec<StrikeRecord>,
}

/// Keep the strikes inside the origin's radius, in their original order
pub fn filter_nearby(origin: &MonitoringOrigin, strikes: Vec<StrikeRecord>) -> Vec<StrikeRecord> {
    strikes
        .into_iter()
        .filter(|s| origin.contains(s.position()))
        .collect()
}

/// Build the report for a batch of strikes
pub fn build_report(origin: &MonitoringOrigin, strikes: Vec<StrikeRecord>) -> Report {
    let nearby = filter_nearby(origin, strikes);
    Report {
        status: "success".to_string(),
        report_for: origin.label.clone(),
        nearby_strikes_count: nearby.len(),
        strikes: nearby,
    }
}
