//! Strike simulator
//!
//! Scatters 0..=max strikes in a square of ±offset degrees around the
//! origin. The square is wider than the 5 km monitoring circle, so a batch
//! usually holds strikes on both sides of the radius.

use crate::config::SimulatorConfig;
use crate::constants::geo::COORDINATE_DECIMALS;
use crate::constants::simulator::{ID_MAX, ID_MIN, INTENSITY_MAX, INTENSITY_MIN};
use crate::geo::Coordinate;
use crate::random::RandomSource;
use crate::strikes::{SimulatorResponse, StrikeRecord};
use tracing::debug;

/// Stateless strike batch generator
#[derive(Debug, Clone)]
pub struct StrikeSimulator {
    center: Coordinate,
    source: String,
    max_strikes: u32,
    offset_deg: f64,
    id_prefix: String,
}

impl StrikeSimulator {
    /// Create a simulator centred on `center`
    ///
    /// `config` is expected to have passed `Config::validate`; a negative
    /// or non-finite offset makes `simulate` panic.
    pub fn new(center: Coordinate, config: &SimulatorConfig) -> Self {
        Self {
            center,
            source: config.source.clone(),
            max_strikes: config.max_strikes,
            offset_deg: config.offset_deg,
            id_prefix: config.id_prefix.clone(),
        }
    }

    /// Source label reported alongside each batch
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Generate one batch of strikes
    ///
    /// Identifiers are drawn independently and may collide.
    pub fn simulate(&self, rng: &dyn RandomSource) -> Vec<StrikeRecord> {
        let count = rng.int_in(0, self.max_strikes);
        let strikes: Vec<StrikeRecord> = (0..count).map(|_| self.strike(rng)).collect();
        debug!(count = strikes.len(), "simulated strike batch");
        strikes
    }

    /// Generate one batch wrapped in the endpoint envelope
    pub fn respond(&self, rng: &dyn RandomSource) -> SimulatorResponse {
        SimulatorResponse::success(self.source.clone(), self.simulate(rng))
    }

    fn strike(&self, rng: &dyn RandomSource) -> StrikeRecord {
        let d_lat = rng.float_in(-self.offset_deg, self.offset_deg);
        let d_lon = rng.float_in(-self.offset_deg, self.offset_deg);
        let position = self.center.offset(d_lat, d_lon).rounded(COORDINATE_DECIMALS);

        StrikeRecord {
            id: format!("{}{}", self.id_prefix, rng.int_in(ID_MIN, ID_MAX)),
            latitude: position.latitude,
            longitude: position.longitude,
            intensity_ka: rng.int_in(INTENSITY_MIN, INTENSITY_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::pseudo::{SeededRandom, ThreadRandom};

    fn gimpo_simulator() -> StrikeSimulator {
        StrikeSimulator::new(Coordinate::new(37.558, 126.794), &SimulatorConfig::default())
    }

    #[test]
    fn test_batch_bounds() {
        let sim = gimpo_simulator();
        let rng = ThreadRandom::new();

        for _ in 0..500 {
            let batch = sim.simulate(&rng);
            assert!(batch.len() <= 5);
            for s in &batch {
                assert!((10..=100).contains(&s.intensity_ka));
                // rounding can push a draw of exactly ±0.06 by half a micro-degree
                assert!((s.latitude - 37.558).abs() <= 0.06 + 1e-6);
                assert!((s.longitude - 126.794).abs() <= 0.06 + 1e-6);
            }
        }
    }

    #[test]
    fn test_ids_have_prefix_and_four_digits() {
        let sim = gimpo_simulator();
        let rng = SeededRandom::new(3);

        for _ in 0..100 {
            for s in sim.simulate(&rng) {
                let digits = s.id.strip_prefix("strike_").expect("prefix");
                assert_eq!(digits.len(), 4);
                let n: u32 = digits.parse().unwrap();
                assert!((1000..=9999).contains(&n));
            }
        }
    }

    #[test]
    fn test_coordinates_rounded() {
        let sim = gimpo_simulator();
        let rng = SeededRandom::new(11);

        for _ in 0..50 {
            for s in sim.simulate(&rng) {
                let scaled = s.latitude * 1e6;
                assert!((scaled - scaled.round()).abs() < 1e-3);
                let scaled = s.longitude * 1e6;
                assert!((scaled - scaled.round()).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_every_count_occurs() {
        let sim = gimpo_simulator();
        let rng = SeededRandom::new(99);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[sim.simulate(&rng).len()] = true;
        }
        assert!(seen.iter().all(|s| *s), "counts seen: {:?}", seen);
    }

    #[test]
    fn test_seeded_batches_reproducible() {
        let sim = gimpo_simulator();
        let a = sim.simulate(&SeededRandom::new(5));
        let b = sim.simulate(&SeededRandom::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_respond_envelope() {
        let sim = gimpo_simulator();
        let response = sim.respond(&SeededRandom::new(1));
        assert_eq!(response.status, "success");
        assert_eq!(response.source, "KMA Virtual Lightning Detector");
    }

    #[test]
    fn test_zero_max_strikes() {
        let config = SimulatorConfig {
            max_strikes: 0,
            ..SimulatorConfig::default()
        };
        let sim = StrikeSimulator::new(Coordinate::new(0.0, 0.0), &config);
        assert!(sim.simulate(&ThreadRandom::new()).is_empty());
    }
}
