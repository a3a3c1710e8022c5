//! Geographic primitives
//!
//! Coordinates and the flat-earth radius test used by the report.

pub mod radius;

pub use radius::MonitoringOrigin;

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees
///
/// Not range-checked; simulated points may be any finite value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Offset this coordinate by the given degree deltas
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.latitude + d_lat, self.longitude + d_lon)
    }

    /// Round both axes to `decimals` places
    pub fn rounded(&self, decimals: i32) -> Self {
        Self::new(round_to(self.latitude, decimals), round_to(self.longitude, decimals))
    }
}

/// Round a value to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_six_places() {
        assert_relative_eq!(round_to(37.5581234567, 6), 37.558123);
        assert_relative_eq!(round_to(126.7949999996, 6), 126.795);
        assert_relative_eq!(round_to(-0.0000004, 6), 0.0);
    }

    #[test]
    fn test_offset_and_round() {
        let origin = Coordinate::new(37.558, 126.794);
        let p = origin.offset(0.0123456789, -0.0598765432).rounded(6);
        assert_relative_eq!(p.latitude, 37.570346, epsilon = 1e-9);
        assert_relative_eq!(p.longitude, 126.734123, epsilon = 1e-9);
    }
}
