//! Monitoring radius test
//!
//! Distances are measured in plain degrees on a flat plane, with the radius
//! converted from kilometers at a fixed 111 km per degree. This only holds
//! for small radii around the origin; it is not a geodesic distance and
//! longitude degrees are not scaled by latitude.

use crate::config::MonitoringConfig;
use crate::constants::geo::KM_PER_DEGREE;
use crate::error::{Error, Result};
use crate::geo::Coordinate;
use serde::Serialize;

/// The fixed point and radius strikes are reported against
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringOrigin {
    /// Label used as `report_for`
    pub label: String,
    pub center: Coordinate,
    pub radius_km: f64,
}

impl MonitoringOrigin {
    /// Create a new origin
    ///
    /// # Errors
    /// `InvalidRadius` if the radius is not a positive finite number,
    /// `InvalidCoordinates` if the center is not finite.
    pub fn new(label: impl Into<String>, center: Coordinate, radius_km: f64) -> Result<Self> {
        if !center.latitude.is_finite() || !center.longitude.is_finite() {
            return Err(Error::InvalidCoordinates(format!(
                "Origin ({}, {}) is not finite",
                center.latitude, center.longitude
            )));
        }
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(Error::InvalidRadius(format!(
                "Radius must be positive, got {} km",
                radius_km
            )));
        }
        Ok(Self {
            label: label.into(),
            center,
            radius_km,
        })
    }

    /// Build the origin from the `[monitoring]` config section
    pub fn from_config(config: &MonitoringConfig) -> Result<Self> {
        Self::new(
            config.label.clone(),
            Coordinate::new(config.latitude, config.longitude),
            config.radius_km,
        )
    }

    /// Radius converted to degrees
    pub fn radius_in_degrees(&self) -> f64 {
        self.radius_km / KM_PER_DEGREE
    }

    /// Squared planar distance from the center, in degrees²
    pub fn distance_sq(&self, point: Coordinate) -> f64 {
        let d_lat = point.latitude - self.center.latitude;
        let d_lon = point.longitude - self.center.longitude;
        d_lat * d_lat + d_lon * d_lon
    }

    /// True if `point` lies strictly inside the radius
    ///
    /// Points exactly on the boundary are outside.
    pub fn contains(&self, point: Coordinate) -> bool {
        let r = self.radius_in_degrees();
        self.distance_sq(point) < r * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gimpo() -> MonitoringOrigin {
        MonitoringOrigin::new("Gimpo Airport (GMP)", Coordinate::new(37.558, 126.794), 5.0)
            .unwrap()
    }

    #[test]
    fn test_radius_in_degrees() {
        assert_relative_eq!(gimpo().radius_in_degrees(), 0.045045045, epsilon = 1e-8);
    }

    #[test]
    fn test_center_is_inside() {
        assert!(gimpo().contains(Coordinate::new(37.558, 126.794)));
    }

    #[test]
    fn test_far_point_is_outside() {
        // Δlat ≈ 0.142°, about three radii away
        assert!(!gimpo().contains(Coordinate::new(37.700, 126.794)));
    }

    #[test]
    fn test_nearby_point_is_inside() {
        assert!(gimpo().contains(Coordinate::new(37.560, 126.795)));
    }

    #[test]
    fn test_boundary_is_excluded() {
        let origin = MonitoringOrigin::new("unit", Coordinate::new(0.0, 0.0), 111.0).unwrap();
        // radius is exactly 1 degree
        assert!(!origin.contains(Coordinate::new(1.0, 0.0)));
        assert!(!origin.contains(Coordinate::new(0.0, -1.0)));
        assert!(origin.contains(Coordinate::new(0.999, 0.0)));
    }

    #[test]
    fn test_planar_not_geodesic() {
        // Diagonal point: each axis inside, combined distance outside
        let origin = gimpo();
        let r = origin.radius_in_degrees();
        let diag = Coordinate::new(37.558 + r * 0.8, 126.794 + r * 0.8);
        assert!(!origin.contains(diag));
    }

    #[test]
    fn test_invalid_radius() {
        let center = Coordinate::new(37.558, 126.794);
        assert!(matches!(
            MonitoringOrigin::new("x", center, 0.0),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            MonitoringOrigin::new("x", center, f64::NAN),
            Err(Error::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_from_config() {
        let origin = MonitoringOrigin::from_config(&MonitoringConfig::default()).unwrap();
        assert_eq!(origin, gimpo());
    }
}
