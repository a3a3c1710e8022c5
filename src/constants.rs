//! Centralized constants for the strike-watch crate
//!
//! Values shared between the simulator, the report filter and the server.

/// Monitoring origin defaults (Gimpo International Airport)
pub mod origin {
    /// Human-readable label used in reports
    pub const LABEL: &str = "Gimpo Airport (GMP)";

    /// Approximate airport latitude
    pub const LATITUDE: f64 = 37.558;

    /// Approximate airport longitude
    pub const LONGITUDE: f64 = 126.794;

    /// Monitoring radius in kilometers
    pub const RADIUS_KM: f64 = 5.0;
}

/// Geographic constants
pub mod geo {
    /// Flat approximation: one degree is roughly 111 km
    pub const KM_PER_DEGREE: f64 = 111.0;

    /// Decimal places kept on simulated coordinates
    pub const COORDINATE_DECIMALS: i32 = 6;
}

/// Strike simulator parameters
pub mod simulator {
    /// Source label reported by the simulator
    pub const SOURCE_LABEL: &str = "KMA Virtual Lightning Detector";

    /// Upper bound (inclusive) on strikes per batch
    pub const MAX_STRIKES: u32 = 5;

    /// Largest `max_strikes` a config may set
    pub const MAX_STRIKES_LIMIT: u32 = 100;

    /// Max offset in degrees applied to each axis around the origin
    pub const OFFSET_DEG: f64 = 0.06;

    /// Prefix of generated strike identifiers
    pub const ID_PREFIX: &str = "strike_";

    /// Range of the numeric part of strike identifiers
    pub const ID_MIN: u32 = 1000;
    pub const ID_MAX: u32 = 9999;

    /// Intensity range in kiloamperes
    pub const INTENSITY_MIN: u32 = 10;
    pub const INTENSITY_MAX: u32 = 100;
}

/// Random number endpoint range
pub mod random {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 99;
}

/// HTTP endpoint paths
pub mod paths {
    pub const RANDOM: &str = "/api/random";
    pub const STRIKES: &str = "/api/kma/lightning-strikes";
    pub const REPORT: &str = "/api/gmp/lightning-report";
    pub const HEALTH: &str = "/health";
}
