//! strike-watch: simulated lightning feed and airport proximity report
//!
//! A library and CLI tool serving three HTTP endpoints: a random number,
//! a simulated lightning-strike feed scattered around a monitored airport,
//! and a report that keeps only the strikes inside the monitoring radius.
//!
//! ## Features
//!
//! - Stateless strike simulator with injectable random source
//! - Flat-earth radius filter (1° ≈ 111 km, strict boundary)
//! - Report fed in-process or over HTTP from the simulator endpoint
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use strike_watch::config::SimulatorConfig;
//! use strike_watch::geo::{Coordinate, MonitoringOrigin};
//! use strike_watch::random::pseudo::SeededRandom;
//! use strike_watch::report::build_report;
//! use strike_watch::strikes::StrikeSimulator;
//!
//! let origin = MonitoringOrigin::new("Gimpo Airport (GMP)", Coordinate::new(37.558, 126.794), 5.0)
//!     .unwrap();
//! let simulator = StrikeSimulator::new(origin.center, &SimulatorConfig::default());
//!
//! let batch = simulator.simulate(&SeededRandom::new(42));
//! let report = build_report(&origin, batch);
//! println!("{} strikes within 5 km", report.nearby_strikes_count);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod random;
pub mod report;
pub mod server;
pub mod strikes;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::{Coordinate, MonitoringOrigin};
pub use report::Report;
pub use strikes::StrikeRecord;
