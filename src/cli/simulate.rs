//! Simulate command handler
//!
//! Runs the strike simulator once without a server and prints the batch,
//! or the report built from it, as JSON.

use crate::config::Config;
use crate::error::Result;
use crate::geo::MonitoringOrigin;
use crate::random::pseudo::{SeededRandom, ThreadRandom};
use crate::random::RandomSource;
use crate::report::build_report;
use crate::strikes::StrikeSimulator;
use clap::Args;

/// Simulate command arguments
#[derive(Args)]
pub struct SimulateArgs {
    /// Print the filtered report instead of the raw batch
    #[arg(long, short = 'r')]
    pub report: bool,

    /// Seed for a reproducible batch
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Override the monitoring radius in kilometers
    #[arg(long)]
    pub radius_km: Option<f64>,
}

/// Run the simulate command
pub fn run(args: SimulateArgs) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(radius) = args.radius_km {
        config.monitoring.radius_km = radius;
    }

    println!("{}", render(&config, &args)?);
    Ok(())
}

/// Produce the JSON printed by `simulate`
fn render(config: &Config, args: &SimulateArgs) -> Result<String> {
    config.validate()?;
    let origin = MonitoringOrigin::from_config(&config.monitoring)?;
    let simulator = StrikeSimulator::new(origin.center, &config.simulator);

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };

    let json = if args.report {
        let report = build_report(&origin, simulator.simulate(rng.as_ref()));
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string_pretty(&simulator.respond(rng.as_ref()))?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Report;
    use crate::strikes::SimulatorResponse;

    fn args(report: bool, seed: Option<u64>) -> SimulateArgs {
        SimulateArgs {
            report,
            seed,
            radius_km: None,
        }
    }

    #[test]
    fn test_render_batch() {
        let out = render(&Config::default(), &args(false, Some(4))).unwrap();
        let parsed: SimulatorResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.status, "success");
        assert!(parsed.data.len() <= 5);
    }

    #[test]
    fn test_render_seeded_is_stable() {
        let a = render(&Config::default(), &args(false, Some(17))).unwrap();
        let b = render(&Config::default(), &args(false, Some(17))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_report() {
        let out = render(&Config::default(), &args(true, Some(4))).unwrap();
        let report: Report = serde_json::from_str(&out).unwrap();
        assert_eq!(report.report_for, "Gimpo Airport (GMP)");
        assert_eq!(report.nearby_strikes_count, report.strikes.len());
    }

    #[test]
    fn test_render_rejects_negative_offset() {
        let mut config = Config::default();
        config.simulator.offset_deg = -0.1;
        assert!(render(&config, &args(false, Some(1))).is_err());
    }

    #[test]
    fn test_render_rejects_bad_radius() {
        let mut config = Config::default();
        config.monitoring.radius_km = 0.0;
        assert!(render(&config, &args(true, None)).is_err());
    }
}
