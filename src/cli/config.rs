//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "monitoring.radius_km")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (args.key.as_deref(), args.value.as_deref()) {
        (None, None) => show_all_config(&config),

        (Some(key), None) => {
            let value = config.get(key).ok_or_else(|| unknown_key(key))?;
            println!("{}", value);
        }

        (Some(key), Some(value)) => {
            if config.get(key).is_none() {
                return Err(unknown_key(key));
            }
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

fn unknown_key(key: &str) -> Error {
    Error::Config(format!(
        "Unknown config key: {} (available: {})",
        key,
        Config::available_keys().join(", ")
    ))
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
    println!();

    println!("[monitoring]");
    println!("label = \"{}\"", config.monitoring.label);
    println!("latitude = {}", config.monitoring.latitude);
    println!("longitude = {}", config.monitoring.longitude);
    println!("radius_km = {}", config.monitoring.radius_km);
    println!();

    println!("[simulator]");
    println!("source = \"{}\"", config.simulator.source);
    println!("max_strikes = {}", config.simulator.max_strikes);
    println!("offset_deg = {}", config.simulator.offset_deg);
    println!("id_prefix = \"{}\"", config.simulator.id_prefix);
    println!();

    println!("[report]");
    println!("link = \"{}\"", config.report.link);
    match &config.report.base_url {
        Some(url) => println!("base_url = \"{}\"", url),
        None => println!("base_url = \"\" # request host"),
    }
}
