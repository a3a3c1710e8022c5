//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/strike-watch/config.toml

pub mod defaults;

use crate::constants::{origin, simulator};
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Monitored location and radius
    #[serde(default)]
    pub monitoring: MonitoringConfig,

    /// Strike simulator settings
    #[serde(default)]
    pub simulator: SimulatorConfig,

    /// How the report reaches the simulator
    #[serde(default)]
    pub report: ReportConfig,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Monitored location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// Label shown as `report_for`
    #[serde(default = "default_label")]
    pub label: String,

    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Monitoring radius in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

/// Strike simulator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Source label reported by the simulator
    #[serde(default = "default_source")]
    pub source: String,

    /// Upper bound (inclusive) on strikes per batch
    #[serde(default = "default_max_strikes")]
    pub max_strikes: u32,

    /// Max per-axis offset from the origin, in degrees
    #[serde(default = "default_offset_deg")]
    pub offset_deg: f64,

    /// Prefix of generated strike identifiers
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

/// How the report endpoint obtains strike data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatorLink {
    /// Call the simulator directly inside the process
    #[default]
    InProcess,
    /// Fetch the simulator endpoint over HTTP
    Http,
}

impl std::fmt::Display for SimulatorLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProcess => write!(f, "in_process"),
            Self::Http => write!(f, "http"),
        }
    }
}

impl std::str::FromStr for SimulatorLink {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_process" | "in-process" | "local" => Ok(Self::InProcess),
            "http" => Ok(Self::Http),
            _ => Err(format!("Unknown simulator link: {}", s)),
        }
    }
}

/// Report settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub link: SimulatorLink,

    /// Base URL of the simulator when `link = "http"`.
    ///
    /// When unset, the inbound request's own host is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

// Default value functions for serde
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_label() -> String {
    origin::LABEL.to_string()
}
fn default_latitude() -> f64 {
    origin::LATITUDE
}
fn default_longitude() -> f64 {
    origin::LONGITUDE
}
fn default_radius_km() -> f64 {
    origin::RADIUS_KM
}
fn default_source() -> String {
    simulator::SOURCE_LABEL.to_string()
}
fn default_max_strikes() -> u32 {
    simulator::MAX_STRIKES
}
fn default_offset_deg() -> f64 {
    simulator::OFFSET_DEG
}
fn default_id_prefix() -> String {
    simulator::ID_PREFIX.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            radius_km: default_radius_km(),
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            max_strikes: default_max_strikes(),
            offset_deg: default_offset_deg(),
            id_prefix: default_id_prefix(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            let config: Config = toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Check the monitored area and simulator bounds
    pub fn validate(&self) -> Result<()> {
        let m = &self.monitoring;
        if !m.latitude.is_finite() || !(-90.0..=90.0).contains(&m.latitude) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                m.latitude
            )));
        }
        if !m.longitude.is_finite() || !(-180.0..=180.0).contains(&m.longitude) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                m.longitude
            )));
        }
        if !m.radius_km.is_finite() || m.radius_km <= 0.0 {
            return Err(Error::InvalidRadius(format!(
                "Radius must be positive, got {} km",
                m.radius_km
            )));
        }
        if !self.simulator.offset_deg.is_finite() || self.simulator.offset_deg < 0.0 {
            return Err(Error::Config(format!(
                "Simulator offset must be non-negative, got {}",
                self.simulator.offset_deg
            )));
        }
        if self.simulator.max_strikes > simulator::MAX_STRIKES_LIMIT {
            return Err(Error::Config(format!(
                "Simulator max_strikes must be at most {}, got {}",
                simulator::MAX_STRIKES_LIMIT,
                self.simulator.max_strikes
            )));
        }
        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["monitoring", "label"] => Some(self.monitoring.label.clone()),
            ["monitoring", "latitude"] => Some(self.monitoring.latitude.to_string()),
            ["monitoring", "longitude"] => Some(self.monitoring.longitude.to_string()),
            ["monitoring", "radius_km"] => Some(self.monitoring.radius_km.to_string()),

            ["simulator", "source"] => Some(self.simulator.source.clone()),
            ["simulator", "max_strikes"] => Some(self.simulator.max_strikes.to_string()),
            ["simulator", "offset_deg"] => Some(self.simulator.offset_deg.to_string()),
            ["simulator", "id_prefix"] => Some(self.simulator.id_prefix.clone()),

            ["report", "link"] => Some(self.report.link.to_string()),
            ["report", "base_url"] => Some(self.report.base_url.clone().unwrap_or_default()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong. On error the
    /// config is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        next.apply(key, value)?;
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            ["monitoring", "label"] => {
                self.monitoring.label = value.to_string();
            }
            ["monitoring", "latitude"] => {
                self.monitoring.latitude = parse_float("latitude", value)?;
            }
            ["monitoring", "longitude"] => {
                self.monitoring.longitude = parse_float("longitude", value)?;
            }
            ["monitoring", "radius_km"] => {
                self.monitoring.radius_km = parse_float("radius", value)?;
            }

            ["simulator", "source"] => {
                self.simulator.source = value.to_string();
            }
            ["simulator", "max_strikes"] => {
                self.simulator.max_strikes = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid max_strikes value: {}", value))
                })?;
            }
            ["simulator", "offset_deg"] => {
                self.simulator.offset_deg = parse_float("offset", value)?;
            }
            ["simulator", "id_prefix"] => {
                self.simulator.id_prefix = value.to_string();
            }

            ["report", "link"] => {
                self.report.link = value.parse().map_err(Error::Config)?;
            }
            ["report", "base_url"] => {
                let trimmed = value.trim().trim_end_matches('/');
                self.report.base_url = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "server.host",
            "server.port",
            "monitoring.label",
            "monitoring.latitude",
            "monitoring.longitude",
            "monitoring.radius_km",
            "simulator.source",
            "simulator.max_strikes",
            "simulator.offset_deg",
            "simulator.id_prefix",
            "report.link",
            "report.base_url",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_float(name: &str, value: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {} value: {}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn with_temp_config<F: FnOnce()>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.monitoring.label, "Gimpo Airport (GMP)");
        assert_eq!(config.monitoring.latitude, 37.558);
        assert_eq!(config.monitoring.longitude, 126.794);
        assert_eq!(config.monitoring.radius_km, 5.0);
        assert_eq!(config.simulator.max_strikes, 5);
        assert_eq!(config.report.link, SimulatorLink::InProcess);
        assert!(config.report.base_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("monitoring.radius_km"), Some("5".to_string()));

        config.set("monitoring.radius_km", "7.5").unwrap();
        assert_eq!(config.monitoring.radius_km, 7.5);

        config.set("report.link", "http").unwrap();
        assert_eq!(config.report.link, SimulatorLink::Http);
        assert_eq!(config.get("report.link"), Some("http".to_string()));

        config.set("report.base_url", "http://localhost:5000/").unwrap();
        assert_eq!(
            config.report.base_url.as_deref(),
            Some("http://localhost:5000")
        );

        config.set("report.base_url", "").unwrap();
        assert!(config.report.base_url.is_none());
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("monitoring.radius_km", "not_a_number").is_err());
        assert!(config.set("report.link", "carrier_pigeon").is_err());
    }

    #[test]
    fn test_set_rejects_bad_area() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("monitoring.radius_km", "0"),
            Err(Error::InvalidRadius(_))
        ));
        let mut config = Config::default();
        assert!(matches!(
            config.set("monitoring.latitude", "91"),
            Err(Error::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let mut config = Config::default();
        assert!(config.set("monitoring.radius_km", "-3").is_err());
        assert_eq!(config.monitoring.radius_km, 5.0);

        assert!(config.set("simulator.offset_deg", "-0.1").is_err());
        assert_eq!(config.simulator.offset_deg, 0.06);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_strikes_bounded() {
        let mut config = Config::default();
        config.set("simulator.max_strikes", "100").unwrap();
        assert_eq!(config.simulator.max_strikes, 100);

        assert!(config.set("simulator.max_strikes", "4000000000").is_err());
        assert_eq!(config.simulator.max_strikes, 100);
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.monitoring.radius_km = 8.0;
            config.report.link = SimulatorLink::Http;
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.monitoring.radius_km, 8.0);
            assert_eq!(loaded.report.link, SimulatorLink::Http);
        });
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.monitoring.latitude, 37.558);
        assert_eq!(loaded.server.port, 5000);
        assert_eq!(loaded.report.link, SimulatorLink::InProcess);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: Config = toml::from_str("[report]\nlink = \"http\"\n").unwrap();
        assert_eq!(loaded.report.link, SimulatorLink::Http);
        assert_eq!(loaded.monitoring.radius_km, 5.0);
        assert_eq!(loaded.simulator.id_prefix, "strike_");
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[server]"));
        assert!(toml.contains("[monitoring]"));
        assert!(toml.contains("[simulator]"));
        assert!(toml.contains("[report]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"monitoring.radius_km"));
        assert!(keys.contains(&"report.link"));
        for key in keys {
            assert!(Config::default().get(key).is_some(), "{} not readable", key);
        }
    }
}
