//! Service configuration
//!
//! Values come from the environment (a `.env` file is honoured), with
//! defaults for everything except the bootstrap data path.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON file used to seed the collection; `None` starts empty
    pub data_path: Option<PathBuf>,
    pub max_speed_kmh: f64,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("FLEET_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("FLEET_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("FLEET_PORT is not a valid port: {raw}"))?,
            None => 8080,
        };

        let max_speed_kmh: f64 = match lookup("FLEET_MAX_SPEED") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("FLEET_MAX_SPEED is not a number: {raw}"))?,
            None => 350.0,
        };
        if !(max_speed_kmh.is_finite() && max_speed_kmh > 0.0) {
            bail!("FLEET_MAX_SPEED must be a positive number, got {max_speed_kmh}");
        }

        let log_format = match lookup("FLEET_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("FLEET_LOG_FORMAT must be 'text' or 'json', got '{other}'"),
        };

        Ok(Self {
            host,
            port,
            data_path: lookup("FLEET_DATA_PATH").map(PathBuf::from),
            max_speed_kmh,
            log_format,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.data_path, None);
        assert_eq!(config.max_speed_kmh, 350.0);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("FLEET_HOST", "127.0.0.1"),
            ("FLEET_PORT", "9000"),
            ("FLEET_DATA_PATH", "data/vehicles.json"),
            ("FLEET_MAX_SPEED", "250"),
            ("FLEET_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.data_path, Some(PathBuf::from("data/vehicles.json")));
        assert_eq!(config.max_speed_kmh, 250.0);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config(&[("FLEET_PORT", "eighty")]).is_err());
        assert!(config(&[("FLEET_MAX_SPEED", "-5")]).is_err());
        assert!(config(&[("FLEET_MAX_SPEED", "NaN")]).is_err());
        assert!(config(&[("FLEET_LOG_FORMAT", "xml")]).is_err());
    }
}
