/// Driver configuration loader - parses driver.toml
///
/// Separates deployment-specific settings (console address, polling cadence,
/// retry policy) from code. The host application typically owns the real
/// config file and hands the parsed stanza to the driver; the loader here
/// covers standalone use and tests.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use crate::model::{ConsoleError, UnitSystem};

/// Console address when none is configured. The L7 console ships with this
/// private address on its own access point.
pub const DEFAULT_ADDR: &str = "192.168.5.1";

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_MAX_TRIES: u32 = 3;
pub const DEFAULT_RETRY_WAIT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Driver configuration. Every key is optional in the TOML stanza; defaults
/// match the console's out-of-the-box behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// IP address (or hostname) of the weather station console.
    pub addr: String,

    /// Seconds between polling cycles.
    pub poll_interval_secs: u64,

    /// Fetch attempts per cycle before the cycle degrades to "no data".
    pub max_tries: u32,

    /// Seconds to wait between failed fetch attempts.
    pub retry_wait_secs: u64,

    /// Per-attempt HTTP timeout in seconds.
    pub request_timeout_secs: u64,

    /// Unit system tag attached to emitted records. The console reports US
    /// customary units; set "metric" only if the console is configured to
    /// report metric.
    pub unit_system: UnitSystem,

    /// Optional output field renames (default name -> host name), applied
    /// to records as they are emitted.
    pub sensor_map: HashMap<String, String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            max_tries: DEFAULT_MAX_TRIES,
            retry_wait_secs: DEFAULT_RETRY_WAIT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            unit_system: UnitSystem::Us,
            sensor_map: HashMap::new(),
        }
    }
}

impl DriverConfig {
    /// Parses a configuration stanza from TOML text.
    ///
    /// # Errors
    /// `ConsoleError::ConfigError` — malformed TOML, unknown keys, or
    /// values that fail validation.
    pub fn from_toml_str(text: &str) -> Result<Self, ConsoleError> {
        let config: DriverConfig = toml::from_str(text)
            .map_err(|e| ConsoleError::ConfigError(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, ConsoleError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConsoleError::ConfigError(format!("failed to read {}: {}", path, e)))?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<(), ConsoleError> {
        if self.addr.trim().is_empty() {
            return Err(ConsoleError::ConfigError("addr must not be empty".to_string()));
        }
        if self.max_tries == 0 {
            return Err(ConsoleError::ConfigError("max_tries must be at least 1".to_string()));
        }
        if self.poll_interval_secs == 0 {
            return Err(ConsoleError::ConfigError(
                "poll_interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn retry_wait(&self) -> Duration {
        Duration::from_secs(self.retry_wait_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
