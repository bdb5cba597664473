//! Configuration for dxf2gcode
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, selected by file extension.
//!
//! Configuration is organized into two sections:
//! - Machine settings (feed rate, engage/disengage words, dwell times)
//! - Output settings (units, ordering, handling of unsupported primitives)

pub use dxf2gcode_core::MeasurementSystem;
use dxf2gcode_core::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Machine dialect used by the motion context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    /// Feed rate for drawing moves and arcs (units/min)
    pub xy_feedrate: f64,
    /// Word emitted to engage the tool
    pub spindle_on: String,
    /// Word emitted to disengage the tool
    pub spindle_off: String,
    /// Dwell after engaging, in milliseconds (0 = none)
    pub start_delay_ms: u32,
    /// Dwell after disengaging, in milliseconds (0 = none)
    pub stop_delay_ms: u32,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            xy_feedrate: 1000.0,
            spindle_on: "M3".to_string(),
            spindle_off: "M5".to_string(),
            start_delay_ms: 0,
            stop_delay_ms: 0,
        }
    }
}

/// Program assembly options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Units declared in the preamble
    pub units: MeasurementSystem,
    /// Reorder primitives by proximity before emitting
    pub optimize_order: bool,
    /// Skip primitives that cannot be emitted instead of failing
    pub skip_unsupported: bool,
    /// Position to return to at the end of the program
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<Point>,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Machine dialect
    pub machine: MachineSettings,
    /// Program assembly options
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let feed = self.machine.xy_feedrate;
        if !feed.is_finite() || feed <= 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "machine.xy_feedrate".to_string(),
                value: feed.to_string(),
            });
        }

        if self.machine.spindle_on.trim().is_empty() {
            return Err(ConfigError::MissingValue("machine.spindle_on".to_string()));
        }

        if self.machine.spindle_off.trim().is_empty() {
            return Err(ConfigError::MissingValue("machine.spindle_off".to_string()));
        }

        if let Some(home) = self.output.home {
            if !home.is_finite() {
                return Err(ConfigError::ValueOutOfRange {
                    key: "output.home".to_string(),
                    value: home.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
