//! dxf2gcode Settings Crate
//!
//! Handles program configuration: the machine dialect used by the motion
//! context and the options controlling program assembly.

pub mod config;
pub mod error;

pub use config::{Config, MachineSettings, MeasurementSystem, OutputSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
