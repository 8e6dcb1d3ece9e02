//! Configuration management for talking-clock.
//!
//! This module handles loading configuration from `~/.talking-clock/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig};
