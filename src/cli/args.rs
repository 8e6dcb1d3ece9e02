use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ColorSetting;

#[derive(Parser, Debug)]
#[command(name = "talking-clock")]
#[command(about = "Tell the time the way people say it")]
#[command(long_about = "talking-clock - Tell the time the way people say it

Prints the current time, or a given HH:MM time, as a spoken English phrase.

EXAMPLES:
  talking-clock             Speak the current time
  talking-clock 3:30        Half past three
  talking-clock 11:50       Ten to twelve
  talking-clock -o json 0:00

OUTPUT FORMATS:
  --output pretty    Human-readable output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version)]
pub struct Cli {
    /// Time to speak, as H:M or HH:MM in 24-hour form
    ///
    /// When omitted, the current local time is used. Values starting with
    /// `-` are taken as the time too, and reported as malformed.
    #[arg(value_name = "TIME", allow_hyphen_values = true)]
    pub time: Option<String>,

    /// Arguments after TIME are ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Output format for the result
    ///
    /// Overrides `general.default_output` from the config file.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// When to color output
    ///
    /// Overrides `general.color` from the config file.
    #[arg(long, value_enum)]
    pub color: Option<ColorSetting>,

    /// Path to an alternate config file
    #[arg(short, long, env = "TALKING_CLOCK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
