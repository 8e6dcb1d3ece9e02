//! Command-line interface for talking-clock.

pub mod args;
pub mod commands;
