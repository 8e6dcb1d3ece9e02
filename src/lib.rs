//! talking-clock - Tell the time the way people say it
//!
//! This crate turns an hour and minute into a spoken English phrase such as
//! "Half past three" or "Ten to twelve", and parses `H:M` strings into
//! validated time values.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod output;

pub use cli::args::{Cli, OutputFormat};
pub use clock::{FixedClock, SystemClock, TimeSource, TimeValue};
pub use error::{ClockError, TimeField};
