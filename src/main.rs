use clap::Parser;
use env_logger::Env;

use talking_clock::cli::args::Cli;
use talking_clock::cli::commands;
use talking_clock::clock::SystemClock;
use talking_clock::config::Config;
use talking_clock::error::ClockError;
use talking_clock::output::format_error;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if !cli.ignored.is_empty() {
        log::debug!("ignoring extra arguments: {:?}", cli.ignored);
    }
    // Honor --color for config errors too
    cli.color.unwrap_or_default().apply();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", format_error(&e, cli.output.unwrap_or_default()));
            return;
        }
    };

    cli.color.unwrap_or(config.general.color).apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    println!("{}", commands::tell(&SystemClock, cli.time.as_deref(), format));
}

fn load_config(cli: &Cli) -> Result<Config, ClockError> {
    match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
