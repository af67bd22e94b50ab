mod cli;
mod config;
mod scheduler;
mod terminal;
mod wave;

use crate::cli::Cli;
use crate::config::WaveConfig;
use crate::scheduler::Scheduler;
use crate::terminal::CrosstermSize;
use std::io;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout only ever carries the wave.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::from_args(std::env::args_os())?;
    let mut rng = fastrand::Rng::new();
    let config = WaveConfig::from_cli(&cli, &mut rng)?;
    tracing::debug!(pattern = %config.pattern, period = ?config.period, "starting wave");

    let stop = scheduler::stop_on_signal()?;
    Scheduler::new(config, io::stdout(), CrosstermSize).run(&stop)?;
    Ok(())
}
