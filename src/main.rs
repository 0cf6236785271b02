use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
mod domain;
mod services;

use cli::Cli;
use domain::models::ScaffoldOptions;
use services::emitter::emit_controller_commands;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ScaffoldOptions::from(&cli);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit_controller_commands(Path::new(&cli.models_dir), &options, cli.json, &mut out)?;
    Ok(())
}
