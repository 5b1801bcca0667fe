use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("sift error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = sift_config::SiftConfig::load_with_dotenv()
        .context("failed to load sift configuration")?;
    let data_dir = flags.data_dir.as_deref().map(PathBuf::from);

    let mut ctx = context::AppContext::init(config, data_dir);
    commands::dispatch::dispatch(cli.command, &mut ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SIFT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
