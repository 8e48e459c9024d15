use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use errlines::cli::{Cli, Commands, ConfigCommands};
use errlines::Config;

mod commands;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "errlines=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let explicit_config = cli.config.as_deref();

    match cli.command {
        Commands::Extract(args) => {
            let config = Config::load(explicit_config)?;
            commands::extract::handle(&args, &config)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(explicit_config),
            ConfigCommands::Path => commands::config::handle_path(explicit_config),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
