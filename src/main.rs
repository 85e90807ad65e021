use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mathpad::cli::{Cli, Commands, ConfigCommands};

mod commands;

/// Environment variable holding the log filter (e.g. `debug`, `mathpad=trace`).
const LOG_ENV: &str = "MATHPAD_LOG";

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Insert {
            text,
            value,
            selection,
            read_only,
            plain,
        } => commands::insert::handle(&commands::insert::InsertArgs {
            text,
            value,
            selection,
            read_only,
            plain,
        }),
        Commands::Pad { value } => commands::pad::handle(&value),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
