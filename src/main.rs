use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use timecoach::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "timecoach")]
#[command(about = "Split time ranges into calendar-aligned chunks")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.timecoach/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a time range into chunks and show hours per chunk
    Chunk {
        /// Range start, e.g. "2024-01-15 11:35"
        #[arg(long)]
        start: String,

        /// Range end (exclusive)
        #[arg(long)]
        end: String,

        /// Chunk size, e.g. "minutes=15", "6h", "1 month" (defaults to settings.default_interval)
        #[arg(long)]
        every: Option<String>,

        /// Print chunks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Chunk {
            start,
            end,
            every,
            json,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            cli::chunk::chunk_command(&config, &start, &end, every.as_deref(), json)?;
        }
        Commands::Init { force } => {
            cli::init::init_command(cli.config, force)?;
        }
    }

    Ok(())
}
