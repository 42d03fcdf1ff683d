use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "weekstrand-cli", version, about = "Week timeline strands")]
struct Cli {
    /// Config file (defaults to $WEEKSTRAND_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build strands for a week of events
    Weave(commands::weave::WeaveArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(weekstrand_core::StrandConfig::default_path);
    let result = match cli.command {
        Commands::Weave(args) => commands::weave::run(args, &config_path),
        Commands::Config { action } => commands::config::run(action, &config_path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
