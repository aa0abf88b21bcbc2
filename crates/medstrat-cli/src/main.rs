mod cmd;
mod output;
mod paths;

use clap::{Parser, Subcommand};
use cmd::{catalog::CatalogTable, config::ConfigSubcommand, recommend::ProfileArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "medstrat",
    about = "Marketing strategy wizard for medical practitioners",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: nearest medstrat.yaml, else built-in defaults)
    #[arg(long, global = true, env = "MEDSTRAT_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the web wizard
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, 0 = OS-assigned (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Open the browser once listening
        #[arg(long)]
        open: bool,
    },

    /// Browse the reference tables
    Catalog {
        /// Table to list (omit for a summary of all tables)
        #[arg(value_enum)]
        table: Option<CatalogTable>,
    },

    /// Print a full strategy for a practitioner profile
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Apply a file of wizard actions to a fresh session and show the result
    Replay {
        /// JSON or YAML list of actions; `-` reads stdin
        file: PathBuf,

        /// Stop at the first rejected action instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Rank brand strategies for a marketing focus
    Rank {
        /// Marketing focus key (e.g. patient_retention)
        focus: String,
    },

    /// Inspect and validate configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let config_path = paths::resolve_config(cli.config.as_deref());
    let config_path = config_path.as_deref();

    let result = match cli.command {
        Commands::Serve { host, port, open } => cmd::serve::run(config_path, host, port, open),
        Commands::Catalog { table } => cmd::catalog::run(table, cli.json),
        Commands::Recommend { profile } => cmd::recommend::run(&profile, cli.json),
        Commands::Replay { file, strict } => cmd::replay::run(&file, strict, cli.json),
        Commands::Rank { focus } => cmd::rank::run(&focus, cli.json),
        Commands::Config { subcommand } => cmd::config::run(config_path, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
