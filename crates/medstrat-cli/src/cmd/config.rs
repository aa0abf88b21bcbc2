use crate::output::print_json;
use crate::paths::CONFIG_FILE;
use anyhow::Context;
use clap::Subcommand;
use medstrat_core::config::{Config, WarnLevel};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    Show,

    /// Validate the config for common mistakes
    Validate,

    /// Write a default config file
    Init {
        /// Destination (default: ./medstrat.yaml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(config_path: Option<&Path>, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(config_path, json),
        ConfigSubcommand::Validate => validate(config_path, json),
        ConfigSubcommand::Init { path, force } => init(path, force),
    }
}

fn load(config_path: Option<&Path>) -> anyhow::Result<Config> {
    Config::load_or_default(config_path).context("failed to load config")
}

fn show(config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = load(config_path)?;
    if json {
        return print_json(&config);
    }
    match config_path {
        Some(p) => println!("# {}", p.display()),
        None => println!("# built-in defaults"),
    }
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

fn validate(config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = load(config_path)?;
    let warnings = config.validate();

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }
    Ok(())
}

fn init(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default()
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
