/* crates/placard-cli/src/main.rs */

mod check;
mod config;
mod populate;
mod site;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{PlacardConfig, find_placard_config, load_placard_config};

#[derive(Parser)]
#[command(name = "placard", about = "Placard site populator")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Assemble pages: inject chrome and populate placeholders from data
  Populate {
    /// Path to placard.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Pages to assemble, relative to the site root (all pages if omitted)
    pages: Vec<String>,
  },
  /// Inject header, footer, and notice banners without touching data
  Chrome {
    /// Path to placard.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Pages to process, relative to the site root (all pages if omitted)
    pages: Vec<String>,
  },
  /// Verify the placeholder vocabulary against pages and data documents
  Check {
    /// Path to placard.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, PlacardConfig)> {
  let path = match explicit {
    Some(path) => path,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_placard_config(&cwd)?
    }
  };
  let config = load_placard_config(&path)?;
  Ok((path, config))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Populate { config, pages } => {
      let (config_path, placard_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| std::path::Path::new("."));
      populate::run_populate(&placard_config, base_dir, pages, false).await?;
    }
    Command::Chrome { config, pages } => {
      let (config_path, placard_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| std::path::Path::new("."));
      populate::run_populate(&placard_config, base_dir, pages, true).await?;
    }
    Command::Check { config } => {
      let (config_path, placard_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| std::path::Path::new("."));
      check::run_check(&placard_config, base_dir).await?;
    }
  }

  Ok(())
}
