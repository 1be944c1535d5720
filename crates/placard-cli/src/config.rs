/* crates/placard-cli/src/config.rs */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use placard_components::PageMeta;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacardConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub data: DataSection,
  #[serde(default)]
  pub head: HeadSection,
  /// Per-page head metadata, keyed by page filename.
  #[serde(default)]
  pub meta: HashMap<String, PageMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_root")]
  pub root: String,
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { root: default_root(), out_dir: default_out_dir() }
  }
}

fn default_root() -> String {
  ".".to_string()
}

fn default_out_dir() -> String {
  "dist".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSection {
  /// When set, data documents are fetched over HTTP from this base URL
  /// instead of from the site directory.
  pub base_url: Option<String>,
  /// Additional logical documents beyond the built-in ones.
  #[serde(default)]
  pub sources: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadSection {
  /// Shared head template, relative to the site root.
  pub template: Option<String>,
}

/// Walk upward from `start` to find `placard.toml`, like Cargo.toml discovery
pub fn find_placard_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("placard.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("placard.toml not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_placard_config(path: &Path) -> Result<PlacardConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: PlacardConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  Ok(config)
}
