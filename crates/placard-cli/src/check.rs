/* crates/placard-cli/src/check.rs */

//! The placeholder vocabulary is the contract between page authors and the
//! data documents. `placard check` walks every page's text corpus and
//! reports tokens that are outside the vocabulary or whose data path
//! resolves to nothing.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Result, bail};
use placard_data::{DataStore, DocumentFetcher, FsFetcher, HttpFetcher, lookup};
use placard_dom::Document;
use placard_populate::PlaceholderMap;
use regex::Regex;

use crate::config::PlacardConfig;
use crate::site::{discover_pages, read_page};
use crate::ui;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\[\]]+\]").unwrap());

// Tokens the ordinal ward pass owns; they are positional, not mapped.
const ORDINAL_TOKENS: &[&str] = &["[Phone Number]"];

pub async fn run_check(config: &PlacardConfig, base_dir: &Path) -> Result<()> {
  ui::banner("check");
  match &config.data.base_url {
    Some(url) => {
      let mut store = DataStore::new(HttpFetcher::new(url.as_str()));
      check_with_store(&mut store, config, base_dir).await
    }
    None => {
      let site_root = base_dir.join(&config.site.root);
      let mut store = DataStore::new(FsFetcher::new(site_root));
      check_with_store(&mut store, config, base_dir).await
    }
  }
}

async fn check_with_store<F: DocumentFetcher>(
  store: &mut DataStore<F>,
  config: &PlacardConfig,
  base_dir: &Path,
) -> Result<()> {
  let site_root = base_dir.join(&config.site.root);
  let pages = discover_pages(&site_root, &config.site.out_dir)?;
  let map = PlaceholderMap::local_info();

  for (name, location) in &config.data.sources {
    store.add_source(name.as_str(), location.as_str());
  }
  let data = store.load("localInfo").await.cloned();
  if data.is_none() {
    ui::warn("local info data unavailable; only vocabulary membership is checked");
  }

  let mut unknown: BTreeSet<(String, String)> = BTreeSet::new();
  let mut unresolved: BTreeSet<(String, String)> = BTreeSet::new();

  for page in &pages {
    let source = read_page(&site_root, page)?;
    let doc = Document::parse(&source);
    for node in doc.text_nodes() {
      let Some(text) = doc.text(node) else {
        continue;
      };
      for token_match in TOKEN_RE.find_iter(text) {
        let token = token_match.as_str();
        if ORDINAL_TOKENS.contains(&token) {
          continue;
        }
        match map.path_for(token) {
          None => {
            unknown.insert((page.clone(), token.to_string()));
          }
          Some(path) => {
            if let Some(data) = &data {
              if lookup(data, path).is_empty() {
                unresolved.insert((page.clone(), format!("{token} -> {path}")));
              }
            }
          }
        }
      }
    }
    ui::ok(&format!("{page} scanned"));
  }

  for (page, token) in &unknown {
    ui::fail(&format!("{page}: token {token} is not in the vocabulary"));
  }
  for (page, detail) in &unresolved {
    ui::warn(&format!("{page}: {detail} resolves to nothing"));
  }
  for diagnostic in store.take_diagnostics() {
    ui::warn(&diagnostic);
  }

  ui::blank();
  if unknown.is_empty() && unresolved.is_empty() {
    ui::arrow(&format!("{} pages clean", pages.len()));
    return Ok(());
  }
  bail!(
    "placeholder contract violated: {} unknown tokens, {} unresolved paths",
    unknown.len(),
    unresolved.len()
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write_site(dir: &Path, page: &str, data: Option<&str>) {
    std::fs::create_dir_all(dir.join("data")).unwrap();
    std::fs::write(dir.join("index.html"), page).unwrap();
    if let Some(data) = data {
      std::fs::write(dir.join("data/localinfo-data.json"), data).unwrap();
    }
  }

  #[tokio::test]
  async fn clean_site_passes() {
    let dir = tempfile::tempdir().unwrap();
    write_site(
      dir.path(),
      "<p>[Mayor Name] and [Phone Number]</p>",
      Some(r#"{"executiveLeadership": {"mayorName": "Jane Doe"}}"#),
    );
    let config = PlacardConfig::default();
    assert!(run_check(&config, dir.path()).await.is_ok());
  }

  #[tokio::test]
  async fn unknown_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path(), "<p>[Mystery Token]</p>", Some("{}"));
    let config = PlacardConfig::default();
    let err = run_check(&config, dir.path()).await.unwrap_err();
    assert!(err.to_string().contains("1 unknown tokens"));
  }

  #[tokio::test]
  async fn unresolved_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path(), "<p>[Mayor Name]</p>", Some("{}"));
    let config = PlacardConfig::default();
    let err = run_check(&config, dir.path()).await.unwrap_err();
    assert!(err.to_string().contains("1 unresolved paths"));
  }

  #[tokio::test]
  async fn missing_data_checks_vocabulary_only() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path(), "<p>[Mayor Name]</p>", None);
    let config = PlacardConfig::default();
    assert!(run_check(&config, dir.path()).await.is_ok());
  }
}
