/* crates/placard-data/src/store.rs */

use std::collections::HashMap;

use serde_json::Value;

use crate::fetch::DocumentFetcher;
use crate::path::{QualifiedPath, lookup};

/// Fetch-and-cache access to the site's named data documents.
///
/// The cache is owned by this instance and scoped to its lifetime: one
/// store per page-assembly run. Entries are never evicted or refreshed;
/// a failed load is not cached, so a later call may try again.
pub struct DataStore<F> {
  fetcher: F,
  sources: HashMap<String, String>,
  cache: HashMap<String, Value>,
  diagnostics: Vec<String>,
}

impl<F: DocumentFetcher> DataStore<F> {
  /// A store preloaded with the site's standard document sources.
  pub fn new(fetcher: F) -> Self {
    let mut store = Self::empty(fetcher);
    store.add_source("localInfo", "data/localinfo-data.json");
    store.add_source("organization", "data/organization-data.json");
    store
  }

  pub fn empty(fetcher: F) -> Self {
    Self {
      fetcher,
      sources: HashMap::new(),
      cache: HashMap::new(),
      diagnostics: Vec::new(),
    }
  }

  /// Register a logical document name and its relative location.
  pub fn add_source(&mut self, name: impl Into<String>, location: impl Into<String>) {
    self.sources.insert(name.into(), location.into());
  }

  /// Load a document by logical name, fetching and parsing on first use.
  /// Unknown names, fetch failures, and parse failures record a diagnostic
  /// and yield `None`; the caller treats missing data as nothing to
  /// substitute.
  pub async fn load(&mut self, name: &str) -> Option<&Value> {
    if !self.cache.contains_key(name) {
      let Some(location) = self.sources.get(name).cloned() else {
        self.diagnostics.push(format!("no data source registered for \"{name}\""));
        return None;
      };
      let body = match self.fetcher.fetch(&location).await {
        Ok(body) => body,
        Err(err) => {
          self.diagnostics.push(format!("failed to load \"{name}\" from {location}: {err}"));
          return None;
        }
      };
      match serde_json::from_str(&body) {
        Ok(value) => {
          self.cache.insert(name.to_string(), value);
        }
        Err(err) => {
          self.diagnostics.push(format!("failed to parse \"{name}\" ({location}): {err}"));
          return None;
        }
      }
    }
    self.cache.get(name)
  }

  /// Resolve a qualified `<document>.<path>` address to its display text.
  /// Every failure mode collapses to the empty-string sentinel.
  pub async fn resolve(&mut self, qualified: &str) -> String {
    let Some(qpath) = QualifiedPath::parse(qualified) else {
      self.diagnostics.push(format!("malformed data path \"{qualified}\""));
      return String::new();
    };
    match self.load(qpath.document).await {
      Some(document) => lookup(document, qpath.path),
      None => String::new(),
    }
  }

  pub fn diagnostics(&self) -> &[String] {
    &self.diagnostics
  }

  pub fn take_diagnostics(&mut self) -> Vec<String> {
    std::mem::take(&mut self.diagnostics)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fetch::FetchError;

  /// Serves canned bodies and counts fetches.
  struct StaticFetcher {
    bodies: HashMap<String, String>,
    hits: std::cell::RefCell<usize>,
  }

  impl StaticFetcher {
    fn new(entries: &[(&str, &str)]) -> Self {
      let bodies =
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
      Self { bodies, hits: std::cell::RefCell::new(0) }
    }
  }

  impl DocumentFetcher for StaticFetcher {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
      *self.hits.borrow_mut() += 1;
      self.bodies.get(location).cloned().ok_or(FetchError::Status(500))
    }
  }

  #[tokio::test]
  async fn load_parses_and_caches() {
    let fetcher = StaticFetcher::new(&[(
      "data/localinfo-data.json",
      r#"{"executiveLeadership": {"mayorName": "Jane Doe"}}"#,
    )]);
    let mut store = DataStore::new(fetcher);

    let first = store.load("localInfo").await.cloned();
    assert_eq!(
      first.as_ref().and_then(|v| v.pointer("/executiveLeadership/mayorName")),
      Some(&serde_json::json!("Jane Doe"))
    );

    store.load("localInfo").await;
    assert_eq!(*store.fetcher.hits.borrow(), 1, "second load must hit the cache");
  }

  #[tokio::test]
  async fn load_failure_records_diagnostic_and_returns_none() {
    let mut store = DataStore::new(StaticFetcher::new(&[]));
    assert!(store.load("localInfo").await.is_none());
    assert_eq!(store.diagnostics().len(), 1);
    assert!(store.diagnostics()[0].contains("HTTP status 500"));
  }

  #[tokio::test]
  async fn parse_failure_records_diagnostic() {
    let fetcher = StaticFetcher::new(&[("data/localinfo-data.json", "{not json")]);
    let mut store = DataStore::new(fetcher);
    assert!(store.load("localInfo").await.is_none());
    assert!(store.diagnostics()[0].contains("failed to parse"));
  }

  #[tokio::test]
  async fn unknown_source_records_diagnostic() {
    let mut store = DataStore::new(StaticFetcher::new(&[]));
    assert!(store.load("events").await.is_none());
    assert!(store.diagnostics()[0].contains("no data source registered"));
  }

  #[tokio::test]
  async fn failed_load_is_not_cached() {
    let mut store = DataStore::new(StaticFetcher::new(&[]));
    store.load("localInfo").await;
    store.load("localInfo").await;
    assert_eq!(*store.fetcher.hits.borrow(), 2, "failures must not populate the cache");
  }

  #[tokio::test]
  async fn resolve_qualified_path() {
    let fetcher = StaticFetcher::new(&[(
      "data/organization-data.json",
      r#"{"board": {"chair": "A. Smith"}}"#,
    )]);
    let mut store = DataStore::new(fetcher);
    assert_eq!(store.resolve("organization.board.chair").await, "A. Smith");
    assert_eq!(store.resolve("organization.board.missing").await, "");
  }

  #[tokio::test]
  async fn resolve_malformed_path_is_empty_with_diagnostic() {
    let mut store = DataStore::new(StaticFetcher::new(&[]));
    assert_eq!(store.resolve("noDotHere").await, "");
    assert!(store.diagnostics()[0].contains("malformed data path"));
  }
}
