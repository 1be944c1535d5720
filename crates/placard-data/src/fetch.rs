/* crates/placard-data/src/fetch.rs */

use std::fmt;
use std::path::PathBuf;

/// A failed document fetch. Network errors, I/O errors, and non-success
/// HTTP statuses all surface here; callers treat any of them as "no data".
#[derive(Debug)]
pub enum FetchError {
  /// Non-success HTTP status.
  Status(u16),
  /// Connection, I/O, or missing-resource failure.
  Transport(String),
}

impl fmt::Display for FetchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Status(code) => write!(f, "HTTP status {code}"),
      Self::Transport(message) => write!(f, "{message}"),
    }
  }
}

impl std::error::Error for FetchError {}

/// Retrieves the body of a data document or page resource by its relative
/// location. One attempt per call; there is no retry or backoff.
pub trait DocumentFetcher {
  fn fetch(
    &self,
    location: &str,
  ) -> impl Future<Output = Result<String, FetchError>>;
}

/// Reads resources from a site directory on disk.
#[derive(Debug, Clone)]
pub struct FsFetcher {
  base: PathBuf,
}

impl FsFetcher {
  pub fn new(base: impl Into<PathBuf>) -> Self {
    Self { base: base.into() }
  }
}

impl DocumentFetcher for FsFetcher {
  async fn fetch(&self, location: &str) -> Result<String, FetchError> {
    let path = self.base.join(location);
    std::fs::read_to_string(&path)
      .map_err(|err| FetchError::Transport(format!("{}: {err}", path.display())))
  }
}

/// Fetches resources over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  base: String,
  client: reqwest::Client,
}

impl HttpFetcher {
  pub fn new(base: impl Into<String>) -> Self {
    Self { base: base.into().trim_end_matches('/').to_string(), client: reqwest::Client::new() }
  }
}

impl DocumentFetcher for HttpFetcher {
  async fn fetch(&self, location: &str) -> Result<String, FetchError> {
    let url = format!("{}/{}", self.base, location.trim_start_matches('/'));
    let response = self
      .client
      .get(&url)
      .send()
      .await
      .map_err(|err| FetchError::Transport(err.to_string()))?;
    if !response.status().is_success() {
      return Err(FetchError::Status(response.status().as_u16()));
    }
    response.text().await.map_err(|err| FetchError::Transport(err.to_string()))
  }
}
