//! Feed sources: local files and HTTP endpoints

use super::types::FeedError;
use super::FeedSource;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Default HTTP request timeout
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Feed read from the local filesystem
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    /// Create a feed for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<String, FeedError> {
        tracing::debug!(path = %self.path.display(), "Reading feed file");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Feed fetched with a single HTTP GET
#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,
    timeout: Duration,
}

impl HttpFeed {
    /// Create a feed for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: HTTP_TIMEOUT,
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<String, FeedError> {
        tracing::debug!(url = %self.url, "Fetching feed");
        let client = Client::builder().timeout(self.timeout).build()?;
        let response = client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Pick a feed implementation from a location string.
///
/// `http://` and `https://` locations are fetched over HTTP, anything else is
/// treated as a file path.
pub fn feed_from_location(location: &str) -> Box<dyn FeedSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpFeed::new(location))
    } else {
        Box::new(FileFeed::new(location))
    }
}
