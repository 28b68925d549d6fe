//! Document downloader.

use std::path::PathBuf;

use tracing::debug;

use super::error::FetchError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent sent with HTTP requests.
const DEFAULT_USER_AGENT: &str = concat!("nimby-timetable/", env!("CARGO_PKG_VERSION"));

/// Configuration for the downloader.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent for HTTP requests
    pub user_agent: String,
}

impl FetchConfig {
    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Where a source document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// A saved page on disk, given as `file://<path>`
    File(PathBuf),
    /// Anything else is fetched over HTTP
    Http(String),
}

impl Locator {
    /// Classify a locator string.
    pub fn parse(locator: &str) -> Self {
        match locator.strip_prefix("file://") {
            Some(path) => Locator::File(PathBuf::from(path)),
            None => Locator::Http(locator.to_string()),
        }
    }
}

/// Retrieves source documents as text.
#[derive(Debug, Clone)]
pub struct Downloader {
    http: reqwest::Client,
}

impl Downloader {
    /// Create a new downloader.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }

    /// Retrieve the document at `locator`.
    ///
    /// Any failure, including a non-success HTTP status, is returned as an
    /// error. Nothing is retried.
    pub async fn download(&self, locator: &str) -> Result<String, FetchError> {
        match Locator::parse(locator) {
            Locator::File(path) => {
                debug!(path = %path.display(), "reading local page");
                let body = tokio::fs::read_to_string(&path).await;
                body.map_err(|source| FetchError::Io { path, source })
            }
            Locator::Http(url) => {
                debug!(url = %url, "fetching page");
                let response = self.http.get(&url).send().await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(FetchError::Status {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("nimby-timetable/"));
    }

    #[test]
    fn config_builders() {
        let config = FetchConfig::default()
            .with_timeout(5)
            .with_user_agent("test-agent");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn locator_file() {
        assert_eq!(
            Locator::parse("file:///srv/pages/gb-nr:W1/2024-01-01/detailed"),
            Locator::File(PathBuf::from("/srv/pages/gb-nr:W1/2024-01-01/detailed"))
        );
    }

    #[test]
    fn locator_http() {
        let url = "https://www.realtimetrains.co.uk/service/gb-nr:W1/2024-01-01/detailed";
        assert_eq!(Locator::parse(url), Locator::Http(url.to_string()));
    }

    #[tokio::test]
    async fn download_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detailed");
        std::fs::write(&path, "<html>page</html>").unwrap();

        let downloader = Downloader::new(FetchConfig::default()).unwrap();
        let body = downloader
            .download(&format!("file://{}", path.display()))
            .await
            .unwrap();

        assert_eq!(body, "<html>page</html>");
    }

    #[tokio::test]
    async fn download_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");

        let downloader = Downloader::new(FetchConfig::default()).unwrap();
        let err = downloader
            .download(&format!("file://{}", path.display()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Io { .. }));
    }
}
