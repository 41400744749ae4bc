use reqwest::Response;
use scraper::Html;

use crate::config::FetchConfig;
use crate::error::{Result, ScrapeError};

/// One HTTP client for the whole run, built from an explicit [`FetchConfig`]
/// and cloned into every collaborator that needs the network.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap();

        Self { client, config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches an HTML page. Non-2xx statuses fail here, before any body
    /// read. Page fetches carry no explicit timeout.
    pub async fn fetch_page(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Starts a binary asset request, leaving the body unread so the caller
    /// can stream it to disk. Assets get the configured timeout.
    pub async fn fetch_asset(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .timeout(self.config.asset_timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(response)
    }
}

/// Builds a queryable document tree over fetched page bytes.
pub fn parse_document(bytes: &[u8]) -> Result<Html> {
    let text = std::str::from_utf8(bytes).map_err(|e| ScrapeError::Parse(e.to_string()))?;
    Ok(Html::parse_document(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_utf8_html() {
        let document = parse_document("<html><body><p>ok</p></body></html>".as_bytes()).unwrap();
        let selector = scraper::Selector::parse("p").unwrap();
        assert!(document.select(&selector).next().is_some());
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = parse_document(&[0x3c, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ScrapeError::Parse(_)));
    }
}
