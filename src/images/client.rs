//! Pixabay client implementation and shared provider.

use once_cell::sync::OnceCell;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::config::Config;
use crate::error::Result;

use super::types::{SearchParams, SearchResponse};

/// Pre-configured client for the Pixabay API.
///
/// The base URL and the `key` credential are fixed at construction and
/// attached to every outgoing request. There are no request-level overrides.
pub struct PixabayClient {
    http: Client,
    base_url: Url,
    api_key: SecretString,
}

impl PixabayClient {
    /// Creates a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.pixabay_url.clone(),
            api_key: config.pixabay_api_key.clone(),
        })
    }

    /// Creates a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env()?)
    }

    /// Returns the base URL this client is bound to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the query pairs attached to every request.
    pub fn default_query(&self) -> Vec<(&'static str, String)> {
        vec![("key", self.api_key.expose_secret().clone())]
    }

    /// Searches for images.
    ///
    /// Issues `GET <base>?key=<credential>&...` and decodes the result page.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        tracing::debug!(base_url = %self.base_url, query = ?params.q, "searching images");

        let response = self
            .http
            .get(self.base_url.clone())
            .query(&self.default_query())
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for PixabayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixabayClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

static SHARED: OnceCell<PixabayClient> = OnceCell::new();

/// Returns the process-wide shared client, constructing it on first use.
///
/// Every call returns the same instance, bound to the default base URL and
/// credential.
pub fn shared() -> Result<&'static PixabayClient> {
    SHARED.get_or_try_init(|| {
        tracing::info!(
            base_url = crate::config::DEFAULT_PIXABAY_URL,
            "constructing shared Pixabay client"
        );
        PixabayClient::new(&Config::default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_PIXABAY_API_KEY, DEFAULT_PIXABAY_URL};

    #[test]
    fn new_binds_base_url_and_credential() {
        let client = PixabayClient::new(&Config::default()).unwrap();

        assert_eq!(client.base_url().as_str(), DEFAULT_PIXABAY_URL);
        assert_eq!(
            client.default_query(),
            vec![("key", DEFAULT_PIXABAY_API_KEY.to_string())]
        );
    }

    #[test]
    fn debug_output_redacts_the_credential() {
        let client = PixabayClient::new(&Config::default()).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains(DEFAULT_PIXABAY_API_KEY));
        assert!(rendered.contains(DEFAULT_PIXABAY_URL));
    }

    #[test]
    fn shared_returns_the_same_instance() {
        let first = shared().unwrap();
        let second = shared().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
