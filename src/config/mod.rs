//! Configuration types for the Vistas clients.
//!
//! Everything here is constructed once at startup and never mutated. The
//! defaults are the exact endpoints the deployed application pins.

use secrecy::SecretString;
use url::Url;

use crate::error::Result;

/// Countries GraphQL endpoint.
pub const DEFAULT_COUNTRIES_URL: &str = "https://countries.trevorblades.com/";

/// Pixabay REST base URL.
pub const DEFAULT_PIXABAY_URL: &str = "https://pixabay.com/api/";

/// Built-in Pixabay API key.
///
/// Carrying a credential in source is a secrets-management concern, not a
/// recommendation: the deployed application pins this exact key, so it stays
/// as the default to keep observable behavior identical. Override it with
/// `PIXABAY_API_KEY`.
pub const DEFAULT_PIXABAY_API_KEY: &str = "44696009-5bfacdd58d329ad04d666cc32";

/// Environment variable overriding the Pixabay credential.
pub const ENV_PIXABAY_API_KEY: &str = "PIXABAY_API_KEY";

/// Environment variable overriding the countries endpoint.
pub const ENV_COUNTRIES_URL: &str = "COUNTRIES_GRAPHQL_URL";

/// Environment variable overriding the Pixabay base URL.
pub const ENV_PIXABAY_URL: &str = "PIXABAY_BASE_URL";

/// Configuration for the Vistas clients.
#[derive(Debug, Clone)]
pub struct Config {
    /// Countries GraphQL endpoint.
    pub countries_url: Url,
    /// Pixabay base URL.
    pub pixabay_url: Url,
    /// Pixabay API key, attached as the `key` query parameter.
    pub pixabay_api_key: SecretString,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Creates configuration from environment variables, falling back to the
    /// built-in defaults.
    ///
    /// Reads `PIXABAY_API_KEY`, `COUNTRIES_GRAPHQL_URL` and
    /// `PIXABAY_BASE_URL`; all three are optional.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();

        if let Ok(url) = std::env::var(ENV_COUNTRIES_URL) {
            builder = builder.countries_url(&url)?;
        }
        if let Ok(url) = std::env::var(ENV_PIXABAY_URL) {
            builder = builder.pixabay_url(&url)?;
        }
        if let Ok(key) = std::env::var(ENV_PIXABAY_API_KEY) {
            builder = builder.pixabay_api_key(SecretString::new(key));
        }

        Ok(builder.build())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    countries_url: Option<Url>,
    pixabay_url: Option<Url>,
    pixabay_api_key: Option<SecretString>,
}

impl ConfigBuilder {
    /// Set the countries GraphQL endpoint.
    pub fn countries_url(mut self, url: &str) -> Result<Self> {
        self.countries_url = Some(Url::parse(url)?);
        Ok(self)
    }

    /// Set the Pixabay base URL.
    pub fn pixabay_url(mut self, url: &str) -> Result<Self> {
        self.pixabay_url = Some(Url::parse(url)?);
        Ok(self)
    }

    /// Set the Pixabay API key.
    pub fn pixabay_api_key(mut self, key: SecretString) -> Self {
        self.pixabay_api_key = Some(key);
        self
    }

    /// Build the configuration, filling unset fields with the defaults.
    #[allow(clippy::unwrap_used)] // default URLs are compile-time literals
    pub fn build(self) -> Config {
        Config {
            countries_url: self
                .countries_url
                .unwrap_or_else(|| Url::parse(DEFAULT_COUNTRIES_URL).unwrap()),
            pixabay_url: self
                .pixabay_url
                .unwrap_or_else(|| Url::parse(DEFAULT_PIXABAY_URL).unwrap()),
            pixabay_api_key: self
                .pixabay_api_key
                .unwrap_or_else(|| SecretString::new(DEFAULT_PIXABAY_API_KEY.to_string())),
        }
    }
}
