//! Countries client implementation and shared provider.

use once_cell::sync::OnceCell;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::Result;

use super::types::{CountriesData, GraphqlRequest, GraphqlResponse};

/// Country listing query issued by the application views.
const COUNTRIES_QUERY: &str = "query { countries { code name emoji capital currency } }";

/// Client for the countries GraphQL endpoint.
///
/// The endpoint is fixed at construction; there is no retry or auth layer,
/// and transport failures surface to the caller as-is.
#[derive(Debug, Clone)]
pub struct CountriesClient {
    http: Client,
    endpoint: Url,
}

impl CountriesClient {
    /// Creates a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: config.countries_url.clone(),
        })
    }

    /// Creates a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env()?)
    }

    /// Returns the endpoint this client is bound to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Executes a query with optional variables.
    ///
    /// GraphQL-level errors are returned inside the envelope; only transport
    /// and decode failures produce an `Err`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<GraphqlResponse<T>> {
        self.execute(query, variables, None).await
    }

    /// Executes one named operation out of a multi-operation document.
    pub async fn query_with_operation<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        operation_name: &str,
    ) -> Result<GraphqlResponse<T>> {
        self.execute(query, variables, Some(operation_name)).await
    }

    /// Fetches the country listing the application views render.
    pub async fn countries(&self) -> Result<GraphqlResponse<CountriesData>> {
        self.query(COUNTRIES_QUERY, None).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        operation_name: Option<&str>,
    ) -> Result<GraphqlResponse<T>> {
        let request = GraphqlRequest {
            query: query.to_string(),
            variables,
            operation_name: operation_name.map(String::from),
        };

        tracing::debug!(endpoint = %self.endpoint, "dispatching GraphQL query");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

static SHARED: OnceCell<CountriesClient> = OnceCell::new();

/// Returns the process-wide shared client, constructing it on first use.
///
/// Every call returns the same instance, bound to the default endpoint.
pub fn shared() -> Result<&'static CountriesClient> {
    SHARED.get_or_try_init(|| {
        tracing::info!(
            endpoint = crate::config::DEFAULT_COUNTRIES_URL,
            "constructing shared countries client"
        );
        CountriesClient::new(&Config::default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COUNTRIES_URL;

    #[test]
    fn new_binds_the_configured_endpoint() {
        let client = CountriesClient::new(&Config::default()).unwrap();
        assert_eq!(client.endpoint().as_str(), DEFAULT_COUNTRIES_URL);
    }

    #[test]
    fn custom_endpoint_is_respected() {
        let config = Config::builder()
            .countries_url("http://localhost:4000/graphql")
            .unwrap()
            .build();
        let client = CountriesClient::new(&config).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:4000/graphql");
    }

    #[test]
    fn shared_returns_the_same_instance() {
        let first = shared().unwrap();
        let second = shared().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.endpoint().as_str(), DEFAULT_COUNTRIES_URL);
    }
}
