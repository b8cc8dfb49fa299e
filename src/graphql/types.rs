//! GraphQL envelope and countries response types.

use serde::{Deserialize, Serialize};

/// GraphQL request payload.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GraphqlRequest {
    /// The query string.
    pub query: String,
    /// Optional variables for the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
    /// Operation name when the document holds more than one operation.
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

/// GraphQL response envelope.
///
/// GraphQL-level errors are kept here as data rather than converted into a
/// crate error; the transport succeeded, and what to do with a partial
/// response is the caller's decision.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Response data, absent when the whole operation failed.
    pub data: Option<T>,
    /// Errors reported by the server, if any.
    pub errors: Option<Vec<GraphqlError>>,
}

impl<T> GraphqlResponse<T> {
    /// Returns true when the server reported at least one error.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}

/// A single GraphQL error item.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    /// Error message.
    pub message: String,
    /// Source locations in the query document.
    pub locations: Option<Vec<GraphqlLocation>>,
    /// Path to the field that failed.
    pub path: Option<Vec<serde_json::Value>>,
}

/// Location of an error within the query document.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlLocation {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

/// Data shape of the countries listing query.
#[derive(Debug, Clone, Deserialize)]
pub struct CountriesData {
    /// All countries known to the endpoint.
    pub countries: Vec<Country>,
}

/// A country as returned by the countries endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
    /// English name.
    pub name: String,
    /// Flag emoji.
    pub emoji: String,
    /// Capital city, absent for a few territories.
    pub capital: Option<String>,
    /// Primary currency code, absent for a few territories.
    pub currency: Option<String>,
}
