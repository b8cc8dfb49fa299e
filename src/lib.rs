//! # Vistas client wiring
//!
//! Client configuration and view routing for the Vistas multi-view
//! application. The crate wires three independent, long-lived pieces:
//!
//! - [`graphql`] - a GraphQL client bound to the countries endpoint,
//!   exposed as a process-wide shared instance
//! - [`images`] - a Pixabay REST client carrying a fixed base URL and a
//!   default `key` query credential on every request
//! - [`router`] - a static table mapping the three application paths to
//!   their named views
//!
//! The modules do not call each other and share no runtime state; each is
//! constructed once at startup and never mutated afterwards.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vistas_client::{graphql, images, router, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let countries = graphql::shared()?.countries().await?;
//!
//!     let params = SearchParams {
//!         q: Some("landscape".to_string()),
//!         ..SearchParams::default()
//!     };
//!     let images = images::shared()?.search(&params).await?;
//!
//!     let route = router::resolve("/vista1");
//!     # let _ = (countries, images, route);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `config` - Configuration types, endpoint constants and builder
//! - `error` - Crate error type; failures pass through from the libraries
//! - `graphql` - Countries GraphQL client and shared provider
//! - `images` - Pixabay search client and shared provider
//! - `router` - Static route table and exact-path resolution

pub mod config;
pub mod error;
pub mod graphql;
pub mod images;
pub mod router;

// Re-exports for convenience
pub use config::{
    Config, ConfigBuilder, DEFAULT_COUNTRIES_URL, DEFAULT_PIXABAY_API_KEY, DEFAULT_PIXABAY_URL,
};
pub use error::{Error, Result};
pub use graphql::{
    CountriesClient, CountriesData, Country, GraphqlError, GraphqlResponse,
};
pub use images::{ImageHit, PixabayClient, SearchParams, SearchResponse};
pub use router::{Route, View, ROUTES};
