//! GraphQL client for the countries endpoint.
//!
//! One long-lived client bound to a fixed endpoint. [`shared`] returns the
//! same instance on every call; consumers that need their own wiring (tests,
//! mostly) construct a [`CountriesClient`] from a [`Config`](crate::Config).

mod client;
mod types;

pub use client::{shared, CountriesClient};
pub use types::{
    CountriesData, Country, GraphqlError, GraphqlLocation, GraphqlResponse,
};
