//! Pixabay image search client.
//!
//! A pre-configured REST client bound to a fixed base URL; every outgoing
//! request carries the `key` query credential. [`shared`] mirrors the single
//! instance the application exports.

mod client;
mod types;

pub use client::{shared, PixabayClient};
pub use types::{ImageHit, SearchParams, SearchResponse};
