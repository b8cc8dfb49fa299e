//! End-to-end browse example for the Vistas clients.
//!
//! This example demonstrates:
//! - Obtaining the shared countries client and listing a few countries
//! - Searching Pixabay through the pre-configured REST client
//! - Walking the route table the application shell uses
//!
//! # Usage
//!
//! The built-in Pixabay key works out of the box; override it if you have
//! your own:
//! ```bash
//! export PIXABAY_API_KEY="your-api-key-here"
//! ```
//!
//! Then run:
//! ```bash
//! cargo run --example browse
//! ```

use vistas_client::{graphql, images, router, PixabayClient, SearchParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    println!("=== Vistas Browse Example ===\n");

    // Example 1: countries over GraphQL
    println!("=== Example 1: Countries ===\n");
    let countries = graphql::shared()?;
    println!("endpoint: {}", countries.endpoint());

    let response = countries.countries().await?;
    if response.has_errors() {
        for error in response.errors.unwrap_or_default() {
            eprintln!("graphql error: {}", error.message);
        }
    }
    if let Some(data) = response.data {
        println!("{} countries, first five:", data.countries.len());
        for country in data.countries.iter().take(5) {
            println!(
                "  {} {} - capital: {}",
                country.emoji,
                country.name,
                country.capital.as_deref().unwrap_or("(none)")
            );
        }
    }

    // Example 2: image search over REST
    println!("\n=== Example 2: Image Search ===\n");
    let pixabay = PixabayClient::from_env()?;
    println!("base url: {}", pixabay.base_url());

    let params = SearchParams {
        q: Some("landscape".to_string()),
        image_type: Some("photo".to_string()),
        per_page: Some(5),
        ..SearchParams::default()
    };
    let page = pixabay.search(&params).await?;
    println!("{} hits accessible, first page:", page.total_hits);
    for hit in &page.hits {
        println!("  #{} by {} - {}", hit.id, hit.user, hit.webformat_url);
    }

    // The module-level instance works the same way
    let _shared = images::shared()?;

    // Example 3: route resolution
    println!("\n=== Example 3: Routes ===\n");
    for path in ["/", "/vista1", "/vista2", "/vista3"] {
        match router::resolve(path) {
            Some(route) => println!("  {:10} -> {} ({:?})", path, route.name, route.view),
            None => println!("  {:10} -> (unmatched)", path),
        }
    }

    Ok(())
}
