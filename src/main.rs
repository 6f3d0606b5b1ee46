use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use property_search::search::{SearchContext, SearchRequest};
use property_search::store::{load_or_sample, InMemoryStore};
use property_search::{PropertySearch, SearchConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Search property listings with a plain-language query
#[derive(Parser)]
#[command(name = "property-search")]
#[command(about = "Natural-language search over investment property listings")]
struct Cli {
    /// Search text, e.g. "3 bedroom apartment in Cyprus under $300k"
    #[arg(required = true)]
    query: Vec<String>,

    /// Listing catalog (JSON array)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Where to write the search response JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of listings to return
    #[arg(short, long)]
    limit: Option<usize>,

    /// User the search is made on behalf of
    #[arg(long)]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SearchConfig::load_from_env();
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(limit) = cli.limit {
        config.result_limit = limit;
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🏠 Property Search");
    info!("==================");

    let store = InMemoryStore::new(load_or_sample(&config.catalog_path).await?);
    if store.is_empty() {
        warn!("Catalog {} has no listings", config.catalog_path.display());
    } else {
        info!("Searching {} listings", store.len());
    }
    let search = PropertySearch::with_limit(store, config.result_limit);

    let mut request = SearchRequest::new(cli.query.join(" "));
    if let Some(user) = cli.user {
        request = request.with_context(SearchContext {
            user_id: Some(user),
            previous_searches: vec![],
        });
    }

    let response = search.search(request).await?;

    println!("{}", response.summary);
    println!();
    for (i, property) in response.properties.iter().enumerate() {
        println!("{}. {} (${})", i + 1, property.title, property.price);
        println!(
            "   {}, {} · {} bed, {} bath, {} m²",
            property.city,
            property.country.as_str(),
            property.bedrooms,
            property.bathrooms,
            property.sqm
        );
        if let Some(roi) = property.expected_roi() {
            println!("   Expected ROI: {:.1}%", roi);
        }
        if let Some(yield_pct) = property.rental_yield() {
            println!("   Rental yield: {:.1}%", yield_pct);
        }
        println!("   ID: {}", property.id);
        println!();
    }

    let json = serde_json::to_string_pretty(&response)?;
    tokio::fs::write(&config.output_path, json)
        .await
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    info!("💾 Saved search response to {}", config.output_path.display());

    Ok(())
}
