//! Fetch a career profile and print the snapshot as JSON
//!
//! Usage: cargo run --example dump_profile -- <platform> <tag> [region] [locale]

use owstats_core::{OverwatchScraper, Platform};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let platform: Platform = args.next().unwrap_or_else(|| "pc".to_string()).parse()?;
    let tag = args.next().ok_or("missing battle-tag argument")?;
    let region = args.next();
    let locale = args.next();

    println!("Fetching {} profile for '{}'...\n", platform, tag);

    let scraper = OverwatchScraper::new()?;
    let snapshot = scraper
        .fetch(platform, region.as_deref(), &tag, false, locale.as_deref())
        .await?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
