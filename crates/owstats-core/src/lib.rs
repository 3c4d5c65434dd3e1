//! Overwatch Career Profile Scraper Core Library
//!
//! Turns career pages and the name search endpoint into typed player statistics.
//!
//! # Overview
//!
//! This crate provides:
//! - Locale and platform aware URL builders
//! - A caster for the heterogeneous stat text on career pages
//!   (grouped integers, floats, percentages, clock and worded durations)
//! - Parsers for the profile masthead, highlight cards, per-hero stat
//!   tables and achievements
//! - A high-level API that fetches a page and assembles a [`ProfileSnapshot`]
//!
//! # Example
//!
//! ```no_run
//! use owstats_core::{OverwatchScraper, Platform, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = OverwatchScraper::new()?;
//!
//!     // Find the player first
//!     let players = scraper.search("Foo-1234", None).await?;
//!
//!     for player in &players {
//!         println!("{} ({}, level {})", player.name, player.platform, player.level);
//!     }
//!
//!     // Then load their career page
//!     let snapshot = scraper
//!         .fetch_overall(Platform::Pc, Some("us"), "Foo-1234", None)
//!         .await?;
//!     println!("{:?}", snapshot.competitive.global.get("games_won"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Transport failures are mapped onto [`OwStatsError`]: a 404 is
//! `ProfileNotFound`, a 500 is `StructureChanged` (the page markup moved),
//! a 502 is `Unreachable`. Missing optional page fields never fail a
//! parse; they come back empty.

pub mod cast;
mod client;
mod error;
pub mod parser;
pub mod prestige;
pub mod rank;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, Fetch, OverwatchClient, Response};

// Re-export error types
pub use error::{OwStatsError, Result};

// Re-export parser functions
pub use parser::{
    CareerPage, parse_achievements, parse_career_page, parse_featured, parse_hero_stats,
    parse_profile, parse_search_results,
};

// Re-export main scraper API
pub use scraper::OverwatchScraper;

// Re-export data types
pub use types::{
    Achievement, GameMode, GameModeStats, Platform, ProfileSnapshot, ProfileStats, SearchResult,
    SeasonInfo, StatMap, StatValue,
};

// Re-export helpers for convenience
pub use cast::{cast_value, sanitize_label, to_millis};
pub use rank::{parse_season, rank_tier};
pub use prestige::parse_tier;
pub use url::{build_profile_url, build_search_url};
