//! Main scraper API for career profiles
//!
//! Combines the HTTP transport with the page parsers.

use crate::client::{ClientConfig, Fetch, OverwatchClient};
use crate::error::{OwStatsError, Result};
use crate::parser::{normalize_battle_tag, parse_career_page, parse_search_results};
use crate::types::{Platform, ProfileSnapshot, SearchResult};
use crate::url::{profile_path, search_path};

/// Main scraper API for career profiles
///
/// Holds no per-request state; every call builds its snapshot from
/// scratch, so one scraper can serve concurrent callers.
pub struct OverwatchScraper<F = OverwatchClient> {
    client: F,
}

impl OverwatchScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: OverwatchClient::new()?,
        })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: OverwatchClient::with_config(config)?,
        })
    }
}

impl<F: Fetch> OverwatchScraper<F> {
    /// Create a scraper over any [`Fetch`] implementation
    pub fn with_fetcher(client: F) -> Self {
        Self { client }
    }

    /// Fetch a career profile with every hero
    ///
    /// Same as [`fetch`](Self::fetch) with `overall_only` unset.
    pub async fn fetch_all(
        &self,
        platform: Platform,
        region: Option<&str>,
        tag: &str,
        locale: Option<&str>,
    ) -> Result<ProfileSnapshot> {
        self.fetch(platform, region, tag, false, locale).await
    }

    /// Fetch a career profile with only the all-heroes aggregate
    ///
    /// Same as [`fetch`](Self::fetch) with `overall_only` set; the
    /// returned snapshot has empty `heroes` maps.
    pub async fn fetch_overall(
        &self,
        platform: Platform,
        region: Option<&str>,
        tag: &str,
        locale: Option<&str>,
    ) -> Result<ProfileSnapshot> {
        self.fetch(platform, region, tag, true, locale).await
    }

    /// Fetch and parse a career profile
    ///
    /// # Arguments
    /// * `platform` - Platform the profile lives on
    /// * `region` - Region segment, required for [`Platform::Pc`]
    /// * `tag` - Battle-tag or console name, unencoded (e.g. "Foo-1234")
    /// * `overall_only` - Skip per-hero tables
    /// * `locale` - Page locale, defaults to `en-us`
    ///
    /// # Errors
    /// - `InvalidLocale` / `MissingRegion` before any request is made
    /// - `ProfileNotFound` on 404
    /// - `StructureChanged` on 500
    /// - `Unreachable` on 502
    /// - `UnknownTransport` for other statuses or no response
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> owstats_core::Result<()> {
    /// use owstats_core::{OverwatchScraper, Platform};
    /// let scraper = OverwatchScraper::new()?;
    /// let snapshot = scraper
    ///     .fetch(Platform::Pc, Some("us"), "Foo-1234", false, None)
    ///     .await?;
    /// println!("{} is level {}", snapshot.profile.nick, snapshot.profile.level);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch(
        &self,
        platform: Platform,
        region: Option<&str>,
        tag: &str,
        overall_only: bool,
        locale: Option<&str>,
    ) -> Result<ProfileSnapshot> {
        let url = format!(
            "{}{}",
            self.client.base_url(),
            profile_path(platform, region, tag, locale)?
        );

        let html = self.client.get(&url).await?.into_body(&url)?;

        // scraper's DOM is not Send, so it is built and dropped on one blocking thread
        let snapshot = tokio::task::spawn_blocking(move || parse_career_page(&html, &url, overall_only))
            .await
            .map_err(|e| OwStatsError::ParseError(format!("Extraction task failed: {}", e)))??;

        tracing::debug!(
            url = %snapshot.profile.url,
            competitive_heroes = snapshot.competitive.heroes.len(),
            quickplay_heroes = snapshot.quickplay.heroes.len(),
            achievements = snapshot.achievements.len(),
            "assembled profile snapshot"
        );
        Ok(snapshot)
    }

    /// Search players by name
    ///
    /// A `Name-1234` battle-tag is queried as `Name#1234`.
    ///
    /// # Errors
    /// - `InvalidLocale` before any request is made
    /// - the transport errors of [`fetch`](Self::fetch)
    /// - `ParseError` if the response is not a JSON array of players
    pub async fn search(&self, name: &str, locale: Option<&str>) -> Result<Vec<SearchResult>> {
        let name = normalize_battle_tag(name.trim());
        let url = format!(
            "{}{}",
            self.client.base_url(),
            search_path(&name, locale, true)?
        );

        let body = self.client.get(&url).await?.into_body(&url)?;
        let results = parse_search_results(&body)?;

        tracing::debug!(%name, results = results.len(), "search completed");
        Ok(results)
    }
}
