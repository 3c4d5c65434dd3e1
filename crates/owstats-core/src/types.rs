//! Core data types for the career profile scraper
//!
//! Contains the request enums and the snapshot structures returned to callers.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OwStatsError;

/// Platform a career profile lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "pc")]
    Pc,
    #[serde(rename = "xbl")]
    XboxLive,
    #[serde(rename = "psn")]
    Playstation,
}

impl Platform {
    /// Path segment used by the career pages
    pub fn as_path(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::XboxLive => "xbl",
            Platform::Playstation => "psn",
        }
    }

    /// Console profiles are global, PC profiles are region scoped
    pub fn is_region_scoped(&self) -> bool {
        matches!(self, Platform::Pc)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for Platform {
    type Err = OwStatsError;

    /// Accepts both the display names (`PC`, `XboxLive`, `Playstation`)
    /// and the path codes (`pc`, `xbl`, `psn`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pc" => Ok(Platform::Pc),
            "xbl" | "xboxlive" | "xbox" => Ok(Platform::XboxLive),
            "psn" | "playstation" => Ok(Platform::Playstation),
            _ => Err(OwStatsError::InvalidPlatform(s.to_string())),
        }
    }
}

/// Ladder context with its own set of stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Competitive,
    Quickplay,
}

impl GameMode {
    /// Every mode a career page carries, in page order
    pub const ALL: [GameMode; 2] = [GameMode::Competitive, GameMode::Quickplay];

    /// Section id of the mode on the career page
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Competitive => "competitive",
            GameMode::Quickplay => "quickplay",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cast stat value
///
/// Serializes as a bare number, durations as milliseconds. The output is
/// one-way: a bare number cannot be told apart from a duration, so no
/// `Deserialize` is provided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i64),
    Float(f64),
    /// Duration in milliseconds
    Millis(i64),
}

impl StatValue {
    /// Numeric view of the value, durations in milliseconds
    pub fn as_f64(&self) -> f64 {
        match *self {
            StatValue::Integer(v) | StatValue::Millis(v) => v as f64,
            StatValue::Float(v) => v,
        }
    }
}

/// Sanitized stat label to cast value
pub type StatMap = BTreeMap<String, StatValue>;

/// Season and rank index decoded from a rank icon URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonInfo {
    pub id: u32,
    pub rank: u32,
}

/// Top level identity fields of a career page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Masthead nickname
    pub nick: String,

    /// Player level within the current prestige, 0 when unreadable
    pub level: u32,

    /// Portrait image URL
    pub avatar: Option<String>,

    /// Competitive skill rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    /// Prestige label decoded from the level border, empty when unknown
    pub tier: String,

    /// Rank icon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_picture: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<SeasonInfo>,

    /// Rank tier name (e.g. "Platinum"), derived from `season`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<String>,

    /// Platform label shown on the page
    pub platform: String,

    /// URL the page was fetched from
    pub url: String,
}

/// Stats for one game mode
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameModeStats {
    /// Highlight cards merged with the all-heroes aggregate
    pub global: StatMap,

    /// Per-hero stats, without the all-heroes aggregate
    pub heroes: BTreeMap<String, StatMap>,

    /// Hero shown in the masthead for this mode
    pub featured_hero: Option<String>,
}

/// A single achievement card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub acquired: bool,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    /// Lowercased category label the card was listed under
    pub category: String,
}

/// Everything extracted from one career page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSnapshot {
    pub profile: ProfileStats,
    pub competitive: GameModeStats,
    pub quickplay: GameModeStats,
    pub achievements: Vec<Achievement>,
}

impl ProfileSnapshot {
    /// Stats of the given mode
    pub fn mode(&self, mode: GameMode) -> &GameModeStats {
        match mode {
            GameMode::Competitive => &self.competitive,
            GameMode::Quickplay => &self.quickplay,
        }
    }
}

/// A player returned by the name search endpoint
///
/// Upstream fields not modelled here are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,

    #[serde(rename = "careerLink")]
    pub career_link: String,

    /// Platform path code taken from the career link
    pub platform: String,

    /// Region taken from the career link, PC profiles only
    pub region: Option<String>,

    /// Prestige count (`level / 100`)
    pub tier: u32,

    /// Level within the prestige (`level % 100`)
    pub level: u32,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
