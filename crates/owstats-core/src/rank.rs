//! Season and rank tier decoding
//!
//! Rank icons are served from paths like `.../season-2/rank-4/icon.png`;
//! the digits index into per-season tier tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::SeasonInfo;

static SEASON_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"season-([0-9])/rank-([0-9])").ok());

/// Tier names per season, indexed by `rank - 1`
const SEASON_TIERS: [(u32, &[&str]); 2] = [
    (1, &[]),
    (
        2,
        &[
            "Bronze",
            "Silver",
            "Gold",
            "Platinum",
            "Diamond",
            "Master",
            "Grandmaster",
            "Top500",
        ],
    ),
];

/// Decodes season id and rank index from a rank icon URL
///
/// Returns `None` if the URL has no `season-<d>/rank-<d>` segment.
///
/// # Example
/// ```
/// use owstats_core::rank::parse_season;
/// let season = parse_season("https://x/season-2/rank-3/y.png").unwrap();
/// assert_eq!((season.id, season.rank), (2, 3));
/// assert!(parse_season("https://x/nomatch.png").is_none());
/// ```
pub fn parse_season(url: &str) -> Option<SeasonInfo> {
    let caps = SEASON_PATTERN.as_ref()?.captures(url)?;

    let id = caps.get(1)?.as_str().parse().ok()?;
    let rank = caps.get(2)?.as_str().parse().ok()?;
    Some(SeasonInfo { id, rank })
}

/// Looks up the tier name of a decoded season
///
/// `None` for unknown seasons, seasons without tiers, and out of range ranks.
pub fn rank_tier(season: &SeasonInfo) -> Option<&'static str> {
    let (_, tiers) = SEASON_TIERS.iter().find(|(id, _)| *id == season.id)?;
    let index = season.rank.checked_sub(1)?;
    tiers.get(index as usize).copied()
}
