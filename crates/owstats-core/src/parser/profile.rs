//! Profile section parser
//!
//! Reads identity, level, rank and platform from the career page masthead.

use crate::error::Result;
use crate::prestige::parse_tier;
use crate::rank::{parse_season, rank_tier};
use crate::types::ProfileStats;

use super::document::CareerPage;

/// Parses the masthead of a career page
///
/// Rank dependent fields are only filled when a positive skill rating is
/// shown; a profile without a competitive rank is not an error.
///
/// # Arguments
/// * `page` - Parsed career page
/// * `url` - URL the page was fetched from, copied into the result
pub fn parse_profile(page: &CareerPage, url: &str) -> Result<ProfileStats> {
    let nick = page.first_text(".header-masthead")?.unwrap_or_default();
    let level = page
        .first_text("div.player-level div")?
        .and_then(|text| text.parse::<u32>().ok())
        .unwrap_or(0);
    let avatar = page.first_attr(".player-portrait", "src")?;
    let tier = parse_tier(page.first_attr(".player-level", "style")?.as_deref());
    let platform = page.first_text("#profile-platforms > a")?.unwrap_or_default();

    let rank = page
        .first_text("div.competitive-rank > div")?
        .and_then(|text| text.replace(',', "").parse::<u32>().ok())
        .filter(|rank| *rank > 0);

    let mut profile = ProfileStats {
        nick,
        level,
        avatar,
        rank,
        tier,
        platform,
        url: url.to_string(),
        ..Default::default()
    };

    if rank.is_some() {
        profile.rank_picture = page.first_attr("div.competitive-rank > img", "src")?;
        profile.season = profile.rank_picture.as_deref().and_then(parse_season);
        profile.ranking = profile
            .season
            .as_ref()
            .and_then(rank_tier)
            .map(str::to_string);
    }

    Ok(profile)
}
