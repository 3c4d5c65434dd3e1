//! Parsers for career pages and search responses
//!
//! Each section parser reads the same immutable [`CareerPage`] and returns
//! its own value; [`parse_career_page`] merges them into a snapshot.

pub mod achievements;
pub mod document;
pub mod featured;
pub mod heroes;
pub mod profile;
pub mod search;

pub use achievements::parse_achievements;
pub use document::CareerPage;
pub use featured::{FeaturedStats, parse_featured};
pub use heroes::{ALL_HEROES, parse_hero_stats};
pub use profile::parse_profile;
pub use search::{normalize_battle_tag, parse_search_results};

use crate::error::Result;
use crate::types::{GameMode, GameModeStats, ProfileSnapshot};

/// Parses a full career page into a snapshot
///
/// The all-heroes aggregate of every mode is folded into that mode's
/// `global` stats and removed from its `heroes` map; on key collisions
/// the aggregate wins over the highlight card.
///
/// # Arguments
/// * `html` - Raw career page HTML
/// * `url` - URL the page was fetched from
/// * `overall_only` - Only read the all-heroes aggregate of each mode
pub fn parse_career_page(html: &str, url: &str, overall_only: bool) -> Result<ProfileSnapshot> {
    let page = CareerPage::parse(html);

    let profile = parse_profile(&page, url)?;
    let competitive = parse_game_mode(&page, GameMode::Competitive, overall_only)?;
    let quickplay = parse_game_mode(&page, GameMode::Quickplay, overall_only)?;
    let achievements = parse_achievements(&page)?;

    Ok(ProfileSnapshot {
        profile,
        competitive,
        quickplay,
        achievements,
    })
}

/// Parses and merges featured and hero stats of one mode
fn parse_game_mode(page: &CareerPage, mode: GameMode, overall_only: bool) -> Result<GameModeStats> {
    let FeaturedStats {
        stats: mut global,
        featured_hero,
    } = parse_featured(page, mode)?;
    let mut heroes = parse_hero_stats(page, mode, overall_only)?;

    if let Some(aggregate) = heroes.remove(ALL_HEROES) {
        global.extend(aggregate);
    }

    Ok(GameModeStats {
        global,
        heroes,
        featured_hero,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatValue;

    const HTML: &str = r#"
    <html><body>
    <div id="overview-section">
        <div class="masthead-hero-image" data-hero-competitive="ana" data-hero-quickplay="ana"></div>
        <h1 class="header-masthead">Foo</h1>
        <div class="player-level"><div>12</div></div>
    </div>
    <div id="competitive">
        <section class="highlights-section">
            <div class="card-content"><h3 class="card-heading">10</h3><p class="card-copy">Medals</p></div>
            <div class="card-content"><h3 class="card-heading">1</h3><p class="card-copy">Games Won</p></div>
        </section>
        <section class="career-stats-section">
            <select>
                <option value="0x02E00000FFFFFFFF" option-id="ALL HEROES">ALL HEROES</option>
                <option value="0x02E000000000013B" option-id="Ana">Ana</option>
            </select>
            <div data-category-id="0x02E00000FFFFFFFF">
                <table><tbody>
                    <tr><td>Games Won</td><td>5</td></tr>
                    <tr><td>Time Played</td><td>1:00:00</td></tr>
                </tbody></table>
            </div>
            <div data-category-id="0x02E000000000013B">
                <table><tbody><tr><td>Enemies Slept</td><td>33</td></tr></tbody></table>
            </div>
        </section>
    </div>
    <div id="quickplay">
        <section class="career-stats-section">
            <select>
                <option value="0x02E00000FFFFFFFF" option-id="ALL HEROES">ALL HEROES</option>
                <option value="0x02E000000000013B" option-id="Ana">Ana</option>
            </select>
            <div data-category-id="0x02E000000000013B">
                <table><tbody><tr><td>Enemies Slept</td><td>2</td></tr></tbody></table>
            </div>
        </section>
    </div>
    </body></html>
    "#;

    #[test]
    fn test_aggregate_is_folded_into_global() {
        let snapshot = parse_career_page(HTML, "u", false).unwrap();
        let competitive = &snapshot.competitive;

        assert_eq!(competitive.global.get("medals"), Some(&StatValue::Integer(10)));
        // aggregate overrides the highlight card
        assert_eq!(competitive.global.get("games_won"), Some(&StatValue::Integer(5)));
        assert_eq!(
            competitive.global.get("time_played"),
            Some(&StatValue::Millis(3_600_000))
        );

        assert!(!competitive.heroes.contains_key(ALL_HEROES));
        assert_eq!(competitive.heroes.len(), 1);
        assert_eq!(
            competitive.heroes["ana"].get("enemies_slept"),
            Some(&StatValue::Integer(33))
        );
        assert_eq!(competitive.featured_hero.as_deref(), Some("ana"));
    }

    #[test]
    fn test_overall_only_has_no_heroes() {
        let snapshot = parse_career_page(HTML, "u", true).unwrap();

        assert!(snapshot.competitive.heroes.is_empty());
        assert!(snapshot.quickplay.heroes.is_empty());
        assert_eq!(
            snapshot.competitive.global.get("games_won"),
            Some(&StatValue::Integer(5))
        );
    }

    #[test]
    fn test_empty_aggregate_keeps_highlights() {
        let snapshot = parse_career_page(HTML, "u", false).unwrap();
        assert!(snapshot.quickplay.global.is_empty());
        assert_eq!(snapshot.quickplay.heroes["ana"].len(), 1);
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let first = parse_career_page(HTML, "u", false).unwrap();
        let second = parse_career_page(HTML, "u", false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_profile_url_is_kept() {
        let snapshot = parse_career_page(HTML, "https://example.test/en-us/career/pc/us/Foo-1", true).unwrap();
        assert_eq!(snapshot.profile.url, "https://example.test/en-us/career/pc/us/Foo-1");
        assert_eq!(snapshot.profile.nick, "Foo");
        assert_eq!(snapshot.profile.level, 12);
    }
}
