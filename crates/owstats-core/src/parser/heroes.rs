//! Per-hero stat table parser
//!
//! Each game mode section has a hero dropdown whose options map a hero
//! name to a category id; the stat tables of that hero are the slides
//! tagged with the same `data-category-id`.

use std::collections::BTreeMap;

use scraper::ElementRef;

use crate::cast::{cast_value, sanitize_label};
use crate::error::Result;
use crate::types::{GameMode, StatMap};

use super::document::{CareerPage, selector, text_of};

/// Sanitized name of the aggregate hero entry
pub const ALL_HEROES: &str = "all_heroes";

/// A hero dropdown entry
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeroOption {
    name: String,
    category_id: String,
}

/// Parses the hero stat tables of a game mode
///
/// With `overall_only` only the first dropdown entry is read, which is the
/// all-heroes aggregate on every career page. Heroes without any rows are
/// still present with an empty map.
pub fn parse_hero_stats(
    page: &CareerPage,
    mode: GameMode,
    overall_only: bool,
) -> Result<BTreeMap<String, StatMap>> {
    let mut options = hero_options(page, mode)?;
    if overall_only {
        options.truncate(1);
    }

    let slides = page.select(&format!("#{} [data-category-id]", mode))?;
    let row_selector = selector("tbody > tr")?;

    let mut heroes = BTreeMap::new();
    for option in options {
        let mut stats = StatMap::new();
        let matching = slides
            .iter()
            .filter(|slide| slide.value().attr("data-category-id") == Some(option.category_id.as_str()));

        for slide in matching {
            for row in slide.select(&row_selector) {
                let Some((label, raw)) = row_cells(&row) else {
                    continue;
                };
                match cast_value(&raw) {
                    Some(value) => {
                        stats.insert(sanitize_label(&label), value);
                    }
                    None => tracing::trace!(%mode, hero = %option.name, %label, %raw, "skipping uncastable stat"),
                }
            }
        }

        heroes.insert(option.name, stats);
    }

    Ok(heroes)
}

/// Reads the hero dropdown of a game mode in document order
fn hero_options(page: &CareerPage, mode: GameMode) -> Result<Vec<HeroOption>> {
    let options = page.select(&format!("#{} > .career-stats-section option", mode))?;

    Ok(options
        .iter()
        .filter_map(|option| {
            let element = option.value();
            let name = element.attr("option-id")?;
            let category_id = element.attr("value")?;
            Some(HeroOption {
                name: sanitize_label(&name.to_lowercase()),
                category_id: category_id.to_string(),
            })
        })
        .collect())
}

/// Label and value text of a stat row (its first two cells)
fn row_cells(row: &ElementRef) -> Option<(String, String)> {
    let mut cells = row.children().filter_map(ElementRef::wrap);
    let label = text_of(&cells.next()?);
    let value = text_of(&cells.next()?);
    if label.is_empty() {
        return None;
    }
    Some((label, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatValue;

    const HTML: &str = r#"
    <html><body>
    <div id="competitive">
        <section class="career-stats-section">
            <select data-js="career-select" data-group-id="stats">
                <option value="0x02E00000FFFFFFFF" option-id="ALL HEROES">ALL HEROES</option>
                <option value="0x02E0000000000002" option-id="Reaper">Reaper</option>
                <option value="0x02E0000000000003" option-id="Tracer">Tracer</option>
            </select>
            <div data-group-id="stats" data-category-id="0x02E00000FFFFFFFF">
                <div class="card-stat-block"><table class="data-table">
                    <thead><tr><th>Combat</th></tr></thead>
                    <tbody>
                        <tr><td>Eliminations</td><td>2,345</td></tr>
                        <tr><td>Time Played</td><td>12:00:00</td></tr>
                    </tbody>
                </table></div>
                <div class="card-stat-block"><table class="data-table">
                    <tbody><tr><td>Games Won</td><td>120</td></tr></tbody>
                </table></div>
            </div>
            <div data-group-id="stats" data-category-id="0x02E0000000000002">
                <table><tbody>
                    <tr><td>Death Blossom Kills</td><td>48</td></tr>
                    <tr><td>Weapon Accuracy</td><td>31%</td></tr>
                </tbody></table>
            </div>
        </section>
    </div>
    <div id="quickplay">
        <section class="career-stats-section">
            <select><option value="0x02E00000FFFFFFFF" option-id="ALL HEROES">ALL HEROES</option></select>
            <div data-category-id="0x02E00000FFFFFFFF">
                <table><tbody><tr><td>Eliminations</td><td>9</td></tr></tbody></table>
            </div>
        </section>
    </div>
    </body></html>
    "#;

    #[test]
    fn test_parse_hero_stats_all() {
        let page = CareerPage::parse(HTML);
        let heroes = parse_hero_stats(&page, GameMode::Competitive, false).unwrap();

        assert_eq!(heroes.len(), 3);

        let all = &heroes[ALL_HEROES];
        assert_eq!(all.get("eliminations"), Some(&StatValue::Integer(2345)));
        assert_eq!(all.get("time_played"), Some(&StatValue::Millis(43_200_000)));
        assert_eq!(all.get("games_won"), Some(&StatValue::Integer(120)));

        let reaper = &heroes["reaper"];
        assert_eq!(reaper.get("death_blossom_kills"), Some(&StatValue::Integer(48)));
        assert_eq!(reaper.get("weapon_accuracy"), Some(&StatValue::Integer(31)));
    }

    #[test]
    fn test_hero_without_rows_is_empty() {
        let page = CareerPage::parse(HTML);
        let heroes = parse_hero_stats(&page, GameMode::Competitive, false).unwrap();
        assert!(heroes["tracer"].is_empty());
    }

    #[test]
    fn test_parse_hero_stats_overall_only() {
        let page = CareerPage::parse(HTML);
        let heroes = parse_hero_stats(&page, GameMode::Competitive, true).unwrap();

        assert_eq!(heroes.len(), 1);
        assert!(heroes.contains_key(ALL_HEROES));
    }

    #[test]
    fn test_parse_hero_stats_is_scoped_to_mode() {
        let page = CareerPage::parse(HTML);
        let heroes = parse_hero_stats(&page, GameMode::Quickplay, false).unwrap();

        assert_eq!(heroes.len(), 1);
        assert_eq!(
            heroes[ALL_HEROES].get("eliminations"),
            Some(&StatValue::Integer(9))
        );
    }

    #[test]
    fn test_hero_options_order() {
        let page = CareerPage::parse(HTML);
        let options = hero_options(&page, GameMode::Competitive).unwrap();
        let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["all_heroes", "reaper", "tracer"]);
    }
}
