//! Achievements parser
//!
//! Achievements are grouped by a category dropdown; each category id
//! tags a block of `ul > div` achievement cards.

use crate::error::Result;
use crate::types::Achievement;

use super::document::{CareerPage, child_text, children_named, selector};

/// Class marker of a locked achievement card
const DISABLED_MARKER: &str = "m-disabled";

/// Parses every achievement card of the page
///
/// Output follows the category dropdown order, then document order
/// within each category.
pub fn parse_achievements(page: &CareerPage) -> Result<Vec<Achievement>> {
    let categories: Vec<(String, String)> = page
        .select(r#"select[data-group-id="achievements"] option"#)?
        .iter()
        .filter_map(|option| {
            let element = option.value();
            let name = element.attr("option-id")?.to_lowercase();
            let value = element.attr("value")?.to_string();
            Some((name, value))
        })
        .collect();

    let blocks = page.select("[data-category-id]")?;
    let card_selector = selector(".achievement-card")?;
    let thumbnail_selector = selector(".media-card-fill")?;
    let title_selector = selector(".tooltip-tip > .h5")?;
    let description_selector = selector(".tooltip-tip > .h6")?;

    let mut achievements = Vec::new();
    for (category, category_id) in &categories {
        let matching = blocks
            .iter()
            .filter(|block| block.value().attr("data-category-id") == Some(category_id.as_str()));

        for block in matching {
            let containers = children_named(block, "ul")
                .iter()
                .flat_map(|list| children_named(list, "div"))
                .collect::<Vec<_>>();

            for container in containers {
                let Some(card) = container.select(&card_selector).next() else {
                    continue;
                };
                let acquired = !card.value().classes().any(|class| class == DISABLED_MARKER);
                let thumbnail = container
                    .select(&thumbnail_selector)
                    .next()
                    .and_then(|img| img.value().attr("src"))
                    .unwrap_or_default()
                    .to_string();

                achievements.push(Achievement {
                    acquired,
                    thumbnail,
                    title: child_text(&container, &title_selector).unwrap_or_default(),
                    description: child_text(&container, &description_selector)
                        .unwrap_or_default(),
                    category: category.clone(),
                });
            }
        }
    }

    Ok(achievements)
}
