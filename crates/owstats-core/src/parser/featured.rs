//! Featured (highlight card) stats parser

use crate::cast::{cast_value, sanitize_label};
use crate::error::Result;
use crate::types::{GameMode, StatMap};

use super::document::{CareerPage, child_text, selector};

/// Highlight cards of one game mode plus the hero shown in the masthead
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedStats {
    pub stats: StatMap,
    pub featured_hero: Option<String>,
}

/// Parses the highlight cards of a game mode section
///
/// Card labels are sanitized into keys; values that cannot be cast
/// are skipped.
pub fn parse_featured(page: &CareerPage, mode: GameMode) -> Result<FeaturedStats> {
    let cards = page.select(&format!(
        "#{} > section.highlights-section div.card-content",
        mode
    ))?;
    let label_selector = selector(".card-copy")?;
    let value_selector = selector(".card-heading")?;

    let mut stats = StatMap::new();
    for card in cards {
        let Some(label) = child_text(&card, &label_selector) else {
            continue;
        };
        let Some(raw) = child_text(&card, &value_selector) else {
            continue;
        };
        match cast_value(&raw) {
            Some(value) => {
                stats.insert(sanitize_label(&label), value);
            }
            None => tracing::trace!(%mode, %label, %raw, "skipping uncastable highlight"),
        }
    }

    let featured_hero = page
        .first_attr(
            "#overview-section > .masthead-hero-image",
            &format!("data-hero-{}", mode),
        )?
        .filter(|hero| !hero.is_empty());

    Ok(FeaturedStats {
        stats,
        featured_hero,
    })
}
