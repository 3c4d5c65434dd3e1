//! Prestige decoding from the player level border
//!
//! The level badge carries its border as an inline style such as
//! `background-image:url(https://.../playerlevelrewards/0x0250000000000919_Border.png)`.

use std::sync::LazyLock;

use regex::Regex;

static BORDER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"playerlevelrewards/(.*)_Border\.png").ok());

/// Border asset id to prestige label
const PRESTIGE: [(&str, &str); 18] = [
    ("0x0250000000000918", "Bronze"),
    ("0x0250000000000919", "Bronze 1 Star"),
    ("0x025000000000091A", "Bronze 2 Stars"),
    ("0x025000000000091B", "Bronze 3 Stars"),
    ("0x025000000000091C", "Bronze 4 Stars"),
    ("0x025000000000091D", "Bronze 5 Stars"),
    ("0x025000000000091E", "Silver"),
    ("0x025000000000091F", "Silver 1 Star"),
    ("0x0250000000000920", "Silver 2 Stars"),
    ("0x0250000000000921", "Silver 3 Stars"),
    ("0x0250000000000922", "Silver 4 Stars"),
    ("0x0250000000000923", "Silver 5 Stars"),
    ("0x0250000000000924", "Gold"),
    ("0x0250000000000925", "Gold 1 Star"),
    ("0x0250000000000926", "Gold 2 Stars"),
    ("0x0250000000000927", "Gold 3 Stars"),
    ("0x0250000000000928", "Gold 4 Stars"),
    ("0x0250000000000929", "Gold 5 Stars"),
];

/// Strips the `url(...)` wrapper from a style value
fn unwrap_style_url(style: &str) -> String {
    let style = style.trim();
    let inner = match style.find("url") {
        Some(pos) => &style[pos + 3..],
        None => style,
    };
    inner.chars().filter(|c| !matches!(c, '(' | ')' | '"' | '\'')).collect()
}

/// Decodes the prestige label from a level border style
///
/// Returns an empty string when the style is absent, has no
/// `playerlevelrewards/<id>_Border.png` path, or names an unknown border.
pub fn parse_tier(style: Option<&str>) -> String {
    let Some(style) = style else {
        return String::new();
    };
    let path = unwrap_style_url(style);

    let Some(re) = BORDER_PATTERN.as_ref() else {
        return String::new();
    };
    re.captures(&path)
        .and_then(|caps| caps.get(1))
        .and_then(|m| PRESTIGE.iter().find(|(id, _)| *id == m.as_str()))
        .map(|(_, label)| label.to_string())
        .unwrap_or_default()
}
