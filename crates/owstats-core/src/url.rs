//! URL helper functions for career pages
//!
//! Provides locale validation and builders for profile and search URLs.

use crate::error::{OwStatsError, Result};
use crate::types::Platform;

/// Public site the career pages are served from
pub const BASE_URL: &str = "https://playoverwatch.com";

/// Locale used when the caller does not pick one
pub const DEFAULT_LOCALE: &str = "en-us";

/// Every locale the career pages are published in
pub const LOCALES: [&str; 15] = [
    "de-de", "en-us", "en-gb", "es-es", "es-mx", "fr-fr", "it-it", "pt-br", "pt-pt", "pl-pl",
    "ru-ru", "ko-kr", "ja-jp", "zh-tw", "zh-cn",
];

/// Validates a locale code, falling back to [`DEFAULT_LOCALE`]
///
/// # Errors
/// Returns `InvalidLocale` if the code is not in [`LOCALES`]
pub fn resolve_locale(locale: Option<&str>) -> Result<&str> {
    let locale = locale.unwrap_or(DEFAULT_LOCALE);
    if LOCALES.contains(&locale) {
        Ok(locale)
    } else {
        Err(OwStatsError::InvalidLocale(locale.to_string()))
    }
}

/// Builds the career page path (without host)
///
/// Console platforms have no region segment; PC inserts `/<region>`
/// before the percent-encoded battle-tag.
///
/// # Example
/// ```
/// use owstats_core::{Platform, url::profile_path};
/// let path = profile_path(Platform::Pc, Some("eu"), "Foo-1234", Some("de-de")).unwrap();
/// assert_eq!(path, "/de-de/career/pc/eu/Foo-1234");
/// ```
pub fn profile_path(
    platform: Platform,
    region: Option<&str>,
    tag: &str,
    locale: Option<&str>,
) -> Result<String> {
    let locale = resolve_locale(locale)?;
    let tag = urlencoding::encode(tag);

    if platform.is_region_scoped() {
        let region = region
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or(OwStatsError::MissingRegion)?;
        Ok(format!("/{}/career/{}/{}/{}", locale, platform.as_path(), region, tag))
    } else {
        Ok(format!("/{}/career/{}/{}", locale, platform.as_path(), tag))
    }
}

/// Builds the full career page URL
///
/// # Example
/// ```
/// use owstats_core::{Platform, url::build_profile_url};
/// let url = build_profile_url(Platform::Playstation, None, "Foo", None).unwrap();
/// assert_eq!(url, "https://playoverwatch.com/en-us/career/psn/Foo");
/// ```
pub fn build_profile_url(
    platform: Platform,
    region: Option<&str>,
    tag: &str,
    locale: Option<&str>,
) -> Result<String> {
    Ok(format!("{}{}", BASE_URL, profile_path(platform, region, tag, locale)?))
}

/// Builds the name search path (without host)
///
/// The name is percent-encoded only when `encode` is set.
pub fn search_path(name: &str, locale: Option<&str>, encode: bool) -> Result<String> {
    let locale = resolve_locale(locale)?;
    let name = if encode {
        urlencoding::encode(name).into_owned()
    } else {
        name.to_string()
    };
    Ok(format!("/{}/search/account-by-name/{}", locale, name))
}

/// Builds the full name search URL
///
/// # Example
/// ```
/// use owstats_core::url::build_search_url;
/// let url = build_search_url("Foo#1234", None, true).unwrap();
/// assert_eq!(url, "https://playoverwatch.com/en-us/search/account-by-name/Foo%231234");
/// ```
pub fn build_search_url(name: &str, locale: Option<&str>, encode: bool) -> Result<String> {
    Ok(format!("{}{}", BASE_URL, search_path(name, locale, encode)?))
}

/// Splits a search record's career link into platform and region
///
/// Links look like `/career/pc/us/Foo-1234` or `/career/psn/Foo`;
/// only PC links carry a region.
pub fn split_career_link(link: &str) -> Option<(String, Option<String>)> {
    let path = link.split('?').next().unwrap_or(link);
    let mut parts = path.trim_start_matches('/').split('/');

    if parts.next()? != "career" {
        return None;
    }
    let platform = parts.next().filter(|p| !p.is_empty())?;
    let rest: Vec<&str> = parts.filter(|p| !p.is_empty()).collect();

    let region = match platform {
        "pc" if rest.len() >= 2 => Some(rest[0].to_string()),
        _ => None,
    };

    Some((platform.to_string(), region))
}
