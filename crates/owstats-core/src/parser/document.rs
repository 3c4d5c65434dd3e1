//! Narrow query surface over a parsed career page
//!
//! Parsers only need selection, attribute and text access; keeping them
//! behind [`CareerPage`] keeps `scraper` node types out of their signatures.

use scraper::{ElementRef, Html, Selector};

use crate::error::{OwStatsError, Result};

/// A parsed, immutable career page document
pub struct CareerPage {
    html: Html,
}

impl CareerPage {
    /// Parses a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Every element matching `css`, in document order
    pub fn select<'a>(&'a self, css: &str) -> Result<Vec<ElementRef<'a>>> {
        let selector = selector(css)?;
        Ok(self.html.select(&selector).collect())
    }

    /// Trimmed text of the first element matching `css`
    pub fn first_text(&self, css: &str) -> Result<Option<String>> {
        let selector = selector(css)?;
        Ok(self.html.select(&selector).next().map(|el| text_of(&el)))
    }

    /// Attribute value of the first element matching `css`
    pub fn first_attr(&self, css: &str, attr: &str) -> Result<Option<String>> {
        let selector = selector(css)?;
        Ok(self
            .html
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string))
    }
}

/// Compiles a CSS selector, mapping failures to `ParseError`
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| OwStatsError::ParseError(format!("Invalid selector {}: {:?}", css, e)))
}

/// Collected, trimmed text content of an element
pub(crate) fn text_of(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first descendant matching `selector`
pub(crate) fn child_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(|el| text_of(&el))
}

/// Direct element children of `element` with the given tag name
pub(crate) fn children_named<'a>(element: &ElementRef<'a>, name: &str) -> Vec<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == name)
        .collect()
}
