//! Parsed HTML documents that answer selector queries.
//!
//! Parsing and selector matching are delegated to `scraper`.

use scraper::{Html, Selector};

use crate::error::{GraderError, Result};

/// Anything that can count the elements matching a CSS selector.
pub trait SelectorQuery {
    fn count_matches(&self, selector: &str) -> Result<usize>;
}

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw HTML. Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn parse(raw: &[u8]) -> Self {
        let text = String::from_utf8_lossy(raw);
        Self::parse_str(&text)
    }

    pub fn parse_str(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }
}

impl SelectorQuery for Document {
    fn count_matches(&self, selector: &str) -> Result<usize> {
        let parsed = compile(selector)?;
        Ok(self.html.select(&parsed).count())
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| GraderError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
