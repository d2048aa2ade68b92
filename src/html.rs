//! Visible-text extraction from HTML markup.

use scraper::{Html, Selector};

use crate::error::{Result, TokenizerError};

/// Turns markup into the text a reader would see.
pub trait HtmlExtractor: Send + Sync {
    fn visible_text(&self, markup: &str) -> Result<String>;
}

/// `scraper`-backed extractor.
///
/// The lenient default parses a full document and never fails. In strict
/// mode the markup is parsed as a body fragment and any reported parse
/// error becomes [`TokenizerError::ParseFailure`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperExtractor {
    strict: bool,
}

impl ScraperExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }
}

impl HtmlExtractor for ScraperExtractor {
    fn visible_text(&self, markup: &str) -> Result<String> {
        let mut document = if self.strict {
            let fragment = Html::parse_fragment(markup);
            if let Some(err) = fragment.errors.first() {
                return Err(TokenizerError::ParseFailure(err.to_string()));
            }
            fragment
        } else {
            Html::parse_document(markup)
        };
        remove_hidden(&mut document)?;
        Ok(document.root_element().text().collect())
    }
}

/// Detach every `script` and `style` subtree.
fn remove_hidden(document: &mut Html) -> Result<()> {
    let selector = Selector::parse("script, style")
        .map_err(|e| TokenizerError::ParseFailure(e.to_string()))?;
    let ids: Vec<_> = document.select(&selector).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
    Ok(())
}
