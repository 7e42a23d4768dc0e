// src/services/parser.rs

//! Testimonial parser.
//!
//! Turns the HTML fragment of one page into testimonial records using the
//! configured CSS selectors.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{SelectorConfig, Testimonial};

/// Compiled selectors for testimonial blocks.
#[derive(Debug, Clone)]
pub struct TestimonialParser {
    block: Selector,
    text: Selector,
    rating: Selector,
}

impl TestimonialParser {
    /// Compile the configured selectors.
    pub fn new(selectors: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            block: Self::parse_selector(&selectors.block_selector)?,
            text: Self::parse_selector(&selectors.text_selector)?,
            rating: Self::parse_selector(&selectors.rating_selector)?,
        })
    }

    /// Extract every testimonial block of a page, in document order.
    pub fn parse(&self, html: &str) -> Vec<Testimonial> {
        let document = Html::parse_document(html);
        document
            .select(&self.block)
            .map(|block| self.parse_block(&block))
            .collect()
    }

    fn parse_block(&self, block: &ElementRef) -> Testimonial {
        // First text node directly under a text element; nested markup is skipped.
        let text = block
            .select(&self.text)
            .flat_map(|el| el.children())
            .find_map(|node| node.value().as_text().map(|t| (**t).to_owned()));
        let rating = block.select(&self.rating).count();

        Testimonial::new(text, rating)
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

impl Default for TestimonialParser {
    fn default() -> Self {
        Self::new(&SelectorConfig::default()).expect("default selectors are valid CSS")
    }
}
