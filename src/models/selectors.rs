// src/models/selectors.rs

//! CSS selectors for scraping testimonial blocks.

use serde::{Deserialize, Serialize};

/// CSS selectors for scraping testimonial blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Selector for each testimonial block
    #[serde(default = "default_block_selector")]
    pub block_selector: String,

    /// Selector for the text element within a block
    #[serde(default = "default_text_selector")]
    pub text_selector: String,

    /// Selector for one rating indicator within a block
    #[serde(default = "default_rating_selector")]
    pub rating_selector: String,
}

fn default_block_selector() -> String {
    ".testimonial".to_string()
}

fn default_text_selector() -> String {
    ".text".to_string()
}

fn default_rating_selector() -> String {
    ".rating > svg".to_string()
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            block_selector: default_block_selector(),
            text_selector: default_text_selector(),
            rating_selector: default_rating_selector(),
        }
    }
}

impl SelectorConfig {
    /// All selectors with their config keys, for validation and logging.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("selectors.block_selector", &self.block_selector),
            ("selectors.text_selector", &self.text_selector),
            ("selectors.rating_selector", &self.rating_selector),
        ]
    }
}
