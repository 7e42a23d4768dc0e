//! Testimonial record.

use std::fmt;

use serde::Serialize;

/// Highest rating the testimonials page displays.
pub const MAX_STARS: usize = 5;

/// A testimonial extracted from one block of a page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Testimonial {
    /// Text of the testimonial, `None` when the block has no text node
    pub text: Option<String>,

    /// Number of rating indicators found in the block (not clamped)
    pub rating: usize,
}

impl Testimonial {
    pub fn new(text: Option<String>, rating: usize) -> Self {
        Self { text, rating }
    }

    /// Text of the testimonial, or an empty string when absent.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// The `rating: N/5 stars` line.
    pub fn rating_line(&self) -> String {
        format!("rating: {}/{} stars", self.rating, MAX_STARS)
    }
}

impl fmt::Display for Testimonial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text_or_empty())?;
        write!(f, "{}", self.rating_line())
    }
}
