//! Pipeline entry points.
//!
//! - `run_extractor`: page through the API and print every testimonial

pub mod extract;

pub use extract::{ExtractSummary, run_extractor};
