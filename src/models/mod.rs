// src/models/mod.rs

//! Domain models for the extractor.

mod config;
mod page;
mod selectors;
mod testimonial;

// Re-export all public types
pub use config::{ApiConfig, Config, HttpConfig, LoggingConfig, ProxyConfig};
pub use page::{
    END_OF_PAGINATION_ERROR, PageOutcome, PageRequest, PageResponse, STATUS_OK, error_reason,
    is_end_of_pagination,
};
pub use selectors::SelectorConfig;
pub use testimonial::{MAX_STARS, Testimonial};
