//! Transports that deliver pages of the paginated resource.
//!
//! - `DirectTransport`: talks to the API itself
//! - `ScrapflyTransport`: fetches through the Scrapfly scraping proxy
//!
//! Both hand back the same `{status, body}` shape so the extractor does not
//! care which one is in use.

pub mod direct;
#[cfg(test)]
pub(crate) mod mock;
#[cfg(feature = "scrapfly")]
pub mod scrapfly;

use crate::error::Result;
use crate::models::{PageRequest, PageResponse};

// Re-export for convenience
pub use direct::DirectTransport;
#[cfg(feature = "scrapfly")]
pub use scrapfly::ScrapflyTransport;

/// Trait for page transports.
pub trait PageTransport {
    /// Fetch one page.
    ///
    /// Non-success statuses are returned as data; only failures to get a
    /// response at all are errors.
    fn fetch(&self, request: &PageRequest) -> Result<PageResponse>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

impl<T: PageTransport + ?Sized> PageTransport for Box<T> {
    fn fetch(&self, request: &PageRequest) -> Result<PageResponse> {
        (**self).fetch(request)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: PageTransport + ?Sized> PageTransport for &T {
    fn fetch(&self, request: &PageRequest) -> Result<PageResponse> {
        (**self).fetch(request)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
