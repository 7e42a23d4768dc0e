//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Append a `page` query parameter to a base URL.
pub fn page_url(base: &Url, page_number: u32) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("page", &page_number.to_string());
    url
}
