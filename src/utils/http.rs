// src/utils/http.rs

//! HTTP client utilities.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};

use crate::error::Result;
use crate::models::{HttpConfig, PageResponse};

/// Create a configured blocking HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Attach every header of the map to a request.
pub fn with_headers(builder: RequestBuilder, headers: &BTreeMap<String, String>) -> RequestBuilder {
    headers
        .iter()
        .fold(builder, |builder, (name, value)| {
            builder.header(name.as_str(), value.as_str())
        })
}

/// Read status and body of a response, whatever the status is.
pub fn into_page_response(response: Response) -> Result<PageResponse> {
    let status = response.status().as_u16();
    let body = response.text()?;
    Ok(PageResponse::new(status, body))
}
