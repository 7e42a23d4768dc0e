// src/transport/direct.rs

//! Direct transport: requests pages from the API itself.

use reqwest::blocking::Client;
use url::Url;

use crate::error::Result;
use crate::models::{Config, PageRequest, PageResponse};
use crate::transport::PageTransport;
use crate::utils::http::{create_client, into_page_response, with_headers};

/// Fetches pages straight from the configured API endpoint.
pub struct DirectTransport {
    client: Client,
    base_url: Url,
}

impl DirectTransport {
    /// Create a transport for `config.api.base_url`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = create_client(&config.http)?;
        Ok(Self::with_client(client, Url::parse(&config.api.base_url)?))
    }

    /// Create a transport reusing an existing client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

impl PageTransport for DirectTransport {
    fn fetch(&self, request: &PageRequest) -> Result<PageResponse> {
        let builder = self
            .client
            .get(self.base_url.clone())
            .query(&[("page", request.page_number)]);
        let response = with_headers(builder, &request.headers).send()?;
        into_page_response(response)
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}
