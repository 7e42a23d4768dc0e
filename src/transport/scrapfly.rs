// src/transport/scrapfly.rs

//! Scrapfly transport: fetches pages through the Scrapfly scraping proxy.
//!
//! The proxy answers with a JSON envelope; the upstream status and body are
//! found under `result.status_code` and `result.content`.

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Config, PageRequest, PageResponse};
use crate::transport::PageTransport;
use crate::utils::http::create_client;
use crate::utils::page_url;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Option<UpstreamResult>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamResult {
    status_code: u16,
    #[serde(default)]
    content: Option<String>,
}

/// Fetches pages through the Scrapfly API.
pub struct ScrapflyTransport {
    client: Client,
    endpoint: Url,
    target: Url,
    api_key: String,
}

impl ScrapflyTransport {
    /// Create a transport with an explicit API key.
    pub fn new(config: &Config, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AppError::config("Scrapfly API key is empty"));
        }
        config.validate_proxy()?;

        Ok(Self {
            client: create_client(&config.http)?,
            endpoint: Url::parse(&config.proxy.endpoint)?,
            target: Url::parse(&config.api.base_url)?,
            api_key,
        })
    }

    /// Create a transport reading the API key from `proxy.key_env`.
    pub fn from_env(config: &Config) -> Result<Self> {
        let key_env = &config.proxy.key_env;
        let api_key = std::env::var(key_env).map_err(|_| {
            AppError::config(format!("Environment variable {key_env} is not set"))
        })?;
        Self::new(config, api_key)
    }

    /// Query parameters of the proxy call for one page.
    fn query(&self, request: &PageRequest) -> Vec<(String, String)> {
        let mut params = vec![
            ("key".to_string(), self.api_key.clone()),
            (
                "url".to_string(),
                page_url(&self.target, request.page_number).to_string(),
            ),
        ];
        params.extend(request.headers.iter().map(|(name, value)| {
            (format!("headers[{}]", name.to_lowercase()), value.clone())
        }));
        params
    }

    fn unwrap_envelope(status: u16, body: &str) -> Result<PageResponse> {
        let envelope: Envelope = serde_json::from_str(body).map_err(|e| {
            AppError::proxy(format!("unreadable response (status {status}): {e}"))
        })?;

        match envelope.result {
            Some(result) => Ok(PageResponse::new(
                result.status_code,
                result.content.unwrap_or_default(),
            )),
            None => Err(AppError::proxy(format!(
                "status {status}, code {}: {}",
                envelope.code.as_deref().unwrap_or("unknown"),
                envelope.message.as_deref().unwrap_or("no message")
            ))),
        }
    }
}

impl PageTransport for ScrapflyTransport {
    fn fetch(&self, request: &PageRequest) -> Result<PageResponse> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&self.query(request))
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        log::debug!("Scrapfly answered {} for page {}", status, request.page_number);

        Self::unwrap_envelope(status, &body)
    }

    fn name(&self) -> &'static str {
        "scrapfly"
    }
}
