// src/models/page.rs

//! Page request/response types and the classified outcome of a page.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::Testimonial;

/// Error reason the API uses to say there are no more pages.
pub const END_OF_PAGINATION_ERROR: &str = "invalid page";

/// The only status treated as a successful page.
pub const STATUS_OK: u16 = 200;

/// A request for one page of the paginated resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page_number: u32,

    /// Headers sent with the request
    pub headers: BTreeMap<String, String>,
}

impl PageRequest {
    pub fn new(page_number: u32, headers: BTreeMap<String, String>) -> Self {
        Self {
            page_number,
            headers,
        }
    }
}

/// Raw response as returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
}

impl PageResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Decode the body as an error payload.
    ///
    /// A body that is not JSON is kept verbatim as a string value.
    pub fn error_payload(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|_| Value::String(self.body.clone()))
    }
}

/// Extract `detail.error` from an error payload.
pub fn error_reason(payload: &Value) -> Option<&str> {
    payload.pointer("/detail/error").and_then(Value::as_str)
}

/// Whether an error payload is the end-of-pagination signal.
pub fn is_end_of_pagination(payload: &Value) -> bool {
    error_reason(payload) == Some(END_OF_PAGINATION_ERROR)
}

/// Classified result of fetching one page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// The page was fetched and parsed
    Success(Vec<Testimonial>),
    /// The API signalled there are no more pages
    EndOfPagination,
    /// The API returned any other error; carries the original payload
    Failure(Value),
}

impl PageOutcome {
    pub fn is_end(&self) -> bool {
        matches!(self, Self::EndOfPagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentinel_detected() {
        let payload = json!({"detail": {"error": "invalid page"}});
        assert!(is_end_of_pagination(&payload));
    }

    #[test]
    fn test_other_reason_not_sentinel() {
        let payload = json!({"detail": {"error": "invalid token"}});
        assert!(!is_end_of_pagination(&payload));
        assert_eq!(error_reason(&payload), Some("invalid token"));
    }

    #[test]
    fn test_missing_structure_not_sentinel() {
        assert!(!is_end_of_pagination(&json!({"error": "invalid page"})));
        assert!(!is_end_of_pagination(&json!({"detail": "invalid page"})));
        assert!(!is_end_of_pagination(&json!("invalid page")));
    }

    #[test]
    fn test_error_payload_non_json_kept_verbatim() {
        let response = PageResponse::new(502, "Bad Gateway");
        assert_eq!(response.error_payload(), json!("Bad Gateway"));
    }

    #[test]
    fn test_only_200_is_success() {
        assert!(PageResponse::new(200, "").is_success());
        assert!(!PageResponse::new(204, "").is_success());
        assert!(!PageResponse::new(422, "").is_success());
    }
}
