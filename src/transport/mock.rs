//! Scripted transport for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{AppError, Result};
use crate::models::{PageRequest, PageResponse};
use crate::transport::PageTransport;

/// Replays queued responses and records every request it receives.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<PageResponse>>>,
    requests: RefCell<Vec<PageRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(PageResponse::new(status, body)));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail(self, error: AppError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    /// Pages requested so far, in order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests
            .borrow()
            .iter()
            .map(|r| r.page_number)
            .collect()
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.borrow().clone()
    }
}

impl PageTransport for MockTransport {
    fn fetch(&self, request: &PageRequest) -> Result<PageResponse> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::proxy("mock transport has no response queued")))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// HTML fragment with one testimonial block per `(text, rating)` pair.
pub fn page_html(records: &[(&str, usize)]) -> String {
    records
        .iter()
        .map(|(text, rating)| {
            format!(
                r#"<div class="testimonial"><p class="text">{text}</p><div class="rating">{}</div></div>"#,
                "<svg></svg>".repeat(*rating)
            )
        })
        .collect()
}

/// Body of the end-of-pagination error.
pub fn end_of_pages() -> &'static str {
    r#"{"detail": {"error": "invalid page"}}"#
}
