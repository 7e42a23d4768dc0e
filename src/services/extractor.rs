// src/services/extractor.rs

//! Paginated extractor.
//!
//! Requests pages one after another, starting at page 1, until the API
//! answers with the end-of-pagination error. Every other error response
//! aborts extraction and is surfaced with its payload.

use std::collections::{BTreeMap, VecDeque};

use crate::error::{AppError, Result};
use crate::models::{
    Config, PageOutcome, PageRequest, PageResponse, Testimonial, error_reason,
    is_end_of_pagination,
};
use crate::services::TestimonialParser;
use crate::transport::PageTransport;

/// Why the extractor stopped requesting pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// The API sent the end-of-pagination error
    EndOfPagination,
    /// A page failed; carries the page number
    Failed(u32),
}

/// Where the extractor stands in the paginated resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Page the next request asks for
    pub page_number: u32,
    /// Pages fetched successfully
    pub pages_fetched: u32,
    /// Records handed out so far
    pub records_emitted: usize,
    /// Set once pagination ended or failed
    pub finish: Option<Finish>,
}

impl PaginationState {
    pub fn is_finished(&self) -> bool {
        self.finish.is_some()
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_number: 1,
            pages_fetched: 0,
            records_emitted: 0,
            finish: None,
        }
    }
}

/// Lazily extracts testimonials page by page.
///
/// Iterating yields `Ok(record)` in page then document order. A failure
/// is yielded once as `Err` and ends the sequence.
pub struct Extractor<T: PageTransport> {
    transport: T,
    parser: TestimonialParser,
    headers: BTreeMap<String, String>,
    state: PaginationState,
    buffer: VecDeque<Testimonial>,
}

/// Build an extractor for the configured API over the given transport.
pub fn extract_all<T: PageTransport>(transport: T, config: &Config) -> Result<Extractor<T>> {
    let parser = TestimonialParser::new(&config.selectors)?;
    Ok(Extractor::new(transport, parser, config.api.headers()))
}

impl<T: PageTransport> Extractor<T> {
    pub fn new(transport: T, parser: TestimonialParser, headers: BTreeMap<String, String>) -> Self {
        Self {
            transport,
            parser,
            headers,
            state: PaginationState::default(),
            buffer: VecDeque::new(),
        }
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Fetch and classify the current page.
    ///
    /// The page counter only advances on success. Once the extractor is
    /// finished no further requests are issued: a clean end keeps returning
    /// `EndOfPagination`, a failed run keeps returning `AppError::Aborted`.
    pub fn next_page(&mut self) -> Result<PageOutcome> {
        match self.state.finish {
            Some(Finish::EndOfPagination) => return Ok(PageOutcome::EndOfPagination),
            Some(Finish::Failed(page)) => return Err(AppError::aborted(page)),
            None => {}
        }

        let page_number = self.state.page_number;
        log::info!("Scraping page {} via {}", page_number, self.transport.name());

        let request = PageRequest::new(page_number, self.headers.clone());
        let response = match self.transport.fetch(&request) {
            Ok(response) => response,
            Err(e) => {
                self.state.finish = Some(Finish::Failed(page_number));
                return Err(e);
            }
        };

        let status = response.status;
        let outcome = self.classify(response);
        match &outcome {
            PageOutcome::Success(records) => {
                log::debug!("Page {} holds {} testimonials", page_number, records.len());
                self.state.pages_fetched += 1;
                self.state.page_number += 1;
            }
            PageOutcome::EndOfPagination => {
                log::info!("Reached the last page after {} pages", self.state.pages_fetched);
                self.state.finish = Some(Finish::EndOfPagination);
            }
            PageOutcome::Failure(payload) => {
                log::error!(
                    "Page {} failed with status {}: {}",
                    page_number,
                    status,
                    error_reason(payload).unwrap_or("unexpected error payload")
                );
                self.state.finish = Some(Finish::Failed(page_number));
            }
        }
        Ok(outcome)
    }

    /// Drain the whole sequence into a vector, stopping at the first error.
    pub fn collect_all(self) -> Result<Vec<Testimonial>> {
        self.collect()
    }

    fn classify(&self, response: PageResponse) -> PageOutcome {
        if response.is_success() {
            return PageOutcome::Success(self.parser.parse(&response.body));
        }

        let payload = response.error_payload();
        if is_end_of_pagination(&payload) {
            PageOutcome::EndOfPagination
        } else {
            PageOutcome::Failure(payload)
        }
    }
}

impl<T: PageTransport> Iterator for Extractor<T> {
    type Item = Result<Testimonial>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                self.state.records_emitted += 1;
                return Some(Ok(record));
            }
            if self.state.is_finished() {
                return None;
            }

            let page_number = self.state.page_number;
            match self.next_page() {
                Ok(PageOutcome::Success(records)) => self.buffer.extend(records),
                Ok(PageOutcome::EndOfPagination) => return None,
                Ok(PageOutcome::Failure(payload)) => {
                    return Some(Err(AppError::api(page_number, payload)));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
