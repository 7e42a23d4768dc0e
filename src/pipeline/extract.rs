// src/pipeline/extract.rs

//! Extraction pipeline: runs the extractor and prints its records.

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Config, Testimonial};
use crate::services::extract_all;
use crate::transport::PageTransport;

/// Line printed after every record.
pub const SEPARATOR: &str = "-------------";

/// Statistics of an extraction run.
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    pub pages: u32,
    pub records: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ExtractSummary {
    pub fn elapsed_secs(&self) -> f64 {
        (self.finished_at - self.started_at)
            .num_milliseconds()
            .max(0) as f64
            / 1000.0
    }
}

/// Run the extractor over `transport`, writing every record to `out`.
///
/// Records are written as soon as their page is parsed; a failure aborts
/// the run after the records already written.
pub fn run_extractor<T: PageTransport, W: Write>(
    config: &Config,
    transport: T,
    out: &mut W,
) -> Result<ExtractSummary> {
    let started_at = Utc::now();
    log::info!("Extracting testimonials from {}", config.api.base_url);

    let mut extractor = extract_all(transport, config)?;
    for record in extractor.by_ref() {
        write_record(out, &record?)?;
    }
    out.flush()?;

    let state = extractor.state();
    let summary = ExtractSummary {
        pages: state.pages_fetched,
        records: state.records_emitted,
        started_at,
        finished_at: Utc::now(),
    };

    log::info!(
        "Extracted {} testimonials from {} pages in {:.2}s",
        summary.records,
        summary.pages,
        summary.elapsed_secs()
    );
    Ok(summary)
}

fn write_record<W: Write>(out: &mut W, record: &Testimonial) -> Result<()> {
    writeln!(out, "{record}")?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::transport::mock::{MockTransport, end_of_pages, page_html};

    #[test]
    fn test_prints_records_in_order() {
        let transport = MockTransport::new()
            .respond(200, page_html(&[("text1", 5), ("text2", 3)]))
            .respond(200, page_html(&[("text3", 4)]))
            .respond(422, end_of_pages());

        let mut out = Vec::new();
        let summary = run_extractor(&Config::default(), &transport, &mut out).unwrap();

        let expected = "text1\nrating: 5/5 stars\n-------------\n\
                        text2\nrating: 3/5 stars\n-------------\n\
                        text3\nrating: 4/5 stars\n-------------\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(summary.pages, 2);
        assert_eq!(summary.records, 3);
        assert!(summary.finished_at >= summary.started_at);
    }

    #[test]
    fn test_no_pages() {
        let transport = MockTransport::new().respond(422, end_of_pages());

        let mut out = Vec::new();
        let summary = run_extractor(&Config::default(), &transport, &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(summary.pages, 0);
        assert_eq!(summary.records, 0);
    }

    #[test]
    fn test_failure_keeps_written_records() {
        let transport = MockTransport::new()
            .respond(200, page_html(&[("kept", 1)]))
            .respond(401, r#"{"detail": {"error": "invalid token"}}"#);

        let mut out = Vec::new();
        let err = run_extractor(&Config::default(), &transport, &mut out).unwrap_err();

        assert!(matches!(err, AppError::Api { page: 2, .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "kept\nrating: 1/5 stars\n-------------\n"
        );
    }

    #[test]
    fn test_invalid_selector_fails_before_fetching() {
        let mut config = Config::default();
        config.selectors.block_selector = "[[".to_string();
        let transport = MockTransport::new().respond(200, page_html(&[("a", 1)]));

        let err = run_extractor(&config, &transport, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::Selector { .. }));
        assert!(transport.requested_pages().is_empty());
    }
}
