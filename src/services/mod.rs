//! Service layer for the extractor.
//!
//! This module contains the business logic for:
//! - Paginated extraction (`Extractor`)
//! - Testimonial parsing (`TestimonialParser`)

mod extractor;
mod parser;

pub use extractor::{Extractor, Finish, PaginationState, extract_all};
pub use parser::TestimonialParser;
