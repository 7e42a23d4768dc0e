// src/lib.rs

//! Testimonials extractor library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod transport;
pub mod utils;
