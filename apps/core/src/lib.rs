//! clogen-core
//!
//! Generates Course Learning Outcomes (CLOs) and skill sets from course
//! content through frequency-based keyword extraction and templating.

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod nlp;
pub mod render;
pub mod text_extract;

#[cfg(test)]
mod tests;

pub use error::{AppError, Result};
