//! Test Module
//!
//! Component and workflow tests for clogen-core.
//!
//! ## Test Categories
//! - `nlp_tests`: Normalization, keyword ranking, CLO and skill generation
//! - `text_extract_tests`: TXT, PDF and DOCX extraction
//! - `export_tests`: CSV and text summary exports
//! - `integration_tests`: Full workflow integration tests

pub mod nlp_tests;
