//! # NLP Module
//!
//! Frequency-based keyword extraction and templated outcome generation.
//!
//! ## Components
//! - `resources`: Stopword sets, built once at startup
//! - `normalizer`: Lowercasing, punctuation/digit stripping
//! - `tokenizer`: Sentence and word splitting with stopword removal
//! - `keywords`: Frequency ranking
//! - `clo`: Course Learning Outcome templating
//! - `skills`: Skill statements from leftover keywords
//! - `report`: Output data structures
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod clo;
pub mod keywords;
pub mod normalizer;
pub mod report;
pub mod resources;
pub mod skills;
pub mod tokenizer;

pub use analyzer::CourseAnalyzer;
pub use clo::{Clo, CloGenerator, Domain, TaxonomyLevel};
pub use keywords::{Keyword, KeywordExtractor};
pub use normalizer::preprocess;
pub use report::{CourseReport, DomainDistribution, ProcessedText, TextStatistics};
pub use resources::LanguageResources;
pub use skills::extract_skills;
pub use tokenizer::{Tokenizer, Tokens};
