//! Course Report - Output structure of a pipeline run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::clo::{Clo, Domain};
use super::keywords::Keyword;
use crate::error::Result;

/// Output of the document-processing half of the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedText {
    /// Normalized text
    pub normalized: String,
    pub sentences: Vec<String>,
    /// Content words, stopwords removed
    pub words: Vec<String>,
    /// Ranked keywords
    pub keywords: Vec<Keyword>,
}

impl ProcessedText {
    /// Keyword strings in rank order
    pub fn keyword_strings(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.word.clone()).collect()
    }
}

/// Summary statistics shown for the analyzed text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub total_words: usize,
    pub unique_words: usize,
    pub total_sentences: usize,
    pub keywords_extracted: usize,
}

impl TextStatistics {
    pub fn from_processed(processed: &ProcessedText) -> Self {
        let unique: HashSet<&str> = processed.words.iter().map(String::as_str).collect();
        Self {
            total_words: processed.words.len(),
            unique_words: unique.len(),
            total_sentences: processed.sentences.len(),
            keywords_extracted: processed.keywords.len(),
        }
    }
}

/// Number of CLOs tagged with a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: Domain,
    pub count: usize,
}

/// CLO count per domain, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainDistribution(Vec<DomainCount>);

impl DomainDistribution {
    pub fn from_clos(clos: &[Clo]) -> Self {
        let mut counts: Vec<DomainCount> = Vec::new();
        for clo in clos {
            match counts.iter_mut().find(|c| c.domain == clo.domain) {
                Some(entry) => entry.count += 1,
                None => counts.push(DomainCount {
                    domain: clo.domain,
                    count: 1,
                }),
            }
        }
        Self(counts)
    }

    pub fn entries(&self) -> &[DomainCount] {
        &self.0
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|c| c.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.0.iter().map(|c| c.count).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Complete result of analyzing one course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseReport {
    /// Unique report identifier
    pub id: Uuid,

    /// Course title as entered
    pub title: String,

    pub statistics: TextStatistics,

    /// Ranked keywords with frequencies
    pub keywords: Vec<Keyword>,

    pub clos: Vec<Clo>,

    pub skills: Vec<String>,

    pub domain_distribution: DomainDistribution,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub created_at: DateTime<Utc>,
}

impl CourseReport {
    pub fn keyword_strings(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.word.as_str()).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
