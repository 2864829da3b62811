//! Course Analyzer - Main orchestrator for the generation pipeline.
//!
//! raw text → normalized text → tokens → keywords → CLOs → skills

use chrono::Utc;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use super::clo::CloGenerator;
use super::keywords::KeywordExtractor;
use super::normalizer::preprocess;
use super::report::{CourseReport, DomainDistribution, ProcessedText, TextStatistics};
use super::resources::LanguageResources;
use super::skills::extract_skills;
use super::tokenizer::Tokenizer;
use crate::config::AppConfig;
use crate::error::Result;
use crate::models::CourseRequest;

/// Runs the full pipeline for one course
pub struct CourseAnalyzer {
    resources: LanguageResources,
    keyword_extractor: KeywordExtractor,
    clo_generator: CloGenerator,
}

impl Default for CourseAnalyzer {
    fn default() -> Self {
        Self::new(LanguageResources::english(), KeywordExtractor::default())
    }
}

impl CourseAnalyzer {
    pub fn new(resources: LanguageResources, keyword_extractor: KeywordExtractor) -> Self {
        Self {
            resources,
            keyword_extractor,
            clo_generator: CloGenerator::new(),
        }
    }

    /// Build an analyzer from configuration; fails if the stopword list cannot be loaded
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let resources = LanguageResources::from_config(config)?;
        Ok(Self::new(
            resources,
            KeywordExtractor::new(config.top_keywords),
        ))
    }

    /// Normalize, tokenize and rank keywords
    pub fn process_text(&self, text: &str) -> ProcessedText {
        let normalized = preprocess(text);
        let tokens = Tokenizer::new(&self.resources).tokenize(&normalized);
        let keywords = self.keyword_extractor.extract(&tokens.words);

        debug!(
            "Processed text: {} sentences, {} words, {} keywords",
            tokens.sentences.len(),
            tokens.words.len(),
            keywords.len()
        );

        ProcessedText {
            normalized,
            sentences: tokens.sentences,
            words: tokens.words,
            keywords,
        }
    }

    /// Analyze a course request and produce a report
    pub fn analyze<R: Rng>(&self, request: &CourseRequest, rng: &mut R) -> CourseReport {
        let start = Instant::now();

        info!(
            "Processing text (top {} keywords)...",
            self.keyword_extractor.top_n()
        );
        let processed = self.process_text(&request.content);
        let keywords = processed.keyword_strings();

        info!("Generating {} CLOs...", request.num_clos);
        let clos = self
            .clo_generator
            .generate_clos(&keywords, request.num_clos, rng);

        info!("Extracting {} skills...", request.num_skills);
        let skills = extract_skills(&keywords, &clos, request.num_skills);

        let report = CourseReport {
            id: Uuid::new_v4(),
            title: request.title.clone(),
            statistics: TextStatistics::from_processed(&processed),
            domain_distribution: DomainDistribution::from_clos(&clos),
            keywords: processed.keywords,
            clos,
            skills,
            processing_time_ms: start.elapsed().as_millis() as u64,
            created_at: Utc::now(),
        };

        info!(
            "Analysis complete: {} keywords, {} CLOs, {} skills in {}ms",
            report.keywords.len(),
            report.clos.len(),
            report.skills.len(),
            report.processing_time_ms
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_process_text() {
        let analyzer = CourseAnalyzer::default();
        let processed = analyzer.process_text("Graphs, graphs and TREES! 42 trees; graphs.");

        assert_eq!(processed.normalized, "graphs graphs and trees trees graphs");
        assert_eq!(
            processed.words,
            vec!["graphs", "graphs", "trees", "trees", "graphs"]
        );
        assert_eq!(processed.keyword_strings(), vec!["graphs", "trees"]);
        assert_eq!(processed.keywords[0].frequency, 3);
    }

    #[test]
    fn test_analyze_empty_content() {
        let analyzer = CourseAnalyzer::default();
        let request = CourseRequest::new("Empty", "");
        let report = analyzer.analyze(&request, &mut StdRng::seed_from_u64(1));

        assert!(report.keywords.is_empty());
        assert!(report.clos.is_empty());
        assert!(report.skills.is_empty());
        assert!(report.domain_distribution.is_empty());
        assert_eq!(report.statistics, TextStatistics::default());
    }

    #[test]
    fn test_top_n_from_extractor() {
        let analyzer = CourseAnalyzer::new(LanguageResources::english(), KeywordExtractor::new(2));
        let processed = analyzer.process_text("alpha beta gamma delta alpha");
        assert_eq!(processed.keyword_strings(), vec!["alpha", "beta"]);
    }
}
