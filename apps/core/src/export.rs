//! Export of analysis results.
//!
//! CSV tables (`<base>_CLOs.csv`, `<base>_Skills.csv`) and the plain-text
//! summaries written by the `generate` command.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::nlp::CourseReport;

pub const CLO_SUMMARY_FILENAME: &str = "generated_clos.txt";
pub const SKILL_SUMMARY_FILENAME: &str = "extracted_skills.txt";

/// Paths written by [`export_csv`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub clos_path: PathBuf,
    pub skills_path: PathBuf,
}

/// Paths written by [`write_text_summary`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExport {
    pub clos_path: PathBuf,
    pub skills_path: PathBuf,
}

#[derive(Debug, Serialize)]
struct CloRow<'a> {
    #[serde(rename = "CLO Number")]
    number: String,
    #[serde(rename = "CLO Statement")]
    statement: &'a str,
    #[serde(rename = "Action Verb")]
    action_verb: String,
    #[serde(rename = "Domain")]
    domain: String,
    #[serde(rename = "Keywords")]
    keywords: String,
}

#[derive(Debug, Serialize)]
struct SkillRow<'a> {
    #[serde(rename = "Skill")]
    skill: &'a str,
}

/// Uppercase the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Base file name for exports: the sanitized title, or a timestamped fallback
pub fn export_base_name(title: &str, now: DateTime<Utc>) -> String {
    let title = title.trim();
    if title.is_empty() {
        format!("course_content_{}", now.timestamp())
    } else {
        title
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}

/// Create the output directory if it does not exist yet
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        info!("Creating output directory: {:?}", dir);
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write the CLO and skill tables as CSV files
pub fn export_csv(report: &CourseReport, dir: &Path, base_name: &str) -> Result<CsvExport> {
    ensure_output_dir(dir)?;

    let clos_path = dir.join(format!("{}_CLOs.csv", base_name));
    let mut writer = csv::Writer::from_path(&clos_path)?;
    for (i, clo) in report.clos.iter().enumerate() {
        writer.serialize(CloRow {
            number: format!("CLO {}", i + 1),
            statement: &clo.statement,
            action_verb: capitalize(&clo.action_verb),
            domain: capitalize(clo.domain.as_str()),
            keywords: clo.keywords.join(", "),
        })?;
    }
    if report.clos.is_empty() {
        writer.write_record(["CLO Number", "CLO Statement", "Action Verb", "Domain", "Keywords"])?;
    }
    writer.flush()?;

    let skills_path = dir.join(format!("{}_Skills.csv", base_name));
    let mut writer = csv::Writer::from_path(&skills_path)?;
    for skill in &report.skills {
        writer.serialize(SkillRow { skill })?;
    }
    if report.skills.is_empty() {
        writer.write_record(["Skill"])?;
    }
    writer.flush()?;

    info!(
        "Results exported to {:?} and {:?}",
        clos_path, skills_path
    );
    Ok(CsvExport {
        clos_path,
        skills_path,
    })
}

/// Write `generated_clos.txt` and `extracted_skills.txt`
pub fn write_text_summary(report: &CourseReport, dir: &Path) -> Result<TextExport> {
    ensure_output_dir(dir)?;

    let clos_path = dir.join(CLO_SUMMARY_FILENAME);
    let mut file = fs::File::create(&clos_path)?;
    writeln!(file, "=== Generated Course Learning Outcomes (CLOs) ===\n")?;
    for (i, clo) in report.clos.iter().enumerate() {
        writeln!(file, "CLO {}: {}", i + 1, clo.statement)?;
        writeln!(
            file,
            "Taxonomy Level: {} | Action Verb: {}\n",
            capitalize(clo.taxonomy_level.as_str()),
            capitalize(&clo.action_verb)
        )?;
    }

    let skills_path = dir.join(SKILL_SUMMARY_FILENAME);
    let mut file = fs::File::create(&skills_path)?;
    writeln!(file, "=== Extracted Skill Sets ===\n")?;
    for skill in &report.skills {
        writeln!(file, "- {}", skill)?;
    }

    info!("Results saved to {:?}", dir);
    Ok(TextExport {
        clos_path,
        skills_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_base_name_sanitizes_title() {
        let now = Utc::now();
        assert_eq!(
            export_base_name("Intro to ML: Part 1", now),
            "Intro_to_ML__Part_1"
        );
        assert_eq!(export_base_name("  Data-Science  ", now), "Data_Science");
    }

    #[test]
    fn test_base_name_falls_back_to_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(export_base_name("   ", now), "course_content_1704164645");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cognitive"), "Cognitive");
        assert_eq!(capitalize("break down"), "Break down");
        assert_eq!(capitalize(""), "");
    }
}
