//! Terminal rendering of a course report.

use crate::export::capitalize;
use crate::nlp::{CourseReport, DomainDistribution};

/// Width of the longest bar in the domain chart
const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Render the domain distribution as a horizontal bar chart
pub fn render_domain_chart(distribution: &DomainDistribution) -> String {
    let max = distribution.max_count();
    if max == 0 {
        return "(no CLOs generated)\n".to_string();
    }

    let label_width = distribution
        .entries()
        .iter()
        .map(|e| e.domain.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in distribution.entries() {
        let len = (entry.count * BAR_WIDTH).div_ceil(max);
        out.push_str(&format!(
            "{:<width$} | {} {}\n",
            capitalize(entry.domain.as_str()),
            BAR_CHAR.to_string().repeat(len),
            entry.count,
            width = label_width
        ));
    }
    out
}

/// Render the full report: statistics, keywords, CLOs, skills and domain chart
pub fn render_report(report: &CourseReport) -> String {
    let mut out = String::new();
    let stats = &report.statistics;

    if !report.title.is_empty() {
        out.push_str(&format!("# {}\n\n", report.title));
    }

    out.push_str("=== Text Analysis ===\n");
    out.push_str(&format!("Total Words:        {}\n", stats.total_words));
    out.push_str(&format!("Unique Words:       {}\n", stats.unique_words));
    out.push_str(&format!("Total Sentences:    {}\n", stats.total_sentences));
    out.push_str(&format!(
        "Keywords Extracted: {}\n\n",
        stats.keywords_extracted
    ));

    out.push_str("=== Key Concepts Identified ===\n");
    out.push_str(&report.keyword_strings().join(", "));
    out.push_str("\n\n");

    out.push_str("=== Generated Course Learning Outcomes (CLOs) ===\n");
    for (i, clo) in report.clos.iter().enumerate() {
        out.push_str(&format!("CLO {}: {}\n", i + 1, clo.statement));
        out.push_str(&format!(
            "Action Verb: {} | Domain: {} | Taxonomy Level: {}\n\n",
            capitalize(&clo.action_verb),
            capitalize(clo.domain.as_str()),
            capitalize(clo.taxonomy_level.as_str())
        ));
    }

    out.push_str("=== Extracted Skill Sets ===\n");
    for skill in &report.skills {
        out.push_str(&format!("- {}\n", skill));
    }

    out.push_str(&format!(
        "\n=== Educational Domain Distribution ({} CLOs) ===\n",
        report.domain_distribution.total()
    ));
    out.push_str(&render_domain_chart(&report.domain_distribution));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{Clo, Domain, TaxonomyLevel, TextStatistics};

    fn clo(domain: Domain) -> Clo {
        Clo {
            statement: "Students will be able to apply graphs and trees upon completion of this course."
                .to_string(),
            action_verb: "apply".to_string(),
            domain,
            taxonomy_level: TaxonomyLevel::Apply,
            keywords: vec!["graphs".to_string(), "trees".to_string()],
        }
    }

    #[test]
    fn test_chart_scales_to_max() {
        let clos = vec![
            clo(Domain::Cognitive),
            clo(Domain::Cognitive),
            clo(Domain::Cognitive),
            clo(Domain::Cognitive),
            clo(Domain::Affective),
        ];
        let chart = render_domain_chart(&DomainDistribution::from_clos(&clos));
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Cognitive"));
        assert_eq!(lines[0].matches(BAR_CHAR).count(), BAR_WIDTH);
        assert!(lines[0].ends_with(" 4"));
        assert!(lines[1].starts_with("Affective"));
        assert_eq!(lines[1].matches(BAR_CHAR).count(), BAR_WIDTH / 4);
        assert!(lines[1].ends_with(" 1"));
    }

    #[test]
    fn test_report_sections() {
        let clos = vec![clo(Domain::Cognitive), clo(Domain::Psychomotor)];
        let report = CourseReport {
            id: uuid::Uuid::new_v4(),
            title: "Graphs".to_string(),
            statistics: TextStatistics::default(),
            keywords: Vec::new(),
            domain_distribution: DomainDistribution::from_clos(&clos),
            clos,
            skills: vec!["Proficiency in graphs".to_string()],
            processing_time_ms: 0,
            created_at: chrono::Utc::now(),
        };
        let text = render_report(&report);

        assert!(text.starts_with("# Graphs\n\n=== Text Analysis ===\n"));
        assert!(text.contains("CLO 2: Students will be able to apply graphs"));
        assert!(text.contains("Action Verb: Apply | Domain: Psychomotor | Taxonomy Level: Apply\n"));
        assert!(text.contains("- Proficiency in graphs\n"));
        assert!(text.contains("=== Educational Domain Distribution (2 CLOs) ===\n"));
        assert!(text.ends_with(" 1\n"));
    }

    #[test]
    fn test_empty_chart() {
        let chart = render_domain_chart(&DomainDistribution::default());
        assert_eq!(chart, "(no CLOs generated)\n");
    }
}
