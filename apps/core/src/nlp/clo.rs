//! Course Learning Outcome generation.
//!
//! Keywords are grouped five at a time; each group is bound to a random
//! action verb and sentence template and tagged with a weighted random
//! educational domain. Randomness comes from the caller so a seeded
//! generator reproduces the same outcomes.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Keywords bound to a single CLO
pub const KEYWORDS_PER_CLO: usize = 5;

/// Supporting text used when a group has a single keyword
pub const RELATED_CONCEPTS: &str = "related concepts";

/// Educational domain of a learning outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Cognitive,
    Affective,
    Psychomotor,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Cognitive, Domain::Affective, Domain::Psychomotor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Cognitive => "cognitive",
            Domain::Affective => "affective",
            Domain::Psychomotor => "psychomotor",
        }
    }

    /// Relative selection weight
    pub fn weight(&self) -> f64 {
        match self {
            Domain::Cognitive => 0.90,
            Domain::Affective => 0.05,
            Domain::Psychomotor => 0.05,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verb family an action verb was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl TaxonomyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomyLevel::Remember => "remember",
            TaxonomyLevel::Understand => "understand",
            TaxonomyLevel::Apply => "apply",
            TaxonomyLevel::Analyze => "analyze",
            TaxonomyLevel::Evaluate => "evaluate",
            TaxonomyLevel::Create => "create",
        }
    }
}

impl fmt::Display for TaxonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Some verbs appear in several families; every entry is an equally likely draw.
const VERB_FAMILIES: &[(TaxonomyLevel, &[&str])] = &[
    (
        TaxonomyLevel::Remember,
        &[
            "define", "describe", "identify", "know", "label", "list", "match", "name", "outline",
            "recall", "recognize", "select", "state", "memorize", "repeat", "record", "relate",
            "reproduce", "retrieve",
        ],
    ),
    (
        TaxonomyLevel::Understand,
        &[
            "comprehend", "convert", "defend", "distinguish", "estimate", "explain", "extend",
            "generalize", "give examples", "infer", "interpret", "paraphrase", "predict",
            "rewrite", "summarize", "translate", "classify", "discuss", "illustrate", "recognize",
            "report", "express", "locate",
        ],
    ),
    (
        TaxonomyLevel::Apply,
        &[
            "apply", "change", "compute", "construct", "demonstrate", "discover", "manipulate",
            "modify", "operate", "predict", "prepare", "produce", "relate", "show", "solve", "use",
            "implement", "execute", "complete", "examine", "classify", "experiment", "calculate",
            "illustrate", "practice",
        ],
    ),
    (
        TaxonomyLevel::Analyze,
        &[
            "analyze", "break down", "compare", "contrast", "diagram", "deconstruct",
            "differentiate", "discriminate", "distinguish", "identify", "illustrate", "infer",
            "outline", "relate", "select", "separate", "categorize", "criticize", "experiment",
            "question", "test", "examine", "inspect", "debate",
        ],
    ),
    (
        TaxonomyLevel::Evaluate,
        &[
            "appraise", "argue", "assess", "attach", "choose", "compare", "defend", "estimate",
            "evaluate", "judge", "predict", "rate", "select", "support", "value", "critique",
            "justify", "measure", "recommend", "review", "score", "coordinate", "prioritize",
            "monitor", "verify",
        ],
    ),
    (
        TaxonomyLevel::Create,
        &[
            "assemble", "construct", "create", "design", "develop", "formulate", "generate",
            "hypothesize", "invent", "make", "originate", "plan", "produce", "write", "compose",
            "devise", "forecast", "organize", "propose", "set up", "synthesize", "compile",
            "author", "investigate",
        ],
    ),
];

const CLO_TEMPLATES: [&str; 12] = [
    "Upon successful completion of this course, students will be able to {verb} {main_keyword} and related concepts such as {supporting_keywords}.",
    "After completing this course, students will be able to {verb} {main_keyword} including {supporting_keywords}.",
    "Students will be able to {verb} {main_keyword} and {supporting_keywords} upon completion of this course.",
    "Upon successful completion of this course, students will be able to {verb} the principles of {main_keyword} in relation to {supporting_keywords}.",
    "After completing this course, students will be able to {verb} how {main_keyword} relates to {supporting_keywords}.",
    "Students will be able to {verb} the concepts of {main_keyword} and {supporting_keywords} upon completion of this course.",
    "Upon successful completion of this course, students will be able to {verb} {main_keyword} techniques to solve problems related to {supporting_keywords}.",
    "After completing this course, students will be able to {verb} {main_keyword} in various contexts involving {supporting_keywords}.",
    "Students will be able to {verb} {main_keyword} principles to address challenges in {supporting_keywords}.",
    "Upon successful completion of this course, students will be able to {verb} {main_keyword} systems in terms of {supporting_keywords}.",
    "After completing this course, students will be able to {verb} the relationships between {main_keyword} and {supporting_keywords}.",
    "Students will be able to {verb} {main_keyword} components and their connections to {supporting_keywords}.",
];

static DOMAIN_WEIGHTS: LazyLock<WeightedIndex<f64>> = LazyLock::new(|| {
    WeightedIndex::new(Domain::ALL.iter().map(Domain::weight)).expect("Invalid domain weights")
});

/// A generated Course Learning Outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clo {
    /// The formatted outcome statement
    pub statement: String,
    pub action_verb: String,
    pub domain: Domain,
    /// Family the action verb was drawn from
    pub taxonomy_level: TaxonomyLevel,
    /// The keyword group that produced this outcome (never empty)
    pub keywords: Vec<String>,
}

impl Clo {
    pub fn main_keyword(&self) -> &str {
        self.keywords.first().map(String::as_str).unwrap_or_default()
    }

    pub fn supporting_keywords(&self) -> String {
        supporting_text(&self.keywords)
    }
}

fn supporting_text<S: AsRef<str>>(group: &[S]) -> String {
    if group.len() > 1 {
        group[1..]
            .iter()
            .map(AsRef::<str>::as_ref)
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        RELATED_CONCEPTS.to_string()
    }
}

/// Substitute the template placeholders in a single pass.
/// Substituted values are never rescanned, so braces inside a keyword stay literal.
fn fill_template(template: &str, verb: &str, main_keyword: &str, supporting: &str) -> String {
    let mut out = String::with_capacity(template.len() + main_keyword.len() + supporting.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        match &tail[1..close] {
            "verb" => out.push_str(verb),
            "main_keyword" => out.push_str(main_keyword),
            "supporting_keywords" => out.push_str(supporting),
            _ => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Total number of verb entries across all families
pub fn action_verb_count() -> usize {
    VERB_FAMILIES.iter().map(|(_, verbs)| verbs.len()).sum()
}

/// Template-driven CLO generator
#[derive(Debug, Clone, Default)]
pub struct CloGenerator;

impl CloGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draw one verb uniformly over every family entry
    fn select_action_verb<R: Rng>(&self, rng: &mut R) -> (&'static str, TaxonomyLevel) {
        let mut index = rng.gen_range(0..action_verb_count());
        for (level, verbs) in VERB_FAMILIES {
            if index < verbs.len() {
                return (verbs[index], *level);
            }
            index -= verbs.len();
        }
        // Unreachable: index < total entries
        (VERB_FAMILIES[0].1[0], VERB_FAMILIES[0].0)
    }

    fn select_template<R: Rng>(&self, rng: &mut R) -> &'static str {
        CLO_TEMPLATES.choose(rng).copied().unwrap_or(CLO_TEMPLATES[0])
    }

    fn select_domain<R: Rng>(&self, rng: &mut R) -> Domain {
        Domain::ALL[DOMAIN_WEIGHTS.sample(rng)]
    }

    /// Generate up to `num_clos` outcomes from consecutive groups of five keywords
    pub fn generate_clos<S, R>(&self, keywords: &[S], num_clos: usize, rng: &mut R) -> Vec<Clo>
    where
        S: AsRef<str>,
        R: Rng,
    {
        let considered = keywords
            .len()
            .min(num_clos.saturating_mul(KEYWORDS_PER_CLO));

        let clos: Vec<Clo> = keywords[..considered]
            .chunks(KEYWORDS_PER_CLO)
            .take(num_clos)
            .map(|group| {
                let (verb, taxonomy_level) = self.select_action_verb(rng);
                let template = self.select_template(rng);
                let statement = fill_template(
                    template,
                    verb,
                    group[0].as_ref(),
                    &supporting_text(group),
                );

                Clo {
                    statement,
                    action_verb: verb.to_string(),
                    domain: self.select_domain(rng),
                    taxonomy_level,
                    keywords: group
                        .iter()
                        .map(|k| AsRef::<str>::as_ref(k).to_string())
                        .collect(),
                }
            })
            .collect();

        debug!(
            "Generated {} CLOs from {} keywords (requested {})",
            clos.len(),
            keywords.len(),
            num_clos
        );
        clos
    }
}
