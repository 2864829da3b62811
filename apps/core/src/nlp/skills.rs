//! Skill extraction from keywords left over after CLO generation.

use super::clo::Clo;

const SKILL_TEMPLATES: [&str; 5] = [
    "Proficiency in {}",
    "Knowledge of {}",
    "Ability to work with {}",
    "Understanding of {}",
    "Experience with {}",
];

/// Build up to `num_skills` skill statements.
///
/// Keywords not consumed by any CLO come first, in their original order. When
/// there are too few, keywords already used by CLOs pad the pool.
pub fn extract_skills<S: AsRef<str>>(keywords: &[S], clos: &[Clo], num_skills: usize) -> Vec<String> {
    let used: Vec<&str> = clos
        .iter()
        .flat_map(|clo| clo.keywords.iter().map(String::as_str))
        .collect();

    let mut pool: Vec<&str> = keywords
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|kw| !used.contains(kw))
        .collect();

    if pool.len() < num_skills {
        let missing = num_skills - pool.len();
        pool.extend(used.iter().take(missing));
    }

    pool.iter()
        .take(num_skills)
        .enumerate()
        .map(|(i, keyword)| SKILL_TEMPLATES[i % SKILL_TEMPLATES.len()].replace("{}", keyword))
        .collect()
}
