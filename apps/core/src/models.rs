use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;

/// Default number of CLOs per request.
pub const DEFAULT_NUM_CLOS: usize = 5;
/// Default number of skills per request.
pub const DEFAULT_NUM_SKILLS: usize = 10;

/// Input to the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequest {
    /// Free-text course title (may be empty).
    pub title: String,
    /// Raw course content.
    pub content: String,
    /// Number of CLOs to generate.
    pub num_clos: usize,
    /// Number of skills to extract.
    pub num_skills: usize,
}

impl CourseRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            num_clos: DEFAULT_NUM_CLOS,
            num_skills: DEFAULT_NUM_SKILLS,
        }
    }

    pub fn with_counts(mut self, num_clos: usize, num_skills: usize) -> Self {
        self.num_clos = num_clos;
        self.num_skills = num_skills;
        self
    }
}

/// A request entered through the interactive surface, where counts are bounded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InteractiveRequest {
    pub title: String,
    /// Course content; must contain something besides whitespace.
    #[validate(length(min = 1))]
    pub content: String,
    /// Between 3 and 10 CLOs.
    #[validate(range(min = 3, max = 10))]
    pub num_clos: usize,
    /// Between 5 and 15 skills.
    #[validate(range(min = 5, max = 15))]
    pub num_skills: usize,
}

impl InteractiveRequest {
    /// Build and validate an interactive request.
    pub fn new(
        title: &str,
        content: &str,
        num_clos: usize,
        num_skills: usize,
    ) -> Result<Self> {
        let request = Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            num_clos,
            num_skills,
        };
        request.validate()?;
        Ok(request)
    }
}

impl From<InteractiveRequest> for CourseRequest {
    fn from(request: InteractiveRequest) -> Self {
        CourseRequest {
            title: request.title,
            content: request.content,
            num_clos: request.num_clos,
            num_skills: request.num_skills,
        }
    }
}
