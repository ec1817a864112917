//! Turning free-text job postings into structured requirements

use crate::error::{ResumeIntelError, Result};
use crate::processing::structure::ExperienceLevel;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Raw job posting as received from the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub position: String,
    pub company: String,
    pub location: String,
    pub requirements: String,
}

/// Structured requirements extracted from a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub position: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub experience_required: ExperienceLevel,
    pub category: String,
}

/// Skills worth scanning job postings for. Postings are short and noisy, so
/// this is a focused list rather than the whole taxonomy.
const JOB_SKILL_KEYWORDS: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust",
    "react", "angular", "vue", "node.js", "express", "django", "flask",
    "sql", "mysql", "postgresql", "mongodb", "redis",
    "aws", "azure", "gcp", "docker", "kubernetes", "git",
    "machine learning", "deep learning", "data science", "ai",
    "tableau", "power bi", "excel", "statistics",
    "project management", "agile", "scrum", "kanban",
];

const SENIOR_MARKERS: &[&str] = &[
    "senior", "lead", "principal", "architect", "5+ years", "7+ years",
    "10+ years", "experienced", "team lead", "technical lead",
];

const JUNIOR_MARKERS: &[&str] = &[
    "junior", "entry level", "fresh graduate", "new grad", "0-2 years",
    "1-2 years", "trainee", "intern", "beginner",
];

pub struct RequirementExtractor {
    skill_patterns: Vec<(&'static str, Regex)>,
    category_patterns: Vec<(&'static str, Vec<Regex>)>,
}

impl RequirementExtractor {
    pub fn new() -> Self {
        let skill_patterns = JOB_SKILL_KEYWORDS
            .iter()
            .map(|skill| {
                let pattern = format!(r"\b{}\b", regex::escape(skill));
                (*skill, Regex::new(&pattern).expect("Invalid skill keyword regex"))
            })
            .collect();

        let category_patterns = vec![
            (
                "programming",
                compile_all(&[
                    r"python\s+developer", r"java\s+developer", r"javascript\s+developer",
                    r"software\s+engineer", r"web\s+developer", r"full\s+stack",
                    r"frontend\s+developer", r"backend\s+developer",
                    r"programming", r"coding", r"development",
                ]),
            ),
            (
                "data_science",
                compile_all(&[
                    r"data\s+scientist", r"data\s+analyst", r"machine\s+learning",
                    r"artificial\s+intelligence", r"big\s+data", r"business\s+intelligence",
                    r"statistics", r"data\s+analysis", r"predictive\s+modeling",
                ]),
            ),
            (
                "design",
                compile_all(&[
                    r"graphic\s+designer", r"ui\s+designer", r"ux\s+designer",
                    r"web\s+designer", r"creative\s+director", r"visual\s+designer",
                    r"brand\s+designer", r"digital\s+designer",
                ]),
            ),
            (
                "marketing",
                compile_all(&[
                    r"digital\s+marketing", r"content\s+marketing", r"social\s+media",
                    r"seo\s+specialist", r"growth\s+hacker", r"brand\s+manager",
                    r"marketing\s+manager", r"performance\s+marketing",
                ]),
            ),
            (
                "management",
                compile_all(&[
                    r"project\s+manager", r"product\s+manager", r"team\s+lead",
                    r"scrum\s+master", r"operations\s+manager", r"general\s+manager",
                    r"branch\s+manager", r"regional\s+manager",
                ]),
            ),
        ];

        Self {
            skill_patterns,
            category_patterns,
        }
    }

    /// Extract structured requirements from a posting. A posting whose text
    /// fields are all empty cannot be analyzed and is rejected.
    pub fn extract(&self, posting: &JobPosting) -> Result<JobRequirement> {
        let combined = [
            posting.position.as_str(),
            posting.company.as_str(),
            posting.location.as_str(),
            posting.requirements.as_str(),
        ]
        .join(" ");

        if combined.trim().is_empty() {
            return Err(ResumeIntelError::JobAnalysis(
                "job posting has no analyzable text".to_string(),
            ));
        }

        let text_lower = combined.to_lowercase();

        let required_skills: Vec<String> = self
            .skill_patterns
            .iter()
            .filter(|(_, pattern)| pattern.is_match(&text_lower))
            .map(|(skill, _)| skill.to_string())
            .collect();

        Ok(JobRequirement {
            position: posting.position.clone(),
            company: posting.company.clone(),
            location: posting.location.clone(),
            required_skills,
            experience_required: experience_required(&text_lower),
            category: self.categorize(&text_lower).to_string(),
        })
    }

    /// First category whose patterns match, in declaration order.
    fn categorize(&self, text_lower: &str) -> &'static str {
        self.category_patterns
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(text_lower)))
            .map(|(name, _)| *name)
            .unwrap_or("other")
    }
}

impl Default for RequirementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Senior markers win over junior markers; postings that say neither default
/// to mid-level.
fn experience_required(text_lower: &str) -> ExperienceLevel {
    if SENIOR_MARKERS.iter().any(|m| text_lower.contains(m)) {
        ExperienceLevel::Senior
    } else if JUNIOR_MARKERS.iter().any(|m| text_lower.contains(m)) {
        ExperienceLevel::Junior
    } else {
        ExperienceLevel::Mid
    }
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid category regex"))
        .collect()
}
