//! Scoring candidate profiles against job requirements

use crate::config::MatchingConfig;
use crate::error::Result;
use crate::matching::requirements::{JobPosting, JobRequirement, RequirementExtractor};
use crate::processing::profile::ExtractedProfile;
use crate::processing::structure::ExperienceLevel;
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Encouragement,
    Improvement,
    Development,
    SkillGap,
    Experience,
    ApplicationStrategy,
    Logistics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skills_to_highlight: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub location_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub additional_skills: Vec<String>,
    pub match_level: MatchLevel,
    pub requirements: JobRequirement,
    pub recommendations: Vec<Recommendation>,
    pub analyzed_at: DateTime<Utc>,
}

pub struct JobMatcher {
    config: MatchingConfig,
    extractor: RequirementExtractor,
}

impl JobMatcher {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            config,
            extractor: RequirementExtractor::new(),
        }
    }

    /// Full compatibility analysis for one posting.
    pub fn match_job(
        &self,
        profile: &ExtractedProfile,
        candidate_location: Option<&str>,
        posting: &JobPosting,
    ) -> Result<MatchResult> {
        let requirements = self.extractor.extract(posting)?;

        let skill_score = self.skill_score(&profile.skills, &requirements.required_skills);
        let experience_score =
            experience_score(profile.experience_level, requirements.experience_required);
        let location_score = self.location_score(candidate_location, &requirements.location);

        let overall_score = round1(
            skill_score * self.config.skill_weight
                + experience_score * self.config.experience_weight
                + location_score * self.config.location_weight,
        );

        let cv_lower: Vec<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();
        let job_lower: Vec<String> = requirements
            .required_skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        // Job-skill order drives matching/missing so results are stable.
        let matching_skills: Vec<String> = job_lower
            .iter()
            .filter(|s| cv_lower.contains(s))
            .cloned()
            .collect();
        let missing_skills: Vec<String> = job_lower
            .iter()
            .filter(|s| !cv_lower.contains(s))
            .cloned()
            .collect();
        let additional_skills: Vec<String> = cv_lower
            .iter()
            .filter(|s| !job_lower.contains(s))
            .cloned()
            .collect();

        let recommendations =
            build_recommendations(overall_score, &missing_skills, &requirements);

        Ok(MatchResult {
            overall_score,
            skill_score: round1(skill_score),
            experience_score: round1(experience_score),
            location_score: round1(location_score),
            matching_skills,
            missing_skills,
            additional_skills,
            match_level: match_level(overall_score),
            requirements,
            recommendations,
            analyzed_at: Utc::now(),
        })
    }

    /// Analyze many postings. Postings that fail are logged and skipped so
    /// one bad record never sinks the batch. Results come back sorted by
    /// overall score, ties keeping input order.
    pub fn batch_match(
        &self,
        profile: &ExtractedProfile,
        candidate_location: Option<&str>,
        postings: &[JobPosting],
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = postings
            .iter()
            .filter_map(|posting| match self.match_job(profile, candidate_location, posting) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!(
                        "skipping job '{}' at '{}': {}",
                        posting.position, posting.company, e
                    );
                    None
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results
    }

    /// Exact matches dominate; near-matches above the similarity threshold
    /// contribute a smaller share. Edge cases: nothing on either side is
    /// neutral (50), a skill-less resume scores 20, a job with no detected
    /// skill requirements scores 80.
    fn skill_score(&self, cv_skills: &[String], job_skills: &[String]) -> f64 {
        if cv_skills.is_empty() && job_skills.is_empty() {
            return 50.0;
        }
        if cv_skills.is_empty() {
            return 20.0;
        }
        if job_skills.is_empty() {
            return 80.0;
        }

        let cv_lower: Vec<String> = cv_skills.iter().map(|s| s.to_lowercase()).collect();
        let job_lower: Vec<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();

        let exact_matches = job_lower.iter().filter(|s| cv_lower.contains(s)).count();

        let mut partial_matches = 0usize;
        for cv_skill in &cv_lower {
            for job_skill in &job_lower {
                if cv_skill != job_skill
                    && strsim::sorensen_dice(cv_skill, job_skill)
                        > self.config.skill_similarity_threshold
                {
                    partial_matches += 1;
                }
            }
        }

        let exact_score = exact_matches as f64 / job_lower.len() as f64 * 100.0;
        let partial_score = partial_matches as f64 / job_lower.len() as f64 * 100.0;

        (exact_score * 0.8 + partial_score * 0.2).min(100.0)
    }

    /// Missing locations never hurt the job side; a candidate without a
    /// stated location gets the benefit of the doubt at half score.
    fn location_score(&self, candidate: Option<&str>, job_location: &str) -> f64 {
        let candidate = candidate.map(str::trim).filter(|s| !s.is_empty());
        let job_location = job_location.trim();

        if job_location.is_empty() {
            return 100.0;
        }
        let Some(candidate) = candidate else {
            return 50.0;
        };

        let candidate_lower = candidate.to_lowercase();
        let job_lower = job_location.to_lowercase();
        if candidate_lower == job_lower {
            return 100.0;
        }

        // Token-level fuzzy comparison catches same-city spellings.
        for cv_part in candidate_lower.split_whitespace() {
            for job_part in job_lower.split_whitespace() {
                if cv_part.len() > 3
                    && job_part.len() > 3
                    && strsim::sorensen_dice(cv_part, job_part)
                        > self.config.location_similarity_threshold
                {
                    return 80.0;
                }
            }
        }

        60.0
    }
}

/// Compatibility matrix between a candidate's level and the level a job
/// asks for. Overqualification costs less than underqualification.
fn experience_score(cv_level: ExperienceLevel, job_level: ExperienceLevel) -> f64 {
    use ExperienceLevel::{Executive, Junior, Mid, Senior, Unknown};

    if cv_level == Unknown || job_level == Unknown {
        return 70.0;
    }

    match (cv_level, job_level) {
        (Junior, Junior) => 90.0,
        (Junior, Mid) => 70.0,
        (Junior, Senior) => 40.0,
        (Mid, Junior) => 95.0,
        (Mid, Mid) => 85.0,
        (Mid, Senior) => 70.0,
        (Senior, Junior) => 100.0,
        (Senior, Mid) => 95.0,
        (Senior, Senior) => 85.0,
        (Executive, Junior) => 100.0,
        (Executive, Mid) => 100.0,
        (Executive, Senior) => 95.0,
        // Jobs never require executive level; same level is a strong match,
        // anything else a weak one.
        (a, b) if a == b => 90.0,
        _ => 60.0,
    }
}

fn match_level(score: f64) -> MatchLevel {
    if score >= 80.0 {
        MatchLevel::Excellent
    } else if score >= 65.0 {
        MatchLevel::Good
    } else if score >= 50.0 {
        MatchLevel::Fair
    } else {
        MatchLevel::Poor
    }
}

fn build_recommendations(
    overall_score: f64,
    missing_skills: &[String],
    requirements: &JobRequirement,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if overall_score >= 80.0 {
        recs.push(Recommendation {
            kind: RecommendationKind::Encouragement,
            priority: Priority::High,
            title: "Strong Match!".to_string(),
            description: "You have excellent qualifications for this position. Consider \
                          highlighting your matching skills in your application."
                .to_string(),
            skills_to_highlight: Vec::new(),
        });
    } else if overall_score >= 60.0 {
        recs.push(Recommendation {
            kind: RecommendationKind::Improvement,
            priority: Priority::Medium,
            title: "Good Match with Room for Improvement".to_string(),
            description: "You meet many of the requirements. Focus on your strong points \
                          and address any skill gaps in your application."
                .to_string(),
            skills_to_highlight: Vec::new(),
        });
    } else {
        recs.push(Recommendation {
            kind: RecommendationKind::Development,
            priority: Priority::Medium,
            title: "Consider Skill Development".to_string(),
            description: "This role may require additional skills. Consider what you can \
                          learn quickly or how to emphasize transferable skills."
                .to_string(),
            skills_to_highlight: Vec::new(),
        });
    }

    if !missing_skills.is_empty() {
        let highlight: Vec<String> = missing_skills.iter().take(3).cloned().collect();
        recs.push(Recommendation {
            kind: RecommendationKind::SkillGap,
            priority: Priority::High,
            title: "Address Skill Gaps".to_string(),
            description: format!(
                "Consider highlighting these relevant skills you might have: {}. If you \
                 lack them, consider quick learning or emphasizing related experience.",
                highlight
                    .iter()
                    .take(2)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            skills_to_highlight: highlight,
        });
    }

    match requirements.experience_required {
        ExperienceLevel::Senior => recs.push(Recommendation {
            kind: RecommendationKind::Experience,
            priority: Priority::Medium,
            title: "Emphasize Leadership Experience".to_string(),
            description: "This role requires senior-level experience. Highlight any \
                          leadership roles, mentoring, or project management experience."
                .to_string(),
            skills_to_highlight: Vec::new(),
        }),
        ExperienceLevel::Junior => recs.push(Recommendation {
            kind: RecommendationKind::Experience,
            priority: Priority::Medium,
            title: "Highlight Growth Potential".to_string(),
            description: "This entry-level role values learning ability. Emphasize your \
                          enthusiasm, quick learning, and any relevant projects or coursework."
                .to_string(),
            skills_to_highlight: Vec::new(),
        }),
        _ => {}
    }

    if overall_score >= 70.0 {
        recs.push(Recommendation {
            kind: RecommendationKind::ApplicationStrategy,
            priority: Priority::High,
            title: "Strong Application Strategy".to_string(),
            description: "Tailor your cover letter to emphasize your strongest matching \
                          qualifications. Prepare specific examples of how you've used \
                          these skills."
                .to_string(),
            skills_to_highlight: Vec::new(),
        });
    }

    if !requirements.location.trim().is_empty() {
        recs.push(Recommendation {
            kind: RecommendationKind::Logistics,
            priority: Priority::Low,
            title: "Location Considerations".to_string(),
            description: format!(
                "Consider the location requirement ({}) and be prepared to discuss \
                 relocation or remote work preferences.",
                requirements.location
            ),
            skills_to_highlight: Vec::new(),
        });
    }

    recs
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
