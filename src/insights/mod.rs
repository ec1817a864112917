//! Higher-level career insights
//!
//! Aggregates the pipeline outputs into prioritized, human-readable
//! insights: career stage, skill gaps against applied-for jobs, market
//! trends, and an overall success estimate. Generation never fails
//! outright; an internal error degrades to a single error-typed insight.

use crate::error::{ResumeIntelError, Result};
use crate::matching::requirements::JobRequirement;
use crate::processing::profile::ExtractedProfile;
use crate::processing::scorer::ScoreBreakdown;
use crate::processing::structure::ExperienceLevel;
use crate::taxonomy::SkillTaxonomy;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    CareerStageAssessment,
    ProgressionTimeline,
    SkillDevelopmentPriority,
    CriticalSkillGaps,
    LearningRecommendations,
    SkillsStrength,
    MarketTrend,
    EmergingOpportunity,
    SalaryGrowth,
    SuccessPrediction,
    ImprovementAreas,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub content: String,
    pub confidence: f64,
    /// 1 (lowest) to 5 (highest).
    pub priority: u8,
    pub action_required: bool,
    pub action_text: Option<String>,
    pub related_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CareerStage {
    Entry,
    Mid,
    Senior,
}

impl CareerStage {
    fn label(self) -> &'static str {
        match self {
            CareerStage::Entry => "entry level",
            CareerStage::Mid => "mid level",
            CareerStage::Senior => "senior level",
        }
    }

    fn key_skills(self) -> &'static [&'static str] {
        match self {
            CareerStage::Entry => &[
                "technical fundamentals",
                "learning agility",
                "communication",
                "team collaboration",
            ],
            CareerStage::Mid => &[
                "technical expertise",
                "project management",
                "mentoring",
                "problem solving",
            ],
            CareerStage::Senior => &[
                "leadership",
                "strategic thinking",
                "technical architecture",
                "stakeholder management",
            ],
        }
    }
}

/// Progression ladders per field; only fields with a meaningful ladder get
/// timeline insights.
struct CareerPattern {
    field: &'static str,
    progression: &'static [&'static str],
    key_skills: &'static [&'static str],
}

const CAREER_PATTERNS: &[CareerPattern] = &[
    CareerPattern {
        field: "technology",
        progression: &[
            "Junior Developer",
            "Mid Developer",
            "Senior Developer",
            "Tech Lead",
            "Engineering Manager",
        ],
        key_skills: &[
            "programming",
            "problem solving",
            "system design",
            "leadership",
            "communication",
        ],
    },
    CareerPattern {
        field: "data_science",
        progression: &[
            "Data Analyst",
            "Data Scientist",
            "Senior Data Scientist",
            "Lead Data Scientist",
            "Head of Data",
        ],
        key_skills: &[
            "statistics",
            "programming",
            "machine learning",
            "business acumen",
            "visualization",
        ],
    },
    CareerPattern {
        field: "marketing",
        progression: &[
            "Marketing Coordinator",
            "Marketing Specialist",
            "Marketing Manager",
            "Senior Marketing Manager",
            "Marketing Director",
        ],
        key_skills: &[
            "digital marketing",
            "analytics",
            "content creation",
            "campaign management",
            "brand strategy",
        ],
    },
];

pub struct InsightGenerator {
    taxonomy: Arc<SkillTaxonomy>,
}

impl InsightGenerator {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Produce all insights for a profile, sorted by priority then
    /// confidence, both descending. Never returns an error: failures
    /// degrade to one error-typed insight.
    pub fn generate(
        &self,
        profile: &ExtractedProfile,
        scores: &ScoreBreakdown,
        job_history: &[JobRequirement],
    ) -> Vec<Insight> {
        let mut insights = match self.generate_inner(profile, scores, job_history) {
            Ok(insights) => insights,
            Err(e) => {
                warn!("insight generation failed: {}", e);
                return vec![error_insight(&e.to_string())];
            }
        };

        insights.sort_by(|a, b| {
            b.priority.cmp(&a.priority).then(
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
        });
        insights
    }

    fn generate_inner(
        &self,
        profile: &ExtractedProfile,
        scores: &ScoreBreakdown,
        job_history: &[JobRequirement],
    ) -> Result<Vec<Insight>> {
        // Non-finite scores cannot be banded into a success probability.
        if !scores.ats_score.is_finite() || !scores.confidence_score.is_finite() {
            return Err(ResumeIntelError::InsightGeneration(
                "score breakdown contains non-finite values".to_string(),
            ));
        }

        let mut insights = Vec::new();
        insights.extend(self.career_insights(profile));
        insights.extend(self.skill_gap_insights(profile, job_history));
        insights.extend(self.market_trend_insights());
        insights.extend(self.success_insights(profile, scores));
        Ok(insights)
    }

    fn career_insights(&self, profile: &ExtractedProfile) -> Vec<Insight> {
        let stage = career_stage(profile.experience_level, profile.years_experience);
        let field = career_field(&profile.skills);
        let pattern = CAREER_PATTERNS.iter().find(|p| p.field == field);

        let mut insights = vec![Insight {
            kind: InsightKind::CareerStageAssessment,
            title: "Current Career Stage Analysis".to_string(),
            content: format!(
                "You appear to be at the {} stage in the {} field. Based on your \
                 experience and skills, you're well-positioned for the next level in \
                 your career progression.",
                stage.label(),
                field.replace('_', " ")
            ),
            confidence: 0.8,
            priority: 3,
            action_required: false,
            action_text: None,
            related_skills: stage.key_skills().iter().map(|s| s.to_string()).collect(),
        }];

        if let Some(pattern) = pattern {
            let stage_index = match stage {
                CareerStage::Entry => 0,
                CareerStage::Mid => 2,
                CareerStage::Senior => 3,
            };
            if let Some(next_level) = pattern.progression.get(stage_index) {
                insights.push(Insight {
                    kind: InsightKind::ProgressionTimeline,
                    title: "Career Progression Timeline".to_string(),
                    content: format!(
                        "Based on typical career progression in {}, you could advance to \
                         {} within 2-3 years with consistent skill development and \
                         strategic career moves.",
                        pattern.field.replace('_', " "),
                        next_level
                    ),
                    confidence: 0.7,
                    priority: 4,
                    action_required: true,
                    action_text: Some(format!(
                        "Focus on developing skills required for {} role",
                        next_level
                    )),
                    related_skills: Vec::new(),
                });
            }

            let priorities: Vec<String> =
                pattern.key_skills.iter().map(|s| s.to_string()).collect();
            insights.push(Insight {
                kind: InsightKind::SkillDevelopmentPriority,
                title: "Priority Skills for Career Growth".to_string(),
                content: format!(
                    "To accelerate your career progression, focus on developing these \
                     high-value skills: {}. These skills are currently in high demand \
                     in the {} industry.",
                    priorities[..3.min(priorities.len())].join(", "),
                    pattern.field.replace('_', " ")
                ),
                confidence: 0.85,
                priority: 5,
                action_required: true,
                action_text: Some("Create a learning plan for priority skills".to_string()),
                related_skills: priorities,
            });
        }

        insights
    }

    fn skill_gap_insights(
        &self,
        profile: &ExtractedProfile,
        job_history: &[JobRequirement],
    ) -> Vec<Insight> {
        let mut insights = Vec::new();

        let owned: Vec<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();
        let mut demanded: Vec<String> = Vec::new();
        for job in job_history {
            for skill in &job.required_skills {
                let lower = skill.to_lowercase();
                if !demanded.contains(&lower) {
                    demanded.push(lower);
                }
            }
        }

        let gaps: Vec<String> = demanded
            .iter()
            .filter(|s| !owned.contains(s))
            .cloned()
            .collect();

        if !gaps.is_empty() {
            let high_demand = self.taxonomy.high_demand_skills();
            let critical: Vec<String> = {
                let in_demand: Vec<String> = gaps
                    .iter()
                    .filter(|g| high_demand.contains(&g.as_str()))
                    .cloned()
                    .collect();
                if in_demand.is_empty() {
                    gaps.iter().take(3).cloned().collect()
                } else {
                    in_demand
                }
            };

            insights.push(Insight {
                kind: InsightKind::CriticalSkillGaps,
                title: "Critical Skill Gaps Identified".to_string(),
                content: format!(
                    "Your applications reveal gaps in these high-demand skills: {}. \
                     Addressing these gaps could significantly improve your job match \
                     scores.",
                    critical[..3.min(critical.len())].join(", ")
                ),
                confidence: 0.9,
                priority: 5,
                action_required: true,
                action_text: Some("Prioritize learning these skills".to_string()),
                related_skills: critical,
            });

            insights.push(Insight {
                kind: InsightKind::LearningRecommendations,
                title: "Structured Learning Path".to_string(),
                content: "Create a structured learning plan for your skill gaps. Start \
                          with fundamentals and progress to advanced concepts. Consider \
                          online courses, certifications, and hands-on projects."
                    .to_string(),
                confidence: 0.8,
                priority: 4,
                action_required: true,
                action_text: Some("Create a 3-month learning plan".to_string()),
                related_skills: Vec::new(),
            });
        }

        if !owned.is_empty() && !demanded.is_empty() {
            let matches = demanded.iter().filter(|s| owned.contains(s)).count();
            let strength = matches as f64 / demanded.len() as f64 * 100.0;
            if strength < 50.0 {
                insights.push(Insight {
                    kind: InsightKind::SkillsStrength,
                    title: "Skills Portfolio Assessment".to_string(),
                    content: format!(
                        "Your current skills portfolio shows {:.0}% alignment with \
                         market demands. Focus on expanding both technical and soft \
                         skills to increase your competitiveness.",
                        strength
                    ),
                    confidence: 0.85,
                    priority: 4,
                    action_required: true,
                    action_text: Some("Expand skills portfolio systematically".to_string()),
                    related_skills: Vec::new(),
                });
            }
        }

        insights
    }

    fn market_trend_insights(&self) -> Vec<Insight> {
        let trending: Vec<String> = self
            .taxonomy
            .high_demand_skills()
            .iter()
            .take(4)
            .map(|s| s.to_string())
            .collect();
        let emerging: Vec<String> = self
            .taxonomy
            .emerging_skills()
            .iter()
            .take(3)
            .map(|s| s.to_string())
            .collect();
        let growth: Vec<String> = self
            .taxonomy
            .salary_growth_skills()
            .iter()
            .take(3)
            .map(|s| s.to_string())
            .collect();

        vec![
            Insight {
                kind: InsightKind::MarketTrend,
                title: "High-Demand Skills in Current Market".to_string(),
                content: format!(
                    "The current job market shows high demand for skills in: {}. \
                     Consider incorporating these into your skill set to increase job \
                     opportunities.",
                    trending.join(", ")
                ),
                confidence: 0.8,
                priority: 3,
                action_required: true,
                action_text: Some("Research trending skills in your field".to_string()),
                related_skills: trending,
            },
            Insight {
                kind: InsightKind::EmergingOpportunity,
                title: "Emerging Technology Opportunities".to_string(),
                content: format!(
                    "Keep an eye on emerging technologies like: {}. Early adoption of \
                     these skills could give you a competitive advantage.",
                    emerging.join(", ")
                ),
                confidence: 0.7,
                priority: 2,
                action_required: false,
                action_text: Some("Stay informed about emerging technologies".to_string()),
                related_skills: emerging,
            },
            Insight {
                kind: InsightKind::SalaryGrowth,
                title: "Skills with High Salary Growth Potential".to_string(),
                content: format!(
                    "Skills showing the highest salary growth include: {}. Developing \
                     expertise in these areas could lead to significant salary \
                     increases.",
                    growth.join(", ")
                ),
                confidence: 0.75,
                priority: 3,
                action_required: true,
                action_text: Some(
                    "Evaluate salary growth potential in career planning".to_string(),
                ),
                related_skills: growth,
            },
        ]
    }

    fn success_insights(
        &self,
        profile: &ExtractedProfile,
        scores: &ScoreBreakdown,
    ) -> Vec<Insight> {
        let cv_quality = scores.ats_score;
        let skills_relevance = ((profile.skills.len() * 10) as f64).min(100.0);
        let experience_alignment = 75.0;
        let application_quality = 80.0;
        let probability =
            (cv_quality + skills_relevance + experience_alignment + application_quality) / 4.0;

        let mut insights = Vec::new();

        let insight = if probability >= 80.0 {
            Insight {
                kind: InsightKind::SuccessPrediction,
                title: "High Success Probability".to_string(),
                content: format!(
                    "Based on your profile analysis, you have a {:.0}% probability of \
                     success in your job search. Your strong skill set and experience \
                     level align well with market demands.",
                    probability
                ),
                confidence: 0.9,
                priority: 4,
                action_required: false,
                action_text: None,
                related_skills: Vec::new(),
            }
        } else if probability >= 60.0 {
            Insight {
                kind: InsightKind::SuccessPrediction,
                title: "Good Success Potential".to_string(),
                content: format!(
                    "Your job search success probability is {:.0}%. With some targeted \
                     improvements, you could significantly increase your chances of \
                     landing your desired role.",
                    probability
                ),
                confidence: 0.8,
                priority: 4,
                action_required: true,
                action_text: Some("Focus on highlighted improvement areas".to_string()),
                related_skills: Vec::new(),
            }
        } else {
            Insight {
                kind: InsightKind::SuccessPrediction,
                title: "Improvement Opportunities".to_string(),
                content: format!(
                    "Your current success probability is {:.0}%. Consider the \
                     recommendations below to improve your job search strategy and \
                     skill set.",
                    probability
                ),
                confidence: 0.7,
                priority: 5,
                action_required: true,
                action_text: Some("Implement recommended improvements".to_string()),
                related_skills: Vec::new(),
            }
        };
        insights.push(insight);

        let mut improvement_areas: Vec<&str> = Vec::new();
        if cv_quality < 70.0 {
            improvement_areas.push("CV optimization");
        }
        if profile.skills.len() < 5 {
            improvement_areas.push("skill development");
        }
        if !improvement_areas.is_empty() {
            insights.push(Insight {
                kind: InsightKind::ImprovementAreas,
                title: "Key Areas for Improvement".to_string(),
                content: format!(
                    "Focus on these areas to boost your success: {}. Each area has \
                     specific strategies that could increase your job match scores.",
                    improvement_areas.join(", ")
                ),
                confidence: 0.8,
                priority: 5,
                action_required: true,
                action_text: Some("Create action plan for improvement areas".to_string()),
                related_skills: Vec::new(),
            });
        }

        insights
    }
}

/// Ordered rules: the years thresholds are checked alongside each level, so
/// a stated level without a years figure can still land in an earlier stage.
fn career_stage(level: ExperienceLevel, years: u32) -> CareerStage {
    if level == ExperienceLevel::Junior || years <= 2 {
        CareerStage::Entry
    } else if level == ExperienceLevel::Mid || years <= 7 {
        CareerStage::Mid
    } else if level == ExperienceLevel::Senior || years > 7 {
        CareerStage::Senior
    } else {
        CareerStage::Mid
    }
}

/// Coarse field identification for the progression ladders. Defaults to
/// technology, matching how ladders are most commonly consulted.
fn career_field(skills: &[String]) -> &'static str {
    let lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let has = |candidates: &[&str]| {
        lower
            .iter()
            .any(|s| candidates.iter().any(|c| s.contains(c)))
    };

    if has(&["python", "java", "javascript", "programming"]) {
        "technology"
    } else if has(&["data", "analytics", "statistics"]) {
        "data_science"
    } else if has(&["marketing", "seo", "social media"]) {
        "marketing"
    } else {
        "technology"
    }
}

fn error_insight(message: &str) -> Insight {
    Insight {
        kind: InsightKind::Error,
        title: "Analysis Error".to_string(),
        content: format!("An error occurred during insight generation: {}", message),
        confidence: 0.0,
        priority: 1,
        action_required: false,
        action_text: None,
        related_skills: Vec::new(),
    }
}
