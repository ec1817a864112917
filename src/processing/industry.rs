//! Industry classification and benchmarking

use crate::config::IndustryConfig;
use crate::taxonomy::SkillTaxonomy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How the resume stacks up against skill expectations for its industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub industry: String,
    pub essential_skills_matched: Vec<String>,
    pub essential_skills_missing: Vec<String>,
    pub preferred_skills_matched: Vec<String>,
    pub preferred_skills_missing: Vec<String>,
    pub benchmark_score: f64,
}

pub struct IndustryClassifier {
    taxonomy: Arc<SkillTaxonomy>,
    config: IndustryConfig,
}

impl IndustryClassifier {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, config: IndustryConfig) -> Self {
        Self { taxonomy, config }
    }

    /// Best-matching industry and a confidence in [0, 1]. Keyword hits in
    /// the text count the industry weight, hits inside extracted skills half
    /// that. Ties resolve to the earliest industry in declaration order;
    /// nothing matched yields ("general", 0.0).
    pub fn classify(&self, text: &str, skills: &[String]) -> (String, f64) {
        if text.trim().is_empty() {
            return ("general".to_string(), 0.0);
        }

        let text_lower = text.to_lowercase();
        let skills_text = skills.join(" ").to_lowercase();

        let mut best_name = "general";
        let mut best_score = 0.0f64;
        for industry in self.taxonomy.industries() {
            let mut score = 0.0;
            for keyword in industry.keywords {
                if text_lower.contains(keyword) {
                    score += industry.weight;
                }
                if skills_text.contains(keyword) {
                    score += industry.weight * 0.5;
                }
            }
            if score > best_score {
                best_score = score;
                best_name = industry.name;
            }
        }

        if best_score > 0.0 {
            let confidence = (best_score / self.config.confidence_divisor).min(1.0);
            (best_name.to_string(), confidence)
        } else {
            ("general".to_string(), 0.0)
        }
    }

    /// Compare extracted skills with the essential and preferred expectations
    /// for the industry. `None` for industries without a benchmark table.
    pub fn benchmark(&self, industry: &str, skills: &[String]) -> Option<IndustryBenchmark> {
        let spec = self.taxonomy.benchmark_for(industry)?;
        let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

        let (essential_matched, essential_missing) = partition_matches(spec.essential, &skills_lower);
        let (preferred_matched, preferred_missing) = partition_matches(spec.preferred, &skills_lower);

        let essential_rate = if spec.essential.is_empty() {
            0.0
        } else {
            essential_matched.len() as f64 / spec.essential.len() as f64
        };
        let preferred_rate = if spec.preferred.is_empty() {
            0.0
        } else {
            preferred_matched.len() as f64 / spec.preferred.len() as f64
        };

        let benchmark_score = (essential_rate * self.config.essential_weight
            + preferred_rate * self.config.preferred_weight)
            * 100.0;

        Some(IndustryBenchmark {
            industry: industry.to_string(),
            essential_skills_matched: essential_matched,
            essential_skills_missing: essential_missing,
            preferred_skills_matched: preferred_matched,
            preferred_skills_missing: preferred_missing,
            benchmark_score: benchmark_score.clamp(0.0, 100.0),
        })
    }
}

/// Split expected skills into matched and missing against the candidate's
/// lowercased skills, using containment in either direction.
fn partition_matches(
    expected: &[&'static str],
    skills_lower: &[String],
) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for want in expected {
        let hit = skills_lower
            .iter()
            .any(|have| have.contains(want) || want.contains(have.as_str()));
        if hit {
            matched.push(want.to_string());
        } else {
            missing.push(want.to_string());
        }
    }
    (matched, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;

    fn classifier() -> IndustryClassifier {
        IndustryClassifier::new(
            Arc::new(SkillTaxonomy::builtin()),
            ScoringConfig::default().industry,
        )
    }

    #[test]
    fn test_classify_technology() {
        let c = classifier();
        let skills = vec!["python".to_string(), "aws".to_string()];
        let (industry, confidence) = c.classify(
            "Software development with cloud deployment and devops automation",
            &skills,
        );
        assert_eq!(industry, "technology");
        assert!(confidence > 0.0);
        assert!(confidence <= 1.0);
    }

    #[test]
    fn test_classify_no_signal_is_general() {
        let c = classifier();
        let (industry, confidence) = c.classify("walks in the park on sunny afternoons", &[]);
        assert_eq!(industry, "general");
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_classify_empty_text() {
        let c = classifier();
        let (industry, confidence) = c.classify("", &[]);
        assert_eq!(industry, "general");
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_confidence_saturates() {
        let c = classifier();
        let text = "software programming development tech digital cloud cybersecurity \
                    blockchain devops python java javascript react aws azure";
        let (industry, confidence) = c.classify(text, &[]);
        assert_eq!(industry, "technology");
        assert_eq!(confidence, 1.0);
    }

    #[test]
    fn test_benchmark_for_technology() {
        let c = classifier();
        let skills = vec![
            "programming".to_string(),
            "problem solving".to_string(),
            "git".to_string(),
            "sql".to_string(),
            "debugging".to_string(),
        ];
        let b = c.benchmark("technology", &skills).unwrap();
        assert!(b.essential_skills_missing.is_empty());
        assert_eq!(b.essential_skills_matched.len(), 5);
        // All essential, no preferred: 1.0 * 0.7 * 100.
        assert!((b.benchmark_score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_benchmark_unknown_industry_is_none() {
        let c = classifier();
        assert!(c.benchmark("general", &[]).is_none());
        assert!(c.benchmark("consulting", &[]).is_none());
    }
}
