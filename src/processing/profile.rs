//! Profile extraction pipeline
//!
//! Runs normalization, language detection, skill extraction, structural
//! analysis, and industry classification in order and freezes the result
//! into an [`ExtractedProfile`]. Empty input is not an error; it produces a
//! well-formed empty profile so downstream scoring degrades gracefully.

use crate::config::ScoringConfig;
use crate::processing::industry::IndustryClassifier;
use crate::processing::scorer::{ProfileScorer, ScoreBreakdown};
use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::structure::{
    ContactInfo, EducationLevel, ExperienceLevel, StructureAnalyzer, TextStructure,
};
use crate::processing::text_processor::{Language, TextProcessor};
use crate::taxonomy::SkillTaxonomy;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything the pipeline learned about one resume. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub raw_text: String,
    pub normalized_text: String,
    pub language: Language,
    pub skills: Vec<String>,
    pub contact: ContactInfo,
    pub structure: TextStructure,
    pub experience_level: ExperienceLevel,
    pub years_experience: u32,
    pub education_level: EducationLevel,
    pub industry: String,
    pub industry_confidence: f64,
}

impl ExtractedProfile {
    fn empty(raw_text: &str) -> Self {
        Self {
            raw_text: raw_text.to_string(),
            normalized_text: String::new(),
            language: Language::Unknown,
            skills: Vec::new(),
            contact: ContactInfo::default(),
            structure: TextStructure::default(),
            experience_level: ExperienceLevel::Unknown,
            years_experience: 0,
            education_level: EducationLevel::Unknown,
            industry: "general".to_string(),
            industry_confidence: 0.0,
        }
    }
}

pub struct ProfileAnalyzer {
    text_processor: TextProcessor,
    skill_extractor: SkillExtractor,
    structure_analyzer: StructureAnalyzer,
    industry_classifier: IndustryClassifier,
    scorer: ProfileScorer,
}

impl ProfileAnalyzer {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, config: ScoringConfig) -> Self {
        Self {
            text_processor: TextProcessor::new(Arc::clone(&taxonomy), config.language),
            skill_extractor: SkillExtractor::new(Arc::clone(&taxonomy)),
            structure_analyzer: StructureAnalyzer::new(),
            industry_classifier: IndustryClassifier::new(Arc::clone(&taxonomy), config.industry),
            scorer: ProfileScorer::new(taxonomy),
        }
    }

    /// Run the full extraction pipeline over raw resume text.
    pub fn analyze(&self, raw_text: &str) -> ExtractedProfile {
        if raw_text.trim().is_empty() {
            return ExtractedProfile::empty(raw_text);
        }

        let normalized_text = self.text_processor.normalize(raw_text);
        let language = self.text_processor.detect_language(&normalized_text);
        let skills = self.skill_extractor.extract(&normalized_text, language);
        let structure = self.structure_analyzer.analyze(&normalized_text);
        // Contact runs on raw text: the name heuristic needs line breaks.
        let contact = self.structure_analyzer.extract_contact(raw_text);
        let (experience_level, years_experience) = self
            .structure_analyzer
            .detect_experience_level(&normalized_text);
        let education_level = self
            .structure_analyzer
            .detect_education_level(&normalized_text);
        let (industry, industry_confidence) =
            self.industry_classifier.classify(&normalized_text, &skills);

        debug!(
            "analyzed profile: {} skills, language {:?}, industry {}",
            skills.len(),
            language,
            industry
        );

        ExtractedProfile {
            raw_text: raw_text.to_string(),
            normalized_text,
            language,
            skills,
            contact,
            structure,
            experience_level,
            years_experience,
            education_level,
            industry,
            industry_confidence,
        }
    }

    /// Score a previously extracted profile.
    pub fn score(&self, profile: &ExtractedProfile) -> ScoreBreakdown {
        if profile.normalized_text.is_empty() {
            return ScoreBreakdown::default();
        }
        self.scorer.score(
            &profile.normalized_text,
            &profile.skills,
            &profile.structure,
            &profile.contact,
        )
    }

    /// Industry benchmark for the profile's classified industry, when one
    /// exists.
    pub fn benchmark(
        &self,
        profile: &ExtractedProfile,
    ) -> Option<crate::processing::industry::IndustryBenchmark> {
        self.industry_classifier
            .benchmark(&profile.industry, &profile.skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> ProfileAnalyzer {
        ProfileAnalyzer::new(Arc::new(SkillTaxonomy::builtin()), ScoringConfig::default())
    }

    const SAMPLE: &str = "John Smith\n\
        Software Engineer\n\
        Email: john.smith@example.com | Phone: 555-123-4567\n\n\
        Summary: Platform engineer with 6 years of experience.\n\n\
        Experience: Built Python services with React dashboards on AWS.\n\
        Led a team of four, improved deployment time, optimized SQL queries.\n\n\
        Skills: Python, React, AWS, SQL\n\n\
        Education: Bachelor of Computer Science, State University";

    #[test]
    fn test_empty_input_produces_empty_profile() {
        let a = analyzer();
        let profile = a.analyze("   \n  ");
        assert!(profile.normalized_text.is_empty());
        assert_eq!(profile.language, Language::Unknown);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.industry, "general");
        let scores = a.score(&profile);
        assert_eq!(scores.ats_score, 0.0);
        assert_eq!(scores.completeness_score, 0.0);
    }

    #[test]
    fn test_full_pipeline_on_sample() {
        let a = analyzer();
        let profile = a.analyze(SAMPLE);

        assert_eq!(profile.language, Language::English);
        assert!(profile.skills.iter().any(|s| s == "python"));
        assert!(profile.skills.iter().any(|s| s == "react"));
        assert!(profile.skills.iter().any(|s| s == "aws"));
        assert_eq!(profile.contact.name.as_deref(), Some("John Smith"));
        assert_eq!(profile.contact.email.as_deref(), Some("john.smith@example.com"));
        assert_eq!(profile.experience_level, ExperienceLevel::Senior);
        assert_eq!(profile.years_experience, 6);
        assert_eq!(profile.education_level, EducationLevel::Bachelor);
        assert_eq!(profile.industry, "technology");
        assert!(profile.structure.sections.len() >= 3);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let a = analyzer();
        let first = a.analyze(SAMPLE);
        let second = a.analyze(SAMPLE);
        assert_eq!(first.skills, second.skills);
        assert_eq!(first.industry, second.industry);
        let s1 = a.score(&first);
        let s2 = a.score(&second);
        assert_eq!(s1.ats_score, s2.ats_score);
        assert_eq!(s1.confidence_score, s2.confidence_score);
    }

    #[test]
    fn test_benchmark_available_for_classified_industry() {
        let a = analyzer();
        let profile = a.analyze(SAMPLE);
        assert_eq!(profile.industry, "technology");
        let benchmark = a.benchmark(&profile).unwrap();
        assert!(benchmark.benchmark_score >= 0.0);
        assert!(benchmark.benchmark_score <= 100.0);
    }
}
