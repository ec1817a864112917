//! ATS, completeness, and confidence scoring
//!
//! All scoring here is pure: the same inputs always yield the same
//! breakdown. Each factor is capped on its own before the total is capped,
//! so one dimension can never spill into another.

use crate::processing::structure::{ContactInfo, TextStructure};
use crate::taxonomy::SkillTaxonomy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Applicant-tracking-system compatibility, 0 to 100.
    pub ats_score: f64,
    /// How complete the resume is as a document, 0 to 100.
    pub completeness_score: f64,
    /// How much to trust the extraction overall, 0.0 to 1.0.
    pub confidence_score: f64,
    pub readability_score: f64,
}

pub struct ProfileScorer {
    taxonomy: Arc<SkillTaxonomy>,
    experience_indicators: Vec<Regex>,
    education_indicators: Vec<Regex>,
}

impl ProfileScorer {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        let experience_indicators = vec![
            Regex::new(r"\d+\+?\s*(years?|tahun)\s*(of\s*)?(experience|exp)")
                .expect("Invalid experience regex"),
            Regex::new(r"senior|lead|principal|manager|director").expect("Invalid experience regex"),
            Regex::new(r"project\s+(lead|manager|coordinator)").expect("Invalid experience regex"),
            Regex::new(r"team\s+(lead|head|supervisor)").expect("Invalid experience regex"),
        ];
        let education_indicators = vec![
            Regex::new(r"bachelor|master|phd|doctorate").expect("Invalid education regex"),
            Regex::new(r"universit(y|as)|college|institute").expect("Invalid education regex"),
            Regex::new(r"degree|diploma|certificate").expect("Invalid education regex"),
            Regex::new(r"gpa|grade|academic").expect("Invalid education regex"),
        ];
        Self {
            taxonomy,
            experience_indicators,
            education_indicators,
        }
    }

    pub fn score(
        &self,
        normalized_text: &str,
        skills: &[String],
        structure: &TextStructure,
        contact: &ContactInfo,
    ) -> ScoreBreakdown {
        let ats = self.ats_score(normalized_text, skills, structure, contact);
        ScoreBreakdown {
            ats_score: ats,
            completeness_score: self.completeness_score(skills, structure, contact),
            confidence_score: self.confidence_score(skills, structure, contact, ats),
            readability_score: structure.readability_score,
        }
    }

    /// Nine-factor ATS compatibility score. Factor budgets: word count 15,
    /// sections 20+5, skills 20+5, contact 10, readability 10, keyword
    /// density 10, experience indicators 5, education indicators 5, action
    /// verbs 5. Total capped at 100.
    pub fn ats_score(
        &self,
        normalized_text: &str,
        skills: &[String],
        structure: &TextStructure,
        contact: &ContactInfo,
    ) -> f64 {
        if normalized_text.trim().is_empty() {
            return 0.0;
        }

        let text_lower = normalized_text.to_lowercase();
        let mut score = 0.0f64;

        let word_count = structure.word_count;
        score += match word_count {
            300..=600 => 15.0,
            200..=800 => 12.0,
            150..=1000 => 8.0,
            n if n >= 100 => 5.0,
            _ => 0.0,
        };

        let section_count = structure.sections.len();
        score += ((section_count * 4) as f64).min(20.0);
        score += (section_count as f64).min(5.0);

        score += match skills.len() {
            n if n >= 15 => 20.0,
            n if n >= 10 => 16.0,
            n if n >= 5 => 12.0,
            n if n >= 3 => 8.0,
            n if n > 0 => 4.0,
            _ => 0.0,
        };
        score += match self.taxonomy.categories_represented(skills).len() {
            n if n >= 5 => 5.0,
            n if n >= 3 => 3.0,
            n if n >= 2 => 1.0,
            _ => 0.0,
        };

        let mut contact_score = 0.0f64;
        if contact.email.is_some() {
            contact_score += 4.0;
        }
        if contact.phone.is_some() {
            contact_score += 4.0;
        }
        if contact.name.is_some() {
            contact_score += 2.0;
        }
        score += contact_score.min(10.0);

        score += match structure.readability_score {
            r if r >= 80.0 => 10.0,
            r if r >= 60.0 => 8.0,
            r if r >= 40.0 => 5.0,
            r if r >= 20.0 => 2.0,
            _ => 0.0,
        };

        let industry_keywords = self.taxonomy.industry_keywords_in(&text_lower);
        if !industry_keywords.is_empty() && word_count > 0 {
            let density = industry_keywords.len() as f64 / word_count as f64 * 1000.0;
            score += if density >= 5.0 {
                10.0
            } else if density >= 3.0 {
                8.0
            } else if density >= 1.0 {
                5.0
            } else {
                2.0
            };
        }

        score += indicator_band(hit_count(&self.experience_indicators, &text_lower));
        score += indicator_band(hit_count(&self.education_indicators, &text_lower));

        let action_count = self
            .taxonomy
            .action_verbs()
            .iter()
            .filter(|verb| text_lower.contains(*verb))
            .count();
        score += match action_count {
            n if n >= 8 => 5.0,
            n if n >= 5 => 3.0,
            n if n >= 2 => 1.0,
            _ => 0.0,
        };

        score.min(100.0)
    }

    /// Document completeness: skills 30, contact 25, sections 25, word count
    /// 20, capped at 100.
    pub fn completeness_score(
        &self,
        skills: &[String],
        structure: &TextStructure,
        contact: &ContactInfo,
    ) -> f64 {
        let mut score = 0.0f64;

        score += match skills.len() {
            n if n >= 10 => 30.0,
            n if n >= 5 => 20.0,
            n if n >= 3 => 15.0,
            n if n > 0 => 10.0,
            _ => 0.0,
        };

        score += if contact.email.is_some() && contact.phone.is_some() {
            25.0
        } else if contact.email.is_some() || contact.phone.is_some() {
            15.0
        } else if contact.name.is_some() {
            10.0
        } else {
            0.0
        };

        score += ((structure.sections.len() * 5) as f64).min(25.0);

        score += match structure.word_count {
            200..=800 => 20.0,
            n if n >= 100 => 10.0,
            _ => 0.0,
        };

        score.min(100.0)
    }

    /// Mean of four trust factors (skill count, contact presence, section
    /// count, ATS score scaled to [0, 1]), rounded to two decimals.
    pub fn confidence_score(
        &self,
        skills: &[String],
        structure: &TextStructure,
        contact: &ContactInfo,
        ats_score: f64,
    ) -> f64 {
        let skill_factor = match skills.len() {
            n if n >= 10 => 0.9,
            n if n >= 5 => 0.7,
            n if n >= 3 => 0.5,
            _ => 0.2,
        };

        let mut contact_factor = 0.0;
        if contact.email.is_some() {
            contact_factor += 0.4;
        }
        if contact.phone.is_some() {
            contact_factor += 0.4;
        }
        if contact.name.is_some() {
            contact_factor += 0.2;
        }

        let section_factor = match structure.sections.len() {
            n if n >= 3 => 0.9,
            n if n >= 2 => 0.7,
            n if n >= 1 => 0.5,
            _ => 0.2,
        };

        let mean = (skill_factor + contact_factor + section_factor + ats_score / 100.0) / 4.0;
        (mean * 100.0).round() / 100.0
    }
}

fn hit_count(patterns: &[Regex], text_lower: &str) -> usize {
    patterns.iter().filter(|p| p.is_match(text_lower)).count()
}

fn indicator_band(hits: usize) -> f64 {
    match hits {
        n if n >= 3 => 5.0,
        n if n >= 2 => 3.0,
        n if n >= 1 => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::structure::StructureAnalyzer;

    fn scorer() -> ProfileScorer {
        ProfileScorer::new(Arc::new(SkillTaxonomy::builtin()))
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_text_scores_zero_ats() {
        let s = scorer();
        let structure = TextStructure::default();
        let contact = ContactInfo::default();
        assert_eq!(s.ats_score("", &[], &structure, &contact), 0.0);
    }

    #[test]
    fn test_ats_score_bounded() {
        let s = scorer();
        let analyzer = StructureAnalyzer::new();
        let text = "Experience Education Skills Summary Contact ".repeat(80);
        let structure = analyzer.analyze(&text);
        let many: Vec<String> = skills(&[
            "python", "java", "react", "sql", "aws", "docker", "kubernetes", "machine learning",
            "leadership", "communication", "teamwork", "seo", "figma", "audit", "teaching",
            "recruitment",
        ]);
        let contact = ContactInfo {
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("555-123-4567".into()),
        };
        let score = s.ats_score(&text, &many, &structure, &contact);
        assert!(score > 0.0);
        assert!(score <= 100.0);
    }

    #[test]
    fn test_more_skills_score_higher() {
        let s = scorer();
        let analyzer = StructureAnalyzer::new();
        let text = "Experience with software development and project delivery.";
        let structure = analyzer.analyze(text);
        let contact = ContactInfo::default();
        let few = s.ats_score(text, &skills(&["python"]), &structure, &contact);
        let many = s.ats_score(
            text,
            &skills(&["python", "java", "sql", "react", "aws", "docker"]),
            &structure,
            &contact,
        );
        assert!(many > few);
    }

    #[test]
    fn test_completeness_bands() {
        let s = scorer();
        let full_contact = ContactInfo {
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("555-123-4567".into()),
        };
        let structure = TextStructure {
            word_count: 400,
            ..Default::default()
        };
        // 10 skills (30) + email and phone (25) + no sections (0) + words (20)
        let score = s.completeness_score(
            &skills(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]),
            &structure,
            &full_contact,
        );
        assert_eq!(score, 75.0);
        assert_eq!(
            s.completeness_score(&[], &TextStructure::default(), &ContactInfo::default()),
            0.0
        );
    }

    #[test]
    fn test_confidence_two_decimals() {
        let s = scorer();
        let contact = ContactInfo {
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: None,
        };
        let structure = TextStructure::default();
        let c = s.confidence_score(&skills(&["python", "sql", "react"]), &structure, &contact, 33.0);
        // (0.5 + 0.6 + 0.2 + 0.33) / 4 = 0.4075 -> 0.41
        assert_eq!(c, 0.41);
        assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn test_confidence_floor() {
        let s = scorer();
        let c = s.confidence_score(&[], &TextStructure::default(), &ContactInfo::default(), 0.0);
        // (0.2 + 0.0 + 0.2 + 0.0) / 4
        assert_eq!(c, 0.1);
    }
}
