//! Text normalization and language detection

use crate::config::LanguageConfig;
use crate::taxonomy::SkillTaxonomy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Detected primary language of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Indonesian,
    Mixed,
    Unknown,
}

pub struct TextProcessor {
    taxonomy: Arc<SkillTaxonomy>,
    config: LanguageConfig,
    whitespace: Regex,
    disallowed: Regex,
    period_spacing: Regex,
    comma_spacing: Regex,
    open_paren_spacing: Regex,
    close_paren_spacing: Regex,
}

impl TextProcessor {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, config: LanguageConfig) -> Self {
        Self {
            taxonomy,
            config,
            whitespace: Regex::new(r"\s+").expect("Invalid whitespace regex"),
            disallowed: Regex::new(r"[^\w\s\-\.\,\;\:\!\?\(\)\[\]/&%#@+]")
                .expect("Invalid character-set regex"),
            period_spacing: Regex::new(r"\s*\.\s*").expect("Invalid period regex"),
            comma_spacing: Regex::new(r"\s*,\s*").expect("Invalid comma regex"),
            open_paren_spacing: Regex::new(r"\s*\(\s*").expect("Invalid paren regex"),
            close_paren_spacing: Regex::new(r"\s*\)\s*").expect("Invalid paren regex"),
        }
    }

    /// Clean and normalize raw resume text. Idempotent:
    /// `normalize(normalize(t)) == normalize(t)`.
    pub fn normalize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let collapsed = self.whitespace.replace_all(text, " ");
        let stripped = self.disallowed.replace_all(&collapsed, " ");

        // Fix spacing around punctuation commonly mangled by PDF extraction.
        let spaced = self.period_spacing.replace_all(&stripped, ". ");
        let spaced = self.comma_spacing.replace_all(&spaced, ", ");
        let spaced = self.open_paren_spacing.replace_all(&spaced, "(");
        let spaced = self.close_paren_spacing.replace_all(&spaced, ") ");

        self.whitespace.replace_all(&spaced, " ").trim().to_string()
    }

    /// Classify text as English, Indonesian, or a mix, by the share of
    /// Indonesian indicator words present. Thresholds are inclusive so a
    /// boundary ratio lands in the more-Indonesian bucket.
    pub fn detect_language(&self, text: &str) -> Language {
        if text.trim().is_empty() {
            return Language::Unknown;
        }

        let text_lower = text.to_lowercase();
        let word_count = text_lower.split_whitespace().count();
        if word_count == 0 {
            return Language::Unknown;
        }

        let indicator_hits = self
            .taxonomy
            .indonesian_indicators()
            .iter()
            .filter(|word| text_lower.contains(*word))
            .count();

        let percentage = (indicator_hits as f64 / word_count as f64) * 100.0;
        if percentage >= self.config.indonesian_threshold {
            Language::Indonesian
        } else if percentage >= self.config.mixed_threshold {
            Language::Mixed
        } else {
            Language::English
        }
    }

    /// Split into words using Unicode segmentation.
    pub fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }

    /// Split into sentences, dropping empty fragments.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> TextProcessor {
        TextProcessor::new(
            Arc::new(SkillTaxonomy::builtin()),
            crate::config::ScoringConfig::default().language,
        )
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let p = processor();
        let result = p.normalize("Python   developer\n\nwith   experience");
        assert_eq!(result, "Python developer with experience");
    }

    #[test]
    fn test_normalize_fixes_punctuation_spacing() {
        let p = processor();
        let result = p.normalize("Skills : Python , Java(advanced )");
        assert!(result.contains(", "));
        assert!(result.contains("(advanced)"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let p = processor();
        let samples = [
            "John Doe\nSoftware Engineer\n\nSkills: Python, Rust!",
            "  messy ( text ) , with . odd   spacing  ",
            "unicode \u{2014} dashes \u{2022} bullets",
            "",
        ];
        for sample in samples {
            let once = p.normalize(sample);
            let twice = p.normalize(&once);
            assert_eq!(once, twice, "normalize not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_normalize_empty_input() {
        let p = processor();
        assert_eq!(p.normalize(""), "");
        assert_eq!(p.normalize("   \n\t  "), "");
    }

    #[test]
    fn test_detect_language_english() {
        let p = processor();
        let text = "Senior software engineer with strong frontend architecture \
                    and cloud deployment focus";
        assert_eq!(p.detect_language(text), Language::English);
    }

    #[test]
    fn test_detect_language_mixed() {
        let p = processor();
        // Exactly one indicator hit ("dengan") over 26 words, about 3.8%.
        // Indicator matching is by containment, so the English vocabulary
        // here must not embed short indicators like "ke" or "di".
        let text = "Experienced cloud engineer who built payment systems dengan \
                    strong test coverage across several production rollouts while \
                    supporting three regional teams on rollout quality reviews \
                    every quarter";
        assert_eq!(p.detect_language(text), Language::Mixed);
    }

    #[test]
    fn test_detect_language_indonesian() {
        let p = processor();
        let text = "Saya adalah lulusan yang memiliki pengalaman dalam manajemen proyek \
                    dan pengembangan untuk perusahaan teknologi di Jakarta";
        assert_eq!(p.detect_language(text), Language::Indonesian);
    }

    #[test]
    fn test_detect_language_empty_is_unknown() {
        let p = processor();
        assert_eq!(p.detect_language(""), Language::Unknown);
        assert_eq!(p.detect_language("   "), Language::Unknown);
    }

    #[test]
    fn test_sentences() {
        let p = processor();
        let sentences = p.sentences("First sentence. Second sentence! Third?");
        assert_eq!(sentences.len(), 3);
    }
}
