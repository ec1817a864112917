//! Structural analysis of resume text
//!
//! Section detection, readability, contact extraction, and the experience and
//! education level heuristics. Contact extraction works on the raw text since
//! the name heuristic needs line boundaries that normalization collapses.

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionTag {
    Experience,
    Education,
    Skills,
    Summary,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Executive,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Phd,
    Masters,
    Bachelor,
    Diploma,
    HighSchool,
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextStructure {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
    pub readability_score: f64,
    pub sections: Vec<SectionTag>,
}

const SECTION_KEYWORDS: &[(SectionTag, &[&str])] = &[
    (
        SectionTag::Experience,
        &["experience", "work history", "employment", "career"],
    ),
    (
        SectionTag::Education,
        &["education", "academic", "university", "degree", "bachelor", "master"],
    ),
    (
        SectionTag::Skills,
        &["skills", "technical skills", "programming", "software"],
    ),
    (
        SectionTag::Summary,
        &["summary", "objective", "profile", "about"],
    ),
    (
        SectionTag::Contact,
        &["contact", "email", "phone", "address"],
    ),
];

const EXPERIENCE_KEYWORDS: &[(ExperienceLevel, &[&str])] = &[
    (
        ExperienceLevel::Junior,
        &["junior", "entry", "fresh", "graduate", "intern", "trainee", "0-2 years", "1-2 years"],
    ),
    (
        ExperienceLevel::Mid,
        &["mid-level", "intermediate", "3-5 years", "4-6 years", "specialist", "analyst"],
    ),
    (
        ExperienceLevel::Senior,
        &["senior", "lead", "principal", "5+ years", "6+ years", "7+ years", "8+ years"],
    ),
    (
        ExperienceLevel::Executive,
        &["director", "head", "manager", "chief", "vp", "executive", "10+ years"],
    ),
];

pub struct StructureAnalyzer {
    email: Regex,
    phone_patterns: Vec<Regex>,
    contact_line_marker: Regex,
    year_patterns: Vec<Regex>,
    education_patterns: Vec<(EducationLevel, Regex)>,
}

impl StructureAnalyzer {
    pub fn new() -> Self {
        let phone_patterns = vec![
            Regex::new(r"\b\d{3}-\d{3}-\d{4}\b").expect("Invalid phone regex"),
            Regex::new(r"\(\d{3}\)\s*\d{3}-\d{4}").expect("Invalid phone regex"),
            Regex::new(r"\b\d{10,11}\b").expect("Invalid phone regex"),
            Regex::new(r"\+\d{1,3}[-\s]?\d{8,10}").expect("Invalid phone regex"),
        ];

        let year_patterns = vec![
            Regex::new(r"(\d+)\+?\s*(years?|tahun)\s*(of\s*)?(experience|exp)")
                .expect("Invalid years regex"),
            Regex::new(r"(\d+)\+?\s*years?\s*(in|of)").expect("Invalid years regex"),
            Regex::new(r"(\d+)\+?\s*tahun\s*(pengalaman|kerja)").expect("Invalid years regex"),
        ];

        // Word boundaries keep short degree tokens like "ma" and "s1" from
        // matching inside ordinary words.
        let education_patterns = vec![
            (
                EducationLevel::Phd,
                Regex::new(r"\b(phd|doctorate|doctoral|ph\.d)\b").expect("Invalid education regex"),
            ),
            (
                EducationLevel::Masters,
                Regex::new(r"\b(masters?|mba|msc|ma|magister|s2)\b")
                    .expect("Invalid education regex"),
            ),
            (
                EducationLevel::Bachelor,
                Regex::new(r"\b(bachelor|bsc|ba|s1|sarjana|undergraduate)\b")
                    .expect("Invalid education regex"),
            ),
            (
                EducationLevel::Diploma,
                Regex::new(r"\b(diploma|associate|certificate|sertifikat|d3|d4)\b")
                    .expect("Invalid education regex"),
            ),
            (
                EducationLevel::HighSchool,
                Regex::new(r"\b(high school|secondary|sma|smk|ged)\b")
                    .expect("Invalid education regex"),
            ),
        ];

        Self {
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("Invalid email regex"),
            phone_patterns,
            contact_line_marker: Regex::new(r"(?i)@|tel|phone|email")
                .expect("Invalid contact-marker regex"),
            year_patterns,
            education_patterns,
        }
    }

    /// Word/sentence counts, readability, and detected sections for
    /// normalized text. Empty input yields an all-zero structure.
    pub fn analyze(&self, normalized_text: &str) -> TextStructure {
        if normalized_text.trim().is_empty() {
            return TextStructure::default();
        }

        let word_count = normalized_text.unicode_words().count();
        let sentence_count = normalized_text
            .unicode_sentences()
            .filter(|s| !s.trim().is_empty())
            .count();
        let avg_words_per_sentence = if sentence_count > 0 {
            word_count as f64 / sentence_count as f64
        } else {
            0.0
        };

        TextStructure {
            word_count,
            sentence_count,
            avg_words_per_sentence,
            readability_score: self.readability(normalized_text),
            sections: self.detect_sections(normalized_text),
        }
    }

    /// Which standard resume sections the text mentions, by keyword presence.
    pub fn detect_sections(&self, text: &str) -> Vec<SectionTag> {
        let text_lower = text.to_lowercase();
        SECTION_KEYWORDS
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| text_lower.contains(k)))
            .map(|(tag, _)| *tag)
            .collect()
    }

    /// Flesch Reading Ease with an estimated syllable count, clamped [0, 100].
    pub fn readability(&self, text: &str) -> f64 {
        let words: Vec<&str> = text.unicode_words().collect();
        let sentence_count = text
            .unicode_sentences()
            .filter(|s| !s.trim().is_empty())
            .count();
        if words.is_empty() || sentence_count == 0 {
            return 0.0;
        }

        let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
        let avg_sentence_length = words.len() as f64 / sentence_count as f64;
        let avg_syllables_per_word = syllables as f64 / words.len() as f64;

        let score = 206.835 - (1.015 * avg_sentence_length) - (84.6 * avg_syllables_per_word);
        score.clamp(0.0, 100.0)
    }

    /// Email, phone, and a best-effort name from the first lines of raw text.
    pub fn extract_contact(&self, raw_text: &str) -> ContactInfo {
        if raw_text.trim().is_empty() {
            return ContactInfo::default();
        }

        let email = self.email.find(raw_text).map(|m| m.as_str().to_string());

        let phone = self
            .phone_patterns
            .iter()
            .find_map(|p| p.find(raw_text))
            .map(|m| m.as_str().to_string());

        // Name heuristic: a short 2-3 word line near the top with no digits
        // and no contact markers.
        let name = raw_text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .take(3)
            .map(str::trim)
            .find(|line| {
                line.len() > 2
                    && line.len() < 50
                    && !self.contact_line_marker.is_match(line)
                    && {
                        let words = line.split_whitespace().count();
                        (2..=3).contains(&words) && !line.chars().any(|c| c.is_ascii_digit())
                    }
            })
            .map(title_case);

        ContactInfo { name, email, phone }
    }

    /// Level from weighted keyword hits plus explicit years-of-experience
    /// mentions (English and Indonesian forms). Returns the level and the
    /// largest years figure found, capped at 15 for executives.
    pub fn detect_experience_level(&self, text: &str) -> (ExperienceLevel, u32) {
        if text.trim().is_empty() {
            return (ExperienceLevel::Unknown, 0);
        }

        let text_lower = text.to_lowercase();

        let mut best_level = ExperienceLevel::Unknown;
        let mut best_score = 0usize;
        for (level, keywords) in EXPERIENCE_KEYWORDS {
            let score = keywords.iter().filter(|k| text_lower.contains(*k)).count();
            if score > best_score {
                best_score = score;
                best_level = *level;
            }
        }

        let mut total_years: u32 = 0;
        for pattern in &self.year_patterns {
            for capture in pattern.captures_iter(&text_lower) {
                if let Some(years) = capture.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                    total_years = total_years.max(years);
                }
            }
        }

        if total_years >= 10 || best_level == ExperienceLevel::Executive {
            (ExperienceLevel::Executive, total_years.min(15))
        } else if total_years >= 5 || best_level == ExperienceLevel::Senior {
            (ExperienceLevel::Senior, total_years)
        } else if total_years >= 3 || best_level == ExperienceLevel::Mid {
            (ExperienceLevel::Mid, total_years)
        } else if total_years >= 1 || best_level == ExperienceLevel::Junior {
            (ExperienceLevel::Junior, total_years)
        } else {
            (ExperienceLevel::Unknown, total_years)
        }
    }

    /// Highest degree mentioned, checked from PhD downwards so the first hit
    /// is the strongest credential.
    pub fn detect_education_level(&self, text: &str) -> EducationLevel {
        let text_lower = text.to_lowercase();
        self.education_patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(&text_lower))
            .map(|(level, _)| *level)
            .unwrap_or(EducationLevel::Unknown)
    }
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Vowel-group syllable estimate with a silent-e correction, minimum one
/// syllable per word.
fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count = 0usize;
    let mut previous_was_vowel = false;
    for c in word.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    if word.ends_with('e') && count > 1 {
        count -= 1;
    }
    count.max(1)
}

fn title_case(line: &str) -> String {
    line.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_counting() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("beautiful"), 3);
        // The silent-e correction also fires on consonant-le endings, so
        // "table" counts as one. The estimate only needs to be consistent.
        assert_eq!(count_syllables("table"), 1);
        // Minimum one even with no vowels.
        assert_eq!(count_syllables("tsk"), 1);
        // Silent e drops a syllable but never below one.
        assert_eq!(count_syllables("the"), 1);
    }

    #[test]
    fn test_analyze_empty() {
        let a = StructureAnalyzer::new();
        let s = a.analyze("");
        assert_eq!(s.word_count, 0);
        assert_eq!(s.sentence_count, 0);
        assert!(s.sections.is_empty());
        assert_eq!(s.readability_score, 0.0);
    }

    #[test]
    fn test_section_detection() {
        let a = StructureAnalyzer::new();
        let sections = a.detect_sections(
            "Professional Summary. Work Experience at Acme. Education: State University. \
             Technical Skills: Rust. Contact: see below.",
        );
        assert!(sections.contains(&SectionTag::Experience));
        assert!(sections.contains(&SectionTag::Education));
        assert!(sections.contains(&SectionTag::Skills));
        assert!(sections.contains(&SectionTag::Summary));
        assert!(sections.contains(&SectionTag::Contact));
    }

    #[test]
    fn test_readability_in_range() {
        let a = StructureAnalyzer::new();
        let simple = a.readability("The cat sat. The dog ran. It was fun.");
        assert!(simple > 80.0);
        let dense = a.readability(
            "Organizational transformation initiatives necessitate comprehensive \
             stakeholder communication infrastructures alongside multidimensional \
             accountability frameworks",
        );
        assert!(dense < simple);
        assert!((0.0..=100.0).contains(&dense));
    }

    #[test]
    fn test_contact_extraction() {
        let a = StructureAnalyzer::new();
        let contact = a.extract_contact(
            "jane doe\nSoftware Engineer\nEmail: jane.doe@example.com\nPhone: 555-123-4567",
        );
        assert_eq!(contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn test_name_skips_lines_with_digits_or_markers() {
        let a = StructureAnalyzer::new();
        let contact = a.extract_contact("Phone 555-123-4567\nB2B Sales\nMary Ann Smith\n");
        assert_eq!(contact.name.as_deref(), Some("Mary Ann Smith"));
    }

    #[test]
    fn test_international_phone() {
        let a = StructureAnalyzer::new();
        let contact = a.extract_contact("Reach me at +62 812345678 anytime");
        assert_eq!(contact.phone.as_deref(), Some("+62 812345678"));
    }

    #[test]
    fn test_experience_level_from_years() {
        let a = StructureAnalyzer::new();
        assert_eq!(
            a.detect_experience_level("12 years of experience in accounting"),
            (ExperienceLevel::Executive, 12)
        );
        assert_eq!(
            a.detect_experience_level("6 years of experience building services"),
            (ExperienceLevel::Senior, 6)
        );
        assert_eq!(
            a.detect_experience_level("4 tahun pengalaman"),
            (ExperienceLevel::Mid, 4)
        );
        assert_eq!(
            a.detect_experience_level("recent graduate seeking first role"),
            (ExperienceLevel::Junior, 0)
        );
        assert_eq!(
            a.detect_experience_level("loves building things"),
            (ExperienceLevel::Unknown, 0)
        );
    }

    #[test]
    fn test_executive_years_capped() {
        let a = StructureAnalyzer::new();
        let (level, years) = a.detect_experience_level("25 years of experience");
        assert_eq!(level, ExperienceLevel::Executive);
        assert_eq!(years, 15);
    }

    #[test]
    fn test_education_level_ordering() {
        let a = StructureAnalyzer::new();
        assert_eq!(
            a.detect_education_level("PhD in Physics, Masters in Math"),
            EducationLevel::Phd
        );
        assert_eq!(
            a.detect_education_level("Sarjana Teknik Informatika"),
            EducationLevel::Bachelor
        );
        assert_eq!(a.detect_education_level("lulusan SMK"), EducationLevel::HighSchool);
        assert_eq!(a.detect_education_level("no credentials here"), EducationLevel::Unknown);
    }

    #[test]
    fn test_short_degree_tokens_need_boundaries() {
        let a = StructureAnalyzer::new();
        // "ma" inside "management" must not read as a masters degree.
        assert_eq!(
            a.detect_education_level("management and marketing roles"),
            EducationLevel::Unknown
        );
    }
}
