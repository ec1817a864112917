//! Skill extraction against the taxonomy
//!
//! Four passes feed one deduplicated, order-preserving result: taxonomy
//! matching (direct, compound, abbreviation), certification patterns,
//! seniority qualifiers, and soft-skill verb clusters.

use crate::processing::text_processor::Language;
use crate::taxonomy::SkillTaxonomy;
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

pub struct SkillExtractor {
    taxonomy: Arc<SkillTaxonomy>,
    direct_matcher: AhoCorasick,
    all_skills: Vec<&'static str>,
    certification_patterns: Vec<Regex>,
    seniority_qualifiers: Vec<(Regex, &'static [&'static str])>,
    soft_skill_clusters: Vec<(Regex, &'static [&'static str])>,
}

impl SkillExtractor {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        let all_skills: Vec<&'static str> = taxonomy
            .categories()
            .iter()
            .flat_map(|c| c.skills.iter().copied())
            .collect();

        let direct_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&all_skills)
            .expect("Failed to build skill matcher");

        let certification_patterns = vec![
            Regex::new(
                r"(?i)\b(google\s+analytics|facebook\s+ads|aws\s+certification|pmp|cfa|cpa|scrum\s+master)\b",
            )
            .expect("Invalid certification regex"),
            Regex::new(r"(?i)\b(microsoft\s+office|excel\s+advanced|power\s+bi|tableau)\b")
                .expect("Invalid certification regex"),
            Regex::new(r"(?i)\b(iso\s+\d+|six\s+sigma|lean|agile|scrum)\b")
                .expect("Invalid certification regex"),
            Regex::new(r"(?i)\b(cloud\s+computing|devops|responsive\s+design)\b")
                .expect("Invalid certification regex"),
        ];

        let seniority_qualifiers: Vec<(Regex, &'static [&'static str])> = vec![
            (
                Regex::new(r"\b(senior|lead|principal|director|manager|head)\b")
                    .expect("Invalid seniority regex"),
                &["leadership", "team management", "strategic planning"],
            ),
            (
                Regex::new(r"\b(mid-level|intermediate|3\s*-\s*5\s*years)\b")
                    .expect("Invalid seniority regex"),
                &["project coordination", "problem solving"],
            ),
            (
                Regex::new(r"\b(expert|advanced|proficient)\b").expect("Invalid seniority regex"),
                &["technical expertise", "domain knowledge"],
            ),
        ];

        let soft_skill_clusters: Vec<(Regex, &'static [&'static str])> = vec![
            (
                Regex::new(r"\b(lead|team|manage|mentor|coach|supervise)\b")
                    .expect("Invalid soft-skill regex"),
                &["leadership", "teamwork", "communication"],
            ),
            (
                Regex::new(r"\b(solve|analyze|improve|optimize|troubleshoot)\b")
                    .expect("Invalid soft-skill regex"),
                &["problem solving", "analytical thinking", "continuous improvement"],
            ),
            (
                Regex::new(r"\b(collaborate|coordinate|partner|network)\b")
                    .expect("Invalid soft-skill regex"),
                &["collaboration", "stakeholder management", "networking"],
            ),
        ];

        Self {
            taxonomy,
            direct_matcher,
            all_skills,
            certification_patterns,
            seniority_qualifiers,
            soft_skill_clusters,
        }
    }

    /// Extract canonical skills from normalized text. Output is deduplicated
    /// case-insensitively with first-seen order preserved across all passes.
    pub fn extract(&self, normalized_text: &str, language: Language) -> Vec<String> {
        if normalized_text.trim().is_empty() {
            return Vec::new();
        }

        let text_lower = normalized_text.to_lowercase();
        let text_no_spaces: String = text_lower.split_whitespace().collect();

        // One Aho-Corasick sweep answers every direct-substring query.
        let direct_hits: HashSet<&str> = self
            .direct_matcher
            .find_overlapping_iter(&text_lower)
            .map(|m| self.all_skills[m.pattern().as_usize()])
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut skills: Vec<String> = Vec::new();
        let push = |skill: &str, seen: &mut HashSet<String>, skills: &mut Vec<String>| {
            let key = skill.to_lowercase();
            if seen.insert(key) {
                skills.push(skill.to_string());
            }
        };

        let categories = match language {
            Language::Indonesian => self.taxonomy.categories_for(true, true),
            Language::Mixed => self.taxonomy.categories_for(false, true),
            Language::English | Language::Unknown => self.taxonomy.categories_for(false, false),
        };

        for category in categories {
            for skill in category.skills {
                if self.matches_skill(skill, &text_lower, &text_no_spaces, &direct_hits) {
                    push(skill, &mut seen, &mut skills);
                }
            }
        }

        for pattern in &self.certification_patterns {
            for capture in pattern.captures_iter(&text_lower) {
                if let Some(name) = capture.get(1) {
                    let canonical = name
                        .as_str()
                        .split_whitespace()
                        .collect::<Vec<_>>()
                        .join(" ");
                    push(&canonical, &mut seen, &mut skills);
                }
            }
        }

        for (pattern, implied) in &self.seniority_qualifiers {
            if pattern.is_match(&text_lower) {
                for skill in *implied {
                    push(skill, &mut seen, &mut skills);
                }
            }
        }

        for (pattern, implied) in &self.soft_skill_clusters {
            if pattern.is_match(&text_lower) {
                for skill in *implied {
                    push(skill, &mut seen, &mut skills);
                }
            }
        }

        skills
    }

    /// Per-skill match policy, first success wins: direct substring,
    /// compound (every word present), abbreviation (<=4 chars against
    /// space-stripped text).
    fn matches_skill(
        &self,
        skill: &str,
        text_lower: &str,
        text_no_spaces: &str,
        direct_hits: &HashSet<&str>,
    ) -> bool {
        if direct_hits.contains(skill) {
            return true;
        }

        let skill_lower = skill.to_lowercase();
        let words: Vec<&str> = skill_lower.split_whitespace().collect();
        if words.len() > 1 && words.iter().all(|w| text_lower.contains(w)) {
            return true;
        }

        skill_lower.len() <= 4 && text_no_spaces.contains(&skill_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(Arc::new(SkillTaxonomy::builtin()))
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        let e = extractor();
        assert!(e.extract("", Language::Unknown).is_empty());
        assert!(e.extract("   ", Language::English).is_empty());
    }

    #[test]
    fn test_direct_matching() {
        let e = extractor();
        let skills = e.extract(
            "Built services in Python with React frontends deployed on AWS",
            Language::English,
        );
        assert!(skills.iter().any(|s| s == "python"));
        assert!(skills.iter().any(|s| s == "react"));
        assert!(skills.iter().any(|s| s == "aws"));
    }

    #[test]
    fn test_compound_matching_handles_reordering() {
        let e = extractor();
        // "machine" and "learning" both appear, but never adjacent.
        let skills = e.extract(
            "Applied learning systems to machine telemetry pipelines",
            Language::English,
        );
        assert!(skills.iter().any(|s| s == "machine learning"));
    }

    #[test]
    fn test_dedupe_is_case_insensitive_and_order_preserving() {
        let e = extractor();
        let skills = e.extract(
            "PYTHON and python and Python, plus sql and SQL",
            Language::English,
        );
        let python_count = skills.iter().filter(|s| s.eq_ignore_ascii_case("python")).count();
        assert_eq!(python_count, 1);
        let python_idx = skills.iter().position(|s| s == "python").unwrap();
        let sql_idx = skills.iter().position(|s| s == "sql").unwrap();
        assert!(python_idx < sql_idx);
    }

    #[test]
    fn test_locale_categories_scanned_first_for_indonesian() {
        let e = extractor();
        let skills = e.extract(
            "Berpengalaman dalam pemrograman dan python untuk perusahaan",
            Language::Indonesian,
        );
        let pemrograman = skills.iter().position(|s| s == "pemrograman").unwrap();
        let python = skills.iter().position(|s| s == "python").unwrap();
        assert!(pemrograman < python);
    }

    #[test]
    fn test_locale_categories_skipped_for_english() {
        let e = extractor();
        let skills = e.extract("Experienced in pemrograman and python", Language::English);
        assert!(!skills.iter().any(|s| s == "pemrograman"));
        assert!(skills.iter().any(|s| s == "python"));
    }

    #[test]
    fn test_seniority_implies_leadership_skills() {
        let e = extractor();
        let skills = e.extract(
            "Senior backend specialist running release reviews",
            Language::English,
        );
        assert!(skills.iter().any(|s| s == "leadership"));
        assert!(skills.iter().any(|s| s == "strategic planning"));
    }

    #[test]
    fn test_soft_skill_verb_clusters() {
        let e = extractor();
        let skills = e.extract(
            "Worked to troubleshoot failing batch jobs",
            Language::English,
        );
        assert!(skills.iter().any(|s| s == "problem solving"));
        assert!(skills.iter().any(|s| s == "analytical thinking"));
    }

    #[test]
    fn test_certification_patterns() {
        let e = extractor();
        let skills = e.extract(
            "Holds PMP and Scrum Master certification, reports via Google Analytics",
            Language::English,
        );
        assert!(skills.iter().any(|s| s == "pmp"));
        assert!(skills.iter().any(|s| s == "scrum master"));
        assert!(skills.iter().any(|s| s == "google analytics"));
    }
}
