//! Configuration for the scoring engine
//!
//! All thresholds the pipeline depends on live here so they can be tuned
//! without touching the algorithms. The defaults reproduce the engine's
//! documented behavior; several of them (the 0.7 skill-similarity threshold,
//! the industry-score divisor of 10) are inherited constants kept for
//! behavioral compatibility rather than derived values.

use crate::error::{ResumeIntelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub matching: MatchingConfig,
    pub industry: IndustryConfig,
    pub language: LanguageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum string similarity for a fuzzy skill match.
    pub skill_similarity_threshold: f64,
    /// Minimum token similarity for a fuzzy location match.
    pub location_similarity_threshold: f64,
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub location_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryConfig {
    /// Raw keyword scores are divided by this before clamping to [0, 1].
    pub confidence_divisor: f64,
    pub essential_weight: f64,
    pub preferred_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Indicator-word percentage above which text is Indonesian.
    pub indonesian_threshold: f64,
    /// Indicator-word percentage above which text is mixed-language.
    pub mixed_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            matching: MatchingConfig {
                skill_similarity_threshold: 0.7,
                location_similarity_threshold: 0.8,
                skill_weight: 0.6,
                experience_weight: 0.3,
                location_weight: 0.1,
            },
            industry: IndustryConfig {
                confidence_divisor: 10.0,
                essential_weight: 0.7,
                preferred_weight: 0.3,
            },
            language: LanguageConfig {
                indonesian_threshold: 5.0,
                mixed_threshold: 1.0,
            },
        }
    }
}

impl ScoringConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ResumeIntelError::Configuration(format!("Failed to read config: {}", e)))?;
        toml::from_str(&content)
            .map_err(|e| ResumeIntelError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeIntelError::Configuration(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)
            .map_err(|e| ResumeIntelError::Configuration(format!("Failed to write config: {}", e)))?;
        Ok(())
    }
}
