//! Resume intelligence scoring engine
//!
//! A rule-based pipeline that extracts structured signal from resume text and
//! scores it against recruiting heuristics and job requisitions. Stages run
//! strictly downstream: raw text -> normalized text/language -> skills and
//! sections -> scores -> industry classification -> job matching -> insights.
//! Every stage is a pure function over immutable inputs; the shared
//! [`taxonomy::SkillTaxonomy`] is loaded once and never mutated.

pub mod config;
pub mod error;
pub mod insights;
pub mod matching;
pub mod processing;
pub mod taxonomy;

pub use config::ScoringConfig;
pub use error::{ResumeIntelError, Result};
pub use insights::{Insight, InsightGenerator, InsightKind};
pub use matching::matcher::{JobMatcher, MatchLevel, MatchResult, Recommendation};
pub use matching::requirements::{JobPosting, JobRequirement};
pub use processing::industry::IndustryBenchmark;
pub use processing::profile::{ExtractedProfile, ProfileAnalyzer};
pub use processing::scorer::ScoreBreakdown;
pub use processing::structure::{ContactInfo, EducationLevel, ExperienceLevel};
pub use processing::text_processor::Language;
pub use taxonomy::SkillTaxonomy;
