//! Text processing and profile extraction pipeline

pub mod industry;
pub mod profile;
pub mod scorer;
pub mod skill_extractor;
pub mod structure;
pub mod text_processor;

pub use industry::{IndustryBenchmark, IndustryClassifier};
pub use profile::{ExtractedProfile, ProfileAnalyzer};
pub use scorer::{ProfileScorer, ScoreBreakdown};
pub use skill_extractor::SkillExtractor;
pub use structure::{
    ContactInfo, EducationLevel, ExperienceLevel, SectionTag, StructureAnalyzer, TextStructure,
};
pub use text_processor::{Language, TextProcessor};
