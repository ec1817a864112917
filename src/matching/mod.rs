//! Job compatibility matching

pub mod matcher;
pub mod requirements;

pub use matcher::{JobMatcher, MatchLevel, MatchResult, Priority, Recommendation, RecommendationKind};
pub use requirements::{JobPosting, JobRequirement, RequirementExtractor};
