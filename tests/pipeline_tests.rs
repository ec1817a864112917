//! End-to-end pipeline scenarios against the public API.

use resume_intel::processing::structure::ExperienceLevel;
use resume_intel::processing::text_processor::Language;
use resume_intel::{
    InsightGenerator, JobMatcher, JobPosting, ProfileAnalyzer, ScoringConfig, SkillTaxonomy,
};
use std::sync::Arc;

fn setup() -> (ProfileAnalyzer, JobMatcher, InsightGenerator) {
    let _ = env_logger::builder().is_test(true).try_init();
    let taxonomy = Arc::new(SkillTaxonomy::builtin());
    let config = ScoringConfig::default();
    (
        ProfileAnalyzer::new(Arc::clone(&taxonomy), config.clone()),
        JobMatcher::new(config.matching),
        InsightGenerator::new(taxonomy),
    )
}

fn posting(position: &str, location: &str, requirements: &str) -> JobPosting {
    JobPosting {
        position: position.to_string(),
        company: "Acme Corp".to_string(),
        location: location.to_string(),
        requirements: requirements.to_string(),
    }
}

const RESUME: &str = "Sarah Connor\n\
    Software Engineer\n\
    sarah.connor@example.com | 555-867-5309\n\n\
    Summary: Engineer with 6 years of experience shipping web platforms.\n\n\
    Experience: Designed and developed Python services, React frontends and \
    AWS infrastructure. Led deployments, improved monitoring, optimized costs.\n\n\
    Skills: Python, React, AWS, SQL, Docker\n\n\
    Education: Bachelor of Computer Science, State University";

#[test]
fn empty_input_degrades_to_empty_results() {
    let (analyzer, _, _) = setup();
    let profile = analyzer.analyze("");
    assert_eq!(profile.language, Language::Unknown);
    assert!(profile.skills.is_empty());
    let scores = analyzer.score(&profile);
    assert_eq!(scores.ats_score, 0.0);
    assert_eq!(scores.completeness_score, 0.0);
}

#[test]
fn sectioned_resume_with_contact_earns_ats_credit() {
    let (analyzer, _, _) = setup();
    let profile = analyzer.analyze(RESUME);

    for expected in ["python", "react", "aws"] {
        assert!(
            profile.skills.iter().any(|s| s == expected),
            "missing {} in {:?}",
            expected,
            profile.skills
        );
    }
    assert!(profile.contact.email.is_some());
    assert!(profile.structure.sections.len() >= 3);

    let scores = analyzer.score(&profile);
    assert!(scores.ats_score > 30.0, "ats was {}", scores.ats_score);
    assert!(scores.ats_score <= 100.0);
    assert!((0.0..=1.0).contains(&scores.confidence_score));
}

#[test]
fn skill_score_reflects_exact_match_fraction() {
    let (analyzer, matcher, _) = setup();
    let mut profile = analyzer.analyze(RESUME);
    profile.skills = vec!["python".to_string(), "aws".to_string()];

    let job = posting("Backend Engineer", "", "Python, Django and AWS required");
    let result = matcher.match_job(&profile, None, &job).unwrap();

    // 2 of 3 required skills exact: 0.8 * (2/3) * 100.
    assert!((result.skill_score - 53.3).abs() < 0.5, "got {}", result.skill_score);
    assert!(result.matching_skills.contains(&"python".to_string()));
    assert!(result.matching_skills.contains(&"aws".to_string()));
    assert_eq!(result.missing_skills, vec!["django".to_string()]);
}

#[test]
fn match_partitions_required_skills() {
    let (analyzer, matcher, _) = setup();
    let profile = analyzer.analyze(RESUME);
    let job = posting(
        "Platform Engineer",
        "Jakarta",
        "Needs python, kubernetes, terraform and sql",
    );
    let result = matcher.match_job(&profile, Some("Bandung"), &job).unwrap();

    let mut union: Vec<String> = result
        .matching_skills
        .iter()
        .chain(result.missing_skills.iter())
        .cloned()
        .collect();
    union.sort();
    let mut required: Vec<String> = result
        .requirements
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    required.sort();
    assert_eq!(union, required);
    for skill in &result.matching_skills {
        assert!(!result.missing_skills.contains(skill));
    }
}

#[test]
fn senior_candidate_overqualifies_for_junior_role() {
    let (analyzer, matcher, _) = setup();
    let profile = analyzer.analyze(RESUME);
    assert_eq!(profile.experience_level, ExperienceLevel::Senior);

    let job = posting(
        "Engineer",
        "",
        "Entry level role for a fresh graduate, python a plus",
    );
    let result = matcher.match_job(&profile, None, &job).unwrap();
    assert_eq!(result.requirements.experience_required, ExperienceLevel::Junior);
    assert_eq!(result.experience_score, 100.0);
}

#[test]
fn batch_output_is_sorted_and_stable_on_ties() {
    let (analyzer, matcher, _) = setup();
    let profile = analyzer.analyze(RESUME);

    let jobs = vec![
        posting("First", "", "python and sql"),
        posting("Second", "", "python and sql"),
        posting("Third", "", "tableau statistics power bi"),
    ];
    let results = matcher.batch_match(&profile, None, &jobs);
    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].overall_score >= pair[1].overall_score);
    }
    // Identical postings tie and keep input order.
    assert_eq!(results[0].requirements.position, "First");
    assert_eq!(results[1].requirements.position, "Second");
}

#[test]
fn batch_tolerates_failing_jobs() {
    let (analyzer, matcher, _) = setup();
    let profile = analyzer.analyze(RESUME);

    let jobs = vec![
        posting("Good Job", "", "python and react"),
        JobPosting::default(),
        posting("Another Good Job", "", "sql and excel"),
    ];
    let results = matcher.batch_match(&profile, None, &jobs);
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|r| r.requirements.position != ""));
}

#[test]
fn pipeline_is_deterministic() {
    let (analyzer, matcher, _) = setup();
    let first = analyzer.analyze(RESUME);
    let second = analyzer.analyze(RESUME);
    assert_eq!(first.skills, second.skills);
    assert_eq!(first.industry, second.industry);

    let job = posting("Engineer", "Jakarta", "python, sql, docker");
    let r1 = matcher.match_job(&first, None, &job).unwrap();
    let r2 = matcher.match_job(&second, None, &job).unwrap();
    assert_eq!(r1.overall_score, r2.overall_score);
    assert_eq!(r1.matching_skills, r2.matching_skills);
    assert_eq!(r1.recommendations.len(), r2.recommendations.len());
}

#[test]
fn insights_cover_profile_and_history() {
    let (analyzer, matcher, generator) = setup();
    let profile = analyzer.analyze(RESUME);
    let scores = analyzer.score(&profile);

    let job = posting("Data Engineer", "", "python, kubernetes and machine learning");
    let result = matcher.match_job(&profile, None, &job).unwrap();
    let insights = generator.generate(&profile, &scores, &[result.requirements]);

    assert!(!insights.is_empty());
    for insight in &insights {
        assert!((0.0..=1.0).contains(&insight.confidence));
        assert!((1..=5).contains(&insight.priority));
    }
    // Sorted by priority descending.
    for pair in insights.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
    }
}

#[test]
fn results_serialize_with_stable_field_names() {
    let (analyzer, matcher, _) = setup();
    let profile = analyzer.analyze(RESUME);
    let job = posting("Engineer", "Jakarta", "python and sql");
    let result = matcher.match_job(&profile, Some("Jakarta"), &job).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    for field in [
        "overall_score",
        "skill_score",
        "experience_score",
        "location_score",
        "matching_skills",
        "missing_skills",
        "additional_skills",
        "match_level",
        "recommendations",
        "analyzed_at",
    ] {
        assert!(json.get(field).is_some(), "missing field {}", field);
    }

    let profile_json = serde_json::to_value(&profile).unwrap();
    assert!(profile_json.get("normalized_text").is_some());
    assert!(profile_json.get("industry_confidence").is_some());
}
