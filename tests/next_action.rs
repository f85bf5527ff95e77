use pathway_core::catalog::{
    Catalog, CatalogConfig, PathwayEntry, RequiredSkillEntry, SkillEntry, StepEntry,
};
use pathway_core::evidence::{EvidenceRecord, EvidenceSource};
use pathway_core::scoring::ReadinessEngine;
use pathway_core::types::{AcademicAnchor, TrackKind};

fn skill(id: &str, domains: &[&str]) -> SkillEntry {
    SkillEntry {
        id: id.to_string(),
        aliases: vec![],
        domains: domains.iter().map(|d| d.to_string()).collect(),
    }
}

fn required(skill: &str, weight: f64) -> RequiredSkillEntry {
    RequiredSkillEntry {
        skill: skill.to_string(),
        weight,
    }
}

fn step(name: &str, skills: Vec<RequiredSkillEntry>) -> StepEntry {
    StepEntry {
        name: name.to_string(),
        skills,
    }
}

fn pathway(role: &str, domain: &str, anchors: &[&str], steps: Vec<StepEntry>) -> PathwayEntry {
    PathwayEntry {
        role: role.to_string(),
        domain: domain.to_string(),
        anchors: anchors.iter().map(|a| a.to_string()).collect(),
        steps,
    }
}

fn config() -> CatalogConfig {
    CatalogConfig {
        domains: vec!["software".to_string()],
        skills: vec![
            skill("python", &["software"]),
            skill("git", &["software"]),
            skill("sql", &["software"]),
            skill("rest", &["software"]),
            skill("docker", &["software"]),
            skill("terraform", &["software"]),
            skill("monitoring", &["software"]),
        ],
        pathways: vec![pathway(
            "Backend Engineer",
            "software",
            &["cse"],
            vec![
                step(
                    "Foundations",
                    vec![
                        required("python", 2.0),
                        required("git", 2.0),
                        required("sql", 1.0),
                    ],
                ),
                step("Services", vec![required("rest", 2.0), required("docker", 2.0)]),
            ],
        )],
        engine: None,
    }
}

fn anchor() -> AcademicAnchor {
    AcademicAnchor::new("B.Tech", "CSE")
}

fn record(token: &str, source: EvidenceSource, confidence: f64) -> EvidenceRecord {
    EvidenceRecord::new(token, source, confidence)
}

#[test]
fn targets_the_lowest_incomplete_step() {
    let catalog = Catalog::load(&config()).unwrap();
    let engine = ReadinessEngine::from_catalog(&catalog);

    // step 1 fully verified, step 2 untouched
    let evidence = vec![
        record("python", EvidenceSource::Resume, 0.9),
        record("git", EvidenceSource::Resume, 0.9),
        record("sql", EvidenceSource::Resume, 0.9),
    ];
    let report = engine.assess(&catalog, &anchor(), &evidence);

    let action = report.next_action.expect("incomplete primary");
    assert_eq!(action.track, TrackKind::Primary);
    assert_eq!(action.step, "Services");
    // rest and docker tie at 2.0; lexicographic order decides
    assert_eq!(action.skill.as_str(), "docker");
}

#[test]
fn highest_weight_missing_skill_wins_within_the_step() {
    let catalog = Catalog::load(&config()).unwrap();
    let engine = ReadinessEngine::from_catalog(&catalog);

    // python verified; git (2.0) outweighs sql (1.0) among the missing
    let evidence = vec![record("python", EvidenceSource::Resume, 0.9)];
    let report = engine.assess(&catalog, &anchor(), &evidence);

    let action = report.next_action.unwrap();
    assert_eq!(action.step, "Foundations");
    assert_eq!(action.skill.as_str(), "git");
}

#[test]
fn rationale_follows_the_template() {
    let catalog = Catalog::load(&config()).unwrap();
    let engine = ReadinessEngine::from_catalog(&catalog);

    let evidence = vec![record("python", EvidenceSource::Resume, 0.9)];
    let report = engine.assess(&catalog, &anchor(), &evidence);

    let action = report.next_action.unwrap();
    assert_eq!(
        action.rationale,
        "Complete git to advance Foundations in Backend Engineer"
    );
}

#[test]
fn complete_primary_falls_through_to_the_top_secondary() {
    let mut config = config();
    config.pathways.push(pathway(
        "Platform Engineer",
        "software",
        &[],
        vec![step(
            "Infrastructure",
            vec![required("docker", 2.0), required("terraform", 2.0)],
        )],
    ));

    let catalog = Catalog::load(&config).unwrap();
    let engine = ReadinessEngine::from_catalog(&catalog);

    let evidence = vec![
        record("python", EvidenceSource::Resume, 1.0),
        record("git", EvidenceSource::Resume, 1.0),
        record("sql", EvidenceSource::Resume, 1.0),
        record("rest", EvidenceSource::Resume, 1.0),
        record("docker", EvidenceSource::Github, 1.0),
    ];
    let report = engine.assess(&catalog, &anchor(), &evidence);

    let primary = report.primary.as_ref().unwrap();
    assert!(primary.is_complete());

    let action = report.next_action.expect("secondary has a gap");
    assert_eq!(action.track, TrackKind::Secondary);
    assert_eq!(action.role, "Platform Engineer");
    assert_eq!(action.step, "Infrastructure");
    assert_eq!(action.skill.as_str(), "terraform");
}

#[test]
fn no_action_when_primary_and_top_secondary_are_complete() {
    let mut config = config();
    config.pathways.push(pathway(
        "Platform Engineer",
        "software",
        &[],
        vec![step("Infrastructure", vec![required("docker", 2.0)])],
    ));

    let catalog = Catalog::load(&config).unwrap();
    let engine = ReadinessEngine::from_catalog(&catalog);

    let evidence = vec![
        record("python", EvidenceSource::Resume, 1.0),
        record("git", EvidenceSource::Resume, 1.0),
        record("sql", EvidenceSource::Resume, 1.0),
        record("rest", EvidenceSource::Resume, 1.0),
        record("docker", EvidenceSource::Github, 1.0),
    ];
    let report = engine.assess(&catalog, &anchor(), &evidence);

    assert!(report.primary.as_ref().unwrap().is_complete());
    assert!(report.secondaries[0].is_complete());
    assert!(report.next_action.is_none());
}

#[test]
fn absent_primary_falls_through_to_the_top_secondary() {
    let catalog = Catalog::load(&config()).unwrap();
    let engine = ReadinessEngine::from_catalog(&catalog);

    let evidence = vec![
        record("python", EvidenceSource::Github, 0.9),
        record("git", EvidenceSource::Github, 0.9),
    ];
    let report = engine.assess(
        &catalog,
        &AcademicAnchor::new("B.A. History", "humanities"),
        &evidence,
    );

    assert!(report.primary.is_none());
    let action = report.next_action.expect("secondary has a gap");
    assert_eq!(action.track, TrackKind::Secondary);
    assert_eq!(action.role, "Backend Engineer");
    assert_eq!(action.skill.as_str(), "sql");
}
