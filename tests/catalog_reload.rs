use pathway_core::catalog::{
    Catalog, CatalogConfig, CatalogHandle, PathwayEntry, RequiredSkillEntry, SkillEntry, StepEntry,
};
use pathway_core::evidence::{EvidenceRecord, EvidenceSource};
use pathway_core::scoring::ReadinessEngine;
use pathway_core::types::AcademicAnchor;

fn config(role: &str) -> CatalogConfig {
    CatalogConfig {
        domains: vec!["software".to_string()],
        skills: vec![SkillEntry {
            id: "python".to_string(),
            aliases: vec![],
            domains: vec!["software".to_string()],
        }],
        pathways: vec![PathwayEntry {
            role: role.to_string(),
            domain: "software".to_string(),
            anchors: vec!["cse".to_string()],
            steps: vec![StepEntry {
                name: "Foundations".to_string(),
                skills: vec![RequiredSkillEntry {
                    skill: "python".to_string(),
                    weight: 1.0,
                }],
            }],
        }],
        engine: None,
    }
}

#[test]
fn swap_installs_the_new_catalog_for_later_requests() {
    let handle = CatalogHandle::new(Catalog::load(&config("Backend Engineer")).unwrap());
    let old_version = handle.current().version().clone();

    handle.swap(Catalog::load(&config("Platform Engineer")).unwrap());

    let current = handle.current();
    assert_ne!(*current.version(), old_version);
    assert_eq!(current.pathways()[0].role, "Platform Engineer");
}

#[test]
fn in_flight_requests_keep_the_catalog_they_started_with() {
    let handle = CatalogHandle::new(Catalog::load(&config("Backend Engineer")).unwrap());

    // an assessment starts against the current catalog...
    let in_flight = handle.current();

    // ...and a reload lands mid-run
    handle.swap(Catalog::load(&config("Platform Engineer")).unwrap());

    let engine = ReadinessEngine::from_catalog(&in_flight);
    let report = engine.assess(
        &in_flight,
        &AcademicAnchor::new("B.Tech", "CSE"),
        &[EvidenceRecord::new("python", EvidenceSource::Resume, 0.9)],
    );

    // the old catalog stays fully usable and internally consistent
    let primary = report.primary.unwrap();
    assert_eq!(primary.role, "Backend Engineer");
    assert_eq!(report.assessment.catalog_version, in_flight.version().as_str());

    // new requests see the swapped catalog
    let fresh = handle.current();
    assert_eq!(fresh.pathways()[0].role, "Platform Engineer");
}

#[test]
fn swap_returns_the_previous_catalog() {
    let handle = CatalogHandle::new(Catalog::load(&config("Backend Engineer")).unwrap());
    let old_version = handle.current().version().clone();

    let previous = handle.swap(Catalog::load(&config("Platform Engineer")).unwrap());
    assert_eq!(*previous.version(), old_version);
}
