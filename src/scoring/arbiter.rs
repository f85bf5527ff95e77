use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::catalog::{Catalog, PathwayDefinition};
use crate::evidence::{EvidenceSource, NormalizedEvidence};
use crate::types::identifiers::normalize_token;
use crate::types::{AcademicAnchor, Track};

/// Map the academic anchor onto exactly one pathway.
///
/// The branch is the stronger signal; the degree text is the fallback.
/// Candidates are examined in (domain priority, role) order — the
/// catalog's storage order — so the choice is deterministic.
pub(crate) fn resolve_primary<'a>(
    catalog: &'a Catalog,
    anchor: &AcademicAnchor,
) -> Option<&'a PathwayDefinition> {
    let branch = normalize_token(&anchor.branch);
    let degree = normalize_token(&anchor.degree);

    catalog
        .pathways()
        .iter()
        .find(|pathway| pathway.matches_anchor(&branch))
        .or_else(|| {
            catalog
                .pathways()
                .iter()
                .find(|pathway| pathway.matches_anchor(&degree))
        })
}

/// Pathways eligible as secondary tracks: those whose domain overlaps the
/// declared domains of any GitHub-derived skill, excluding the primary
/// role itself.
pub(crate) fn secondary_candidates<'a>(
    catalog: &'a Catalog,
    evidence: &NormalizedEvidence,
    primary_role: Option<&str>,
) -> Vec<&'a PathwayDefinition> {
    let github_domains: BTreeSet<&str> = evidence
        .skills_from(EvidenceSource::Github)
        .flat_map(|skill| catalog.taxonomy().domains_of(skill))
        .map(String::as_str)
        .collect();

    catalog
        .pathways()
        .iter()
        .filter(|pathway| github_domains.contains(pathway.domain.as_str()))
        .filter(|pathway| primary_role != Some(pathway.role.as_str()))
        .collect()
}

/// Drop candidates below the admission threshold (boundary inclusive) and
/// order the remainder: overall score descending, then declared domain
/// priority, then role name.
pub(crate) fn admit_and_rank(
    catalog: &Catalog,
    mut tracks: Vec<Track>,
    admission_threshold: f64,
) -> Vec<Track> {
    tracks.retain(|track| track.overall_score >= admission_threshold);

    tracks.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                catalog
                    .domain_priority(&a.domain)
                    .cmp(&catalog.domain_priority(&b.domain))
            })
            .then_with(|| a.role.cmp(&b.role))
    });

    tracks
}
