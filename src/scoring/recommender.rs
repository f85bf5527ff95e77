use crate::catalog::{Catalog, RequiredSkill};
use crate::types::{Recommendation, Track};

/// Select the single highest-leverage next action.
///
/// Targets the primary track; a complete (or absent) primary falls through
/// to the top-ranked secondary, and "no action" is reported when both are
/// complete. Greedy by construction: it unblocks the nearest gate rather
/// than computing the globally cheapest path to 100%.
pub fn next_action(
    catalog: &Catalog,
    primary: Option<&Track>,
    secondaries: &[Track],
) -> Option<Recommendation> {
    let target = match primary {
        Some(track) if !track.is_complete() => Some(track),
        _ => secondaries.first().filter(|track| !track.is_complete()),
    };

    recommend_for(catalog, target?)
}

/// Lowest-order incomplete step; within it, the missing skill with the
/// highest weight, ties broken by skill id.
fn recommend_for(catalog: &Catalog, track: &Track) -> Option<Recommendation> {
    let step = track.steps.iter().find(|step| step.completion < 100.0)?;

    let pathway = catalog.pathway_by_role(&track.role)?;
    let definition = pathway.steps.get(step.order)?;

    let mut best: Option<&RequiredSkill> = None;
    for required in &definition.skills {
        if !step.missing.contains(&required.skill) {
            continue;
        }
        best = match best {
            None => Some(required),
            Some(current)
                if required.weight > current.weight
                    || (required.weight == current.weight && required.skill < current.skill) =>
            {
                Some(required)
            }
            Some(current) => Some(current),
        };
    }
    let required = best?;

    Some(Recommendation {
        track: track.kind,
        role: track.role.clone(),
        step: step.name.clone(),
        skill: required.skill.clone(),
        rationale: format!(
            "Complete {} to advance {} in {}",
            required.skill.as_str(),
            step.name,
            track.role
        ),
    })
}
