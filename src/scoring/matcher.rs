use crate::catalog::PathwayStep;
use crate::evidence::NormalizedEvidence;
use crate::types::SkillId;

/// Verified/missing partition of one step's required skills.
#[derive(Debug, Clone, PartialEq)]
pub struct StepMatch {
    pub verified: Vec<SkillId>,
    pub missing: Vec<SkillId>,
}

/// Partition a step's required skills by merged evidence confidence.
///
/// A skill is verified iff its confidence reaches `tau`; the boundary is
/// inclusive. Pure and stateless: identical evidence and step always yield
/// the identical partition, with both sides sorted.
pub fn match_step(evidence: &NormalizedEvidence, step: &PathwayStep, tau: f64) -> StepMatch {
    let mut verified = Vec::new();
    let mut missing = Vec::new();

    for required in &step.skills {
        match evidence.confidence(&required.skill) {
            Some(confidence) if confidence >= tau => verified.push(required.skill.clone()),
            _ => missing.push(required.skill.clone()),
        }
    }

    verified.sort();
    missing.sort();

    StepMatch { verified, missing }
}
