use crate::catalog::config::DEFAULT_DECAY_BASE;
use crate::catalog::{PathwayDefinition, PathwayStep};
use crate::evidence::NormalizedEvidence;
use crate::types::{SkillId, StepScore, Track, TrackKind};

use super::matcher::match_step;

/// Per-step decay applied when folding step completions into a pathway
/// overall score. Earlier steps count more toward readiness to start;
/// later steps reward depth.
pub trait DecaySchedule {
    fn decay(&self, order: usize) -> f64;
}

/// `decay(k) = base / (base + k)`; the default base of 1.0 gives the
/// 1, 1/2, 1/3, ... series over zero-indexed step order.
#[derive(Debug, Clone, Copy)]
pub struct HarmonicDecay {
    base: f64,
}

impl HarmonicDecay {
    pub fn new(base: f64) -> Self {
        Self { base }
    }
}

impl Default for HarmonicDecay {
    fn default() -> Self {
        Self::new(DEFAULT_DECAY_BASE)
    }
}

impl DecaySchedule for HarmonicDecay {
    fn decay(&self, order: usize) -> f64 {
        self.base / (self.base + order as f64)
    }
}

/// `completion = 100 · Σ verified weight / Σ required weight`. A step with
/// no required skills is complete by definition.
pub fn step_completion(step: &PathwayStep, verified: &[SkillId]) -> f64 {
    let total = step.total_weight();
    if step.skills.is_empty() || total <= 0.0 {
        return 100.0;
    }

    let verified_weight: f64 = step
        .skills
        .iter()
        .filter(|required| verified.contains(&required.skill))
        .map(|required| required.weight)
        .sum();

    100.0 * verified_weight / total
}

/// Score a full pathway against normalized evidence, producing a track.
pub fn score_pathway<D: DecaySchedule>(
    pathway: &PathwayDefinition,
    evidence: &NormalizedEvidence,
    tau: f64,
    decay: &D,
    kind: TrackKind,
) -> Track {
    let mut steps = Vec::with_capacity(pathway.steps.len());
    let mut weighted_sum = 0.0;
    let mut decay_sum = 0.0;

    for step in &pathway.steps {
        let matched = match_step(evidence, step, tau);
        let completion = step_completion(step, &matched.verified);

        let weight = decay.decay(step.order);
        weighted_sum += completion * weight;
        decay_sum += weight;

        steps.push(StepScore {
            name: step.name.clone(),
            order: step.order,
            completion,
            verified: matched.verified,
            missing: matched.missing,
        });
    }

    // decay_sum is positive for any valid catalog (steps exist, decay > 0);
    // the clamp only absorbs last-ulp drift from the weighted fold
    let overall_score = if decay_sum > 0.0 {
        (weighted_sum / decay_sum).clamp(0.0, 100.0)
    } else {
        100.0
    };
    debug_assert!(
        (0.0..=100.0).contains(&overall_score),
        "overall {overall_score} out of range [0, 100]"
    );

    Track {
        kind,
        role: pathway.role.clone(),
        domain: pathway.domain.clone(),
        overall_score,
        steps,
    }
}
