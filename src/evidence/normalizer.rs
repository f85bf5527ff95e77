use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::SkillTaxonomy;
use crate::types::SkillId;

/// Where a piece of evidence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceSource {
    Resume,
    Github,
}

/// A raw evidence triple produced by an external collaborator (resume
/// extraction, project-signal inference). The engine never mutates the raw
/// token; confidence is clamped into [0, 1] during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub token: String,
    pub source: EvidenceSource,
    pub confidence: f64,
}

impl EvidenceRecord {
    pub fn new(token: impl Into<String>, source: EvidenceSource, confidence: f64) -> Self {
        Self {
            token: token.into(),
            source,
            confidence,
        }
    }
}

/// Merged evidence for one canonical skill: the best single signal and the
/// set of sources that asserted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEvidence {
    pub confidence: f64,
    pub sources: BTreeSet<EvidenceSource>,
}

/// Canonicalized evidence for one submission.
///
/// Tokens that resolve to no skill land in `unmatched`: counted and
/// surfaced in the report, never silently discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedEvidence {
    skills: BTreeMap<SkillId, SkillEvidence>,
    unmatched: BTreeSet<String>,
}

impl NormalizedEvidence {
    /// Merged confidence for a skill, if any evidence asserted it.
    pub fn confidence(&self, skill: &SkillId) -> Option<f64> {
        self.skills.get(skill).map(|evidence| evidence.confidence)
    }

    pub fn skills(&self) -> impl Iterator<Item = (&SkillId, &SkillEvidence)> {
        self.skills.iter()
    }

    /// Skills asserted by a given source.
    pub fn skills_from(&self, source: EvidenceSource) -> impl Iterator<Item = &SkillId> {
        self.skills
            .iter()
            .filter(move |(_, evidence)| evidence.sources.contains(&source))
            .map(|(skill, _)| skill)
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// Distinct unresolvable tokens, sorted.
    pub fn unmatched_tokens(&self) -> Vec<String> {
        self.unmatched.iter().cloned().collect()
    }

    /// Merge two evidence sets. Confidence merges by maximum: several weak
    /// signals never fabricate confidence beyond the best single one.
    /// Commutative, associative, and idempotent, so partial sets computed
    /// in any order merge to the same result.
    pub fn merge(mut self, other: NormalizedEvidence) -> NormalizedEvidence {
        for (skill, incoming) in other.skills {
            match self.skills.get_mut(&skill) {
                Some(existing) => {
                    existing.confidence = existing.confidence.max(incoming.confidence);
                    existing.sources.extend(incoming.sources);
                }
                None => {
                    self.skills.insert(skill, incoming);
                }
            }
        }
        self.unmatched.extend(other.unmatched);
        self
    }
}

/// Canonicalize raw evidence records against the skill taxonomy.
pub fn normalize(records: &[EvidenceRecord], taxonomy: &SkillTaxonomy) -> NormalizedEvidence {
    let mut out = NormalizedEvidence::default();

    for record in records {
        match taxonomy.resolve(&record.token) {
            Some(skill) => {
                let confidence = record.confidence.clamp(0.0, 1.0);
                let entry = out.skills.entry(skill).or_insert_with(|| SkillEvidence {
                    confidence: 0.0,
                    sources: BTreeSet::new(),
                });
                entry.confidence = entry.confidence.max(confidence);
                entry.sources.insert(record.source);
            }
            None => {
                tracing::debug!(token = %record.token, "evidence token resolved to no skill");
                out.unmatched.insert(record.token.clone());
            }
        }
    }

    out
}
