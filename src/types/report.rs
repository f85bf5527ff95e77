use serde::{Deserialize, Serialize};

use crate::types::identifiers::SkillId;

/// The academic discipline that anchors a student's Primary pathway.
///
/// Created once per submission and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicAnchor {
    pub degree: String,
    pub branch: String,
}

impl AcademicAnchor {
    pub fn new(degree: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            degree: degree.into(),
            branch: branch.into(),
        }
    }
}

/// Whether a track was selected by the academic anchor or admitted from
/// project evidence. One shared `Track` shape carries both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Primary,
    Secondary,
}

/// Per-step scoring breakdown returned in the output.
///
/// Skill vectors are sorted so serialization is byte-deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepScore {
    pub name: String,
    pub order: usize,
    pub completion: f64,
    pub verified: Vec<SkillId>,
    pub missing: Vec<SkillId>,
}

/// A scored instantiation of a pathway for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub kind: TrackKind,
    pub role: String,
    pub domain: String,
    pub overall_score: f64,
    pub steps: Vec<StepScore>,
}

/// Outcome of mapping the academic anchor onto the catalog.
///
/// An unmapped anchor is a recoverable, per-request condition: it is
/// represented here rather than returned as an error, and secondary tracks
/// still compute normally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnchorStatus {
    Mapped { role: String },
    Unmapped,
}

/// The single highest-leverage next action for the student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub track: TrackKind,
    pub role: String,
    pub step: String,
    pub skill: SkillId,
    pub rationale: String,
}

/// Metadata describing how the report was produced: which catalog, which
/// thresholds, and what evidence fell through resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentMetadata {
    pub catalog_version: String,
    pub verification_threshold: f64,
    pub admission_threshold: f64,

    pub evidence_considered: usize,
    pub unmatched_evidence: usize,
    pub unmatched_tokens: Vec<String>,
}

/// The final result of a readiness assessment.
///
/// Recomputed in full on every request; secondaries are ordered by
/// descending overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub anchor: AnchorStatus,
    pub primary: Option<Track>,
    pub secondaries: Vec<Track>,
    pub next_action: Option<Recommendation>,
    pub assessment: AssessmentMetadata,
}

impl Track {
    /// Whether every step of this track is fully complete. Tolerates the
    /// last-ulp drift of the decayed fold.
    pub fn is_complete(&self) -> bool {
        self.overall_score >= 100.0 - 1e-9
    }
}
