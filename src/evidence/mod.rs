pub mod normalizer;

pub use normalizer::{
    normalize, EvidenceRecord, EvidenceSource, NormalizedEvidence, SkillEvidence,
};
