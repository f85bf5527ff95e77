pub mod identifiers;
pub mod report;

pub use identifiers::{CatalogVersion, SkillId, SkillIdError};
pub use report::{
    AcademicAnchor, AnchorStatus, AssessmentMetadata, ReadinessReport, Recommendation, StepScore,
    Track, TrackKind,
};
