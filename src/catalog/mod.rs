pub mod config;
pub mod handle;
pub mod loader;
pub mod pathway;
pub mod taxonomy;

pub use config::{
    CatalogConfig, EngineConfig, EngineOverrides, PathwayEntry, RequiredSkillEntry, SkillEntry,
    StepEntry, DEFAULT_ADMISSION_THRESHOLD, DEFAULT_DECAY_BASE, DEFAULT_VERIFICATION_THRESHOLD,
};
pub use handle::CatalogHandle;
pub use loader::{Catalog, CatalogError};
pub use pathway::{PathwayDefinition, PathwayStep, RequiredSkill};
pub use taxonomy::{SkillRecord, SkillTaxonomy};
