use serde::{Deserialize, Serialize};

/// Default confidence a skill's evidence must reach to count as verified.
pub const DEFAULT_VERIFICATION_THRESHOLD: f64 = 0.5;
/// Default minimum overall score for a secondary track to be admitted.
pub const DEFAULT_ADMISSION_THRESHOLD: f64 = 30.0;
/// Default base of the per-step order decay.
pub const DEFAULT_DECAY_BASE: f64 = 1.0;

/// Declarative catalog document: the skill taxonomy, the domain priority
/// order, and domains → roles → ordered steps → required-skill/weight pairs.
///
/// Schema-validated by [`Catalog::load`](crate::catalog::Catalog::load);
/// the engine refuses to start on a malformed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Domain names in priority order; earlier entries win tie-breaks.
    pub domains: Vec<String>,
    pub skills: Vec<SkillEntry>,
    pub pathways: Vec<PathwayEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineOverrides>,
}

/// One canonical skill plus its synonym surface forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Domains this skill is evidence for, used for secondary-track
    /// candidate discovery.
    #[serde(default)]
    pub domains: Vec<String>,
}

/// One role-to-pathway definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayEntry {
    pub role: String,
    pub domain: String,
    /// Branch/degree tokens that map an academic anchor onto this pathway.
    /// A pathway with no anchors is reachable only as a secondary track.
    #[serde(default)]
    pub anchors: Vec<String>,
    pub steps: Vec<StepEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepEntry {
    pub name: String,
    /// A step with no required skills is valid and counts as 100% complete.
    #[serde(default)]
    pub skills: Vec<RequiredSkillEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkillEntry {
    pub skill: String,
    pub weight: f64,
}

/// Engine threshold overrides carried by the catalog document. Any field
/// left out keeps its named default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay_base: Option<f64>,
}

/// Resolved engine thresholds. Always passed explicitly, never read from
/// ambient mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub verification_threshold: f64,
    pub admission_threshold: f64,
    pub decay_base: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            verification_threshold: DEFAULT_VERIFICATION_THRESHOLD,
            admission_threshold: DEFAULT_ADMISSION_THRESHOLD,
            decay_base: DEFAULT_DECAY_BASE,
        }
    }
}

impl EngineConfig {
    pub fn with_overrides(self, overrides: &EngineOverrides) -> Self {
        Self {
            verification_threshold: overrides
                .verification_threshold
                .unwrap_or(self.verification_threshold),
            admission_threshold: overrides
                .admission_threshold
                .unwrap_or(self.admission_threshold),
            decay_base: overrides.decay_base.unwrap_or(self.decay_base),
        }
    }
}
