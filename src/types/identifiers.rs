use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Canonical skill identifier from the skill taxonomy.
///
/// Always stored in normalized surface form; immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(String);

#[derive(Debug, Error)]
pub enum SkillIdError {
    #[error("Skill identifier is empty after normalization")]
    Empty,
}

impl SkillId {
    /// Create a SkillId from a raw token, applying surface-form normalization.
    pub fn new(token: &str) -> Result<Self, SkillIdError> {
        let normalized = normalize_token(token);
        if normalized.is_empty() {
            return Err(SkillIdError::Empty);
        }
        Ok(SkillId(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalize a skill or anchor token: trim, lowercase, collapse runs of
/// whitespace to a single space.
pub(crate) fn normalize_token(token: &str) -> String {
    token
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Content hash version of a loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    pub fn from_config_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CatalogVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
