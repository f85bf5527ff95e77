use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::catalog::config::{CatalogConfig, EngineConfig};
use crate::catalog::pathway::{PathwayDefinition, PathwayStep, RequiredSkill};
use crate::catalog::taxonomy::{SkillRecord, SkillTaxonomy};
use crate::types::identifiers::{normalize_token, CatalogVersion, SkillId};

/// Fatal configuration errors. The engine refuses to initialize with an
/// invalid catalog; none of these are recoverable at scoring time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog declares no domains")]
    NoDomains,
    #[error("Duplicate domain: {0}")]
    DuplicateDomain(String),
    #[error("Invalid skill identifier: {0:?}")]
    InvalidSkillId(String),
    #[error("Duplicate skill ID: {0}")]
    DuplicateSkillId(String),
    #[error("Alias {alias:?} maps to both {existing} and {incoming}")]
    ConflictingAlias {
        alias: String,
        existing: String,
        incoming: String,
    },
    #[error("Skill {skill} references undeclared domain {domain:?}")]
    UnknownSkillDomain { skill: String, domain: String },
    #[error("Catalog declares no pathways")]
    NoPathways,
    #[error("Duplicate pathway role: {0}")]
    DuplicateRole(String),
    #[error("Pathway {role:?} references undeclared domain {domain:?}")]
    UnknownPathwayDomain { role: String, domain: String },
    #[error("Pathway {0:?} has no steps")]
    EmptyPathway(String),
    #[error("Step {step:?} in {role:?} requires unknown skill {skill:?}")]
    UnknownRequiredSkill {
        role: String,
        step: String,
        skill: String,
    },
    #[error("Step {step:?} in {role:?} requires {skill} more than once")]
    DuplicateRequiredSkill {
        role: String,
        step: String,
        skill: String,
    },
    #[error("Step {step:?} in {role:?} has non-positive weight {weight} for {skill}")]
    NonPositiveWeight {
        role: String,
        step: String,
        skill: String,
        weight: f64,
    },
    #[error("{name} must be within {min}..={max}, got {value}")]
    ThresholdOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Immutable, validated pathway catalog.
///
/// Built once by [`Catalog::load`], shared read-only by arbitrarily many
/// concurrent scoring runs. Reload means building a fresh catalog and
/// swapping it through [`CatalogHandle`](crate::catalog::CatalogHandle).
#[derive(Debug)]
pub struct Catalog {
    version: CatalogVersion,
    loaded_at: DateTime<Utc>, // informational only
    taxonomy: SkillTaxonomy,
    domain_priority: BTreeMap<String, usize>,
    /// Sorted by (domain priority, role) so anchor resolution and
    /// tie-breaks are deterministic.
    pathways: Vec<PathwayDefinition>,
    engine: EngineConfig,
}

impl Catalog {
    /// Validate a declarative catalog document and build the runtime
    /// catalog. Every malformed-entry class is a hard error here, never a
    /// scoring-time surprise.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        // The version hashes the canonical serialized config, so identical
        // documents always produce the identical catalog identity.
        let config_bytes = serde_json::to_vec(config)?;
        let version = CatalogVersion::from_config_bytes(&config_bytes);

        let domain_priority = validate_domains(&config.domains)?;
        let taxonomy = build_taxonomy(config, &domain_priority)?;
        let mut pathways = build_pathways(config, &taxonomy, &domain_priority)?;

        pathways.sort_by(|a, b| {
            domain_priority[&a.domain]
                .cmp(&domain_priority[&b.domain])
                .then_with(|| a.role.cmp(&b.role))
        });

        let engine = resolve_engine_config(config)?;

        tracing::info!(
            version = %version.as_str(),
            domains = config.domains.len(),
            skills = taxonomy.skill_count(),
            pathways = pathways.len(),
            "catalog loaded"
        );

        Ok(Catalog {
            version,
            loaded_at: Utc::now(),
            taxonomy,
            domain_priority,
            pathways,
            engine,
        })
    }

    /// Load and validate a catalog document from a JSON file.
    pub fn load_path(path: &Path) -> Result<Self, CatalogError> {
        let bytes = fs::read(path)?;
        let config: CatalogConfig = serde_json::from_slice(&bytes)?;
        Self::load(&config)
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    /// Engine thresholds resolved from the catalog's `engine` block over
    /// the named defaults.
    pub fn engine_config(&self) -> EngineConfig {
        self.engine
    }

    /// All pathways, ordered by (domain priority, role).
    pub fn pathways(&self) -> &[PathwayDefinition] {
        &self.pathways
    }

    pub fn pathways_for<'a>(
        &'a self,
        domain: &'a str,
    ) -> impl Iterator<Item = &'a PathwayDefinition> {
        self.pathways.iter().filter(move |p| p.domain == domain)
    }

    pub fn pathway_by_role(&self, role: &str) -> Option<&PathwayDefinition> {
        self.pathways.iter().find(|p| p.role == role)
    }

    /// Position of a domain in the declared priority order.
    pub fn domain_priority(&self, domain: &str) -> usize {
        self.domain_priority
            .get(domain)
            .copied()
            .unwrap_or(usize::MAX)
    }
}

fn validate_domains(domains: &[String]) -> Result<BTreeMap<String, usize>, CatalogError> {
    if domains.is_empty() {
        return Err(CatalogError::NoDomains);
    }

    let mut priority = BTreeMap::new();
    for (index, domain) in domains.iter().enumerate() {
        let name = normalize_token(domain);
        if priority.insert(name, index).is_some() {
            return Err(CatalogError::DuplicateDomain(domain.clone()));
        }
    }
    Ok(priority)
}

fn build_taxonomy(
    config: &CatalogConfig,
    domain_priority: &BTreeMap<String, usize>,
) -> Result<SkillTaxonomy, CatalogError> {
    let mut skills: BTreeMap<SkillId, SkillRecord> = BTreeMap::new();
    let mut aliases: BTreeMap<String, SkillId> = BTreeMap::new();

    for entry in &config.skills {
        let id = SkillId::new(&entry.id)
            .map_err(|_| CatalogError::InvalidSkillId(entry.id.clone()))?;

        let mut domains = Vec::with_capacity(entry.domains.len());
        for domain in &entry.domains {
            let name = normalize_token(domain);
            if !domain_priority.contains_key(&name) {
                return Err(CatalogError::UnknownSkillDomain {
                    skill: id.as_str().to_string(),
                    domain: domain.clone(),
                });
            }
            domains.push(name);
        }
        domains.sort();
        domains.dedup();

        let record = SkillRecord {
            id: id.clone(),
            domains,
        };
        if skills.insert(id.clone(), record).is_some() {
            return Err(CatalogError::DuplicateSkillId(id.as_str().to_string()));
        }

        for alias in &entry.aliases {
            let surface = normalize_token(alias);
            if surface.is_empty() || surface == id.as_str() {
                continue;
            }
            match aliases.get(&surface).cloned() {
                Some(existing) if existing != id => {
                    return Err(CatalogError::ConflictingAlias {
                        alias: alias.clone(),
                        existing: existing.as_str().to_string(),
                        incoming: id.as_str().to_string(),
                    });
                }
                _ => {
                    aliases.insert(surface, id.clone());
                }
            }
        }
    }

    // An alias shadowing a different skill's canonical id would make
    // resolution ambiguous.
    for (surface, target) in &aliases {
        if let Ok(as_id) = SkillId::new(surface) {
            if skills.contains_key(&as_id) && as_id != *target {
                return Err(CatalogError::ConflictingAlias {
                    alias: surface.clone(),
                    existing: as_id.as_str().to_string(),
                    incoming: target.as_str().to_string(),
                });
            }
        }
    }

    Ok(SkillTaxonomy::new(skills, aliases))
}

fn build_pathways(
    config: &CatalogConfig,
    taxonomy: &SkillTaxonomy,
    domain_priority: &BTreeMap<String, usize>,
) -> Result<Vec<PathwayDefinition>, CatalogError> {
    if config.pathways.is_empty() {
        return Err(CatalogError::NoPathways);
    }

    let mut seen_roles = BTreeSet::new();
    let mut pathways = Vec::with_capacity(config.pathways.len());

    for entry in &config.pathways {
        if !seen_roles.insert(entry.role.clone()) {
            return Err(CatalogError::DuplicateRole(entry.role.clone()));
        }

        let domain = normalize_token(&entry.domain);
        if !domain_priority.contains_key(&domain) {
            return Err(CatalogError::UnknownPathwayDomain {
                role: entry.role.clone(),
                domain: entry.domain.clone(),
            });
        }

        if entry.steps.is_empty() {
            return Err(CatalogError::EmptyPathway(entry.role.clone()));
        }

        let mut steps = Vec::with_capacity(entry.steps.len());
        for (order, step) in entry.steps.iter().enumerate() {
            let mut seen_skills = BTreeSet::new();
            let mut skills = Vec::with_capacity(step.skills.len());
            for required in &step.skills {
                let skill = SkillId::new(&required.skill)
                    .map_err(|_| CatalogError::InvalidSkillId(required.skill.clone()))?;
                if !taxonomy.contains(&skill) {
                    return Err(CatalogError::UnknownRequiredSkill {
                        role: entry.role.clone(),
                        step: step.name.clone(),
                        skill: required.skill.clone(),
                    });
                }
                if !seen_skills.insert(skill.clone()) {
                    return Err(CatalogError::DuplicateRequiredSkill {
                        role: entry.role.clone(),
                        step: step.name.clone(),
                        skill: skill.as_str().to_string(),
                    });
                }
                if !required.weight.is_finite() || required.weight <= 0.0 {
                    return Err(CatalogError::NonPositiveWeight {
                        role: entry.role.clone(),
                        step: step.name.clone(),
                        skill: skill.as_str().to_string(),
                        weight: required.weight,
                    });
                }
                skills.push(RequiredSkill {
                    skill,
                    weight: required.weight,
                });
            }

            steps.push(PathwayStep {
                name: step.name.clone(),
                order,
                skills,
            });
        }

        let anchors = entry
            .anchors
            .iter()
            .map(|token| normalize_token(token))
            .filter(|token| !token.is_empty())
            .collect();

        pathways.push(PathwayDefinition {
            role: entry.role.clone(),
            domain,
            anchors,
            steps,
        });
    }

    Ok(pathways)
}

fn resolve_engine_config(config: &CatalogConfig) -> Result<EngineConfig, CatalogError> {
    let engine = match &config.engine {
        Some(overrides) => EngineConfig::default().with_overrides(overrides),
        None => EngineConfig::default(),
    };

    check_range(
        "verification_threshold",
        engine.verification_threshold,
        0.0,
        1.0,
    )?;
    check_range("admission_threshold", engine.admission_threshold, 0.0, 100.0)?;
    if !engine.decay_base.is_finite() || engine.decay_base <= 0.0 {
        return Err(CatalogError::ThresholdOutOfRange {
            name: "decay_base",
            value: engine.decay_base,
            min: f64::MIN_POSITIVE,
            max: f64::MAX,
        });
    }

    Ok(engine)
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), CatalogError> {
    if !value.is_finite() || value < min || value > max {
        return Err(CatalogError::ThresholdOutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}
