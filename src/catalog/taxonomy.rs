use std::collections::BTreeMap;

use crate::types::identifiers::{normalize_token, SkillId};

/// Tokens shorter than this never take the edit-distance fallback.
const MIN_FUZZY_LEN: usize = 4;
/// Maximum edit distance for fuzzy alias resolution.
const MAX_EDIT_DISTANCE: usize = 1;

/// Per-skill taxonomy record.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRecord {
    pub id: SkillId,
    /// Declared domains this skill is evidence for.
    pub domains: Vec<String>,
}

/// Canonical registry of skill identifiers and synonym sets.
///
/// Resolution is a pure function of `(token, taxonomy)`: canonical hit,
/// then alias table, then a bounded-edit-distance fallback. Read-only
/// after catalog load; shared without locking.
#[derive(Debug, Clone, Default)]
pub struct SkillTaxonomy {
    skills: BTreeMap<SkillId, SkillRecord>,
    aliases: BTreeMap<String, SkillId>,
}

impl SkillTaxonomy {
    pub(crate) fn new(skills: BTreeMap<SkillId, SkillRecord>, aliases: BTreeMap<String, SkillId>) -> Self {
        Self { skills, aliases }
    }

    /// Resolve a raw surface token to a canonical SkillId, if any.
    pub fn resolve(&self, token: &str) -> Option<SkillId> {
        let normalized = normalize_token(token);
        if normalized.is_empty() {
            return None;
        }

        if let Ok(id) = SkillId::new(&normalized) {
            if self.skills.contains_key(&id) {
                return Some(id);
            }
        }

        if let Some(id) = self.aliases.get(&normalized) {
            return Some(id.clone());
        }

        self.fuzzy_resolve(&normalized)
    }

    pub fn contains(&self, id: &SkillId) -> bool {
        self.skills.contains_key(id)
    }

    /// Declared domains of a canonical skill; empty for unknown ids.
    pub fn domains_of(&self, id: &SkillId) -> &[String] {
        self.skills
            .get(id)
            .map(|record| record.domains.as_slice())
            .unwrap_or(&[])
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Nearest candidate within MAX_EDIT_DISTANCE, ties broken by
    /// lexicographic candidate order. Candidates iterate in BTreeMap key
    /// order, so the outcome is deterministic.
    fn fuzzy_resolve(&self, normalized: &str) -> Option<SkillId> {
        if normalized.chars().count() < MIN_FUZZY_LEN {
            return None;
        }

        let canonical = self.skills.keys().map(|id| (id.as_str(), id));
        let aliased = self.aliases.iter().map(|(surface, id)| (surface.as_str(), id));

        let mut best: Option<(usize, &SkillId)> = None;
        for (candidate, id) in canonical.chain(aliased) {
            let distance = edit_distance(normalized, candidate);
            if distance > MAX_EDIT_DISTANCE {
                continue;
            }
            best = match best {
                Some((best_distance, _)) if best_distance <= distance => best,
                _ => Some((distance, id)),
            };
            if let Some((0, _)) = best {
                break;
            }
        }

        best.map(|(_, id)| id.clone())
    }
}

/// Levenshtein distance, two-row dynamic programming.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
