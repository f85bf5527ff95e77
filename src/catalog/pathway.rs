use crate::types::identifiers::SkillId;

/// One required skill within a step, with its contribution weight.
/// Weight positivity is enforced at catalog load.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredSkill {
    pub skill: SkillId,
    pub weight: f64,
}

/// An ordered step toward a role. `order` is the zero-based position in
/// the pathway and drives the scorer's decay schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct PathwayStep {
    pub name: String,
    pub order: usize,
    pub skills: Vec<RequiredSkill>,
}

impl PathwayStep {
    pub fn total_weight(&self) -> f64 {
        self.skills.iter().map(|required| required.weight).sum()
    }
}

/// A role definition: the domain it belongs to, the anchor tokens that map
/// a student's academic discipline onto it, and the ordered steps of
/// progression. Immutable configuration, shared read-only by all scoring
/// runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PathwayDefinition {
    pub role: String,
    pub domain: String,
    /// Normalized branch/degree tokens.
    pub anchors: Vec<String>,
    pub steps: Vec<PathwayStep>,
}

impl PathwayDefinition {
    /// Whether a normalized anchor string mentions one of this pathway's
    /// anchor tokens. Single-word tokens match whole words only, so a
    /// token like "ai" does not fire inside unrelated words; multi-word
    /// tokens match as substrings.
    pub fn matches_anchor(&self, normalized: &str) -> bool {
        self.anchors.iter().any(|token| mentions(normalized, token))
    }
}

fn mentions(haystack: &str, token: &str) -> bool {
    if token.contains(' ') {
        haystack.contains(token)
    } else {
        haystack.split_whitespace().any(|word| word == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pathway(anchors: &[&str]) -> PathwayDefinition {
        PathwayDefinition {
            role: "Backend Engineer".to_string(),
            domain: "software".to_string(),
            anchors: anchors.iter().map(|a| a.to_string()).collect(),
            steps: vec![],
        }
    }

    #[test]
    fn single_word_tokens_match_whole_words() {
        let p = pathway(&["cse", "it"]);
        assert!(p.matches_anchor("b.tech cse"));
        assert!(!p.matches_anchor("maintenance engineering"));
    }

    #[test]
    fn multi_word_tokens_match_substrings() {
        let p = pathway(&["computer science"]);
        assert!(p.matches_anchor("bsc computer science and engineering"));
        assert!(!p.matches_anchor("computer engineering"));
    }
}
