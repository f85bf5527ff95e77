pub mod arbiter;
pub mod matcher;
pub mod recommender;
pub mod scorer;

use crate::catalog::{Catalog, EngineConfig};
use crate::evidence::{normalize, EvidenceRecord};
use crate::types::{AcademicAnchor, AnchorStatus, AssessmentMetadata, ReadinessReport, TrackKind};

pub use matcher::{match_step, StepMatch};
pub use recommender::next_action;
pub use scorer::{score_pathway, step_completion, DecaySchedule, HarmonicDecay};

/// The readiness scoring engine.
///
/// A pure, synchronous, single-pass computation over immutable inputs: it
/// holds only its configuration and decay schedule, so arbitrarily many
/// assessments may run concurrently against a shared catalog.
pub struct ReadinessEngine<D> {
    config: EngineConfig,
    decay: D,
}

impl Default for ReadinessEngine<HarmonicDecay> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ReadinessEngine<HarmonicDecay> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            decay: HarmonicDecay::new(config.decay_base),
            config,
        }
    }

    /// Engine configured from the catalog's own threshold block.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.engine_config())
    }
}

impl<D> ReadinessEngine<D>
where
    D: DecaySchedule,
{
    pub fn with_decay(config: EngineConfig, decay: D) -> Self {
        Self { config, decay }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Assess one student submission against the catalog.
    ///
    /// Recoverable conditions (unresolved evidence tokens, an unmapped
    /// anchor, an empty evidence set) are represented inside the report,
    /// never returned as errors.
    pub fn assess(
        &self,
        catalog: &Catalog,
        anchor: &AcademicAnchor,
        records: &[EvidenceRecord],
    ) -> ReadinessReport {
        // 1. Normalization Phase
        let evidence = normalize(records, catalog.taxonomy());

        // 2. Primary Track
        let primary_definition = arbiter::resolve_primary(catalog, anchor);
        let anchor_status = match primary_definition {
            Some(pathway) => AnchorStatus::Mapped {
                role: pathway.role.clone(),
            },
            None => AnchorStatus::Unmapped,
        };
        let primary = primary_definition.map(|pathway| {
            score_pathway(
                pathway,
                &evidence,
                self.config.verification_threshold,
                &self.decay,
                TrackKind::Primary,
            )
        });

        // 3. Secondary Tracks
        let candidates = arbiter::secondary_candidates(
            catalog,
            &evidence,
            primary_definition.map(|pathway| pathway.role.as_str()),
        );
        let scored = candidates
            .into_iter()
            .map(|pathway| {
                score_pathway(
                    pathway,
                    &evidence,
                    self.config.verification_threshold,
                    &self.decay,
                    TrackKind::Secondary,
                )
            })
            .collect();
        let secondaries = arbiter::admit_and_rank(catalog, scored, self.config.admission_threshold);

        // 4. Next Action
        let next_action = recommender::next_action(catalog, primary.as_ref(), &secondaries);

        ReadinessReport {
            anchor: anchor_status,
            primary,
            secondaries,
            next_action,
            assessment: AssessmentMetadata {
                catalog_version: catalog.version().as_str().to_string(),
                verification_threshold: self.config.verification_threshold,
                admission_threshold: self.config.admission_threshold,
                evidence_considered: records.len(),
                unmatched_evidence: evidence.unmatched_count(),
                unmatched_tokens: evidence.unmatched_tokens(),
            },
        }
    }
}
