//! Route policy evaluation: rule facts, candidate scoring, advisories, and
//! per-mode ranking of externally sourced candidate routes.

pub mod advisories;
mod config;
pub mod domain;
pub mod ranking;
pub mod rules;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use config::{
    PolicyConfig, DEFAULT_EXCEPTION_RADIUS_MILES, DEFAULT_LARGE_TRAILER_THRESHOLD_FT,
    DEFAULT_ROUTES_PER_MODE,
};
pub use domain::{
    Advisory, AdvisoryKind, CandidateRoute, Mode, ModeResult, PolicySummary, RouteScores,
    ScoredCandidate, SelectedRoute, TripRequest,
};
pub use rules::RuleFacts;
pub use scoring::{CandidateScorer, PlaceholderScorer, ScoreCard};

use std::sync::Arc;

use crate::ids::{IdGenerator, SequenceIdGenerator};
use ranking::{effective_modes, select};
use scoring::score_candidate;
use tracing::{debug, info};

/// Stateless evaluator applying the policy configuration to candidate routes.
#[derive(Clone)]
pub struct PolicyEngine {
    config: PolicyConfig,
    scorer: Arc<dyn CandidateScorer>,
    ids: Arc<dyn IdGenerator>,
}

impl PolicyEngine {
    pub fn new(config: PolicyConfig) -> Self {
        Self::with_parts(
            config,
            Arc::new(PlaceholderScorer),
            Arc::new(SequenceIdGenerator::new()),
        )
    }

    pub fn with_parts(
        config: PolicyConfig,
        scorer: Arc<dyn CandidateScorer>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { config, scorer, ids }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Score, rank, and select candidates for every distinct requested mode.
    pub fn evaluate(&self, request: &TripRequest, candidates: &[CandidateRoute]) -> Vec<ModeResult> {
        let facts = RuleFacts::resolve(request, &self.config);
        let policy_summary = facts.summary();

        let results: Vec<ModeResult> = effective_modes(&request.mode)
            .into_iter()
            .map(|mode| {
                let scored = candidates
                    .iter()
                    .map(|route| score_candidate(self.scorer.as_ref(), route, mode, request, &facts))
                    .collect();
                let routes = select(mode, scored, facts.max_routes, self.ids.as_ref());

                debug!(
                    mode = mode.label(),
                    candidates = candidates.len(),
                    selected = routes.len(),
                    "mode evaluated"
                );

                ModeResult {
                    mode,
                    policy_summary,
                    routes,
                }
            })
            .collect();

        info!(
            request_id = %request.request_id,
            modes = results.len(),
            candidates = candidates.len(),
            large_trailer = facts.large_trailer,
            "route policy evaluated"
        );

        results
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

impl std::fmt::Debug for PolicyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
