use super::advisories::synthesize;
use super::domain::{
    CandidateRoute, Mode, PenaltyContribution, PolicyDebug, ReliabilityLabel, RouteScores,
    ScoredCandidate, ScoredEta, TripRequest,
};
use super::rules::RuleFacts;

pub(crate) const MAX_WHY_REASONS: usize = 3;

/// Scores and justifications a scorer produces for one (route, mode) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub scores: RouteScores,
    pub why: Vec<String>,
    pub reliability: ReliabilityLabel,
    pub policy_debug: PolicyDebug,
}

/// Cost model seam. The engine only depends on this trait, so a graph-based
/// model can replace the placeholder without touching ranking or advisories.
pub trait CandidateScorer: Send + Sync {
    fn score(
        &self,
        route: &CandidateRoute,
        mode: Mode,
        request: &TripRequest,
        facts: &RuleFacts,
    ) -> ScoreCard;
}

/// Deterministic stand-in cost model built from fixed constants and the ETA.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderScorer;

impl PlaceholderScorer {
    fn base_stress(mode: Mode) -> u32 {
        match mode {
            Mode::LowStress => 20,
            Mode::Tow => 25,
            Mode::FuelSaver => 40,
            Mode::Fastest => 55,
        }
    }

    fn mode_reason(mode: Mode) -> &'static str {
        match mode {
            Mode::LowStress => "Minimizes driving stress based on your tolerance",
            Mode::Tow => "Prioritizes towing comfort and avoids tight streets when possible",
            Mode::FuelSaver => "Optimizes for lowest estimated fuel use",
            Mode::Fastest => "Optimizes for earliest arrival time",
        }
    }

    pub fn stress_score(mode: Mode, route: &CandidateRoute) -> u8 {
        let perturbation = (route.eta.seconds_p50 % 300) / 10;
        let raw = Self::base_stress(mode) + perturbation;
        raw.clamp(1, 100) as u8
    }

    pub fn tow_confidence(stress_score: u8) -> u8 {
        let raw = 10 - i32::from(stress_score) / 12;
        raw.clamp(1, 10) as u8
    }
}

impl CandidateScorer for PlaceholderScorer {
    fn score(
        &self,
        route: &CandidateRoute,
        mode: Mode,
        _request: &TripRequest,
        facts: &RuleFacts,
    ) -> ScoreCard {
        let stress_score = Self::stress_score(mode, route);
        let tow_confidence = facts
            .trailer_enabled
            .then(|| Self::tow_confidence(stress_score));

        let scores = RouteScores {
            stress_score,
            tow_confidence,
            fuel_index: if mode == Mode::FuelSaver { 0.9 } else { 1.0 },
            construction_friction: 0.2,
            collapse_risk: 0.15,
            tight_street_exposure: if facts.large_trailer { 0.1 } else { 0.3 },
        };

        let mut why = vec![Self::mode_reason(mode).to_string()];
        if facts.large_trailer {
            why.push(format!(
                "Large-trailer rules applied ({}’+)",
                facts.large_trailer_threshold_ft
            ));
        }
        why.truncate(MAX_WHY_REASONS);

        ScoreCard {
            scores,
            why,
            reliability: ReliabilityLabel::Stable,
            policy_debug: PolicyDebug {
                blocked_edges_count: 0,
                penalty_breakdown_top: vec![
                    PenaltyContribution {
                        name: "turn_complexity".to_string(),
                        value: 0.1,
                    },
                    PenaltyContribution {
                        name: "merge_complexity".to_string(),
                        value: 0.1,
                    },
                ],
            },
        }
    }
}

/// Run the scorer and advisory synthesis for a single candidate.
pub fn score_candidate(
    scorer: &dyn CandidateScorer,
    route: &CandidateRoute,
    mode: Mode,
    request: &TripRequest,
    facts: &RuleFacts,
) -> ScoredCandidate {
    let ScoreCard {
        scores,
        mut why,
        reliability,
        policy_debug,
    } = scorer.score(route, mode, request, facts);
    why.truncate(MAX_WHY_REASONS);

    let advisories = synthesize(facts, scores.stress_score, scores.tow_confidence);

    ScoredCandidate {
        route_id: route.route_id.clone(),
        provider: route.provider,
        eta: ScoredEta {
            seconds_p50: route.eta.seconds_p50,
            seconds_p90: route.eta.seconds_p90,
            reliability_label: reliability,
        },
        scores,
        why,
        advisories,
        geometry: route.geometry.clone(),
        steps: route.steps.clone(),
        policy_debug,
    }
}
