use std::cmp::Ordering;

use super::domain::{Mode, ModeSelection, ScoredCandidate, SelectedRoute};
use crate::ids::IdGenerator;

pub(crate) const SELECTION_PREFIX: &str = "sel_";

/// `[primary] + alsoReturn` with later duplicates dropped.
pub fn effective_modes(selection: &ModeSelection) -> Vec<Mode> {
    let mut modes = vec![selection.primary];
    for mode in selection.also_return.iter().flatten() {
        if !modes.contains(mode) {
            modes.push(*mode);
        }
    }
    modes
}

impl Mode {
    /// Preference order between two candidates scored for this mode.
    pub fn rank_order(&self, a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
        match self {
            Mode::LowStress => a.scores.stress_score.cmp(&b.scores.stress_score),
            Mode::Fastest => a.eta.seconds_p50.cmp(&b.eta.seconds_p50),
            Mode::FuelSaver => a.scores.fuel_index.total_cmp(&b.scores.fuel_index),
            Mode::Tow => {
                let a_confidence = a.scores.tow_confidence.unwrap_or(0);
                let b_confidence = b.scores.tow_confidence.unwrap_or(0);
                b_confidence.cmp(&a_confidence)
            }
        }
    }
}

/// Stable-sort candidates for `mode`, keep the top `limit`, and tag each with
/// its rank and a fresh selection id.
pub fn select(
    mode: Mode,
    mut scored: Vec<ScoredCandidate>,
    limit: usize,
    ids: &dyn IdGenerator,
) -> Vec<SelectedRoute> {
    scored.sort_by(|a, b| mode.rank_order(a, b));
    scored.truncate(limit);

    scored
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| SelectedRoute {
            candidate,
            rank: (index + 1) as u32,
            selection_id: ids.next_id(SELECTION_PREFIX),
        })
        .collect()
}
