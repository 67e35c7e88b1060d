use super::domain::{Advisory, AdvisoryKind};
use super::rules::RuleFacts;

const LOW_TOW_CONFIDENCE_CEILING: u8 = 4;

/// Build the advisories for one scored candidate, in priority order.
///
/// A missing tow confidence never counts as low; the tow advisory is reserved
/// for trips that actually pull a trailer.
pub fn synthesize(
    facts: &RuleFacts,
    stress_score: u8,
    tow_confidence: Option<u8>,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if stress_score > facts.stress_tolerance {
        advisories.push(Advisory {
            kind: AdvisoryKind::HighStress,
            message: format!(
                "Route stress ({stress_score}) exceeds your tolerance ({}).",
                facts.stress_tolerance
            ),
        });
    }

    let low_tow_confidence = tow_confidence
        .map(|confidence| confidence <= LOW_TOW_CONFIDENCE_CEILING)
        .unwrap_or(false);
    if facts.trailer_enabled && low_tow_confidence {
        advisories.push(Advisory {
            kind: AdvisoryKind::LowTowConfidence,
            message: "Tow confidence is low; expect demanding towing conditions.".to_string(),
        });
    }

    if facts.large_trailer {
        advisories.push(Advisory {
            kind: AdvisoryKind::TowRulesActive,
            message: format!(
                "Large trailer rules active (>={}’). Destination exception radius: {} mile.",
                facts.large_trailer_threshold_ft, facts.exception_radius_miles
            ),
        });
    }

    advisories
}
