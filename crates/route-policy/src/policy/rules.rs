use super::config::PolicyConfig;
use super::domain::{PolicySummary, TripRequest};

pub fn large_trailer_threshold(request: &TripRequest, config: &PolicyConfig) -> f64 {
    request
        .constraints
        .as_ref()
        .and_then(|constraints| constraints.large_trailer_threshold_ft)
        .unwrap_or(config.large_trailer_threshold_ft)
}

/// True when an enabled trailer reports a length at or above the threshold.
pub fn is_large_trailer(request: &TripRequest, config: &PolicyConfig) -> bool {
    let threshold = large_trailer_threshold(request, config);
    request
        .vehicle_profile
        .enabled_trailer()
        .and_then(|trailer| trailer.length_ft)
        .map(|length| length >= threshold)
        .unwrap_or(false)
}

pub fn destination_exception_radius(request: &TripRequest, config: &PolicyConfig) -> f64 {
    request
        .constraints
        .as_ref()
        .and_then(|constraints| constraints.destination_exception_radius_miles)
        .unwrap_or(config.destination_exception_radius_miles)
}

pub fn max_routes_per_mode(request: &TripRequest, config: &PolicyConfig) -> usize {
    request
        .constraints
        .as_ref()
        .and_then(|constraints| constraints.max_route_count_per_mode)
        .map(usize::from)
        .unwrap_or(config.default_routes_per_mode)
        .min(config.max_routes_per_mode)
}

pub fn avoid_tight_streets_effective(request: &TripRequest, config: &PolicyConfig) -> bool {
    if is_large_trailer(request, config) {
        return true;
    }

    request
        .preferences
        .as_ref()
        .and_then(|preferences| preferences.avoid_tight_streets)
        .unwrap_or(false)
}

/// Rule outcomes resolved once per request and shared by every scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleFacts {
    pub large_trailer: bool,
    pub large_trailer_threshold_ft: f64,
    pub exception_radius_miles: f64,
    pub avoid_tight_streets: bool,
    pub max_routes: usize,
    pub stress_tolerance: u8,
    pub trailer_enabled: bool,
}

impl RuleFacts {
    pub fn resolve(request: &TripRequest, config: &PolicyConfig) -> Self {
        Self {
            large_trailer: is_large_trailer(request, config),
            large_trailer_threshold_ft: large_trailer_threshold(request, config),
            exception_radius_miles: destination_exception_radius(request, config),
            avoid_tight_streets: avoid_tight_streets_effective(request, config),
            max_routes: max_routes_per_mode(request, config),
            stress_tolerance: request.user_state.stress_tolerance,
            trailer_enabled: request.vehicle_profile.trailer_enabled(),
        }
    }

    pub fn summary(&self) -> PolicySummary {
        PolicySummary {
            large_trailer_applied: self.large_trailer,
            destination_exception_radius_miles: self.exception_radius_miles,
            avoid_tight_streets_effective: self.avoid_tight_streets,
            stress_tolerance_used: self.stress_tolerance,
        }
    }
}
