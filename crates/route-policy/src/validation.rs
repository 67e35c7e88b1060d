//! Schema checks applied at the transport boundary before requests reach the
//! policy engine. Type and enum membership are enforced by serde; these
//! checks cover ranges, lengths, and cross-field requirements.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::monitor::MonitorRequest;
use crate::policy::domain::{LatLng, PositionFix, Trailer, TripRequest, UserState};
use crate::trips::TripCompletion;

const MIN_IDENTIFIER_LEN: usize = 6;

/// Problems found in a request body. `form_errors` holds body-level failures
/// (unparseable JSON, unknown enum values); `field_errors` is keyed by dotted
/// path, e.g. `vehicleProfile.trailer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("request failed validation: {}", describe(.form_errors, .field_errors))]
pub struct ValidationError {
    pub form_errors: Vec<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            form_errors: vec![message.into()],
            field_errors: BTreeMap::new(),
        }
    }
}

fn describe(form_errors: &[String], field_errors: &BTreeMap<String, Vec<String>>) -> String {
    form_errors
        .iter()
        .cloned()
        .chain(
            field_errors
                .iter()
                .map(|(path, messages)| format!("{path}: {}", messages.join(", "))),
        )
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Default)]
struct Issues {
    field_errors: BTreeMap<String, Vec<String>>,
}

impl Issues {
    fn push(&mut self, path: &str, message: impl Into<String>) {
        self.field_errors
            .entry(path.to_string())
            .or_default()
            .push(message.into());
    }

    fn identifier(&mut self, path: &str, value: &str) {
        if value.chars().count() < MIN_IDENTIFIER_LEN {
            self.push(
                path,
                format!("must contain at least {MIN_IDENTIFIER_LEN} character(s)"),
            );
        }
    }

    fn range<T: PartialOrd + std::fmt::Display>(&mut self, path: &str, value: T, min: T, max: T) {
        if value < min || value > max {
            self.push(path, format!("must be between {min} and {max}"));
        }
    }

    fn positive(&mut self, path: &str, value: Option<f64>) {
        if let Some(value) = value {
            if !(value.is_finite() && value > 0.0) {
                self.push(path, "must be a positive number");
            }
        }
    }

    fn coordinate(&mut self, path: &str, lat: f64, lng: f64) {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            self.push(&format!("{path}.lat"), "must be a latitude in degrees");
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            self.push(&format!("{path}.lng"), "must be a longitude in degrees");
        }
    }

    fn user_state(&mut self, user_state: &UserState) {
        self.range(
            "userState.stressTolerance",
            user_state.stress_tolerance,
            1,
            100,
        );
    }

    fn trailer(&mut self, trailer: &Trailer) {
        let path = "vehicleProfile.trailer";
        self.positive(&format!("{path}.lengthFt"), trailer.length_ft);
        self.positive(&format!("{path}.widthFt"), trailer.width_ft);
        self.positive(&format!("{path}.heightFt"), trailer.height_ft);

        if trailer.enabled {
            if trailer.kind.is_none() {
                self.push(path, "trailer.type required when enabled=true");
            }
            if trailer.length_ft.is_none() {
                self.push(path, "trailer.lengthFt required when enabled=true");
            }
        }
    }

    fn position(&mut self, path: &str, position: &PositionFix) {
        self.coordinate(path, position.lat, position.lng);
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.field_errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                form_errors: Vec::new(),
                field_errors: self.field_errors,
            })
        }
    }
}

fn coordinates(issues: &mut Issues, path: &str, point: &LatLng) {
    issues.coordinate(path, point.lat, point.lng);
}

pub fn validate_plan(request: &TripRequest) -> Result<(), ValidationError> {
    let mut issues = Issues::default();

    issues.identifier("requestId", &request.request_id);
    coordinates(&mut issues, "origin", &request.origin);
    coordinates(&mut issues, "destination", &request.destination);
    issues.user_state(&request.user_state);

    if let Some(trailer) = &request.vehicle_profile.trailer {
        issues.trailer(trailer);
    }

    if let Some(alternatives) = request
        .preferences
        .as_ref()
        .and_then(|preferences| preferences.routing_alternatives)
    {
        issues.range("preferences.routingAlternatives", alternatives, 1, 6);
    }

    if let Some(constraints) = &request.constraints {
        issues.positive(
            "constraints.largeTrailerThresholdFt",
            constraints.large_trailer_threshold_ft,
        );
        issues.positive(
            "constraints.destinationExceptionRadiusMiles",
            constraints.destination_exception_radius_miles,
        );
        if let Some(count) = constraints.max_route_count_per_mode {
            issues.range("constraints.maxRouteCountPerMode", count, 1, 2);
        }
    }

    if let Some(position) = request
        .session
        .as_ref()
        .and_then(|session| session.current_position.as_ref())
    {
        issues.position("session.currentPosition", position);
    }

    issues.finish()
}

pub fn validate_monitor(request: &MonitorRequest) -> Result<(), ValidationError> {
    let mut issues = Issues::default();

    issues.identifier("navigationSessionId", &request.navigation_session_id);
    issues.identifier("activeRouteId", &request.active_route_id);
    issues.position("currentPosition", &request.current_position);
    issues.user_state(&request.user_state);

    if let Some(trailer) = &request.vehicle_profile.trailer {
        issues.positive("vehicleProfile.trailer.lengthFt", trailer.length_ft);
    }

    if let Some(lookahead) = &request.lookahead {
        if let Some(minutes) = lookahead.minutes {
            issues.range("lookahead.minutes", minutes, 5, 20);
        }
        if let Some(max_alternates) = lookahead.max_alternates {
            issues.range("lookahead.maxAlternates", max_alternates, 1, 3);
        }
    }

    issues.finish()
}

pub fn validate_trip_completion(completion: &TripCompletion) -> Result<(), ValidationError> {
    let mut issues = Issues::default();

    issues.identifier("navigationSessionId", &completion.navigation_session_id);
    issues.identifier("activeRouteId", &completion.active_route_id);

    if completion.outcome.actual_duration_seconds == 0 {
        issues.push("outcome.actualDurationSeconds", "must be a positive integer");
    }

    if let Some(feedback) = &completion.outcome.user_feedback {
        if let Some(rating) = feedback.stress_rating1to5 {
            issues.range("outcome.userFeedback.stressRating1to5", rating, 1, 5);
        }
        if let Some(comfort) = feedback.tow_comfort1to10 {
            issues.range("outcome.userFeedback.towComfort1to10", comfort, 1, 10);
        }
    }

    issues.finish()
}
