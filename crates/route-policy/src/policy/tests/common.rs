use std::sync::Arc;

use crate::ids::SequenceIdGenerator;
use crate::policy::domain::{
    CandidateRoute, DepartureType, DepartureWindow, EtaEstimate, GeometryEncoding, LatLng, Mode,
    ModeSelection, PolicyConstraints, RouteGeometry, RoutePreferences, RouteProvider, RouteStep,
    Trailer, TrailerType, TripRequest, UserState, VehicleProfile, VehicleType, WeightClass,
};
use crate::policy::{PlaceholderScorer, PolicyConfig, PolicyEngine, RuleFacts};

pub(super) fn trip_request(primary: Mode, also_return: &[Mode]) -> TripRequest {
    TripRequest {
        request_id: "req-000123".to_string(),
        origin: LatLng {
            lat: 41.5868,
            lng: -93.625,
        },
        destination: LatLng {
            lat: 41.6611,
            lng: -91.5302,
        },
        time: DepartureWindow {
            departure_type: DepartureType::Now,
            departure_time_iso: None,
        },
        mode: ModeSelection {
            primary,
            also_return: if also_return.is_empty() {
                None
            } else {
                Some(also_return.to_vec())
            },
        },
        user_state: UserState {
            stress_tolerance: 60,
        },
        vehicle_profile: VehicleProfile {
            vehicle_type: VehicleType::Suv,
            trailer: Some(Trailer {
                enabled: false,
                kind: None,
                length_ft: None,
                width_ft: None,
                height_ft: None,
                weight_class: WeightClass::Medium,
            }),
        },
        preferences: None,
        constraints: None,
        session: None,
    }
}

pub(super) fn towing_request(primary: Mode, length_ft: f64) -> TripRequest {
    let mut request = trip_request(primary, &[]);
    request.vehicle_profile.vehicle_type = VehicleType::Truck;
    request.vehicle_profile.trailer = Some(Trailer {
        enabled: true,
        kind: Some(TrailerType::Camper),
        length_ft: Some(length_ft),
        width_ft: Some(8.0),
        height_ft: None,
        weight_class: WeightClass::Heavy,
    });
    request
}

pub(super) fn with_constraints(
    mut request: TripRequest,
    constraints: PolicyConstraints,
) -> TripRequest {
    request.constraints = Some(constraints);
    request
}

pub(super) fn avoiding_tight_streets(mut request: TripRequest) -> TripRequest {
    request.preferences = Some(RoutePreferences {
        avoid_tight_streets: Some(true),
        ..RoutePreferences::default()
    });
    request
}

pub(super) fn candidate(route_id: &str, seconds_p50: u32) -> CandidateRoute {
    CandidateRoute {
        route_id: route_id.to_string(),
        provider: RouteProvider::Other,
        geometry: RouteGeometry {
            encoding: GeometryEncoding::Polyline6,
            polyline: "}_ilFjk~uO??".to_string(),
        },
        steps: vec![
            RouteStep {
                step_index: 0,
                instruction: "Head north".to_string(),
                distance_meters: 1200,
                duration_seconds: 120,
            },
            RouteStep {
                step_index: 1,
                instruction: "Continue straight".to_string(),
                distance_meters: 5200,
                duration_seconds: 360,
            },
        ],
        eta: EtaEstimate {
            seconds_p50,
            seconds_p90: seconds_p50 + 300,
        },
    }
}

/// The two placeholder routes the stub provider hands out.
pub(super) fn provider_candidates() -> Vec<CandidateRoute> {
    vec![candidate("rt_900", 900), candidate("rt_950", 950)]
}

pub(super) fn engine() -> PolicyEngine {
    PolicyEngine::with_parts(
        PolicyConfig::default(),
        Arc::new(PlaceholderScorer),
        Arc::new(SequenceIdGenerator::new()),
    )
}

pub(super) fn facts(request: &TripRequest) -> RuleFacts {
    RuleFacts::resolve(request, &PolicyConfig::default())
}
