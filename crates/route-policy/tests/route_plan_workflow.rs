//! End-to-end scenarios for route planning through the public service facade
//! and HTTP router, using the stub candidate source and an in-memory sink.

mod common {
    use std::sync::{Arc, Mutex};

    use route_policy::candidates::StubCandidateSource;
    use route_policy::ids::{IdGenerator, SequenceIdGenerator};
    use route_policy::monitor::NoChangeMonitor;
    use route_policy::planning::RoutePlanningService;
    use route_policy::policy::{PlaceholderScorer, PolicyConfig, PolicyEngine};
    use route_policy::trips::{TripCompletion, TripSink, TripSinkError};
    use serde_json::{json, Value};

    #[derive(Default)]
    pub struct RecordingSink {
        pub completions: Mutex<Vec<TripCompletion>>,
    }

    impl TripSink for RecordingSink {
        fn ingest(
            &self,
            completion: TripCompletion,
            _ingestion_id: String,
        ) -> Result<(), TripSinkError> {
            self.completions
                .lock()
                .expect("sink mutex poisoned")
                .push(completion);
            Ok(())
        }
    }

    pub fn service(
        config: PolicyConfig,
    ) -> (
        Arc<RoutePlanningService<StubCandidateSource, RecordingSink>>,
        Arc<RecordingSink>,
    ) {
        let ids: Arc<dyn IdGenerator> = Arc::new(SequenceIdGenerator::new());
        let sink = Arc::new(RecordingSink::default());
        let engine =
            PolicyEngine::with_parts(config, Arc::new(PlaceholderScorer), Arc::clone(&ids));
        let service = RoutePlanningService::new(
            Arc::new(StubCandidateSource::new(Arc::clone(&ids))),
            Arc::clone(&sink),
            engine,
            Arc::new(NoChangeMonitor),
            ids,
        );
        (Arc::new(service), sink)
    }

    pub fn plan_payload(primary: &str, also_return: &[&str], trailer: Value) -> Value {
        json!({
            "requestId": "req-int-0001",
            "origin": { "lat": 41.5868, "lng": -93.625 },
            "destination": { "lat": 41.6611, "lng": -91.5302 },
            "time": { "departureType": "schedule", "departureTimeIso": "2026-10-19T14:00:00Z" },
            "mode": { "primary": primary, "alsoReturn": also_return },
            "userState": { "stressTolerance": 50 },
            "vehicleProfile": { "vehicleType": "SUV", "trailer": trailer },
            "preferences": { "avoidTightStreets": true, "routingAlternatives": 3 }
        })
    }

    pub fn post_json(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
        axum::http::Request::post(uri)
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(
                serde_json::to_vec(payload).expect("payload serializes"),
            ))
            .expect("request builds")
    }

    pub async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }
}

use axum::http::StatusCode;
use common::*;
use route_policy::planning::planning_router;
use route_policy::policy::{AdvisoryKind, Mode, PolicyConfig, TripRequest};
use serde_json::json;
use std::collections::HashSet;
use tower::ServiceExt;

#[test]
fn all_modes_are_ranked_with_unique_selections() {
    let (service, _) = service(PolicyConfig::default());
    let payload = plan_payload(
        "LOW_STRESS",
        &["TOW", "FUEL_SAVER", "FASTEST", "LOW_STRESS"],
        json!({ "enabled": false }),
    );
    let request: TripRequest = serde_json::from_value(payload).expect("plan deserializes");

    let response = service.plan(request).expect("plan succeeds");

    let modes: Vec<_> = response.results.iter().map(|result| result.mode).collect();
    assert_eq!(
        modes,
        vec![Mode::LowStress, Mode::Tow, Mode::FuelSaver, Mode::Fastest]
    );

    let mut selection_ids = HashSet::new();
    for result in &response.results {
        assert!(result.policy_summary.avoid_tight_streets_effective);
        assert!(!result.policy_summary.large_trailer_applied);
        assert!(result.routes.len() <= 2);
        for route in &result.routes {
            assert!(route.candidate.scores.tow_confidence.is_none());
            assert!(selection_ids.insert(route.selection_id.clone()));
        }
    }
}

#[test]
fn engine_defaults_come_from_policy_config() {
    let (service, _) = service(PolicyConfig {
        large_trailer_threshold_ft: 20.0,
        destination_exception_radius_miles: 3.0,
        default_routes_per_mode: 1,
        max_routes_per_mode: 2,
    });
    let payload = plan_payload(
        "TOW",
        &[],
        json!({ "enabled": true, "type": "UTILITY", "lengthFt": 22 }),
    );
    let request: TripRequest = serde_json::from_value(payload).expect("plan deserializes");

    let response = service.plan(request).expect("plan succeeds");
    let result = &response.results[0];

    assert_eq!(result.routes.len(), 1);
    assert_eq!(result.policy_summary.destination_exception_radius_miles, 3.0);
    let advisory = result.routes[0]
        .candidate
        .advisories
        .iter()
        .find(|advisory| advisory.kind == AdvisoryKind::TowRulesActive)
        .expect("tow rules advisory");
    assert!(advisory.message.contains(">=20"));
    assert!(advisory.message.contains("3 mile"));
}

#[tokio::test]
async fn plan_endpoint_returns_wire_shape() {
    let (service, _) = service(PolicyConfig::default());
    let router = planning_router(service);
    let payload = plan_payload(
        "FASTEST",
        &["TOW"],
        json!({ "enabled": true, "type": "CAMPER", "lengthFt": 18 }),
    );

    let response = router
        .oneshot(post_json("/v1/route/plan", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["requestId"], "req-int-0001");
    assert!(body["generatedAtIso"].is_string());

    let fastest = &body["results"][0];
    assert_eq!(fastest["mode"], "FASTEST");
    assert_eq!(fastest["routes"][0]["eta"]["secondsP50"], 900);
    assert_eq!(fastest["routes"][1]["eta"]["secondsP50"], 950);
    assert_eq!(fastest["policySummary"]["largeTrailerApplied"], true);
    assert_eq!(fastest["policySummary"]["stressToleranceUsed"], 50);

    let tow = &body["results"][1];
    assert_eq!(tow["mode"], "TOW");
    let first = tow["routes"][0]["scores"]["towConfidence"]
        .as_u64()
        .expect("tow confidence present");
    let second = tow["routes"][1]["scores"]["towConfidence"]
        .as_u64()
        .expect("tow confidence present");
    assert!(first >= second);
}

#[tokio::test]
async fn plan_endpoint_rejects_incomplete_trailer() {
    let (service, _) = service(PolicyConfig::default());
    let router = planning_router(service);
    let payload = plan_payload("TOW", &[], json!({ "enabled": true }));

    let response = router
        .oneshot(post_json("/v1/route/plan", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "INVALID_REQUEST");
    let messages = body["details"]["fieldErrors"]["vehicleProfile.trailer"]
        .as_array()
        .expect("trailer messages");
    assert_eq!(messages.len(), 2);
}

#[tokio::test]
async fn trip_completion_is_recorded() {
    let (service, sink) = service(PolicyConfig::default());
    let router = planning_router(service);
    let payload = json!({
        "navigationSessionId": "nav-int-01",
        "activeRouteId": "rt_int_01",
        "outcome": { "actualDurationSeconds": 980, "userModeSwitches": ["TOW"] }
    });

    let response = router
        .oneshot(post_json("/v1/trip/complete", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let completions = sink.completions.lock().expect("sink mutex poisoned");
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].outcome.actual_duration_seconds, 980);
}
