use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::candidates::{CandidateSource, CandidateSourceError, StubCandidateSource};
use crate::ids::{IdGenerator, SequenceIdGenerator};
use crate::monitor::NoChangeMonitor;
use crate::planning::{planning_router, RoutePlanningService};
use crate::policy::domain::{CandidateRoute, TripRequest};
use crate::policy::{PlaceholderScorer, PolicyConfig, PolicyEngine};
use crate::trips::{TripCompletion, TripSink, TripSinkError};

#[derive(Default)]
pub(super) struct MemorySink {
    received: Mutex<Vec<(String, TripCompletion)>>,
}

impl MemorySink {
    pub(super) fn received(&self) -> Vec<(String, TripCompletion)> {
        self.received.lock().expect("sink mutex poisoned").clone()
    }
}

impl TripSink for MemorySink {
    fn ingest(&self, completion: TripCompletion, ingestion_id: String) -> Result<(), TripSinkError> {
        self.received
            .lock()
            .expect("sink mutex poisoned")
            .push((ingestion_id, completion));
        Ok(())
    }
}

pub(super) struct ClosedSink;

impl TripSink for ClosedSink {
    fn ingest(&self, _completion: TripCompletion, _ingestion_id: String) -> Result<(), TripSinkError> {
        Err(TripSinkError::Unavailable("queue closed".to_string()))
    }
}

pub(super) struct TimeoutSource;

impl CandidateSource for TimeoutSource {
    fn candidates(&self, _request: &TripRequest) -> Result<Vec<CandidateRoute>, CandidateSourceError> {
        Err(CandidateSourceError::Timeout(10))
    }
}

pub(super) struct EmptySource;

impl CandidateSource for EmptySource {
    fn candidates(&self, _request: &TripRequest) -> Result<Vec<CandidateRoute>, CandidateSourceError> {
        Ok(Vec::new())
    }
}

pub(super) fn service_with<C, S>(source: C, sink: Arc<S>) -> RoutePlanningService<C, S>
where
    C: CandidateSource + 'static,
    S: TripSink + 'static,
{
    let ids: Arc<dyn IdGenerator> = Arc::new(SequenceIdGenerator::new());
    let engine = PolicyEngine::with_parts(
        PolicyConfig::default(),
        Arc::new(PlaceholderScorer),
        Arc::clone(&ids),
    );
    RoutePlanningService::new(Arc::new(source), sink, engine, Arc::new(NoChangeMonitor), ids)
}

pub(super) fn build_service() -> (
    RoutePlanningService<StubCandidateSource, MemorySink>,
    Arc<MemorySink>,
) {
    let sink = Arc::new(MemorySink::default());
    let source = StubCandidateSource::new(Arc::new(SequenceIdGenerator::new()));
    (service_with(source, Arc::clone(&sink)), sink)
}

pub(super) fn router_with_service<C, S>(service: RoutePlanningService<C, S>) -> axum::Router
where
    C: CandidateSource + 'static,
    S: TripSink + 'static,
{
    planning_router(Arc::new(service))
}

pub(super) fn plan_payload() -> Value {
    json!({
        "requestId": "req-plan-001",
        "origin": { "lat": 41.5868, "lng": -93.625 },
        "destination": { "lat": 41.6611, "lng": -91.5302 },
        "time": { "departureType": "now" },
        "mode": { "primary": "TOW", "alsoReturn": ["FASTEST", "TOW"] },
        "userState": { "stressTolerance": 40 },
        "vehicleProfile": {
            "vehicleType": "TRUCK",
            "trailer": { "enabled": true, "type": "CAMPER", "lengthFt": 18 }
        },
        "preferences": { "avoidTolls": true }
    })
}

pub(super) fn trip_request() -> TripRequest {
    serde_json::from_value(plan_payload()).expect("plan payload deserializes")
}

pub(super) fn monitor_payload() -> Value {
    json!({
        "navigationSessionId": "nav-000042",
        "activeRouteId": "rt_000042",
        "currentPosition": { "lat": 41.6, "lng": -93.1, "speedMps": 26.5 },
        "mode": "TOW",
        "userState": { "stressTolerance": 40 },
        "vehicleProfile": {
            "vehicleType": "TRUCK",
            "trailer": { "enabled": true, "type": "CAMPER", "lengthFt": 18 }
        },
        "lookahead": { "minutes": 10 },
        "cooldowns": { "minSecondsBetweenReroutes": 120 }
    })
}

pub(super) fn completion_payload() -> Value {
    json!({
        "navigationSessionId": "nav-000042",
        "activeRouteId": "rt_000042",
        "outcome": {
            "actualDurationSeconds": 1010,
            "rerouteCount": 0,
            "userFeedback": { "stressRating1to5": 2, "towComfort1to10": 8 }
        },
        "privacy": { "allowCommunityLearning": true }
    })
}

pub(super) fn trip_completion() -> TripCompletion {
    serde_json::from_value(completion_payload()).expect("completion payload deserializes")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn post_json(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("payload serializes"),
        ))
        .expect("request builds")
}
