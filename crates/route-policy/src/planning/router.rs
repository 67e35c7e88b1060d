use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::service::{PlanningServiceError, RoutePlanningService};
use crate::candidates::CandidateSource;
use crate::monitor::MonitorRequest;
use crate::policy::domain::TripRequest;
use crate::trips::{TripCompletion, TripSink};
use crate::validation::ValidationError;

/// Router builder exposing the plan, monitor, and trip completion endpoints.
pub fn planning_router<C, S>(service: Arc<RoutePlanningService<C, S>>) -> Router
where
    C: CandidateSource + 'static,
    S: TripSink + 'static,
{
    Router::new()
        .route("/v1/route/plan", post(plan_handler::<C, S>))
        .route("/v1/route/monitor", post(monitor_handler::<C, S>))
        .route("/v1/trip/complete", post(trip_complete_handler::<C, S>))
        .with_state(service)
}

pub(crate) async fn plan_handler<C, S>(
    State(service): State<Arc<RoutePlanningService<C, S>>>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Response
where
    C: CandidateSource + 'static,
    S: TripSink + 'static,
{
    match payload {
        Ok(Json(request)) => respond(service.plan(request)),
        Err(rejection) => invalid_request(ValidationError::malformed(rejection.body_text())),
    }
}

pub(crate) async fn monitor_handler<C, S>(
    State(service): State<Arc<RoutePlanningService<C, S>>>,
    payload: Result<Json<MonitorRequest>, JsonRejection>,
) -> Response
where
    C: CandidateSource + 'static,
    S: TripSink + 'static,
{
    match payload {
        Ok(Json(request)) => respond(service.monitor(request)),
        Err(rejection) => invalid_request(ValidationError::malformed(rejection.body_text())),
    }
}

pub(crate) async fn trip_complete_handler<C, S>(
    State(service): State<Arc<RoutePlanningService<C, S>>>,
    payload: Result<Json<TripCompletion>, JsonRejection>,
) -> Response
where
    C: CandidateSource + 'static,
    S: TripSink + 'static,
{
    match payload {
        Ok(Json(completion)) => respond(service.complete_trip(completion)),
        Err(rejection) => invalid_request(ValidationError::malformed(rejection.body_text())),
    }
}

fn respond<T: Serialize>(result: Result<T, PlanningServiceError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(PlanningServiceError::Validation(error)) => invalid_request(error),
        Err(PlanningServiceError::Candidates(error)) => {
            let payload = json!({
                "error": "CANDIDATE_SOURCE_UNAVAILABLE",
                "message": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
        Err(PlanningServiceError::Ingestion(error)) => {
            let payload = json!({
                "error": "INGESTION_UNAVAILABLE",
                "message": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
    }
}

fn invalid_request(error: ValidationError) -> Response {
    let payload = json!({
        "error": "INVALID_REQUEST",
        "details": error,
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
