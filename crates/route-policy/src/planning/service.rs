use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::candidates::{CandidateSource, CandidateSourceError};
use crate::ids::IdGenerator;
use crate::monitor::{MonitorDecision, MonitorPolicy, MonitorRequest};
use crate::policy::domain::{ModeResult, TripRequest};
use crate::policy::PolicyEngine;
use crate::trips::{IngestionReceipt, TripCompletion, TripSink, TripSinkError};
use crate::validation::{
    validate_monitor, validate_plan, validate_trip_completion, ValidationError,
};

pub(crate) const INGESTION_PREFIX: &str = "ing_";

/// Envelope returned by the plan endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub request_id: String,
    pub generated_at_iso: String,
    pub results: Vec<ModeResult>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorResponse {
    pub navigation_session_id: String,
    pub decision: MonitorDecision,
}

/// Service composing the candidate source, policy engine, monitor, and trip sink.
pub struct RoutePlanningService<C, S> {
    candidates: Arc<C>,
    sink: Arc<S>,
    engine: Arc<PolicyEngine>,
    monitor: Arc<dyn MonitorPolicy>,
    ids: Arc<dyn IdGenerator>,
}

impl<C, S> RoutePlanningService<C, S>
where
    C: CandidateSource + 'static,
    S: TripSink + 'static,
{
    pub fn new(
        candidates: Arc<C>,
        sink: Arc<S>,
        engine: PolicyEngine,
        monitor: Arc<dyn MonitorPolicy>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            candidates,
            sink,
            engine: Arc::new(engine),
            monitor,
            ids,
        }
    }

    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    /// Validate a plan request, fetch candidates, and rank them per mode.
    pub fn plan(&self, request: TripRequest) -> Result<PlanResponse, PlanningServiceError> {
        validate_plan(&request)?;

        let candidates = self.candidates.candidates(&request).map_err(|err| {
            warn!(request_id = %request.request_id, error = %err, "candidate source failed");
            err
        })?;
        let results = self.engine.evaluate(&request, &candidates);

        Ok(PlanResponse {
            request_id: request.request_id,
            generated_at_iso: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            results,
            errors: Vec::new(),
        })
    }

    /// Ask the monitor policy whether the active trip should change course.
    pub fn monitor(&self, request: MonitorRequest) -> Result<MonitorResponse, PlanningServiceError> {
        validate_monitor(&request)?;

        let decision = self.monitor.decide(&request);
        info!(
            navigation_session_id = %request.navigation_session_id,
            action = ?decision.action,
            "monitor decision"
        );

        Ok(MonitorResponse {
            navigation_session_id: request.navigation_session_id,
            decision,
        })
    }

    /// Hand completed-trip telemetry to the sink and return a receipt.
    pub fn complete_trip(
        &self,
        completion: TripCompletion,
    ) -> Result<IngestionReceipt, PlanningServiceError> {
        validate_trip_completion(&completion)?;

        let ingestion_id = self.ids.next_id(INGESTION_PREFIX);
        self.sink.ingest(completion, ingestion_id.clone())?;

        Ok(IngestionReceipt {
            accepted: true,
            ingestion_id,
        })
    }
}

/// Error raised by the route planning service.
#[derive(Debug, thiserror::Error)]
pub enum PlanningServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Candidates(#[from] CandidateSourceError),
    #[error(transparent)]
    Ingestion(#[from] TripSinkError),
}
