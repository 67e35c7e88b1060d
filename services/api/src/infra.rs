use metrics_exporter_prometheus::PrometheusHandle;
use route_policy::candidates::StubCandidateSource;
use route_policy::ids::{IdGenerator, SequenceIdGenerator};
use route_policy::monitor::NoChangeMonitor;
use route_policy::planning::RoutePlanningService;
use route_policy::policy::{PlaceholderScorer, PolicyConfig, PolicyEngine};
use route_policy::trips::{TripCompletion, TripSink, TripSinkError};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;

pub(crate) type PlanningService = RoutePlanningService<StubCandidateSource, InMemoryTripSink>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps completed trips in memory until a durable sink is wired in.
#[derive(Default, Clone)]
pub(crate) struct InMemoryTripSink {
    completions: Arc<Mutex<Vec<(String, TripCompletion)>>>,
}

#[cfg(test)]
impl InMemoryTripSink {
    pub(crate) fn len(&self) -> usize {
        self.completions
            .lock()
            .map(|guard| guard.len())
            .unwrap_or_default()
    }
}

impl TripSink for InMemoryTripSink {
    fn ingest(&self, completion: TripCompletion, ingestion_id: String) -> Result<(), TripSinkError> {
        let mut guard = self
            .completions
            .lock()
            .map_err(|_| TripSinkError::Unavailable("trip store lock poisoned".to_string()))?;
        debug!(%ingestion_id, session = %completion.navigation_session_id, "trip stored");
        guard.push((ingestion_id, completion));
        Ok(())
    }
}

/// Wire the stub candidate source, placeholder scorer, and no-change monitor
/// around a single id sequence shared by routes, selections, and receipts.
pub(crate) fn planning_service(policy: PolicyConfig, sink: Arc<InMemoryTripSink>) -> PlanningService {
    let ids: Arc<dyn IdGenerator> = Arc::new(SequenceIdGenerator::new());
    let engine = PolicyEngine::with_parts(policy, Arc::new(PlaceholderScorer), Arc::clone(&ids));

    RoutePlanningService::new(
        Arc::new(StubCandidateSource::new(Arc::clone(&ids))),
        sink,
        engine,
        Arc::new(NoChangeMonitor),
        ids,
    )
}

pub(crate) fn parse_stress_tolerance(raw: &str) -> Result<u8, String> {
    match raw.trim().parse::<u8>() {
        Ok(value) if (1..=100).contains(&value) => Ok(value),
        _ => Err(format!("stress tolerance must be 1-100, got '{raw}'")),
    }
}
