use std::sync::Arc;

use crate::ids::IdGenerator;
use crate::policy::domain::{
    CandidateRoute, EtaEstimate, GeometryEncoding, RouteGeometry, RouteProvider, RouteStep,
    TripRequest,
};

pub(crate) const ROUTE_PREFIX: &str = "rt_";

/// Upstream provider of route alternatives for a plan request.
pub trait CandidateSource: Send + Sync {
    fn candidates(&self, request: &TripRequest) -> Result<Vec<CandidateRoute>, CandidateSourceError>;
}

/// Failure reported by the candidate source before evaluation starts.
#[derive(Debug, thiserror::Error)]
pub enum CandidateSourceError {
    #[error("routing provider timed out after {0}s")]
    Timeout(u64),
    #[error("routing provider error: {0}")]
    Provider(String),
}

/// Offline source returning two fixed alternatives until a real provider
/// (HERE, TomTom) is wired in.
pub struct StubCandidateSource {
    ids: Arc<dyn IdGenerator>,
}

impl StubCandidateSource {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    fn route(&self, steps: [(&str, u32, u32); 2], eta: EtaEstimate) -> CandidateRoute {
        CandidateRoute {
            route_id: self.ids.next_id(ROUTE_PREFIX),
            provider: RouteProvider::Other,
            geometry: RouteGeometry {
                encoding: GeometryEncoding::Polyline6,
                polyline: "}_ilFjk~uO??".to_string(),
            },
            steps: steps
                .iter()
                .enumerate()
                .map(|(index, (instruction, distance_meters, duration_seconds))| RouteStep {
                    step_index: index as u32,
                    instruction: instruction.to_string(),
                    distance_meters: *distance_meters,
                    duration_seconds: *duration_seconds,
                })
                .collect(),
            eta,
        }
    }
}

impl CandidateSource for StubCandidateSource {
    fn candidates(&self, _request: &TripRequest) -> Result<Vec<CandidateRoute>, CandidateSourceError> {
        Ok(vec![
            self.route(
                [("Head north", 1200, 120), ("Continue straight", 5200, 360)],
                EtaEstimate {
                    seconds_p50: 900,
                    seconds_p90: 1200,
                },
            ),
            self.route(
                [("Head east", 900, 110), ("Merge and continue", 6000, 420)],
                EtaEstimate {
                    seconds_p50: 950,
                    seconds_p90: 1300,
                },
            ),
        ])
    }
}

impl std::fmt::Debug for StubCandidateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubCandidateSource").finish_non_exhaustive()
    }
}
