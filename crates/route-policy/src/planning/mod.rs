//! Request-facing service wrapping the policy engine: validation, candidate
//! sourcing, monitoring, trip completion, and the axum router for them.

pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use router::planning_router;
pub use service::{MonitorResponse, PlanResponse, PlanningServiceError, RoutePlanningService};
