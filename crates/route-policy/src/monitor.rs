//! In-trip monitoring decision point.
//!
//! Only `NoChangeMonitor` exists today. Lookahead and cooldown settings are
//! accepted on the request but not yet consumed by any policy.

use serde::{Deserialize, Serialize};

use crate::policy::domain::{Mode, PositionFix, UserState, VehicleProfile};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lookahead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_alternates: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cooldowns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_seconds_between_reroutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_seconds_between_prompts: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorRequest {
    pub navigation_session_id: String,
    pub active_route_id: String,
    pub current_position: PositionFix,
    pub mode: Mode,
    pub user_state: UserState,
    pub vehicle_profile: VehicleProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookahead: Option<Lookahead>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldowns: Option<Cooldowns>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum MonitorAction {
    NoChange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorDecision {
    pub action: MonitorAction,
    pub reason: String,
}

/// Decides whether an active navigation session should change course.
pub trait MonitorPolicy: Send + Sync {
    fn decide(&self, request: &MonitorRequest) -> MonitorDecision;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoChangeMonitor;

impl MonitorPolicy for NoChangeMonitor {
    fn decide(&self, _request: &MonitorRequest) -> MonitorDecision {
        MonitorDecision {
            action: MonitorAction::NoChange,
            reason: "Monitoring stub: no change.".to_string(),
        }
    }
}
