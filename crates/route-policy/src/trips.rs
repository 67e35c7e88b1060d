use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_rating1to5: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tow_comfort1to10: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripOutcome {
    pub actual_duration_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reroute_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_mode_switches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_feedback: Option<TripFeedback>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_community_learning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_sensor_signals: Option<bool>,
}

/// Post-trip telemetry reported by the client when navigation ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCompletion {
    pub navigation_session_id: String,
    pub active_route_id: String,
    pub outcome: TripOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<PrivacySettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionReceipt {
    pub accepted: bool,
    pub ingestion_id: String,
}

/// Destination for completed-trip telemetry (queue, warehouse, ...).
pub trait TripSink: Send + Sync {
    fn ingest(&self, completion: TripCompletion, ingestion_id: String) -> Result<(), TripSinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TripSinkError {
    #[error("trip ingestion unavailable: {0}")]
    Unavailable(String),
}
