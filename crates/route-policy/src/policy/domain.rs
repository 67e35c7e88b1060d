use serde::{Deserialize, Serialize};

/// Routing objective requested by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    LowStress,
    Tow,
    FuelSaver,
    Fastest,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::LowStress, Mode::Tow, Mode::FuelSaver, Mode::Fastest];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::LowStress => "LOW_STRESS",
            Mode::Tow => "TOW",
            Mode::FuelSaver => "FUEL_SAVER",
            Mode::Fastest => "FASTEST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartureType {
    Now,
    Schedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureWindow {
    pub departure_type: DepartureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time_iso: Option<String>,
}

/// Primary mode plus any additional modes the client wants ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeSelection {
    pub primary: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub also_return: Option<Vec<Mode>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub stress_tolerance: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Car,
    Suv,
    Truck,
    Minivan,
    PassengerVan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrailerType {
    Utility,
    Camper,
    Freeform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightClass {
    Light,
    #[default]
    Medium,
    Heavy,
}

/// Trailer attached to the vehicle. `kind` and `length_ft` are required once
/// `enabled` is set; the validator rejects requests that omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trailer {
    pub enabled: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TrailerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_ft: Option<f64>,
    #[serde(default)]
    pub weight_class: WeightClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    pub vehicle_type: VehicleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer: Option<Trailer>,
}

impl VehicleProfile {
    /// A missing trailer block is treated the same as a disabled trailer.
    pub fn trailer_enabled(&self) -> bool {
        self.trailer.as_ref().map(|trailer| trailer.enabled).unwrap_or(false)
    }

    pub fn enabled_trailer(&self) -> Option<&Trailer> {
        self.trailer.as_ref().filter(|trailer| trailer.enabled)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_tolls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_highways: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_ferries: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_unpaved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_tight_streets: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_alternatives: Option<u8>,
}

/// Per-request overrides of the engine's policy defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_trailer_threshold_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_exception_radius_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_route_count_per_mode: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFix {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_mps: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<PositionFix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_route_id: Option<String>,
}

/// Plan request as accepted by the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub request_id: String,
    pub origin: LatLng,
    pub destination: LatLng,
    pub time: DepartureWindow,
    pub mode: ModeSelection,
    pub user_state: UserState,
    pub vehicle_profile: VehicleProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<RoutePreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<PolicyConstraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<NavigationSession>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteProvider {
    Here,
    Tomtom,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryEncoding {
    Polyline6,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGeometry {
    pub encoding: GeometryEncoding,
    pub polyline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub step_index: u32,
    pub instruction: String,
    pub distance_meters: u32,
    pub duration_seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtaEstimate {
    pub seconds_p50: u32,
    pub seconds_p90: u32,
}

/// Route alternative produced by an external routing provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRoute {
    pub route_id: String,
    pub provider: RouteProvider,
    pub geometry: RouteGeometry,
    pub steps: Vec<RouteStep>,
    pub eta: EtaEstimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReliabilityLabel {
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEta {
    pub seconds_p50: u32,
    pub seconds_p90: u32,
    pub reliability_label: ReliabilityLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteScores {
    pub stress_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tow_confidence: Option<u8>,
    pub fuel_index: f64,
    pub construction_friction: f64,
    pub collapse_risk: f64,
    pub tight_street_exposure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyContribution {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDebug {
    pub blocked_edges_count: u32,
    pub penalty_breakdown_top: Vec<PenaltyContribution>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryKind {
    HighStress,
    LowTowConfidence,
    TowRulesActive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    #[serde(rename = "type")]
    pub kind: AdvisoryKind,
    pub message: String,
}

/// One candidate route scored for a single mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub route_id: String,
    pub provider: RouteProvider,
    pub eta: ScoredEta,
    pub scores: RouteScores,
    pub why: Vec<String>,
    pub advisories: Vec<Advisory>,
    pub geometry: RouteGeometry,
    pub steps: Vec<RouteStep>,
    pub policy_debug: PolicyDebug,
}

/// Scored candidate retained after ranking, tagged with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedRoute {
    #[serde(flatten)]
    pub candidate: ScoredCandidate,
    pub rank: u32,
    pub selection_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    pub large_trailer_applied: bool,
    pub destination_exception_radius_miles: f64,
    pub avoid_tight_streets_effective: bool,
    pub stress_tolerance_used: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeResult {
    pub mode: Mode,
    pub policy_summary: PolicySummary,
    pub routes: Vec<SelectedRoute>,
}
