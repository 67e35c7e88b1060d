use serde::{Deserialize, Serialize};

pub const DEFAULT_LARGE_TRAILER_THRESHOLD_FT: f64 = 16.0;
pub const DEFAULT_EXCEPTION_RADIUS_MILES: f64 = 1.0;
pub const DEFAULT_ROUTES_PER_MODE: usize = 2;

/// Engine-wide policy defaults; requests may override them via `constraints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub large_trailer_threshold_ft: f64,
    pub destination_exception_radius_miles: f64,
    /// Routes kept per mode when the request does not ask for a count.
    pub default_routes_per_mode: usize,
    /// Hard ceiling on routes kept per mode.
    pub max_routes_per_mode: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            large_trailer_threshold_ft: DEFAULT_LARGE_TRAILER_THRESHOLD_FT,
            destination_exception_radius_miles: DEFAULT_EXCEPTION_RADIUS_MILES,
            default_routes_per_mode: DEFAULT_ROUTES_PER_MODE,
            max_routes_per_mode: DEFAULT_ROUTES_PER_MODE,
        }
    }
}
