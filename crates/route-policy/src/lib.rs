//! Routing intelligence core: evaluates candidate driving routes against
//! driver-selected modes and explains the ranking.

pub mod candidates;
pub mod config;
pub mod error;
pub mod ids;
pub mod monitor;
pub mod planning;
pub mod policy;
pub mod telemetry;
pub mod trips;
pub mod validation;
