//! # Scoring Calculations
//!
//! Pure functions mapping a material's ratings plus site conditions to
//! scores. Nothing here touches the catalog or holds state.
//!
//! ## Available Calculations
//!
//! - [`metrics`] - The four weighted sub-scores (load capacity, cost
//!   efficiency, environmental impact, weather resistance)
//! - [`maintenance`] - Maintenance interval and annual cost forecast
//! - [`suitability`] - Site compatibility check against a material's
//!   suitable conditions (informational, not used for ranking)
//!
//! All factors are hand-tuned heuristics, not material-science models.

pub mod maintenance;
pub mod metrics;
pub mod suitability;

// Re-export commonly used types
pub use maintenance::{predict_maintenance, MaintenancePrediction};
pub use metrics::{
    calculate_cost_efficiency, calculate_environmental_impact, calculate_load_bearing_capacity,
    calculate_weather_resistance, MetricScores,
};
pub use suitability::{assess_suitability, SuitabilityAssessment};

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value of `value`, with exact ties going to the
/// even digit. `3.45` is stored as `3.4499999999999997` and becomes `3.4`;
/// `1.25` is exact and also becomes `1.2`. Scaling by `10^decimals` first
/// would push both across the midpoint.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
