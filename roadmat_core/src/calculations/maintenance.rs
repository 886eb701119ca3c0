//! # Maintenance Forecast
//!
//! Estimates how long a surface lasts between interventions and a relative
//! annual upkeep cost, given site wear.
//!
//! ```text
//! wear                = traffic_impact × weather_impact
//! interval_years      = (durability×0.7 + (10 − maintenance)×0.3) × 0.5 / wear      (1 dp)
//! annual_cost_factor  = maintenance × wear / durability × 10                        (2 dp)
//! ```

use serde::{Deserialize, Serialize};

use super::round_to;
use crate::conditions::{TrafficLoad, Weather};
use crate::errors::{CalcError, CalcResult};
use crate::materials::PropertyRatings;

/// Predicted maintenance needs for one material on one site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePrediction {
    /// Years until the next intervention (1 decimal place)
    pub interval_years: f64,

    /// Relative annual maintenance cost unit (2 decimal places)
    pub annual_cost_factor: f64,
}

/// Forecast maintenance for a catalog material.
///
/// Catalog ratings are at least 1 and every impact factor is positive, so
/// the error path is unreachable for validated profiles.
pub fn predict_maintenance(
    ratings: &PropertyRatings,
    traffic: TrafficLoad,
    weather: Weather,
) -> CalcResult<MaintenancePrediction> {
    forecast(
        f64::from(ratings.durability),
        f64::from(ratings.maintenance),
        traffic.maintenance_impact(),
        weather.maintenance_impact(),
    )
}

/// Forecast from raw factors.
///
/// # Returns
///
/// * `Ok(MaintenancePrediction)` - Finite interval and cost
/// * `Err(CalcError::DegenerateArithmetic)` - Durability or an impact factor
///   is not strictly positive, or the result is not finite
pub fn forecast(
    durability: f64,
    maintenance: f64,
    traffic_impact: f64,
    weather_impact: f64,
) -> CalcResult<MaintenancePrediction> {
    for (name, value) in [("traffic_impact", traffic_impact), ("weather_impact", weather_impact)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(CalcError::degenerate_arithmetic(
                "maintenance interval",
                format!("{} must be positive, got {}", name, value),
            ));
        }
    }
    if !(durability.is_finite() && durability > 0.0) {
        return Err(CalcError::degenerate_arithmetic(
            "annual maintenance cost",
            format!("durability must be positive, got {}", durability),
        ));
    }

    let wear = traffic_impact * weather_impact;

    let interval = (durability * 0.7 + (10.0 - maintenance) * 0.3) * 0.5 / wear;
    let annual_cost = maintenance * wear / durability * 10.0;

    if !(interval.is_finite() && annual_cost.is_finite()) {
        return Err(CalcError::degenerate_arithmetic(
            "maintenance forecast",
            "result is not finite",
        ));
    }

    Ok(MaintenancePrediction {
        interval_years: round_to(interval, 1),
        annual_cost_factor: round_to(annual_cost, 2),
    })
}
