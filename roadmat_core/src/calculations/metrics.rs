//! # Metric Calculators
//!
//! The four sub-scores that feed the final ranking score.
//!
//! ```text
//! load_capacity        = load_capacity × load_multiplier(traffic) × (durability / 10) × 10
//! cost_efficiency      = ((durability×0.7 + maintenance×0.3) × 0.6 + ((10 − cost) / 10) × 0.4) × 10
//! environmental_impact = min(10, 6 + 3·[recycled] + (10 − maintenance) × 0.2)
//! weather_resistance   = (durability × w_d(weather) + weather_resistance × w_r(weather)) × 10
//! ```
//!
//! Load capacity, cost efficiency and weather resistance land on a 0-100
//! scale for ratings in `[1, 10]`; environmental impact is capped at 10.
//!
//! ## Example
//!
//! ```rust
//! use roadmat_core::calculations::metrics::calculate_load_bearing_capacity;
//! use roadmat_core::conditions::TrafficLoad;
//! use roadmat_core::materials::PropertyRatings;
//!
//! // Portland Cement Concrete under high traffic: 9 × 0.9 × 0.9 × 10
//! let ratings = PropertyRatings::new(9, 8, 9, 9, 8);
//! let score = calculate_load_bearing_capacity(TrafficLoad::High, &ratings);
//! assert!((score - 72.9).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::conditions::{TrafficLoad, Weather};
use crate::materials::PropertyRatings;

/// Starting environmental score before adjustments
pub const ENVIRONMENTAL_BASE: f64 = 6.0;
/// Bonus for recycled materials
pub const RECYCLED_BONUS: f64 = 3.0;
/// Upper cap on the environmental score
pub const ENVIRONMENTAL_MAX: f64 = 10.0;

/// The four sub-scores for one material under one set of site conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    pub load_capacity: f64,
    pub cost_efficiency: f64,
    pub environmental_impact: f64,
    pub weather_resistance: f64,
}

impl MetricScores {
    /// Compute all four sub-scores.
    pub fn calculate(ratings: &PropertyRatings, is_recycled: bool, traffic: TrafficLoad, weather: Weather) -> Self {
        MetricScores {
            load_capacity: calculate_load_bearing_capacity(traffic, ratings),
            cost_efficiency: calculate_cost_efficiency(ratings),
            environmental_impact: calculate_environmental_impact(ratings, is_recycled),
            weather_resistance: calculate_weather_resistance(weather, ratings),
        }
    }
}

/// Load-bearing capacity under the given traffic.
///
/// No cap: the result is a product of positive factors.
pub fn calculate_load_bearing_capacity(traffic: TrafficLoad, ratings: &PropertyRatings) -> f64 {
    let base_capacity = f64::from(ratings.load_capacity);
    let durability_factor = f64::from(ratings.durability) / 10.0;

    base_capacity * traffic.load_multiplier() * durability_factor * 10.0
}

/// Cost efficiency: 60% lifespan quality, 40% inverted sticker price.
pub fn calculate_cost_efficiency(ratings: &PropertyRatings) -> f64 {
    let durability = f64::from(ratings.durability);
    let maintenance = f64::from(ratings.maintenance);
    let cost = f64::from(ratings.cost);

    let lifespan_factor = durability * 0.7 + maintenance * 0.3;
    // Cheaper scores higher
    let cost_factor = (10.0 - cost) / 10.0;

    (lifespan_factor * 0.6 + cost_factor * 0.4) * 10.0
}

/// Environmental impact, capped at [`ENVIRONMENTAL_MAX`].
///
/// Less upkeep means a smaller footprint. Only the upper bound is clamped.
pub fn calculate_environmental_impact(ratings: &PropertyRatings, is_recycled: bool) -> f64 {
    let mut score = ENVIRONMENTAL_BASE;

    if is_recycled {
        score += RECYCLED_BONUS;
    }

    score += (10.0 - f64::from(ratings.maintenance)) * 0.2;

    score.min(ENVIRONMENTAL_MAX)
}

/// Weather resistance as a weather-dependent blend of durability and the
/// explicit weather resistance rating.
pub fn calculate_weather_resistance(weather: Weather, ratings: &PropertyRatings) -> f64 {
    let weights = weather.weights();

    (f64::from(ratings.durability) * weights.durability
        + f64::from(ratings.weather_resistance) * weights.weather_resistance)
        * 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcc() -> PropertyRatings {
        PropertyRatings::new(9, 8, 9, 9, 8)
    }

    fn gravel() -> PropertyRatings {
        PropertyRatings::new(5, 4, 5, 5, 4)
    }

    #[test]
    fn test_load_capacity() {
        // 9 × 0.9 × 0.9 × 10 = 72.9
        assert!((calculate_load_bearing_capacity(TrafficLoad::High, &pcc()) - 72.9).abs() < 1e-9);
        // 5 × 0.8 × 0.5 × 10 = 20.0
        assert!((calculate_load_bearing_capacity(TrafficLoad::Medium, &gravel()) - 20.0).abs() < 1e-9);
        // 5 × 0.6 × 0.5 × 10 = 15.0
        assert!((calculate_load_bearing_capacity(TrafficLoad::Low, &gravel()) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_capacity_increases_with_traffic_severity() {
        let scores: Vec<f64> = TrafficLoad::ALL
            .iter()
            .map(|t| calculate_load_bearing_capacity(*t, &pcc()))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cost_efficiency() {
        // lifespan = 9×0.7 + 8×0.3 = 8.7, cost factor = 0.2
        // (8.7×0.6 + 0.2×0.4) × 10 = 53.0
        assert!((calculate_cost_efficiency(&pcc()) - 53.0).abs() < 1e-9);
        // lifespan = 3.5 + 1.2 = 4.7, cost factor = 0.6
        // (2.82 + 0.24) × 10 = 30.6
        assert!((calculate_cost_efficiency(&gravel()) - 30.6).abs() < 1e-9);
    }

    #[test]
    fn test_cheaper_is_more_cost_efficient() {
        let cheap = PropertyRatings::new(7, 2, 7, 7, 5);
        let pricey = PropertyRatings::new(7, 9, 7, 7, 5);
        assert!(calculate_cost_efficiency(&cheap) > calculate_cost_efficiency(&pricey));
    }

    #[test]
    fn test_environmental_impact() {
        // 6 + (10 − 8) × 0.2 = 6.4
        assert!((calculate_environmental_impact(&pcc(), false) - 6.4).abs() < 1e-9);
        // 6 + 3 + (10 − 4) × 0.2 = 10.2 → 10.0
        assert_eq!(calculate_environmental_impact(&gravel(), true), 10.0);
    }

    #[test]
    fn test_environmental_impact_clamps_at_ten() {
        // Outside the catalog range on purpose: 6 + 3 + 2 = 11 → 10
        let ratings = PropertyRatings::new(5, 5, 5, 5, 0);
        assert_eq!(calculate_environmental_impact(&ratings, true), 10.0);
    }

    #[test]
    fn test_weather_resistance() {
        // (9×0.5 + 9×0.5) × 10 = 90
        assert!((calculate_weather_resistance(Weather::Moderate, &pcc()) - 90.0).abs() < 1e-9);

        // Wet favors the weather resistance rating: (8×0.3 + 4×0.7) × 10 = 52
        let ratings = PropertyRatings::new(8, 5, 4, 5, 5);
        assert!((calculate_weather_resistance(Weather::Wet, &ratings) - 52.0).abs() < 1e-9);
        // Dry favors durability: (8×0.6 + 4×0.4) × 10 = 64
        assert!((calculate_weather_resistance(Weather::Dry, &ratings) - 64.0).abs() < 1e-9);
    }

    #[test]
    fn test_metric_scores_bundle() {
        let scores = MetricScores::calculate(&gravel(), false, TrafficLoad::Medium, Weather::Moderate);
        assert!((scores.load_capacity - 20.0).abs() < 1e-9);
        assert!((scores.cost_efficiency - 30.6).abs() < 1e-9);
        assert!((scores.environmental_impact - 7.2).abs() < 1e-9);
        assert!((scores.weather_resistance - 50.0).abs() < 1e-9);
    }
}
