//! # Site Suitability
//!
//! Checks a material's declared suitable conditions against the project site.
//! The result is shown next to each recommendation; ranking uses the final
//! score only.
//!
//! | Component                                   | Points        |
//! |---------------------------------------------|---------------|
//! | Traffic load accepted                       | 35            |
//! | Weather accepted                            | 25            |
//! | Soil type accepted                          | 25            |
//! | mean(durability, weather res., load cap.)   | × 10 × 0.15   |

use serde::{Deserialize, Serialize};

use crate::materials::MaterialProfile;
use crate::params::ProjectParameters;

const TRAFFIC_POINTS: f64 = 35.0;
const WEATHER_POINTS: f64 = 25.0;
const SOIL_POINTS: f64 = 25.0;
const PROPERTY_WEIGHT: f64 = 0.15;

/// How well a material's declared conditions fit the site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityAssessment {
    /// 0-100
    pub score: f64,
    pub traffic_match: bool,
    pub weather_match: bool,
    pub soil_match: bool,
}

impl SuitabilityAssessment {
    /// Every site dimension is accepted
    pub fn is_full_match(&self) -> bool {
        self.traffic_match && self.weather_match && self.soil_match
    }
}

pub fn assess_suitability(material: &MaterialProfile, params: &ProjectParameters) -> SuitabilityAssessment {
    let conditions = &material.suitable_conditions;
    let traffic_match = conditions.accepts_traffic(params.traffic_load);
    let weather_match = conditions.accepts_weather(params.weather);
    let soil_match = conditions.accepts_soil(params.soil_type);

    let mut score = 0.0;
    if traffic_match {
        score += TRAFFIC_POINTS;
    }
    if weather_match {
        score += WEATHER_POINTS;
    }
    if soil_match {
        score += SOIL_POINTS;
    }

    let props = &material.properties;
    let property_mean = (f64::from(props.durability)
        + f64::from(props.weather_resistance)
        + f64::from(props.load_capacity))
        / 3.0;
    score += property_mean * 10.0 * PROPERTY_WEIGHT;

    SuitabilityAssessment {
        score,
        traffic_match,
        weather_match,
        soil_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{SoilType, TrafficLoad, Weather};
    use crate::materials::{PropertyRatings, SuitableConditions};

    fn params(traffic: TrafficLoad, weather: Weather, soil: SoilType) -> ProjectParameters {
        ProjectParameters::new("Test Site", traffic, weather, soil)
    }

    fn gravel() -> MaterialProfile {
        MaterialProfile::new("Gravel", PropertyRatings::new(5, 4, 5, 5, 4))
            .unwrap()
            .with_conditions(SuitableConditions {
                traffic_load: vec!["low".into(), "medium".into()],
                weather: vec!["moderate".into(), "dry".into()],
                soil_type: vec!["granular".into(), "rocky".into()],
            })
    }

    #[test]
    fn test_full_match() {
        let result = assess_suitability(
            &gravel(),
            &params(TrafficLoad::Low, Weather::Dry, SoilType::Rocky),
        );
        assert!(result.is_full_match());
        // 35 + 25 + 25 + 5 × 10 × 0.15 = 92.5
        assert!((result.score - 92.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_match() {
        let result = assess_suitability(
            &gravel(),
            &params(TrafficLoad::VeryHigh, Weather::Wet, SoilType::Clayey),
        );
        assert!(!result.traffic_match);
        assert!(!result.weather_match);
        assert!(!result.soil_match);
        assert!((result.score - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_universal_conditions() {
        let material = MaterialProfile::new("Anything", PropertyRatings::new(9, 8, 9, 9, 8)).unwrap();
        let result = assess_suitability(
            &material,
            &params(TrafficLoad::VeryHigh, Weather::Cold, SoilType::Silty),
        );
        assert!(result.is_full_match());
        // 85 + 9 × 10 × 0.15 = 98.5
        assert!((result.score - 98.5).abs() < 1e-9);
    }
}
