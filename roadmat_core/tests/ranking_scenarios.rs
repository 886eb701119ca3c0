//! End-to-end ranking scenarios against small hand-built catalogs.

use roadmat_core::conditions::{SoilType, TrafficLoad, Weather};
use roadmat_core::engine::{EngineConfig, RecommendationEngine};
use roadmat_core::materials::{MaterialCatalog, MaterialProfile, PropertyRatings};
use roadmat_core::params::{ParameterPolicy, ProjectParameters, RawProjectParameters};

const TWO_MATERIALS: &str = r#"{
    "materials": [
        {
            "name": "Asphalt Concrete",
            "properties": { "durability": 8, "cost": 7, "weather_resistance": 7, "load_capacity": 8, "maintenance": 6 },
            "suitable_conditions": { "traffic_load": ["medium", "high"], "weather": ["moderate", "hot"], "soil_type": ["granular", "rocky"] },
            "advantages": ["Good load distribution", "Smooth riding surface"]
        },
        {
            "name": "Gravel",
            "properties": { "durability": 5, "cost": 4, "weather_resistance": 5, "load_capacity": 5, "maintenance": 4 },
            "suitable_conditions": { "traffic_load": ["low", "medium"], "weather": ["moderate", "dry"], "soil_type": ["granular", "rocky"] },
            "advantages": ["Low cost", "Good drainage"]
        }
    ]
}"#;

fn medium_moderate_granular() -> ProjectParameters {
    ProjectParameters::new("County Road 12", TrafficLoad::Medium, Weather::Moderate, SoilType::Granular)
}

#[test]
fn asphalt_outranks_gravel() {
    let catalog = MaterialCatalog::from_json_str(TWO_MATERIALS).unwrap();
    let engine = RecommendationEngine::new(&catalog, EngineConfig::default());

    let ranked = engine.recommend(&medium_moderate_granular()).unwrap();
    assert_eq!(ranked.len(), 2);

    // Asphalt: 51.2×0.3 + 45.6×0.25 + 6.8×0.2 + 75×0.25 = 46.87
    assert_eq!(ranked[0].material, "Asphalt Concrete");
    assert_eq!(ranked[0].final_score, 46.87);
    assert_eq!(ranked[0].detailed_scores.load_capacity, 51.2);
    assert_eq!(ranked[0].detailed_scores.cost_efficiency, 45.6);
    assert_eq!(ranked[0].detailed_scores.environmental_impact, 6.8);
    assert_eq!(ranked[0].detailed_scores.weather_resistance, 75.0);

    // Gravel: 20×0.3 + 30.6×0.25 + 7.2×0.2 + 50×0.25 = 27.59
    assert_eq!(ranked[1].material, "Gravel");
    assert_eq!(ranked[1].final_score, 27.59);
}

#[test]
fn ranking_is_idempotent() {
    let catalog = MaterialCatalog::from_json_str(TWO_MATERIALS).unwrap();
    let engine = RecommendationEngine::new(&catalog, EngineConfig::default());
    let params = medium_moderate_granular();

    let first = engine.recommend(&params).unwrap();
    let second = engine.recommend(&params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn equal_scores_keep_catalog_order() {
    let ratings = PropertyRatings::new(6, 5, 6, 6, 5);
    let materials = ["Base Course B", "Base Course A", "Base Course C"]
        .into_iter()
        .map(|name| MaterialProfile::new(name, ratings).unwrap())
        .collect();
    let catalog = MaterialCatalog::new(materials).unwrap();
    let engine = RecommendationEngine::new(&catalog, EngineConfig::default());

    let ranked = engine.recommend(&medium_moderate_granular()).unwrap();
    let names: Vec<&str> = ranked.iter().map(|r| r.material.as_str()).collect();
    assert_eq!(names, vec!["Base Course B", "Base Course A", "Base Course C"]);
    assert!(ranked.windows(2).all(|w| w[0].final_score == w[1].final_score));
}

#[test]
fn tie_order_follows_catalog_not_name() {
    let strong = PropertyRatings::new(9, 5, 9, 9, 5);
    let tied = PropertyRatings::new(6, 5, 6, 6, 5);
    let catalog = MaterialCatalog::new(vec![
        MaterialProfile::new("Zeta Mix", tied).unwrap(),
        MaterialProfile::new("Strong Mix", strong).unwrap(),
        MaterialProfile::new("Alpha Mix", tied).unwrap(),
    ])
    .unwrap();
    let engine = RecommendationEngine::new(&catalog, EngineConfig::default());

    let ranked = engine.recommend(&medium_moderate_granular()).unwrap();
    let names: Vec<&str> = ranked.iter().map(|r| r.material.as_str()).collect();
    assert_eq!(names, vec!["Strong Mix", "Zeta Mix", "Alpha Mix"]);
}

#[test]
fn lenient_unknown_values_score_like_fallbacks() {
    let catalog = MaterialCatalog::from_json_str(TWO_MATERIALS).unwrap();
    let engine = RecommendationEngine::new(&catalog, EngineConfig::default());

    let unknown = RawProjectParameters::new("County Road 12", "heavy-ish", "foggy", "loam");
    let report = engine.report(&unknown).unwrap();
    assert_eq!(report.substitutions.len(), 3);
    assert_eq!(report.policy, ParameterPolicy::Lenient);

    let baseline = engine.recommend(&medium_moderate_granular()).unwrap();
    assert_eq!(report.recommendations, baseline);
}

#[test]
fn strict_policy_rejects_unknown_values() {
    let catalog = MaterialCatalog::from_json_str(TWO_MATERIALS).unwrap();
    let engine = RecommendationEngine::new(&catalog, EngineConfig::strict());

    let err = engine
        .report(&RawProjectParameters::new("County Road 12", "heavy-ish", "moderate", "granular"))
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_PARAMETER");

    let ok = engine
        .report(&RawProjectParameters::new("County Road 12", "Medium", "moderate", "granular"))
        .unwrap();
    assert_eq!(ok.best_match().unwrap().material, "Asphalt Concrete");
}

#[test]
fn missing_location_fails_under_both_policies() {
    let catalog = MaterialCatalog::from_json_str(TWO_MATERIALS).unwrap();
    for config in [EngineConfig::default(), EngineConfig::strict()] {
        let engine = RecommendationEngine::new(&catalog, config);
        let err = engine
            .report(&RawProjectParameters::new("", "medium", "moderate", "granular"))
            .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }
}

#[test]
fn malformed_catalog_does_not_load() {
    let json = TWO_MATERIALS.replace("\"cost\": 4, ", "");
    let err = MaterialCatalog::from_json_str(&json).unwrap_err();
    assert_eq!(err.error_code(), "MALFORMED_PROFILE");
}

#[test]
fn catalog_is_shared_across_threads() {
    let catalog = MaterialCatalog::from_json_str(TWO_MATERIALS).unwrap();
    let engine = RecommendationEngine::new(&catalog, EngineConfig::default());
    let expected = engine.recommend(&medium_moderate_granular()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.recommend(&medium_moderate_granular()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn every_condition_combination_scores_within_range() {
    let catalog = roadmat_core::builtin_catalog().unwrap();
    let engine = RecommendationEngine::new(catalog, EngineConfig::default());

    for traffic in TrafficLoad::ALL {
        for weather in Weather::ALL {
            for soil in SoilType::ALL {
                let params = ProjectParameters::new("Grid", traffic, weather, soil);
                for rec in engine.recommend(&params).unwrap() {
                    assert!(rec.final_score > 0.0 && rec.final_score <= 100.0, "{:?}", rec);
                    assert!(rec.detailed_scores.environmental_impact <= 10.0);
                    assert!(rec.maintenance_prediction.interval_years > 0.0);
                    assert!(rec.maintenance_prediction.annual_cost_factor > 0.0);
                    assert!(rec.suitability.score <= 100.0);
                }
            }
        }
    }
}
