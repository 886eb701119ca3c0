//! # Ranking Engine
//!
//! Scores every material in a catalog against one set of project parameters
//! and returns them best-first.
//!
//! ## Aggregation
//!
//! ```text
//! final_score = 0.30 × load_capacity
//!             + 0.25 × cost_efficiency
//!             + 0.20 × environmental_impact
//!             + 0.25 × weather_resistance          (rounded to 2 dp)
//! ```
//!
//! Sub-scores are reported rounded to 2 dp; the final score is computed from
//! the unrounded values.
//!
//! ## Ordering
//!
//! Descending by `final_score`. Equal scores keep catalog order (stable
//! sort); there is no secondary key. The full list is returned.
//!
//! ## Example
//!
//! ```rust
//! use roadmat_core::engine::RecommendationEngine;
//! use roadmat_core::conditions::{SoilType, TrafficLoad, Weather};
//! use roadmat_core::params::ProjectParameters;
//!
//! let engine = RecommendationEngine::builtin().unwrap();
//! let params = ProjectParameters::new("Route 9", TrafficLoad::High, Weather::Moderate, SoilType::Rocky);
//!
//! let ranked = engine.recommend(&params).unwrap();
//! println!("Best match: {} ({:.1})", ranked[0].material, ranked[0].final_score);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{
    assess_suitability, predict_maintenance, round_to, MaintenancePrediction, MetricScores,
    SuitabilityAssessment,
};
use crate::errors::CalcResult;
use crate::materials::{builtin_catalog, MaterialCatalog, MaterialProfile, PropertyRatings};
use crate::params::{ParameterPolicy, ProjectParameters, RawProjectParameters};
use crate::report::RecommendationReport;

/// Fixed sub-score weights. Sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub load_capacity: f64,
    pub cost_efficiency: f64,
    pub environmental_impact: f64,
    pub weather_resistance: f64,
}

/// The weights used for every ranking
pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    load_capacity: 0.30,
    cost_efficiency: 0.25,
    environmental_impact: 0.20,
    weather_resistance: 0.25,
};

impl ScoreWeights {
    /// Weighted sum of the four sub-scores
    pub fn combine(&self, scores: &MetricScores) -> f64 {
        scores.load_capacity * self.load_capacity
            + scores.cost_efficiency * self.cost_efficiency
            + scores.environmental_impact * self.environmental_impact
            + scores.weather_resistance * self.weather_resistance
    }
}

/// Sub-scores as reported (2 decimal places)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailedScores {
    pub load_capacity: f64,
    pub cost_efficiency: f64,
    pub environmental_impact: f64,
    pub weather_resistance: f64,
}

impl From<&MetricScores> for DetailedScores {
    fn from(scores: &MetricScores) -> Self {
        DetailedScores {
            load_capacity: round_to(scores.load_capacity, 2),
            cost_efficiency: round_to(scores.cost_efficiency, 2),
            environmental_impact: round_to(scores.environmental_impact, 2),
            weather_resistance: round_to(scores.weather_resistance, 2),
        }
    }
}

/// One ranked material.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material": "Gravel",
///   "final_score": 27.59,
///   "properties": { "durability": 5, "cost": 4, "weather_resistance": 5, "load_capacity": 5, "maintenance": 4 },
///   "advantages": ["Low cost", "Easy construction"],
///   "detailed_scores": { "load_capacity": 20.0, "cost_efficiency": 30.6, "environmental_impact": 7.2, "weather_resistance": 50.0 },
///   "maintenance_prediction": { "interval_years": 3.1, "annual_cost_factor": 6.8 },
///   "suitability": { "score": 92.5, "traffic_match": true, "weather_match": true, "soil_match": true }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    /// Catalog name of the material
    pub material: String,

    /// Ranking key, 0-100 scale (2 decimal places)
    pub final_score: f64,

    /// Raw catalog ratings, for charts
    pub properties: PropertyRatings,

    pub advantages: Vec<String>,

    pub detailed_scores: DetailedScores,

    pub maintenance_prediction: MaintenancePrediction,

    /// Declared-conditions fit for the site (informational)
    pub suitability: SuitabilityAssessment,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// How unrecognized condition strings are handled at the boundary
    #[serde(default)]
    pub policy: ParameterPolicy,
}

impl EngineConfig {
    pub fn strict() -> Self {
        EngineConfig {
            policy: ParameterPolicy::Strict,
        }
    }
}

/// Score one material.
///
/// Fails only if the maintenance forecast hits degenerate arithmetic, which
/// a validated profile cannot trigger.
pub fn score_material(material: &MaterialProfile, params: &ProjectParameters) -> CalcResult<ScoredRecommendation> {
    let ratings = &material.properties;
    let scores = MetricScores::calculate(ratings, material.is_recycled, params.traffic_load, params.weather);
    let maintenance_prediction = predict_maintenance(ratings, params.traffic_load, params.weather)?;
    let final_score = round_to(SCORE_WEIGHTS.combine(&scores), 2);

    tracing::debug!(
        material = %material.name,
        load_capacity = scores.load_capacity,
        cost_efficiency = scores.cost_efficiency,
        environmental_impact = scores.environmental_impact,
        weather_resistance = scores.weather_resistance,
        final_score,
        "scored material"
    );

    Ok(ScoredRecommendation {
        material: material.name.clone(),
        final_score,
        properties: *ratings,
        advantages: material.advantages.clone(),
        detailed_scores: DetailedScores::from(&scores),
        maintenance_prediction,
        suitability: assess_suitability(material, params),
    })
}

/// Score and rank every material, best first. Ties keep catalog order.
pub fn rank_materials(catalog: &MaterialCatalog, params: &ProjectParameters) -> CalcResult<Vec<ScoredRecommendation>> {
    let mut ranked = catalog
        .iter()
        .map(|material| score_material(material, params))
        .collect::<CalcResult<Vec<_>>>()?;

    // sort_by is stable
    ranked.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    Ok(ranked)
}

/// Catalog plus configuration. Read-only; safe to share across threads.
#[derive(Debug, Clone)]
pub struct RecommendationEngine<'a> {
    catalog: &'a MaterialCatalog,
    config: EngineConfig,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalog: &'a MaterialCatalog, config: EngineConfig) -> Self {
        RecommendationEngine { catalog, config }
    }

    /// Rank the full catalog for typed parameters.
    pub fn recommend(&self, params: &ProjectParameters) -> CalcResult<Vec<ScoredRecommendation>> {
        rank_materials(self.catalog, params)
    }

    /// Resolve raw strings under the configured policy, rank, and wrap the
    /// result with request metadata.
    pub fn report(&self, raw: &RawProjectParameters) -> CalcResult<RecommendationReport> {
        let resolved = raw.resolve(self.config.policy)?;
        let recommendations = self.recommend(&resolved.parameters)?;

        tracing::info!(
            location = %resolved.parameters.location,
            materials = recommendations.len(),
            substitutions = resolved.substitutions.len(),
            "ranked materials"
        );

        Ok(RecommendationReport::new(
            resolved.parameters,
            self.config.policy,
            resolved.substitutions,
            recommendations,
        ))
    }
}

impl RecommendationEngine<'static> {
    /// Engine over the built-in catalog with the default (lenient) policy
    pub fn builtin() -> CalcResult<Self> {
        Ok(RecommendationEngine::new(builtin_catalog()?, EngineConfig::default()))
    }
}

/// Rank the built-in catalog for typed parameters.
pub fn get_recommendations(params: &ProjectParameters) -> CalcResult<Vec<ScoredRecommendation>> {
    RecommendationEngine::builtin()?.recommend(params)
}
