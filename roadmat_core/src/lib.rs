//! # roadmat_core - Road Construction Material Scoring Engine
//!
//! `roadmat_core` ranks road construction materials for a project site. Given
//! traffic load, weather and soil type it scores every material in a catalog
//! on four heuristic sub-scores, forecasts maintenance, and returns the full
//! catalog best-first. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over an immutable catalog
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Policy**: Unrecognized input is either substituted or
//!   rejected, by configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use roadmat_core::conditions::{SoilType, TrafficLoad, Weather};
//! use roadmat_core::{get_recommendations, ProjectParameters};
//!
//! let params = ProjectParameters::new("Route 9", TrafficLoad::Medium, Weather::Moderate, SoilType::Granular);
//! let ranked = get_recommendations(&params).unwrap();
//!
//! let json = serde_json::to_string_pretty(&ranked[0]).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`conditions`] - Traffic, weather and soil enums with factor tables
//! - [`materials`] - Material profiles and the catalog
//! - [`params`] - Project parameters and the unrecognized-value policy
//! - [`calculations`] - Sub-score, maintenance and suitability calculators
//! - [`engine`] - Aggregation and ranking
//! - [`report`] - Ranked result envelope
//! - [`config`] - TOML settings
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod conditions;
pub mod config;
pub mod engine;
pub mod errors;
pub mod materials;
pub mod params;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use engine::{get_recommendations, EngineConfig, RecommendationEngine, ScoredRecommendation};
pub use errors::{CalcError, CalcResult};
pub use materials::{builtin_catalog, load_catalog, MaterialCatalog, MaterialProfile};
pub use params::{ParameterPolicy, ProjectParameters, RawProjectParameters};
pub use report::RecommendationReport;
