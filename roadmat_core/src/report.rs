//! # Recommendation Report
//!
//! The envelope handed to presentation code: the ranked list plus the
//! parameters and policy that produced it.
//!
//! ## Structure
//!
//! ```text
//! RecommendationReport
//! ├── id / generated (request metadata)
//! ├── parameters: ProjectParameters (after resolution)
//! ├── policy + substitutions (how unrecognized input was handled)
//! └── recommendations: Vec<ScoredRecommendation> (best first)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::ScoredRecommendation;
use crate::params::{ParameterPolicy, ProjectParameters, Substitution};

/// Ranked recommendations for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Unique per request
    pub id: Uuid,

    /// When the ranking was produced
    pub generated: DateTime<Utc>,

    pub parameters: ProjectParameters,

    pub policy: ParameterPolicy,

    /// Fallbacks applied to unrecognized input (lenient policy only)
    pub substitutions: Vec<Substitution>,

    /// Every catalog material, best first
    pub recommendations: Vec<ScoredRecommendation>,
}

impl RecommendationReport {
    pub fn new(
        parameters: ProjectParameters,
        policy: ParameterPolicy,
        substitutions: Vec<Substitution>,
        recommendations: Vec<ScoredRecommendation>,
    ) -> Self {
        RecommendationReport {
            id: Uuid::new_v4(),
            generated: Utc::now(),
            parameters,
            policy,
            substitutions,
            recommendations,
        }
    }

    /// The top-ranked material, if the catalog was not empty
    pub fn best_match(&self) -> Option<&ScoredRecommendation> {
        self.recommendations.first()
    }

    /// The first `n` recommendations; `0` means all of them.
    pub fn top(&self, n: usize) -> &[ScoredRecommendation] {
        if n == 0 {
            &self.recommendations
        } else {
            &self.recommendations[..n.min(self.recommendations.len())]
        }
    }

    pub fn has_substitutions(&self) -> bool {
        !self.substitutions.is_empty()
    }
}
