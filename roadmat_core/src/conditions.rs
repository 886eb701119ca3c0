//! # Site Conditions
//!
//! Enumerated site conditions for a road project and the heuristic factor
//! tables attached to them.
//!
//! ## Factor Summary
//!
//! | Traffic    | Load multiplier | Maintenance impact |
//! |------------|-----------------|--------------------|
//! | low        | 0.60            | 0.70               |
//! | medium     | 0.80            | 0.85               |
//! | high       | 0.90            | 1.00               |
//! | very high  | 1.00            | 1.15               |
//!
//! | Weather  | Durability weight | Weather resistance weight | Maintenance impact |
//! |----------|-------------------|---------------------------|--------------------|
//! | hot      | 0.4               | 0.6                       | 1.15               |
//! | moderate | 0.5               | 0.5                       | 1.00               |
//! | cold     | 0.4               | 0.6                       | 1.10               |
//! | wet      | 0.3               | 0.7                       | 1.15               |
//! | dry      | 0.6               | 0.4                       | 1.00               |
//!
//! Unrecognized strings are handled at the parameter boundary (see
//! [`crate::params`]); once a value is one of these enums every lookup is total.

use serde::{Deserialize, Serialize};

/// Expected traffic load on the finished road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrafficLoad {
    #[serde(rename = "low")]
    Low,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl TrafficLoad {
    /// All traffic loads in ascending severity
    pub const ALL: [TrafficLoad; 4] = [
        TrafficLoad::Low,
        TrafficLoad::Medium,
        TrafficLoad::High,
        TrafficLoad::VeryHigh,
    ];

    /// Substituted for unrecognized input under the lenient policy
    pub const FALLBACK: TrafficLoad = TrafficLoad::Medium;

    /// Wire code as it appears in catalogs and requests
    pub fn code(&self) -> &'static str {
        match self {
            TrafficLoad::Low => "low",
            TrafficLoad::Medium => "medium",
            TrafficLoad::High => "high",
            TrafficLoad::VeryHigh => "very high",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TrafficLoad::Low => "Low",
            TrafficLoad::Medium => "Medium",
            TrafficLoad::High => "High",
            TrafficLoad::VeryHigh => "Very High",
        }
    }

    /// Parse a wire code (case-insensitive, surrounding whitespace ignored)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
    }

    /// Multiplier applied to the raw load capacity rating.
    ///
    /// Monotonically increasing with severity.
    pub fn load_multiplier(&self) -> f64 {
        match self {
            TrafficLoad::Low => 0.6,
            TrafficLoad::Medium => 0.8,
            TrafficLoad::High => 0.9,
            TrafficLoad::VeryHigh => 1.0,
        }
    }

    /// Wear multiplier used by the maintenance forecast
    pub fn maintenance_impact(&self) -> f64 {
        match self {
            TrafficLoad::Low => 0.7,
            TrafficLoad::Medium => 0.85,
            TrafficLoad::High => 1.0,
            TrafficLoad::VeryHigh => 1.15,
        }
    }
}

impl std::fmt::Display for TrafficLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Relative weighting of durability against the explicit weather resistance rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherWeights {
    pub durability: f64,
    pub weather_resistance: f64,
}

/// Prevailing weather at the project site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Hot,
    #[default]
    Moderate,
    Cold,
    Wet,
    Dry,
}

impl Weather {
    /// All weather conditions for UI selection
    pub const ALL: [Weather; 5] = [
        Weather::Hot,
        Weather::Moderate,
        Weather::Cold,
        Weather::Wet,
        Weather::Dry,
    ];

    /// Substituted for unrecognized input under the lenient policy
    pub const FALLBACK: Weather = Weather::Moderate;

    /// Wire code as it appears in catalogs and requests
    pub fn code(&self) -> &'static str {
        match self {
            Weather::Hot => "hot",
            Weather::Moderate => "moderate",
            Weather::Cold => "cold",
            Weather::Wet => "wet",
            Weather::Dry => "dry",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Weather::Hot => "Hot",
            Weather::Moderate => "Moderate",
            Weather::Cold => "Cold",
            Weather::Wet => "Wet",
            Weather::Dry => "Dry",
        }
    }

    /// Parse a wire code (case-insensitive, surrounding whitespace ignored)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|w| w.code().eq_ignore_ascii_case(code))
    }

    /// Durability / weather resistance weights. Each pair sums to 1.0.
    ///
    /// Harsh conditions lean on the weather resistance rating; dry
    /// conditions lean on raw durability.
    pub fn weights(&self) -> WeatherWeights {
        let (durability, weather_resistance) = match self {
            Weather::Hot => (0.4, 0.6),
            Weather::Moderate => (0.5, 0.5),
            Weather::Cold => (0.4, 0.6),
            Weather::Wet => (0.3, 0.7),
            Weather::Dry => (0.6, 0.4),
        };
        WeatherWeights {
            durability,
            weather_resistance,
        }
    }

    /// Wear multiplier used by the maintenance forecast
    pub fn maintenance_impact(&self) -> f64 {
        match self {
            Weather::Hot | Weather::Wet => 1.15,
            Weather::Cold => 1.1,
            Weather::Moderate | Weather::Dry => 1.0,
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Subgrade soil at the project site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    #[default]
    Granular,
    Rocky,
    Clayey,
    Silty,
}

impl SoilType {
    /// All soil types for UI selection
    pub const ALL: [SoilType; 4] = [
        SoilType::Granular,
        SoilType::Rocky,
        SoilType::Clayey,
        SoilType::Silty,
    ];

    /// Substituted for unrecognized input under the lenient policy
    pub const FALLBACK: SoilType = SoilType::Granular;

    /// Wire code as it appears in catalogs and requests
    pub fn code(&self) -> &'static str {
        match self {
            SoilType::Granular => "granular",
            SoilType::Rocky => "rocky",
            SoilType::Clayey => "clayey",
            SoilType::Silty => "silty",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::Granular => "Granular",
            SoilType::Rocky => "Rocky",
            SoilType::Clayey => "Clayey",
            SoilType::Silty => "Silty",
        }
    }

    /// Parse a wire code (case-insensitive, surrounding whitespace ignored)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
