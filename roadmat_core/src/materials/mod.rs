//! # Materials Database
//!
//! Material profiles for road construction and the catalog that holds them.
//!
//! A [`MaterialProfile`] carries five integer ratings in `[1, 10]`, the site
//! conditions the material is suited to, and a list of advantages for display.
//! Profiles are validated when they are built or deserialized, so a profile
//! in hand always has every rating populated and in range.
//!
//! ## Example
//!
//! ```rust
//! use roadmat_core::materials::{MaterialProfile, PropertyRatings};
//!
//! let gravel = MaterialProfile::new("Gravel", PropertyRatings::new(5, 4, 5, 5, 4))
//!     .unwrap()
//!     .with_advantage("Low cost");
//!
//! assert_eq!(gravel.properties.durability, 5);
//! assert!(!gravel.is_recycled);
//! ```

pub mod catalog;

pub use catalog::{builtin_catalog, load_catalog, MaterialCatalog};

use serde::{Deserialize, Serialize};

use crate::conditions::{SoilType, TrafficLoad, Weather};
use crate::errors::{CalcError, CalcResult};

/// Lowest valid property rating
pub const RATING_MIN: u8 = 1;
/// Highest valid property rating
pub const RATING_MAX: u8 = 10;

/// Sentinel in a condition list meaning "accepts every value"
pub const ALL_CONDITIONS: &str = "all";

/// The five heuristic ratings of a material, each in `[1, 10]`.
///
/// For `cost` and `maintenance` a higher rating means more expensive /
/// more upkeep. For the others higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRatings {
    pub durability: u8,
    pub cost: u8,
    pub weather_resistance: u8,
    pub load_capacity: u8,
    pub maintenance: u8,
}

impl PropertyRatings {
    /// Property keys in catalog order
    pub const KEYS: [&'static str; 5] = [
        "durability",
        "cost",
        "weather_resistance",
        "load_capacity",
        "maintenance",
    ];

    pub fn new(durability: u8, cost: u8, weather_resistance: u8, load_capacity: u8, maintenance: u8) -> Self {
        PropertyRatings {
            durability,
            cost,
            weather_resistance,
            load_capacity,
            maintenance,
        }
    }

    /// Ratings paired with their keys, in catalog order (radar chart input)
    pub fn as_pairs(&self) -> [(&'static str, u8); 5] {
        [
            ("durability", self.durability),
            ("cost", self.cost),
            ("weather_resistance", self.weather_resistance),
            ("load_capacity", self.load_capacity),
            ("maintenance", self.maintenance),
        ]
    }

    /// Check every rating is within `[RATING_MIN, RATING_MAX]`.
    pub fn validate(&self, material: &str) -> CalcResult<()> {
        for (key, value) in self.as_pairs() {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(CalcError::malformed_profile(
                    material,
                    format!("property '{}' = {} is outside [{}, {}]", key, value, RATING_MIN, RATING_MAX),
                ));
            }
        }
        Ok(())
    }
}

/// Accepted values per site dimension. `"all"` accepts anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitableConditions {
    #[serde(default)]
    pub traffic_load: Vec<String>,
    #[serde(default)]
    pub weather: Vec<String>,
    #[serde(default)]
    pub soil_type: Vec<String>,
}

impl SuitableConditions {
    /// Conditions that accept every site
    pub fn universal() -> Self {
        SuitableConditions {
            traffic_load: vec![ALL_CONDITIONS.to_string()],
            weather: vec![ALL_CONDITIONS.to_string()],
            soil_type: vec![ALL_CONDITIONS.to_string()],
        }
    }

    pub fn accepts_traffic(&self, traffic: TrafficLoad) -> bool {
        accepts(&self.traffic_load, traffic.code())
    }

    pub fn accepts_weather(&self, weather: Weather) -> bool {
        accepts(&self.weather, weather.code())
    }

    pub fn accepts_soil(&self, soil: SoilType) -> bool {
        accepts(&self.soil_type, soil.code())
    }
}

fn accepts(values: &[String], code: &str) -> bool {
    values.iter().any(|v| {
        let v = v.trim();
        v.eq_ignore_ascii_case(ALL_CONDITIONS) || v.eq_ignore_ascii_case(code)
    })
}

/// A catalog entry describing one construction material.
///
/// Deserialization goes through [`RawMaterialProfile`] so that missing or
/// out-of-range ratings are rejected instead of defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMaterialProfile")]
pub struct MaterialProfile {
    /// Unique catalog key
    pub name: String,

    pub properties: PropertyRatings,

    pub suitable_conditions: SuitableConditions,

    /// Human-readable selling points, in display order
    pub advantages: Vec<String>,

    /// Made from reclaimed material (boosts the environmental sub-score)
    pub is_recycled: bool,
}

impl MaterialProfile {
    /// Create a profile with validated ratings, universal conditions and no advantages.
    pub fn new(name: impl Into<String>, properties: PropertyRatings) -> CalcResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CalcError::malformed_profile(name, "material name is empty"));
        }
        properties.validate(&name)?;
        Ok(MaterialProfile {
            name,
            properties,
            suitable_conditions: SuitableConditions::universal(),
            advantages: Vec::new(),
            is_recycled: false,
        })
    }

    pub fn with_conditions(mut self, conditions: SuitableConditions) -> Self {
        self.suitable_conditions = conditions;
        self
    }

    pub fn with_advantage(mut self, advantage: impl Into<String>) -> Self {
        self.advantages.push(advantage.into());
        self
    }

    pub fn recycled(mut self, is_recycled: bool) -> Self {
        self.is_recycled = is_recycled;
        self
    }

    fn with_advantages(mut self, advantages: Vec<String>) -> Self {
        self.advantages = advantages;
        self
    }
}

/// Ratings as they appear on the wire, before presence checks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPropertyRatings {
    pub durability: Option<i64>,
    pub cost: Option<i64>,
    pub weather_resistance: Option<i64>,
    pub load_capacity: Option<i64>,
    pub maintenance: Option<i64>,
}

impl RawPropertyRatings {
    fn into_ratings(self, material: &str) -> CalcResult<PropertyRatings> {
        let field = |key: &str, value: Option<i64>| -> CalcResult<u8> {
            let value = value.ok_or_else(|| {
                CalcError::malformed_profile(material, format!("missing property '{}'", key))
            })?;
            u8::try_from(value).map_err(|_| {
                CalcError::malformed_profile(
                    material,
                    format!("property '{}' = {} is outside [{}, {}]", key, value, RATING_MIN, RATING_MAX),
                )
            })
        };

        let ratings = PropertyRatings {
            durability: field("durability", self.durability)?,
            cost: field("cost", self.cost)?,
            weather_resistance: field("weather_resistance", self.weather_resistance)?,
            load_capacity: field("load_capacity", self.load_capacity)?,
            maintenance: field("maintenance", self.maintenance)?,
        };
        ratings.validate(material)?;
        Ok(ratings)
    }
}

/// A catalog entry as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct RawMaterialProfile {
    pub name: String,
    #[serde(default)]
    pub properties: RawPropertyRatings,
    #[serde(default)]
    pub suitable_conditions: SuitableConditions,
    #[serde(default)]
    pub advantages: Vec<String>,
    #[serde(default)]
    pub is_recycled: bool,
}

impl TryFrom<RawMaterialProfile> for MaterialProfile {
    type Error = CalcError;

    fn try_from(raw: RawMaterialProfile) -> CalcResult<Self> {
        let properties = raw.properties.into_ratings(&raw.name)?;
        Ok(MaterialProfile::new(raw.name, properties)?
            .with_conditions(raw.suitable_conditions)
            .recycled(raw.is_recycled)
            .with_advantages(raw.advantages))
    }
}

impl std::fmt::Display for MaterialProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
