//! # Project Parameters
//!
//! Site conditions for one recommendation request, and the boundary that
//! turns free-form strings into typed [`ProjectParameters`].
//!
//! ## Unrecognized Values
//!
//! What happens to a traffic/weather/soil string outside the known set is an
//! explicit [`ParameterPolicy`]:
//!
//! | Policy    | Unknown traffic | Unknown weather | Unknown soil | Reported as        |
//! |-----------|-----------------|-----------------|--------------|--------------------|
//! | Lenient   | medium          | moderate        | granular     | [`Substitution`]   |
//! | Strict    | error           | error           | error        | `InvalidParameter` |
//!
//! Lenient is the default. In both modes an empty location is a
//! `MissingField` error.
//!
//! ## Example
//!
//! ```rust
//! use roadmat_core::params::{ParameterPolicy, RawProjectParameters};
//! use roadmat_core::conditions::TrafficLoad;
//!
//! let raw = RawProjectParameters::new("Route 9", "gridlock", "wet", "clayey");
//!
//! let resolved = raw.resolve(ParameterPolicy::Lenient).unwrap();
//! assert_eq!(resolved.parameters.traffic_load, TrafficLoad::Medium);
//! assert_eq!(resolved.substitutions.len(), 1);
//!
//! assert!(raw.resolve(ParameterPolicy::Strict).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::conditions::{SoilType, TrafficLoad, Weather};
use crate::errors::{CalcError, CalcResult};

/// Handling of traffic/weather/soil strings outside the enumerated sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParameterPolicy {
    /// Substitute the documented fallback and record it
    #[default]
    Lenient,
    /// Reject with `CalcError::InvalidParameter`
    Strict,
}

impl std::fmt::Display for ParameterPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterPolicy::Lenient => write!(f, "lenient"),
            ParameterPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Typed site conditions. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// Free text, display only
    pub location: String,
    pub traffic_load: TrafficLoad,
    pub weather: Weather,
    pub soil_type: SoilType,
}

impl ProjectParameters {
    pub fn new(location: impl Into<String>, traffic_load: TrafficLoad, weather: Weather, soil_type: SoilType) -> Self {
        ProjectParameters {
            location: location.into(),
            traffic_load,
            weather,
            soil_type,
        }
    }
}

/// Request parameters as received from a form, CLI or JSON body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProjectParameters {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub traffic_load: String,
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub soil_type: String,
}

/// A fallback applied under the lenient policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub field: String,
    pub given: String,
    pub substituted: String,
}

/// Typed parameters plus any lenient substitutions made to get them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedParameters {
    pub parameters: ProjectParameters,
    pub substitutions: Vec<Substitution>,
}

impl RawProjectParameters {
    pub fn new(
        location: impl Into<String>,
        traffic_load: impl Into<String>,
        weather: impl Into<String>,
        soil_type: impl Into<String>,
    ) -> Self {
        RawProjectParameters {
            location: location.into(),
            traffic_load: traffic_load.into(),
            weather: weather.into(),
            soil_type: soil_type.into(),
        }
    }

    /// Presence-check the location and map each condition string under `policy`.
    pub fn resolve(&self, policy: ParameterPolicy) -> CalcResult<ResolvedParameters> {
        let location = self.location.trim();
        if location.is_empty() {
            return Err(CalcError::missing_field("location"));
        }

        let mut substitutions = Vec::new();

        let traffic_load = resolve_field(
            "traffic_load",
            &self.traffic_load,
            TrafficLoad::from_code,
            TrafficLoad::FALLBACK,
            TrafficLoad::code,
            policy,
            &mut substitutions,
        )?;
        let weather = resolve_field(
            "weather",
            &self.weather,
            Weather::from_code,
            Weather::FALLBACK,
            Weather::code,
            policy,
            &mut substitutions,
        )?;
        let soil_type = resolve_field(
            "soil_type",
            &self.soil_type,
            SoilType::from_code,
            SoilType::FALLBACK,
            SoilType::code,
            policy,
            &mut substitutions,
        )?;

        Ok(ResolvedParameters {
            parameters: ProjectParameters::new(location, traffic_load, weather, soil_type),
            substitutions,
        })
    }
}

impl From<&ProjectParameters> for RawProjectParameters {
    fn from(params: &ProjectParameters) -> Self {
        RawProjectParameters::new(
            params.location.clone(),
            params.traffic_load.code(),
            params.weather.code(),
            params.soil_type.code(),
        )
    }
}

fn resolve_field<T: Copy>(
    field: &str,
    given: &str,
    parse: fn(&str) -> Option<T>,
    fallback: T,
    code: fn(&T) -> &'static str,
    policy: ParameterPolicy,
    substitutions: &mut Vec<Substitution>,
) -> CalcResult<T> {
    if let Some(value) = parse(given) {
        return Ok(value);
    }

    match policy {
        ParameterPolicy::Strict => Err(CalcError::invalid_parameter(
            field,
            given,
            format!("not a recognized {} value", field),
        )),
        ParameterPolicy::Lenient => {
            tracing::warn!(
                field,
                given,
                substituted = code(&fallback),
                "unrecognized parameter value, using fallback"
            );
            substitutions.push(Substitution {
                field: field.to_string(),
                given: given.to_string(),
                substituted: code(&fallback).to_string(),
            });
            Ok(fallback)
        }
    }
}
