//! # Material Catalog
//!
//! Immutable, ordered collection of [`MaterialProfile`]s. Iteration order is
//! the order of the source file and is the tie-break order for ranking.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "materials": [
//!     {
//!       "name": "Gravel",
//!       "is_recycled": false,
//!       "properties": {
//!         "durability": 5, "cost": 4, "weather_resistance": 5,
//!         "load_capacity": 5, "maintenance": 4
//!       },
//!       "suitable_conditions": {
//!         "traffic_load": ["low", "medium"],
//!         "weather": ["moderate", "dry"],
//!         "soil_type": ["all"]
//!       },
//!       "advantages": ["Low cost"]
//!     }
//!   ]
//! }
//! ```
//!
//! A single bad entry (missing rating, rating out of range, duplicate name)
//! fails the whole load.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{MaterialProfile, RawMaterialProfile};
use crate::errors::{CalcError, CalcResult};

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/materials.json");

static BUILTIN_CATALOG: Lazy<CalcResult<MaterialCatalog>> =
    Lazy::new(|| MaterialCatalog::from_json_str(BUILTIN_CATALOG_JSON));

/// Ordered, read-only material catalog.
///
/// Shared freely between requests; scoring never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialCatalog {
    materials: Vec<MaterialProfile>,
}

#[derive(Deserialize)]
struct RawCatalog {
    materials: Vec<RawMaterialProfile>,
}

impl MaterialCatalog {
    /// Build a catalog, rejecting duplicate names.
    pub fn new(materials: Vec<MaterialProfile>) -> CalcResult<Self> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = materials.iter().find(|m| !seen.insert(m.name.as_str())) {
            return Err(CalcError::malformed_profile(
                duplicate.name.clone(),
                "duplicate material name in catalog",
            ));
        }
        Ok(MaterialCatalog { materials })
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)
            .map_err(|e| CalcError::serialization(format!("Invalid catalog JSON: {}", e)))?;

        let materials = raw
            .materials
            .into_iter()
            .map(MaterialProfile::try_from)
            .collect::<CalcResult<Vec<_>>>()?;

        Self::new(materials)
    }

    /// Look up a material by exact name
    pub fn get(&self, name: &str) -> CalcResult<&MaterialProfile> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| CalcError::material_not_found(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MaterialProfile> {
        self.materials.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl<'a> IntoIterator for &'a MaterialCatalog {
    type Item = &'a MaterialProfile;
    type IntoIter = std::slice::Iter<'a, MaterialProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.materials.iter()
    }
}

/// The catalog shipped with the library, parsed once on first use.
pub fn builtin_catalog() -> CalcResult<&'static MaterialCatalog> {
    (*BUILTIN_CATALOG).as_ref().map_err(Clone::clone)
}

/// Load a catalog from a JSON file.
///
/// # Returns
///
/// * `Ok(MaterialCatalog)` - Every entry validated
/// * `Err(CalcError::MalformedProfile)` - An entry is incomplete or duplicated
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_catalog(path: &Path) -> CalcResult<MaterialCatalog> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let catalog = MaterialCatalog::from_json_str(&contents)?;
    tracing::info!(
        path = %path.display(),
        materials = catalog.len(),
        "loaded material catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PropertyRatings;
    use std::env::temp_dir;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(
            catalog.names(),
            vec![
                "Asphalt Concrete",
                "Portland Cement Concrete",
                "Gravel",
            ]
        );

        let pcc = catalog.get("Portland Cement Concrete").unwrap();
        assert_eq!(pcc.properties, PropertyRatings::new(9, 8, 9, 9, 8));
        assert!(catalog.iter().all(|m| !m.is_recycled));
    }

    #[test]
    fn test_material_not_found() {
        let catalog = builtin_catalog().unwrap();
        let err = catalog.get("Cobblestone").unwrap_err();
        assert_eq!(err, CalcError::material_not_found("Cobblestone"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let gravel = MaterialProfile::new("Gravel", PropertyRatings::new(5, 4, 5, 5, 4)).unwrap();
        let err = MaterialCatalog::new(vec![gravel.clone(), gravel]).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_PROFILE");
    }

    #[test]
    fn test_one_bad_entry_fails_whole_catalog() {
        let json = r#"{
            "materials": [
                { "name": "Gravel", "properties": { "durability": 5, "cost": 4, "weather_resistance": 5, "load_capacity": 5, "maintenance": 4 } },
                { "name": "Mystery", "properties": { "durability": 5, "cost": 4, "weather_resistance": 5, "load_capacity": 5 } }
            ]
        }"#;
        let err = MaterialCatalog::from_json_str(json).unwrap_err();
        assert_eq!(err, CalcError::malformed_profile("Mystery", "missing property 'maintenance'"));
    }

    #[test]
    fn test_invalid_json() {
        let err = MaterialCatalog::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_order_is_preserved() {
        let json = r#"{
            "materials": [
                { "name": "Zeta", "properties": { "durability": 5, "cost": 5, "weather_resistance": 5, "load_capacity": 5, "maintenance": 5 } },
                { "name": "Alpha", "properties": { "durability": 5, "cost": 5, "weather_resistance": 5, "load_capacity": 5, "maintenance": 5 } }
            ]
        }"#;
        let catalog = MaterialCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.names(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_load_catalog_from_file() {
        let path = temp_dir().join(format!("roadmat_test_catalog_{}.json", std::process::id()));
        fs::write(&path, BUILTIN_CATALOG_JSON).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let path = temp_dir().join(format!("roadmat_test_catalog_missing_{}.json", std::process::id()));
        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
