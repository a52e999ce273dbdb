use crate::error::PraiasError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from a monitoring point code to its "lat, lon" string.
///
/// The coordinate strings are passed through untouched; only the lookup key
/// is interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateTable {
    entries: BTreeMap<String, String>,
}

impl CoordinateTable {
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for CoordinateTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        CoordinateTable {
            entries: iter.into_iter().collect(),
        }
    }
}

/// First three characters of a beach name, trimmed and upper-cased.
pub fn point_code(name: &str) -> String {
    name.chars()
        .take(3)
        .collect::<String>()
        .trim()
        .to_uppercase()
}

/// Load a coordinate table from a JSON file (`{"code": "lat, lon", ...}`).
///
/// No table ships with the crate: without one, records carry no coordinates.
pub fn load_table(path: &Path) -> Result<CoordinateTable, PraiasError> {
    let load_error = |reason: String| PraiasError::CoordinatesLoad {
        path: path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    parse_table(&content).map_err(|e| match e {
        PraiasError::Json(e) => load_error(e.to_string()),
        other => other,
    })
}

fn parse_table(json: &str) -> Result<CoordinateTable, PraiasError> {
    let table: CoordinateTable = serde_json::from_str(json)?;
    validate_table(&table)?;
    Ok(table)
}

fn validate_table(table: &CoordinateTable) -> Result<(), PraiasError> {
    if table.is_empty() {
        return Err(PraiasError::CoordinatesInvalid(
            "table must not be empty".into(),
        ));
    }

    for (code, coords) in table.iter() {
        let len = code.chars().count();
        if len == 0 || len > 3 || code.trim() != code {
            return Err(PraiasError::CoordinatesInvalid(format!(
                "code '{}' must be 1-3 characters without surrounding spaces",
                code
            )));
        }
        if code.to_uppercase() != code {
            return Err(PraiasError::CoordinatesInvalid(format!(
                "code '{}' must be upper-case",
                code
            )));
        }
        if coords.trim().is_empty() {
            return Err(PraiasError::CoordinatesInvalid(format!(
                "code '{}' has empty coordinates",
                code
            )));
        }
    }

    Ok(())
}
