pub mod coordinates;
pub mod parse;
pub mod query;
pub mod update;

use praias_core::coordinates::{load_table, CoordinateTable};
use praias_core::error::PraiasError;
use std::path::Path;

/// The coordinate table from `path`. Without one, records get no coordinates.
pub fn load_coordinates(path: Option<&Path>) -> Result<CoordinateTable, PraiasError> {
    match path {
        Some(p) => load_table(p),
        None => Ok(CoordinateTable::default()),
    }
}
