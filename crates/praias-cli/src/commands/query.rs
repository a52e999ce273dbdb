use praias_core::error::PraiasError;
use praias_core::model::{Status, Zone};
use praias_core::store::DatasetStore;
use std::path::Path;

use crate::output;

pub fn list(
    dataset: &Path,
    status: Option<Status>,
    zone: Option<Zone>,
    output_format: &str,
) -> Result<(), PraiasError> {
    let store = DatasetStore::load(dataset);
    if store.is_empty() {
        return Err(PraiasError::NotFound(format!(
            "no beach data available in {}",
            dataset.display()
        )));
    }

    if status.is_none() && zone.is_none() {
        let summaries = store.summaries();
        match output_format {
            "json" => output::json::print(&summaries)?,
            _ => println!("{}", output::table::format_summaries(&summaries)),
        }
        return Ok(());
    }

    let rows = store.filter(status, zone);

    if rows.is_empty() {
        let mut filters = Vec::new();
        if let Some(s) = status {
            filters.push(format!("status '{}'", s));
        }
        if let Some(z) = zone {
            filters.push(format!("zone '{}'", z));
        }
        return Err(PraiasError::NotFound(format!(
            "no beach with {}",
            filters.join(" and ")
        )));
    }

    match output_format {
        "json" => output::json::print(&rows)?,
        _ => println!("{}", output::table::format_rows(&rows)),
    }
    Ok(())
}

pub fn show(dataset: &Path, id: u32, output_format: &str) -> Result<(), PraiasError> {
    let store = DatasetStore::load(dataset);
    let row = store
        .get(id)
        .ok_or_else(|| PraiasError::NotFound(format!("no beach with id {}", id)))?;

    match output_format {
        "json" => output::json::print(row)?,
        _ => println!("{}", output::table::format_detail(row)),
    }
    Ok(())
}
