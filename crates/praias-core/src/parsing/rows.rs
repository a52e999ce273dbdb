use std::collections::HashSet;

use tracing::{debug, warn};

use crate::extraction::table::ExtractedTable;
use crate::model::{BeachRow, Status};
use crate::parsing::normalize::collapse_whitespace;
use crate::parsing::SkippedRow;

/// Terms that only occur in header/footer rows misdetected as data.
const NOISE_TERMS: &[&str] = &["nome", "status", "trecho", "ponto", "boletim", "semace"];

/// Turn extracted tables into one row per beach.
///
/// Only the first two columns of each table are read (name, status). Rows
/// whose cells hold several newline-separated entries are expanded: a lone
/// status marker is shared by every name in the row, otherwise names and
/// markers are paired by position and the surplus on either side dropped.
/// The result is deduplicated by whitespace-collapsed name, first wins.
pub fn normalize_tables(tables: &[ExtractedTable], skipped: &mut Vec<SkippedRow>) -> Vec<BeachRow> {
    let mut rows = Vec::new();

    for table in tables {
        if table.column_count() < 2 {
            debug!(page = table.page_number, "skipping single-column table");
            continue;
        }

        for cells in &table.rows {
            let (Some(name_cell), Some(status_cell)) = (cells.first(), cells.get(1)) else {
                continue;
            };
            expand_row(name_cell, status_cell, &mut rows, skipped);
        }
    }

    dedup_by_name(rows)
}

fn expand_row(
    name_cell: &str,
    status_cell: &str,
    out: &mut Vec<BeachRow>,
    skipped: &mut Vec<SkippedRow>,
) {
    let names: Vec<&str> = name_cell
        .split('\n')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect();
    let statuses: Vec<Status> = status_cell.split('\n').filter_map(Status::from_token).collect();

    if names.is_empty() || statuses.is_empty() {
        debug!(name = name_cell, status = status_cell, "row has no name or no P/I marker");
        skipped.push(SkippedRow {
            text: format!("{} | {}", name_cell, status_cell),
            reason: "missing name or P/I status marker".into(),
        });
        return;
    }

    let pairs: Vec<(&str, Status)> = if statuses.len() == 1 && names.len() > 1 {
        names.iter().map(|n| (*n, statuses[0])).collect()
    } else {
        if names.len() != statuses.len() {
            warn!(
                names = names.len(),
                statuses = statuses.len(),
                cell = name_cell,
                "name/status count mismatch, pairing by position"
            );
            skipped.push(SkippedRow {
                text: format!("{} | {}", name_cell, status_cell),
                reason: format!(
                    "{} name(s) vs {} status marker(s); unpaired entries dropped",
                    names.len(),
                    statuses.len()
                ),
            });
        }
        names.iter().copied().zip(statuses.iter().copied()).collect()
    };

    for (name, status) in pairs {
        if is_noise_row(name, status) {
            debug!(name, "dropping header/footer row");
            continue;
        }
        out.push(BeachRow {
            name: name.to_string(),
            status,
        });
    }
}

/// Check if a (name, status) pair is a header/footer row rather than a beach.
fn is_noise_row(name: &str, status: Status) -> bool {
    let text = format!("{} {}", name, status.token()).to_lowercase();
    if text.trim().chars().count() < 3 {
        return true;
    }
    NOISE_TERMS.iter().any(|term| text.contains(term))
}

fn dedup_by_name(rows: Vec<BeachRow>) -> Vec<BeachRow> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .map(|row| BeachRow {
            name: collapse_whitespace(&row.name),
            status: row.status,
        })
        .filter(|row| seen.insert(row.name.clone()))
        .collect()
}
