pub mod header;
pub mod normalize;
pub mod period;
pub mod rows;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::extraction::table::find_tables;
use crate::extraction::PageContent;
use crate::model::{BeachRow, BulletinMetadata};
use header::parse_metadata;
use rows::normalize_tables;

/// Everything recovered from one bulletin document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedBulletin {
    pub metadata: BulletinMetadata,
    pub rows: Vec<BeachRow>,
    /// Table rows that could not be turned into beach records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_rows: Vec<SkippedRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRow {
    pub text: String,
    pub reason: String,
}

/// Parse extracted page content into bulletin metadata and beach rows.
///
/// Never fails: missing metadata markers leave fields empty, and rows
/// that do not parse are recorded in `skipped_rows`.
pub fn parse_bulletin(pages: &[PageContent]) -> ParsedBulletin {
    let first_page: Vec<&str> = pages
        .first()
        .map(|p| p.lines.iter().map(|s| s.as_str()).collect())
        .unwrap_or_default();
    let metadata = parse_metadata(&first_page);
    if metadata.period.is_empty() {
        warn!("bulletin period not found on first page");
    }

    let tables = find_tables(pages);
    debug!(tables = tables.len(), "table regions found");

    let mut skipped_rows = Vec::new();
    let rows = normalize_tables(&tables, &mut skipped_rows);
    info!(
        rows = rows.len(),
        skipped = skipped_rows.len(),
        bulletin = %metadata.bulletin_number,
        "bulletin parsed"
    );

    ParsedBulletin {
        metadata,
        rows,
        skipped_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_bulletin_metadata_and_rows() {
        let pages = vec![page(
            1,
            &[
                "Nº 42",
                "Período: 01/03/2024 a 02/03/2024",
                "Tipos de amostras: Água do mar.",
                "",
                "Nome do ponto            Status",
                "Praia do Futuro          P",
                "Praia de Iracema         I",
            ],
        )];

        let parsed = parse_bulletin(&pages);
        assert_eq!(parsed.metadata.bulletin_number, "42");
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0].name, "Praia do Futuro");
        assert_eq!(parsed.rows[1].status, Status::ImproperForBathing);
    }

    #[test]
    fn test_rows_across_pages_keep_order() {
        let pages = vec![
            page(1, &["Pirambu           I"]),
            page(2, &["Sabiaguaba        P"]),
        ];
        let parsed = parse_bulletin(&pages);
        let names: Vec<&str> = parsed.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pirambu", "Sabiaguaba"]);
    }

    #[test]
    fn test_no_pages() {
        let parsed = parse_bulletin(&[]);
        assert!(parsed.rows.is_empty());
        assert_eq!(parsed.metadata, BulletinMetadata::default());
    }
}
