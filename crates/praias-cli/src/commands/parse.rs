use praias_core::dataset::{build_records, write_dataset};
use praias_core::error::PraiasError;
use praias_core::extraction::pdftotext::PdftotextExtractor;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    coordinates: Option<&Path>,
) -> Result<(), PraiasError> {
    let coords = super::load_coordinates(coordinates)?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let parsed = praias_core::parse_pdf(&pdf_bytes, &extractor)?;
    let records = build_records(&parsed, &coords, chrono::Local::now().date_naive());

    match output_format {
        "json" => output::json::print(&records)?,
        _ => println!("{}", output::table::format_records(&records)),
    }

    if !parsed.skipped_rows.is_empty() {
        eprintln!("  {} table row(s) skipped:", parsed.skipped_rows.len());
        for skipped in &parsed.skipped_rows {
            eprintln!("    {}: {}", skipped.reason, skipped.text.replace('\n', " / "));
        }
    }

    if let Some(path) = output_file {
        if records.is_empty() {
            return Err(PraiasError::NoRecords);
        }
        write_dataset(&records, &path)?;
        eprintln!("{} record(s) written to {}", records.len(), path.display());
    }

    Ok(())
}
