pub mod atomic;
pub mod classify;
pub mod config;
pub mod coordinates;
pub mod dataset;
pub mod error;
pub mod extraction;
pub mod fetch;
pub mod model;
pub mod parsing;
pub mod store;

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use config::PipelineConfig;
use coordinates::CoordinateTable;
use error::PraiasError;
use extraction::PdfExtractor;
use fetch::BulletinFetcher;
use model::BulletinRecord;
use parsing::ParsedBulletin;

/// Parse a bulletin PDF into metadata and beach rows without enriching them.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ParsedBulletin, PraiasError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(parsing::parse_bulletin(&pages))
}

/// Parse a bulletin PDF and build the final records.
///
/// Fails with `NoRecords` when the document yields no beach rows, so a
/// layout change upstream cannot replace a good dataset with an empty one.
pub fn build_dataset(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    coordinates: &CoordinateTable,
    extraction_date: NaiveDate,
) -> Result<Vec<BulletinRecord>, PraiasError> {
    let parsed = parse_pdf(pdf_bytes, extractor)?;
    if parsed.rows.is_empty() {
        return Err(PraiasError::NoRecords);
    }
    for skipped in &parsed.skipped_rows {
        warn!(row = %skipped.text, reason = %skipped.reason, "row skipped");
    }

    Ok(dataset::build_records(&parsed, coordinates, extraction_date))
}

/// What a successful pipeline run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub bulletin_url: String,
    pub pdf_path: PathBuf,
    pub dataset_path: PathBuf,
    pub bulletin_number: String,
    pub period: String,
    pub records: usize,
}

/// Fetch the latest bulletin, extract it and replace the dataset file.
///
/// Any error aborts the run before the dataset is touched; the previous
/// file stays in place for readers.
pub fn run_pipeline(
    config: &PipelineConfig,
    extractor: &dyn PdfExtractor,
    coordinates: &CoordinateTable,
) -> Result<PipelineSummary, PraiasError> {
    info!(backend = extractor.backend_name(), "starting bulletin pipeline");

    let fetcher = BulletinFetcher::new(config)?;
    let bulletin_url = fetcher.fetch_latest(&config.pdf_path)?;

    let pdf_bytes = std::fs::read(&config.pdf_path)?;
    let extraction_date = chrono::Local::now().date_naive();
    let records = build_dataset(&pdf_bytes, extractor, coordinates, extraction_date)?;

    dataset::write_dataset(&records, &config.dataset_path)?;

    let summary = PipelineSummary {
        bulletin_url: bulletin_url.to_string(),
        pdf_path: config.pdf_path.clone(),
        dataset_path: config.dataset_path.clone(),
        bulletin_number: records
            .first()
            .map(|r| r.bulletin_number.clone())
            .unwrap_or_default(),
        period: records.first().map(|r| r.period.clone()).unwrap_or_default(),
        records: records.len(),
    };
    info!(
        records = summary.records,
        bulletin = %summary.bulletin_number,
        "pipeline finished"
    );

    Ok(summary)
}
