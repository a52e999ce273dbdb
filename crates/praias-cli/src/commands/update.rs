use praias_core::config::PipelineConfig;
use praias_core::error::PraiasError;
use praias_core::extraction::pdftotext::PdftotextExtractor;
use std::path::Path;
use tracing::warn;

pub fn run(config: &PipelineConfig, coordinates: Option<&Path>) -> Result<(), PraiasError> {
    let coords = super::load_coordinates(coordinates)?;
    let extractor = PdftotextExtractor::new();

    match praias_core::run_pipeline(config, &extractor, &coords) {
        Ok(summary) => {
            println!(
                "Bulletin {} ({}): {} beach(es) written to {}",
                if summary.bulletin_number.is_empty() {
                    "?"
                } else {
                    summary.bulletin_number.as_str()
                },
                summary.period,
                summary.records,
                summary.dataset_path.display()
            );
            println!("  source: {}", summary.bulletin_url);
            Ok(())
        }
        Err(e) => {
            if config.dataset_path.exists() {
                warn!(
                    path = %config.dataset_path.display(),
                    "update failed, previous dataset left in place"
                );
            }
            Err(e)
        }
    }
}
