use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LISTING_URL: &str = "https://www.semace.ce.gov.br/boletim-de-balneabilidade/";
pub const DEFAULT_LINK_TEXT: &str = "Boletim das Praias de Fortaleza";
pub const DEFAULT_PDF_PATH: &str = "boletim_fortaleza.pdf";
pub const DEFAULT_DATASET_PATH: &str = "boletim_fortaleza.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the bulletin comes from and where the pipeline writes its output.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Page listing the published bulletins.
    pub listing_url: String,
    /// Phrase the bulletin link's visible text must contain.
    pub link_text: String,
    /// Local copy of the downloaded document, overwritten each run.
    pub pdf_path: PathBuf,
    /// Dataset file read by the serving layer.
    pub dataset_path: PathBuf,
    /// Bound on each HTTP request (connect + body).
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            link_text: DEFAULT_LINK_TEXT.to_string(),
            pdf_path: PathBuf::from(DEFAULT_PDF_PATH),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("praias/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
