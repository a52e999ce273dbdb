mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use praias_core::config::{self, PipelineConfig};
use praias_core::model::{Status, Zone};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "praias",
    version,
    about = "Fortaleza beach water-quality bulletins: scrape, parse and query"
)]
struct Cli {
    /// Increase log verbosity (-v for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the latest bulletin and rebuild the dataset file
    Update {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        dataset: DatasetArgs,

        /// Coordinate table to attach (JSON: {"code": "lat, lon"})
        #[arg(long, value_name = "FILE", env = "PRAIAS_COORDINATES")]
        coordinates: Option<PathBuf>,
    },
    /// Parse a local bulletin PDF without downloading anything
    Parse {
        /// Path to the bulletin PDF
        pdf_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the dataset CSV to this file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Coordinate table to attach (JSON: {"code": "lat, lon"})
        #[arg(long, value_name = "FILE", env = "PRAIAS_COORDINATES")]
        coordinates: Option<PathBuf>,
    },
    /// List beaches in the dataset, optionally filtered
    List {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Only beaches with this status: propria or impropria
        #[arg(long, value_parser = parse_status)]
        status: Option<Status>,

        /// Only beaches in this zone: leste, centro, oeste or desconhecida
        #[arg(long, value_parser = parse_zone)]
        zone: Option<Zone>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show one beach by id
    Show {
        id: u32,

        #[command(flatten)]
        dataset: DatasetArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Validate and print a coordinate table
    Coordinates {
        /// Coordinate table (JSON: {"code": "lat, lon"})
        #[arg(long, value_name = "FILE", env = "PRAIAS_COORDINATES")]
        file: PathBuf,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Page listing the published bulletins
    #[arg(long, env = "PRAIAS_LISTING_URL", default_value = config::DEFAULT_LISTING_URL)]
    listing_url: String,

    /// Text the bulletin link must contain
    #[arg(long, env = "PRAIAS_LINK_TEXT", default_value = config::DEFAULT_LINK_TEXT)]
    link_text: String,

    /// Where to keep the downloaded PDF
    #[arg(long, env = "PRAIAS_PDF", default_value = config::DEFAULT_PDF_PATH)]
    pdf: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, env = "PRAIAS_TIMEOUT", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

#[derive(Args)]
struct DatasetArgs {
    /// Dataset CSV file
    #[arg(long = "dataset", env = "PRAIAS_DATASET", default_value = config::DEFAULT_DATASET_PATH)]
    path: PathBuf,
}

fn parse_status(s: &str) -> Result<Status, String> {
    Status::from_slug(s).ok_or_else(|| format!("invalid status '{s}'. Use 'propria' or 'impropria'"))
}

fn parse_zone(s: &str) -> Result<Zone, String> {
    Zone::from_slug(s)
        .ok_or_else(|| format!("invalid zone '{s}'. Use 'leste', 'centro', 'oeste' or 'desconhecida'"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Update {
            source,
            dataset,
            coordinates,
        } => {
            let config = PipelineConfig {
                listing_url: source.listing_url,
                link_text: source.link_text,
                pdf_path: source.pdf,
                dataset_path: dataset.path,
                timeout: Duration::from_secs(source.timeout),
                ..PipelineConfig::default()
            };
            commands::update::run(&config, coordinates.as_deref())
        }
        Commands::Parse {
            pdf_file,
            output,
            out,
            coordinates,
        } => commands::parse::run(pdf_file, &output, out, coordinates.as_deref()),
        Commands::List {
            dataset,
            status,
            zone,
            output,
        } => commands::query::list(&dataset.path, status, zone, &output),
        Commands::Show {
            id,
            dataset,
            output,
        } => commands::query::show(&dataset.path, id, &output),
        Commands::Coordinates { file } => commands::coordinates::print(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
