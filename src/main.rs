use band_contrast::config::{DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_FILE};
use band_contrast::logging::setup_logging;
use band_contrast::{BatchConfig, BatchSummary, ContrastPipeline, ParallelContrastPipeline};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "band_contrast")]
#[command(version, about = "Whole-image and banded brightness contrast for the BG/OF photo set", long_about = None)]
struct Cli {
    /// Directory containing the <condition>_<distance>.jpg files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Output CSV file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Images processed concurrently (0 = one per CPU)
    #[arg(short = 'j', long, value_name = "N", default_value_t = 1)]
    jobs: usize,

    /// Record unreadable images as empty rows instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

impl From<Cli> for BatchConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input_dir: cli.input_dir,
            output_path: cli.output,
            jobs: cli.jobs,
            keep_going: cli.keep_going,
            log_level: cli.log_level,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BatchConfig::from(Cli::parse());
    setup_logging(&config.log_level)?;

    let summary: BatchSummary = if config.is_parallel() {
        ParallelContrastPipeline::new(config).run().await?
    } else {
        let pipeline = ContrastPipeline::new(config);
        tokio::task::spawn_blocking(move || pipeline.run()).await??
    };

    info!(
        rows = summary.rows_written,
        failures = summary.failures.len(),
        output = %summary.output_path.display(),
        "done"
    );
    Ok(())
}
