// THEORY:
// The `pipeline` module is the top-level API for a batch run. It wires the fixed
// label set, the image decoder, the contrast estimator and the table writer into a
// single call.
//
// Key architectural principles:
// 1.  **Label-driven**: the run is a walk over `label_pairs()`. Row order in the
//     output is that iteration order and nothing else.
// 2.  **All or nothing by default**: a missing or malformed image aborts the run
//     with the failing file named, and no CSV is written because the table is only
//     serialized once, at the end.
// 3.  **Optional isolation**: with `keep_going`, a failed image becomes a row of
//     undefined values and the run continues. The failures are reported in the
//     returned `BatchSummary`.

use crate::config::BatchConfig;
use crate::core_modules::contrast::{ContrastResult, contrast_estimator};
use crate::core_modules::error::ContrastError;
use crate::core_modules::utils::image_helper;
use crate::labels::{LabelPair, PAIR_COUNT, label_pairs};
use crate::report::{ContrastTable, ResultRow};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// An image that could not be turned into a contrast row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub labels: LabelPair,
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a completed batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows_written: usize,
    pub failures: Vec<FileFailure>,
    pub output_path: PathBuf,
}

/// Decodes one image and estimates its contrast.
pub fn process_image(path: &Path) -> Result<ContrastResult, ContrastError> {
    let brightness = image_helper::load_brightness(path)?;
    debug!(
        path = %path.display(),
        height = brightness.height(),
        width = brightness.width(),
        "decoded image"
    );
    Ok(contrast_estimator::estimate_brightness(&brightness))
}

/// Sequential batch driver.
#[derive(Debug, Clone)]
pub struct ContrastPipeline {
    config: BatchConfig,
}

impl ContrastPipeline {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn image_path(&self, labels: &LabelPair) -> PathBuf {
        self.config.input_dir.join(labels.file_name())
    }

    /// Processes every image in label order and writes the CSV table.
    pub fn run(&self) -> anyhow::Result<BatchSummary> {
        let mut accumulator = RowAccumulator::new(self.config.keep_going);
        for labels in label_pairs() {
            let path = self.image_path(&labels);
            info!(file = %labels.file_name(), "processing");
            let outcome = process_image(&path);
            accumulator.record(labels, path, outcome)?;
        }
        accumulator.finish(&self.config.output_path)
    }
}

/// Collects rows in arrival order and applies the failure policy. Shared by the
/// sequential and parallel drivers so both produce identical tables.
pub(crate) struct RowAccumulator {
    table: ContrastTable,
    failures: Vec<FileFailure>,
    keep_going: bool,
}

impl RowAccumulator {
    pub(crate) fn new(keep_going: bool) -> Self {
        Self {
            table: ContrastTable::with_capacity(PAIR_COUNT),
            failures: Vec::new(),
            keep_going,
        }
    }

    pub(crate) fn record(
        &mut self,
        labels: LabelPair,
        path: PathBuf,
        outcome: Result<ContrastResult, ContrastError>,
    ) -> anyhow::Result<()> {
        let contrast = match outcome {
            Ok(contrast) => {
                debug!(
                    file = %labels.file_name(),
                    overall = contrast.overall,
                    band1 = contrast.band1,
                    band2 = contrast.band2,
                    band3 = contrast.band3,
                    "estimated contrast"
                );
                contrast
            }
            Err(err) if self.keep_going => {
                warn!(file = %labels.file_name(), error = %err, "recording undefined row");
                self.failures.push(FileFailure {
                    labels,
                    path,
                    reason: err.to_string(),
                });
                ContrastResult::undefined()
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to process {}", labels.file_name()));
            }
        };
        self.table.push(ResultRow::new(labels, contrast));
        Ok(())
    }

    pub(crate) fn finish(self, output_path: &Path) -> anyhow::Result<BatchSummary> {
        self.table.write_csv(output_path)?;
        info!(
            rows = self.table.len(),
            failures = self.failures.len(),
            output = %output_path.display(),
            "wrote contrast table"
        );
        Ok(BatchSummary {
            rows_written: self.table.len(),
            failures: self.failures,
            output_path: output_path.to_path_buf(),
        })
    }
}
