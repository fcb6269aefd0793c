use crate::config::BatchConfig;
use crate::labels::label_pairs;
use crate::pipeline::{BatchSummary, ContrastPipeline, RowAccumulator, process_image};
use futures::stream::{self, StreamExt};
use tracing::info;

/// Concurrent batch driver.
///
/// Decoding and estimation run on the tokio blocking pool with at most `jobs`
/// images in flight. `buffered` yields results in submission order, so rows,
/// failure handling and the written table match the sequential driver exactly.
pub struct ParallelContrastPipeline {
    pipeline: ContrastPipeline,
    jobs: usize,
}

impl ParallelContrastPipeline {
    pub fn new(config: BatchConfig) -> Self {
        let jobs = config.effective_jobs();
        Self {
            pipeline: ContrastPipeline::new(config),
            jobs,
        }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub async fn run(&self) -> anyhow::Result<BatchSummary> {
        let config = self.pipeline.config();
        info!(jobs = self.jobs, "processing images concurrently");

        let mut outcomes = stream::iter(label_pairs())
            .map(|labels| {
                let path = self.pipeline.image_path(&labels);
                tokio::task::spawn_blocking(move || {
                    info!(file = %labels.file_name(), "processing");
                    let outcome = process_image(&path);
                    (labels, path, outcome)
                })
            })
            .buffered(self.jobs);

        let mut accumulator = RowAccumulator::new(config.keep_going);
        while let Some(joined) = outcomes.next().await {
            let (labels, path, outcome) = joined?;
            accumulator.record(labels, path, outcome)?;
        }

        let output_path = config.output_path.clone();
        tokio::task::spawn_blocking(move || accumulator.finish(&output_path)).await?
    }
}
