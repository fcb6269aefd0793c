use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "ContrastValues_BGOF.csv";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for a batch run. The defaults reproduce the plain
/// "run in the photo directory" behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory holding the `<condition>_<distance>.jpg` files.
    pub input_dir: PathBuf,
    /// Where the CSV table is written.
    pub output_path: PathBuf,
    /// Images decoded and estimated concurrently. `1` runs sequentially,
    /// `0` means one per available CPU.
    pub jobs: usize,
    /// Record a failed image as an undefined row and continue instead of
    /// aborting the run.
    pub keep_going: bool,
    /// Base `tracing` filter, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            jobs: 1,
            keep_going: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BatchConfig {
    /// Number of images allowed in flight at once.
    pub fn effective_jobs(&self) -> usize {
        match self.jobs {
            0 => num_cpus::get().max(1),
            jobs => jobs,
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.effective_jobs() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_run() {
        let config = BatchConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.output_path, PathBuf::from("ContrastValues_BGOF.csv"));
        assert!(!config.keep_going);
        assert!(!config.is_parallel());
    }

    #[test]
    fn zero_jobs_uses_every_cpu() {
        let config = BatchConfig {
            jobs: 0,
            ..BatchConfig::default()
        };
        assert_eq!(config.effective_jobs(), num_cpus::get().max(1));
    }
}
