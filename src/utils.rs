use combustibles_lib::utils::ensure_directory;
use combustibles_lib::{TransformError, ERRORS_LOG_FILE};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Install the stderr tracing subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Create the output directory if needed
pub fn prepare_output_dir(outdir: &Path) -> Result<(), anyhow::Error> {
    ensure_directory(outdir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create output directory {}: {}",
            outdir.display(),
            e
        )
    })
}

pub fn output_path(outdir: &Path, file_name: &str) -> PathBuf {
    return outdir.join(file_name);
}

/// Hint pointing at the errors log, for failures that were written to it.
/// Only structural sheet errors are logged there.
pub fn errors_log_hint(error: &anyhow::Error) -> Option<String> {
    error
        .downcast_ref::<TransformError>()
        .map(|_| format!("Check {} for details.", ERRORS_LOG_FILE))
}
