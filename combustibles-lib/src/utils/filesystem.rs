use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::ERRORS_LOG_FILE;
use crate::utils::get_utc_iso_datetime;

/// Centralized function to write error messages to the errors log file
///
/// Nothing is written in test builds (unit tests or the `test` feature).
///
/// # Arguments
/// * `error_type` - A description of the error type/category (e.g., "Sheet Header Error")
/// * `error_message` - The actual error message content
pub fn write_error_to_log(error_type: &str, error_message: &str) {
    if cfg!(any(test, feature = "test")) {
        return;
    }
    let _ = append_error_entry(Path::new(ERRORS_LOG_FILE), error_type, error_message);
}

/// Append one timestamped entry to the log file at `log_path`, creating it if needed
pub fn append_error_entry(
    log_path: &Path,
    error_type: &str,
    error_message: &str,
) -> std::io::Result<()> {
    let timestamp = get_utc_iso_datetime();
    let log_entry = format!("\n[{}] {}:\n{}\n", timestamp, error_type, error_message);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    writeln!(file, "{}", log_entry)
}

/// Create the output directory (and its parents) when it does not exist yet.
pub fn ensure_directory(path: &Path) -> std::io::Result<()> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path)
}
