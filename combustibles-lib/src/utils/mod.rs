mod datetime;
mod filesystem;
mod string;

pub use datetime::{get_utc_iso_datetime, parse_date_text};
pub use filesystem::{append_error_entry, ensure_directory, write_error_to_log};
pub use string::{normalize_column_name, strip_numeric_noise};
