#![allow(clippy::needless_return)]

mod cleaner;
mod columns;
mod error;
mod export;
mod header;
mod merge;
pub mod profile;
mod reshape;
mod table;
pub mod utils;
mod workbook;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use cleaner::{SheetCleaner, parse_date_cell, parse_numeric_cell};
pub use columns::{LabelMatcher, RenameRule, apply_rename_rules, normalize_label};
pub use error::TransformError;
pub use export::{CsvTable, export_to_csv, format_date, format_measurement, write_csv};
pub use header::{RawSheet, cell_text, locate_header_row, raw_sheet};
pub use merge::outer_join_on_date;
pub use reshape::{product_tag, wide_to_long};
pub use table::{DATE_COLUMN, LongRow, LongTable, Measurement, Origin, WideRow, WideTable};
pub use workbook::FuelWorkbook;

pub const ERRORS_LOG_FILE: &str = "errors.log";
