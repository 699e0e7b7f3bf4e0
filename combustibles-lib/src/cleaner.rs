use calamine::{Data, Range};
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::columns::{apply_rename_rules, normalize_label};
use crate::error::TransformError;
use crate::header::{locate_header_row, raw_sheet};
use crate::profile::SheetProfile;
use crate::table::{DATE_COLUMN, Measurement, WideTable};
use crate::utils::{parse_date_text, strip_numeric_noise, write_error_to_log};

/// Turns one worksheet into a [`WideTable`] according to a [`SheetProfile`].
///
/// The range is read twice: once as plain text to find the header row below any
/// banner rows, then again using that row as the header.
pub struct SheetCleaner<'a> {
    sheet_name: String,
    profile: &'a SheetProfile,
}

impl<'a> SheetCleaner<'a> {
    pub fn new(sheet_name: &str, profile: &'a SheetProfile) -> Self {
        SheetCleaner {
            sheet_name: sheet_name.to_string(),
            profile,
        }
    }

    pub fn clean(&self, range: &Range<Data>) -> Result<WideTable, TransformError> {
        let header_row = locate_header_row(&raw_sheet(range), &self.sheet_name)
            .map_err(|e| self.report(e))?;
        debug!(sheet = %self.sheet_name, header_row, "located header row");

        let labels = self.header_labels(range, header_row);
        let indices = self.required_indices(&labels).map_err(|e| self.report(e))?;

        // indices[0] is the date column, the rest follow the profile order
        let date_index = indices[0];
        let value_indices = &indices[1..];
        let value_columns: Vec<String> = self
            .profile
            .value_columns()
            .map(|label| label.to_string())
            .collect();

        let mut table = WideTable::new(value_columns);
        let mut dropped = 0usize;
        for row in range.rows().skip(header_row + 1) {
            let Some(date) = parse_date_cell(row.get(date_index).unwrap_or(&Data::Empty)) else {
                dropped += 1;
                continue;
            };
            let values = value_indices
                .iter()
                .map(|&index| parse_numeric_cell(row.get(index).unwrap_or(&Data::Empty)))
                .collect();
            table.push_row(date, values);
        }
        debug!(
            sheet = %self.sheet_name,
            kept = table.len(),
            dropped,
            "dropped rows without a valid date"
        );

        table.sort_by_date();

        if let Some(combination) = &self.profile.combination {
            table = table.combine_columns(combination.sources, combination.target);
        }

        Ok(table.rename_columns(self.profile.export_labels))
    }

    /// Normalized (and, for profiles with rules, renamed) labels of the header row
    fn header_labels(&self, range: &Range<Data>, header_row: usize) -> Vec<Data> {
        range
            .rows()
            .nth(header_row)
            .unwrap_or(&[])
            .iter()
            .map(|cell| apply_rename_rules(normalize_label(cell), self.profile.rename_rules))
            .collect()
    }

    /// Column position of every required label, in profile order.
    ///
    /// When a label occurs more than once the leftmost column is used.
    fn required_indices(&self, labels: &[Data]) -> Result<Vec<usize>, TransformError> {
        let mut indices = Vec::with_capacity(self.profile.required_columns.len());
        let mut missing = Vec::new();

        for required in self.profile.required_columns {
            let mut positions = labels
                .iter()
                .enumerate()
                .filter(|(_, label)| matches!(label, Data::String(s) if s.as_str() == *required))
                .map(|(index, _)| index);

            match positions.next() {
                Some(index) => {
                    if positions.next().is_some() {
                        warn!(
                            sheet = %self.sheet_name,
                            column = %required,
                            "column appears more than once, using the leftmost"
                        );
                    }
                    indices.push(index);
                }
                None => missing.push(required.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(TransformError::MissingColumns {
                sheet: self.sheet_name.clone(),
                missing,
            });
        }
        debug_assert_eq!(self.profile.required_columns.first(), Some(&DATE_COLUMN));

        Ok(indices)
    }

    fn report(&self, error: TransformError) -> TransformError {
        write_error_to_log(error.category(), &error.to_string());
        error
    }
}

/// Parse a date cell. Anything that is not a date is `None` and the row is dropped.
///
/// Serial dates follow the workbook's date system (1900 or 1904).
pub fn parse_date_cell(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) if !dt.is_duration() => {
            dt.as_datetime().map(|datetime| datetime.date())
        }
        Data::DateTimeIso(s) | Data::String(s) => parse_date_text(s),
        _ => None,
    }
}

/// Parse a numeric cell after removing thousands separators, spaces and `--`.
/// Unparseable content yields a missing value.
pub fn parse_numeric_cell(cell: &Data) -> Measurement {
    let value = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => {
            let cleaned = strip_numeric_noise(s);
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };
    value.is_finite().then_some(value)
}
