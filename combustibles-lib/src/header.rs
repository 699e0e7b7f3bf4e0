use calamine::{Data, Range};

use crate::error::TransformError;
use crate::table::DATE_COLUMN;

/// Header-less view of a sheet: every cell rendered as text
pub type RawSheet = Vec<Vec<String>>;

/// Render a cell the way a header-less text read would see it
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read the whole range as text, keeping every row including banner rows
pub fn raw_sheet(range: &Range<Data>) -> RawSheet {
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

/// Return the zero-based index of the first row holding a cell equal to "fecha"
/// once trimmed and lower-cased. Containment does not count: "Fecha2024" is not
/// a header cell.
pub fn locate_header_row(raw: &[Vec<String>], sheet: &str) -> Result<usize, TransformError> {
    raw.iter()
        .position(|row| {
            row.iter()
                .any(|cell| cell.trim().to_lowercase() == DATE_COLUMN)
        })
        .ok_or_else(|| TransformError::HeaderNotFound {
            sheet: sheet.to_string(),
        })
}
