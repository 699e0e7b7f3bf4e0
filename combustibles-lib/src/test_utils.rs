// Test utilities available to both unit and integration tests
// Only compiled when testing

use calamine::{Data, ExcelDateTime, ExcelDateTimeType, Range};
use chrono::NaiveDate;

/// Header row of the historical IMPORTACION/CONSUMO sheets, as typed in the workbook
pub const HISTORICAL_HEADER: [&str; 4] = [
    "Fecha",
    "Gasolina Regular",
    "Gasolina Superior",
    "Diesel alto azufre",
];

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

/// Date cell as calamine reads it from a date-formatted Excel cell
pub fn excel_date(serial: f64) -> Data {
    Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, false))
}

/// Row of text cells; empty strings become empty cells
pub fn row(cells: &[&str]) -> Vec<Data> {
    cells
        .iter()
        .map(|cell| if cell.is_empty() { Data::Empty } else { text(cell) })
        .collect()
}

/// Build an in-memory sheet. Rows shorter than the widest row are padded with empty cells.
pub fn sheet_from_rows(rows: &[Vec<Data>]) -> Range<Data> {
    let height = rows.len().max(1);
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(1).max(1);
    let mut range = Range::new((0, 0), ((height - 1) as u32, (width - 1) as u32));
    for (row_index, cells) in rows.iter().enumerate() {
        for (col_index, cell) in cells.iter().enumerate() {
            range.set_value((row_index as u32, col_index as u32), cell.clone());
        }
    }
    range
}

/// Historical sheet with two banner rows and the standard header above `data_rows`
pub fn historical_sheet(data_rows: &[Vec<Data>]) -> Range<Data> {
    let mut rows = vec![
        row(&["Ministerio de Energía y Minas"]),
        row(&["Importación de combustibles derivados del petróleo (barriles)"]),
        row(&HISTORICAL_HEADER),
    ];
    rows.extend(data_rows.iter().cloned());
    sheet_from_rows(&rows)
}
