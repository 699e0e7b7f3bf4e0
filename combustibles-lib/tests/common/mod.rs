use combustibles_lib::{Measurement, WideTable};

// Re-export shared test utilities from src/test_utils.rs
pub use combustibles_lib::test_utils::{
    HISTORICAL_HEADER, excel_date, historical_sheet, row, sheet_from_rows, text, ymd,
};

/// Parse CSV text produced by the exporter back into (date, values) rows.
/// Empty fields are read back as missing values.
#[allow(dead_code)]
pub fn parse_exported(csv_text: &str) -> (Vec<String>, Vec<(String, Vec<Measurement>)>) {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let rows = reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            let date = record[0].to_string();
            let values = record
                .iter()
                .skip(1)
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.parse::<f64>().unwrap())
                    }
                })
                .collect();
            (date, values)
        })
        .collect();

    (header, rows)
}

/// Dates of a table formatted the way the exporter writes them
#[allow(dead_code)]
pub fn formatted_dates(table: &WideTable) -> Vec<String> {
    table
        .dates()
        .into_iter()
        .map(combustibles_lib::format_date)
        .collect()
}
