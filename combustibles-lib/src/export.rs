use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::table::{DATE_COLUMN, LongTable, Measurement, WideTable};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A table that can be written as comma-separated text
pub trait CsvTable {
    fn header(&self) -> Vec<String>;
    fn records(&self) -> Vec<Vec<String>>;
}

impl CsvTable for WideTable {
    fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.columns().len() + 1);
        header.push(DATE_COLUMN.to_string());
        header.extend(self.columns().iter().cloned());
        header
    }

    fn records(&self) -> Vec<Vec<String>> {
        self.rows()
            .iter()
            .map(|row| {
                let mut record = Vec::with_capacity(row.values.len() + 1);
                record.push(format_date(row.date));
                record.extend(row.values.iter().map(|value| format_measurement(*value)));
                record
            })
            .collect()
    }
}

impl CsvTable for LongTable {
    fn header(&self) -> Vec<String> {
        LongTable::COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn records(&self) -> Vec<Vec<String>> {
        self.rows()
            .iter()
            .map(|row| {
                vec![
                    format_date(row.date),
                    row.product.clone(),
                    format_measurement(row.value),
                    row.origin.to_string(),
                ]
            })
            .collect()
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Missing values are written as empty fields; numbers use the shortest decimal
/// form that parses back to the same value.
pub fn format_measurement(value: Measurement) -> String {
    match value {
        Some(number) => number.to_string(),
        None => String::new(),
    }
}

/// Write the table in its current row order. No index column is written.
pub fn write_csv<T: CsvTable, W: Write>(table: &T, writer: W) -> Result<()> {
    // Quote fields only when necessary (e.g. labels containing commas)
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(table.header())?;
    for record in table.records() {
        wtr.write_record(&record)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Export a table to a CSV file, replacing any existing file at `path`
pub fn export_to_csv<T: CsvTable>(table: &T, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(table, file).with_context(|| format!("failed writing {}", path.display()))?;
    info!(path = %path.display(), "exported table");
    Ok(())
}
