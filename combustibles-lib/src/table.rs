use chrono::NaiveDate;
use std::fmt;

/// Label of the date column in every table produced by the pipeline
pub const DATE_COLUMN: &str = "fecha";

/// Numeric cell: `None` is a missing value, never a sentinel zero
pub type Measurement = Option<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub date: NaiveDate,
    pub values: Vec<Measurement>,
}

/// Date-keyed table with one numeric column per product.
///
/// The date column is implicit (always first on export); `columns` holds the
/// value column labels and every row carries exactly one value per label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WideTable {
    columns: Vec<String>,
    rows: Vec<WideRow>,
}

impl WideTable {
    pub fn new(columns: Vec<String>) -> Self {
        WideTable {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from rows. Panics in debug builds if a row width does not match.
    pub fn from_rows(columns: Vec<String>, rows: Vec<WideRow>) -> Self {
        debug_assert!(rows.iter().all(|row| row.values.len() == columns.len()));
        WideTable { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[WideRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, date: NaiveDate, values: Vec<Measurement>) {
        debug_assert_eq!(values.len(), self.columns.len());
        self.rows.push(WideRow { date, values });
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == label)
    }

    /// All values of one column, in row order
    pub fn column(&self, label: &str) -> Option<Vec<Measurement>> {
        let index = self.column_index(label)?;
        Some(self.rows.iter().map(|row| row.values[index]).collect())
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|row| row.date).collect()
    }

    /// Stable ascending sort on the date column
    pub fn sort_by_date(&mut self) {
        self.rows.sort_by_key(|row| row.date);
    }

    /// Rename value columns using `(from, to)` pairs. Labels without a pair are kept.
    pub fn rename_columns(mut self, labels: &[(&str, &str)]) -> Self {
        for column in self.columns.iter_mut() {
            if let Some((_, to)) = labels.iter().find(|(from, _)| from == column) {
                *column = to.to_string();
            }
        }
        self
    }

    /// Replace the `sources` columns with a single `target` column holding their sum.
    ///
    /// Missing values count as zero, so the combined cell is never missing: a
    /// missing value plus a number is that number and two missing values give zero.
    /// The combined column takes the position of the first source column.
    pub fn combine_columns(self, sources: &[&str], target: &str) -> Self {
        let indices: Vec<usize> = sources
            .iter()
            .filter_map(|source| self.column_index(source))
            .collect();
        let Some(&insert_at) = indices.iter().min() else {
            return self;
        };

        let mut columns = Vec::with_capacity(self.columns.len() + 1 - indices.len());
        for (index, column) in self.columns.iter().enumerate() {
            if index == insert_at {
                columns.push(target.to_string());
            } else if !indices.contains(&index) {
                columns.push(column.clone());
            }
        }

        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                let total: f64 = indices.iter().map(|&i| row.values[i].unwrap_or(0.0)).sum();
                let mut values = Vec::with_capacity(columns.len());
                for (index, value) in row.values.into_iter().enumerate() {
                    if index == insert_at {
                        values.push(Some(total));
                    } else if !indices.contains(&index) {
                        values.push(value);
                    }
                }
                WideRow {
                    date: row.date,
                    values,
                }
            })
            .collect();

        WideTable { columns, rows }
    }
}

/// Source of a table: imported fuel or domestic consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Importacion,
    Consumo,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Importacion => "importacion",
            Origin::Consumo => "consumo",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    pub date: NaiveDate,
    pub product: String,
    pub value: Measurement,
    pub origin: Origin,
}

/// Tidy table: one row per (date, product, origin)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LongTable {
    rows: Vec<LongRow>,
}

impl LongTable {
    pub const COLUMNS: [&'static str; 4] = [DATE_COLUMN, "producto", "barriles", "origen"];

    pub fn from_rows(rows: Vec<LongRow>) -> Self {
        LongTable { rows }
    }

    pub fn rows(&self) -> &[LongRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append the rows of `other` after the rows of `self`
    pub fn concat(mut self, other: LongTable) -> Self {
        self.rows.extend(other.rows);
        self
    }
}
