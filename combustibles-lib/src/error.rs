use thiserror::Error;

/// Structural failures of the cleaning pipeline.
///
/// Per-cell parse problems never surface here: unparseable dates drop their row
/// and unparseable numbers become missing values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("No header row with the label 'Fecha' was found in sheet '{sheet}'")]
    HeaderNotFound { sheet: String },

    #[error("Sheet '{sheet}' is missing required columns: {missing:?}")]
    MissingColumns { sheet: String, missing: Vec<String> },

    #[error("Error reading sheet '{sheet}': {message}")]
    SheetUnavailable { sheet: String, message: String },

    #[error("Column '{column}' exists in both tables being merged")]
    ColumnConflict { column: String },
}

impl TransformError {
    /// Short category used when the error is appended to the errors log
    pub fn category(&self) -> &'static str {
        match self {
            TransformError::HeaderNotFound { .. } => "Sheet Header Error",
            TransformError::MissingColumns { .. } => "Sheet Missing Columns Error",
            TransformError::SheetUnavailable { .. } => "Sheet Read Error",
            TransformError::ColumnConflict { .. } => "Merge Column Conflict Error",
        }
    }
}
