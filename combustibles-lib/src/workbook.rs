use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::cleaner::SheetCleaner;
use crate::error::TransformError;
use crate::profile::SheetProfile;
use crate::table::WideTable;
use crate::utils::write_error_to_log;

/// Workbook opened once per run; every sheet is read from the same handle
pub struct FuelWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl FuelWorkbook {
    /// Open an `.xlsx`, `.xlsm`, `.xls` or `.ods` workbook
    pub fn open(path: &Path) -> Result<Self> {
        let sheets = open_workbook_auto(path)
            .with_context(|| format!("failed to open workbook {}", path.display()))?;
        Ok(FuelWorkbook {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Cell range of a sheet. The error lists the sheets the workbook does have.
    pub fn sheet(&mut self, sheet_name: &str) -> Result<Range<Data>, TransformError> {
        let available = self.sheet_names();
        let path = self.path.display().to_string();
        self.sheets.worksheet_range(sheet_name).map_err(|e| {
            let error = TransformError::SheetUnavailable {
                sheet: sheet_name.to_string(),
                message: format!(
                    "{e} (workbook {path} has sheets: {})",
                    available.join(", ")
                ),
            };
            write_error_to_log(error.category(), &error.to_string());
            error
        })
    }

    /// Read a sheet and clean it with the given profile
    pub fn load_clean(
        &mut self,
        sheet_name: &str,
        profile: &SheetProfile,
    ) -> Result<WideTable, TransformError> {
        let range = self.sheet(sheet_name)?;
        SheetCleaner::new(sheet_name, profile).clean(&range)
    }
}
