use anyhow::Result;
use combustibles_lib::profile::{
    CONSUMPTION_SERIES_LABELS, HISTORICAL_PROFILE, IMPORT_SERIES_LABELS, UPDATE_2025_PROFILE,
};
use combustibles_lib::{FuelWorkbook, Origin, export_to_csv, outer_join_on_date, wide_to_long};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::utils::{output_path, prepare_output_dir};

pub const IMPORT_SHEET: &str = "IMPORTACION";
pub const CONSUMPTION_SHEET: &str = "CONSUMO";

pub const UPDATE_2025_FILE: &str = "importacion_2025_actualizado.csv";
pub const IMPORTS_FILE: &str = "importacion_combustibles.csv";
pub const CONSUMPTION_FILE: &str = "consumo_combustibles.csv";
pub const COMBINED_SERIES_FILE: &str = "Series_de_Tiempo_Combustibles.csv";
pub const LONG_SERIES_FILE: &str = "Series_Largas_Combustibles.csv";

/// Clean the 2025 import sheet (two diesel grades summed into one) and export it.
///
/// Returns the path of the written file.
pub fn run_update_2025(excel: &Path, sheet: &str, outdir: &Path) -> Result<PathBuf> {
    prepare_output_dir(outdir)?;

    let mut workbook = FuelWorkbook::open(excel)?;
    let imports = workbook.load_clean(sheet, &UPDATE_2025_PROFILE)?;
    info!(sheet, rows = imports.len(), "cleaned import sheet");

    let out_path = output_path(outdir, UPDATE_2025_FILE);
    export_to_csv(&imports, &out_path)?;
    Ok(out_path)
}

#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub excel: PathBuf,
    pub outdir: PathBuf,
    pub import_sheet: String,
    pub consumption_sheet: String,
    /// Also write the tidy (date, product, barrels, origin) table
    pub long_format: bool,
}

impl ConversionOptions {
    pub fn new(excel: &Path, outdir: &Path) -> Self {
        ConversionOptions {
            excel: excel.to_path_buf(),
            outdir: outdir.to_path_buf(),
            import_sheet: IMPORT_SHEET.to_string(),
            consumption_sheet: CONSUMPTION_SHEET.to_string(),
            long_format: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutputs {
    pub imports: PathBuf,
    pub consumption: PathBuf,
    pub combined: PathBuf,
    pub long: Option<PathBuf>,
}

impl ConversionOutputs {
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths = vec![
            self.imports.as_path(),
            self.consumption.as_path(),
            self.combined.as_path(),
        ];
        if let Some(long) = &self.long {
            paths.push(long.as_path());
        }
        paths
    }
}

/// Clean the historical import and consumption sheets, export each one, then
/// export their date-wise outer join (and optionally the long format).
pub fn run_excel_to_csv(options: &ConversionOptions) -> Result<ConversionOutputs> {
    prepare_output_dir(&options.outdir)?;

    let mut workbook = FuelWorkbook::open(&options.excel)?;
    let imports = workbook.load_clean(&options.import_sheet, &HISTORICAL_PROFILE)?;
    let consumption = workbook.load_clean(&options.consumption_sheet, &HISTORICAL_PROFILE)?;
    info!(
        imports = imports.len(),
        consumption = consumption.len(),
        "cleaned historical sheets"
    );

    let imports_path = output_path(&options.outdir, IMPORTS_FILE);
    let consumption_path = output_path(&options.outdir, CONSUMPTION_FILE);
    export_to_csv(&imports, &imports_path)?;
    export_to_csv(&consumption, &consumption_path)?;

    let long_path = if options.long_format {
        let long = wide_to_long(&imports, Origin::Importacion)
            .concat(wide_to_long(&consumption, Origin::Consumo));
        let path = output_path(&options.outdir, LONG_SERIES_FILE);
        export_to_csv(&long, &path)?;
        Some(path)
    } else {
        None
    };

    let combined = outer_join_on_date(
        &imports.rename_columns(&IMPORT_SERIES_LABELS),
        &consumption.rename_columns(&CONSUMPTION_SERIES_LABELS),
    )?;
    let combined_path = output_path(&options.outdir, COMBINED_SERIES_FILE);
    export_to_csv(&combined, &combined_path)?;

    Ok(ConversionOutputs {
        imports: imports_path,
        consumption: consumption_path,
        combined: combined_path,
        long: long_path,
    })
}
