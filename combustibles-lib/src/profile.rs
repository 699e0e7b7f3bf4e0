use crate::columns::RenameRule;
use crate::table::DATE_COLUMN;

pub const REGULAR: &str = "gasolina regular";
pub const SUPERIOR: &str = "gasolina superior";
pub const DIESEL_HIGH_SULFUR: &str = "diesel alto azufre";
pub const DIESEL_LOW_SULFUR: &str = "diesel bajo azufre";
pub const DIESEL_ULTRA_LOW_SULFUR: &str = "diesel ultra bajo azufre";
pub const DIESEL_TOTAL: &str = "diesel total";

/// Sum of several columns replacing them in the cleaned table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCombination {
    pub sources: &'static [&'static str],
    pub target: &'static str,
}

/// Everything that differs between the sheet variants the cleaner handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetProfile {
    /// Canonical labels in output order; the date column comes first
    pub required_columns: &'static [&'static str],
    /// Checked in order, first match wins
    pub rename_rules: &'static [RenameRule],
    pub combination: Option<ColumnCombination>,
    /// `(canonical, export)` label pairs applied last
    pub export_labels: &'static [(&'static str, &'static str)],
}

impl SheetProfile {
    /// Value columns, i.e. the required columns without the date column
    pub fn value_columns(&self) -> impl Iterator<Item = &'static str> {
        self.required_columns
            .iter()
            .copied()
            .filter(|column| *column != DATE_COLUMN)
    }
}

/// Header variants observed across yearly editions of the historical workbook
pub const HISTORICAL_RENAME_RULES: [RenameRule; 4] = [
    RenameRule::starts_with("gasolina super", SUPERIOR),
    RenameRule::starts_with_containing("gasolina s", "rior", SUPERIOR),
    RenameRule::starts_with("gasolina regular", REGULAR),
    RenameRule::starts_with("diesel alto", DIESEL_HIGH_SULFUR),
];

/// Historical IMPORTACION/CONSUMO sheets, exported under their canonical labels
pub const HISTORICAL_PROFILE: SheetProfile = SheetProfile {
    required_columns: &[DATE_COLUMN, REGULAR, SUPERIOR, DIESEL_HIGH_SULFUR],
    rename_rules: &HISTORICAL_RENAME_RULES,
    combination: None,
    export_labels: &[],
};

/// 2025 IMPORTACION sheet: diesel is split in two grades that are summed
pub const UPDATE_2025_PROFILE: SheetProfile = SheetProfile {
    required_columns: &[
        DATE_COLUMN,
        REGULAR,
        SUPERIOR,
        DIESEL_LOW_SULFUR,
        DIESEL_ULTRA_LOW_SULFUR,
    ],
    rename_rules: &[],
    combination: Some(ColumnCombination {
        sources: &[DIESEL_LOW_SULFUR, DIESEL_ULTRA_LOW_SULFUR],
        target: DIESEL_TOTAL,
    }),
    export_labels: &[
        (REGULAR, "Regular_Imp"),
        (SUPERIOR, "Superior_Imp"),
        (DIESEL_TOTAL, "Diesel_Imp"),
    ],
};

/// Column labels of the import side of the combined series
pub const IMPORT_SERIES_LABELS: [(&str, &str); 3] = [
    (REGULAR, "Regular_Imp"),
    (SUPERIOR, "Superior_Imp"),
    (DIESEL_HIGH_SULFUR, "Diesel_Imp"),
];

/// Column labels of the consumption side of the combined series
pub const CONSUMPTION_SERIES_LABELS: [(&str, &str); 3] = [
    (REGULAR, "Regular_Con"),
    (SUPERIOR, "Superior_Con"),
    (DIESEL_HIGH_SULFUR, "Diesel_Con"),
];

/// Substring substitutions turning a column label into a short product tag
pub const PRODUCT_TAGS: [(&str, &str); 3] = [
    (REGULAR, "regular"),
    (SUPERIOR, "superior"),
    (DIESEL_HIGH_SULFUR, "diesel"),
];
