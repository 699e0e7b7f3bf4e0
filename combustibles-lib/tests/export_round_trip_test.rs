//! Exported CSV read back with empty fields as missing values must reproduce the
//! in-memory table, including row order.

use combustibles_lib::profile::{CONSUMPTION_SERIES_LABELS, IMPORT_SERIES_LABELS};
use combustibles_lib::{
    CsvTable, LongTable, Origin, WideTable, outer_join_on_date, wide_to_long, write_csv,
};

mod common;
use common::*;

fn export(table: &impl CsvTable) -> String {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

fn sample_table() -> WideTable {
    let mut table = WideTable::new(vec![
        "gasolina regular".to_string(),
        "gasolina superior".to_string(),
        "diesel alto azufre".to_string(),
    ]);
    table.push_row(ymd(2023, 12, 1), vec![Some(812345.25), None, Some(0.0)]);
    table.push_row(ymd(2024, 1, 1), vec![Some(0.1), Some(1e-7), None]);
    table.push_row(ymd(2024, 2, 1), vec![None, None, None]);
    table
}

#[test]
fn test_wide_table_round_trip() {
    let table = sample_table();
    let (header, rows) = parse_exported(&export(&table));

    assert_eq!(
        header,
        vec!["fecha", "gasolina regular", "gasolina superior", "diesel alto azufre"]
    );
    let dates: Vec<String> = rows.iter().map(|(date, _)| date.clone()).collect();
    assert_eq!(dates, formatted_dates(&table));
    for (parsed, original) in rows.iter().zip(table.rows()) {
        assert_eq!(parsed.1, original.values);
    }
}

#[test]
fn test_combined_series_round_trip() {
    let imports = sample_table().rename_columns(&IMPORT_SERIES_LABELS);
    let mut consumption = WideTable::new(
        CONSUMPTION_SERIES_LABELS
            .iter()
            .map(|(_, label)| label.to_string())
            .collect(),
    );
    consumption.push_row(ymd(2024, 3, 1), vec![Some(1.0), Some(2.0), Some(3.0)]);

    let combined = outer_join_on_date(&imports, &consumption).unwrap();
    let (header, rows) = parse_exported(&export(&combined));

    assert_eq!(
        header,
        vec![
            "fecha",
            "Regular_Imp",
            "Superior_Imp",
            "Diesel_Imp",
            "Regular_Con",
            "Superior_Con",
            "Diesel_Con"
        ]
    );
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].0, "2024-03-01");
    assert_eq!(
        rows[3].1,
        vec![None, None, None, Some(1.0), Some(2.0), Some(3.0)]
    );
    assert_eq!(rows[0].1[3..], [None::<f64>; 3]);
}

#[test]
fn test_long_table_export() {
    let long: LongTable = wide_to_long(&sample_table(), Origin::Importacion);
    let exported = export(&long);

    let mut lines = exported.lines();
    assert_eq!(lines.next(), Some("fecha,producto,barriles,origen"));
    assert_eq!(lines.next(), Some("2023-12-01,regular,812345.25,importacion"));
    assert_eq!(exported.lines().count(), 1 + 9);
    assert!(exported.contains("2024-02-01,diesel,,importacion"));
}
