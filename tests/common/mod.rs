use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

/// Cell written into a fabricated workbook
#[allow(dead_code)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    /// Excel serial date written with a date number format
    Date(f64),
    Blank,
}

/// Write a workbook with one sheet per `(name, rows)` pair
#[allow(dead_code)]
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (row_index, cells) in rows.iter().enumerate() {
            for (col_index, cell) in cells.iter().enumerate() {
                let (row, col) = (row_index as u32, col_index as u16);
                match cell {
                    Cell::Text(value) => {
                        worksheet.write_string(row, col, *value).unwrap();
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row, col, *value).unwrap();
                    }
                    Cell::Date(serial) => {
                        worksheet
                            .write_number_with_format(row, col, *serial, &date_format)
                            .unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Row of text cells; empty strings are left blank
#[allow(dead_code)]
pub fn text_row<'a>(cells: &[&'a str]) -> Vec<Cell<'a>> {
    cells
        .iter()
        .map(|cell| if cell.is_empty() { Cell::Blank } else { Cell::Text(*cell) })
        .collect()
}

/// Banner rows plus the header row of the historical sheets
#[allow(dead_code)]
pub fn historical_sheet_rows<'a>(data_rows: Vec<Vec<Cell<'a>>>) -> Vec<Vec<Cell<'a>>> {
    let mut rows = vec![
        text_row(&["Ministerio de Energía y Minas"]),
        text_row(&["Comercialización de hidrocarburos (barriles)"]),
        text_row(&[
            "Fecha",
            "Gasolina Regular",
            "Gasolina Superior",
            "Diesel alto azufre",
        ]),
    ];
    rows.extend(data_rows);
    rows
}

#[allow(dead_code)]
pub fn workbook_path(dir: &Path) -> PathBuf {
    dir.join("comercializacion_hidrocarburos.xlsx")
}

#[allow(dead_code)]
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.to_string())
        .collect()
}
