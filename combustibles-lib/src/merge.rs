use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::error::TransformError;
use crate::table::{Measurement, WideRow, WideTable};
use crate::utils::write_error_to_log;

/// Full outer join of two wide tables on the date column.
///
/// Every date present in either input appears in the output, in ascending order.
/// Left columns come first, then right columns; a side without a row for a date
/// contributes missing values. Value column labels must not overlap.
pub fn outer_join_on_date(left: &WideTable, right: &WideTable) -> Result<WideTable, TransformError> {
    if let Some(column) = left
        .columns()
        .iter()
        .find(|column| right.columns().contains(*column))
    {
        let error = TransformError::ColumnConflict {
            column: column.clone(),
        };
        write_error_to_log(error.category(), &error.to_string());
        return Err(error);
    }

    let mut columns = left.columns().to_vec();
    columns.extend(right.columns().iter().cloned());

    // date -> (left row positions, right row positions)
    let mut key_to_rows: BTreeMap<NaiveDate, (Vec<usize>, Vec<usize>)> = BTreeMap::new();
    for (index, row) in left.rows().iter().enumerate() {
        key_to_rows.entry(row.date).or_default().0.push(index);
    }
    for (index, row) in right.rows().iter().enumerate() {
        key_to_rows.entry(row.date).or_default().1.push(index);
    }

    let empty_left: Vec<Measurement> = vec![None; left.columns().len()];
    let empty_right: Vec<Measurement> = vec![None; right.columns().len()];

    let mut rows = Vec::with_capacity(key_to_rows.len());
    for (date, (left_rows, right_rows)) in key_to_rows {
        let left_values = side_values(left, &left_rows, &empty_left);
        let right_values = side_values(right, &right_rows, &empty_right);

        // Repeated dates pair every left row with every right row
        for l in &left_values {
            for r in &right_values {
                let mut values = Vec::with_capacity(columns.len());
                values.extend_from_slice(l);
                values.extend_from_slice(r);
                rows.push(WideRow { date, values });
            }
        }
    }

    Ok(WideTable::from_rows(columns, rows))
}

fn side_values<'t>(
    table: &'t WideTable,
    positions: &[usize],
    empty: &'t [Measurement],
) -> Vec<&'t [Measurement]> {
    if positions.is_empty() {
        return vec![empty];
    }
    positions
        .iter()
        .map(|&index| table.rows()[index].values.as_slice())
        .collect()
}
