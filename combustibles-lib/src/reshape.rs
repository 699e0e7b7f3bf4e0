use crate::profile::PRODUCT_TAGS;
use crate::table::{LongRow, LongTable, Origin, WideTable};

/// Short product tag for a column label, e.g. "gasolina regular" -> "regular".
/// Substitutions are literal substring replacements applied in order.
pub fn product_tag(label: &str) -> String {
    PRODUCT_TAGS
        .iter()
        .fold(label.to_string(), |tag, &(from, to)| tag.replace(from, to))
}

/// Melt a wide table into one row per (date, product, origin).
///
/// Rows are grouped by source column in column order; within a group they keep
/// the table's date order.
pub fn wide_to_long(table: &WideTable, origin: Origin) -> LongTable {
    let mut rows = Vec::with_capacity(table.len() * table.columns().len());
    for (index, column) in table.columns().iter().enumerate() {
        let product = product_tag(column);
        for row in table.rows() {
            rows.push(LongRow {
                date: row.date,
                product: product.clone(),
                value: row.values[index],
                origin,
            });
        }
    }
    LongTable::from_rows(rows)
}
