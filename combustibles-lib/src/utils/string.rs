/// Normalize a column label: line breaks become spaces, surrounding whitespace is
/// trimmed, inner whitespace runs collapse to a single space and the result is
/// lower-cased.
///
/// Normalizing an already normalized label returns it unchanged.
pub fn normalize_column_name(value: &str) -> String {
    let normalized = value
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect::<String>()
        .split_whitespace() // Split on whitespace to normalize multiple spaces
        .collect::<Vec<&str>>()
        .join(" ");

    return normalized.to_lowercase();
}

/// Remove thousands separators, spaces and the `--` "no data" placeholder from a
/// numeric cell before it is parsed.
pub fn strip_numeric_noise(value: &str) -> String {
    value.replace(',', "").replace(' ', "").replace("--", "")
}
