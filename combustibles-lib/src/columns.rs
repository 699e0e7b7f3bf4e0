use calamine::Data;

use crate::utils::normalize_column_name;

/// Normalize a header cell. Text is normalized with [`normalize_column_name`];
/// any other cell (empty, numeric placeholder, error) is passed through unchanged.
pub fn normalize_label(cell: &Data) -> Data {
    match cell {
        Data::String(s) => Data::String(normalize_column_name(s)),
        other => other.clone(),
    }
}

/// Predicate over a normalized column label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatcher {
    StartsWith(&'static str),
    /// Label starts with `prefix` and contains `fragment` somewhere
    StartsWithContaining {
        prefix: &'static str,
        fragment: &'static str,
    },
}

impl LabelMatcher {
    pub fn matches(&self, label: &str) -> bool {
        match self {
            LabelMatcher::StartsWith(prefix) => label.starts_with(prefix),
            LabelMatcher::StartsWithContaining { prefix, fragment } => {
                label.starts_with(prefix) && label.contains(fragment)
            }
        }
    }
}

/// Maps header variants found across years onto one canonical label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameRule {
    pub matcher: LabelMatcher,
    pub canonical: &'static str,
}

impl RenameRule {
    pub const fn starts_with(prefix: &'static str, canonical: &'static str) -> Self {
        RenameRule {
            matcher: LabelMatcher::StartsWith(prefix),
            canonical,
        }
    }

    pub const fn starts_with_containing(
        prefix: &'static str,
        fragment: &'static str,
        canonical: &'static str,
    ) -> Self {
        RenameRule {
            matcher: LabelMatcher::StartsWithContaining { prefix, fragment },
            canonical,
        }
    }
}

/// Apply the first matching rule to a text label. Labels matching no rule and
/// non-text labels are returned unchanged.
pub fn apply_rename_rules(label: Data, rules: &[RenameRule]) -> Data {
    if let Data::String(text) = &label {
        if let Some(rule) = rules.iter().find(|rule| rule.matcher.matches(text)) {
            return Data::String(rule.canonical.to_string());
        }
    }
    label
}
