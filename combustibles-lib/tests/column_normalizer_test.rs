use combustibles_lib::normalize_label;
use combustibles_lib::utils::normalize_column_name;
use proptest::prelude::*;

mod common;

#[test]
fn test_normalize_column_name_basic() {
    assert_eq!(normalize_column_name("Fecha"), "fecha");
    assert_eq!(
        normalize_column_name("  Gasolina\nSuperior  "),
        "gasolina superior"
    );
    assert_eq!(
        normalize_column_name("Diesel\n\nalto   azufre"),
        "diesel alto azufre"
    );
}

#[test]
fn test_normalize_column_name_already_normalized() {
    assert_eq!(
        normalize_column_name("gasolina regular"),
        "gasolina regular"
    );
}

#[test]
fn test_normalize_label_non_text_is_unchanged() {
    let cell = calamine::Data::Float(3.0);
    assert_eq!(normalize_label(&cell), cell);
}

proptest! {
     #![proptest_config(ProptestConfig {
        cases: 10000, ..ProptestConfig::default()
        })]

    #[test]
    fn test_normalize_column_name_is_idempotent(input in "\\PC*") {
        let once = normalize_column_name(&input);
        let twice = normalize_column_name(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_column_name_has_no_outer_or_double_spaces(
        words in prop::collection::vec("[a-zA-Z]{1,8}", 1..5),
        gaps in prop::collection::vec("[ \t\n]{1,4}", 5)
    ) {
        let mut input = String::from(gaps[0].as_str());
        for (word, gap) in words.iter().zip(gaps.iter().skip(1).cycle()) {
            input.push_str(word);
            input.push_str(gap);
        }

        let result = normalize_column_name(&input);
        prop_assert!(!result.starts_with(' ') && !result.ends_with(' '));
        prop_assert!(!result.contains("  "));
        prop_assert!(!result.contains('\n'));
        prop_assert_eq!(result, words.join(" ").to_lowercase());
    }
}
