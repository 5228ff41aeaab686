use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_from_literal_digits_become_int() {
    assert_eq!(Value::from_literal("5"), Value::Int(5));
    assert_eq!(Value::from_literal("0"), Value::Int(0));
    assert_eq!(Value::from_literal("007"), Value::Int(7));
}

#[test]
fn test_from_literal_everything_else_is_text() {
    assert_eq!(Value::from_literal("hello"), Value::text("hello"));
    assert_eq!(Value::from_literal("-5"), Value::text("-5"));
    assert_eq!(Value::from_literal("3.5"), Value::text("3.5"));
    assert_eq!(Value::from_literal("12ab"), Value::text("12ab"));
    assert_eq!(Value::from_literal("hello world"), Value::text("hello world"));
    assert_eq!(Value::from_literal(""), Value::text(""));
}

#[test]
fn test_from_literal_overflow_stays_text() {
    let huge = "99999999999999999999";
    assert_eq!(Value::from_literal(huge), Value::text(huge));
    assert_eq!(
        Value::from_literal("9223372036854775807"),
        Value::Int(i64::MAX)
    );
}

#[test]
fn test_coerced_text_digits() {
    assert_eq!(Value::text("42").coerced(), Value::Int(42));
    assert_eq!(Value::text("forty").coerced(), Value::text("forty"));
    assert_eq!(Value::Int(-3).coerced(), Value::Int(-3));
}

#[test]
fn test_display_renders_payload() {
    assert_eq!(Value::Int(12).to_string(), "12");
    assert_eq!(Value::Int(-1).to_string(), "-1");
    assert_eq!(Value::text("a b").to_string(), "a b");
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Int(1).as_int(), Some(1));
    assert_eq!(Value::text("x").as_int(), None);
    assert_eq!(Value::Int(1).type_name(), "integer");
    assert_eq!(Value::text("x").type_name(), "text");
}

#[test]
fn test_is_integer_literal() {
    assert!(is_integer_literal("123"));
    assert!(!is_integer_literal(""));
    assert!(!is_integer_literal("+1"));
    assert!(!is_integer_literal(" 1"));
}

mod properties {
    use super::super::Value;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn non_negative_integers_round_trip(n in 0..=i64::MAX) {
            prop_assert_eq!(Value::from_literal(&n.to_string()), Value::Int(n));
        }

        #[test]
        fn tokens_with_a_letter_stay_text(s in "[0-9]{0,4}[a-z][0-9a-z]{0,4}") {
            prop_assert_eq!(Value::from_literal(&s), Value::Text(s.clone()));
        }
    }
}
