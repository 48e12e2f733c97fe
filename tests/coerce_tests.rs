use homecard::coerce::{parse_dimension, parse_int_lenient, parse_offset, parse_order};

#[test]
fn test_lenient_parse_takes_leading_integer() {
    assert_eq!(parse_int_lenient("42"), Some(42));
    assert_eq!(parse_int_lenient("  42"), Some(42));
    assert_eq!(parse_int_lenient("+7"), Some(7));
    assert_eq!(parse_int_lenient("-13"), Some(-13));
    assert_eq!(parse_int_lenient("12px"), Some(12));
}

#[test]
fn test_lenient_parse_truncates_fractions() {
    assert_eq!(parse_int_lenient("3.7"), Some(3));
    assert_eq!(parse_int_lenient("-2.9"), Some(-2));
}

#[test]
fn test_lenient_parse_rejects_garbage() {
    assert_eq!(parse_int_lenient(""), None);
    assert_eq!(parse_int_lenient("abc"), None);
    assert_eq!(parse_int_lenient("-"), None);
    assert_eq!(parse_int_lenient(".5"), None);
}

#[test]
fn test_dimension_coerces_to_zero() {
    assert_eq!(parse_dimension("240"), 240);
    assert_eq!(parse_dimension(""), 0);
    assert_eq!(parse_dimension("abc"), 0);
    assert_eq!(parse_dimension("3.7"), 3);
    // Dimensions cannot go negative
    assert_eq!(parse_dimension("-5"), 0);
}

#[test]
fn test_order_coerces_to_zero_but_keeps_sign() {
    assert_eq!(parse_order("4"), 4);
    assert_eq!(parse_order("-4"), -4);
    assert_eq!(parse_order(""), 0);
    assert_eq!(parse_order("x"), 0);
}

#[test]
fn test_offset_distinguishes_empty_from_zero() {
    assert_eq!(parse_offset(""), None);
    assert_eq!(parse_offset("0"), Some(0));
    assert_eq!(parse_offset("-12"), Some(-12));
    // Non-empty garbage coerces to 0, like the other fields
    assert_eq!(parse_offset("abc"), Some(0));
    // Whitespace is not the empty string
    assert_eq!(parse_offset(" "), Some(0));
}
