//! Lenient numeric coercion for editor input.
//!
//! The editor never rejects input: malformed text coerces to a well-defined
//! value instead of surfacing an error. The rules follow the homepage's own
//! form handling: base-10 whole-number parsing where fractional input
//! truncates, garbage becomes 0, and for the offset fields the empty string
//! is the distinct "unset" state rather than 0.

/// Parse the leading base-10 integer of `raw`, if any.
///
/// Skips leading whitespace, accepts one optional sign, then consumes ASCII
/// digits until the first non-digit. `"12.7"` parses as 12, `"abc"` as
/// nothing.
pub fn parse_int_lenient(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let digits: String = s.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    // Saturate rather than fail on absurdly long input.
    let mut value: i64 = 0;
    for d in digits.bytes() {
        value = value.saturating_mul(10).saturating_add(i64::from(d - b'0'));
    }
    Some(if negative { -value } else { value })
}

/// Coerce text to a width/height value. Invalid or empty input is 0;
/// dimensions cannot be negative.
pub fn parse_dimension(raw: &str) -> u32 {
    let value = parse_int_lenient(raw).unwrap_or(0).max(0);
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Coerce text to a display-order value. Invalid or empty input is 0.
pub fn parse_order(raw: &str) -> i64 {
    parse_int_lenient(raw).unwrap_or(0)
}

/// Coerce text to an offset value.
///
/// The empty string (exactly, not whitespace) means "unset". Any other
/// unparseable text coerces to 0, like the other numeric fields.
pub fn parse_offset(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        None
    } else {
        Some(parse_int_lenient(raw).unwrap_or(0))
    }
}
