//! Display formatting for modifiers and checkbox flags.
//!
//! Records store modifiers as bare integers (`2`, `-1`, `0`). The sheet shows
//! positive modifiers with an explicit sign and leaves everything else exactly
//! as the record wrote it.

/// Reads the integer at the start of `raw`.
///
/// Leading whitespace is skipped, then an optional sign and a run of ASCII
/// digits are read; anything after the digits is ignored (`"3rd"` reads as
/// 3, `"3.5"` as 3). Returns `None` when no digits follow. Values too large
/// for `i64` saturate.
pub fn leading_integer(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    seen_digit.then_some(if negative { -value } else { value })
}

/// Formats a modifier for display.
///
/// Text whose leading integer (see [`leading_integer`]) is greater than zero
/// gets a `+` prefix. Zero, negative and non-numeric text is returned
/// unchanged, so a record's own `-1` stays `-1` and an empty field stays
/// empty.
///
/// # Examples
///
/// ```
/// use charsheet_domain::value_objects::format_signed;
///
/// assert_eq!(format_signed("2"), "+2");
/// assert_eq!(format_signed("-1"), "-1");
/// assert_eq!(format_signed("0"), "0");
/// assert_eq!(format_signed(""), "");
/// ```
pub fn format_signed(raw: &str) -> String {
    match leading_integer(raw) {
        Some(value) if value > 0 => format!("+{raw}"),
        _ => raw.to_string(),
    }
}

/// Reads a record checkbox flag.
///
/// Only the exact text `"1"` counts as checked; absent or empty fields are
/// unchecked.
pub fn format_checkbox(raw: &str) -> bool {
    raw == "1"
}
