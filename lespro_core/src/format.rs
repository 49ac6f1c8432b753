//! ru-RU style number display.
//!
//! Integer digits are grouped by three with a no-break space, the decimal
//! separator is a comma, and at most three fraction digits are shown with
//! trailing zeros trimmed. This matches what a browser prints for
//! `Number.toLocaleString("ru-RU")`.

use crate::catalog::Material;

/// Thousands separator (U+00A0 NO-BREAK SPACE).
pub const GROUP_SEPARATOR: char = '\u{a0}';
/// Decimal separator.
pub const DECIMAL_SEPARATOR: char = ',';
/// Currency sign appended by [`rubles`].
pub const RUBLE_SIGN: &str = "₽";

const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with grouped thousands, e.g. `17000.0` -> `"17 000"`.
/// Non-finite values render as `"—"`.
pub fn group_number(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // "-0" is not a thing on a price tag
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

/// `"17 000 ₽"`
pub fn rubles(value: f64) -> String {
    format!("{}{GROUP_SEPARATOR}{RUBLE_SIGN}", group_number(value))
}

/// `"8 500 ₽/м³"`
pub fn price_per_unit(material: &Material) -> String {
    format!(
        "{}/{}",
        rubles(material.price_per_unit_volume),
        material.unit
    )
}

/// Volume as entered into a quote caption, e.g. `"0,5 м³"`.
pub fn volume(value: f64, unit: &str) -> String {
    format!("{}{GROUP_SEPARATOR}{unit}", group_number(value))
}
