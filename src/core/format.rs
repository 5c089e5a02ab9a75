//! Pure text formatting helpers.
//!
//! Both generators in this crate need fixed-shape numeric text: the ROM encoder writes
//! zero-padded uppercase hex words and the PLL report prints frequencies the way C's
//! `%g` conversion does. Each helper takes a value and returns a fresh `String`; nothing
//! here carries formatting state between calls.

/// Significant digits used by [`format_general`].
pub const GENERAL_PRECISION: i32 = 6;

/// Render a 32-bit word as 8 uppercase, zero-padded hex digits.
pub fn hex_word(word: u32) -> String {
    format!("{:08X}", word)
}

/// Render a value like C's `printf("%g", value)`.
///
/// Six significant digits, trailing zeros removed, and exponent notation when the
/// decimal exponent is below -4 or at least six (`7e+06`, `1.2e+07`, `666667`).
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // The exponent after rounding to the target precision decides the style.
    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Strip trailing zeros after a decimal point, and the point itself if nothing remains.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
