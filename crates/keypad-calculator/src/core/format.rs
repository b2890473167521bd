//! Display formatting for calculator values
//!
//! Values are rounded to a fixed number of significant digits and printed in
//! the "general" style: positional notation while the decimal exponent lies
//! in `-5..digits`, scientific notation (`1.5E+20`, `1E-07`) outside of it.
//! Trailing zeros are stripped and negative zero prints as `0`. The output
//! always parses back with `str::parse::<f64>`.

/// Default number of significant digits shown on the display
pub const DEFAULT_SIGNIFICANT_DIGITS: u8 = 15;

/// Largest supported number of significant digits
pub const MAX_SIGNIFICANT_DIGITS: u8 = 17;

/// Formats a value with the default number of significant digits
#[must_use]
pub fn format_number(value: f64) -> String {
    format_with_digits(value, DEFAULT_SIGNIFICANT_DIGITS)
}

/// Formats a value with `digits` significant digits (clamped to 1..=17)
#[must_use]
pub fn format_with_digits(value: f64, digits: u8) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = usize::from(digits.clamp(1, MAX_SIGNIFICANT_DIGITS));
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let significand: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let significand = significand.trim_end_matches('0');
    let significand = if significand.is_empty() { "0" } else { significand };

    let body = if (-5..digits as i32).contains(&exponent) {
        positional(significand, exponent)
    } else {
        exponential(significand, exponent)
    };
    format!("{sign}{body}")
}

/// Places the decimal point inside a digit string with exponent `exponent`
fn positional(significand: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{significand}");
    }

    let int_len = exponent as usize + 1;
    if significand.len() <= int_len {
        let zeros = "0".repeat(int_len - significand.len());
        format!("{significand}{zeros}")
    } else {
        let (int_part, frac_part) = significand.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}

fn exponential(significand: &str, exponent: i32) -> String {
    let (lead, rest) = significand.split_at(1);
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    let exp_abs = exponent.unsigned_abs();
    if rest.is_empty() {
        format!("{lead}E{exp_sign}{exp_abs:02}")
    } else {
        format!("{lead}.{rest}E{exp_sign}{exp_abs:02}")
    }
}
