//! Number rendering and the display projection.
//!
//! The calculator keeps full `f64` precision internally. The helpers here turn
//! values into the text stored in the display, read that text back, and
//! produce the truncated projection a renderer shows.

use serde::{Deserialize, Serialize};

/// Render a value as display text.
///
/// Uses the shortest decimal that round-trips. Magnitudes of `1e21` and above,
/// or below `1e-6`, use exponential form with an explicit exponent sign.
///
/// # Example
///
/// ```rust
/// use reckon::core::format::number_to_string;
///
/// assert_eq!(number_to_string(5.0), "5");
/// assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(-0.0), "0");
/// ```
pub fn number_to_string(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        signed_exponent(&format!("{value:e}"))
    } else {
        format!("{value}")
    }
}

/// Read display text back into a number.
///
/// The longest prefix that parses to a finite number wins, so `"12."` reads as
/// 12 and `"1e+"` as 1. Text with no parseable prefix reads as 0.
pub fn parse_display(text: &str) -> f64 {
    let text = text.trim();
    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f64>().ok().filter(|v| v.is_finite()))
        .unwrap_or(0.0)
}

/// `1.5e7` -> `1.5e+7`; negative exponents are left alone.
fn signed_exponent(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text.to_string(),
    }
}

/// Parameters of the display projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayFormat {
    /// Display text longer than this is re-rendered
    pub max_len: usize,
    /// Magnitude above which the projection switches to exponential form
    pub exponent_threshold: f64,
    /// Digits after the point in both fixed and exponential form
    pub fraction_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            max_len: 10,
            exponent_threshold: 999_999_999.0,
            fraction_digits: 3,
        }
    }
}

impl DisplayFormat {
    /// Project display text for presentation.
    ///
    /// Short text is returned unchanged. Longer text is reparsed and rendered
    /// with `fraction_digits` digits, in exponential form when the magnitude
    /// exceeds `exponent_threshold`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::core::format::DisplayFormat;
    ///
    /// let format = DisplayFormat::default();
    /// assert_eq!(format.project("42"), "42");
    /// assert_eq!(format.project("12345678901"), "1.235e+10");
    /// assert_eq!(format.project("123.4567891"), "123.457");
/// assert_eq!(format.project("1234567.0625"), "1234567.063");
    /// ```
    pub fn project(&self, display: &str) -> String {
        if display.chars().count() <= self.max_len {
            return display.to_string();
        }

        let value = parse_display(display);
        let sign = if value < 0.0 { "-" } else { "" };
        let magnitude = value.abs();
        let body = if magnitude > self.exponent_threshold {
            to_exponential(magnitude, self.fraction_digits)
        } else {
            to_fixed(magnitude, self.fraction_digits)
        };
        format!("{sign}{body}")
    }
}

/// Enough fraction digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Exact decimal expansion of a non-negative finite value, as the digit
/// string plus the number of digits before the point.
fn exact_digits(magnitude: f64) -> (Vec<u8>, usize) {
    let text = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut digits = integer.as_bytes().to_vec();
    digits.extend_from_slice(fraction.trim_end_matches('0').as_bytes());
    (digits, integer.len())
}

/// Keep the first `keep` digits, rounding half away from zero on the
/// dropped tail. Returns true when the carry adds a leading digit.
fn round_half_up(digits: &mut Vec<u8>, keep: usize) -> bool {
    let round_up = digits.get(keep).is_some_and(|&d| d >= b'5');
    digits.resize(keep, b'0');
    if !round_up {
        return false;
    }
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}

fn join_digits(integer: &[u8], fraction: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(integer).into_owned();
    if !fraction.is_empty() {
        text.push('.');
        text.push_str(&String::from_utf8_lossy(fraction));
    }
    text
}

/// `1234567.0625` with 3 digits -> `1234567.063`.
fn to_fixed(magnitude: f64, fraction_digits: usize) -> String {
    let (mut digits, mut integer_len) = exact_digits(magnitude);
    if round_half_up(&mut digits, integer_len + fraction_digits) {
        integer_len += 1;
    }
    let (integer, fraction) = digits.split_at(integer_len);
    join_digits(integer, fraction)
}

/// `10625000000` with 3 digits -> `1.063e+10`.
fn to_exponential(magnitude: f64, fraction_digits: usize) -> String {
    let (digits, integer_len) = exact_digits(magnitude);
    let Some(first) = digits.iter().position(|&d| d != b'0') else {
        return format!("{}e+0", join_digits(b"0", "0".repeat(fraction_digits).as_bytes()));
    };

    let mut exponent = integer_len as i64 - 1 - first as i64;
    let mut significant = digits[first..].to_vec();
    let keep = fraction_digits + 1;
    if round_half_up(&mut significant, keep) {
        significant.truncate(keep);
        exponent += 1;
    }
    let (lead, fraction) = significant.split_at(1);
    let exponent_sign = if exponent < 0 { "-" } else { "+" };
    format!(
        "{}e{exponent_sign}{}",
        join_digits(lead, fraction),
        exponent.abs()
    )
}
