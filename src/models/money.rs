//! Vietnamese đồng amounts and their display formats
//!
//! VND has no minor unit in everyday use, so amounts are whole đồng stored in
//! an i64. Projected totals are computed in f64 and rounded on the way in.
//! Three renderings are supported: vi-VN currency (`1.234.567 ₫`), en-US
//! grouping for the input field (`1,234,567`), and a short chart-axis form
//! (`1.5B`, `3.2M`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of digits accepted in the amount field
pub const MAX_AMOUNT_DIGITS: usize = 18;

/// A whole-đồng amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vnd(i64);

impl Vnd {
    /// Create an amount from whole đồng
    pub const fn from_dong(dong: i64) -> Self {
        Self(dong)
    }

    /// Round a computed value to the nearest đồng
    ///
    /// Non-finite inputs collapse to zero; out-of-range values saturate.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self(value.round() as i64)
        } else {
            Self(0)
        }
    }

    /// Get the amount in đồng
    pub const fn dong(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a user-typed amount
    ///
    /// Every non-digit is ignored, so `16,800,000,000`, `16.800.000.000 ₫` and
    /// `16800000000` all parse to the same value.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        digits
            .parse::<i64>()
            .map(Self)
            .map_err(|_| MoneyParseError::TooLarge(s.trim().to_string()))
    }

    /// Format with en-US thousands separators and no currency sign
    pub fn format_en(&self) -> String {
        group_digits(self.0, ',')
    }
}

impl fmt::Display for Vnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{a0}₫", group_digits(self.0, '.'))
    }
}

/// Insert a separator every three digits
pub fn group_digits(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Clean what the user typed into the amount field
///
/// Keeps digits only, drops leading zeros, caps the length and re-groups
/// with commas. Returns an empty string when nothing numeric is left.
pub fn sanitize_amount_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .take(MAX_AMOUNT_DIGITS)
        .collect();

    if digits.is_empty() {
        // all zeros still counts as a typed value
        return if raw.chars().any(|c| c == '0') {
            "0".to_string()
        } else {
            String::new()
        };
    }

    digits
        .parse::<i64>()
        .map(|v| group_digits(v, ','))
        .unwrap_or_default()
}

/// Compact label for chart axes
pub fn format_short(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else {
        Vnd::from_f64(value).format_en()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount contains no digits"),
            MoneyParseError::TooLarge(s) => write!(f, "Amount is too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
