//! # Weight Module
//!
//! Laundry weight as integer grams, entered by staff in kilograms.
//!
//! Weight input arrives as free text from the order form while the user is
//! still typing, so parsing is deliberately forgiving: both `.` and `,`
//! work as the decimal separator, and blank or garbage input reads as
//! zero so the live cost preview shows `Rp 0` instead of an error. The
//! strict `> 0` check happens in [`crate::validation::validate_weight`]
//! when the order is actually saved.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grams per kilogram; weights are stored at gram precision.
pub const GRAMS_PER_KG: i64 = 1000;

/// A weight at gram precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(i64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    #[inline]
    pub const fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    /// Whole-kilogram constructor, mostly for tests and seed data.
    #[inline]
    pub const fn from_kilograms(kg: i64) -> Self {
        Weight(kg * GRAMS_PER_KG)
    }

    #[inline]
    pub const fn grams(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parses a kilogram amount from form text.
    ///
    /// Accepts `2.5` and `2,5` alike; keeps at most three decimal places
    /// (gram precision). Blank or unparsable text reads as zero.
    pub fn parse_lenient(input: &str) -> Weight {
        let normalized = input.trim().replace(',', ".");
        if normalized.is_empty() {
            return Weight::ZERO;
        }
        parse_kilograms(&normalized).map(Weight).unwrap_or(Weight::ZERO)
    }
}

/// Fixed-point parse of a decimal kilogram string into grams.
///
/// Integer arithmetic end to end; fractional digits past the third are
/// dropped.
fn parse_kilograms(text: &str) -> Option<i64> {
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut parts = text.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let frac = parts.next().unwrap_or("");

    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

    let mut frac_digits = String::from(frac);
    frac_digits.truncate(3);
    while frac_digits.len() < 3 {
        frac_digits.push('0');
    }
    let frac: i64 = frac_digits.parse().ok()?;

    let grams = whole.checked_mul(GRAMS_PER_KG)?.checked_add(frac)?;
    Some(if negative { -grams } else { grams })
}

/// Display in kilograms with trailing zeros trimmed: `2.5 kg`, `3 kg`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let grams = self.0.unsigned_abs();
        let whole = grams / GRAMS_PER_KG as u64;
        let frac = grams % GRAMS_PER_KG as u64;
        if frac == 0 {
            write!(f, "{}{} kg", sign, whole)
        } else {
            let frac = format!("{:03}", frac);
            write!(f, "{}{}.{} kg", sign, whole, frac.trim_end_matches('0'))
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::ZERO
    }
}
