//! Per-language implementations of the localized operations.
//!
//! Each language with any localized support provides a [`LanguageUnit`]
//! listing the operations it implements. Operations missing from a unit are
//! bound to the not-implemented sentinel when the registry is populated.

pub mod de;
pub mod en;
pub mod es;
pub mod fr;

use chrono::NaiveDateTime;
use lingo_semantics::Operation;

use crate::args::OperationFn;

/// Message used when a language gives no localized one.
pub const GENERIC_NOT_IMPLEMENTED: &str =
    "This function has not been implemented in the specified language.";

/// The operations one language implements.
#[derive(Debug, Clone, Copy)]
pub struct LanguageUnit {
    /// Primary language code.
    pub code: &'static str,
    /// Localized not-implemented message.
    pub not_implemented: Option<&'static str>,
    pub operations: &'static [(Operation, OperationFn)],
}

impl LanguageUnit {
    pub fn operation(&self, operation: Operation) -> Option<OperationFn> {
        self.operations
            .iter()
            .find(|(candidate, _)| *candidate == operation)
            .map(|(_, function)| *function)
    }

    pub fn not_implemented_message(&self) -> &'static str {
        self.not_implemented.unwrap_or(GENERIC_NOT_IMPLEMENTED)
    }
}

static UNITS: &[LanguageUnit] = &[de::UNIT, en::UNIT, es::UNIT, fr::UNIT];

/// The implementation unit for a primary language code, if one exists.
pub fn unit_for(primary: &str) -> Option<&'static LanguageUnit> {
    UNITS.iter().find(|unit| unit.code == primary)
}

/// Every language with an implementation unit.
pub fn units() -> &'static [LanguageUnit] {
    UNITS
}

/// A number split into whole part and fraction `numerator/denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedFraction {
    pub whole: i64,
    pub numerator: u32,
    pub denominator: u32,
}

/// Approximate `number` as a mixed fraction using the first denominator
/// that lands within 0.01 of a whole numerator.
pub fn mixed_fraction(number: f64, denominators: &[u32]) -> Option<MixedFraction> {
    if !number.is_finite() {
        return None;
    }
    let whole = number.trunc();
    if whole == number {
        return Some(MixedFraction {
            whole: whole as i64,
            numerator: 0,
            denominator: 1,
        });
    }
    let fraction = (number - whole).abs();
    denominators.iter().find_map(|&denominator| {
        let numerator = fraction * f64::from(denominator);
        ((numerator - numerator.round()).abs() < 0.01).then(|| MixedFraction {
            whole: whole as i64,
            numerator: numerator.round() as u32,
            denominator,
        })
    })
}

/// `number` rounded to three decimals, without trailing zeros.
pub fn rounded_display(number: f64) -> String {
    ((number * 1000.0).round() / 1000.0).to_string()
}

/// Clock display such as "5:30", "5:30 PM" or "17:30".
pub fn clock_display(time: NaiveDateTime, use_24hour: bool, use_ampm: bool) -> String {
    if use_24hour {
        return time.format("%H:%M").to_string();
    }
    let pattern = if use_ampm { "%I:%M %p" } else { "%I:%M" };
    let text = time.format(pattern).to_string();
    match text.strip_prefix('0') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Whole part and decimal digits of `number` after rounding to `places`,
/// trailing zeros removed. The digits are empty when the rounded number is
/// whole. `None` when the whole part does not fit in a `u64`.
pub fn decimal_digits(number: f64, places: usize) -> Option<(u64, Vec<u8>)> {
    let text = format!("{:.places$}", number.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((&text, ""));
    let digits = fraction
        .trim_end_matches('0')
        .bytes()
        .map(|digit| digit - b'0')
        .collect();
    Some((integer.parse().ok()?, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_fraction_of_whole_number() {
        let fraction = mixed_fraction(4.0, &[2, 3]).unwrap();
        assert_eq!((fraction.whole, fraction.numerator, fraction.denominator), (4, 0, 1));
    }

    #[test]
    fn mixed_fraction_prefers_first_denominator() {
        let fraction = mixed_fraction(2.5, &[2, 4]).unwrap();
        assert_eq!((fraction.whole, fraction.numerator, fraction.denominator), (2, 1, 2));
        assert_eq!(mixed_fraction(0.123, &[2, 3, 4]), None);
    }

    #[test]
    fn decimal_digits_round_and_trim() {
        assert_eq!(decimal_digits(3.14159, 2), Some((3, vec![1, 4])));
        assert_eq!(decimal_digits(2.5, 3), Some((2, vec![5])));
        assert_eq!(decimal_digits(7.0, 2), Some((7, vec![])));
        assert_eq!(decimal_digits(-1.25, 2), Some((1, vec![2, 5])));
    }

    #[test]
    fn decimal_digits_beyond_u64() {
        assert_eq!(decimal_digits(1e19, 2), Some((10_000_000_000_000_000_000, vec![])));
        assert_eq!(decimal_digits(1e20, 2), None);
        assert_eq!(decimal_digits(-1e25, 0), None);
    }

    #[test]
    fn every_unit_has_a_distinct_supported_code() {
        for unit in units() {
            assert!(lingo_semantics::is_supported(unit.code));
            assert_eq!(unit_for(unit.code).map(|u| u.code), Some(unit.code));
        }
    }
}
