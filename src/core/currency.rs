//! Display formatting of amounts, and the integer rounding used by
//! payment and report views.
//!
//! Formatting is presentation only. Nothing here feeds back into totals.

use num_format::{Locale, ToFormattedString as _};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an optional amount for display.
///
/// `None` renders as an empty string (not "0"). Amounts use Indian digit
/// grouping (`12,34,567.89`) with two decimals; an exact `.00` is dropped.
///
/// ```
/// use hisaab::core::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(None), "");
/// assert_eq!(format_currency(Some(dec!(1500))), "1,500");
/// assert_eq!(format_currency(Some(dec!(1500.5))), "1,500.50");
/// assert_eq!(format_currency(Some(dec!(1234567.891))), "12,34,567.89");
/// ```
pub fn format_currency(value: Option<Decimal>) -> String {
    value.map(format_amount).unwrap_or_default()
}

/// Format an amount for display. See [`format_currency`].
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let abs = rounded.abs();
    let rupees = abs.trunc();
    let paise = ((abs - rupees) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or(0);
    let grouped = rupees
        .to_u128()
        .unwrap_or(0)
        .to_formatted_string(&Locale::en_IN);

    let formatted = format!("{sign}{grouped}.{paise:02}");
    match formatted.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// Round to an integer, halves going up.
///
/// `frac = value − floor(value)`; the result is `ceil(value)` when
/// `frac ≥ 0.5`, otherwise `floor(value)`. Integers are returned unchanged.
///
/// ```
/// use hisaab::core::custom_round;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(custom_round(dec!(10.49)), dec!(10));
/// assert_eq!(custom_round(dec!(10.5)), dec!(11));
/// assert_eq!(custom_round(dec!(10.99)), dec!(11));
/// ```
pub fn custom_round(value: Decimal) -> Decimal {
    let floor = value.floor();
    if value - floor >= Decimal::new(5, 1) {
        value.ceil()
    } else {
        floor
    }
}

/// [`custom_round`] followed by [`format_currency`], as payment views show amounts.
pub fn format_rounded(value: Option<Decimal>) -> String {
    format_currency(value.map(custom_round))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn none_is_empty() {
        assert_eq!(format_currency(None), "");
        assert_eq!(format_rounded(None), "");
    }

    #[test]
    fn whole_amounts_drop_decimals() {
        assert_eq!(format_amount(dec!(0)), "0");
        assert_eq!(format_amount(dec!(1500)), "1,500");
        assert_eq!(format_amount(dec!(1500.00)), "1,500");
        assert_eq!(format_amount(dec!(999.999)), "1,000");
    }

    #[test]
    fn fractions_keep_two_digits() {
        assert_eq!(format_amount(dec!(1500.5)), "1,500.50");
        assert_eq!(format_amount(dec!(0.05)), "0.05");
        assert_eq!(format_amount(dec!(12.345)), "12.35");
        assert_eq!(format_amount(dec!(12.344)), "12.34");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_amount(dec!(999)), "999");
        assert_eq!(format_amount(dec!(100000)), "1,00,000");
        assert_eq!(format_amount(dec!(12345678.9)), "1,23,45,678.90");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_amount(dec!(-1234.567)), "-1,234.57");
        assert_eq!(format_amount(dec!(-700)), "-700");
        assert_eq!(format_amount(dec!(-0.001)), "0");
    }

    #[test]
    fn custom_round_cases() {
        assert_eq!(custom_round(dec!(10.49)), dec!(10));
        assert_eq!(custom_round(dec!(10.5)), dec!(11));
        assert_eq!(custom_round(dec!(10.99)), dec!(11));
        assert_eq!(custom_round(dec!(10)), dec!(10));
        assert_eq!(custom_round(dec!(0)), dec!(0));
        // Halves go towards positive infinity.
        assert_eq!(custom_round(dec!(-10.5)), dec!(-10));
        assert_eq!(custom_round(dec!(-10.51)), dec!(-11));
    }

    #[test]
    fn rounded_format() {
        assert_eq!(format_rounded(Some(dec!(1499.5))), "1,500");
        assert_eq!(format_rounded(Some(dec!(1499.49))), "1,499");
    }
}
