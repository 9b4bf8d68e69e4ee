//! Common utility functions for the payoff calculations.
//!
//! The cash-flow snapshot and the paycheck budget report whole cents through
//! [`round_half_up`]. The projection carries full precision from month to
//! month and leaves rounding to whoever displays it.

use rust_decimal::Decimal;

/// Number of months in a year, used to turn an APR into a monthly rate.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payoff_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(13938.034)), dec!(13938.03));
/// assert_eq!(round_half_up(dec!(13938.035)), dec!(13938.04));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Arguments
///
/// * `a` - First decimal value
/// * `b` - Second decimal value
///
/// # Returns
///
/// The larger of the two values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payoff_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a value to zero from below.
///
/// Balances and allocations never go negative: a payment larger than the
/// balance pays it off, and a monthly deficit allocates nothing.
///
/// # Arguments
///
/// * `value` - The decimal value to clamp
///
/// # Returns
///
/// `value` when it is positive, otherwise zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use payoff_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(20079.763)), dec!(20079.763));
/// assert_eq!(floor_at_zero(dec!(-437.37)), Decimal::ZERO);
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// Adds up a sequence of decimal values, stopping at the first overflow.
///
/// # Arguments
///
/// * `values` - The values to add
///
/// # Returns
///
/// The sum, zero for an empty sequence, or `None` if a partial sum leaves the
/// range of [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use payoff_core::calculations::common::checked_sum;
///
/// assert_eq!(checked_sum([dec!(230.00), dec!(170.00)]), Some(dec!(400.00)));
/// assert_eq!(checked_sum(Vec::<Decimal>::new()), Some(Decimal::ZERO));
/// assert_eq!(checked_sum([Decimal::MAX, Decimal::ONE]), None);
/// ```
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
}

/// Monthly growth factor for an annual rate, accrued without intra-month
/// compounding: `1 + apr / 12`.
///
/// # Arguments
///
/// * `apr` - Annual percentage rate as a fraction (0.24 for 24%)
///
/// # Returns
///
/// The factor a balance is multiplied by for one month of interest.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payoff_core::calculations::common::monthly_growth_factor;
///
/// assert_eq!(monthly_growth_factor(dec!(0.24)), dec!(1.02));
/// assert_eq!(monthly_growth_factor(dec!(0.09)), dec!(1.0075));
/// ```
pub fn monthly_growth_factor(apr: Decimal) -> Decimal {
    Decimal::ONE + apr / MONTHS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(20079.763));

        assert_eq!(result, dec!(20079.76));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(1902.56));

        assert_eq!(result, dec!(1902.56));
    }

    #[test]
    fn round_half_up_handles_long_fractions() {
        let result = round_half_up(dec!(6606.166666666666666666666667));

        assert_eq!(result, dec!(6606.17));
    }

    // =========================================================================
    // max / floor_at_zero tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(150.00), dec!(150.00)), dec!(150.00));
    }

    #[test]
    fn floor_at_zero_clamps_negative_values() {
        assert_eq!(floor_at_zero(dec!(-437.37)), Decimal::ZERO);
    }

    #[test]
    fn floor_at_zero_keeps_positive_values() {
        assert_eq!(floor_at_zero(dec!(437.37)), dec!(437.37));
    }

    // =========================================================================
    // checked_sum tests
    // =========================================================================

    #[test]
    fn checked_sum_adds_every_value() {
        let result = checked_sum([dec!(1400.16), dec!(226.14), dec!(-26.30)]);

        assert_eq!(result, Some(dec!(1600.00)));
    }

    #[test]
    fn checked_sum_of_nothing_is_zero() {
        assert_eq!(checked_sum(Vec::<Decimal>::new()), Some(Decimal::ZERO));
    }

    #[test]
    fn checked_sum_reports_overflow() {
        assert_eq!(checked_sum([Decimal::MAX, Decimal::MAX]), None);
        assert_eq!(checked_sum([Decimal::MIN, dec!(-1)]), None);
    }

    // =========================================================================
    // monthly_growth_factor tests
    // =========================================================================

    #[test]
    fn monthly_growth_factor_matches_source_factors() {
        assert_eq!(monthly_growth_factor(dec!(0.24)), dec!(1.02));
        assert_eq!(monthly_growth_factor(dec!(0.09)), dec!(1.0075));
        assert_eq!(monthly_growth_factor(dec!(0.06)), dec!(1.005));
    }

    #[test]
    fn monthly_growth_factor_is_one_for_zero_rate() {
        assert_eq!(monthly_growth_factor(Decimal::ZERO), Decimal::ONE);
    }
}
