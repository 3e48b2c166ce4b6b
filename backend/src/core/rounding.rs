//! Rounding helpers
//!
//! Every figure the engine produces is a whole number of pesos or a whole
//! percent. All divisions go through this module so the rounding policy is
//! applied identically everywhere: round to nearest, ties toward positive
//! infinity (round-half-up). For non-negative inputs this is the same as
//! "ties away from zero".

/// Divide and round half up, returning 0 when the denominator is 0.
///
/// Intermediate arithmetic is done in i128 so that callers can pass
/// products such as `amount * 100` without overflowing.
///
/// # Example
/// ```
/// use freight_settlement_core_rs::core::rounding::div_round_half_up;
///
/// assert_eq!(div_round_half_up(25_000, 3), 8_333);
/// assert_eq!(div_round_half_up(5, 2), 3);
/// assert_eq!(div_round_half_up(-5, 2), -2);
/// assert_eq!(div_round_half_up(10, 0), 0);
/// ```
pub fn div_round_half_up(numerator: i128, denominator: i128) -> i64 {
    if denominator == 0 {
        return 0;
    }

    // Normalize so the denominator is positive; the sign lives in the numerator.
    let (num, den) = if denominator < 0 {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };

    // floor((2n + d) / 2d) == floor(n/d + 1/2)
    let rounded = (2 * num + den).div_euclid(2 * den);
    rounded as i64
}

/// Round a float half up to the nearest integer.
///
/// Non-finite input maps to 0. Out-of-range values saturate at the i64 bounds.
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    // `value - floor` is exact in f64, unlike `value + 0.5`
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// `round(part / whole * 100)`, 0 when `whole` is 0.
pub fn percent_of(part: i64, whole: i64) -> i64 {
    div_round_half_up(part as i128 * 100, whole as i128)
}
