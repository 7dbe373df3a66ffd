use crate::Error;

/// Scale used for fixed-precision comparisons, i.e. 1e-9 absolute.
pub(crate) const FCMP_PRECISION: f64 = 1_000_000_000.;

/// Fixed-precision near-equality: both values are scaled by 1e9, truncated
/// toward zero and allowed to differ by one unit. Non-finite values, and
/// values too large to scale into an `i64`, never compare equal.
///
/// ```
/// use svy21::utility::fequals;
///
/// assert!(fequals(1.366666, 1.3666660000001));
/// assert!(!fequals(1.366666, 1.366666003));
/// assert!(fequals(38744.572, 38744.572));
///
/// assert!(!fequals(f64::NAN, 0.));
/// assert!(!fequals(f64::INFINITY, f64::INFINITY));
/// assert!(!fequals(1e10, 2e10));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn fequals(a: f64, b: f64) -> bool {
    let scale = |value: f64| {
        let scaled = (value * FCMP_PRECISION).trunc();
        // i64::MAX is not exactly representable, so stay strictly below 2^63
        (scaled.is_finite() && scaled.abs() < i64::MAX as f64).then_some(scaled as i64)
    };

    match (scale(a), scale(b)) {
        (Some(num1), Some(num2)) => matches!(num1.checked_sub(num2), Some(-1..=1)),
        _ => false,
    }
}

/// Splits `"a b"` or `"a,b"` into two floats.
pub(crate) fn split_pair(value: &str) -> Result<(f64, f64), Error> {
    let pieces = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>();

    if pieces.len() != 2 {
        return Err(Error::InvalidCoord(format!(
            "Expected two values, found {} in '{value}'",
            pieces.len()
        )));
    }

    let parse = |piece: &str| {
        piece
            .parse::<f64>()
            .map_err(|e| Error::InvalidCoord(format!("'{piece}' is not a number: {e}")))
    };

    Ok((parse(pieces[0])?, parse(pieces[1])?))
}
