//! Floored arithmetic shared by the clock and the playback-mode fold.
//!
//! Everything here uses floor-based modulo, never truncation, so that reverse
//! playback (negative rates) and positions before the window start wrap into
//! the window instead of mirroring around zero.

/// Floored modulo: the result has the sign of `b` (or is zero).
///
/// `b == 0.0` yields `0.0`.
#[inline]
pub fn floor_mod(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        // A tiny negative remainder can round up to exactly `b`.
        let r = m + b;
        if r == b {
            0.0
        } else {
            r
        }
    } else {
        m
    }
}

/// Integer floored modulo. `b == 0` yields `0`.
#[inline]
pub fn floor_mod_i(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    let m = a.wrapping_rem(b);
    if (m < 0 && b > 0) || (m > 0 && b < 0) {
        m + b
    } else {
        m
    }
}

/// Triangle-wave fold of `x` (an offset from the window start) into `[0, span]`.
///
/// The period is `2 * span`; the second half of each period is reflected.
/// A zero span collapses every input to `0.0`.
#[inline]
pub fn ping_pong(x: f64, span: f64) -> f64 {
    if span <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * span;
    let m = floor_mod(x, period);
    if m <= span {
        m
    } else {
        period - m
    }
}

/// `floor(x)` as an integer, saturating for values outside `i64`.
#[inline]
pub fn floor_i(x: f64) -> i64 {
    if x.is_nan() {
        return 0;
    }
    x.floor() as i64
}
