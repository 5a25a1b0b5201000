//! Scalar helpers shared by the layout and motion code.

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`. NaN maps to `0`.
pub(crate) fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

#[inline]
/// Linearly interpolate between `a` and `b` with clamped parameter `t`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = clamp01(t);
    a + (b - a) * t
}

/// Normalized position of `x` inside `[start, end]`, clamped to `[0, 1]`.
///
/// A degenerate interval behaves as a step at `start`.
pub(crate) fn unlerp_clamped(start: f64, end: f64, x: f64) -> f64 {
    let span = end - start;
    if span <= f64::EPSILON {
        return if x < start { 0.0 } else { 1.0 };
    }
    clamp01((x - start) / span)
}

/// Replace non-finite values and values below `min` with `min`.
///
/// Returns the sanitized value and whether a replacement happened.
pub(crate) fn at_least(value: f64, min: f64) -> (f64, bool) {
    if value.is_finite() && value >= min {
        (value, false)
    } else {
        (min, true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
