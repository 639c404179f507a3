/// Ease-out interpolation from `start` to `end`.
///
/// `alpha` is clamped to \[0, 1\]; the curve is `1 - (1 - alpha)^exponent`,
/// so it moves quickly at first and decelerates toward `end`. With
/// `exponent >= 1` the output is monotonic over the clamped range.
#[inline]
pub fn ease_out(start: f32, end: f32, alpha: f32, exponent: f32) -> f32 {
    let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    let shaped = 1.0 - (1.0 - a).powf(exponent);
    start + (end - start) * shaped
}

/// Cubic ease-out, the default propagation curve.
#[inline]
pub fn ease_out_cubic(start: f32, end: f32, alpha: f32) -> f32 {
    ease_out(start, end, alpha, 3.0)
}
