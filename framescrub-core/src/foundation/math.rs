pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// `num / den` clamped to `[0, 1]`; a non-positive denominator yields 0.
pub(crate) fn ratio01(num: f64, den: f64) -> f64 {
    if !(den > 0.0) {
        return 0.0;
    }
    clamp01(num / den)
}

pub(crate) fn opacity_to_u8(opacity: f32) -> u16 {
    ((opacity.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
