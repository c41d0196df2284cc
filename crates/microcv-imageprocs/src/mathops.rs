//! Small numeric helpers shared by the transforms

/// Clamp a computed sample into the representable 0..=255 range
///
/// Values above 255 saturate to 255, values below zero saturate to 0.
/// Kept as a general contract even for callers whose arithmetic can
/// never go negative.
#[inline]
#[must_use]
pub fn clamp_to_pixel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
