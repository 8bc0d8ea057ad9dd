use crate::quantize::Code;
use crate::utils::Scalable;

/// Quantizes `value` from `[min, max)` into a code of type `C`.
///
/// Computes `(value - min) * C::LEVELS / (max - min)` and narrows it with the native `as` cast:
/// the result is truncated toward zero, and anything outside of the code width saturates
/// (NaN becomes 0). Nothing is checked: a value outside of `[min, max)` or a degenerate range
/// (`max == min`) is the caller's responsibility.
/// Use a [`Quantizer`](crate::quantize::Quantizer) for an explicit overflow policy.
pub fn quantize_unchecked<C: Code>(value: f32, min: f32, max: f32) -> C {
    C::saturating_from(value.scale_to_levels(min, max, C::LEVELS))
}

/// Converts a float within `[min, max)` to a 16-bit code in `[0, 65536)`.
///
/// See [`quantize_unchecked`] for the (absence of) bounds handling.
///
/// ```
/// use linquant::quantize::convert_float_to_u16;
///
/// assert_eq!(convert_float_to_u16(0.0, 0.0, 1.0), 0);
/// assert_eq!(convert_float_to_u16(0.5, 0.0, 1.0), 32768);
/// ```
pub fn convert_float_to_u16(value: f32, min: f32, max: f32) -> u16 {
    quantize_unchecked(value, min, max)
}

/// Converts a float within `[min, max)` to an 8-bit code in `[0, 256)`.
///
/// See [`quantize_unchecked`] for the (absence of) bounds handling.
///
/// ```
/// use linquant::quantize::convert_float_to_u8;
///
/// assert_eq!(convert_float_to_u8(0.5, 0.0, 1.0), 128);
/// // 256.0 does not fit: the native narrowing saturates.
/// assert_eq!(convert_float_to_u8(1.0, 0.0, 1.0), 255);
/// ```
pub fn convert_float_to_u8(value: f32, min: f32, max: f32) -> u8 {
    quantize_unchecked(value, min, max)
}
