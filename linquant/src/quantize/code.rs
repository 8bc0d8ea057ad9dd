use std::fmt::{Debug, Display};

/// An unsigned fixed-width integer a measurement can be packed into.
///
/// Every narrowing provided here truncates toward zero: the fractional part of the scaled value
/// is dropped, never rounded.
pub trait Code: Copy + Debug + Display + PartialOrd + Send + Sync + 'static {
    /// Number of bits of the code.
    const BITS: u32;
    /// Number of distinct codes (2^BITS), as the float the scaled value is compared against.
    const LEVELS: f32;
    /// Type name used when displaying a quantizer.
    const NAME: &'static str;

    /// Native `as` narrowing: saturates at both ends, NaN maps to 0.
    fn saturating_from(scaled: f32) -> Self;

    /// Truncates to an integer, then keeps the low [`Self::BITS`] bits (modulo 2^BITS).
    /// NaN maps to 0; infinities saturate to `i64` bounds first.
    fn wrapping_from(scaled: f32) -> Self;

    /// Truncates `scaled` when it lies in `[0, LEVELS)`, returns `None` otherwise (NaN included).
    fn checked_from(scaled: f32) -> Option<Self>;
}

macro_rules! impl_code {
    ($($variant:ty),*) => {
        $(
            impl Code for $variant {
                const BITS: u32 = <$variant>::BITS;
                const LEVELS: f32 = (1u32 << <$variant>::BITS) as f32;
                const NAME: &'static str = stringify!($variant);

                fn saturating_from(scaled: f32) -> Self {
                    scaled as Self
                }

                fn wrapping_from(scaled: f32) -> Self {
                    scaled as i64 as Self
                }

                fn checked_from(scaled: f32) -> Option<Self> {
                    match scaled >= 0.0 && scaled < Self::LEVELS {
                        true => Some(scaled as Self),
                        false => None,
                    }
                }
            }
        )*
    };
}

impl_code!(u8, u16);
