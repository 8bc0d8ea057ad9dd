use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

use log::{debug, trace};

use crate::errors::ConversionError::{NonFiniteValue, OutOfRange};
use crate::errors::Error;
use crate::errors::RangeError::{DegenerateRange, NonFiniteBound, SpanTooWide};
use crate::quantize::Code;
use crate::utils::{Range, Scalable};

/// What to do with a value whose scaled position does not fit in the code width.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Native narrowing: clamp to `[0, MAX]`, NaN becomes 0.
    #[default]
    Saturate,
    /// Keep the low bits of the truncated value (modulo 2^BITS).
    Wrap,
    /// Reject non-finite values and values outside of `[min, max)`.
    Strict,
}

/// Quantizes measurements of a validated range into codes of type `C`.
///
/// ```
/// use linquant::quantize::{Overflow, Quantizer};
///
/// let quantizer = Quantizer::<u8>::new(0.0, 1.0)?.with_overflow(Overflow::Wrap);
/// assert_eq!(quantizer.quantize(0.5)?, 128);
/// assert_eq!(quantizer.quantize(1.0)?, 0);
/// # Ok::<(), linquant::errors::Error>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quantizer<C: Code> {
    /// The source range of measurements.
    range: Range<f32>,
    /// The policy applied when a value does not fit.
    overflow: Overflow,
    _code: PhantomData<C>,
}

impl<C: Code> Quantizer<C> {
    /// Creates a [`Quantizer`] over `[min, max)` using the [`Overflow::Saturate`] policy.
    ///
    /// # Errors
    /// * `NonFiniteBound`: one of the bounds is infinite or NaN.
    /// * `DegenerateRange`: `max` is not strictly greater than `min`.
    /// * `SpanTooWide`: `(max - min) * LEVELS` does not fit in an `f32`.
    pub fn new(min: f32, max: f32) -> Result<Self, Error> {
        let range = Range { min, max };
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(NonFiniteBound { min, max }.into());
        }
        if !range.is_valid() {
            return Err(DegenerateRange { min, max }.into());
        }
        // Bounds every intermediate of `quantize` for values in `[min, max)`.
        if !(range.span() * C::LEVELS).is_finite() {
            let levels = C::LEVELS;
            return Err(SpanTooWide { min, max, levels }.into());
        }

        trace!("Quantizer<{}> created over [{}, {})", C::NAME, min, max);
        Ok(Self {
            range,
            overflow: Overflow::default(),
            _code: PhantomData,
        })
    }

    /// Sets the overflow policy.
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Quantizes `value` into a code, truncating toward zero.
    ///
    /// # Errors
    /// Only with [`Overflow::Strict`]:
    /// * `NonFiniteValue`: the value is infinite or NaN.
    /// * `OutOfRange`: the value lies outside of `[min, max)`.
    pub fn quantize(&self, value: f32) -> Result<C, Error> {
        let Range { min, max } = self.range;
        let scaled = value.scale_to_levels(min, max, C::LEVELS);

        if self.overflow == Overflow::Strict {
            if !value.is_finite() {
                return Err(NonFiniteValue { value }.into());
            }
            if !self.range.contains(value) {
                return Err(OutOfRange { value, min, max }.into());
            }
            // Rounding may push a value just below `max` onto LEVELS.
            return Ok(C::checked_from(scaled).unwrap_or_else(|| C::saturating_from(scaled)));
        }

        if !self.range.contains(value) {
            debug!(
                "Value {} outside of [{}, {}): {:?} applied",
                value, min, max, self.overflow
            );
        }

        Ok(match self.overflow {
            Overflow::Wrap => C::wrapping_from(scaled),
            _ => C::saturating_from(scaled),
        })
    }

    // ########################################
    // Setters and Getters.

    /// Returns the source range.
    pub fn range(&self) -> Range<f32> {
        self.range
    }

    /// Returns the overflow policy.
    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Returns the width of the source interval covered by a single code.
    pub fn step(&self) -> f32 {
        self.range.span() / C::LEVELS
    }
}

impl<C: Code> Display for Quantizer<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quantizer<{}> [min={}, max={}, overflow={:?}]",
            C::NAME,
            self.range.min,
            self.range.max,
            self.overflow,
        )
    }
}

/// Plain data description of a [`Quantizer`], as found in a configuration file.
///
/// ```json
/// { "range": [-40.0, 125.0], "overflow": "strict" }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuantizerConfig {
    pub range: Range<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overflow: Overflow,
}

impl QuantizerConfig {
    /// Builds the described [`Quantizer`] for code type `C`.
    ///
    /// # Errors
    /// Same as [`Quantizer::new`].
    pub fn build<C: Code>(&self) -> Result<Quantizer<C>, Error> {
        Ok(Quantizer::new(self.range.min, self.range.max)?.with_overflow(self.overflow))
    }
}

impl<C: Code> From<Quantizer<C>> for QuantizerConfig {
    fn from(quantizer: Quantizer<C>) -> Self {
        Self {
            range: quantizer.range,
            overflow: quantizer.overflow,
        }
    }
}
