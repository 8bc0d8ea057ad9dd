/// Trait for projecting a value of a source range onto a number of discrete levels.
pub trait Scalable {
    /// Projects `self` from `[min, max)` onto `[0, levels)`, with no clamping.
    ///
    /// The product is computed before the division, so that the value at `min` always lands on
    /// exactly zero. A degenerate range (`max == min`) yields an infinite or NaN result.
    ///
    /// # Parameters
    /// * `self`:  the value to project
    /// * `min`:  the low end of the originating range
    /// * `max`:  the high end of the originating range
    /// * `levels`:  the number of levels of the target scale
    fn scale_to_levels(self, min: Self, max: Self, levels: Self) -> Self;
}

macro_rules! impl_scalable {
    ($($variant:ty),*) => {
        $(
            impl Scalable for $variant {
                fn scale_to_levels(self, min: Self, max: Self, levels: Self) -> Self {
                    (self - min) * levels / (max - min)
                }
            }
        )*
    };
}

impl_scalable!(f32, f64);

#[cfg(test)]
mod tests {
    use super::Scalable;

    #[test]
    fn test_scale_f32() {
        assert_eq!(0.5f32.scale_to_levels(0.0, 1.0, 256.0), 128.0);
        assert_eq!(0.0f32.scale_to_levels(0.0, 1.0, 256.0), 0.0);
        assert_eq!(1.0f32.scale_to_levels(0.0, 1.0, 256.0), 256.0);
        assert_eq!(20.0f32.scale_to_levels(-20.0, 60.0, 65536.0), 32768.0);
    }

    #[test]
    fn test_scale_f64() {
        assert_eq!(0.25f64.scale_to_levels(0.0, 1.0, 65536.0), 16384.0);
        assert_eq!((-1.0f64).scale_to_levels(0.0, 1.0, 256.0), -256.0);
    }

    #[test]
    fn test_scale_degenerate_range() {
        assert_eq!(2.0f32.scale_to_levels(1.0, 1.0, 256.0), f32::INFINITY);
        assert!(1.0f32.scale_to_levels(1.0, 1.0, 256.0).is_nan());
    }
}
