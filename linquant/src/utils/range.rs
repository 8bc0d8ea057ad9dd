use std::ops::Sub;

/// A source interval of measurements: `min` is the lowest encodable value, `max` the first value
/// past the last code.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T> Range<T>
where
    T: Copy + PartialOrd + Sub<Output = T>,
{
    /// Returns the width of the range (`max - min`).
    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// Checks whether `value` lies in the half-open interval `[min, max)`.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value < self.max
    }
}

impl Range<f32> {
    /// A range is usable for quantization when both bounds are finite and `max > min`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }
}

impl<T: Copy> From<[T; 2]> for Range<T> {
    fn from(value: [T; 2]) -> Self {
        Self {
            min: value[0],
            max: value[1],
        }
    }
}

// On the wire a range is the pair of its bounds, e.g. `[-40.0, 125.0]` for a temperature sensor.
#[cfg(feature = "serde")]
impl<T> serde::Serialize for Range<T>
where
    T: serde::Serialize + Copy,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.min, self.max), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Range<T>
where
    T: serde::Deserialize<'de> + Copy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Bounds are not validated here: a range only becomes usable through a quantizer.
        let (min, max): (T, T) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_from_array() {
        let range: Range<f32> = [-1.5, 2.5].into();
        assert_eq!(range.min, -1.5);
        assert_eq!(range.max, 2.5);
    }

    #[test]
    fn test_range_span() {
        assert_eq!(Range { min: -1.0, max: 3.0 }.span(), 4.0);
        assert_eq!(Range { min: 10, max: 20 }.span(), 10);
    }

    #[test]
    fn test_range_contains_is_half_open() {
        let range = Range { min: 0.0, max: 1.0 };
        assert!(range.contains(0.0));
        assert!(range.contains(0.999));
        assert!(!range.contains(1.0));
        assert!(!range.contains(-0.001));
        assert!(!range.contains(f32::NAN));
    }

    #[test]
    fn test_range_is_valid() {
        assert!(Range { min: 0.0, max: 1.0 }.is_valid());
        assert!(Range { min: -40.0, max: 125.0 }.is_valid());
        assert!(!Range { min: 1.0, max: 1.0 }.is_valid());
        assert!(!Range { min: 2.0, max: 1.0 }.is_valid());
        assert!(!Range { min: 0.0, max: f32::INFINITY }.is_valid());
        assert!(!Range { min: f32::NAN, max: 1.0 }.is_valid());
    }

    #[test]
    fn test_range_debug() {
        let range = Range { min: 4, max: 10 };
        assert_eq!(format!("{:?}", range), "Range { min: 4, max: 10 }");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_range_serialize() {
            let range = Range { min: -1.5, max: 2.0 };
            let json = serde_json::to_string(&range).unwrap();
            assert_eq!(json, r#"[-1.5,2.0]"#);
        }

        #[test]
        fn test_range_deserialize() {
            let range: Range<f32> = serde_json::from_str("[0.0, 3.3]").unwrap();
            assert_eq!(range.min, 0.0);
            assert_eq!(range.max, 3.3);
        }
    }
}
