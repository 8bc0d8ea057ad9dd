use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Range error: {source}.
    RangeError { source: RangeError },
    /// Conversion error: {source}.
    ConversionError { source: ConversionError },
}

impl From<RangeError> for Error {
    fn from(value: RangeError) -> Self {
        Self::RangeError { source: value }
    }
}

impl From<ConversionError> for Error {
    fn from(value: ConversionError) -> Self {
        Self::ConversionError { source: value }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RangeError {
    /// Degenerate range [{min}, {max}] - max must be greater than min
    DegenerateRange { min: f32, max: f32 },
    /// Range bounds must be finite - got [{min}, {max}]
    NonFiniteBound { min: f32, max: f32 },
    /// Range [{min}, {max}] is too wide to be scaled onto {levels} levels
    SpanTooWide { min: f32, max: f32, levels: f32 },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConversionError {
    /// Value {value} is not a finite number
    NonFiniteValue { value: f32 },
    /// Value {value} is outside of range [{min}, {max})
    OutOfRange { value: f32, min: f32, max: f32 },
}
