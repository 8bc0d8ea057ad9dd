pub use crate::quantize::code::Code;
pub use crate::quantize::convert::{convert_float_to_u16, convert_float_to_u8, quantize_unchecked};
pub use crate::quantize::quantizer::{Overflow, Quantizer, QuantizerConfig};

mod code;
mod convert;
mod quantizer;
