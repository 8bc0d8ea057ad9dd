#![doc(html_root_url = "https://docs.rs/linquant/0.1.0")]

//! <h1 align="center">LINQUANT - Linear quantization of bounded measurements</h1>
//! <div style="text-align:center;font-style:italic;">Pack real-valued measurements into compact 8-bit or 16-bit codes.</div>
//!
//! # Features
//!
//! A measurement known to lie in a range `[min, max)` (a temperature, a voltage, a joystick axis,
//! etc.) is mapped linearly onto the codes of an unsigned fixed-width integer:
//!
//! ```text
//! code = truncate((value - min) * 2^N / (max - min))
//! ```
//!
//! - [`convert_float_to_u16`](quantize::convert_float_to_u16) and
//!   [`convert_float_to_u8`](quantize::convert_float_to_u8): unchecked conversions. Values outside
//!   of the range are handled by the native narrowing cast (saturation), and a degenerate range is
//!   the caller's responsibility.
//! - [`Quantizer`](quantize::Quantizer): a validated range with an explicit
//!   [`Overflow`](quantize::Overflow) policy (saturate, wrap or reject).
//! - [`QuantizerConfig`](quantize::QuantizerConfig): a plain data description of a quantizer,
//!   loadable from a configuration file with the `serde` feature.
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! linquant = "0.1.0"
//! ```
//!
//! - Pack a sensor reading:
//! ```rust
//! use linquant::quantize::{convert_float_to_u8, Overflow, Quantizer};
//!
//! // A temperature sensor reporting from -40°C to 125°C.
//! assert_eq!(convert_float_to_u8(-40.0, -40.0, 125.0), 0);
//!
//! let quantizer = Quantizer::<u16>::new(-40.0, 125.0)?.with_overflow(Overflow::Strict);
//! let code = quantizer.quantize(21.5)?;
//! assert_eq!(code, 24427);
//! assert!(quantizer.quantize(130.0).is_err());
//! # Ok::<(), linquant::errors::Error>(())
//! ```
//!
//! # Feature flags
//!
//! - **serde** -- Enables serialize/deserialize capabilities for ranges, overflow policies and
//!   quantizer configurations.

pub mod errors;
pub mod quantize;
pub mod utils;
