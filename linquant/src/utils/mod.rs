pub use crate::utils::range::Range;
pub use crate::utils::scale::Scalable;

mod range;
mod scale;
