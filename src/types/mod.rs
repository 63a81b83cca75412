//! Host-side value types.

mod point;
mod value;

pub use point::Point;
pub use value::Value;
