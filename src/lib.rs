//! Immutable dimension values for the layout engine.
//!
//! Every length-like style input (width, height, margin, padding, position
//! offsets, flex-basis) is stored as a [`Value`]: an `f32` magnitude tagged
//! with a [`Unit`] saying how the layout algorithm should resolve it.
//! A value is an absolute length in points, a percentage of a reference
//! dimension, an instruction to derive the dimension automatically, or the
//! explicit "never specified" sentinel.
//!
//! Values are plain copyable data. The canonical [`Value::UNDEFINED`] stores
//! the quiet-NaN sentinel [`UNDEFINED`] as its magnitude so that bare floats
//! carry undefinedness on their own; see [`is_undefined`].

pub mod parse;
pub mod unit;
pub mod value;

pub use parse::ParseValueError;
pub use unit::{is_defined, is_undefined, Unit, UNDEFINED};
pub use value::Value;
