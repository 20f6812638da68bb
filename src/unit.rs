//! The unit tag attached to every dimension value, plus the undefined-float
//! sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sentinel magnitude stored by unset dimension values.
///
/// This is the standard quiet NaN, so code holding a bare `f32` can detect
/// an undefined magnitude with [`is_undefined`] (or any NaN check) without
/// consulting the unit tag. See [`crate::Value::UNDEFINED`].
pub const UNDEFINED: f32 = f32::NAN;

/// Returns true if `value` is the undefined-magnitude sentinel.
///
/// NaN is never equal to itself, so this is the float-only half of the
/// undefinedness check used throughout the engine.
#[inline]
pub fn is_undefined(value: f32) -> bool {
    value.is_nan()
}

/// Returns true if `value` carries a usable magnitude.
#[inline]
pub fn is_defined(value: f32) -> bool {
    !is_undefined(value)
}

/// How a [`crate::Value`]'s magnitude is interpreted.
///
/// The discriminants are fixed: independently built copies of the engine may
/// embed this tag side by side and must agree on the encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Unit {
    /// The property was never specified; the magnitude carries no meaning.
    #[default]
    Undefined = 0,
    /// The layout algorithm derives the dimension from content or flex
    /// rules; the magnitude carries no meaning.
    Auto = 1,
    /// The magnitude is an absolute length in the engine's length unit.
    Point = 2,
    /// The magnitude is a percentage (0-100) of a reference dimension
    /// resolved at layout time.
    Percent = 3,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Undefined => write!(f, "undefined"),
            Unit::Auto => write!(f, "auto"),
            Unit::Point => write!(f, "pt"),
            Unit::Percent => write!(f, "%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_quiet_nan() {
        assert!(UNDEFINED.is_nan());
        assert!(is_undefined(UNDEFINED));
        // NaN is not self-equal, which is what makes the bare-float check work.
        #[allow(clippy::eq_op)]
        {
            assert!(UNDEFINED != UNDEFINED);
        }
    }

    #[test]
    fn test_defined_magnitudes() {
        assert!(is_defined(0.0));
        assert!(is_defined(-4.5));
        assert!(is_defined(f32::INFINITY));
        assert!(!is_defined(UNDEFINED));
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::Undefined.to_string(), "undefined");
        assert_eq!(Unit::Auto.to_string(), "auto");
        assert_eq!(Unit::Point.to_string(), "pt");
        assert_eq!(Unit::Percent.to_string(), "%");
    }
}
