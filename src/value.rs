//! The dimension value record and its pure operations.

use crate::unit::{Unit, UNDEFINED};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// A length-like style input: an absolute length, a percentage of a
/// reference dimension, an auto instruction, or the unset sentinel.
///
/// Plain copyable data with a published layout: `f32` magnitude first, unit
/// tag second. Equality is unit-aware (see [`PartialEq`](#impl-PartialEq-for-Value));
/// every transform produces a new value.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[repr(C)]
pub struct Value {
    /// The magnitude. Meaningless for `Undefined` and `Auto` units.
    pub value: f32,
    /// How the magnitude is interpreted.
    pub unit: Unit,
}

impl Value {
    /// The canonical auto value: derive the dimension from content or flex
    /// rules.
    pub const AUTO: Value = Value::new(0.0, Unit::Auto);

    /// The canonical unset value. The stored magnitude is the NaN sentinel,
    /// so a bare-float check catches it too (see [`crate::is_undefined`]).
    pub const UNDEFINED: Value = Value::new(UNDEFINED, Unit::Undefined);

    /// A zero-length point value.
    pub const ZERO: Value = Value::new(0.0, Unit::Point);

    #[inline]
    pub const fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// An absolute length of `value` points. Accepts integral and floating
    /// inputs alike: `Value::point(3)` equals `Value::point(3.0)`.
    #[inline]
    pub fn point(value: impl Into<f64>) -> Self {
        Self::new(value.into() as f32, Unit::Point)
    }

    /// A percentage (0-100 scale) of a reference dimension resolved at
    /// layout time. Accepts integral and floating inputs alike.
    #[inline]
    pub fn percent(value: impl Into<f64>) -> Self {
        Self::new(value.into() as f32, Unit::Percent)
    }

    #[inline]
    pub fn is_undefined(self) -> bool {
        self.unit == Unit::Undefined
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    #[inline]
    pub fn is_auto(self) -> bool {
        self.unit == Unit::Auto
    }

    #[inline]
    pub fn is_point(self) -> bool {
        self.unit == Unit::Point
    }

    #[inline]
    pub fn is_percent(self) -> bool {
        self.unit == Unit::Percent
    }
}

/// An unset style property.
impl Default for Value {
    fn default() -> Self {
        Value::UNDEFINED
    }
}

/// Unit-aware equality.
///
/// Values with different units are unequal. `Undefined` and `Auto` values
/// compare equal regardless of magnitude, so `Value::UNDEFINED` is
/// self-equal even though it stores NaN. `Point` and `Percent` values use
/// raw IEEE `f32` equality, so two NaN-magnitude point values compare
/// unequal. That asymmetry is intentional and relied upon by the engine.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if self.unit != other.unit {
            return false;
        }
        match self.unit {
            Unit::Undefined | Unit::Auto => true,
            Unit::Point | Unit::Percent => self.value == other.value,
        }
    }
}

impl Neg for Value {
    type Output = Value;

    /// Flips the sign of the magnitude and keeps the unit. Well-defined for
    /// every unit: negating NaN yields NaN, negating zero yields a signed
    /// zero.
    fn neg(self) -> Value {
        Value::new(-self.value, self.unit)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Undefined | Unit::Auto => write!(f, "{}", self.unit),
            Unit::Point | Unit::Percent => write!(f, "{}{}", self.value, self.unit),
        }
    }
}
