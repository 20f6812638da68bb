//! Conversion from style strings ("10pt", "50%", "auto") to values.
//!
//! Style sheets and host bindings hand dimensions over as strings; a bare
//! number means points. Only the four recognized units exist, so the
//! grammar stays ASCII and suffix-based.

use crate::value::Value;
use std::num::ParseFloatError;
use std::str::FromStr;
use thiserror::Error;

/// Failure to interpret a string as a dimension value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseValueError {
    #[error("empty dimension value")]
    Empty,

    #[error("invalid magnitude: {0}")]
    InvalidMagnitude(#[from] ParseFloatError),

    #[error("unknown unit suffix: {0:?}")]
    UnknownUnit(String),
}

impl FromStr for Value {
    type Err = ParseValueError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseValueError::Empty);
        }
        match input {
            "auto" => return Ok(Value::AUTO),
            "undefined" => return Ok(Value::UNDEFINED),
            _ => {}
        }
        if let Some(number) = input.strip_suffix('%') {
            return Ok(Value::percent(number.parse::<f32>()?));
        }
        let number = input.trim_end_matches(|ch: char| ch.is_ascii_alphabetic());
        let suffix = &input[number.len()..];
        match suffix {
            "" | "pt" => Ok(Value::point(number.parse::<f32>()?)),
            _ => Err(ParseValueError::UnknownUnit(suffix.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!("auto".parse::<Value>().unwrap(), Value::AUTO);
        assert_eq!("undefined".parse::<Value>().unwrap(), Value::UNDEFINED);
        assert_eq!("  auto ".parse::<Value>().unwrap(), Value::AUTO);
    }

    #[test]
    fn test_parse_points() {
        assert_eq!("10".parse::<Value>().unwrap(), Value::point(10.0));
        assert_eq!("10pt".parse::<Value>().unwrap(), Value::point(10.0));
        assert_eq!("-4.5pt".parse::<Value>().unwrap(), Value::point(-4.5));
        assert_eq!("0.25".parse::<Value>().unwrap(), Value::point(0.25));
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!("50%".parse::<Value>().unwrap(), Value::percent(50.0));
        assert_eq!("12.5%".parse::<Value>().unwrap(), Value::percent(12.5));
        assert_eq!("-3%".parse::<Value>().unwrap(), Value::percent(-3.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Value>(), Err(ParseValueError::Empty));
        assert_eq!("   ".parse::<Value>(), Err(ParseValueError::Empty));
        assert_eq!(
            "10em".parse::<Value>(),
            Err(ParseValueError::UnknownUnit("em".to_string()))
        );
        assert!(matches!(
            "%".parse::<Value>(),
            Err(ParseValueError::InvalidMagnitude(_))
        ));
        assert!(matches!(
            "pt".parse::<Value>(),
            Err(ParseValueError::InvalidMagnitude(_))
        ));
    }

    #[test]
    fn test_parse_display_agree() {
        for text in ["10pt", "50%", "auto", "undefined"] {
            let value: Value = text.parse().unwrap();
            assert_eq!(value.to_string(), text);
        }
    }
}
