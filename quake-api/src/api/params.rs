//! Typed path parameters.
//!
//! Handlers take these as `Result<T, ParamError>` so a malformed segment is
//! seen by the handler instead of being forwarded, and is always answered
//! the same way regardless of which other routes happen to be mounted.

use std::fmt;

use rocket::request::FromParam;

/// Why a path segment could not be coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    NotAnInteger(String),
    NotANumber(String),
    NotFinite(String),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::NotAnInteger(raw) => write!(f, "'{}' is not an integer", raw),
            ParamError::NotANumber(raw) => write!(f, "'{}' is not a number", raw),
            ParamError::NotFinite(raw) => write!(f, "'{}' is not a finite number", raw),
        }
    }
}

impl std::error::Error for ParamError {}

/// An earthquake identifier taken from the URL.
///
/// Any integer spelling is an identifier. Ones that do not fit the 64-bit
/// key column cannot name a stored record, but are still answered with the
/// not-found message rather than treated as malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EarthquakeId {
    Key(i64),
    OutOfRange(String),
}

impl fmt::Display for EarthquakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EarthquakeId::Key(key) => write!(f, "{}", key),
            EarthquakeId::OutOfRange(digits) => f.write_str(digits),
        }
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl<'a> FromParam<'a> for EarthquakeId {
    type Error = ParamError;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        if !is_integer_literal(param) {
            return Err(ParamError::NotAnInteger(param.to_string()));
        }

        match param.parse::<i64>() {
            Ok(key) => Ok(EarthquakeId::Key(key)),
            Err(_) => Ok(EarthquakeId::OutOfRange(
                param.strip_prefix('+').unwrap_or(param).to_string(),
            )),
        }
    }
}

/// Inclusive lower bound for a magnitude query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMagnitude(f64);

impl MinMagnitude {
    pub fn get(self) -> f64 {
        self.0
    }
}

impl<'a> FromParam<'a> for MinMagnitude {
    type Error = ParamError;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        let value = param
            .parse::<f64>()
            .map_err(|_| ParamError::NotANumber(param.to_string()))?;

        // `f64::from_str` accepts "inf" and "NaN"
        if !value.is_finite() {
            return Err(ParamError::NotFinite(param.to_string()));
        }

        Ok(MinMagnitude(value))
    }
}
