//! Error handling for design validation and file loading

use std::io;

/// Unified error to report failures during design validation, actuator
/// assembly and YAML parsing.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    NotFinite(String),
    NonPositive(String),
    WrongAngle(String),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::NotFinite(ref field) =>
                write!(f, "Not a finite number: {}", field),
            ParameterError::NonPositive(ref field) =>
                write!(f, "Must be positive: {}", field),
            ParameterError::WrongAngle(ref msg) =>
                write!(f, "Wrong angle: {}", msg),
        }
    }
}

impl std::error::Error for ParameterError {}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}
