//! Error handling for the geometry file reader

use std::io;

/// Unified error to report failures while reading robot geometry.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    NotFinite { field: String, value: f64 },
    NotPositive { field: String, value: f64 },
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::NotFinite { ref field, value } =>
                write!(f, "Value of '{}' must be finite (got {})", field, value),
            ParameterError::NotPositive { ref field, value } =>
                write!(f, "Value of '{}' must be positive (got {})", field, value),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}
