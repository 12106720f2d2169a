#![warn(missing_docs)]
//! optrans specific error structures
use std::{error::Error, fmt::Display};

/// optrans specific Result type
pub type OptResult<T> = std::result::Result<T, OptransError>;

/// Errors that can be returned by various optrans functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptransError {
    /// a quantity was read while none of the inputs it can be derived from is known
    UnresolvedQuantity(String),
    /// a supplied parameter is structurally wrong or would cause a division by zero
    InvalidParameter(String),
    /// errors while handling spectrum tables
    Spectrum(String),
    /// errors while reading or evaluating a scenario document
    Scenario(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for OptransError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedQuantity(m) => {
                write!(f, "UnresolvedQuantity:{m}")
            }
            Self::InvalidParameter(m) => {
                write!(f, "InvalidParameter:{m}")
            }
            Self::Spectrum(m) => {
                write!(f, "Spectrum:{m}")
            }
            Self::Scenario(m) => {
                write!(f, "Scenario:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "optrans Error:Other:{m}"),
        }
    }
}
impl Error for OptransError {}

impl std::convert::From<String> for OptransError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = OptransError::from("test".to_string());
        assert_eq!(error, OptransError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", OptransError::UnresolvedQuantity("test".to_string())),
            "UnresolvedQuantity:test"
        );
        assert_eq!(
            format!("{}", OptransError::InvalidParameter("test".to_string())),
            "InvalidParameter:test"
        );
        assert_eq!(
            format!("{}", OptransError::Spectrum("test".to_string())),
            "Spectrum:test"
        );
        assert_eq!(
            format!("{}", OptransError::Scenario("test".to_string())),
            "Scenario:test"
        );
        assert_eq!(
            format!("{}", OptransError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(
            format!("{}", OptransError::Other("test".to_string())),
            "optrans Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", OptransError::InvalidParameter("test".to_string())),
            "InvalidParameter(\"test\")"
        );
    }
}
