#![forbid(unsafe_code)]

//! Setup-time errors.
//!
//! Event handling never fails; only loading configuration or a catalog from
//! an external description can.

use std::fmt;

/// Error loading a combobox configuration or catalog.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed into the expected shape.
    #[cfg(feature = "serde")]
    Parse {
        /// Underlying parser error.
        source: serde_json::Error,
    },
    /// A required field is missing or empty.
    MissingField(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "serde")]
            Self::Parse { source } => write!(f, "invalid combobox description: {source}"),
            Self::MissingField(field) => write!(f, "combobox `{field}` is required"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Self::Parse { source } => Some(source),
            Self::MissingField(_) => None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_field_message() {
        let err = ConfigError::MissingField("id");
        assert_eq!(err.to_string(), "combobox `id` is required");
        assert!(err.source().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = ConfigError::from(source);
        assert!(err.to_string().starts_with("invalid combobox description"));
        assert!(err.source().is_some());
    }
}
