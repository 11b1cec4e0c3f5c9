//! Error types for the payconf-core library.

use thiserror::Error;

use crate::models::confirmation::Field;

/// Main error type for the payconf library.
#[derive(Error, Debug)]
pub enum PayconfError {
    /// Message field extraction error.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors produced while turning a message into a confirmation record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// One or more fields could not be found in the message.
    ///
    /// `missing` is always non-empty and in canonical field order.
    #[error(
        "Не удалось произвести разбор данных:{}. Содержимое сообщения: \"{message}\".",
        join_labels(.missing)
    )]
    Incomplete {
        missing: Vec<Field>,
        message: String,
    },
}

impl ExtractionError {
    /// Fields that failed to parse.
    pub fn missing(&self) -> &[Field] {
        match self {
            Self::Incomplete { missing, .. } => missing,
        }
    }

    /// The original message text, verbatim.
    pub fn message(&self) -> &str {
        match self {
            Self::Incomplete { message, .. } => message,
        }
    }
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(",")
}

/// Errors related to parser configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account prefix must be a non-empty run of ASCII digits.
    #[error("invalid account prefix: {0:?}")]
    InvalidPrefix(String),

    /// Account length range is empty or cannot fit the prefix.
    #[error("invalid account length range {min}..={max} for prefix of length {prefix_len}")]
    InvalidLength {
        min: usize,
        max: usize,
        prefix_len: usize,
    },

    /// The account pattern could not be compiled.
    #[error("failed to build account pattern: {0}")]
    Pattern(String),
}

/// Result type for the payconf library.
pub type Result<T> = std::result::Result<T, PayconfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_message_format() {
        let err = ExtractionError::Incomplete {
            missing: vec![Field::ConfirmationCode, Field::Account],
            message: "Недостаточно средств".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Не удалось произвести разбор данных:код подтверждения,кошелек. \
             Содержимое сообщения: \"Недостаточно средств\"."
        );
    }

    #[test]
    fn test_crate_error_is_transparent_for_extraction() {
        let err = ExtractionError::Incomplete {
            missing: vec![Field::Amount],
            message: String::new(),
        };
        let wrapped: PayconfError = err.clone().into();

        assert_eq!(wrapped.to_string(), err.to_string());
    }
}
