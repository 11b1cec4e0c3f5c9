//! Confirmation message parsing.

mod parser;
pub mod rules;
pub mod validation;

pub use parser::ConfirmationParser;
pub use validation::{ensure_complete, missing_fields};

use crate::error::ExtractionError;
use crate::models::confirmation::ParsedConfirmation;

/// Result type for message parsing.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for confirmation message parsers.
pub trait MessageParser {
    /// Parse a confirmation record out of message text.
    ///
    /// Fails with [`ExtractionError::Incomplete`] naming every field that
    /// could not be found.
    fn parse(&self, text: &str) -> Result<ParsedConfirmation>;
}

/// Parse a message with the default rules.
pub fn parse(text: &str) -> Result<ParsedConfirmation> {
    ConfirmationParser::new().parse(text)
}
