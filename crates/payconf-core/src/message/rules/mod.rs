//! Rule-based field extractors for payment confirmation messages.

pub mod account;
pub mod amounts;
pub mod code;
pub mod patterns;

pub use account::{extract_account, AccountExtractor, AccountRule};
pub use amounts::{extract_amount, normalize_decimal_separator, parse_amount, AmountExtractor};
pub use code::{extract_confirmation_code, ConfirmationCodeExtractor};

/// Trait for field extractors.
///
/// Extraction never fails: a field is either found or it is not.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences of the field, in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An extracted value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
