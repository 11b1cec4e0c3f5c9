//! Confirmation code extraction.

use super::patterns::CONFIRMATION_CODE;
use super::{ExtractionMatch, FieldExtractor};

/// Confirmation code extractor.
///
/// Takes the first stand-alone four-digit run in the message. The label in
/// front of it is ignored, so any other four-digit number that comes first
/// is picked up instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmationCodeExtractor;

impl ConfirmationCodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for ConfirmationCodeExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        CONFIRMATION_CODE.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                .with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        CONFIRMATION_CODE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the confirmation code from text.
pub fn extract_confirmation_code(text: &str) -> Option<String> {
    ConfirmationCodeExtractor::new().extract(text).map(|m| m.value)
}
