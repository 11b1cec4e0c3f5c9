//! Amount extraction for confirmation messages.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT_WITH_CURRENCY;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::confirmation::AmountValue;

/// Amount field extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }

    fn from_captures(caps: &regex::Captures<'_>) -> Option<ExtractionMatch<AmountValue>> {
        let amount = parse_amount(&caps[1])?;
        let currency = &caps[2];

        let full_match = caps.get(0)?;
        Some(
            ExtractionMatch::new(AmountValue::new(amount, currency), full_match.as_str())
                .with_position(full_match.start(), full_match.end()),
        )
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<AmountValue>;

    // Only the first numeral+letters token is considered.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        AMOUNT_WITH_CURRENCY
            .captures(text)
            .and_then(|caps| Self::from_captures(&caps))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AMOUNT_WITH_CURRENCY
            .captures_iter(text)
            .filter_map(|caps| Self::from_captures(&caps))
            .collect()
    }
}

/// Extract the payment amount from text.
pub fn extract_amount(text: &str) -> Option<AmountValue> {
    AmountExtractor::new().extract(text).map(|m| m.value)
}

/// Replace a decimal comma with a decimal point.
pub fn normalize_decimal_separator(s: &str) -> String {
    s.replace(',', ".")
}

/// Parse an amount written with either decimal separator ("1,01" or "1.01").
///
/// Numbers too large for a `Decimal` saturate at `Decimal::MAX`; numbers
/// with more fractional digits than a `Decimal` holds are rounded.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal_separator(s.trim());
    if let Ok(amount) = Decimal::from_str(&normalized) {
        return Some(amount);
    }

    // Past this point only plain digit runs are accepted, never "inf" or "NaN"
    if !normalized.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    let value: f64 = normalized.parse().ok()?;
    Some(Decimal::from_f64_retain(value).unwrap_or(Decimal::MAX))
}
