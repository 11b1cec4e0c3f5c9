//! Completeness check over independently extracted fields.

use crate::error::ExtractionError;
use crate::models::confirmation::{AmountValue, Field};

/// Fields whose extraction failed, in canonical order.
pub fn missing_fields(
    confirmation_code: Option<&str>,
    payment_amount: Option<&AmountValue>,
    payment_account: Option<&str>,
) -> Vec<Field> {
    let found = [
        confirmation_code.is_some(),
        payment_amount.is_some(),
        payment_account.is_some(),
    ];

    Field::ALL
        .into_iter()
        .zip(found)
        .filter_map(|(field, found)| (!found).then_some(field))
        .collect()
}

/// Ensure every field was extracted; otherwise report all missing ones at once.
///
/// On success the three values are handed back unwrapped, ready to build a
/// record from.
pub fn ensure_complete(
    message: &str,
    confirmation_code: Option<String>,
    payment_amount: Option<AmountValue>,
    payment_account: Option<String>,
) -> Result<(String, AmountValue, String), ExtractionError> {
    match (confirmation_code, payment_amount, payment_account) {
        (Some(code), Some(amount), Some(account)) => Ok((code, amount, account)),
        (code, amount, account) => Err(ExtractionError::Incomplete {
            missing: missing_fields(code.as_deref(), amount.as_ref(), account.as_deref()),
            message: message.to_string(),
        }),
    }
}
