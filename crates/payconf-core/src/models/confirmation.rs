//! Payment confirmation data models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Amount to be charged together with its currency label.
///
/// The currency is kept exactly as it appeared in the message ("р",
/// "EUR", "рублей") and is not checked against any currency registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmountValue {
    amount: Decimal,
    currency: String,
}

impl AmountValue {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Numeric amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Currency label, verbatim.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for AmountValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// A fully parsed payment confirmation message.
///
/// Every field is always present; partially parsed messages are reported
/// through [`ExtractionError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedConfirmation {
    /// Code the user has to enter to authorize the payment.
    confirmation_code: String,

    /// Amount that will be charged.
    payment_amount: AmountValue,

    /// Destination account number.
    payment_account: String,
}

impl ParsedConfirmation {
    pub fn new(
        confirmation_code: impl Into<String>,
        payment_amount: AmountValue,
        payment_account: impl Into<String>,
    ) -> Self {
        Self {
            confirmation_code: confirmation_code.into(),
            payment_amount,
            payment_account: payment_account.into(),
        }
    }

    pub fn confirmation_code(&self) -> &str {
        &self.confirmation_code
    }

    pub fn payment_amount(&self) -> &AmountValue {
        &self.payment_amount
    }

    pub fn payment_account(&self) -> &str {
        &self.payment_account
    }
}

impl FromStr for ParsedConfirmation {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::message::parse(s)
    }
}

/// A field of a confirmation message.
///
/// Variants are declared in the order in which failed fields are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Confirmation code (код подтверждения).
    ConfirmationCode,
    /// Amount with currency (сумма).
    Amount,
    /// Destination account (кошелек).
    Account,
}

impl Field {
    /// All fields in canonical order.
    pub const ALL: [Field; 3] = [Field::ConfirmationCode, Field::Amount, Field::Account];

    /// Label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Field::ConfirmationCode => "код подтверждения",
            Field::Amount => "сумма",
            Field::Account => "кошелек",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ParsedConfirmation {
        ParsedConfirmation::new(
            "4444",
            AmountValue::new(Decimal::new(101, 2), "р"),
            "410012312312312",
        )
    }

    #[test]
    fn test_amount_display() {
        let amount = AmountValue::new(Decimal::new(99999, 2), "EUR");
        assert_eq!(amount.to_string(), "999.99 EUR");
    }

    #[test]
    fn test_amount_equality_ignores_scale() {
        let a = AmountValue::new(Decimal::new(2, 0), "р");
        let b = AmountValue::new(Decimal::new(200, 2), "р");
        assert_eq!(a, b);
    }

    #[test]
    fn test_confirmation_serializes_amount_as_string() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["confirmation_code"], "4444");
        assert_eq!(json["payment_amount"]["amount"], "1.01");
        assert_eq!(json["payment_amount"]["currency"], "р");
        assert_eq!(json["payment_account"], "410012312312312");

        let back: ParsedConfirmation = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_from_str_uses_default_parser() {
        let parsed: ParsedConfirmation = "Пароль: 4444\nСпишется 1,01р.\nПеревод на счет 410012312312312"
            .parse()
            .unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_field_order_and_labels() {
        let labels: Vec<_> = Field::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(labels, vec!["код подтверждения", "сумма", "кошелек"]);
        assert!(Field::ConfirmationCode < Field::Amount && Field::Amount < Field::Account);
    }
}
