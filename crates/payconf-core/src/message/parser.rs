//! Rule-based confirmation message parser.

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::models::config::ExtractionConfig;
use crate::models::confirmation::{Field, ParsedConfirmation};

use super::rules::{
    AccountExtractor, AccountRule, AmountExtractor, ConfirmationCodeExtractor, ExtractionMatch,
    FieldExtractor,
};
use super::validation::ensure_complete;
use super::{MessageParser, Result};

/// Parser combining the code, amount and account extractors.
///
/// Holds only immutable extraction rules, so one instance can be shared
/// between threads and reused for any number of messages.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationParser {
    code: ConfirmationCodeExtractor,
    amount: AmountExtractor,
    account: AccountExtractor,
}

impl ConfirmationParser {
    /// Create a parser with the default extraction rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser whose account rule comes from configuration.
    pub fn from_config(config: &ExtractionConfig) -> std::result::Result<Self, ConfigError> {
        let rule = AccountRule::from_config(config)?;
        Self::new().with_account_rule(rule)
    }

    /// Replace the account rule.
    pub fn with_account_rule(
        mut self,
        rule: AccountRule,
    ) -> std::result::Result<Self, ConfigError> {
        self.account = AccountExtractor::with_rule(rule)?;
        Ok(self)
    }

    pub fn account_rule(&self) -> &AccountRule {
        self.account.rule()
    }
}

impl MessageParser for ConfirmationParser {
    fn parse(&self, text: &str) -> Result<ParsedConfirmation> {
        let codes = self.code.extract_all(text);
        let accounts = self.account.extract_all(text);
        let amounts = self.amount.extract_all(text);

        log_candidates(Field::ConfirmationCode, &codes);
        log_candidates(Field::Amount, &amounts);
        log_candidates(Field::Account, &accounts);

        let (code, amount, account) = ensure_complete(
            text,
            first_value(codes),
            first_value(amounts),
            first_value(accounts),
        )
        .inspect_err(|e| {
            let labels: Vec<_> = e.missing().iter().map(|f| f.label()).collect();
            warn!("Message is incomplete, missing: {}", labels.join(","));
        })?;

        Ok(ParsedConfirmation::new(code, amount, account))
    }
}

fn first_value<T>(matches: Vec<ExtractionMatch<T>>) -> Option<T> {
    matches.into_iter().next().map(|m| m.value)
}

fn log_candidates<T>(field: Field, matches: &[ExtractionMatch<T>]) {
    let Some(first) = matches.first() else {
        debug!("No {} found", field);
        return;
    };

    debug!(
        span = ?first.position,
        source = %first.source,
        "Found {}",
        field
    );
    if matches.len() > 1 {
        debug!("{} candidates for {}, using the first", matches.len(), field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::models::confirmation::AmountValue;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    const CODE_LINE: &str = "Пароль: 4444";
    const AMOUNT_LINE: &str = "Спишется 1,01р.";
    const ACCOUNT_LINE: &str = "Перевод на счет 410012312312312";

    fn expected() -> ParsedConfirmation {
        ParsedConfirmation::new(
            "4444",
            AmountValue::new(Decimal::new(101, 2), "р"),
            "410012312312312",
        )
    }

    fn failure(missing: Vec<Field>, message: &str) -> ExtractionError {
        ExtractionError::Incomplete {
            missing,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_message() {
        let parser = ConfirmationParser::new();
        let text = "Пароль: 4444\nСпишется 1,01р.\nПеревод на счет 410012312312312";

        let parsed = parser.parse(text).unwrap();

        assert_eq!(parsed.confirmation_code(), "4444");
        assert_eq!(parsed.payment_amount().amount(), Decimal::new(101, 2));
        assert_eq!(parsed.payment_amount().currency(), "р");
        assert_eq!(parsed.payment_account(), "410012312312312");
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let parser = ConfirmationParser::new();
        let orders = [
            [CODE_LINE, AMOUNT_LINE, ACCOUNT_LINE],
            [AMOUNT_LINE, ACCOUNT_LINE, CODE_LINE],
            [AMOUNT_LINE, CODE_LINE, ACCOUNT_LINE],
            [CODE_LINE, ACCOUNT_LINE, AMOUNT_LINE],
            [ACCOUNT_LINE, CODE_LINE, AMOUNT_LINE],
            [ACCOUNT_LINE, AMOUNT_LINE, CODE_LINE],
        ];

        for lines in orders {
            let text = lines.join("\n");
            assert_eq!(parser.parse(&text), Ok(expected()), "message: {text:?}");
        }
    }

    #[test]
    fn test_parse_empty_message() {
        let parser = ConfirmationParser::new();
        assert_eq!(
            parser.parse(""),
            Err(failure(
                vec![Field::ConfirmationCode, Field::Amount, Field::Account],
                ""
            ))
        );
    }

    #[test]
    fn test_parse_service_messages() {
        let parser = ConfirmationParser::new();
        for text in [
            "Кошелек Яндекс.Денег указан неверно",
            "Сумма указана неверно",
            "Недостаточно средств",
        ] {
            let err = parser.parse(text).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!(
                    "Не удалось произвести разбор данных:код подтверждения,сумма,кошелек. \
                     Содержимое сообщения: \"{text}\"."
                )
            );
        }
    }

    #[test]
    fn test_missing_confirmation_code() {
        let parser = ConfirmationParser::new();
        for text in [
            "Пароль: \nСпишется 1,01р.\nПеревод на счет 410012312312312",
            "Спишется 1,01р.\nПеревод на счет 410012312312312",
            "Пароль: 44440\nСпишется 1,01р.\nПеревод на счет 410012312312312",
        ] {
            assert_eq!(
                parser.parse(text),
                Err(failure(vec![Field::ConfirmationCode], text))
            );
        }
    }

    #[test]
    fn test_missing_amount() {
        let parser = ConfirmationParser::new();
        for text in [
            "Пароль: 4444\nПеревод на счет 410012312312312",
            "Пароль: 4444\nСпишется\nПеревод на счет 410012312312312",
        ] {
            assert_eq!(parser.parse(text), Err(failure(vec![Field::Amount], text)));
        }
    }

    #[test]
    fn test_missing_account() {
        let parser = ConfirmationParser::new();
        for text in [
            "Пароль: 4444\nСпишется 1,01р.",
            "Пароль: 4444\nСпишется 1,01р.\nПеревод на счет",
            "Пароль: 4444\nСпишется 1,01р.\nПеревод на счет: 0000",
            "Пароль: 4444\nСпишется 1,01р.\nПеревод на счет 400002312312312",
        ] {
            assert_eq!(parser.parse(text), Err(failure(vec![Field::Account], text)));
        }
    }

    #[test]
    fn test_labels_are_not_required() {
        let parser = ConfirmationParser::new();
        for text in [
            "Password: 4444\nPayment 1,01р.\nTransfer to the account 410012312312312",
            "Пароль 4444\nСпишется: 1,01р\nПеревод на счет: 410012312312312",
        ] {
            assert_eq!(parser.parse(text), Ok(expected()), "message: {text:?}");
        }
    }

    #[test]
    fn test_labels_glued_to_values() {
        let parser = ConfirmationParser::new();
        let text = "Пароль4444\nСпишется 1,01р.\nПеревод на счет410012312312312";

        assert_eq!(parser.parse(text), Ok(expected()));
    }

    #[test]
    fn test_oversized_amount_is_not_reported_missing() {
        let parser = ConfirmationParser::new();
        let text = "Пароль: 4444\nСпишется 12345678901234567890123456789012р.\n\
                    Перевод на счет 410012312312312";

        let parsed = parser.parse(text).unwrap();
        assert_eq!(parsed.payment_amount().amount(), Decimal::MAX);
        assert_eq!(parsed.payment_amount().currency(), "р");
        assert_eq!(parsed.confirmation_code(), "4444");
    }

    #[test]
    fn test_first_candidate_wins() {
        let parser = ConfirmationParser::new();
        let text = "Пароль: 4444\nСпишется 1,01р.\nПеревод на счет 410012312312312\n\
                    Повтор: 5555, 2р., 410019999999999";

        assert_eq!(parser.parse(text), Ok(expected()));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = ConfirmationParser::new();
        let text = "Спишется 999,99р.\nПароль: 0042\nПеревод на счет 4100123123123";

        let first = parser.parse(text);
        assert_eq!(first, parser.parse(text));
        assert_eq!(first, ConfirmationParser::new().parse(text));
    }

    #[test]
    fn test_from_config() {
        let config = ExtractionConfig {
            account_prefix: "41002".to_string(),
            account_min_length: 13,
            account_max_length: 13,
        };
        let parser = ConfirmationParser::from_config(&config).unwrap();

        let parsed = parser
            .parse("Пароль: 4444\nСпишется 2р.\nПеревод на счет 4100212345678")
            .unwrap();
        assert_eq!(parsed.payment_account(), "4100212345678");
        assert_eq!(parsed.payment_amount().amount(), Decimal::new(2, 0));

        assert!(parser.parse(&[CODE_LINE, AMOUNT_LINE, ACCOUNT_LINE].join("\n")).is_err());
    }

    #[test]
    fn test_from_config_rejects_bad_prefix() {
        let config = ExtractionConfig {
            account_prefix: "X".to_string(),
            ..ExtractionConfig::default()
        };
        assert_eq!(
            ConfirmationParser::from_config(&config).unwrap_err(),
            ConfigError::InvalidPrefix("X".to_string())
        );
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfirmationParser>();
    }
}
