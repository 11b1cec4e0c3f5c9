//! Destination account extraction and validation.

use regex::Regex;

use super::patterns::ACCOUNT;
use super::{ExtractionMatch, FieldExtractor};
use crate::error::ConfigError;
use crate::models::config::ExtractionConfig;

/// Shape of an account number: fixed digit prefix and a total length range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRule {
    prefix: String,
    min_length: usize,
    max_length: usize,
}

impl AccountRule {
    pub const DEFAULT_PREFIX: &'static str = "41001";
    pub const DEFAULT_MIN_LENGTH: usize = 13;
    pub const DEFAULT_MAX_LENGTH: usize = 16;

    /// Create a rule, checking that it describes at least one account number.
    pub fn new(
        prefix: impl Into<String>,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self, ConfigError> {
        let prefix = prefix.into();

        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidPrefix(prefix));
        }
        if min_length > max_length || prefix.len() > min_length {
            return Err(ConfigError::InvalidLength {
                min: min_length,
                max: max_length,
                prefix_len: prefix.len(),
            });
        }

        Ok(Self {
            prefix,
            min_length,
            max_length,
        })
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.account_prefix.clone(),
            config.account_min_length,
            config.account_max_length,
        )
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Check whether a stand-alone string is an account number under this rule.
    pub fn matches(&self, candidate: &str) -> bool {
        (self.min_length..=self.max_length).contains(&candidate.len())
            && candidate.starts_with(&self.prefix)
            && candidate.chars().all(|c| c.is_ascii_digit())
    }

    fn is_default(&self) -> bool {
        *self == Self::default()
    }

    fn build_pattern(&self) -> Result<Regex, ConfigError> {
        let tail_min = self.min_length - self.prefix.len();
        let tail_max = self.max_length - self.prefix.len();
        let pattern = format!(
            r"(?-u:\b)({}[0-9]{{{},{}}})(?-u:\b)",
            regex::escape(&self.prefix),
            tail_min,
            tail_max
        );
        Regex::new(&pattern).map_err(|e| ConfigError::Pattern(e.to_string()))
    }
}

impl Default for AccountRule {
    fn default() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_string(),
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }
}

/// Account field extractor.
#[derive(Debug, Clone)]
pub struct AccountExtractor {
    rule: AccountRule,
    pattern: Regex,
}

impl AccountExtractor {
    /// Create an extractor for the default account family.
    pub fn new() -> Self {
        Self {
            rule: AccountRule::default(),
            pattern: ACCOUNT.clone(),
        }
    }

    /// Create an extractor for a custom account rule.
    pub fn with_rule(rule: AccountRule) -> Result<Self, ConfigError> {
        let pattern = if rule.is_default() {
            ACCOUNT.clone()
        } else {
            rule.build_pattern()?
        };
        Ok(Self { rule, pattern })
    }

    pub fn rule(&self) -> &AccountRule {
        &self.rule
    }
}

impl Default for AccountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AccountExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                .with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the destination account from text.
pub fn extract_account(text: &str) -> Option<String> {
    AccountExtractor::new().extract(text).map(|m| m.value)
}
