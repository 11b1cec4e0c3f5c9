//! WASM bindings for payment confirmation message parsing.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use wasm_bindgen::prelude::*;

use payconf_core::message::rules::{self, AccountRule};
use payconf_core::{ConfirmationParser, MessageParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse a confirmation message.
///
/// Returns `{ confirmation_code, payment_amount: { amount, currency },
/// payment_account }` with the amount as a decimal string. Throws the
/// diagnostic message naming every missing field.
#[wasm_bindgen]
pub fn parse_message(text: &str) -> Result<JsValue, JsValue> {
    let parsed = payconf_core::parse(text).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&parsed).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract the confirmation code, if any.
#[wasm_bindgen]
pub fn extract_confirmation_code(text: &str) -> Option<String> {
    rules::extract_confirmation_code(text)
}

/// Extract the destination account, if any.
#[wasm_bindgen]
pub fn extract_account(text: &str) -> Option<String> {
    rules::extract_account(text)
}

/// Extract the amount as `{ amount, currency }`, or `undefined`.
#[wasm_bindgen]
pub fn extract_amount(text: &str) -> Result<JsValue, JsValue> {
    match rules::extract_amount(text) {
        Some(amount) => {
            serde_wasm_bindgen::to_value(&amount).map_err(|e| JsValue::from_str(&e.to_string()))
        }
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Check whether a string is an account number of the default family.
#[wasm_bindgen]
pub fn validate_account(account: &str) -> bool {
    AccountRule::default().matches(account)
}

/// Confirmation parser with a custom account rule, for browser use.
#[wasm_bindgen]
pub struct ConfirmationExtractor {
    parser: ConfirmationParser,
}

#[wasm_bindgen]
impl ConfirmationExtractor {
    /// Create an extractor with the default rules.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: ConfirmationParser::new(),
        }
    }

    /// Configure the account prefix and total length range.
    #[wasm_bindgen]
    pub fn set_account_rule(
        &mut self,
        prefix: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<(), JsValue> {
        let rule = AccountRule::new(prefix, min_length, max_length)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.parser = ConfirmationParser::new()
            .with_account_rule(rule)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Parse a confirmation message.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        let parsed = self
            .parser
            .parse(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&parsed).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for ConfirmationExtractor {
    fn default() -> Self {
        Self::new()
    }
}
