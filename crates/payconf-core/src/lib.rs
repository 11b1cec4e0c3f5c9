//! Core library for payment confirmation message parsing.
//!
//! This crate provides:
//! - Rule-based extraction of the confirmation code, amount and account
//!   from free-form notification text
//! - Completeness validation reporting every missing field at once
//! - Confirmation data models and configuration

pub mod error;
pub mod message;
pub mod models;

pub use error::{ConfigError, ExtractionError, PayconfError, Result};
pub use message::{parse, ConfirmationParser, MessageParser};
pub use models::config::PayconfConfig;
pub use models::confirmation::{AmountValue, Field, ParsedConfirmation};
