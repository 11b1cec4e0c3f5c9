//! Data models.

pub mod config;
pub mod confirmation;

pub use config::{ExtractionConfig, OutputConfig, PayconfConfig};
pub use confirmation::{AmountValue, Field, ParsedConfirmation};
