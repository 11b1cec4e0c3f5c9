//! Parse command - extract data from a single confirmation message.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use payconf_core::models::config::OutputConfig;
use payconf_core::{ConfirmationParser, MessageParser, ParsedConfirmation};

use super::{load_config, strip_trailing_newline};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Message file (default: stdin)
    input: Option<PathBuf>,

    /// Message text given on the command line
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let parser = ConfirmationParser::from_config(&config.extraction)?;

    let message = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Parsing message from {}", path.display());
            let raw = tokio::fs::read_to_string(path).await?;
            prepare_message(&raw, &config.output)
        }
        (None, None) => {
            info!("Reading message from stdin");
            let mut raw = String::new();
            tokio::io::stdin().read_to_string(&mut raw).await?;
            prepare_message(&raw, &config.output)
        }
    };

    let parsed = parser.parse(&message)?;
    let output = format_confirmation(&parsed, args.format, &config.output)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Apply input clean-up configured for messages read from files or stdin.
pub fn prepare_message(raw: &str, config: &OutputConfig) -> String {
    if config.strip_trailing_newline {
        strip_trailing_newline(raw).to_string()
    } else {
        raw.to_string()
    }
}

pub fn format_confirmation(
    parsed: &ParsedConfirmation,
    format: OutputFormat,
    config: &OutputConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if config.pretty_json => Ok(serde_json::to_string_pretty(parsed)?),
        OutputFormat::Json => Ok(serde_json::to_string(parsed)?),
        OutputFormat::Text => Ok(format_text(parsed)),
    }
}

fn format_text(parsed: &ParsedConfirmation) -> String {
    let mut output = String::new();

    output.push_str(&format!("Confirmation code: {}\n", parsed.confirmation_code()));
    output.push_str(&format!("Amount: {}\n", parsed.payment_amount()));
    output.push_str(&format!("Account: {}", parsed.payment_account()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedConfirmation {
        payconf_core::parse("Пароль: 4444\nСпишется 1,01р.\nПеревод на счет 410012312312312")
            .unwrap()
    }

    #[test]
    fn test_format_text() {
        let text = format_confirmation(&sample(), OutputFormat::Text, &OutputConfig::default())
            .unwrap();
        assert_eq!(
            text,
            "Confirmation code: 4444\nAmount: 1.01 р\nAccount: 410012312312312"
        );
    }

    #[test]
    fn test_format_compact_json() {
        let config = OutputConfig {
            pretty_json: false,
            ..OutputConfig::default()
        };
        let json = format_confirmation(&sample(), OutputFormat::Json, &config).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains(r#""confirmation_code":"4444""#));
        assert!(json.contains(r#""amount":"1.01""#));
    }

    #[test]
    fn test_prepare_message_respects_config() {
        let keep = OutputConfig {
            strip_trailing_newline: false,
            ..OutputConfig::default()
        };
        assert_eq!(prepare_message("text\n", &OutputConfig::default()), "text");
        assert_eq!(prepare_message("text\n", &keep), "text\n");
    }
}
