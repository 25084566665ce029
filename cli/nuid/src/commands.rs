//! CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use null_uuid::{DriverValue, NullUuid, Scan, Uuid};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::{print_json, print_value, print_verdict, OutputFormat, ValueView};

/// nuid - decode, encode, and scan nullable UUIDs.
#[derive(Debug, Parser)]
#[command(name = "nuid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "NUID_FORMAT", default_value = "table")]
    format: String,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, global = true, env = "NUID_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "NUID_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode a JSON or text payload.
    Decode(DecodeCommand),

    /// Encode a UUID (or null) as JSON or text.
    Encode(EncodeCommand),

    /// Scan a simulated database driver value.
    Scan(ScanCommand),

    /// Compare two text payloads with nullable equality.
    Eq(EqCommand),
}

/// Wire form to decode from or encode to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Codec {
    Json,
    Text,
}

#[derive(Debug, Args)]
struct DecodeCommand {
    /// Wire form of the payload.
    #[arg(long = "as", value_enum, default_value = "json")]
    codec: Codec,

    /// Payload to decode. May be empty.
    #[arg(allow_hyphen_values = true)]
    input: String,
}

#[derive(Debug, Args)]
struct EncodeCommand {
    /// Wire form to produce.
    #[arg(long = "as", value_enum, default_value = "json")]
    codec: Codec,

    /// Encode a null value.
    #[arg(long, conflicts_with = "uuid")]
    null: bool,

    /// UUID to encode. Omitted means null.
    uuid: Option<String>,
}

#[derive(Debug, Args)]
#[group(multiple = false)]
struct ScanCommand {
    /// Simulate a SQL NULL.
    #[arg(long)]
    null: bool,

    /// Simulate a binary column, given as hex.
    #[arg(long)]
    hex: Option<String>,

    /// Simulate an integer column.
    #[arg(long, allow_negative_numbers = true)]
    int: Option<i64>,

    /// Simulate a text column.
    text: Option<String>,
}

#[derive(Debug, Args)]
struct EqCommand {
    /// Left payload (text form).
    left: String,

    /// Right payload (text form).
    right: String,
}

#[derive(Debug, Serialize)]
struct EqView {
    left: ValueView,
    right: ValueView,
    equal: bool,
}

impl Cli {
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = OutputFormat::parse(&self.format);

        match self.command {
            Commands::Decode(cmd) => cmd.run(format),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Scan(cmd) => cmd.run(format),
            Commands::Eq(cmd) => cmd.run(format),
        }
    }
}

impl DecodeCommand {
    fn run(self, format: OutputFormat) -> Result<()> {
        let value = decode(self.codec, self.input.as_bytes())?;
        info!(codec = ?self.codec, valid = value.is_valid(), "Decoded payload");
        print_value(&ValueView::from(&value), format);
        Ok(())
    }
}

impl EncodeCommand {
    fn run(self) -> Result<()> {
        let uuid = match (&self.uuid, self.null) {
            (Some(raw), false) => Some(parse_uuid(raw)?),
            _ => None,
        };
        let encoded = encode(self.codec, &NullUuid::from_option(uuid.as_ref()));
        debug!(codec = ?self.codec, len = encoded.len(), "Encoded value");
        println!("{encoded}");
        Ok(())
    }
}

impl ScanCommand {
    fn run(self, format: OutputFormat) -> Result<()> {
        let src = self.driver_value()?;
        debug!(driver_type = src.type_name(), "Scanning driver value");
        let value = NullUuid::scan(&src).context("scan failed")?;
        info!(valid = value.is_valid(), "Scanned driver value");
        print_value(&ValueView::from(&value), format);
        Ok(())
    }

    fn driver_value(&self) -> Result<DriverValue, CliError> {
        if self.null {
            return Ok(DriverValue::Null);
        }
        if let Some(raw) = &self.hex {
            return Ok(DriverValue::Bytes(hex::decode(raw)?));
        }
        if let Some(int) = self.int {
            return Ok(DriverValue::Int(int));
        }
        Ok(match &self.text {
            Some(text) => DriverValue::Text(text.clone()),
            None => DriverValue::Null,
        })
    }
}

impl EqCommand {
    fn run(self, format: OutputFormat) -> Result<()> {
        let left = decode(Codec::Text, self.left.as_bytes()).context("left operand")?;
        let right = decode(Codec::Text, self.right.as_bytes()).context("right operand")?;
        let equal = left == right;

        match format {
            OutputFormat::Json => print_json(&EqView {
                left: ValueView::from(&left),
                right: ValueView::from(&right),
                equal,
            }),
            OutputFormat::Table => print_verdict("equal", equal),
        }

        Ok(())
    }
}

fn decode(codec: Codec, input: &[u8]) -> Result<NullUuid> {
    let value = match codec {
        Codec::Json => NullUuid::from_json(input)?,
        Codec::Text => NullUuid::from_text(input)?,
    };
    Ok(value)
}

fn encode(codec: Codec, value: &NullUuid) -> String {
    match codec {
        Codec::Json => String::from_utf8_lossy(&value.to_json()).into_owned(),
        Codec::Text => value.to_text(),
    }
}

/// Strict parse for encode input: no null spellings, the nil UUID stays
/// a real value.
fn parse_uuid(raw: &str) -> Result<Uuid, CliError> {
    Uuid::try_parse(raw).map_err(|err| CliError::InvalidUuid {
        input: raw.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const UUID_TEXT: &str = "14070757-48e6-4b4b-9cd8-98fbf065cf31";
    const ZERO_TEXT: &str = "00000000-0000-0000-0000-000000000000";

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case::json_value(Codec::Json, "\"14070757-48e6-4b4b-9cd8-98fbf065cf31\"", true)]
    #[case::json_null(Codec::Json, "null", false)]
    #[case::json_empty(Codec::Json, "", false)]
    #[case::text_value(Codec::Text, UUID_TEXT, true)]
    #[case::text_zero(Codec::Text, ZERO_TEXT, false)]
    fn test_decode(#[case] codec: Codec, #[case] input: &str, #[case] valid: bool) {
        let value = decode(codec, input.as_bytes()).unwrap();
        assert_eq!(value.is_valid(), valid);
    }

    #[test]
    fn test_decode_error_keeps_type() {
        let err = decode(Codec::Json, b"true").unwrap_err();
        assert!(err.downcast_ref::<null_uuid::NullUuidError>().is_some());
    }

    #[test]
    fn test_encode_zero_is_not_null() {
        let zero = NullUuid::from_uuid(parse_uuid(ZERO_TEXT).unwrap());
        assert_eq!(encode(Codec::Json, &zero), format!("\"{ZERO_TEXT}\""));
        assert_eq!(encode(Codec::Text, &NullUuid::NULL), "");
        assert_eq!(encode(Codec::Json, &NullUuid::NULL), "null");
    }

    #[test]
    fn test_parse_uuid_rejects_null_spelling() {
        assert!(matches!(parse_uuid("null"), Err(CliError::InvalidUuid { .. })));
    }

    #[test]
    fn test_scan_driver_value() {
        let cli = Cli::try_parse_from(["nuid", "scan", "--hex", "00ff"]).unwrap();
        let Commands::Scan(cmd) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(cmd.driver_value().unwrap(), DriverValue::Bytes(vec![0x00, 0xff]));

        let cli = Cli::try_parse_from(["nuid", "scan"]).unwrap();
        let Commands::Scan(cmd) = cli.command else {
            panic!("expected scan command");
        };
        assert!(cmd.driver_value().unwrap().is_null());
    }

    #[test]
    fn test_scan_rejects_multiple_sources() {
        assert!(Cli::try_parse_from(["nuid", "scan", "--null", UUID_TEXT]).is_err());
    }
}
