//! Output formatting for CLI commands.

use colored::Colorize;
use null_uuid::NullUuid;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Every observable projection of a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ValueView {
    pub valid: bool,
    pub value_or_zero: String,
    pub json: String,
    pub text: String,
}

impl From<&NullUuid> for ValueView {
    fn from(value: &NullUuid) -> Self {
        Self {
            valid: value.is_valid(),
            value_or_zero: value.value_or_zero().to_string(),
            json: String::from_utf8_lossy(&value.to_json()).into_owned(),
            text: value.to_text(),
        }
    }
}

/// Print a single value in the specified format.
pub fn print_value(view: &ValueView, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{}", Table::new([view]));
        }
        OutputFormat::Json => print_json(view),
    }
}

/// Print any serializable result as pretty JSON.
pub fn print_json<T: Serialize>(data: &T) {
    let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a boolean verdict.
pub fn print_verdict(label: &str, verdict: bool) {
    let value = if verdict {
        "true".green().bold()
    } else {
        "false".red().bold()
    };
    println!("{} {}", format!("{label}:").blue().bold(), value);
}
