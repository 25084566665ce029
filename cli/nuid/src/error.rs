//! Error handling and display for the CLI.

use colored::Colorize;
use null_uuid::{NullUuidError, ScanError};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid UUID '{input}': {message}")]
    InvalidUuid { input: String, message: String },

    #[error("Invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(decode_err) = err.downcast_ref::<NullUuidError>() {
        let hint = if decode_err.is_json() {
            "Hint: JSON input must be null or a quoted UUID string."
        } else {
            "Hint: text input must be empty, null, or a UUID."
        };
        eprintln!("\n{}", hint.yellow());
    } else if let Some(scan_err) = err.downcast_ref::<ScanError>() {
        if scan_err.is_unsupported_type() {
            eprintln!(
                "\n{}",
                "Hint: only null, text, and byte driver values can hold a UUID.".yellow()
            );
        }
    } else if let Some(CliError::InvalidUuid { .. }) = err.downcast_ref::<CliError>() {
        eprintln!(
            "\n{}",
            "Hint: omit the UUID or pass --null to encode a null value.".yellow()
        );
    }
}
