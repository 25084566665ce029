//! nuid - probe nullable UUID encodings from the command line.
//!
//! Decodes JSON and text payloads, encodes identifiers, and simulates
//! database scans so the null rules of each path can be checked by hand.

use anyhow::Result;
use clap::Parser;

mod commands;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_level(), cli.log_json());

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
