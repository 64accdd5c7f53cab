//! IPv4 subnet calculator.
//!
//! Given a host address and a subnet mask this crate derives the prefix length,
//! host capacity, network and broadcast addresses, usable host range, and a
//! bounded listing of neighbouring subnets of the same size.
//!
//! - [`models`] - Dotted-quad parsing, the `u32` codec and mask validation
//! - [`processing`] - Network/broadcast/range derivation and subnet listing
//! - [`output`] - Text, CSV and JSON renderers

pub mod config;
pub mod errors;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use config::{Config, OutputFormat};
use processing::Calculation;
use std::error::Error;

pub use errors::{ConfigError, Field, FormatError, SubnetError};
pub use processing::calculate;

/// Render a calculation in the configured output format.
pub fn render(calc: &Calculation, config: &Config) -> Result<String, Box<dyn Error>> {
    log::debug!("render() as {:?}", config.output);
    match config.output {
        OutputFormat::Text => Ok(output::format_report(calc, config.color)),
        OutputFormat::Csv => Ok(output::format_csv(calc)),
        OutputFormat::Json => output::format_json(calc),
    }
}
