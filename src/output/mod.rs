//! Output formatting for subnet calculations.
//!
//! This module handles rendering a [`crate::processing::Calculation`]:
//! - [`terminal`] - Human readable report with optional colours
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output

mod csv;
mod json;
mod terminal;

pub use csv::format_csv;
pub use json::format_json;
pub use terminal::{format_field, format_report, print_report};
