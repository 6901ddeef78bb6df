//! Output formatting for compression results.
//!
//! - [`terminal`] - plain CIDR lines and summaries
//! - [`json`] - machine-readable report

mod json;
mod terminal;

pub use json::{to_json, write_json};
pub use terminal::{write_networks, write_text};

use crate::config::OutputFormat;
use crate::models::CompressReport;
use std::io::Write;

/// Write `report` to `out` in the chosen format.
pub fn emit<W: Write>(
    report: &CompressReport,
    format: OutputFormat,
    out: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => write_text(report, out),
        OutputFormat::Json => write_json(report, out),
    }
}
