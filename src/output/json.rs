//! JSON report output.

use crate::models::{CompressReport, Family, FamilyReport, Network};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct FamilyJson<'a> {
    family: Family,
    input_lines: usize,
    valid_count: usize,
    rejected_count: usize,
    final_count: usize,
    passes: usize,
    converged: bool,
    networks: &'a [Network],
}

#[derive(Serialize)]
struct ReportJson<'a> {
    ipv4: FamilyJson<'a>,
    ipv6: FamilyJson<'a>,
    unclassified: usize,
}

fn family_json(report: &FamilyReport) -> FamilyJson<'_> {
    FamilyJson {
        family: report.family,
        input_lines: report.input_lines,
        valid_count: report.valid_count,
        rejected_count: report.rejected_count(),
        final_count: report.final_count(),
        passes: report.passes,
        converged: report.converged,
        networks: &report.networks,
    }
}

/// Render the report with derived counts included.
pub fn to_json(report: &CompressReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportJson {
        ipv4: family_json(&report.ipv4),
        ipv6: family_json(&report.ipv6),
        unclassified: report.unclassified,
    })
}

pub fn write_json<W: Write>(report: &CompressReport, out: &mut W) -> std::io::Result<()> {
    let json = to_json(report)?;
    writeln!(out, "{json}")?;
    out.flush()
}
