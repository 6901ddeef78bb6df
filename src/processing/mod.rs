//! CIDR processing logic.
//!
//! - [`classify`] - split lines by address family
//! - [`validate`] - parse lines into networks, skipping bad ones
//! - [`aggregate`] - merge networks to a fixpoint

mod aggregate;
mod classify;
mod validate;

pub use aggregate::{aggregate, aggregate_with_limit, merge_pass, Aggregation, DEFAULT_MAX_PASSES};
pub use classify::{classify_lines, family_hint, Classified};
pub use validate::{validate_line, validate_lines};

use crate::models::{CompressReport, Family, FamilyReport};

/// Validate and aggregate the lines already routed to `family`.
pub fn compress_family(family: Family, lines: &[&str], max_passes: usize) -> FamilyReport {
    let networks = validate_lines(Some(family), lines);
    let valid_count = networks.len();
    let aggregation = aggregate_with_limit(networks, max_passes);

    let report = FamilyReport {
        family,
        input_lines: lines.len(),
        valid_count,
        passes: aggregation.passes,
        converged: aggregation.converged,
        networks: aggregation.networks,
    };
    log::info!("{family}: {}", report.summary());
    report
}

/// Run the whole pipeline over raw input lines.
///
/// Never fails: bad lines are logged and dropped, and both families are
/// always reported.
pub fn compress_lines<'a, I>(lines: I, max_passes: usize) -> CompressReport
where
    I: IntoIterator<Item = &'a str>,
{
    let classified = classify_lines(lines);

    // report each unclassified line with its own parse error
    validate_lines(None, &classified.unclassified);

    let [ipv4, ipv6] =
        Family::ALL.map(|family| compress_family(family, classified.lines(family), max_passes));

    CompressReport {
        ipv4,
        ipv6,
        unclassified: classified.unclassified.len(),
    }
}
