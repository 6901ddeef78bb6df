//! Per-family and whole-run compression results.

use super::{Family, Network};
use serde::Serialize;

/// Outcome of compressing the lines classified into one family.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FamilyReport {
    pub family: Family,
    /// Lines routed to this family by the classifier.
    pub input_lines: usize,
    /// Lines that validated into networks.
    pub valid_count: usize,
    /// Merge passes run by the aggregator.
    pub passes: usize,
    /// False when the pass cap was hit before a fixpoint.
    pub converged: bool,
    pub networks: Vec<Network>,
}

impl FamilyReport {
    pub fn rejected_count(&self) -> usize {
        self.input_lines - self.valid_count
    }

    pub fn final_count(&self) -> usize {
        self.networks.len()
    }

    /// "compressed N IPs down to M", counting valid input networks.
    pub fn summary(&self) -> String {
        format!(
            "compressed {} IPs down to {}",
            self.valid_count,
            self.final_count()
        )
    }
}

/// Results for both families plus the lines no family claimed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CompressReport {
    pub ipv4: FamilyReport,
    pub ipv6: FamilyReport,
    /// Lines containing neither family delimiter.
    pub unclassified: usize,
}

impl CompressReport {
    /// Family reports in output order (IPv4 first).
    pub fn families(&self) -> [&FamilyReport; 2] {
        [&self.ipv4, &self.ipv6]
    }
}
