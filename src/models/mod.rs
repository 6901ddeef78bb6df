//! Domain models for CIDR compression.
//!
//! - [`Family`] - IPv4 or IPv6 with its bit width
//! - [`Network`] - canonical CIDR block
//! - [`FamilyReport`] and [`CompressReport`] - results handed to the output layer

mod family;
mod network;
mod report;

pub use family::Family;
pub use network::{get_cidr_mask, Network};
pub use report::{CompressReport, FamilyReport};
