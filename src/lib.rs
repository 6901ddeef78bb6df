// cargo watch -x 'fmt' -x 'test'

//! Compress lists of IPv4/IPv6 CIDR blocks into the smallest equivalent set.
//!
//! Lines are split by family, validated, then merged to a fixpoint:
//! ```
//! use cidr_compress::compress_lines;
//! let report = compress_lines(["192.168.0.0/25", "192.168.0.128/25"], 10);
//! assert_eq!(report.ipv4.networks[0].to_string(), "192.168.0.0/24");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, ConfigError};
pub use models::{CompressReport, Family, FamilyReport, Network};
pub use processing::{aggregate, compress_family, compress_lines};
