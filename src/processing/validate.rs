//! Turn raw lines into networks, dropping the ones that do not parse.

use crate::error::CidrError;
use crate::models::{Family, Network};
use colored::Colorize;

/// Parse one line, requiring `family` when given.
pub fn validate_line(family: Option<Family>, line: &str) -> Result<Network, CidrError> {
    match family {
        Some(family) => Network::parse_family(family, line),
        None => line.parse(),
    }
}

/// Parse every line, logging and skipping the invalid ones.
pub fn validate_lines(family: Option<Family>, lines: &[&str]) -> Vec<Network> {
    lines
        .iter()
        .filter_map(|line| match validate_line(family, line) {
            Ok(network) => Some(network),
            Err(e) => {
                log::warn!("Skipping invalid line: {} ({e})", line.red());
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_lines_drops_invalid() {
        let lines = ["10.0.0.0/8", "not-an-ip", "10.0.0.0/33", "192.168.0.0/24"];
        let networks = validate_lines(Some(Family::V4), &lines);
        assert_eq!(networks.len(), 2);
        assert_eq!(networks[0].to_string(), "10.0.0.0/8");
        assert_eq!(networks[1].to_string(), "192.168.0.0/24");
    }

    #[test]
    fn test_validate_line_family_mismatch() {
        assert!(validate_line(Some(Family::V6), "10.0.0.0/8").is_err());
        assert!(validate_line(None, "10.0.0.0/8").is_ok());
        assert!(validate_line(None, "2001:db8::/32").is_ok());
    }

    #[test]
    fn test_unclassified_never_validates() {
        assert!(validate_lines(None, &["not-an-ip", "12345", "localhost"]).is_empty());
    }
}
