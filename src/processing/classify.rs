//! Split raw input lines by address family.

use crate::models::Family;
use colored::Colorize;
use itertools::{Either, Itertools};

/// Input lines grouped by the family their text suggests.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Classified<'a> {
    pub ipv4: Vec<&'a str>,
    pub ipv6: Vec<&'a str>,
    /// Lines containing neither '.' nor ':'.
    pub unclassified: Vec<&'a str>,
}

impl<'a> Classified<'a> {
    pub fn lines(&self, family: Family) -> &[&'a str] {
        match family {
            Family::V4 => &self.ipv4,
            Family::V6 => &self.ipv6,
        }
    }
}

/// Guess the family from delimiter characters. ':' wins because IPv6 text
/// may embed a dotted IPv4 tail (`::ffff:10.0.0.1`).
pub fn family_hint(line: &str) -> Option<Family> {
    if line.contains(Family::V6.delimiter()) {
        Some(Family::V6)
    } else if line.contains(Family::V4.delimiter()) {
        Some(Family::V4)
    } else {
        None
    }
}

/// Trim lines, drop blanks and group the rest by [`family_hint`].
///
/// Logs one anomaly warning if any line matched neither family.
pub fn classify_lines<'a, I>(lines: I) -> Classified<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let (hinted, unclassified): (Vec<_>, Vec<_>) = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .partition_map(|line| match family_hint(line) {
            Some(family) => Either::Left((family, line)),
            None => Either::Right(line),
        });

    let (ipv4, ipv6): (Vec<_>, Vec<_>) =
        hinted
            .into_iter()
            .partition_map(|(family, line)| match family {
                Family::V4 => Either::Left(line),
                Family::V6 => Either::Right(line),
            });

    if !unclassified.is_empty() {
        log::warn!(
            "found {} line(s) containing neither '{}' nor '{}': {}",
            unclassified.len(),
            Family::V4.delimiter(),
            Family::V6.delimiter(),
            unclassified.iter().join(", ").yellow()
        );
    }
    log::debug!(
        "classified ipv4={} ipv6={} unclassified={}",
        ipv4.len(),
        ipv6.len(),
        unclassified.len()
    );

    Classified {
        ipv4,
        ipv6,
        unclassified,
    }
}
