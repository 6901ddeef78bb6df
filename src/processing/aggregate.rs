//! Merge networks into the smallest covering set.
//!
//! [`merge_pass`] is one linear walk over sorted networks. Coalescing two
//! siblings can expose a new sibling or containment with a neighbour that
//! the same walk already passed, so [`aggregate_with_limit`] repeats
//! sort-and-merge until the output stops changing or the pass cap is spent.

use crate::models::Network;

/// Re-passes allowed after the first pass before giving up on a fixpoint.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Result of a fixpoint run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub networks: Vec<Network>,
    /// Merge passes executed, including the one that confirmed the fixpoint.
    pub passes: usize,
    /// False when the cap was reached while the output was still changing.
    pub converged: bool,
}

/// One left-to-right merge over networks sorted by [`Network`]'s `Ord`.
///
/// For each next block, first matching rule wins:
/// 1. next equals or lies inside current: drop next
/// 2. current lies inside next: current becomes next
/// 3. current and next are the two halves of one parent: current becomes the parent
/// 4. otherwise emit current and continue from next
pub fn merge_pass(sorted: &[Network]) -> Vec<Network> {
    let mut merged = Vec::with_capacity(sorted.len());
    let mut iter = sorted.iter().copied();
    let Some(mut current) = iter.next() else {
        return merged;
    };

    for next in iter {
        if current.contains(&next) {
            continue;
        }
        if next.contains(&current) {
            current = next;
            continue;
        }
        if current.is_lower_sibling_of(&next) {
            if let Some(parent) = current.supernet() {
                log::trace!("coalesce {current} + {next} -> {parent}");
                current = parent;
                continue;
            }
        }
        merged.push(current);
        current = next;
    }
    merged.push(current);
    merged
}

fn sort_and_merge(mut networks: Vec<Network>) -> Vec<Network> {
    networks.sort_unstable();
    merge_pass(&networks)
}

/// Aggregate with the default pass cap, returning only the networks.
pub fn aggregate(networks: Vec<Network>) -> Vec<Network> {
    aggregate_with_limit(networks, DEFAULT_MAX_PASSES).networks
}

/// Sort and merge, then re-merge up to `max_passes` times until a fixpoint.
///
/// Networks of different families are kept apart but should be split by the
/// caller.
pub fn aggregate_with_limit(networks: Vec<Network>, max_passes: usize) -> Aggregation {
    let input_len = networks.len();
    let mut merged = sort_and_merge(networks);
    let mut passes = 1;
    let mut converged = false;

    for _ in 0..max_passes {
        let next = sort_and_merge(merged.clone());
        passes += 1;
        if next == merged {
            converged = true;
            break;
        }
        log::debug!("pass {passes}: {} -> {} networks", merged.len(), next.len());
        merged = next;
    }

    if !converged {
        log::warn!(
            "no fixpoint after {passes} passes, keeping {} networks (from {input_len})",
            merged.len()
        );
    }

    Aggregation {
        networks: merged,
        passes,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(list: &[&str]) -> Vec<Network> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn sorted(list: &[&str]) -> Vec<Network> {
        let mut networks = nets(list);
        networks.sort();
        networks
    }

    #[test]
    fn test_merge_pass_empty_and_single() {
        assert!(merge_pass(&[]).is_empty());
        assert_eq!(merge_pass(&nets(&["10.0.0.0/8"])), nets(&["10.0.0.0/8"]));
    }

    #[test]
    fn test_merge_pass_duplicate() {
        let input = sorted(&["10.0.0.0/24", "10.0.0.0/24", "10.0.0.0/24"]);
        assert_eq!(merge_pass(&input), nets(&["10.0.0.0/24"]));
    }

    #[test]
    fn test_merge_pass_subnet() {
        let input = sorted(&["10.0.0.0/8", "10.1.2.3/32", "10.200.0.0/16"]);
        assert_eq!(merge_pass(&input), nets(&["10.0.0.0/8"]));
    }

    #[test]
    fn test_merge_pass_superset_replaces_current() {
        // sorted input never puts a block before its container, so this slice is unsorted
        let input = nets(&["10.0.0.0/24", "10.0.0.0/16"]);
        assert_eq!(merge_pass(&input), nets(&["10.0.0.0/16"]));
    }

    #[test]
    fn test_merge_pass_siblings() {
        let input = sorted(&["192.168.0.128/25", "192.168.0.0/25"]);
        assert_eq!(merge_pass(&input), nets(&["192.168.0.0/24"]));
    }

    #[test]
    fn test_merge_pass_unaligned_neighbours_stay() {
        // adjacent /24s whose union is not a /23
        let input = sorted(&["192.168.1.0/24", "192.168.2.0/24"]);
        assert_eq!(merge_pass(&input), input);
    }

    #[test]
    fn test_merge_pass_needs_second_pass() {
        let input = sorted(&[
            "192.168.1.0/24",
            "192.168.0.0/24",
            "192.168.2.0/24",
            "192.168.3.0/24",
        ]);
        let first = merge_pass(&input);
        assert_eq!(first, nets(&["192.168.0.0/23", "192.168.2.0/23"]));
        assert_eq!(merge_pass(&first), nets(&["192.168.0.0/22"]));
    }

    #[test]
    fn test_merge_pass_cascade_in_one_walk() {
        let input = sorted(&["10.0.0.0/26", "10.0.0.64/26", "10.0.0.128/25"]);
        assert_eq!(merge_pass(&input), nets(&["10.0.0.0/24"]));
    }

    #[test]
    fn test_aggregate_fixpoint() {
        let result = aggregate_with_limit(
            nets(&[
                "192.168.1.0/24",
                "192.168.0.0/24",
                "192.168.2.0/24",
                "192.168.3.0/24",
            ]),
            DEFAULT_MAX_PASSES,
        );
        assert_eq!(result.networks, nets(&["192.168.0.0/22"]));
        assert!(result.converged);
        assert_eq!(result.passes, 3);
    }

    #[test]
    fn test_aggregate_cap_exhausted() {
        let result = aggregate_with_limit(
            nets(&["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24", "10.0.3.0/24"]),
            0,
        );
        assert!(!result.converged);
        assert_eq!(result.passes, 1);
        assert_eq!(result.networks, nets(&["10.0.0.0/23", "10.0.2.0/23"]));
    }

    #[test]
    fn test_aggregate_empty() {
        let result = aggregate_with_limit(vec![], DEFAULT_MAX_PASSES);
        assert!(result.networks.is_empty());
        assert!(result.converged);
    }

    #[test]
    fn test_aggregate_ipv6() {
        assert_eq!(
            aggregate(nets(&["2001:db8:8000::/33", "2001:db8::/33"])),
            nets(&["2001:db8::/32"])
        );
    }

    #[test]
    fn test_aggregate_full_space() {
        assert_eq!(
            aggregate(nets(&["128.0.0.0/1", "0.0.0.0/1"])),
            nets(&["0.0.0.0/0"])
        );
        assert_eq!(aggregate(nets(&["::/1", "8000::/1"])), nets(&["::/0"]));
    }

    #[test]
    fn test_aggregate_keeps_families_apart() {
        let result = aggregate(nets(&["0.0.0.0/0", "::/96"]));
        assert_eq!(result, nets(&["0.0.0.0/0", "::/96"]));
    }

    #[test]
    fn test_aggregate_top_of_range() {
        let result = aggregate(nets(&["255.255.255.254/32", "255.255.255.255/32"]));
        assert_eq!(result, nets(&["255.255.255.254/31"]));
    }
}
