//! Integration tests for cidr-compress
//!
//! These tests run raw input lines through the full pipeline.

use cidr_compress::processing::DEFAULT_MAX_PASSES;
use cidr_compress::{compress_lines, Network};

fn cidrs(networks: &[Network]) -> Vec<String> {
    networks.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_sibling_halves_merge() {
    let report = compress_lines(["192.168.0.0/25", "192.168.0.128/25"], DEFAULT_MAX_PASSES);
    assert_eq!(cidrs(&report.ipv4.networks), ["192.168.0.0/24"]);
    assert_eq!(report.ipv4.summary(), "compressed 2 IPs down to 1");
}

#[test]
fn test_subnet_is_redundant() {
    let report = compress_lines(["10.0.0.0/8", "10.1.2.3/32"], DEFAULT_MAX_PASSES);
    assert_eq!(cidrs(&report.ipv4.networks), ["10.0.0.0/8"]);
}

#[test]
fn test_four_slash24_become_slash22() {
    let report = compress_lines(
        [
            "192.168.1.0/24",
            "192.168.0.0/24",
            "192.168.2.0/24",
            "192.168.3.0/24",
        ],
        DEFAULT_MAX_PASSES,
    );
    assert_eq!(cidrs(&report.ipv4.networks), ["192.168.0.0/22"]);
    assert!(report.ipv4.converged);
    assert!(report.ipv4.passes >= 2, "needs more than one merge pass");
}

#[test]
fn test_ipv6_siblings_merge() {
    let report = compress_lines(["2001:db8::/33", "2001:db8:8000::/33"], DEFAULT_MAX_PASSES);
    assert_eq!(cidrs(&report.ipv6.networks), ["2001:db8::/32"]);
    assert!(report.ipv4.networks.is_empty());
}

#[test]
fn test_invalid_line_dropped() {
    let input = "10.0.0.0/24\nnot-an-ip\n10.0.1.0/24\n300.1.1.1/32\n";
    let report = compress_lines(input.lines(), DEFAULT_MAX_PASSES);
    assert_eq!(cidrs(&report.ipv4.networks), ["10.0.0.0/23"]);
    assert_eq!(report.ipv4.input_lines, 3);
    assert_eq!(report.ipv4.valid_count, 2);
    assert_eq!(report.unclassified, 1);
}

#[test]
fn test_empty_family() {
    let report = compress_lines(["10.0.0.0/8"], DEFAULT_MAX_PASSES);
    assert!(report.ipv6.networks.is_empty());
    assert_eq!(report.ipv6.summary(), "compressed 0 IPs down to 0");

    let report = compress_lines("\n\n   \n".lines(), DEFAULT_MAX_PASSES);
    assert!(report.ipv4.networks.is_empty());
    assert!(report.ipv6.networks.is_empty());
    assert_eq!(report.unclassified, 0);
}

#[test]
fn test_allow_list() {
    let input = "
        203.0.113.0/26
        203.0.113.64/26
        203.0.113.128/25
        198.51.100.7
        198.51.100.6/32
        10.10.0.0/255.255.0.0
        10.10.20.0/24
        2001:db8:1::/48
        2001:db8:1:ff::/64
        2001:db8:0::/48
    ";
    let report = compress_lines(input.lines(), DEFAULT_MAX_PASSES);
    assert_eq!(
        cidrs(&report.ipv4.networks),
        ["10.10.0.0/16", "198.51.100.6/31", "203.0.113.0/24"]
    );
    assert_eq!(cidrs(&report.ipv6.networks), ["2001:db8::/47"]);
}

#[test]
fn test_undecodable_line_rejected() {
    let raw = b"10.0.0.0/25\n10.0.0.128/25\n\xff\xfe/8\n2001:db8::/32\n";
    let input = String::from_utf8_lossy(raw);
    let report = compress_lines(input.lines(), DEFAULT_MAX_PASSES);
    assert_eq!(cidrs(&report.ipv4.networks), ["10.0.0.0/24"]);
    assert_eq!(cidrs(&report.ipv6.networks), ["2001:db8::/32"]);
    assert_eq!(report.unclassified, 1);
}
