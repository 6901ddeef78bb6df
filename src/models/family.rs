//! IP address family.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// IPv4 or IPv6. Networks of different families are never merged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Family {
    #[serde(rename = "ipv4")]
    V4,
    #[serde(rename = "ipv6")]
    V6,
}

impl Family {
    /// Both families, in output order.
    pub const ALL: [Family; 2] = [Family::V4, Family::V6];

    /// Address width in bits (32 or 128).
    pub const fn width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Character whose presence in a line marks it as this family.
    pub const fn delimiter(self) -> char {
        match self {
            Family::V4 => '.',
            Family::V6 => ':',
        }
    }

    /// Highest numeric address of the family.
    pub const fn max_addr(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }

    pub fn of(ip: &IpAddr) -> Family {
        match ip {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}
