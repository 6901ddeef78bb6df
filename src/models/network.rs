//! CIDR network value shared by both address families.
//!
//! A [`Network`] stores its base address as the unsigned numeric value of
//! the address (`u128`, IPv4 in the low 32 bits) so that every mask and
//! sibling calculation is the same integer arithmetic with a width of 32 or
//! 128 bits.

use super::Family;
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Mask covering the host bits of a `/len` network.
fn host_mask(family: Family, len: u8) -> u128 {
    debug_assert!(len <= family.width());
    let host_bits = family.width() - len;
    if host_bits >= 128 {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
    }
}

/// Convert a prefix length to a network mask for the family.
///
/// # Examples
/// ```
/// use cidr_compress::models::{get_cidr_mask, Family};
/// assert_eq!(get_cidr_mask(Family::V4, 24), 0xFFFF_FF00);
/// ```
pub fn get_cidr_mask(family: Family, len: u8) -> u128 {
    family.max_addr() & !host_mask(family, len)
}

/// Map a dotted IPv4 netmask or hostmask to a prefix length.
///
/// A netmask wins when the value is both (`0.0.0.0` is `/0`).
fn prefix_from_ipv4_mask(mask: u32) -> Option<u8> {
    if mask.leading_ones() + mask.trailing_zeros() == 32 {
        return Some(mask.leading_ones() as u8);
    }
    if mask.leading_zeros() + mask.trailing_ones() == 32 {
        return Some(mask.leading_zeros() as u8);
    }
    None
}

fn parse_prefix(family: Family, text: &str) -> Result<u8, CidrError> {
    if text.is_empty() {
        return Err(CidrError::InvalidPrefix(text.to_string()));
    }
    if text.bytes().all(|b| b.is_ascii_digit()) {
        let prefix: u32 = text
            .parse()
            .map_err(|_| CidrError::InvalidPrefix(text.to_string()))?;
        if prefix > u32::from(family.width()) {
            return Err(CidrError::PrefixTooLong {
                family,
                prefix,
                max: family.width(),
            });
        }
        return Ok(prefix as u8);
    }
    match family {
        Family::V4 => {
            let mask: Ipv4Addr = text
                .parse()
                .map_err(|_| CidrError::InvalidNetmask(text.to_string()))?;
            prefix_from_ipv4_mask(u32::from(mask))
                .ok_or_else(|| CidrError::InvalidNetmask(text.to_string()))
        }
        Family::V6 => Err(CidrError::InvalidPrefix(text.to_string())),
    }
}

/// One CIDR block in canonical form: host bits are always zero.
///
/// Ordering is family, then numeric base address, then prefix length, so a
/// larger block sorts before the smaller blocks sharing its base address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    family: Family,
    addr: u128,
    prefix: u8,
}

impl Network {
    /// Build a network from a numeric address, masking off host bits.
    pub fn from_parts(family: Family, addr: u128, prefix: u8) -> Result<Network, CidrError> {
        if prefix > family.width() {
            return Err(CidrError::PrefixTooLong {
                family,
                prefix: u32::from(prefix),
                max: family.width(),
            });
        }
        if addr > family.max_addr() {
            return Err(CidrError::InvalidAddress(format!("{addr:#x}")));
        }
        Ok(Network {
            family,
            addr: addr & get_cidr_mask(family, prefix),
            prefix,
        })
    }

    pub fn from_ip(ip: IpAddr, prefix: u8) -> Result<Network, CidrError> {
        let addr = match ip {
            IpAddr::V4(v4) => u128::from(u32::from(v4)),
            IpAddr::V6(v6) => u128::from(v6),
        };
        Network::from_parts(Family::of(&ip), addr, prefix)
    }

    /// Parse `address[/prefix]` and require the given family.
    pub fn parse_family(family: Family, input: &str) -> Result<Network, CidrError> {
        let network: Network = input.parse()?;
        if network.family != family {
            return Err(CidrError::FamilyMismatch {
                expected: family,
                input: input.trim().to_string(),
            });
        }
        Ok(network)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// Lowest address as a number.
    pub fn lo(&self) -> u128 {
        self.addr
    }

    /// Highest (broadcast) address as a number.
    pub fn hi(&self) -> u128 {
        self.addr | host_mask(self.family, self.prefix)
    }

    pub fn network_address(&self) -> IpAddr {
        self.ip_from(self.lo())
    }

    pub fn broadcast_address(&self) -> IpAddr {
        self.ip_from(self.hi())
    }

    /// First address after this block, `None` at the end of the family range.
    pub fn ip_after(&self) -> Option<u128> {
        self.hi()
            .checked_add(1)
            .filter(|next| *next <= self.family.max_addr())
    }

    /// True if `other` lies entirely inside `self` (equal blocks included).
    pub fn contains(&self, other: &Network) -> bool {
        self.family == other.family
            && self.prefix <= other.prefix
            && other.addr & get_cidr_mask(self.family, self.prefix) == self.addr
    }

    /// The enclosing block one prefix length shorter.
    pub fn supernet(&self) -> Option<Network> {
        let len = self.prefix.checked_sub(1)?;
        Some(Network {
            family: self.family,
            addr: self.addr & get_cidr_mask(self.family, len),
            prefix: len,
        })
    }

    /// True if this is the first of the two halves of its supernet.
    pub fn is_lower_half(&self) -> bool {
        if self.prefix == 0 {
            return false;
        }
        let parent_bit = 1u128 << (self.family.width() - self.prefix);
        self.addr & parent_bit == 0
    }

    /// True if `self` and `next` are the lower and upper halves of one parent.
    pub fn is_lower_sibling_of(&self, next: &Network) -> bool {
        self.family == next.family
            && self.prefix == next.prefix
            && self.is_lower_half()
            && self.ip_after() == Some(next.addr)
    }

    fn ip_from(&self, value: u128) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(value)),
        }
    }
}

impl FromStr for Network {
    type Err = CidrError;

    /// Parse `address/prefix`, `address/netmask` (IPv4) or a bare address.
    fn from_str(input: &str) -> Result<Network, CidrError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CidrError::Empty);
        }
        let mut parts = input.split('/');
        let addr_part = parts.next().unwrap_or_default();
        let prefix_part = parts.next();
        if parts.next().is_some() {
            return Err(CidrError::TooManySlashes(input.to_string()));
        }

        let ip: IpAddr = addr_part
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr_part.to_string()))?;
        let family = Family::of(&ip);
        let prefix = match prefix_part {
            Some(text) => parse_prefix(family, text)?,
            None => family.width(),
        };
        Network::from_ip(ip, prefix)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network_address(), self.prefix)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid CIDR '{s}': {e}")))
    }
}
