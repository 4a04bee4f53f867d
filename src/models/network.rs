//! IPv4 network (address + mask) and CIDR notation support.
//!
//! Provides [`Network`], always normalized to its first address, with broadcast,
//! usable range and subdivision calculations.

use super::mask::MAX_PREFIX;
use super::{Address, Mask};
use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// IPv4 network in CIDR form. The address is always the network address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    address: Address,
    mask: Mask,
}

impl Network {
    /// Create a network, masking off any host bits of `address`.
    pub fn new(address: Address, mask: Mask) -> Network {
        Network {
            address: Address::from_raw(address.raw() & mask.raw()),
            mask,
        }
    }

    /// Create a network from an address and prefix length.
    pub fn with_prefix(address: Address, prefix: u8) -> Result<Network> {
        Ok(Network::new(address, Mask::from_prefix(prefix)?))
    }

    /// The network (first) address.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn prefix(&self) -> u8 {
        self.mask.prefix()
    }

    pub fn broadcast(&self) -> Address {
        Address::from_raw(self.address.raw() | !self.mask.raw())
    }

    pub fn total_addresses(&self) -> u64 {
        self.mask.total_addresses()
    }

    pub fn usable_hosts(&self, allow_p2p: bool) -> u64 {
        self.mask.usable_hosts(allow_p2p)
    }

    /// First host address, `None` for /32 and for /31 without point-to-point.
    pub fn first_usable(&self, allow_p2p: bool) -> Option<Address> {
        match self.prefix() {
            32 => None,
            31 if allow_p2p => Some(self.address),
            31 => None,
            _ => Some(Address::from_raw(self.address.raw() + 1)),
        }
    }

    /// Last host address, `None` for /32 and for /31 without point-to-point.
    pub fn last_usable(&self, allow_p2p: bool) -> Option<Address> {
        match self.prefix() {
            32 => None,
            31 if allow_p2p => Some(self.broadcast()),
            31 => None,
            _ => Some(Address::from_raw(self.broadcast().raw() - 1)),
        }
    }

    /// Check if an address is inside this network.
    pub fn contains(&self, address: Address) -> bool {
        address.raw() & self.mask.raw() == self.address.raw()
    }

    /// Check if `other` lies entirely inside this network.
    pub fn contains_network(&self, other: &Network) -> bool {
        other.prefix() >= self.prefix() && self.contains(other.address)
    }

    /// Halve the network into its lower and upper /(prefix+1). `None` for a /32.
    pub fn split(&self) -> Option<(Network, Network)> {
        if self.prefix() >= MAX_PREFIX {
            return None;
        }
        let mask = Mask::from_prefix(self.prefix() + 1).ok()?;
        let half = mask.total_addresses() as u32;
        let lower = Network::new(self.address, mask);
        let upper = Network::new(Address::from_raw(self.address.raw() + half), mask);
        Some((lower, upper))
    }

    /// Split into equal subnets, rounding `count` up to the next power of two.
    ///
    /// # Examples
    /// ```
    /// use vlsm_subnet_planner::models::Network;
    /// let net: Network = "10.0.0.0/24".parse().unwrap();
    /// let subnets = net.subdivide(3).unwrap();
    /// assert_eq!(subnets.len(), 4);
    /// assert_eq!(subnets[3].to_string(), "10.0.0.192/26");
    /// ```
    pub fn subdivide(&self, count: u32) -> Result<Vec<Network>> {
        if count == 0 {
            return Err(SubnetError::InvalidSubdivisionCount(count));
        }
        let bits = (count as u64).next_power_of_two().trailing_zeros();
        let new_prefix = self.prefix() as u32 + bits;
        if new_prefix > MAX_PREFIX as u32 {
            return Err(SubnetError::SubdivisionTooDeep {
                prefix: self.prefix(),
                count,
                new_prefix,
            });
        }

        let mask = Mask::from_prefix(new_prefix as u8)?;
        let size = mask.total_addresses();
        let start = self.address.raw() as u64;
        let subnets = (0..1u64 << bits)
            .map(|i| Network::new(Address::from_raw((start + i * size) as u32), mask))
            .collect();
        Ok(subnets)
    }
}

impl FromStr for Network {
    type Err = SubnetError;

    /// Parse CIDR text such as `192.168.10.0/24`.
    fn from_str(s: &str) -> Result<Network> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(SubnetError::parse("CIDR", s, "expected address/prefix"));
        }

        let address: Address = parts[0].parse().map_err(|e| match e {
            SubnetError::Parse { reason, .. } => SubnetError::parse("CIDR", s, reason),
            other => other,
        })?;

        let prefix_str = parts[1];
        if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::parse(
                "CIDR",
                s,
                format!("prefix '{prefix_str}' is not a decimal number"),
            ));
        }
        let prefix: u8 = match prefix_str.parse() {
            Ok(p) if p <= MAX_PREFIX => p,
            _ => {
                return Err(SubnetError::parse(
                    "CIDR",
                    s,
                    format!("prefix '{prefix_str}' is out of range (0-32)"),
                ))
            }
        };

        Network::with_prefix(address, prefix)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix())
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.address, self.prefix());
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(de::Error::custom)
    }
}
