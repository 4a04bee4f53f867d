//! Contiguous IPv4 netmask.

use super::Address;
use crate::error::{Result, SubnetError};
use std::fmt;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Netmask with contiguous leading one bits, e.g. 255.255.255.0 (/24).
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Mask {
    raw: u32,
    prefix: u8,
}

impl Mask {
    /// Build the mask for a prefix length.
    ///
    /// # Examples
    /// ```
    /// use vlsm_subnet_planner::models::Mask;
    /// assert_eq!(Mask::from_prefix(24).unwrap().raw(), 0xFFFFFF00);
    /// assert_eq!(Mask::from_prefix(32).unwrap().raw(), 0xFFFFFFFF);
    /// assert!(Mask::from_prefix(33).is_err());
    /// ```
    pub fn from_prefix(prefix: u8) -> Result<Mask> {
        if prefix > MAX_PREFIX {
            return Err(SubnetError::PrefixOutOfRange(prefix as u32));
        }
        // shifting a u32 by 32 overflows, so /0 is special cased
        let raw = if prefix == 0 {
            0
        } else {
            u32::MAX << (MAX_PREFIX - prefix)
        };
        Ok(Mask { raw, prefix })
    }

    /// Validate a raw mask value, scanning from bit 31 down.
    pub fn from_raw(raw: u32) -> Result<Mask> {
        let mut seen_zero = false;
        let mut prefix = 0u8;
        for bit in (0..32).rev() {
            if raw & (1 << bit) == 0 {
                seen_zero = true;
            } else if seen_zero {
                return Err(SubnetError::InvalidMask(raw));
            } else {
                prefix += 1;
            }
        }
        Ok(Mask { raw, prefix })
    }

    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Netmask as a dotted address, for display.
    pub fn as_address(&self) -> Address {
        Address::from_raw(self.raw)
    }

    /// Inverted mask (e.g. 0.0.0.255 for /24), for display.
    pub fn wildcard(&self) -> Address {
        Address::from_raw(!self.raw)
    }

    /// Number of addresses covered, 2^(32-prefix).
    pub fn total_addresses(&self) -> u64 {
        if self.prefix == MAX_PREFIX {
            1
        } else {
            1u64 << (MAX_PREFIX - self.prefix)
        }
    }

    /// Usable host addresses; /31 counts 2 only with RFC 3021 point-to-point enabled.
    pub fn usable_hosts(&self, allow_p2p: bool) -> u64 {
        match self.prefix {
            32 => 0,
            31 if allow_p2p => 2,
            31 => 0,
            _ => self.total_addresses().saturating_sub(2),
        }
    }
}

impl FromStr for Mask {
    type Err = SubnetError;

    /// Parse dotted-decimal netmask text such as `255.255.240.0`.
    fn from_str(s: &str) -> Result<Mask> {
        let addr: Address = s.parse().map_err(|e| match e {
            SubnetError::Parse { reason, .. } => SubnetError::parse("mask", s, reason),
            other => other,
        })?;
        Mask::from_raw(addr.raw())
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_address())
    }
}
