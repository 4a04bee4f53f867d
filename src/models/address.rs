//! IPv4 address value type.
//!
//! Provides [`Address`], a 32-bit IPv4 address with dotted-decimal parsing and
//! formatting, binary display helpers and legacy class lookup.

use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Legacy (classful) IPv4 address class, derived from the first octet.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Reserved.
    E,
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D (multicast)",
            AddressClass::E => "E (reserved)",
        };
        write!(f, "{name}")
    }
}

/// IPv4 address stored as a big-endian u32 (first octet in bits 31-24).
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Address(u32);

impl Address {
    /// Build an address from its four octets.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Address {
        Address(u32::from_be_bytes([a, b, c, d]))
    }

    pub const fn from_raw(raw: u32) -> Address {
        Address(raw)
    }

    pub const fn raw(&self) -> u32 {
        self.0
    }

    pub const fn octets(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// 32 characters, most significant bit first.
    ///
    /// # Examples
    /// ```
    /// use vlsm_subnet_planner::models::Address;
    /// assert_eq!(
    ///     Address::new(192, 168, 1, 1).to_binary_string(),
    ///     "11000000101010000000000100000001"
    /// );
    /// ```
    pub fn to_binary_string(&self) -> String {
        format!("{:032b}", self.0)
    }

    /// Binary octets joined with dots, e.g. `11111111.11111111.11111111.00000000`.
    pub fn to_dotted_binary_string(&self) -> String {
        self.octets()
            .iter()
            .map(|o| format!("{o:08b}"))
            .collect::<Vec<String>>()
            .join(".")
    }

    /// Classful network class. Informational only.
    pub fn class(&self) -> AddressClass {
        match self.octets()[0] {
            0..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            _ => AddressClass::E,
        }
    }
}

impl FromStr for Address {
    type Err = SubnetError;

    /// Parse dotted-decimal text. Exactly four components of decimal digits, each 0-255.
    fn from_str(s: &str) -> Result<Address> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(SubnetError::parse(
                "address",
                s,
                format!("expected 4 octets, found {}", parts.len()),
            ));
        }

        let mut octets = [0u8; 4];
        for (octet, part) in octets.iter_mut().zip(parts.iter()) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(SubnetError::parse(
                    "address",
                    s,
                    format!("octet '{part}' is not a decimal number"),
                ));
            }
            *octet = part.parse().map_err(|_| {
                SubnetError::parse("address", s, format!("octet '{part}' exceeds 255"))
            })?;
        }

        Ok(Address(u32::from_be_bytes(octets)))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(self.0))
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address(u32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl From<u32> for Address {
    fn from(raw: u32) -> Self {
        Address(raw)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_octets() {
        let addr = Address::new(192, 168, 10, 42);
        assert_eq!(addr.raw(), 0xC0A80A2A);
        assert_eq!(addr.octets(), [192, 168, 10, 42]);
    }

    #[test]
    fn test_parse_and_format() {
        let addr: Address = "10.1.2.3".parse().unwrap();
        assert_eq!(addr, Address::new(10, 1, 2, 3));
        assert_eq!(addr.to_string(), "10.1.2.3");
        assert_eq!("0.0.0.0".parse::<Address>().unwrap().raw(), 0);
        assert_eq!(
            "255.255.255.255".parse::<Address>().unwrap().raw(),
            u32::MAX
        );
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        let addr: Address = "010.001.000.007".parse().unwrap();
        assert_eq!(addr, Address::new(10, 1, 0, 7));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "10.0.0",
            "10.0.0.0.0",
            "10.0.0.256",
            "10.0..1",
            "10.0.0.1 ",
            " 10.0.0.1",
            "10.0.0.+1",
            "10.0.0.-1",
            "a.b.c.d",
            "10.0.0.1/24",
        ] {
            let result = bad.parse::<Address>();
            assert!(
                matches!(result, Err(SubnetError::Parse { .. })),
                "expected parse error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_binary_string() {
        assert_eq!(
            Address::new(255, 255, 255, 0).to_binary_string(),
            "11111111111111111111111100000000"
        );
        assert_eq!(Address::from_raw(1).to_binary_string().len(), 32);
        assert_eq!(
            Address::new(10, 0, 0, 1).to_dotted_binary_string(),
            "00001010.00000000.00000000.00000001"
        );
    }

    #[test]
    fn test_class() {
        assert_eq!(Address::new(10, 0, 0, 1).class(), AddressClass::A);
        assert_eq!(Address::new(127, 255, 0, 1).class(), AddressClass::A);
        assert_eq!(Address::new(128, 0, 0, 1).class(), AddressClass::B);
        assert_eq!(Address::new(191, 0, 0, 1).class(), AddressClass::B);
        assert_eq!(Address::new(192, 168, 0, 1).class(), AddressClass::C);
        assert_eq!(Address::new(224, 0, 0, 251).class(), AddressClass::D);
        assert_eq!(Address::new(240, 0, 0, 1).class(), AddressClass::E);
        assert_eq!(Address::new(255, 255, 255, 255).class(), AddressClass::E);
    }

    #[test]
    fn test_ipv4addr_interop() {
        let std_addr = Ipv4Addr::new(172, 16, 5, 4);
        let addr = Address::from(std_addr);
        assert_eq!(Ipv4Addr::from(addr), std_addr);
    }

    #[test]
    fn test_serde_as_dotted_string() {
        let addr = Address::new(192, 0, 2, 1);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"192.0.2.1\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<Address>("\"192.0.2\"").is_err());
    }
}
