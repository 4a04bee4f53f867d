//! Domain models for IPv4 subnet arithmetic.
//!
//! This module contains the value types used throughout the planner:
//! - [`Address`] - IPv4 address with dotted-decimal support
//! - [`Mask`] - Contiguous netmask derived from a prefix length
//! - [`Network`] - Address aligned to a mask, in CIDR notation

mod address;
mod mask;
mod network;

// Re-export public types
pub use address::{Address, AddressClass};
pub use mask::{Mask, MAX_PREFIX};
pub use network::Network;
