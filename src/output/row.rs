//! Flat export record for one network.

use crate::models::{Address, Network};
use crate::processing::PlanResult;
use serde::Serialize;

/// Represents a network with every derived property, ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRow {
    /// Network address (without prefix).
    pub subnet: Address,
    pub prefix: u8,
    pub netmask: Address,
    pub wildcard_mask: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_usable: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_usable: Option<Address>,
    pub broadcast: Address,
    pub total_addresses: u64,
    pub usable_hosts: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl NetworkRow {
    pub fn new(network: &Network, label: Option<String>, allow_p2p: bool) -> NetworkRow {
        NetworkRow {
            subnet: network.address(),
            prefix: network.prefix(),
            netmask: network.mask().as_address(),
            wildcard_mask: network.mask().wildcard(),
            first_usable: network.first_usable(allow_p2p),
            last_usable: network.last_usable(allow_p2p),
            broadcast: network.broadcast(),
            total_addresses: network.total_addresses(),
            usable_hosts: network.usable_hosts(allow_p2p),
            label,
        }
    }
}

/// Rows for every allocation of a plan, optionally followed by its free blocks.
pub fn plan_rows(result: &PlanResult, allow_p2p: bool, include_free: bool) -> Vec<NetworkRow> {
    let mut rows: Vec<NetworkRow> = result
        .allocations()
        .iter()
        .map(|a| NetworkRow::new(&a.network, a.tag.label.clone(), allow_p2p))
        .collect();
    if include_free {
        rows.extend(
            result
                .free_blocks()
                .iter()
                .map(|n| NetworkRow::new(n, None, allow_p2p)),
        );
    }
    rows
}
