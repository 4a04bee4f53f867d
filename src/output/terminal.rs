//! Terminal output with colors.
//!
//! Renders network details, subdivisions and VLSM plans as aligned text tables.

use crate::models::{Address, Network};
use crate::processing::{PlanOptions, PlanResult};
use colored::Colorize;
use std::fmt::Write;

/// Format a value as a left-aligned field of at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

fn usable_or_na(address: Option<Address>) -> String {
    address
        .map(|a| a.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Multi-line description of one network and the address it was given as.
pub fn render_network_info(input: Address, network: &Network, allow_p2p: bool) -> String {
    let mask = network.mask();
    let mut out = String::new();
    let lines = [
        ("Address", input.to_string()),
        ("Network", network.to_string()),
        ("Netmask", mask.to_string()),
        ("Wildcard", mask.wildcard().to_string()),
        ("Broadcast", network.broadcast().to_string()),
        ("First usable", usable_or_na(network.first_usable(allow_p2p))),
        ("Last usable", usable_or_na(network.last_usable(allow_p2p))),
        ("Total addresses", network.total_addresses().to_string()),
        ("Usable hosts", network.usable_hosts(allow_p2p).to_string()),
        ("Class", input.class().to_string()),
        ("Address (bin)", input.to_dotted_binary_string()),
        ("Netmask (bin)", mask.as_address().to_dotted_binary_string()),
    ];
    for (name, value) in lines {
        let _ = writeln!(out, "{} {}", format_field(format!("{name}:"), 17).bold(), value);
    }
    out
}

/// One line per subnet with its usable range.
pub fn render_subnets(subnets: &[Network], allow_p2p: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{} {} {} {} {}",
            format_field("#", 5),
            format_field("Subnet", 19),
            format_field("First usable", 16),
            format_field("Last usable", 16),
            "Broadcast"
        )
        .bold()
    );
    for (i, subnet) in subnets.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {} {} {} {}",
            format_field(i + 1, 5),
            format_field(subnet, 19).green(),
            format_field(usable_or_na(subnet.first_usable(allow_p2p)), 16),
            format_field(usable_or_na(subnet.last_usable(allow_p2p)), 16),
            subnet.broadcast()
        );
    }
    out
}

/// Allocation table, free blocks and summary for a plan.
pub fn render_plan(base: &Network, result: &PlanResult, options: &PlanOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "VLSM plan for {} (reserve network/broadcast: {}, point-to-point /31: {})",
        base.to_string().bold(),
        yes_no(options.reserve_network_broadcast),
        yes_no(options.allow_p2p)
    );
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{} {} {} {} {} {} {} {}",
            format_field("#", 4),
            format_field("Requirement", 13),
            format_field("Subnet", 19),
            format_field("Netmask", 16),
            format_field("First usable", 16),
            format_field("Last usable", 16),
            format_field("Usable", 11),
            "Label"
        )
        .bold()
    );

    for (i, allocation) in result.allocations().iter().enumerate() {
        let network = &allocation.network;
        let lock = if allocation.tag.locked { " [locked]" } else { "" };
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {}{}",
            format_field(i + 1, 4),
            format_field(allocation.requirement, 13),
            format_field(network, 19).green(),
            format_field(network.mask(), 16),
            format_field(usable_or_na(network.first_usable(options.allow_p2p)), 16),
            format_field(usable_or_na(network.last_usable(options.allow_p2p)), 16),
            format_field(network.usable_hosts(options.allow_p2p), 11),
            allocation.tag.label.as_deref().unwrap_or(""),
            lock
        );
    }

    if let Some(requirement) = result.failed_requirement() {
        let _ = writeln!(
            out,
            "{} no free block large enough for requirement {}",
            "FAILED:".on_red(),
            requirement.to_string().red()
        );
    }

    let free = result.free_blocks();
    if free.is_empty() {
        let _ = writeln!(out, "Free blocks: none");
    } else {
        let _ = writeln!(out, "Free blocks:");
        for block in free {
            let _ = writeln!(
                out,
                "  {} ({} addresses)",
                format_field(block, 19).dimmed(),
                block.total_addresses()
            );
        }
    }

    let summary = result.summary();
    let _ = writeln!(
        out,
        "Summary: {} allocations, {}/{} addresses allocated ({:.1}%), {} free blocks",
        summary.allocation_count,
        summary.allocated_addresses,
        summary.total_addresses(),
        summary.utilization(),
        summary.free_block_count
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{plan, Requirement};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "test      ");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 4), "test");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 4), "42  ");
    }

    #[test]
    fn test_render_network_info() {
        let input: Address = "192.168.10.42".parse().unwrap();
        let network = Network::with_prefix(input, 24).unwrap();
        let out = render_network_info(input, &network, false);
        assert!(out.contains("192.168.10.0/24"));
        assert!(out.contains("192.168.10.255"));
        assert!(out.contains("192.168.10.254"));
        assert!(out.contains("254"));
        assert!(out.contains("11000000.10101000.00001010.00101010"));
        assert_eq!(out.lines().count(), 12);
    }

    #[test]
    fn test_render_subnets() {
        let network: Network = "10.0.0.0/24".parse().unwrap();
        let out = render_subnets(&network.subdivide(2).unwrap(), false);
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("10.0.0.128/25"));
        assert!(out.contains("10.0.0.255"));
    }

    #[test]
    fn test_render_plan_failure() {
        let base: Network = "192.168.1.0/30".parse().unwrap();
        let options = PlanOptions::default();
        let result = plan(base, &[Requirement::Hosts(10)], &options);
        let out = render_plan(&base, &result, &options);
        assert!(out.contains("FAILED:"));
        assert!(out.contains("10 hosts"));
        assert!(out.contains("0 allocations"));
    }

    #[test]
    fn test_render_plan_success() {
        let base: Network = "10.0.0.0/24".parse().unwrap();
        let options = PlanOptions::default();
        let mut result = plan(base, &[Requirement::Hosts(50)], &options);
        result.apply_labels(&[Some("web".to_string())]);
        let out = render_plan(&base, &result, &options);
        assert!(!out.contains("FAILED:"));
        assert!(out.contains("10.0.0.0/26"));
        assert!(out.contains("web"));
        assert!(out.contains("64/256 addresses allocated (25.0%)"));
    }
}
