//! IPv4 subnet calculator and VLSM planner.
//!
//! - [`models`] - Address, mask and network arithmetic
//! - [`processing`] - Requirements and the VLSM allocator
//! - [`output`] - Terminal, CSV and JSON rendering
//! - [`config`] - Environment settings and logging setup

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use error::Result;
use models::{Address, Mask, Network};
use processing::{parse_requirements, plan, PlanOptions, PlanResult, Requirement};

pub use error::SubnetError;

/// Parse `A.B.C.D/p` or `A.B.C.D/M.M.M.M`, keeping the host address as given.
///
/// # Examples
/// ```
/// use vlsm_subnet_planner::parse_host_cidr;
/// let (host, network) = parse_host_cidr("192.168.10.42/255.255.255.0").unwrap();
/// assert_eq!(host.to_string(), "192.168.10.42");
/// assert_eq!(network.to_string(), "192.168.10.0/24");
/// ```
pub fn parse_host_cidr(input: &str) -> Result<(Address, Network)> {
    let input = input.trim();
    let network = match input.split_once('/') {
        Some((addr, mask)) if mask.contains('.') => {
            let address: Address = addr.parse()?;
            let mask: Mask = mask.parse()?;
            Network::new(address, mask)
        }
        _ => input.parse::<Network>()?,
    };
    // the address part was already validated by the network parse
    let host = input
        .split('/')
        .next()
        .unwrap_or_default()
        .parse::<Address>()?;
    Ok((host, network))
}

/// Parse the base network and requirement list, plan, and label the allocations.
pub fn run_plan(base: &str, requirements: &str, options: &PlanOptions) -> Result<(Network, PlanResult)> {
    let base: Network = base.trim().parse()?;
    let specs = parse_requirements(requirements)?;
    if specs.is_empty() {
        return Err(SubnetError::parse(
            "requirement",
            requirements,
            "no requirements given",
        ));
    }
    log::info!("run_plan() base={base} requirements={}", specs.len());

    let list: Vec<Requirement> = specs.iter().map(|s| s.requirement).collect();
    let labels: Vec<Option<String>> = specs.into_iter().map(|s| s.label).collect();

    let mut result = plan(base, &list, options);
    result.apply_labels(&labels);
    Ok((base, result))
}

/// Parse a network and split it into `count` (rounded up to a power of two) subnets.
pub fn run_subdivide(network: &str, count: u32) -> Result<Vec<Network>> {
    let network: Network = network.trim().parse()?;
    let subnets = network.subdivide(count)?;
    log::info!("run_subdivide() {network} count={count} => {} subnets", subnets.len());
    Ok(subnets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_cidr_prefix() {
        let (host, network) = parse_host_cidr("10.20.30.40/16").unwrap();
        assert_eq!(host, Address::new(10, 20, 30, 40));
        assert_eq!(network.to_string(), "10.20.0.0/16");
    }

    #[test]
    fn test_parse_host_cidr_errors() {
        assert!(parse_host_cidr("10.20.30.40").is_err());
        assert!(parse_host_cidr("10.20.30.40/255.0.255.0").is_err());
        assert!(parse_host_cidr("10.20.30/24").is_err());
    }

    #[test]
    fn test_run_plan_labels() {
        let (base, result) = run_plan(
            "10.0.0.0/24",
            "hosts-a:5, hosts-b:50",
            &PlanOptions::default(),
        )
        .unwrap();
        assert_eq!(base.to_string(), "10.0.0.0/24");
        assert_eq!(result.allocations()[0].tag.label.as_deref(), Some("hosts-b"));
        assert_eq!(result.allocations()[1].tag.label.as_deref(), Some("hosts-a"));
    }

    #[test]
    fn test_run_plan_errors() {
        assert!(run_plan("10.0.0.0/33", "5", &PlanOptions::default()).is_err());
        assert!(run_plan("10.0.0.0/24", " , ", &PlanOptions::default()).is_err());
        assert!(run_plan("10.0.0.0/24", "5,x", &PlanOptions::default()).is_err());
    }

    #[test]
    fn test_run_subdivide() {
        assert_eq!(run_subdivide("10.0.0.0/24", 3).unwrap().len(), 4);
        assert!(run_subdivide("10.0.0.0/24", 0).is_err());
    }
}
