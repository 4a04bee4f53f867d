//! Allocation requirements and their text form.
//!
//! A requirement is either a host count or a fixed prefix length. The text form
//! accepted by [`parse_requirements`] is a comma separated list such as
//! `web:50, db:20, /30, uplink:/31`.

use crate::error::{Result, SubnetError};
use crate::models::MAX_PREFIX;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Flags that change how host counts map to block sizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOptions {
    /// Add network and broadcast addresses on top of the requested host count.
    pub reserve_network_broadcast: bool,
    /// RFC 3021: a request for exactly 2 hosts becomes a /31.
    pub allow_p2p: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        PlanOptions {
            reserve_network_broadcast: true,
            allow_p2p: false,
        }
    }
}

/// What a single subnet in the plan must hold.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// At least this many usable hosts.
    Hosts(u32),
    /// Exactly this prefix length.
    Cidr(u8),
}

impl Requirement {
    /// Prefix length of the smallest block that satisfies this requirement.
    ///
    /// Returns `None` for zero hosts, prefixes above /32, or host counts larger
    /// than the whole IPv4 space.
    pub fn required_prefix(&self, options: &PlanOptions) -> Option<u8> {
        match *self {
            Requirement::Cidr(prefix) if prefix <= MAX_PREFIX => Some(prefix),
            Requirement::Cidr(_) => None,
            Requirement::Hosts(0) => None,
            Requirement::Hosts(2) if options.allow_p2p => Some(31),
            Requirement::Hosts(hosts) => {
                let needed = if options.reserve_network_broadcast {
                    hosts as u64 + 2
                } else {
                    hosts as u64
                };
                (0..=MAX_PREFIX)
                    .rev()
                    .find(|&prefix| 1u64 << (MAX_PREFIX - prefix) >= needed)
            }
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Requirement::Hosts(hosts) => write!(f, "{hosts} hosts"),
            Requirement::Cidr(prefix) => write!(f, "/{prefix}"),
        }
    }
}

/// A requirement parsed from text, with its optional label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementSpec {
    pub label: Option<String>,
    pub requirement: Requirement,
}

static REQUIREMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_requirement_regex() -> &'static Regex {
    REQUIREMENT_REGEX.get_or_init(|| {
        Regex::new(r"^(?:(?P<label>[^:]*[^:\s])\s*:\s*)?(?:/(?P<prefix>[0-9]+)|(?P<hosts>[0-9]+))$")
            .expect("Invalid Regex")
    })
}

/// Parse a comma separated requirement list. Empty items are skipped.
///
/// # Examples
/// ```
/// use vlsm_subnet_planner::processing::{parse_requirements, Requirement};
/// let specs = parse_requirements("web:50, /30").unwrap();
/// assert_eq!(specs[0].label.as_deref(), Some("web"));
/// assert_eq!(specs[0].requirement, Requirement::Hosts(50));
/// assert_eq!(specs[1].requirement, Requirement::Cidr(30));
/// ```
pub fn parse_requirements(input: &str) -> Result<Vec<RequirementSpec>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_requirement)
        .collect()
}

/// Parse a single `[label:]hosts` or `[label:]/prefix` token.
pub fn parse_requirement(token: &str) -> Result<RequirementSpec> {
    let token = token.trim();
    let caps = get_requirement_regex().captures(token).ok_or_else(|| {
        SubnetError::parse("requirement", token, "expected [label:]hosts or [label:]/prefix")
    })?;

    let label = caps.name("label").map(|m| m.as_str().trim().to_string());

    let requirement = if let Some(prefix) = caps.name("prefix") {
        match prefix.as_str().parse::<u8>() {
            Ok(p) if p <= MAX_PREFIX => Requirement::Cidr(p),
            _ => {
                return Err(SubnetError::parse(
                    "requirement",
                    token,
                    format!("prefix /{} is out of range (0-32)", prefix.as_str()),
                ))
            }
        }
    } else if let Some(hosts) = caps.name("hosts") {
        let hosts = hosts.as_str().parse::<u32>().map_err(|_| {
            SubnetError::parse("requirement", token, "host count is too large")
        })?;
        Requirement::Hosts(hosts)
    } else {
        return Err(SubnetError::parse("requirement", token, "missing size"));
    };

    log::trace!("parsed requirement token '{token}' => {requirement} label={label:?}");
    Ok(RequirementSpec { label, requirement })
}
