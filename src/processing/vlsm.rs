//! VLSM allocation.
//!
//! Carves differently sized subnets out of one base network, largest first,
//! taking the first free block that is big enough and halving it down to size.

use super::requirement::{PlanOptions, Requirement};
use crate::models::Network;
use serde::Serialize;
use std::collections::VecDeque;

/// Caller owned metadata attached to an allocation after planning.
///
/// The planner creates it empty and never reads it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllocationTag {
    /// Free text label, e.g. the subnet's purpose.
    pub label: Option<String>,
    /// Reserved for incremental replanning. Currently inert.
    pub locked: bool,
}

/// A subnet assigned to one requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub network: Network,
    pub requirement: Requirement,
    /// Position of the requirement in the input list.
    pub input_index: usize,
    #[serde(flatten)]
    pub tag: AllocationTag,
}

/// Outcome of one [`plan`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlanResult {
    /// Every requirement was allocated.
    Success {
        allocations: Vec<Allocation>,
        free: Vec<Network>,
    },
    /// `requirement` did not fit; earlier allocations are kept.
    Failure {
        requirement: Requirement,
        allocations: Vec<Allocation>,
        free: Vec<Network>,
    },
}

/// Address accounting for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub allocation_count: usize,
    pub free_block_count: usize,
    pub allocated_addresses: u64,
    pub free_addresses: u64,
}

impl PlanSummary {
    pub fn total_addresses(&self) -> u64 {
        self.allocated_addresses + self.free_addresses
    }

    /// Allocated share of the base network, in percent.
    pub fn utilization(&self) -> f64 {
        match self.total_addresses() {
            0 => 0.0,
            total => self.allocated_addresses as f64 * 100.0 / total as f64,
        }
    }
}

impl PlanResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PlanResult::Success { .. })
    }

    /// Allocations in the order they were made (largest block first).
    pub fn allocations(&self) -> &[Allocation] {
        match self {
            PlanResult::Success { allocations, .. } | PlanResult::Failure { allocations, .. } => {
                allocations
            }
        }
    }

    /// Unallocated blocks, in free list order.
    pub fn free_blocks(&self) -> &[Network] {
        match self {
            PlanResult::Success { free, .. } | PlanResult::Failure { free, .. } => free,
        }
    }

    pub fn failed_requirement(&self) -> Option<Requirement> {
        match self {
            PlanResult::Success { .. } => None,
            PlanResult::Failure { requirement, .. } => Some(*requirement),
        }
    }

    /// Metadata of the allocation at `index`, for the caller to update.
    pub fn tag_mut(&mut self, index: usize) -> Option<&mut AllocationTag> {
        let allocations = match self {
            PlanResult::Success { allocations, .. } | PlanResult::Failure { allocations, .. } => {
                allocations
            }
        };
        allocations.get_mut(index).map(|a| &mut a.tag)
    }

    /// Label allocations by the input position of their requirement.
    pub fn apply_labels(&mut self, labels: &[Option<String>]) {
        let count = self.allocations().len();
        for index in 0..count {
            let input_index = self.allocations()[index].input_index;
            if let (Some(Some(label)), Some(tag)) = (labels.get(input_index), self.tag_mut(index))
            {
                tag.label = Some(label.clone());
            }
        }
    }

    pub fn summary(&self) -> PlanSummary {
        let allocations = self.allocations();
        let free = self.free_blocks();
        PlanSummary {
            allocation_count: allocations.len(),
            free_block_count: free.len(),
            allocated_addresses: allocations
                .iter()
                .map(|a| a.network.total_addresses())
                .sum(),
            free_addresses: free.iter().map(|n| n.total_addresses()).sum(),
        }
    }
}

/// Plan VLSM allocations for `requirements` inside `base`.
///
/// Requirements are served largest block first; equal sizes keep their input
/// order. Each one takes the first free block that is large enough and splits
/// it in halves, pushing every unused upper half to the front of the free list.
/// The first requirement that does not fit stops the plan.
pub fn plan(base: Network, requirements: &[Requirement], options: &PlanOptions) -> PlanResult {
    log::info!(
        "#Start plan() base={base} requirements={} reserve_network_broadcast={} allow_p2p={}",
        requirements.len(),
        options.reserve_network_broadcast,
        options.allow_p2p
    );

    let mut sized: Vec<(usize, Requirement, u8)> = Vec::with_capacity(requirements.len());
    for (input_index, requirement) in requirements.iter().enumerate() {
        match requirement.required_prefix(options) {
            Some(prefix) => sized.push((input_index, *requirement, prefix)),
            None => {
                log::warn!("Requirement #{input_index} ({requirement}) has no valid block size");
                return PlanResult::Failure {
                    requirement: *requirement,
                    allocations: Vec::new(),
                    free: vec![base],
                };
            }
        }
    }

    // sort_by_key is stable: equal prefixes keep input order
    sized.sort_by_key(|&(_, _, prefix)| prefix);

    let mut free: VecDeque<Network> = VecDeque::from([base]);
    let mut allocations = Vec::with_capacity(sized.len());

    for (input_index, requirement, prefix) in sized {
        let position = free.iter().position(|block| block.prefix() <= prefix);
        let Some(mut block) = position.and_then(|i| free.remove(i)) else {
            log::warn!(
                "No free block for requirement #{input_index} ({requirement}, /{prefix}), {} allocated so far",
                allocations.len()
            );
            return PlanResult::Failure {
                requirement,
                allocations,
                free: free.into_iter().collect(),
            };
        };

        while block.prefix() < prefix {
            let Some((lower, upper)) = block.split() else {
                break;
            };
            free.push_front(upper);
            block = lower;
        }

        log::debug!(
            "allocated {block} for requirement #{input_index} ({requirement}), free blocks={}",
            free.len()
        );
        allocations.push(Allocation {
            network: block,
            requirement,
            input_index,
            tag: AllocationTag::default(),
        });
    }

    log::info!(
        "plan() done: {} allocations, {} free blocks",
        allocations.len(),
        free.len()
    );
    PlanResult::Success {
        allocations,
        free: free.into_iter().collect(),
    }
}
