//! Subnet planning logic.
//!
//! This module contains the planning layer built on the models:
//! - [`requirement`] - Requirement types and their text form
//! - [`vlsm`] - The VLSM allocator

mod requirement;
mod vlsm;

// Re-export public functions
pub use requirement::{parse_requirement, parse_requirements, PlanOptions, Requirement, RequirementSpec};
pub use vlsm::{plan, Allocation, AllocationTag, PlanResult, PlanSummary};
