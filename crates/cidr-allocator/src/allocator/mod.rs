//! CIDR suggestion engine
//!
//! Provides:
//! - CIDR text parsing/formatting and interval primitives
//! - Aligned enumeration of free blocks inside a parent network
//! - Merging local suggestions with provider-reported free blocks

mod cidr;
mod merge;
mod planner;

pub use cidr::{align_up, format_cidr, intersects, parse_cidr};
pub use merge::merge_with_provider;
pub use planner::{suggest, SubnetPlanner};
