//! IPv4 CIDR Allocator
//!
//! Suggests subnets to carve out of a parent network (VPC):
//! - Parses and formats CIDR text with loud failures
//! - Enumerates free blocks on natural `/prefix` boundaries
//! - Never overlaps existing subnets, never leaves the parent
//! - Merges local suggestions with provider-reported free blocks
//!
//! Everything is a pure computation over caller-supplied data. The backend
//! remains the source of truth when a subnet is actually created.
//!
//! ```
//! use cidr_allocator::{suggest, AllocationRequest, CidrBlock};
//!
//! let parent: CidrBlock = "10.0.0.0/24".parse().unwrap();
//! let used: CidrBlock = "10.0.0.0/26".parse().unwrap();
//! let request = AllocationRequest::new(parent, 26).with_used([used]);
//!
//! let result = suggest(&request).unwrap();
//! assert_eq!(
//!     result.to_strings(),
//!     ["10.0.64.0/26", "10.0.128.0/26", "10.0.192.0/26"]
//! );
//! ```

pub mod allocator;
pub mod config;
pub mod dto;
pub mod error;
pub mod inventory;
pub mod models;

// Re-export core types
pub use allocator::{
    align_up, format_cidr, intersects, merge_with_provider, parse_cidr, suggest, SubnetPlanner,
};
pub use config::AllocatorConfig;
pub use dto::{SuggestCidrsDto, SuggestCidrsResponse};
pub use error::{Error, Result};
pub use inventory::{used_blocks_for, SubnetRecord};
pub use models::{block_size, AllocationRequest, CidrBlock, Interval, SuggestionSet};

/// Default allocator settings
pub mod defaults {
    use std::ops::RangeInclusive;

    /// Suggestions returned per request
    pub const MAX_SUGGESTIONS: usize = 8;

    /// Subnet sizes offered in subnet creation forms
    pub const OFFERED_PREFIXES: RangeInclusive<u8> = 20..=28;
}
