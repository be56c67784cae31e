//! Allocator data model

mod block;
mod request;

pub use block::{block_size, CidrBlock, Interval};
pub use request::{AllocationRequest, SuggestionSet};
