//! Allocation request and result models

use super::CidrBlock;
use serde::{Deserialize, Serialize};

/// Request for candidate subnets inside a parent block
///
/// `used` should only hold subnets carved from `parent`; blocks outside it
/// are tolerated and simply never collide with a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Parent network (VPC) block
    pub parent: CidrBlock,
    /// Subnets already allocated from the parent, in any order
    #[serde(default)]
    pub used: Vec<CidrBlock>,
    /// Prefix length of the subnets to suggest
    pub prefix_len: u8,
    /// Upper bound on returned suggestions
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    crate::defaults::MAX_SUGGESTIONS
}

impl AllocationRequest {
    /// Request `/prefix_len` blocks from `parent` with nothing used yet
    pub fn new(parent: CidrBlock, prefix_len: u8) -> Self {
        Self {
            parent,
            used: Vec::new(),
            prefix_len,
            max_suggestions: default_max_suggestions(),
        }
    }

    /// Set the already allocated subnets
    pub fn with_used(mut self, used: impl IntoIterator<Item = CidrBlock>) -> Self {
        self.used = used.into_iter().collect();
        self
    }

    /// Set the suggestion limit
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }
}

/// Outcome of a suggestion run
///
/// An empty list is a normal result meaning the parent has no room for the
/// requested size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSet {
    /// Free, aligned candidate blocks in increasing address order
    pub suggestions: Vec<CidrBlock>,
    /// More free candidates exist beyond the suggestion limit
    pub truncated: bool,
}

impl SuggestionSet {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Canonical text for each suggestion, in order
    pub fn to_strings(&self) -> Vec<String> {
        self.suggestions.iter().map(ToString::to_string).collect()
    }
}
