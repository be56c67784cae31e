//! Text-based request and response types for the form layer

use crate::models::{AllocationRequest, CidrBlock};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Request for subnet suggestions, as CIDR text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestCidrsDto {
    /// Parent (VPC) CIDR
    pub parent_cidr: String,
    /// Subnets already carved from the parent
    #[serde(default)]
    pub used_cidrs: Vec<String>,
    /// Prefix length of the subnets to suggest
    pub prefix_len: u8,
    /// Suggestion limit (falls back to configured default)
    #[serde(default)]
    pub max_suggestions: Option<usize>,
    /// Free blocks reported by the provider, merged after local suggestions
    #[serde(default)]
    pub provider_cidrs: Vec<String>,
}

impl SuggestCidrsDto {
    /// Parse into a typed request, failing on the first malformed CIDR
    pub fn to_request(&self, default_max: usize) -> Result<AllocationRequest> {
        let parent: CidrBlock = self.parent_cidr.parse()?;
        let used = self
            .used_cidrs
            .iter()
            .map(|c| c.parse::<CidrBlock>())
            .collect::<Result<Vec<_>>>()?;

        Ok(AllocationRequest::new(parent, self.prefix_len)
            .with_used(used)
            .with_max_suggestions(self.max_suggestions.unwrap_or(default_max)))
    }
}

/// Suggestion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestCidrsResponse {
    /// Local suggestions followed by provider-only entries
    pub suggestions: Vec<String>,
    /// More local capacity exists beyond the limit
    pub truncated: bool,
}
