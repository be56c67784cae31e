//! Aligned free-block enumeration
//!
//! Walks `/prefix_len` boundaries inside the parent block in address order
//! and emits every candidate that collides with no used block. Used blocks
//! are coalesced into a sorted disjoint union first, so a candidate that hits
//! one lets the cursor jump straight past it to the next aligned boundary.

use super::cidr::align_up;
use super::merge::merge_with_provider;
use crate::config::AllocatorConfig;
use crate::dto::{SuggestCidrsDto, SuggestCidrsResponse};
use crate::models::{block_size, AllocationRequest, CidrBlock, SuggestionSet};
use crate::{Error, Result};
use tracing::{debug, instrument, warn};

/// Compute up to `max_suggestions` free, aligned blocks inside the parent
///
/// Returns an empty set when the requested block is larger than the parent
/// or no aligned slot is free. Fails only when `prefix_len > 32`.
#[instrument(skip_all, fields(parent = %request.parent, prefix_len = request.prefix_len))]
pub fn suggest(request: &AllocationRequest) -> Result<SuggestionSet> {
    if request.prefix_len > 32 {
        return Err(Error::InvalidRequest(format!(
            "prefix length {} exceeds 32",
            request.prefix_len
        )));
    }

    let parent = request.parent;
    if request.prefix_len < parent.prefix_len() {
        debug!(
            parent_prefix = parent.prefix_len(),
            "Requested block is larger than parent, no suggestions"
        );
        return Ok(SuggestionSet::default());
    }

    let size = block_size(request.prefix_len);
    let parent_end = u64::from(parent.end());
    let used = coalesce(&parent, &request.used);

    let mut result = SuggestionSet::default();
    let mut cursor = align_up(u64::from(parent.start()), size);
    let mut next_used = 0;

    while cursor + size - 1 <= parent_end {
        let candidate_end = cursor + size - 1;

        // Skip used ranges that end before this candidate
        while next_used < used.len() && used[next_used].1 < cursor {
            next_used += 1;
        }

        if let Some(&(used_start, used_end)) = used.get(next_used) {
            if used_start <= candidate_end {
                cursor = align_up(used_end + 1, size);
                continue;
            }
        }

        if result.suggestions.len() >= request.max_suggestions {
            result.truncated = true;
            break;
        }

        // cursor <= parent_end <= u32::MAX inside the loop
        result
            .suggestions
            .push(CidrBlock::from_start(cursor as u32, request.prefix_len));
        cursor += size;
    }

    debug!(
        found = result.suggestions.len(),
        truncated = result.truncated,
        "Suggestion scan complete"
    );

    Ok(result)
}

/// Sort used blocks and merge overlapping or adjacent ones into `(start, end)` ranges
fn coalesce(parent: &CidrBlock, used: &[CidrBlock]) -> Vec<(u64, u64)> {
    let mut ranges: Vec<(u64, u64)> = used
        .iter()
        .inspect(|block| {
            if !parent.contains_block(block) {
                warn!(used = %block, "Used block is not inside the parent block");
            }
        })
        .map(|block| (u64::from(block.start()), u64::from(block.end())))
        .collect();
    ranges.sort_unstable();

    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Shared suggestion entry point for every screen that carves subnets
///
/// Holds the allocator configuration; clone freely.
#[derive(Debug, Clone, Default)]
pub struct SubnetPlanner {
    config: AllocatorConfig,
}

impl SubnetPlanner {
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Create a planner from environment variables
    pub fn from_env() -> Self {
        Self::new(AllocatorConfig::from_env())
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// See [`suggest`]
    pub fn suggest(&self, request: &AllocationRequest) -> Result<SuggestionSet> {
        suggest(request)
    }

    /// Offered prefix lengths that fit inside `parent`, smallest first
    pub fn prefix_options(&self, parent: &CidrBlock) -> Vec<u8> {
        let mut options: Vec<u8> = self
            .config
            .offered_prefixes
            .iter()
            .copied()
            .filter(|p| *p <= 32 && *p >= parent.prefix_len())
            .collect();
        options.sort_unstable();
        options.dedup();
        options
    }

    /// Text-in, text-out suggestion run used by the form layer
    ///
    /// Parse failures in the parent or any used CIDR are returned as
    /// [`Error::Parse`] instead of an empty list.
    pub fn suggest_cidrs(&self, dto: &SuggestCidrsDto) -> Result<SuggestCidrsResponse> {
        let request = dto.to_request(self.config.max_suggestions)?;
        let local = suggest(&request)?;

        Ok(SuggestCidrsResponse {
            suggestions: merge_with_provider(&local.suggestions, &dto.provider_cidrs),
            truncated: local.truncated,
        })
    }
}
