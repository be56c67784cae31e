//! Merge local suggestions with provider-reported free blocks

use crate::models::CidrBlock;
use std::collections::HashSet;

/// Append provider-reported CIDRs to the local suggestions
///
/// Provider entries are opaque strings. Local entries always come first and
/// are never dropped; a provider entry is skipped when its exact text is
/// already present.
pub fn merge_with_provider<P, S>(local: &[CidrBlock], provider: P) -> Vec<String>
where
    P: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(local.len());

    let local = local.iter().map(ToString::to_string);
    let provider = provider.into_iter().map(|s| s.as_ref().to_string());

    for cidr in local.chain(provider) {
        if seen.insert(cidr.clone()) {
            merged.push(cidr);
        }
    }

    merged
}
