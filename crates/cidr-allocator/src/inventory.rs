//! Subnet inventory filtering
//!
//! The allocator never decides which subnets belong to a parent. Every
//! screen that fetches a subnet list narrows it to one VPC here before
//! building an [`crate::AllocationRequest`].

use crate::models::CidrBlock;
use crate::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subnet as fetched from the inventory backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetRecord {
    pub id: Uuid,
    /// CIDR text as stored by the backend
    pub cidr: String,
    /// Owning VPC, if known
    #[serde(default)]
    pub vpc_id: Option<Uuid>,
}

impl SubnetRecord {
    pub fn new(cidr: impl Into<String>, vpc_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cidr: cidr.into(),
            vpc_id,
        }
    }
}

/// Parsed CIDR blocks of the subnets owned by `vpc_id`
///
/// Records of other VPCs and unowned records are left out. A malformed CIDR
/// on an owned record fails the whole call.
pub fn used_blocks_for<'a, I>(vpc_id: Uuid, records: I) -> Result<Vec<CidrBlock>>
where
    I: IntoIterator<Item = &'a SubnetRecord>,
{
    records
        .into_iter()
        .filter(|r| r.vpc_id == Some(vpc_id))
        .map(|r| r.cidr.parse())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_by_vpc() {
        let vpc_a = Uuid::new_v4();
        let vpc_b = Uuid::new_v4();
        let records = vec![
            SubnetRecord::new("10.0.0.0/24", Some(vpc_a)),
            SubnetRecord::new("10.1.0.0/24", Some(vpc_b)),
            SubnetRecord::new("10.0.1.0/24", Some(vpc_a)),
            SubnetRecord::new("10.2.0.0/24", None),
        ];

        let used = used_blocks_for(vpc_a, &records).unwrap();
        let text: Vec<String> = used.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["10.0.0.0/24", "10.0.1.0/24"]);
    }

    #[test]
    fn test_malformed_owned_record_fails() {
        let vpc = Uuid::new_v4();
        let records = vec![
            SubnetRecord::new("10.0.0.0/24", Some(vpc)),
            SubnetRecord::new("10.0.1.0/99", Some(vpc)),
        ];

        assert!(used_blocks_for(vpc, &records).unwrap_err().is_parse());
    }

    #[test]
    fn test_malformed_foreign_record_ignored() {
        let vpc = Uuid::new_v4();
        let records = vec![SubnetRecord::new("garbage", Some(Uuid::new_v4()))];

        assert!(used_blocks_for(vpc, &records).unwrap().is_empty());
    }
}
