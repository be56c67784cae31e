//! CIDR block and address interval models

use crate::{Error, Result};
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Closed range of IPv4 addresses `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    /// Create an interval, swapping the bounds if given in reverse
    pub fn new(start: u32, end: u32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Two closed intervals overlap unless one ends strictly before the other begins
    pub fn intersects(&self, other: &Interval) -> bool {
        !(self.end < other.start || other.end < self.start)
    }

    /// Whether `other` lies entirely inside this interval
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Number of addresses covered (up to 2^32)
    pub fn address_count(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }
}

/// A normalized IPv4 CIDR block
///
/// Host bits are always masked off, so `start()` is the network address and
/// the block covers exactly `size()` addresses from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CidrBlock {
    net: Ipv4Net,
}

impl CidrBlock {
    /// Create a block from any address inside it and a prefix length
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<Self> {
        let net = Ipv4Net::new(addr, prefix_len).map_err(|_| {
            Error::InvalidRequest(format!("prefix length {} exceeds 32", prefix_len))
        })?;
        Ok(Self::from_net(net))
    }

    /// Wrap an `Ipv4Net`, masking off host bits
    pub fn from_net(net: Ipv4Net) -> Self {
        Self { net: net.trunc() }
    }

    /// Block whose network address is `start`
    ///
    /// Callers must pass a `start` aligned to `prefix_len`; unaligned values
    /// are masked down.
    pub(crate) fn from_start(start: u32, prefix_len: u8) -> Self {
        Self::from_net(Ipv4Net::new_assert(Ipv4Addr::from(start), prefix_len.min(32)))
    }

    /// Network address as an integer
    pub fn start(&self) -> u32 {
        u32::from(self.net.network())
    }

    /// Last address in the block as an integer
    pub fn end(&self) -> u32 {
        // start + size - 1 always fits in 32 bits for an aligned block
        (u64::from(self.start()) + self.size() - 1) as u32
    }

    /// Prefix length (0..=32)
    pub fn prefix_len(&self) -> u8 {
        self.net.prefix_len()
    }

    /// Number of addresses in the block; `/0` yields 2^32
    pub fn size(&self) -> u64 {
        block_size(self.prefix_len())
    }

    /// Network address
    pub fn network(&self) -> Ipv4Addr {
        self.net.network()
    }

    /// Underlying `ipnet` representation
    pub fn as_net(&self) -> Ipv4Net {
        self.net
    }

    /// Covered address range
    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start(),
            end: self.end(),
        }
    }

    /// Whether this block overlaps `other` in at least one address
    pub fn intersects(&self, other: &CidrBlock) -> bool {
        self.interval().intersects(&other.interval())
    }

    /// Whether `other` lies entirely inside this block
    pub fn contains_block(&self, other: &CidrBlock) -> bool {
        self.interval().contains(&other.interval())
    }

    /// Whether the network address sits on a `/prefix_len` boundary
    pub fn is_aligned_to(&self, prefix_len: u8) -> bool {
        prefix_len <= 32 && u64::from(self.start()) % block_size(prefix_len) == 0
    }
}

/// Addresses in a block of the given prefix length, computed in 64 bits
pub fn block_size(prefix_len: u8) -> u64 {
    1u64 << (32 - u32::from(prefix_len.min(32)))
}

impl FromStr for CidrBlock {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::parse(s, "empty input"));
        }
        if !trimmed.contains('/') {
            return Err(Error::parse(s, "missing prefix length"));
        }
        let net = Ipv4Net::from_str(trimmed).map_err(|e| Error::parse(s, e))?;
        Ok(Self::from_net(net))
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix_len())
    }
}

impl TryFrom<String> for CidrBlock {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CidrBlock> for String {
    fn from(block: CidrBlock) -> Self {
        block.to_string()
    }
}

impl From<Ipv4Net> for CidrBlock {
    fn from(net: Ipv4Net) -> Self {
        Self::from_net(net)
    }
}

impl From<CidrBlock> for Ipv4Net {
    fn from(block: CidrBlock) -> Self {
        block.net
    }
}
