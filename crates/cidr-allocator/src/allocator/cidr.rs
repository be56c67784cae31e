//! CIDR text conversion and interval helpers

use crate::models::{CidrBlock, Interval};
use crate::Result;

/// Parse `A.B.C.D/P` into a normalized block
///
/// Host bits are masked off. Anything that is not four octets in `0..=255`
/// followed by a prefix in `0..=32` is rejected with [`crate::Error::Parse`].
pub fn parse_cidr(text: &str) -> Result<CidrBlock> {
    text.parse()
}

/// Canonical `A.B.C.D/P` text for a block
pub fn format_cidr(block: &CidrBlock) -> String {
    block.to_string()
}

/// Closed-interval overlap test
pub fn intersects(a: &Interval, b: &Interval) -> bool {
    a.intersects(b)
}

/// Smallest multiple of `block_size` that is `>= addr`
///
/// Works in 64 bits so the result may be `2^32`, one past the last address.
pub fn align_up(addr: u64, block_size: u64) -> u64 {
    if block_size == 0 {
        return addr;
    }
    addr + (block_size - addr % block_size) % block_size
}
