//! Block size and subnet count for a prefix length.

use crate::models::{CalcError, MAX_LENGTH};
use serde::Serialize;

/// Block size and subnet count for a /prefix block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockReport {
    /// Number of addresses in one /prefix block, 2^(32-prefix).
    pub block_size: u64,
    /// Count of /prefix blocks, also 2^(32-prefix); no parent network is
    /// taken into account.
    pub subnet_count: u64,
}

/// Calculate block size and number of subnets for a given prefix length.
pub fn block_size_and_subnets(prefix: u8) -> Result<BlockReport, CalcError> {
    if prefix > MAX_LENGTH {
        return Err(CalcError::InvalidPrefixLength(prefix));
    }
    let block_size = 1u64 << (MAX_LENGTH - prefix);
    Ok(BlockReport {
        block_size,
        subnet_count: block_size,
    })
}
