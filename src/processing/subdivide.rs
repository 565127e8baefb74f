//! Subdivision of a network into smaller subnets.

use crate::models::{CalcError, Ipv4, MAX_LENGTH};
use serde::Serialize;
use std::net::Ipv4Addr;

/// One block produced by a subdivision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetRow {
    /// The block in CIDR notation.
    pub subnet: Ipv4,
    /// Block base + 1, with no special case for /31 and /32 blocks.
    pub first_usable: Ipv4Addr,
    /// Block broadcast - 1, with no special case for /31 and /32 blocks.
    pub last_usable: Ipv4Addr,
    /// Highest address in the block.
    pub broadcast: Ipv4Addr,
}

/// Subdivision of a network: 2^(newPrefix-originalPrefix) contiguous blocks
/// in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubdivisionReport {
    pub subnet_count: u64,
    pub subnets: Vec<SubnetRow>,
}

/// Lazy enumeration of the blocks of a subdivision, in ascending order.
///
/// The base cursor is kept as u64 so stepping past 255.255.255.255 after the
/// last block cannot overflow.
pub struct SubnetBlocks {
    base: u64,
    block_size: u64,
    remaining: u64,
    prefix: u8,
}

impl Iterator for SubnetBlocks {
    type Item = SubnetRow;

    fn next(&mut self) -> Option<SubnetRow> {
        if self.remaining == 0 {
            return None;
        }
        let base = self.base as u32;
        let broadcast = (self.base + self.block_size - 1) as u32;
        self.base += self.block_size;
        self.remaining -= 1;
        Some(SubnetRow {
            subnet: Ipv4 {
                addr: Ipv4Addr::from(base),
                mask: self.prefix,
            },
            first_usable: Ipv4Addr::from(base.wrapping_add(1)),
            last_usable: Ipv4Addr::from(broadcast.wrapping_sub(1)),
            broadcast: Ipv4Addr::from(broadcast),
        })
    }
}

/// Enumerate the subnets of `network` re-cut at `new_prefix`, lazily.
///
/// `new_prefix` must be at most 32 and strictly greater than the network's
/// own prefix. Host bits in the network's address are cleared before
/// partitioning.
pub fn subnet_blocks(network: Ipv4, new_prefix: u8) -> Result<SubnetBlocks, CalcError> {
    if new_prefix > MAX_LENGTH {
        return Err(CalcError::InvalidPrefixLength(new_prefix));
    }
    if new_prefix <= network.mask {
        return Err(CalcError::InvalidSubdivision {
            original: network.mask,
            requested: new_prefix,
        });
    }
    Ok(SubnetBlocks {
        base: u32::from(network.network()) as u64,
        block_size: 1u64 << (MAX_LENGTH - new_prefix),
        remaining: 1u64 << (new_prefix - network.mask),
        prefix: new_prefix,
    })
}

/// Calculate all subnets for a given network with a new prefix.
///
/// The full enumeration is materialized; use [`subnet_blocks`] directly to
/// stream very large subdivisions.
pub fn calculate_subnets(network: &str, new_prefix: u8) -> Result<SubdivisionReport, CalcError> {
    let network = Ipv4::new(network)?;
    let blocks = subnet_blocks(network, new_prefix)?;
    let subnet_count = 1u64 << (new_prefix - network.mask);
    log::debug!("calculate_subnets({network}, /{new_prefix}) -> {subnet_count} blocks");
    Ok(SubdivisionReport {
        subnet_count,
        subnets: blocks.collect(),
    })
}
