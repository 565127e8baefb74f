//! Subnet metadata derivation from CIDR input.

use crate::models::{CalcError, Ipv4, MAX_LENGTH};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Derived metadata for one subnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetReport {
    /// Lowest address in the block (host bits zero).
    pub network: Ipv4Addr,
    /// Highest address in the block (host bits one).
    pub broadcast: Ipv4Addr,
    /// 2^(32-prefix).
    pub total_addresses: u64,
    /// Always `total_addresses - 2`, with no floor at zero: a /31 reports 0
    /// usable addresses and a /32 reports -1.
    pub usable_addresses: i64,
}

/// Calculate network, broadcast addresses and address counts for a subnet.
///
/// Input is "address/prefix" or "address/mask"; host bits in the address are
/// cleared rather than rejected. Any unparsable input fails with
/// [`CalcError::InvalidNetworkFormat`].
pub fn subnet_info(input: &str) -> Result<SubnetReport, CalcError> {
    let cidr = Ipv4::new(input)?;
    let total = 1u64 << (MAX_LENGTH - cidr.mask);
    log::debug!("subnet_info({input}) -> {}", cidr.network());
    Ok(SubnetReport {
        network: cidr.network(),
        broadcast: cidr.broadcast(),
        total_addresses: total,
        usable_addresses: total as i64 - 2,
    })
}
