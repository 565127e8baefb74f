//! Mask conversion and network/broadcast derivation from an address plus
//! mask.

use crate::models::{broadcast_addr, network_addr, parse_addr, parse_mask, prefix_to_mask, CalcError};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Network and broadcast addresses derived from an address/mask pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkReport {
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
}

/// Convert a CIDR prefix length to a dotted subnet mask.
///
/// # Examples
/// ```
/// use subnet_calculator::cidr_to_mask;
/// assert_eq!(cidr_to_mask(24).unwrap().to_string(), "255.255.255.0");
/// ```
pub fn cidr_to_mask(prefix: u8) -> Result<Ipv4Addr, CalcError> {
    Ok(Ipv4Addr::from(prefix_to_mask(prefix)?))
}

/// Calculate network and broadcast addresses from an IP address and a mask.
///
/// The mask may be dotted ("255.255.255.0") or a bare prefix length ("24").
/// Fails with [`CalcError::InvalidAddressFormat`] or
/// [`CalcError::InvalidMaskFormat`] accordingly.
pub fn network_and_broadcast(addr: &str, mask: &str) -> Result<NetworkReport, CalcError> {
    let addr = parse_addr(addr)?;
    let prefix = parse_mask(mask)?;
    Ok(NetworkReport {
        network: network_addr(addr, prefix)?,
        broadcast: broadcast_addr(addr, prefix)?,
    })
}
