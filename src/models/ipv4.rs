//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for representing networks in CIDR notation,
//! along with the parsing and bit-arithmetic primitives the calculator
//! operations are built on.

use crate::models::CalcError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
}

/// Parse a dotted-quad string into an [`Ipv4Addr`].
///
/// The string must be exactly four dot-separated base-10 integers, each in
/// 0-255. Anything else fails with [`CalcError::InvalidAddressFormat`].
///
/// # Examples
/// ```
/// use subnet_calculator::parse_addr;
/// use std::net::Ipv4Addr;
/// assert_eq!(parse_addr("192.168.1.1").unwrap(), Ipv4Addr::new(192, 168, 1, 1));
/// ```
pub fn parse_addr(input: &str) -> Result<Ipv4Addr, CalcError> {
    let input = input.trim();
    let caps = DOTTED_QUAD
        .captures(input)
        .ok_or_else(|| CalcError::InvalidAddressFormat(input.to_string()))?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps[i + 1]
            .parse()
            .map_err(|_| CalcError::InvalidAddressFormat(input.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_to_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefixLength(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Recover the prefix length from a subnet mask.
///
/// The mask must be a contiguous run of 1-bits followed by 0-bits; anything
/// else fails with [`CalcError::InvalidMaskFormat`].
pub fn mask_to_prefix(mask: u32) -> Result<u8, CalcError> {
    let len = mask.leading_ones() as u8;
    if prefix_to_mask(len)? != mask {
        return Err(CalcError::InvalidMaskFormat(
            Ipv4Addr::from(mask).to_string(),
        ));
    }
    Ok(len)
}

/// Parse a mask given either as a bare prefix length ("24") or in dotted
/// form ("255.255.255.0").
///
/// Both failure modes report [`CalcError::InvalidMaskFormat`].
pub fn parse_mask(input: &str) -> Result<u8, CalcError> {
    let input = input.trim();
    if let Ok(len) = input.parse::<u8>() {
        if len > MAX_LENGTH {
            return Err(CalcError::InvalidMaskFormat(input.to_string()));
        }
        return Ok(len);
    }
    let mask = parse_addr(input).map_err(|_| CalcError::InvalidMaskFormat(input.to_string()))?;
    mask_to_prefix(u32::from(mask))
}

/// Get the network address for a given IP and prefix length (host bits
/// cleared).
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CalcError> {
    let mask = prefix_to_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length (host
/// bits set).
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CalcError> {
    let mask = prefix_to_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// IPv4 network in CIDR notation.
///
/// The address part may carry host bits; [`Ipv4::network`] and
/// [`Ipv4::broadcast`] normalize as needed.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The part after the slash may be a prefix length or a dotted mask.
    /// Any structural problem fails with [`CalcError::InvalidNetworkFormat`].
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CalcError> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, mask_part) = addr_cidr
            .split_once('/')
            .ok_or_else(|| CalcError::InvalidNetworkFormat(addr_cidr.to_string()))?;
        let addr = parse_addr(addr_part)
            .map_err(|_| CalcError::InvalidNetworkFormat(addr_cidr.to_string()))?;
        let mask = parse_mask(mask_part)
            .map_err(|_| CalcError::InvalidNetworkFormat(addr_cidr.to_string()))?;
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn network(&self) -> Ipv4Addr {
        network_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating network address for {self}: {e}"))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {self}: {e}"))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr() {
        assert_eq!(
            parse_addr("192.168.1.1").unwrap(),
            Ipv4Addr::new(192, 168, 1, 1)
        );
        assert_eq!(parse_addr("0.0.0.0").unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(
            parse_addr(" 10.0.0.1 ").unwrap(),
            Ipv4Addr::new(10, 0, 0, 1)
        );

        assert_eq!(
            parse_addr("192.168.1").unwrap_err(),
            CalcError::InvalidAddressFormat("192.168.1".to_string())
        );
        assert!(parse_addr("192.168.1.256").is_err());
        assert!(parse_addr("192.168.1.1.5").is_err());
        assert!(parse_addr("a.b.c.d").is_err());
        assert!(parse_addr("192.168.-1.1").is_err());
        assert!(parse_addr("").is_err());
    }

    #[test]
    fn test_prefix_to_mask() {
        assert_eq!(prefix_to_mask(0).unwrap(), 0x00000000);
        assert_eq!(prefix_to_mask(8).unwrap(), 0xFF000000);
        assert_eq!(prefix_to_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(prefix_to_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(prefix_to_mask(32).unwrap(), 0xFFFFFFFF);

        assert_eq!(
            prefix_to_mask(33).unwrap_err(),
            CalcError::InvalidPrefixLength(33)
        );
    }

    #[test]
    fn test_mask_to_prefix() {
        assert_eq!(mask_to_prefix(0x00000000).unwrap(), 0);
        assert_eq!(mask_to_prefix(0xFF000000).unwrap(), 8);
        assert_eq!(mask_to_prefix(0xFFFFFF00).unwrap(), 24);
        assert_eq!(mask_to_prefix(0xFFFFFFFF).unwrap(), 32);

        // 255.0.255.0 has a hole in the run of ones
        assert!(mask_to_prefix(0xFF00FF00).is_err());
        assert!(mask_to_prefix(0x00000001).is_err());
    }

    #[test]
    fn test_prefix_mask_roundtrip() {
        for len in 0..=MAX_LENGTH {
            let mask = prefix_to_mask(len).unwrap();
            assert_eq!(mask_to_prefix(mask).unwrap(), len);
        }
    }

    #[test]
    fn test_parse_mask() {
        assert_eq!(parse_mask("24").unwrap(), 24);
        assert_eq!(parse_mask("255.255.255.0").unwrap(), 24);
        assert_eq!(parse_mask("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_mask("255.255.255.255").unwrap(), 32);

        assert_eq!(
            parse_mask("33").unwrap_err(),
            CalcError::InvalidMaskFormat("33".to_string())
        );
        assert!(parse_mask("255.255.0.255").is_err());
        assert!(parse_mask("mask").is_err());
    }

    #[test]
    fn test_network_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(network_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(network_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(network_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(
            network_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 42)
        );

        assert!(network_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );

        assert!(broadcast_addr(Ipv4Addr::new(255, 255, 255, 255), 33).is_err());
    }

    #[test]
    fn test_network_broadcast_host_bits() {
        // network and broadcast differ exactly in the host bits
        let ip = Ipv4Addr::new(172, 16, 37, 201);
        for len in 0..=MAX_LENGTH {
            let mask = prefix_to_mask(len).unwrap();
            let net = u32::from(network_addr(ip, len).unwrap());
            let bcast = u32::from(broadcast_addr(ip, len).unwrap());
            assert_eq!(net & !mask, 0);
            assert_eq!(bcast & !mask, !mask);
            assert_eq!(net & mask, bcast & mask);
        }
    }

    #[test]
    fn test_ipv4_new() {
        let ip = Ipv4::new("10.1.1.0/28").unwrap();
        assert_eq!(ip.addr, Ipv4Addr::new(10, 1, 1, 0));
        assert_eq!(ip.mask, 28);

        // dotted mask form
        let ip = Ipv4::new("192.168.1.10/255.255.255.0").unwrap();
        assert_eq!(ip.mask, 24);

        assert_eq!(
            Ipv4::new("1.2.3.4").unwrap_err(),
            CalcError::InvalidNetworkFormat("1.2.3.4".to_string())
        );
        assert!(Ipv4::new("1.2.3.4/33").is_err());
        assert!(Ipv4::new("1.2.3/24").is_err());
        assert!(Ipv4::new("1.2.3.4/24/8").is_err());
    }

    #[test]
    fn test_ipv4_network_broadcast() {
        let ip = Ipv4::new("192.168.1.77/24").unwrap();
        assert_eq!(ip.network(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(ip.broadcast(), Ipv4Addr::new(192, 168, 1, 255));

        let ip = Ipv4::new("192.168.1.0/8").unwrap();
        assert_eq!(ip.network(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(ip.broadcast(), Ipv4Addr::new(192, 255, 255, 255));
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_ipv4_display() {
        let ip = Ipv4::new("10.18.126.0/24").unwrap();
        assert_eq!(ip.to_string(), "10.18.126.0/24");
    }
}
