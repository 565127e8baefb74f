//! Interactive command-line calculator for IPv4 addressing.
//!
//! The library surface is six stateless operations over dotted-quad and CIDR
//! text:
//! - [`ip_to_binary`] - render an address as dotted binary groups
//! - [`subnet_info`] - network, broadcast and address counts for a subnet
//! - [`cidr_to_mask`] - prefix length to dotted subnet mask
//! - [`network_and_broadcast`] - derive both addresses from address + mask
//! - [`calculate_subnets`] - partition a network into smaller subnets
//! - [`block_size_and_subnets`] - block size and count for a prefix length
//!
//! Every operation either returns its report or fails with one
//! [`CalcError`] kind; nothing is shared between calls. The interactive
//! menu in [`menu`] is a thin adapter over these calls.

pub mod menu;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{
    broadcast_addr, mask_to_prefix, network_addr, parse_addr, parse_mask, prefix_to_mask,
    CalcError, Ipv4, MAX_LENGTH,
};
pub use processing::{
    block_size_and_subnets, calculate_subnets, cidr_to_mask, ip_to_binary, network_and_broadcast,
    subnet_blocks, subnet_info, BlockReport, NetworkReport, SubdivisionReport, SubnetBlocks,
    SubnetReport, SubnetRow,
};
