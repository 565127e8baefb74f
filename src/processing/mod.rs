//! Calculator operations.
//!
//! One module per operation:
//! - [`binary`] - binary rendering of an address
//! - [`subnet_info`] - subnet metadata from CIDR input
//! - [`netmask`] - mask conversion and network/broadcast derivation
//! - [`subdivide`] - subdivision of a network into smaller subnets
//! - [`block_size`] - block size and subnet count for a prefix length

mod binary;
mod block_size;
mod netmask;
mod subdivide;
mod subnet_info;

// Re-export public functions and report types
pub use binary::ip_to_binary;
pub use block_size::{block_size_and_subnets, BlockReport};
pub use netmask::{cidr_to_mask, network_and_broadcast, NetworkReport};
pub use subdivide::{calculate_subnets, subnet_blocks, SubdivisionReport, SubnetBlocks, SubnetRow};
pub use subnet_info::{subnet_info, SubnetReport};
