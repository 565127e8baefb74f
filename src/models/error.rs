//! Error kinds for user-supplied calculator input.

use thiserror::Error;

/// Everything that can go wrong while parsing or deriving addresses.
///
/// All variants are recoverable input errors; the menu prints a message and
/// re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid IPv4 address: {0:?}")]
    InvalidAddressFormat(String),

    #[error("prefix length /{0} is out of range (0-32)")]
    InvalidPrefixLength(u8),

    #[error("invalid subnet mask: {0:?}")]
    InvalidMaskFormat(String),

    #[error("invalid network: {0:?}")]
    InvalidNetworkFormat(String),

    #[error("new prefix /{requested} must be greater than the original prefix /{original}")]
    InvalidSubdivision { original: u8, requested: u8 },
}
