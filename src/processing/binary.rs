//! Binary rendering of IPv4 addresses.

use crate::models::{parse_addr, CalcError};
use itertools::Itertools;

/// Render a dotted-quad address as four 8-bit binary groups joined by dots.
///
/// # Examples
/// ```
/// use subnet_calculator::ip_to_binary;
/// assert_eq!(
///     ip_to_binary("192.168.1.1").unwrap(),
///     "11000000.10101000.00000001.00000001"
/// );
/// ```
pub fn ip_to_binary(input: &str) -> Result<String, CalcError> {
    let addr = parse_addr(input)?;
    Ok(addr
        .octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join("."))
}
