//! Network, broadcast and host range derivation.
//!
//! All arithmetic is done on `u64` so nothing can wrap past the 32-bit address
//! space; results that would leave it are reported as errors.

use crate::errors::SubnetError;
use crate::models::{from_int, to_int, Mask, OctetQuad, Prefix};
use serde::Serialize;

/// Largest IPv4 address as a `u64`.
const ADDRESS_MAX: u64 = u32::MAX as u64;

/// Prefixes longer than this have no usable hosts.
const MAX_HOST_PREFIX: u8 = 30;

/// Clear the host bits of `address`.
pub fn network_address(address: OctetQuad, mask: OctetQuad) -> OctetQuad {
    from_int(to_int(address) & to_int(mask))
}

/// Set the host bits of `network`.
pub fn broadcast_address(network: OctetQuad, mask: OctetQuad) -> OctetQuad {
    from_int(to_int(network) | !to_int(mask))
}

/// Calculate the number of usable host addresses in a network.
///
/// Network and broadcast addresses are not usable, so this is `2^(32-prefix) - 2`,
/// clamped at 0 for `/31` and `/32`.
pub fn number_of_hosts(prefix: Prefix) -> u64 {
    prefix.block_size().saturating_sub(2)
}

/// Usable host addresses between a network and its broadcast address.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostRange {
    /// `/31` and `/32` networks have no usable hosts.
    Empty,
    /// First and last usable address, inclusive.
    Hosts { first: OctetQuad, last: OctetQuad },
}

impl HostRange {
    pub fn is_empty(&self) -> bool {
        matches!(self, HostRange::Empty)
    }

    /// Number of addresses in the range.
    pub fn count(&self) -> u64 {
        match self {
            HostRange::Empty => 0,
            HostRange::Hosts { first, last } => to_int(*last) as u64 - to_int(*first) as u64 + 1,
        }
    }
}

impl std::fmt::Display for HostRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HostRange::Empty => write!(f, "none"),
            HostRange::Hosts { first, last } => write!(f, "{first} - {last}"),
        }
    }
}

/// Derive the usable host range of a network.
///
/// # Arguments
/// * `network` - A network address, i.e. host bits already cleared
/// * `mask` - The validated mask of that network
///
/// # Returns
/// * `Ok(HostRange::Empty)` - For `/31` and `/32`
/// * `Ok(HostRange::Hosts)` - `network + 1` through `broadcast - 1`
/// * `Err(SubnetError::RangeOverflow)` - `network + 1` is past `255.255.255.255`,
///   `broadcast - 1` is below `0.0.0.0`, or the range would be inverted because
///   `network` still has host bits set
pub fn host_range(network: OctetQuad, mask: Mask) -> Result<HostRange, SubnetError> {
    if mask.prefix().length() > MAX_HOST_PREFIX {
        log::debug!("host_range({network}{}) has no usable hosts", mask.prefix());
        return Ok(HostRange::Empty);
    }

    let overflow = || SubnetError::RangeOverflow {
        network,
        mask: mask.quad(),
    };
    let broadcast = to_int(broadcast_address(network, mask.quad())) as u64;
    let first = to_int(network) as u64 + 1;
    let last = broadcast.checked_sub(1).ok_or_else(overflow)?;
    if first > ADDRESS_MAX || first > last {
        log::warn!("host_range({network}, {mask}) first={first:#x} last={last:#x} out of range");
        return Err(overflow());
    }

    Ok(HostRange::Hosts {
        first: from_int(first as u32),
        last: from_int(last as u32),
    })
}
