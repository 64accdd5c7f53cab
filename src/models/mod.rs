//! Domain models for subnet calculations.
//!
//! This module contains the value types everything else is built on:
//! - [`OctetQuad`] - four octet IPv4 address or mask, with the `u32` codec
//! - [`Prefix`] and [`Mask`] - validated subnet masks

mod ipv4;
mod mask;

// Re-export public types
pub use ipv4::{from_int, parse_address, to_int, OctetQuad, MAX_LENGTH, OCTETS};
pub use mask::{parse_mask, prefix_length, Mask, Prefix};
