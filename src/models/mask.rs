//! Subnet masks and prefix lengths.

use super::ipv4::{from_int, parse_quad, to_int, OctetQuad, MAX_LENGTH};
use crate::errors::{Field, FormatError, SubnetError};
use serde::Serialize;

/// Count of leading one-bits in a contiguous mask, 0-32.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Serialize)]
#[serde(transparent)]
pub struct Prefix(u8);

impl Prefix {
    /// Checked constructor, rejects lengths above 32.
    pub fn new(len: u8) -> Result<Prefix, SubnetError> {
        if len > MAX_LENGTH {
            Err(SubnetError::PrefixTooLong(len))
        } else {
            Ok(Prefix(len))
        }
    }

    pub fn length(self) -> u8 {
        self.0
    }

    /// Number of host bits, `32 - len`.
    pub fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }

    /// Addresses covered by one network of this size. `/0` is `2^32`, hence `u64`.
    pub fn block_size(self) -> u64 {
        1u64 << self.host_bits()
    }

    /// The canonical mask for this length as a `u32`.
    ///
    /// # Examples
    /// ```
    /// use subnet_calc::models::Prefix;
    /// assert_eq!(Prefix::new(24).unwrap().mask_bits(), 0xFFFFFF00);
    /// ```
    pub fn mask_bits(self) -> u32 {
        let all_bits = u32::MAX as u64;
        let right_len = self.host_bits();
        ((all_bits >> right_len) << right_len) as u32
    }

    /// The canonical mask for this length.
    pub fn mask(self) -> OctetQuad {
        from_int(self.mask_bits())
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "/{}", self.0)
    }
}

/// Parse dotted-quad mask text. Syntax rules match [`super::parse_address`];
/// contiguity is checked separately by [`prefix_length`].
pub fn parse_mask(text: &str) -> Result<OctetQuad, FormatError> {
    parse_quad(text, Field::Mask)
}

/// Derive the prefix length of a mask.
///
/// Bits are read from the most significant down. Once a zero-bit is seen every
/// remaining bit must be zero, otherwise the mask is rejected.
///
/// # Returns
/// * `Ok(Prefix)` - `0.0.0.0` gives `/0`, `255.255.255.255` gives `/32`
/// * `Err(SubnetError::NotContiguous)` - a one-bit follows a zero-bit
pub fn prefix_length(mask: OctetQuad) -> Result<Prefix, SubnetError> {
    let bits = to_int(mask);
    let ones = bits.leading_ones();
    // Shifting out the leading ones must leave nothing behind.
    let rest = bits.checked_shl(ones).unwrap_or(0);
    if rest != 0 {
        log::debug!("prefix_length({mask}) stray bits after /{ones}: {rest:#010x}");
        return Err(SubnetError::NotContiguous { mask });
    }
    Ok(Prefix(ones as u8))
}

/// A validated subnet mask together with its prefix length.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize)]
pub struct Mask {
    quad: OctetQuad,
    prefix: Prefix,
}

impl Mask {
    /// Parse and validate mask text in one step.
    pub fn parse(text: &str) -> Result<Mask, SubnetError> {
        let quad = parse_mask(text)?;
        Mask::try_from(quad)
    }

    pub fn quad(&self) -> OctetQuad {
        self.quad
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn bits(&self) -> u32 {
        to_int(self.quad)
    }
}

impl TryFrom<OctetQuad> for Mask {
    type Error = SubnetError;

    fn try_from(quad: OctetQuad) -> Result<Self, Self::Error> {
        let prefix = prefix_length(quad)?;
        Ok(Mask { quad, prefix })
    }
}

impl From<Prefix> for Mask {
    fn from(prefix: Prefix) -> Self {
        Mask {
            quad: prefix.mask(),
            prefix,
        }
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.quad)
    }
}
