//! Dotted-quad IPv4 values and the integer codec.
//!
//! Provides [`OctetQuad`] for holding a validated address or mask, the
//! [`parse_address`] entry point, and [`to_int`] / [`from_int`] for moving between
//! the four octet form and a single big-endian `u32`.

use crate::errors::{Field, FormatError};
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of bits in an IPv4 address.
pub const MAX_LENGTH: u8 = 32;

/// Number of octets in a dotted quad.
pub const OCTETS: usize = 4;

/// Only plain decimal digits are accepted for an octet (no sign, no spaces).
static OCTET_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_octet_regex() -> &'static Regex {
    OCTET_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Four octets of an IPv4 address or mask, octet 0 first.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct OctetQuad([u8; OCTETS]);

impl OctetQuad {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> OctetQuad {
        OctetQuad([a, b, c, d])
    }

    pub const fn octets(&self) -> [u8; OCTETS] {
        self.0
    }

    /// Pack into a `u32`, see [`to_int`].
    pub fn to_int(self) -> u32 {
        to_int(self)
    }

    /// Unpack from a `u32`, see [`from_int`].
    pub fn from_int(bits: u32) -> OctetQuad {
        from_int(bits)
    }
}

/// Parse a dotted-quad host address such as `192.168.1.10`.
///
/// # Arguments
/// * `text` - The address text, without surrounding whitespace
///
/// # Returns
/// * `Ok(OctetQuad)` - The four octets
/// * `Err(FormatError)` - Wrong number of parts, or a part that is not 0-255
pub fn parse_address(text: &str) -> Result<OctetQuad, FormatError> {
    parse_quad(text, Field::Address)
}

/// Parse dotted-quad text, tagging any error with the field it came from.
pub(crate) fn parse_quad(text: &str, field: Field) -> Result<OctetQuad, FormatError> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != OCTETS {
        log::debug!("parse_quad({text}) found {} parts", parts.len());
        return Err(FormatError::PartCount {
            field,
            input: text.to_string(),
            count: parts.len(),
        });
    }

    let mut octets = [0u8; OCTETS];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = parse_octet(part).ok_or_else(|| FormatError::Octet {
            field,
            part: part.to_string(),
        })?;
    }
    Ok(OctetQuad(octets))
}

fn parse_octet(part: &str) -> Option<u8> {
    if !get_octet_regex().is_match(part) {
        return None;
    }
    // Any digit string too large for u8 is out of range, not a different error.
    part.parse::<u8>().ok()
}

/// Pack four octets into a `u32`, octet 0 in bits 24-31.
pub fn to_int(quad: OctetQuad) -> u32 {
    u32::from_be_bytes(quad.0)
}

/// Unpack a `u32` into four octets, bits 24-31 becoming octet 0.
pub fn from_int(bits: u32) -> OctetQuad {
    OctetQuad(bits.to_be_bytes())
}

impl FromStr for OctetQuad {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl From<Ipv4Addr> for OctetQuad {
    fn from(addr: Ipv4Addr) -> Self {
        OctetQuad(addr.octets())
    }
}

impl From<OctetQuad> for Ipv4Addr {
    fn from(quad: OctetQuad) -> Self {
        Ipv4Addr::from(quad.0)
    }
}

impl std::fmt::Display for OctetQuad {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl Serialize for OctetQuad {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for OctetQuad {
    fn deserialize<D>(deserializer: D) -> Result<OctetQuad, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_address(&s).map_err(de::Error::custom)
    }
}
