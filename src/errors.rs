//! Error types for subnet calculations.

use crate::models::OctetQuad;
use std::fmt;
use thiserror::Error;

/// Which user supplied field a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The host IP address.
    Address,
    /// The subnet mask.
    Mask,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Address => write!(f, "IP address"),
            Field::Mask => write!(f, "subnet mask"),
        }
    }
}

/// Syntax errors in dotted-quad text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The text did not split into exactly four parts on `.`.
    #[error("Invalid {field} '{input}': expected 4 octets, found {count}")]
    PartCount {
        field: Field,
        input: String,
        count: usize,
    },
    /// One part was not a decimal number in 0-255.
    #[error("Invalid {field} part: '{part}'")]
    Octet { field: Field, part: String },
}

impl FormatError {
    /// The substring that made the input invalid.
    pub fn offending(&self) -> &str {
        match self {
            FormatError::PartCount { input, .. } => input,
            FormatError::Octet { part, .. } => part,
        }
    }
}

/// Errors raised while parsing, validating or deriving subnet values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error(transparent)]
    Format(#[from] FormatError),
    /// A one-bit follows a zero-bit somewhere in the mask.
    #[error("Subnet mask {mask} is not contiguous")]
    NotContiguous { mask: OctetQuad },
    /// `network + 1` or `broadcast - 1` would leave the 32-bit address space.
    #[error("Host range of {network} with mask {mask} is outside the IPv4 address space")]
    RangeOverflow { network: OctetQuad, mask: OctetQuad },
    /// Subnet enumeration was asked to use a mask without a prefix length.
    #[error("Invalid subnet mask {mask}: no prefix length")]
    InvalidMask { mask: OctetQuad },
    /// A prefix length outside 0-32.
    #[error("Prefix length /{0} is too long")]
    PrefixTooLong(u8),
}

/// Errors reading the runtime configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown output format '{0}' (expected text, csv or json)")]
    OutputFormat(String),
    #[error("Invalid value '{value}' for {name} (expected true or false)")]
    Bool { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_messages() {
        let e = FormatError::Octet {
            field: Field::Address,
            part: "300".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid IP address part: '300'");
        assert_eq!(e.offending(), "300");

        let e = FormatError::PartCount {
            field: Field::Mask,
            input: "255.255".to_string(),
            count: 2,
        };
        assert_eq!(
            e.to_string(),
            "Invalid subnet mask '255.255': expected 4 octets, found 2"
        );
        assert_eq!(e.offending(), "255.255");
    }

    #[test]
    fn test_subnet_error_wraps_format_error() {
        let inner = FormatError::Octet {
            field: Field::Mask,
            part: "x".to_string(),
        };
        let e: SubnetError = inner.clone().into();
        assert_eq!(e, SubnetError::Format(inner.clone()));
        assert_eq!(e.to_string(), inner.to_string());
    }

    #[test]
    fn test_not_contiguous_message() {
        let e = SubnetError::NotContiguous {
            mask: OctetQuad::new(255, 0, 255, 0),
        };
        assert_eq!(e.to_string(), "Subnet mask 255.0.255.0 is not contiguous");
    }
}
