//! Error type for address, mask and CIDR validation.

use thiserror::Error;

/// Reasons an address, mask, prefix or CIDR block is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpError {
    #[error("invalid IP address format: '{0}'")]
    InvalidAddress(String),
    #[error("invalid octet '{octet}' in IP address '{addr}' (must be 0-255)")]
    OctetOutOfRange { addr: String, octet: String },
    #[error("invalid CIDR notation: '{0}' (expected A.B.C.D/N)")]
    InvalidCidr(String),
    #[error("invalid prefix length: '{0}' (must be 0-32)")]
    InvalidPrefix(String),
    #[error("invalid subnet mask: '{0}'")]
    InvalidMask(String),
    #[error("subnet mask '{0}' is not contiguous")]
    NonContiguousMask(String),
    #[error("invalid decimal value: '{0}' (must be 0-4294967295)")]
    InvalidDecimal(String),
    #[error("cannot split {cidr} into /{new_prefix} subnets (new prefix must be larger than the current one and at most 32)")]
    SplitPrefix {
        cidr: super::Cidr,
        new_prefix: u8,
    },
}
