//! Address and CIDR models.
//!
//! This module contains the core types and pure arithmetic:
//! - [`ipv4`] - dotted-quad parsing, integer and binary conversions
//! - [`mask`] - subnet mask and prefix length arithmetic
//! - [`Cidr`] - CIDR block with network, broadcast and membership
//! - [`IpError`] - validation errors

mod cidr;
mod error;
mod ipv4;
mod mask;

// Re-export public types
pub use cidr::Cidr;
pub use error::IpError;
pub use ipv4::{ipv4_to_u32, is_valid_ipv4, parse_decimal, parse_ipv4, to_binary, u32_to_ipv4};
pub use mask::{
    broadcast_addr, cut_addr, get_cidr_mask, mask_to_prefix, parse_mask, parse_prefix,
    MAX_LENGTH,
};
