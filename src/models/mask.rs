//! Subnet mask and prefix length arithmetic.

use super::{ipv4_to_u32, parse_ipv4, IpError};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_tools::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, IpError> {
    if len > MAX_LENGTH {
        Err(IpError::InvalidPrefix(len.to_string()))
    } else {
        // shift in u64 so /0 never shifts a u32 by 32
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, IpError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(ipv4_to_u32(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, IpError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = ipv4_to_u32(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Parse a prefix length such as `24` or `/24`.
///
/// Like octets, up to three digits are read as decimal and range checked,
/// so `024` is 24 and `033` is rejected.
pub fn parse_prefix(input: &str) -> Result<u8, IpError> {
    let input = input.trim();
    let digits = input.strip_prefix('/').unwrap_or(input);
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IpError::InvalidPrefix(input.to_string()));
    }
    match digits.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(IpError::InvalidPrefix(input.to_string())),
    }
}

/// Count the prefix length of a dotted subnet mask.
///
/// The 1-bits must be contiguous from the most significant bit,
/// `255.0.255.0` is rejected rather than read as /8 or /16.
pub fn mask_to_prefix(mask: Ipv4Addr) -> Result<u8, IpError> {
    let bits = ipv4_to_u32(mask);
    let len = bits.leading_ones() as u8;
    if get_cidr_mask(len)? != bits {
        return Err(IpError::NonContiguousMask(mask.to_string()));
    }
    Ok(len)
}

/// Parse a subnet mask given either dotted (`255.255.255.0`) or as a prefix
/// length (`24`, `/24`), returning the prefix length.
pub fn parse_mask(input: &str) -> Result<u8, IpError> {
    let input = input.trim();
    if input.contains('.') {
        let mask = parse_ipv4(input).map_err(|e| match e {
            IpError::InvalidAddress(_) => IpError::InvalidMask(input.to_string()),
            other => other,
        })?;
        mask_to_prefix(mask)
    } else {
        parse_prefix(input).map_err(|_| IpError::InvalidMask(input.to_string()))
    }
}
