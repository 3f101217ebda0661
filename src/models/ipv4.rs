//! IPv4 address parsing, validation and conversions.
//!
//! Addresses are held as [`Ipv4Addr`]. Parsing is stricter than "any four
//! numbers" but looser than [`Ipv4Addr::from_str`]: octets may carry leading
//! zeros (`010` is ten, never octal) as long as they have at most three digits.

use super::IpError;
use itertools::Itertools;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Regex matching four dot-separated groups of one to three ASCII digits.
static IPV4_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_ipv4_regex() -> &'static Regex {
    IPV4_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex")
    })
}

/// Returns `true` if `input` is a valid dotted-quad IPv4 address.
///
/// # Examples
/// ```
/// use cidr_tools::models::is_valid_ipv4;
/// assert!(is_valid_ipv4("192.168.1.1"));
/// assert!(!is_valid_ipv4("256.1.1.1"));
/// ```
pub fn is_valid_ipv4(input: &str) -> bool {
    parse_ipv4(input).is_ok()
}

/// Parse a dotted-quad IPv4 address.
///
/// Surrounding whitespace is ignored. Each octet is compared numerically
/// against 255, so `00` and `010` are accepted.
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr, IpError> {
    let input = input.trim();
    let caps = get_ipv4_regex()
        .captures(input)
        .ok_or_else(|| IpError::InvalidAddress(input.to_string()))?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let text = &caps[i + 1];
        // at most three digits, always fits u16
        let value: u16 = text
            .parse()
            .map_err(|_| IpError::InvalidAddress(input.to_string()))?;
        *octet = u8::try_from(value).map_err(|_| IpError::OctetOutOfRange {
            addr: input.to_string(),
            octet: text.to_string(),
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Convert an address to its 32-bit integer value.
pub fn ipv4_to_u32(addr: Ipv4Addr) -> u32 {
    let [a, b, c, d] = addr.octets();
    (a as u32) << 24 | (b as u32) << 16 | (c as u32) << 8 | d as u32
}

/// Convert a 32-bit integer to an address, most significant octet first.
pub fn u32_to_ipv4(value: u32) -> Ipv4Addr {
    let mut rest = value;
    let mut octets = [0u8; 4];
    for octet in octets.iter_mut().rev() {
        *octet = (rest % 256) as u8;
        rest /= 256;
    }
    Ipv4Addr::from(octets)
}

/// Parse a decimal address value in `0..=4294967295`.
pub fn parse_decimal(input: &str) -> Result<u32, IpError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IpError::InvalidDecimal(input.to_string()));
    }
    input
        .parse::<u32>()
        .map_err(|_| IpError::InvalidDecimal(input.to_string()))
}

/// Render an address as four dot-separated 8-bit binary groups.
///
/// # Examples
/// ```
/// use cidr_tools::models::to_binary;
/// use std::net::Ipv4Addr;
/// assert_eq!(
///     to_binary(Ipv4Addr::new(192, 168, 1, 1)),
///     "11000000.10101000.00000001.00000001"
/// );
/// ```
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}
