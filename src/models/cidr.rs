//! CIDR block parsing and block level operations.

use super::{
    broadcast_addr, cut_addr, get_cidr_mask, ipv4_to_u32, parse_ipv4, parse_prefix, IpError,
    MAX_LENGTH,
};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 CIDR block, an address with a prefix length (0-32).
///
/// The address is kept as given, host bits included; use [`Cidr::network`]
/// or [`Cidr::normalized`] for the block's own address. Fields are private so
/// every value goes through [`Cidr::new`] or [`Cidr::from_parts`] and the
/// prefix is always in range.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}

impl Cidr {
    /// Create a new [`Cidr`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Cidr, IpError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(IpError::InvalidCidr(addr_cidr.to_string()));
        }
        // parse_ipv4 and parse_prefix trim their input, no padding around the slash
        if parts[0].trim() != parts[0] {
            return Err(IpError::InvalidAddress(parts[0].to_string()));
        }
        let addr = parse_ipv4(parts[0])?;
        if parts[1].starts_with('/') || parts[1].trim() != parts[1] {
            return Err(IpError::InvalidPrefix(parts[1].to_string()));
        }
        let prefix = parse_prefix(parts[1])?;
        Ok(Cidr { addr, prefix })
    }

    /// Build a block from an address and prefix length.
    pub fn from_parts(addr: Ipv4Addr, prefix: u8) -> Result<Cidr, IpError> {
        if prefix > MAX_LENGTH {
            return Err(IpError::InvalidPrefix(prefix.to_string()));
        }
        Ok(Cidr { addr, prefix })
    }

    /// The address as given, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Subnet mask as u32.
    pub fn mask(&self) -> u32 {
        // prefix is checked on construction
        get_cidr_mask(self.prefix).unwrap_or(u32::MAX)
    }

    /// Wildcard (inverted) mask as u32.
    pub fn wildcard(&self) -> u32 {
        !self.mask()
    }

    /// Get the lowest (network) address in the block.
    pub fn network(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.prefix).unwrap_or(self.addr)
    }

    /// Get the highest (broadcast) address in the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix).unwrap_or(self.addr)
    }

    /// Number of addresses in the block, `2^(32 - prefix)`.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix.min(MAX_LENGTH))
    }

    /// The same block with host bits cleared.
    pub fn normalized(&self) -> Cidr {
        Cidr {
            addr: self.network(),
            prefix: self.prefix,
        }
    }

    /// Checks if `addr` falls inside the block.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        ipv4_to_u32(addr) & self.mask() == ipv4_to_u32(self.network())
    }
}

impl FromStr for Cidr {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
