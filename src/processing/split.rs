//! Splitting a CIDR block into equal sub-blocks.

use crate::models::{ipv4_to_u32, Cidr, IpError, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Lazy, ascending sequence of the sub-blocks of a split.
///
/// Cloning restarts from the current position; a fresh [`split_cidr`] call
/// always starts at the first sub-block.
#[derive(Debug, Clone)]
pub struct CidrSplit {
    base: u64,
    new_prefix: u8,
    index: u64,
    count: u64,
}

impl CidrSplit {
    /// Total number of sub-blocks, `2^(new_prefix - prefix)`.
    pub fn subnet_count(&self) -> u64 {
        self.count
    }

    /// Prefix length of every sub-block.
    pub fn new_prefix(&self) -> u8 {
        self.new_prefix
    }

    fn step(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.new_prefix)
    }
}

impl Iterator for CidrSplit {
    type Item = Cidr;

    fn next(&mut self) -> Option<Cidr> {
        if self.index >= self.count {
            return None;
        }
        // base + index * step stays below 2^32 while index < count
        let addr = self.base + self.index * self.step();
        self.index += 1;
        Cidr::from_parts(Ipv4Addr::from(addr as u32), self.new_prefix).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Split `cidr` into sub-blocks of length `new_prefix`.
///
/// Requires `cidr.prefix() < new_prefix <= 32`. Host bits of `cidr` are ignored,
/// the first sub-block starts at its network address.
///
/// # Examples
/// ```
/// use cidr_tools::models::Cidr;
/// use cidr_tools::processing::split_cidr;
/// let subnets: Vec<String> = split_cidr(&Cidr::new("192.168.1.0/24").unwrap(), 26)
///     .unwrap()
///     .map(|c| c.to_string())
///     .collect();
/// assert_eq!(subnets[1], "192.168.1.64/26");
/// ```
pub fn split_cidr(cidr: &Cidr, new_prefix: u8) -> Result<CidrSplit, IpError> {
    if new_prefix <= cidr.prefix() || new_prefix > MAX_LENGTH {
        return Err(IpError::SplitPrefix {
            cidr: *cidr,
            new_prefix,
        });
    }
    Ok(CidrSplit {
        base: ipv4_to_u32(cidr.network()) as u64,
        new_prefix,
        index: 0,
        count: 1u64 << (new_prefix - cidr.prefix()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_24_into_26() {
        let split = split_cidr(&Cidr::new("192.168.1.0/24").unwrap(), 26).unwrap();
        assert_eq!(split.subnet_count(), 4);
        assert_eq!(split.new_prefix(), 26);
        let subnets: Vec<String> = split.map(|c| c.to_string()).collect();
        assert_eq!(
            subnets,
            vec![
                "192.168.1.0/26",
                "192.168.1.64/26",
                "192.168.1.128/26",
                "192.168.1.192/26"
            ]
        );
    }

    #[test]
    fn test_split_uses_network_address() {
        let subnets: Vec<Cidr> = split_cidr(&Cidr::new("10.1.2.3/23").unwrap(), 24)
            .unwrap()
            .collect();
        assert_eq!(
            subnets,
            vec![
                Cidr::new("10.1.2.0/24").unwrap(),
                Cidr::new("10.1.3.0/24").unwrap()
            ]
        );
    }

    #[test]
    fn test_split_top_of_range() {
        let subnets: Vec<Cidr> = split_cidr(&Cidr::new("255.255.255.252/30").unwrap(), 32)
            .unwrap()
            .collect();
        assert_eq!(subnets.len(), 4);
        assert_eq!(subnets[3], Cidr::new("255.255.255.255/32").unwrap());
    }

    #[test]
    fn test_split_lazy_and_restartable() {
        let mut split = split_cidr(&Cidr::new("0.0.0.0/0").unwrap(), 32).unwrap();
        assert_eq!(split.subnet_count(), 4294967296);
        let restart = split.clone();
        assert_eq!(split.next(), Some(Cidr::new("0.0.0.0/32").unwrap()));
        assert_eq!(split.next(), Some(Cidr::new("0.0.0.1/32").unwrap()));
        assert_eq!(
            restart.take(1).collect::<Vec<_>>(),
            vec![Cidr::new("0.0.0.0/32").unwrap()]
        );

        let split = split_cidr(&Cidr::new("10.0.0.0/8").unwrap(), 16).unwrap();
        assert_eq!(split.size_hint(), (256, Some(256)));
        assert_eq!(
            split.last(),
            Some(Cidr::new("10.255.0.0/16").unwrap())
        );
    }

    #[test]
    fn test_split_invalid_prefix() {
        let cidr = Cidr::new("192.168.1.0/24").unwrap();
        assert_eq!(
            split_cidr(&cidr, 24).unwrap_err(),
            IpError::SplitPrefix {
                cidr,
                new_prefix: 24
            }
        );
        assert!(split_cidr(&cidr, 16).is_err());
        assert!(split_cidr(&cidr, 33).is_err());
        assert!(split_cidr(&Cidr::new("1.1.1.1/32").unwrap(), 32).is_err());
    }
}
