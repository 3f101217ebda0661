//! Subnet details for a CIDR block or an address and mask pair.

use crate::models::{parse_ipv4, parse_mask, Cidr, IpError};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Computed details of a subnet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// The address the block was derived from (subnet-calc only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Ipv4Addr>,
    /// Block in `network/prefix` form.
    pub cidr: Cidr,
    pub network: Ipv4Addr,
    pub subnet_mask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// `None` for /31 and /32, which have no usable host range.
    pub first_usable: Option<Ipv4Addr>,
    pub last_usable: Option<Ipv4Addr>,
    pub total_hosts: u64,
    pub usable_hosts: u64,
    pub prefix_length: u8,
}

/// Compute the subnet details of `cidr`.
///
/// # Examples
/// ```
/// use cidr_tools::models::Cidr;
/// use cidr_tools::processing::subnet_info;
/// let info = subnet_info(&Cidr::new("10.0.0.0/8").unwrap());
/// assert_eq!(info.total_hosts, 16777216);
/// assert_eq!(info.usable_hosts, 16777214);
/// ```
pub fn subnet_info(cidr: &Cidr) -> SubnetInfo {
    let network = cidr.network();
    let broadcast = cidr.broadcast();
    let total_hosts = cidr.size();

    let (first_usable, last_usable, usable_hosts) = if total_hosts >= 4 {
        (
            Some(Ipv4Addr::from(u32::from(network) + 1)),
            Some(Ipv4Addr::from(u32::from(broadcast) - 1)),
            total_hosts - 2,
        )
    } else {
        (None, None, 0)
    };

    SubnetInfo {
        ip_address: None,
        cidr: cidr.normalized(),
        network,
        subnet_mask: Ipv4Addr::from(cidr.mask()),
        wildcard_mask: Ipv4Addr::from(cidr.wildcard()),
        broadcast,
        first_usable,
        last_usable,
        total_hosts,
        usable_hosts,
        prefix_length: cidr.prefix(),
    }
}

/// Compute subnet details from an address and a mask.
///
/// The mask may be dotted (`255.255.255.0`) or a prefix length (`24`).
pub fn subnet_calc(ip: &str, mask: &str) -> Result<SubnetInfo, IpError> {
    let addr = parse_ipv4(ip)?;
    let prefix = parse_mask(mask)?;
    log::debug!("subnet_calc({addr}, /{prefix})");

    let cidr = Cidr::from_parts(addr, prefix)?;
    Ok(SubnetInfo {
        ip_address: Some(addr),
        ..subnet_info(&cidr)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_info_24() {
        let info = subnet_info(&Cidr::new("192.168.1.0/24").unwrap());
        assert_eq!(info.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(info.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(info.subnet_mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(info.wildcard_mask, Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(info.first_usable, Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(info.last_usable, Some(Ipv4Addr::new(192, 168, 1, 254)));
        assert_eq!(info.total_hosts, 256);
        assert_eq!(info.usable_hosts, 254);
        assert_eq!(info.prefix_length, 24);
        assert_eq!(info.ip_address, None);
    }

    #[test]
    fn test_subnet_info_8() {
        let info = subnet_info(&Cidr::new("10.0.0.0/8").unwrap());
        assert_eq!(info.total_hosts, 16777216);
        assert_eq!(info.usable_hosts, 16777214);
        assert_eq!(info.broadcast, Ipv4Addr::new(10, 255, 255, 255));
    }

    #[test]
    fn test_subnet_info_host_bits_set() {
        let info = subnet_info(&Cidr::new("172.16.5.77/20").unwrap());
        assert_eq!(info.cidr.to_string(), "172.16.0.0/20");
        assert_eq!(info.network, Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(info.broadcast, Ipv4Addr::new(172, 16, 15, 255));
        assert_eq!(info.usable_hosts, 4094);
    }

    #[test]
    fn test_subnet_info_edges() {
        let info = subnet_info(&Cidr::new("10.0.0.0/30").unwrap());
        assert_eq!(info.first_usable, Some(Ipv4Addr::new(10, 0, 0, 1)));
        assert_eq!(info.last_usable, Some(Ipv4Addr::new(10, 0, 0, 2)));
        assert_eq!(info.usable_hosts, 2);

        let info = subnet_info(&Cidr::new("10.0.0.0/31").unwrap());
        assert_eq!(info.first_usable, None);
        assert_eq!(info.last_usable, None);
        assert_eq!(info.total_hosts, 2);
        assert_eq!(info.usable_hosts, 0);

        let info = subnet_info(&Cidr::new("255.255.255.255/32").unwrap());
        assert_eq!(info.first_usable, None);
        assert_eq!(info.total_hosts, 1);
        assert_eq!(info.usable_hosts, 0);
        assert_eq!(info.broadcast, Ipv4Addr::BROADCAST);

        let info = subnet_info(&Cidr::new("0.0.0.0/0").unwrap());
        assert_eq!(info.total_hosts, 4294967296);
        assert_eq!(info.usable_hosts, 4294967294);
        assert_eq!(info.first_usable, Some(Ipv4Addr::new(0, 0, 0, 1)));
        assert_eq!(info.last_usable, Some(Ipv4Addr::new(255, 255, 255, 254)));
    }

    #[test]
    fn test_subnet_calc() {
        let info = subnet_calc("192.168.1.100", "255.255.255.0").unwrap();
        assert_eq!(info.ip_address, Some(Ipv4Addr::new(192, 168, 1, 100)));
        assert_eq!(info.cidr, Cidr::new("192.168.1.0/24").unwrap());
        assert_eq!(info.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(info.usable_hosts, 254);

        let info = subnet_calc("10.1.2.3", "/16").unwrap();
        assert_eq!(info.cidr.to_string(), "10.1.0.0/16");
    }

    #[test]
    fn test_subnet_calc_invalid() {
        assert!(matches!(
            subnet_calc("192.168.1.300", "255.255.255.0").unwrap_err(),
            IpError::OctetOutOfRange { .. }
        ));
        assert_eq!(
            subnet_calc("192.168.1.1", "255.0.255.0").unwrap_err(),
            IpError::NonContiguousMask("255.0.255.0".to_string())
        );
        assert_eq!(
            subnet_calc("192.168.1.1", "40").unwrap_err(),
            IpError::InvalidMask("40".to_string())
        );
    }
}
