//! Command line definition.

use clap::{Parser, Subcommand};

/// IPv4 and CIDR calculator
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct CliOpt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show network, broadcast, usable range and host counts of a CIDR block
    #[command(visible_alias = "ip-cidr-info")]
    CidrInfo {
        /// CIDR block, e.g. 192.168.1.0/24
        cidr: String,
        /// Print the details as JSON
        #[arg(long)]
        json: bool,
    },
    /// Calculate subnet details from an IP address and a subnet mask
    #[command(visible_alias = "ip-subnet-calc")]
    SubnetCalc {
        /// IP address, e.g. 192.168.1.100
        ip: String,
        /// Subnet mask, dotted (255.255.255.0) or prefix length (24)
        mask: String,
        /// Print the details as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether an IP address is inside a CIDR block (exit 1 if not)
    #[command(visible_alias = "ip-cidr-contains")]
    CidrContains {
        /// CIDR block, e.g. 192.168.1.0/24
        cidr: String,
        /// IP address to test
        ip: String,
    },
    /// Split a CIDR block into smaller blocks of a new prefix length
    #[command(visible_alias = "ip-cidr-split")]
    CidrSplit {
        /// CIDR block, e.g. 192.168.1.0/24
        cidr: String,
        /// New prefix length, larger than the block's prefix
        new_prefix: String,
    },
    /// Convert an IP address to its decimal value
    #[command(visible_alias = "ip-to-decimal")]
    ToDecimal {
        /// IP address
        ip: String,
    },
    /// Convert a decimal value (0-4294967295) to an IP address
    #[command(visible_alias = "ip-from-decimal")]
    FromDecimal {
        /// Decimal value
        #[arg(allow_hyphen_values = true)]
        decimal: String,
    },
    /// Show an IP address in dotted binary
    #[command(visible_alias = "ip-to-binary")]
    ToBinary {
        /// IP address
        ip: String,
    },
}
