//! Subnet computations built on the models.
//!
//! - [`subnet_calc`] - network, broadcast, usable range and host counts
//! - [`split`] - enumerate the sub-blocks of a CIDR block

mod split;
mod subnet_calc;

// Re-export public functions
pub use split::{split_cidr, CidrSplit};
pub use subnet_calc::{subnet_calc, subnet_info, SubnetInfo};
