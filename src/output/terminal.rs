//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::processing::SubnetInfo;
use std::net::Ipv4Addr;

/// Width of the label column, colon included.
const LABEL_WIDTH: usize = 20;

/// Format a `label: value` line with the value starting at a fixed column.
///
/// # Arguments
/// * `label` - The field name, without the colon
/// * `value` - The value to print after the label
///
/// # Returns
/// A left-aligned `label:` padded to the label column, then the value
pub fn format_line<T: ToString>(label: &str, value: T) -> String {
    let label = format!("{label}:");
    format!("{label:<LABEL_WIDTH$}{}", value.to_string())
}

fn or_na(addr: Option<Ipv4Addr>) -> String {
    addr.map(|a| a.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Render subnet details as output lines.
///
/// `IP Address` and `CIDR Notation` are only present when the details were
/// computed from an address and mask pair.
pub fn render_info(info: &SubnetInfo) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(ip) = info.ip_address {
        lines.push(format_line("IP Address", ip));
    }
    lines.push(format_line("Network Address", info.network));
    lines.push(format_line("Subnet Mask", info.subnet_mask));
    lines.push(format_line("Wildcard Mask", info.wildcard_mask));
    lines.push(format_line("Broadcast Address", info.broadcast));
    lines.push(format_line("First Usable IP", or_na(info.first_usable)));
    lines.push(format_line("Last Usable IP", or_na(info.last_usable)));
    lines.push(format_line("Total Hosts", info.total_hosts));
    lines.push(format_line("Usable Hosts", info.usable_hosts));
    lines.push(format_line(
        "Prefix Length",
        format!("/{}", info.prefix_length),
    ));
    if info.ip_address.is_some() {
        lines.push(format_line("CIDR Notation", info.cidr));
    }
    lines
}
