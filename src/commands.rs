//! Runners for each subcommand.
//!
//! Every runner writes its normal output to `out` and returns `Ok(true)` on
//! success. `Ok(false)` means the command ran but the answer is negative
//! (an address outside a block), which exits with status 1.

use crate::cli::Command;
use crate::models::{
    ipv4_to_u32, parse_decimal, parse_ipv4, parse_prefix, to_binary, u32_to_ipv4, Cidr,
};
use crate::output::{render_info, render_json};
use crate::processing::{split_cidr, subnet_calc, subnet_info, SubnetInfo};
use std::error::Error;
use std::io::Write;

/// Run a parsed subcommand.
pub fn run(command: &Command, out: &mut dyn Write) -> Result<bool, Box<dyn Error>> {
    match command {
        Command::CidrInfo { cidr, json } => cidr_info(cidr, *json, out),
        Command::SubnetCalc { ip, mask, json } => calc(ip, mask, *json, out),
        Command::CidrContains { cidr, ip } => cidr_contains(cidr, ip, out),
        Command::CidrSplit { cidr, new_prefix } => cidr_split(cidr, new_prefix, out),
        Command::ToDecimal { ip } => ip_to_decimal(ip, out),
        Command::FromDecimal { decimal } => decimal_to_ip(decimal, out),
        Command::ToBinary { ip } => ip_to_binary(ip, out),
    }
}

fn write_info(info: &SubnetInfo, json: bool, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    if json {
        writeln!(out, "{}", render_json(info)?)?;
    } else {
        for line in render_info(info) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Print the details of a CIDR block.
pub fn cidr_info(cidr: &str, json: bool, out: &mut dyn Write) -> Result<bool, Box<dyn Error>> {
    log::info!("#Start cidr_info({cidr})");
    let cidr = Cidr::new(cidr)?;
    let info = subnet_info(&cidr);
    log::debug!("cidr_info: {cidr} -> {info:?}");
    write_info(&info, json, out)?;
    Ok(true)
}

/// Print subnet details for an address and mask.
pub fn calc(ip: &str, mask: &str, json: bool, out: &mut dyn Write) -> Result<bool, Box<dyn Error>> {
    log::info!("#Start subnet_calc({ip}, {mask})");
    let info = subnet_calc(ip, mask)?;
    write_info(&info, json, out)?;
    Ok(true)
}

/// Report whether `ip` falls inside `cidr`.
pub fn cidr_contains(cidr: &str, ip: &str, out: &mut dyn Write) -> Result<bool, Box<dyn Error>> {
    log::info!("#Start cidr_contains({cidr}, {ip})");
    let block = Cidr::new(cidr)?;
    let addr = parse_ipv4(ip)?;
    let (cidr, ip) = (cidr.trim(), ip.trim());

    if block.contains(addr) {
        writeln!(out, "YES: {ip} is within {cidr}")?;
        Ok(true)
    } else {
        writeln!(out, "NO: {ip} is NOT within {cidr}")?;
        Ok(false)
    }
}

/// Print the sub-blocks of `cidr` with prefix `new_prefix`, one per line.
pub fn cidr_split(
    cidr: &str,
    new_prefix: &str,
    out: &mut dyn Write,
) -> Result<bool, Box<dyn Error>> {
    log::info!("#Start cidr_split({cidr}, {new_prefix})");
    let block = Cidr::new(cidr)?;
    let new_prefix = parse_prefix(new_prefix)?;
    let split = split_cidr(&block, new_prefix)?;
    log::debug!(
        "cidr_split: {} sub-blocks of /{new_prefix}",
        split.subnet_count()
    );

    writeln!(
        out,
        "Splitting {} into {} /{new_prefix} subnets:",
        block.normalized(),
        split.subnet_count()
    )?;
    for subnet in split {
        writeln!(out, "{subnet}")?;
    }
    Ok(true)
}

/// Print the decimal value of an address.
pub fn ip_to_decimal(ip: &str, out: &mut dyn Write) -> Result<bool, Box<dyn Error>> {
    log::info!("#Start ip_to_decimal({ip})");
    let addr = parse_ipv4(ip)?;
    writeln!(out, "{} = {}", ip.trim(), ipv4_to_u32(addr))?;
    Ok(true)
}

/// Print the address for a decimal value.
pub fn decimal_to_ip(decimal: &str, out: &mut dyn Write) -> Result<bool, Box<dyn Error>> {
    log::info!("#Start decimal_to_ip({decimal})");
    let value = parse_decimal(decimal)?;
    writeln!(out, "{} = {}", decimal.trim(), u32_to_ipv4(value))?;
    Ok(true)
}

/// Print an address in dotted binary.
pub fn ip_to_binary(ip: &str, out: &mut dyn Write) -> Result<bool, Box<dyn Error>> {
    log::info!("#Start ip_to_binary({ip})");
    let addr = parse_ipv4(ip)?;
    writeln!(out, "{} = {}", ip.trim(), to_binary(addr))?;
    Ok(true)
}
