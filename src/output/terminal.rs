//! Terminal rendering of calculator reports.

use crate::processing::{BlockReport, NetworkReport, SubdivisionReport, SubnetReport};
use colored::Colorize;
use std::io::{self, Write};

/// Format a value as a right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

/// Print the startup banner.
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", "IPv4 Subnet Calculator".bold())?;
    writeln!(out, "{rule}")?;
    Ok(())
}

pub fn write_subnet_report(out: &mut impl Write, report: &SubnetReport) -> io::Result<()> {
    writeln!(out, "Network Address: {}", report.network)?;
    writeln!(out, "Broadcast Address: {}", report.broadcast)?;
    writeln!(
        out,
        "Total Number of IP Addresses: {}",
        report.total_addresses
    )?;
    writeln!(
        out,
        "Number of Usable IP Addresses: {}",
        report.usable_addresses
    )?;
    Ok(())
}

pub fn write_network_report(out: &mut impl Write, report: &NetworkReport) -> io::Result<()> {
    writeln!(out, "Network Address: {}", report.network)?;
    writeln!(out, "Broadcast Address: {}", report.broadcast)?;
    Ok(())
}

/// Print a subdivision, one aligned row per block.
pub fn write_subdivision(out: &mut impl Write, report: &SubdivisionReport) -> io::Result<()> {
    writeln!(out, "Number of Subnets: {}", report.subnet_count)?;
    for (i, row) in report.subnets.iter().enumerate() {
        writeln!(
            out,
            "Subnet {j}: {subnet}, Range: {first} to {last}, Broadcast: {broadcast}",
            j = i + 1,
            subnet = format_field(row.subnet, 18),
            first = row.first_usable,
            last = row.last_usable,
            broadcast = row.broadcast,
        )?;
    }
    Ok(())
}

pub fn write_block_report(out: &mut impl Write, report: &BlockReport) -> io::Result<()> {
    writeln!(out, "Block Size: {} IP addresses", report.block_size)?;
    writeln!(out, "Number of Subnets: {}", report.subnet_count)?;
    Ok(())
}
