//! Terminal output utilities.
//!
//! Renders a [`Calculation`] as the human readable report and provides the field
//! formatting helper shared with CSV output.

use crate::processing::Calculation;
use colored::Colorize;
use std::fmt::Write;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn label(text: &str, colored: bool) -> String {
    if colored {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Render the report: prefix, host count, network, broadcast, host range, then
/// the numbered subnet listing.
///
/// # Arguments
/// * `calc` - The calculation to render
/// * `colored` - Highlight labels with ANSI colours
pub fn format_report(calc: &Calculation, colored: bool) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{} {}", label("Prefix Mask:", colored), calc.prefix);
    let _ = writeln!(out, "{} {}", label("Number of Hosts:", colored), calc.hosts);
    let _ = writeln!(out, "{} {}", label("Network Address:", colored), calc.network);
    let _ = writeln!(
        out,
        "{} {}",
        label("Broadcast Address:", colored),
        calc.broadcast
    );
    let _ = writeln!(out, "{} {}", label("Host Range:", colored), calc.host_range);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", label("Subnets in this network:", colored));
    for subnet in &calc.subnets {
        let _ = writeln!(
            out,
            "Subnet {i}: {network}{prefix}, Hosts: {range}",
            i = subnet.index,
            network = subnet.network,
            prefix = subnet.prefix,
            range = subnet.host_range,
        );
    }
    out
}

/// Print the report to stdout.
pub fn print_report(calc: &Calculation, colored: bool) {
    log::info!("#Start print_report() for {}{}", calc.network, calc.prefix);
    println!();
    print!("{}", format_report(calc, colored));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calculate;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_format_report_field_order() {
        let calc = calculate("192.168.1.10", "255.255.255.0").unwrap();
        let report = format_report(&calc, false);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Prefix Mask: /24");
        assert_eq!(lines[1], "Number of Hosts: 254");
        assert_eq!(lines[2], "Network Address: 192.168.1.0");
        assert_eq!(lines[3], "Broadcast Address: 192.168.1.255");
        assert_eq!(lines[4], "Host Range: 192.168.1.1 - 192.168.1.254");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Subnets in this network:");
        assert_eq!(
            lines[7],
            "Subnet 1: 192.168.1.0/24, Hosts: 192.168.1.1 - 192.168.1.254"
        );
        assert_eq!(
            lines[22],
            "Subnet 16: 192.168.16.0/24, Hosts: 192.168.16.1 - 192.168.16.254"
        );
        assert_eq!(lines.len(), 23);
    }

    #[test]
    fn test_format_report_no_hosts() {
        let calc = calculate("10.0.0.1", "255.255.255.255").unwrap();
        let report = format_report(&calc, false);
        assert!(report.contains("Number of Hosts: 0\n"));
        assert!(report.contains("Host Range: none\n"));
        assert!(report.contains("Subnet 1: 10.0.0.1/32, Hosts: none\n"));
    }
}
