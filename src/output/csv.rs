//! CSV output formatting for subnet calculations.

use crate::models::{OctetQuad, Prefix};
use crate::processing::{Calculation, HostRange, SubnetEntry};

use super::terminal::format_field;

const HEADER: &str = r#" "cnt",     "kind",     "network",  "prefix",        "broadcast",        "first_host",         "last_host",    "hosts""#;

/// One CSV row, either the requested network or a listed subnet.
#[derive(Debug)]
struct CsvRow {
    /// Row number, 0 for the requested network.
    j: usize,
    kind: &'static str,
    network: OctetQuad,
    prefix: Prefix,
    broadcast: OctetQuad,
    host_range: HostRange,
}

impl From<&SubnetEntry> for CsvRow {
    fn from(entry: &SubnetEntry) -> Self {
        CsvRow {
            j: entry.index,
            kind: "subnet",
            network: entry.network,
            prefix: entry.prefix,
            broadcast: entry.broadcast,
            host_range: entry.host_range,
        }
    }
}

/// Format a calculation as CSV: a header, the requested network, then one row
/// per listed subnet.
pub fn format_csv(calc: &Calculation) -> String {
    log::info!(
        "#Start format_csv() network {}{} with {} subnets",
        calc.network,
        calc.prefix,
        calc.subnets.len()
    );

    let mut rows = vec![CsvRow {
        j: 0,
        kind: "network",
        network: calc.network,
        prefix: calc.prefix,
        broadcast: calc.broadcast,
        host_range: calc.host_range,
    }];
    rows.extend(calc.subnets.iter().map(CsvRow::from));

    let mut out = String::from(HEADER);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_csv_row(row));
        out.push('\n');
    }
    out
}

/// Format a single CSV row.
fn format_csv_row(row: &CsvRow) -> String {
    let (first, last) = match row.host_range {
        HostRange::Empty => ("None".to_string(), "None".to_string()),
        HostRange::Hosts { first, last } => (first.to_string(), last.to_string()),
    };
    format!(
        r#"{j},{kind},{network},{prefix},{broadcast},{first},{last},{hosts}"#,
        j = format_field(row.j, 6),
        kind = format_field(row.kind, 10),
        network = format_field(row.network, 17),
        prefix = format_field(row.prefix.length(), 8),
        broadcast = format_field(row.broadcast, 19),
        first = format_field(first, 19),
        last = format_field(last, 19),
        hosts = format_field(row.host_range.count(), 12),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calculate;

    #[test]
    fn test_format_csv_rows() {
        let calc = calculate("10.1.1.5", "255.255.255.240").unwrap();
        let csv = format_csv(&calc);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 1 + 1 + 16);
        assert_eq!(lines[0], HEADER);
        assert_eq!(
            lines[1],
            r#"   "0", "network",       "10.1.1.0",    "28",        "10.1.1.15",         "10.1.1.1",        "10.1.1.14",        "14""#
        );
        assert!(lines[2].starts_with(r#"   "1",  "subnet",       "10.1.1.0","#));
        assert!(lines[17].contains(r#""10.1.1.240""#));
        assert!(lines[17].contains(r#""10.1.1.255""#));
    }

    #[test]
    fn test_format_csv_empty_range() {
        let calc = calculate("192.168.0.9", "255.255.255.254").unwrap();
        let csv = format_csv(&calc);
        let network_row = csv.lines().nth(1).unwrap();
        assert!(network_row.contains(r#""None""#));
        assert!(network_row.ends_with(r#""0""#));
    }
}
