//! CSV output formatting for network rows.

use super::NetworkRow;
use crate::models::Address;
use itertools::Itertools;

/// Column header line.
pub const CSV_HEADER: &str = "Subnet,Prefix,Netmask,Wildcard Mask,First Usable,Last Usable,Broadcast,Total Addresses,Usable Hosts,Label";

/// Quote a field if it contains a comma or double quote.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // enclose in double quotes and double any inner quotes
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

fn usable_field(address: Option<Address>) -> String {
    address
        .map(|a| a.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Render one data row, without trailing newline.
pub fn csv_row(row: &NetworkRow) -> String {
    [
        row.subnet.to_string(),
        row.prefix.to_string(),
        row.netmask.to_string(),
        row.wildcard_mask.to_string(),
        usable_field(row.first_usable),
        usable_field(row.last_usable),
        row.broadcast.to_string(),
        row.total_addresses.to_string(),
        row.usable_hosts.to_string(),
        row.label.clone().unwrap_or_default(),
    ]
    .iter()
    .map(|field| escape_csv_field(field))
    .join(",")
}

/// Render the header and all rows, one line each.
pub fn to_csv(rows: &[NetworkRow]) -> String {
    log::debug!("to_csv() rows={}", rows.len());
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&csv_row(row));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Network;

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_field(""), "");
    }

    #[test]
    fn test_csv_row() {
        let network: Network = "10.0.0.0/26".parse().unwrap();
        let row = NetworkRow::new(&network, Some("web, front".to_string()), false);
        assert_eq!(
            csv_row(&row),
            "10.0.0.0,26,255.255.255.192,0.0.0.63,10.0.0.1,10.0.0.62,10.0.0.63,64,62,\"web, front\""
        );
    }

    #[test]
    fn test_csv_row_no_usable() {
        let network: Network = "10.0.0.8/31".parse().unwrap();
        let row = NetworkRow::new(&network, None, false);
        assert_eq!(
            csv_row(&row),
            "10.0.0.8,31,255.255.255.254,0.0.0.1,N/A,N/A,10.0.0.9,2,0,"
        );
    }

    #[test]
    fn test_to_csv() {
        let network: Network = "192.168.1.0/30".parse().unwrap();
        let csv = to_csv(&[NetworkRow::new(&network, None, false)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "192.168.1.0,30,255.255.255.252,0.0.0.3,192.168.1.1,192.168.1.2,192.168.1.3,4,2,"
        );
    }
}
