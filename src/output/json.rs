//! JSON output formatting for network rows.

use super::NetworkRow;
use crate::error::Result;

/// Pretty printed JSON array, one object per row.
pub fn to_json(rows: &[NetworkRow]) -> Result<String> {
    log::debug!("to_json() rows={}", rows.len());
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Network;
    use serde_json::Value;

    #[test]
    fn test_to_json_fields() {
        let network: Network = "192.168.10.0/24".parse().unwrap();
        let json = to_json(&[NetworkRow::new(&network, Some("lan".to_string()), false)]).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let obj = &value[0];
        assert_eq!(obj["subnet"], "192.168.10.0");
        assert_eq!(obj["prefix"], 24);
        assert_eq!(obj["netmask"], "255.255.255.0");
        assert_eq!(obj["wildcardMask"], "0.0.0.255");
        assert_eq!(obj["firstUsable"], "192.168.10.1");
        assert_eq!(obj["lastUsable"], "192.168.10.254");
        assert_eq!(obj["broadcast"], "192.168.10.255");
        assert_eq!(obj["totalAddresses"], 256);
        assert_eq!(obj["usableHosts"], 254);
        assert_eq!(obj["label"], "lan");
    }

    #[test]
    fn test_to_json_omits_absent_fields() {
        let network: Network = "10.0.0.1/32".parse().unwrap();
        let json = to_json(&[NetworkRow::new(&network, None, true)]).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let obj = value[0].as_object().unwrap();
        assert!(!obj.contains_key("firstUsable"));
        assert!(!obj.contains_key("lastUsable"));
        assert!(!obj.contains_key("label"));
        assert_eq!(obj["totalAddresses"], 1);
        assert_eq!(obj["usableHosts"], 0);
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
