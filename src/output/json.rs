//! JSON output for subnet calculations.

use crate::processing::Calculation;
use std::error::Error;

/// Serialize a calculation as pretty-printed JSON.
pub fn format_json(calc: &Calculation) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(calc).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calculate;
    use serde_json::Value;

    #[test]
    fn test_format_json() {
        let calc = calculate("10.0.0.5", "255.0.0.0").unwrap();
        let json = format_json(&calc).expect("Error serializing calculation");
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["address"], "10.0.0.5");
        assert_eq!(value["mask"], "255.0.0.0");
        assert_eq!(value["prefix"], 8);
        assert_eq!(value["hosts"], 16777214);
        assert_eq!(value["network"], "10.0.0.0");
        assert_eq!(value["broadcast"], "10.255.255.255");
        assert_eq!(value["host_range"]["hosts"]["first"], "10.0.0.1");
        assert_eq!(value["host_range"]["hosts"]["last"], "10.255.255.254");
        assert_eq!(value["subnets"].as_array().unwrap().len(), 16);
        assert_eq!(value["subnets"][1]["network"], "11.0.0.0");
        assert_eq!(value["subnets"][1]["index"], 2);
    }

    #[test]
    fn test_format_json_empty_range() {
        let calc = calculate("10.0.0.5", "255.255.255.255").unwrap();
        let json = format_json(&calc).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["host_range"], "empty");
        assert_eq!(value["hosts"], 0);
    }
}
