//! Alias resolution from raw records to [`NormalizedAsset`].

use serde_json::Value;

use crate::types::{NormalizedAsset, RawAsset};

/// Candidate keys for the asset name, in precedence order.
pub const NAME_ALIASES: &[&str] = &["name", "name_snmp", "asset-name"];

/// Candidate keys for the asset model, in precedence order.
pub const MODEL_ALIASES: &[&str] = &["model", "asset-model"];

/// Candidate keys for the IP address, in precedence order.
pub const IP_ADDRESS_ALIASES: &[&str] = &["ip_address", "ipv4", "ip-address"];

/// Return the first alias whose value is a non-empty string.
///
/// An alias that is missing, null, empty, or not a string is skipped.
pub fn resolve_alias<'a>(raw: &'a RawAsset, aliases: &[&str]) -> Option<&'a str> {
    aliases.iter().find_map(|key| match raw.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    })
}

/// Build a [`NormalizedAsset`] if name, model and IP address all resolve.
pub fn extract_asset_info(raw: &RawAsset) -> Option<NormalizedAsset> {
    let name = resolve_alias(raw, NAME_ALIASES)?;
    let model = resolve_alias(raw, MODEL_ALIASES)?;
    let ip_address = resolve_alias(raw, IP_ADDRESS_ALIASES)?;

    Some(NormalizedAsset {
        name: name.to_owned(),
        model: model.to_owned(),
        ip_address: ip_address.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawAsset {
        RawAsset::new(value)
    }

    #[test]
    fn extracts_complete_asset() {
        let asset = extract_asset_info(&raw(json!({
            "name": "Test Asset",
            "model": "Model X",
            "ip_address": "192.168.1.1",
        })))
        .unwrap();

        assert_eq!(asset.name, "Test Asset");
        assert_eq!(asset.model, "Model X");
        assert_eq!(asset.ip_address, "192.168.1.1");
    }

    #[test]
    fn missing_any_field_drops_the_record() {
        let missing_name = json!({"model": "Model X", "ip_address": "192.168.1.1"});
        let missing_model = json!({"name": "Test Asset", "ip_address": "192.168.1.1"});
        let missing_ip = json!({"name": "Test Asset", "model": "Model X"});

        assert!(extract_asset_info(&raw(missing_name)).is_none());
        assert!(extract_asset_info(&raw(missing_model)).is_none());
        assert!(extract_asset_info(&raw(missing_ip)).is_none());
    }

    #[test]
    fn alternative_keys_resolve() {
        let asset = extract_asset_info(&raw(json!({
            "name_snmp": "Test Asset",
            "asset-model": "Model X",
            "ipv4": "192.168.1.1",
        })))
        .unwrap();

        assert_eq!(asset.name, "Test Asset");
        assert_eq!(asset.model, "Model X");
        assert_eq!(asset.ip_address, "192.168.1.1");
    }

    #[test]
    fn last_aliases_resolve() {
        let asset = extract_asset_info(&raw(json!({
            "asset-name": "edge",
            "asset-model": "EX-1",
            "ip-address": "172.16.0.9",
        })))
        .unwrap();

        assert_eq!(asset.name, "edge");
        assert_eq!(asset.ip_address, "172.16.0.9");
    }

    #[test]
    fn earlier_alias_takes_precedence() {
        let asset = extract_asset_info(&raw(json!({
            "name": "primary",
            "name_snmp": "secondary",
            "model": "M",
            "ip_address": "10.0.0.1",
            "ipv4": "10.0.0.2",
        })))
        .unwrap();

        assert_eq!(asset.name, "primary");
        assert_eq!(asset.ip_address, "10.0.0.1");
    }

    #[test]
    fn empty_value_falls_through_to_next_alias() {
        let asset = extract_asset_info(&raw(json!({
            "name": "",
            "name_snmp": "from-snmp",
            "model": "M",
            "ip_address": null,
            "ipv4": "10.0.0.2",
        })))
        .unwrap();

        assert_eq!(asset.name, "from-snmp");
        assert_eq!(asset.ip_address, "10.0.0.2");
    }

    #[test]
    fn empty_only_alias_drops_the_record() {
        let record = json!({"name": "", "model": "M", "ip_address": "10.0.0.1"});
        assert!(extract_asset_info(&raw(record)).is_none());
    }

    #[test]
    fn non_string_values_are_not_resolvable() {
        let record = json!({"name": 42, "model": "M", "ip_address": "10.0.0.1"});
        assert!(extract_asset_info(&raw(record)).is_none());
    }

    #[test]
    fn unexpected_keys_drop_the_record() {
        let record = json!({"unexpected_key": "unexpected_value"});
        assert!(extract_asset_info(&raw(record)).is_none());
    }

    #[test]
    fn non_object_record_drops() {
        assert!(extract_asset_info(&raw(json!(["name", "model"]))).is_none());
    }
}
