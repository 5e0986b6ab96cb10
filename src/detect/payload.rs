//! Wire shapes devices answer identification requests with.
//!
//! Firmware fills unused fields with `null` and the odd out-of-range value,
//! so a bad field decays to its default instead of rejecting the payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `null` reads as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `gen` as a signed number: 0 for `null`, `i64::MAX` past the i64 range,
/// -1 for fractions and non-numbers. Anything but 1..=4 maps to `Unknown`.
fn generation_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(0);
    };
    Ok(match value.as_i64() {
        Some(n) => n,
        None if value.is_u64() => i64::MAX,
        None => -1,
    })
}

/// Gen2+ `Shelly.GetDeviceInfo` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    /// 0 when the payload has no `gen` field.
    #[serde(rename = "gen", deserialize_with = "generation_number")]
    pub generation: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub app: String,
    #[serde(rename = "fw_id", deserialize_with = "null_as_default")]
    pub firmware_id: String,
    #[serde(rename = "ver", deserialize_with = "null_as_default")]
    pub version: String,
    /// Active device profile such as `"switch"` or `"cover"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(rename = "auth_en", deserialize_with = "null_as_default")]
    pub auth_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub mac: String,
}

impl DeviceInfo {
    /// Carries something a catalog lookup can use.
    pub fn is_identified(&self) -> bool {
        !self.model.is_empty() || !self.app.is_empty()
    }
}

/// Gen1 `/shelly` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gen1Status {
    /// Model code, e.g. `SHSW-25`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub device_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mac: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auth: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub num_outputs: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub num_meters: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub num_emeters: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub num_rollers: u32,
}

impl Gen1Status {
    pub fn is_identified(&self) -> bool {
        !self.device_type.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_info() {
        let json = r#"{
            "name": null,
            "id": "shellyplus1pm-a8032ab12345",
            "mac": "A8032AB12345",
            "slot": 0,
            "model": "SNSW-001P16EU",
            "gen": 2,
            "fw_id": "20231107-164738/1.0.8-g",
            "ver": "1.0.8",
            "app": "Plus1PM",
            "auth_en": false,
            "auth_domain": null
        }"#;
        let info: DeviceInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.model, "SNSW-001P16EU");
        assert_eq!(info.generation, 2);
        assert_eq!(info.app, "Plus1PM");
        assert_eq!(info.version, "1.0.8");
        assert_eq!(info.auth_domain, None);
        assert!(info.is_identified());
    }

    #[test]
    fn test_parse_gen1_status() {
        let json = r#"{
            "type": "SHSW-25",
            "mac": "98CDAC0D1234",
            "auth": true,
            "fw": "20230913-112003/v1.14.0-gcb84623",
            "longid": 1,
            "num_outputs": 2,
            "num_meters": 2,
            "num_rollers": 1
        }"#;
        let status: Gen1Status = serde_json::from_str(json).unwrap();
        assert_eq!(status.device_type, "SHSW-25");
        assert!(status.auth);
        assert_eq!(status.num_outputs, 2);
        assert_eq!(status.num_emeters, 0);
        assert!(status.is_identified());
    }

    #[test]
    fn test_gen1_payload_is_not_an_identified_device_info() {
        let json = r#"{"type": "SHSW-1", "mac": "AA", "auth": false}"#;
        let info: DeviceInfo = serde_json::from_str(json).unwrap();
        assert!(!info.is_identified());
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let json = r#"{
            "id": null,
            "model": "SNSW-001P16EU",
            "gen": 2,
            "app": null,
            "mac": null,
            "auth_en": null
        }"#;
        let info: DeviceInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.model, "SNSW-001P16EU");
        assert_eq!(info.app, "");
        assert_eq!(info.id, "");
        assert!(!info.auth_enabled);

        let json = r#"{"type": "SHSW-1", "mac": null, "fw": null, "num_outputs": null}"#;
        let status: Gen1Status = serde_json::from_str(json).unwrap();
        assert_eq!(status.device_type, "SHSW-1");
        assert_eq!(status.num_outputs, 0);
    }

    #[test]
    fn test_odd_generation_values() {
        let generation = |raw: &str| {
            let json = format!(r#"{{"model": "SNSW-001P16EU", "gen": {raw}}}"#);
            serde_json::from_str::<DeviceInfo>(&json).unwrap().generation
        };
        assert_eq!(generation("3"), 3);
        assert_eq!(generation("-1"), -1);
        assert_eq!(generation("5000000000"), 5_000_000_000);
        assert_eq!(generation("18446744073709551615"), i64::MAX);
        assert_eq!(generation("2.5"), -1);
        assert_eq!(generation("\"2\""), -1);
        assert_eq!(generation("null"), 0);
    }
}
