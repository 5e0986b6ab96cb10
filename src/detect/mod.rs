pub mod generation;
pub mod heuristic;
pub mod payload;

pub use generation::detect_generation;
pub use heuristic::infer_capabilities_from_app;
pub use payload::{DeviceInfo, Gen1Status};

use crate::profile::{Generation, Profile};
use crate::registry::Registry;
use serde::Deserialize;
use std::sync::Arc;

/// Outcome of resolving one identification payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionResult {
    pub generation: Generation,
    /// Model code as reported by the device, kept even when unrecognized.
    pub model: String,
    /// Present only when the catalog had a matching entry.
    pub profile: Option<Arc<Profile>>,
}

impl DetectionResult {
    /// No generation, no model, no profile.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        self.profile.is_some()
    }
}

/// Resolves identification payloads against a registry.
///
/// Failure to recognize a device is always reported as a result without a
/// profile, never as an error.
#[derive(Debug, Clone, Copy)]
pub struct Detector<'a> {
    registry: &'a Registry,
}

impl<'a> Detector<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolve a Gen2+ device info payload.
    ///
    /// The payload's own `gen` field decides the generation. Only when it is
    /// absent does prefix inference on the model apply, then the matched
    /// profile's generation.
    pub fn detect_from_device_info(&self, info: &DeviceInfo) -> DetectionResult {
        let profile = self.registry.get(&info.model).or_else(|| {
            if info.app.is_empty() {
                return None;
            }
            let by_app = self.registry.get_by_app(&info.app);
            if by_app.is_some() {
                tracing::debug!(
                    model = %info.model,
                    app = %info.app,
                    "matched profile by app name"
                );
            }
            by_app
        });

        let generation = if info.generation != 0 {
            let generation = Generation::from_number(info.generation);
            if generation == Generation::Unknown {
                tracing::debug!(
                    generation = info.generation,
                    model = %info.model,
                    "unrecognized generation number"
                );
            }
            generation
        } else {
            match detect_generation(&info.model) {
                Generation::Unknown => profile
                    .as_ref()
                    .map_or(Generation::Unknown, |p| p.generation),
                inferred => inferred,
            }
        };

        DetectionResult {
            generation,
            model: info.model.clone(),
            profile,
        }
    }

    /// Resolve a Gen1 `/shelly` payload. The shape itself implies Gen1.
    pub fn detect_from_gen1_status(&self, status: &Gen1Status) -> DetectionResult {
        DetectionResult {
            generation: Generation::Gen1,
            model: status.device_type.clone(),
            profile: self.registry.get(&status.device_type),
        }
    }

    /// Resolve a raw payload of unknown shape: Gen2+ first, then Gen1.
    ///
    /// Malformed JSON and payloads without an identifying field both yield
    /// [`DetectionResult::unknown`].
    pub fn detect_from_json(&self, bytes: &[u8]) -> DetectionResult {
        match serde_json::from_slice::<serde_json::Value>(bytes) {
            Ok(value) => self.detect_from_value(&value),
            Err(e) => {
                tracing::debug!(error = %e, "identification payload is not valid JSON");
                DetectionResult::unknown()
            }
        }
    }

    /// Same as [`Detector::detect_from_json`] for an already parsed value.
    pub fn detect_from_value(&self, value: &serde_json::Value) -> DetectionResult {
        if let Ok(info) = DeviceInfo::deserialize(value) {
            if info.is_identified() {
                return self.detect_from_device_info(&info);
            }
        }

        if let Ok(status) = Gen1Status::deserialize(value) {
            if status.is_identified() {
                return self.detect_from_gen1_status(&status);
            }
        }

        tracing::debug!("identification payload matches no known shape");
        DetectionResult::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        let registry = Registry::new();
        let mut plus = Profile::new("SNSW-001P16EU", "Shelly Plus 1PM");
        plus.app = Some("Plus1PM".to_string());
        plus.generation = Generation::Gen2;
        let mut classic = Profile::new("SHSW-1", "Shelly 1");
        classic.generation = Generation::Gen1;
        let mut pro = Profile::new("SPSW-001XE16EU", "Shelly Pro 1");
        pro.app = Some("Pro1".to_string());
        pro.generation = Generation::Gen2;
        registry.register_all([plus, classic, pro]);
        registry
    }

    fn info(model: &str, generation: i64, app: &str) -> DeviceInfo {
        DeviceInfo {
            model: model.to_string(),
            generation,
            app: app.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_device_info_by_model() {
        let registry = registry();
        let result = Detector::new(&registry).detect_from_device_info(&info(
            "SNSW-001P16EU",
            2,
            "Plus1PM",
        ));
        assert_eq!(result.generation, Generation::Gen2);
        assert_eq!(result.model, "SNSW-001P16EU");
        assert_eq!(result.profile.unwrap().model, "SNSW-001P16EU");
    }

    #[test]
    fn test_device_info_app_fallback_keeps_payload_generation() {
        let registry = registry();
        let result = Detector::new(&registry).detect_from_device_info(&info(
            "UNKNOWN-MODEL",
            3,
            "Plus1PM",
        ));
        assert_eq!(result.generation, Generation::Gen3);
        assert_eq!(result.model, "UNKNOWN-MODEL");
        assert_eq!(result.profile.unwrap().app(), Some("Plus1PM"));
    }

    #[test]
    fn test_device_info_unknown_generation_number() {
        let registry = registry();
        let result = Detector::new(&registry).detect_from_device_info(&info(
            "SNSW-999",
            99,
            "NoSuchApp",
        ));
        assert_eq!(result.generation, Generation::Unknown);
        assert_eq!(result.model, "SNSW-999");
        assert!(!result.is_match());
    }

    #[test]
    fn test_explicit_generation_beats_prefix() {
        let registry = registry();
        let result =
            Detector::new(&registry).detect_from_device_info(&info("S3SW-001X16EU", 2, ""));
        assert_eq!(result.generation, Generation::Gen2);
    }

    #[test]
    fn test_missing_generation_uses_prefix_then_profile() {
        let registry = registry();
        let detector = Detector::new(&registry);

        let inferred = detector.detect_from_device_info(&info("S4SW-001P16EU", 0, ""));
        assert_eq!(inferred.generation, Generation::Gen4);

        // SP… has no known prefix; the catalog entry supplies the generation.
        let from_profile = detector.detect_from_device_info(&info("SPSW-001XE16EU", 0, ""));
        assert_eq!(from_profile.generation, Generation::Gen2);
    }

    #[test]
    fn test_gen1_status() {
        let registry = registry();
        let detector = Detector::new(&registry);
        let status = Gen1Status {
            device_type: "SHSW-1".to_string(),
            ..Default::default()
        };
        let result = detector.detect_from_gen1_status(&status);
        assert_eq!(result.generation, Generation::Gen1);
        assert!(result.is_match());

        let unknown = Gen1Status {
            device_type: "SHXX-9".to_string(),
            ..Default::default()
        };
        let result = detector.detect_from_gen1_status(&unknown);
        assert_eq!(result.generation, Generation::Gen1);
        assert_eq!(result.model, "SHXX-9");
        assert!(!result.is_match());
    }

    #[test]
    fn test_json_dispatches_by_shape() {
        let registry = registry();
        let detector = Detector::new(&registry);

        let gen2 =
            detector.detect_from_json(br#"{"model":"SNSW-001P16EU","gen":2,"app":"Plus1PM"}"#);
        assert_eq!(gen2.generation, Generation::Gen2);
        assert!(gen2.is_match());

        let gen1 = detector.detect_from_json(br#"{"type":"SHSW-1","mac":"AABBCC","auth":false}"#);
        assert_eq!(gen1.generation, Generation::Gen1);
        assert!(gen1.is_match());
    }

    #[test]
    fn test_json_app_only_payload() {
        let registry = registry();
        let result = Detector::new(&registry).detect_from_json(br#"{"gen":2,"app":"Pro1"}"#);
        assert_eq!(result.model, "");
        assert_eq!(result.profile.unwrap().model, "SPSW-001XE16EU");
    }

    #[test]
    fn test_json_garbage_is_unknown() {
        let registry = registry();
        let detector = Detector::new(&registry);
        let payloads: [&[u8]; 5] = [
            b"{invalid}",
            b"{}",
            br#"{"temperature": 21.5, "unit": "C"}"#,
            b"[1, 2, 3]",
            b"",
        ];
        for payload in payloads {
            assert_eq!(detector.detect_from_json(payload), DetectionResult::unknown());
        }
    }

    #[test]
    fn test_json_out_of_range_gen_keeps_model_and_profile() {
        let registry = registry();
        let detector = Detector::new(&registry);
        for raw in ["-1", "5000000000", "18446744073709551615", "2.5"] {
            let payload = format!(r#"{{"model":"SNSW-001P16EU","gen":{raw},"app":"Plus1PM"}}"#);
            let result = detector.detect_from_json(payload.as_bytes());
            assert_eq!(result.generation, Generation::Unknown, "gen {raw}");
            assert_eq!(result.model, "SNSW-001P16EU", "gen {raw}");
            assert!(result.is_match(), "gen {raw}");
        }
    }

    #[test]
    fn test_json_null_fields_keep_model_and_profile() {
        let registry = registry();
        let detector = Detector::new(&registry);
        let payloads: [&[u8]; 3] = [
            br#"{"model":"SNSW-001P16EU","gen":2,"app":null}"#,
            br#"{"model":"SNSW-001P16EU","gen":2,"id":null,"mac":null}"#,
            br#"{"model":"SNSW-001P16EU","gen":2,"auth_en":null,"fw_id":null}"#,
        ];
        for payload in payloads {
            let result = detector.detect_from_json(payload);
            assert_eq!(result.generation, Generation::Gen2);
            assert_eq!(result.model, "SNSW-001P16EU");
            assert!(result.is_match());
        }
    }

    #[test]
    fn test_json_null_gen_falls_back_to_prefix() {
        let registry = registry();
        let result = Detector::new(&registry)
            .detect_from_json(br#"{"model":"SNSW-001P16EU","gen":null,"app":"Plus1PM"}"#);
        assert_eq!(result.generation, Generation::Gen2);
        assert!(result.is_match());
    }

    #[test]
    fn test_non_numeric_gen_without_model_is_gen1() {
        let registry = registry();
        let result = Detector::new(&registry)
            .detect_from_json(br#"{"gen":"two","type":"SHSW-1"}"#);
        assert_eq!(result.generation, Generation::Gen1);
        assert!(result.is_match());
    }
}
