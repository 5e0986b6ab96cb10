//! Best-effort capability guesses for app names missing from the catalog.
//!
//! The result is advisory. A registered profile always wins over it, and
//! nothing in [`super::Detector`] calls into this module.

use crate::profile::Capabilities;

/// Derive a partial capability set from substrings of a Gen2+ app name.
///
/// Model-code fragments (`PM`, `2PM`, `3EM`, `RGBW`, `Dimmer`) are matched
/// case-sensitively since the vendor capitalizes them consistently;
/// descriptive words are matched case-insensitively.
pub fn infer_capabilities_from_app(app: &str) -> Capabilities {
    let mut caps = Capabilities::default();
    let lower = app.to_lowercase();

    if app.contains("PM") || app.contains("EM") {
        caps.power_metering = true;
        caps.energy_metering = true;
    }
    if app.contains("2PM") {
        caps.cover_support = true;
    }
    if app.contains("3EM") {
        caps.three_phase = true;
    }
    if app.contains("Dimmer") {
        caps.dimming = true;
    }
    if app.contains("RGBW") {
        caps.dimming = true;
        caps.color_control = true;
    }
    if lower.contains("bulb") || lower.contains("duo") {
        caps.dimming = true;
        caps.color_temperature = true;
    }
    if lower.contains("cover") || lower.contains("shutter") || lower.contains("roller") {
        caps.cover_support = true;
    }
    if lower.contains("color") {
        caps.color_control = true;
    }

    caps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metering_apps() {
        let caps = infer_capabilities_from_app("Plus1PM");
        assert!(caps.power_metering);
        assert!(caps.energy_metering);
        assert!(!caps.cover_support);
    }

    #[test]
    fn test_two_channel_metering_implies_cover() {
        let caps = infer_capabilities_from_app("Plus2PM");
        assert!(caps.power_metering);
        assert!(caps.cover_support);
    }

    #[test]
    fn test_three_phase() {
        let caps = infer_capabilities_from_app("Pro3EM");
        assert!(caps.three_phase);
        assert!(caps.energy_metering);
    }

    #[test]
    fn test_lighting() {
        assert!(infer_capabilities_from_app("PlusWallDimmer").dimming);

        let rgbw = infer_capabilities_from_app("PlusRGBWPM");
        assert!(rgbw.dimming && rgbw.color_control && rgbw.power_metering);

        let duo = infer_capabilities_from_app("DuoBulbG3");
        assert!(duo.dimming && duo.color_temperature);
        assert!(infer_capabilities_from_app("MultiColorBulb").color_control);
    }

    #[test]
    fn test_cover_words_case_insensitive() {
        assert!(infer_capabilities_from_app("ShutterPro").cover_support);
        assert!(infer_capabilities_from_app("myROLLER").cover_support);
    }

    #[test]
    fn test_case_sensitive_codes() {
        // Lower-case "pm" is not the vendor's metering suffix.
        assert_eq!(infer_capabilities_from_app("pump"), Capabilities::default());
    }

    #[test]
    fn test_plain_switch_infers_nothing() {
        assert_eq!(infer_capabilities_from_app("Plus1"), Capabilities::default());
        assert_eq!(infer_capabilities_from_app(""), Capabilities::default());
    }
}
