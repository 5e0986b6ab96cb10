use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Countable physical and logical sub-units of a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    pub switches: u32,
    pub covers: u32,
    pub lights: u32,
    pub inputs: u32,
    pub power_meters: u32,
    pub energy_meters: u32,
    pub voltmeters: u32,
    pub temperature_sensors: u32,
    pub humidity_sensors: u32,
    pub analog_inputs: u32,
    pub rgb_channels: u32,
    pub white_channels: u32,
    pub has_thermostat: bool,
    pub has_display: bool,
}

impl Components {
    /// Every count is at least the corresponding count in `minimum`, and
    /// every flag set in `minimum` is set here. Zero counts and unset
    /// flags in `minimum` never exclude.
    pub fn meets_minimum(&self, minimum: &Components) -> bool {
        self.switches >= minimum.switches
            && self.covers >= minimum.covers
            && self.lights >= minimum.lights
            && self.inputs >= minimum.inputs
            && self.power_meters >= minimum.power_meters
            && self.energy_meters >= minimum.energy_meters
            && self.voltmeters >= minimum.voltmeters
            && self.temperature_sensors >= minimum.temperature_sensors
            && self.humidity_sensors >= minimum.humidity_sensors
            && self.analog_inputs >= minimum.analog_inputs
            && self.rgb_channels >= minimum.rgb_channels
            && self.white_channels >= minimum.white_channels
            && (self.has_thermostat || !minimum.has_thermostat)
            && (self.has_display || !minimum.has_display)
    }
}

/// Generic component tag used by callers instead of reading `Components`
/// fields directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Switch,
    Cover,
    Light,
    Input,
    PowerMeter,
    EnergyMeter,
    Voltmeter,
    Temperature,
    Humidity,
    Analog,
    Rgb,
    White,
    Thermostat,
    Display,
    Script,
    Schedule,
    Webhook,
    Kvs,
    Virtual,
    Smoke,
    Flood,
    Motion,
    Contact,
    Tilt,
    Illuminance,
    Gas,
    Battery,
}

/// Names devices use for their components, mapped to the tag.
const COMPONENT_NAMES: &[(&str, ComponentType)] = &[
    ("switch", ComponentType::Switch),
    ("relay", ComponentType::Switch),
    ("cover", ComponentType::Cover),
    ("roller", ComponentType::Cover),
    ("light", ComponentType::Light),
    ("dimmer", ComponentType::Light),
    ("input", ComponentType::Input),
    ("pm", ComponentType::PowerMeter),
    ("pm1", ComponentType::PowerMeter),
    ("power_meter", ComponentType::PowerMeter),
    ("meter", ComponentType::PowerMeter),
    ("em", ComponentType::EnergyMeter),
    ("em1", ComponentType::EnergyMeter),
    ("emeter", ComponentType::EnergyMeter),
    ("energy_meter", ComponentType::EnergyMeter),
    ("voltmeter", ComponentType::Voltmeter),
    ("temperature", ComponentType::Temperature),
    ("humidity", ComponentType::Humidity),
    ("analog", ComponentType::Analog),
    ("rgb", ComponentType::Rgb),
    ("rgbw", ComponentType::Rgb),
    ("white", ComponentType::White),
    ("cct", ComponentType::White),
    ("thermostat", ComponentType::Thermostat),
    ("display", ComponentType::Display),
    ("ui", ComponentType::Display),
    ("script", ComponentType::Script),
    ("schedule", ComponentType::Schedule),
    ("webhook", ComponentType::Webhook),
    ("kvs", ComponentType::Kvs),
    ("virtual", ComponentType::Virtual),
    ("smoke", ComponentType::Smoke),
    ("flood", ComponentType::Flood),
    ("motion", ComponentType::Motion),
    ("contact", ComponentType::Contact),
    ("window", ComponentType::Contact),
    ("tilt", ComponentType::Tilt),
    ("illuminance", ComponentType::Illuminance),
    ("lux", ComponentType::Illuminance),
    ("gas", ComponentType::Gas),
    ("battery", ComponentType::Battery),
    ("devicepower", ComponentType::Battery),
];

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Switch => "switch",
            ComponentType::Cover => "cover",
            ComponentType::Light => "light",
            ComponentType::Input => "input",
            ComponentType::PowerMeter => "power_meter",
            ComponentType::EnergyMeter => "energy_meter",
            ComponentType::Voltmeter => "voltmeter",
            ComponentType::Temperature => "temperature",
            ComponentType::Humidity => "humidity",
            ComponentType::Analog => "analog",
            ComponentType::Rgb => "rgb",
            ComponentType::White => "white",
            ComponentType::Thermostat => "thermostat",
            ComponentType::Display => "display",
            ComponentType::Script => "script",
            ComponentType::Schedule => "schedule",
            ComponentType::Webhook => "webhook",
            ComponentType::Kvs => "kvs",
            ComponentType::Virtual => "virtual",
            ComponentType::Smoke => "smoke",
            ComponentType::Flood => "flood",
            ComponentType::Motion => "motion",
            ComponentType::Contact => "contact",
            ComponentType::Tilt => "tilt",
            ComponentType::Illuminance => "illuminance",
            ComponentType::Gas => "gas",
            ComponentType::Battery => "battery",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComponentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase().replace('-', "_");
        COMPONENT_NAMES
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| Error::UnknownComponent(s.to_string()))
    }
}

/// Sensor kinds a profile may report, including ones with no count in
/// `Components`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Temperature,
    Humidity,
    Smoke,
    Flood,
    Motion,
    Contact,
    Tilt,
    Illuminance,
    Gas,
    Battery,
    Voltage,
    Current,
    Power,
    Energy,
    PowerFactor,
}

super::named_enum!(SensorType, "sensor type", {
    Temperature => "temperature",
    Humidity => "humidity",
    Smoke => "smoke",
    Flood => "flood",
    Motion => "motion",
    Contact => "contact",
    Tilt => "tilt",
    Illuminance => "illuminance" | "lux",
    Gas => "gas",
    Battery => "battery",
    Voltage => "voltage",
    Current => "current",
    Power => "power",
    Energy => "energy",
    PowerFactor => "power_factor" | "pf",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_parse() {
        assert_eq!("Switch".parse::<ComponentType>().unwrap(), ComponentType::Switch);
        assert_eq!("pm1".parse::<ComponentType>().unwrap(), ComponentType::PowerMeter);
        assert_eq!("EM1".parse::<ComponentType>().unwrap(), ComponentType::EnergyMeter);
        assert_eq!("power-meter".parse::<ComponentType>().unwrap(), ComponentType::PowerMeter);
        assert!(matches!(
            "flux_capacitor".parse::<ComponentType>(),
            Err(Error::UnknownComponent(_))
        ));
    }

    #[test]
    fn test_component_names_round_trip_through_as_str() {
        for (_, kind) in COMPONENT_NAMES {
            assert_eq!(kind.as_str().parse::<ComponentType>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_meets_minimum_is_threshold() {
        let four = Components {
            switches: 4,
            inputs: 4,
            ..Default::default()
        };
        let want_two = Components {
            switches: 2,
            ..Default::default()
        };
        let want_ten = Components {
            switches: 10,
            ..Default::default()
        };
        assert!(four.meets_minimum(&want_two));
        assert!(!four.meets_minimum(&want_ten));
        assert!(four.meets_minimum(&Components::default()));
    }

    #[test]
    fn test_meets_minimum_flags() {
        let plain = Components::default();
        let want_display = Components {
            has_display: true,
            ..Default::default()
        };
        assert!(!plain.meets_minimum(&want_display));
    }

    #[test]
    fn test_sensor_type_parse() {
        assert_eq!("pf".parse::<SensorType>().unwrap(), SensorType::PowerFactor);
        assert_eq!(SensorType::PowerFactor.to_string(), "power_factor");
    }
}
