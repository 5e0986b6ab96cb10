use serde::{Deserialize, Serialize};

/// Boolean feature flags a model either supports or does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub power_metering: bool,
    pub energy_metering: bool,
    pub cover_support: bool,
    pub dimming: bool,
    pub color_control: bool,
    pub color_temperature: bool,
    pub scripting: bool,
    pub schedules: bool,
    pub advanced_schedules: bool,
    pub webhooks: bool,
    pub kvs: bool,
    pub virtual_components: bool,
    pub legacy_actions: bool,
    pub sensor_addon: bool,
    pub external_sensors: bool,
    pub calibration: bool,
    pub input_events: bool,
    pub effects: bool,
    pub no_neutral: bool,
    pub bidirectional_metering: bool,
    pub three_phase: bool,
}

impl Capabilities {
    /// Every flag set in `required` is also set here.
    pub fn is_superset_of(&self, required: &Capabilities) -> bool {
        Capability::ALL
            .iter()
            .all(|c| !c.get(required) || c.get(self))
    }

    /// The flags that are set, in declaration order.
    pub fn enabled(&self) -> Vec<Capability> {
        Capability::ALL
            .iter()
            .copied()
            .filter(|c| c.get(self))
            .collect()
    }
}

/// One field of `Capabilities`, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    PowerMetering,
    EnergyMetering,
    CoverSupport,
    Dimming,
    ColorControl,
    ColorTemperature,
    Scripting,
    Schedules,
    AdvancedSchedules,
    Webhooks,
    Kvs,
    VirtualComponents,
    LegacyActions,
    SensorAddon,
    ExternalSensors,
    Calibration,
    InputEvents,
    Effects,
    NoNeutral,
    BidirectionalMetering,
    ThreePhase,
}

/// Every accepted spelling of a capability, lower-cased with `-` and
/// spaces folded to `_`.
const CAPABILITY_ALIASES: &[(&str, Capability)] = &[
    ("power_metering", Capability::PowerMetering),
    ("powermetering", Capability::PowerMetering),
    ("pm", Capability::PowerMetering),
    ("power", Capability::PowerMetering),
    ("energy_metering", Capability::EnergyMetering),
    ("energymetering", Capability::EnergyMetering),
    ("em", Capability::EnergyMetering),
    ("energy", Capability::EnergyMetering),
    ("cover_support", Capability::CoverSupport),
    ("coversupport", Capability::CoverSupport),
    ("cover", Capability::CoverSupport),
    ("roller", Capability::CoverSupport),
    ("dimming", Capability::Dimming),
    ("dimmable", Capability::Dimming),
    ("dimmer", Capability::Dimming),
    ("color_control", Capability::ColorControl),
    ("colorcontrol", Capability::ColorControl),
    ("color", Capability::ColorControl),
    ("rgb", Capability::ColorControl),
    ("color_temperature", Capability::ColorTemperature),
    ("colortemperature", Capability::ColorTemperature),
    ("color_temp", Capability::ColorTemperature),
    ("cct", Capability::ColorTemperature),
    ("scripting", Capability::Scripting),
    ("scripts", Capability::Scripting),
    ("script", Capability::Scripting),
    ("schedules", Capability::Schedules),
    ("schedule", Capability::Schedules),
    ("scheduling", Capability::Schedules),
    ("advanced_schedules", Capability::AdvancedSchedules),
    ("advancedschedules", Capability::AdvancedSchedules),
    ("webhooks", Capability::Webhooks),
    ("webhook", Capability::Webhooks),
    ("kvs", Capability::Kvs),
    ("key_value_store", Capability::Kvs),
    ("virtual_components", Capability::VirtualComponents),
    ("virtualcomponents", Capability::VirtualComponents),
    ("virtual", Capability::VirtualComponents),
    ("legacy_actions", Capability::LegacyActions),
    ("actions", Capability::LegacyActions),
    ("sensor_addon", Capability::SensorAddon),
    ("addon", Capability::SensorAddon),
    ("external_sensors", Capability::ExternalSensors),
    ("ext_sensors", Capability::ExternalSensors),
    ("calibration", Capability::Calibration),
    ("calibrate", Capability::Calibration),
    ("input_events", Capability::InputEvents),
    ("inputevents", Capability::InputEvents),
    ("effects", Capability::Effects),
    ("no_neutral", Capability::NoNeutral),
    ("noneutral", Capability::NoNeutral),
    ("bidirectional_metering", Capability::BidirectionalMetering),
    ("bidirectional", Capability::BidirectionalMetering),
    ("three_phase", Capability::ThreePhase),
    ("threephase", Capability::ThreePhase),
    ("3phase", Capability::ThreePhase),
];

impl Capability {
    pub const ALL: [Capability; 21] = [
        Capability::PowerMetering,
        Capability::EnergyMetering,
        Capability::CoverSupport,
        Capability::Dimming,
        Capability::ColorControl,
        Capability::ColorTemperature,
        Capability::Scripting,
        Capability::Schedules,
        Capability::AdvancedSchedules,
        Capability::Webhooks,
        Capability::Kvs,
        Capability::VirtualComponents,
        Capability::LegacyActions,
        Capability::SensorAddon,
        Capability::ExternalSensors,
        Capability::Calibration,
        Capability::InputEvents,
        Capability::Effects,
        Capability::NoNeutral,
        Capability::BidirectionalMetering,
        Capability::ThreePhase,
    ];

    /// Resolve any accepted spelling to a capability.
    pub fn from_name(name: &str) -> Option<Capability> {
        let key = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        CAPABILITY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, cap)| *cap)
    }

    pub fn get(self, caps: &Capabilities) -> bool {
        *self.field(caps)
    }

    pub fn set(self, caps: &mut Capabilities, value: bool) {
        *self.field_mut(caps) = value;
    }

    fn field(self, caps: &Capabilities) -> &bool {
        match self {
            Capability::PowerMetering => &caps.power_metering,
            Capability::EnergyMetering => &caps.energy_metering,
            Capability::CoverSupport => &caps.cover_support,
            Capability::Dimming => &caps.dimming,
            Capability::ColorControl => &caps.color_control,
            Capability::ColorTemperature => &caps.color_temperature,
            Capability::Scripting => &caps.scripting,
            Capability::Schedules => &caps.schedules,
            Capability::AdvancedSchedules => &caps.advanced_schedules,
            Capability::Webhooks => &caps.webhooks,
            Capability::Kvs => &caps.kvs,
            Capability::VirtualComponents => &caps.virtual_components,
            Capability::LegacyActions => &caps.legacy_actions,
            Capability::SensorAddon => &caps.sensor_addon,
            Capability::ExternalSensors => &caps.external_sensors,
            Capability::Calibration => &caps.calibration,
            Capability::InputEvents => &caps.input_events,
            Capability::Effects => &caps.effects,
            Capability::NoNeutral => &caps.no_neutral,
            Capability::BidirectionalMetering => &caps.bidirectional_metering,
            Capability::ThreePhase => &caps.three_phase,
        }
    }

    fn field_mut(self, caps: &mut Capabilities) -> &mut bool {
        match self {
            Capability::PowerMetering => &mut caps.power_metering,
            Capability::EnergyMetering => &mut caps.energy_metering,
            Capability::CoverSupport => &mut caps.cover_support,
            Capability::Dimming => &mut caps.dimming,
            Capability::ColorControl => &mut caps.color_control,
            Capability::ColorTemperature => &mut caps.color_temperature,
            Capability::Scripting => &mut caps.scripting,
            Capability::Schedules => &mut caps.schedules,
            Capability::AdvancedSchedules => &mut caps.advanced_schedules,
            Capability::Webhooks => &mut caps.webhooks,
            Capability::Kvs => &mut caps.kvs,
            Capability::VirtualComponents => &mut caps.virtual_components,
            Capability::LegacyActions => &mut caps.legacy_actions,
            Capability::SensorAddon => &mut caps.sensor_addon,
            Capability::ExternalSensors => &mut caps.external_sensors,
            Capability::Calibration => &mut caps.calibration,
            Capability::InputEvents => &mut caps.input_events,
            Capability::Effects => &mut caps.effects,
            Capability::NoNeutral => &mut caps.no_neutral,
            Capability::BidirectionalMetering => &mut caps.bidirectional_metering,
            Capability::ThreePhase => &mut caps.three_phase,
        }
    }

    /// Canonical name, matching the serialized field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::PowerMetering => "power_metering",
            Capability::EnergyMetering => "energy_metering",
            Capability::CoverSupport => "cover_support",
            Capability::Dimming => "dimming",
            Capability::ColorControl => "color_control",
            Capability::ColorTemperature => "color_temperature",
            Capability::Scripting => "scripting",
            Capability::Schedules => "schedules",
            Capability::AdvancedSchedules => "advanced_schedules",
            Capability::Webhooks => "webhooks",
            Capability::Kvs => "kvs",
            Capability::VirtualComponents => "virtual_components",
            Capability::LegacyActions => "legacy_actions",
            Capability::SensorAddon => "sensor_addon",
            Capability::ExternalSensors => "external_sensors",
            Capability::Calibration => "calibration",
            Capability::InputEvents => "input_events",
            Capability::Effects => "effects",
            Capability::NoNeutral => "no_neutral",
            Capability::BidirectionalMetering => "bidirectional_metering",
            Capability::ThreePhase => "three_phase",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::from_name(s)
            .ok_or_else(|| crate::error::Error::UnknownCapability(s.to_string()))
    }
}

/// Transports the device exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Protocols {
    pub http: bool,
    pub websocket: bool,
    pub mqtt: bool,
    pub coiot: bool,
    pub ble: bool,
    pub matter: bool,
    pub zigbee: bool,
    pub zwave: bool,
    pub ethernet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    WebSocket,
    Mqtt,
    CoIoT,
    Ble,
    Matter,
    Zigbee,
    ZWave,
    Ethernet,
}

impl Protocol {
    pub const ALL: [Protocol; 9] = [
        Protocol::Http,
        Protocol::WebSocket,
        Protocol::Mqtt,
        Protocol::CoIoT,
        Protocol::Ble,
        Protocol::Matter,
        Protocol::Zigbee,
        Protocol::ZWave,
        Protocol::Ethernet,
    ];

    pub fn from_name(name: &str) -> Option<Protocol> {
        match name.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "http" | "rest" => Some(Protocol::Http),
            "websocket" | "ws" => Some(Protocol::WebSocket),
            "mqtt" => Some(Protocol::Mqtt),
            "coiot" | "coap" => Some(Protocol::CoIoT),
            "ble" | "bluetooth" | "bt" => Some(Protocol::Ble),
            "matter" => Some(Protocol::Matter),
            "zigbee" => Some(Protocol::Zigbee),
            "zwave" => Some(Protocol::ZWave),
            "ethernet" | "lan" | "eth" => Some(Protocol::Ethernet),
            _ => None,
        }
    }

    pub fn get(self, protocols: &Protocols) -> bool {
        match self {
            Protocol::Http => protocols.http,
            Protocol::WebSocket => protocols.websocket,
            Protocol::Mqtt => protocols.mqtt,
            Protocol::CoIoT => protocols.coiot,
            Protocol::Ble => protocols.ble,
            Protocol::Matter => protocols.matter,
            Protocol::Zigbee => protocols.zigbee,
            Protocol::ZWave => protocols.zwave,
            Protocol::Ethernet => protocols.ethernet,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::WebSocket => "websocket",
            Protocol::Mqtt => "mqtt",
            Protocol::CoIoT => "coiot",
            Protocol::Ble => "ble",
            Protocol::Matter => "matter",
            Protocol::Zigbee => "zigbee",
            Protocol::ZWave => "zwave",
            Protocol::Ethernet => "ethernet",
        }
    }
}

impl Protocols {
    pub fn enabled(&self) -> Vec<Protocol> {
        Protocol::ALL
            .iter()
            .copied()
            .filter(|p| p.get(self))
            .collect()
    }
}

/// Numeric operating ceilings. Zero means not applicable or not published.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_scripts: u32,
    pub max_schedules: u32,
    pub max_webhooks: u32,
    pub max_kvs_entries: u32,
    /// Bytes.
    pub max_script_size: u32,
    /// Amps.
    pub max_input_current: f64,
    /// Amps.
    pub max_output_current: f64,
    /// Watts.
    pub max_power: f64,
    /// Volts.
    pub min_voltage: f64,
    pub max_voltage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_capability_has_its_canonical_alias() {
        for cap in Capability::ALL {
            assert_eq!(Capability::from_name(cap.as_str()), Some(cap));
        }
    }

    #[test]
    fn test_alias_spellings() {
        assert_eq!(Capability::from_name("Power-Metering"), Some(Capability::PowerMetering));
        assert_eq!(Capability::from_name("three phase"), Some(Capability::ThreePhase));
        assert_eq!(Capability::from_name("KVS"), Some(Capability::Kvs));
        assert_eq!(Capability::from_name("warp_drive"), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut caps = Capabilities::default();
        for cap in Capability::ALL {
            assert!(!cap.get(&caps));
            cap.set(&mut caps, true);
            assert!(cap.get(&caps));
        }
        assert_eq!(caps.enabled().len(), Capability::ALL.len());
    }

    #[test]
    fn test_superset_ignores_unset_flags() {
        let have = Capabilities {
            power_metering: true,
            cover_support: true,
            ..Default::default()
        };
        let want = Capabilities {
            power_metering: true,
            ..Default::default()
        };
        assert!(have.is_superset_of(&want));
        assert!(!want.is_superset_of(&have));
        assert!(want.is_superset_of(&Capabilities::default()));
    }

    #[test]
    fn test_protocol_names() {
        assert_eq!(Protocol::from_name("Z-Wave"), Some(Protocol::ZWave));
        assert_eq!(Protocol::from_name("ws"), Some(Protocol::WebSocket));
        assert_eq!(Protocol::from_name("bluetooth"), Some(Protocol::Ble));
        assert_eq!(Protocol::from_name("lora"), None);

        let protocols = Protocols {
            http: true,
            matter: true,
            ..Default::default()
        };
        assert_eq!(protocols.enabled(), vec![Protocol::Http, Protocol::Matter]);
    }
}
