pub mod blu;
pub mod capabilities;
pub mod classic;
pub mod components;
pub mod gen3;
pub mod gen4;
pub mod plus;
pub mod wave;

pub use capabilities::{Capabilities, Capability, Limits, Protocol, Protocols};
pub use components::{ComponentType, Components, SensorType};

use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Implements `as_str`-backed `Display` and case-insensitive `FromStr`
/// for the unit enums that appear in profiles and on the command line.
macro_rules! named_enum {
    (
        $ty:ident,
        $kind:literal,
        { $($variant:ident => $name:literal $(| $alias:literal)*),+ $(,)? }
    ) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.trim().to_ascii_lowercase().replace('-', "_");
                match lower.as_str() {
                    $($name $(| $alias)* => Ok($ty::$variant),)+
                    _ => Err($crate::error::Error::UnknownEnum {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use named_enum;

/// Major hardware/firmware architecture revision.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    Gen1,
    Gen2,
    Gen3,
    Gen4,
    #[default]
    Unknown,
}

named_enum!(Generation, "generation", {
    Gen1 => "gen1" | "1",
    Gen2 => "gen2" | "2",
    Gen3 => "gen3" | "3",
    Gen4 => "gen4" | "4",
    Unknown => "unknown",
});

impl Generation {
    /// Map the integer `gen` field of a device info payload.
    /// Numbers outside 1..=4 are `Unknown`, never a guessed generation.
    pub fn from_number(n: i64) -> Self {
        match n {
            1 => Generation::Gen1,
            2 => Generation::Gen2,
            3 => Generation::Gen3,
            4 => Generation::Gen4,
            _ => Generation::Unknown,
        }
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            Generation::Gen1 => Some(1),
            Generation::Gen2 => Some(2),
            Generation::Gen3 => Some(3),
            Generation::Gen4 => Some(4),
            Generation::Unknown => None,
        }
    }

    /// Gen2 and later speak JSON-RPC.
    pub fn is_rpc(&self) -> bool {
        matches!(
            self,
            Generation::Gen2 | Generation::Gen3 | Generation::Gen4
        )
    }
}

/// Product tier, independent of generation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Series {
    Classic,
    Plus,
    Pro,
    Mini,
    Blu,
    Wave,
    WavePro,
    #[default]
    Standard,
}

named_enum!(Series, "series", {
    Classic => "classic",
    Plus => "plus",
    Pro => "pro",
    Mini => "mini",
    Blu => "blu",
    Wave => "wave",
    WavePro => "wave_pro" | "wavepro",
    Standard => "standard",
});

/// Physical packaging.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
    #[default]
    Flush,
    DinRail,
    Plug,
    Bulb,
    Strip,
    Sensor,
    Button,
    WallDisplay,
    Gateway,
}

named_enum!(FormFactor, "form factor", {
    Flush => "flush" | "in_wall",
    DinRail => "din_rail" | "din",
    Plug => "plug",
    Bulb => "bulb",
    Strip => "strip",
    Sensor => "sensor",
    Button => "button" | "remote",
    WallDisplay => "wall_display" | "display",
    Gateway => "gateway",
});

/// Power input.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PowerSource {
    #[default]
    Mains,
    Battery,
    Usb,
    Dc,
    MainsOrDc,
    MainsOrBattery,
}

named_enum!(PowerSource, "power source", {
    Mains => "mains" | "ac",
    Battery => "battery",
    Usb => "usb",
    Dc => "dc",
    MainsOrDc => "mains_or_dc" | "ac_dc",
    MainsOrBattery => "mains_or_battery",
});

/// Static descriptor of one device model.
///
/// Registered profiles are shared as `Arc<Profile>` and never mutated in
/// place; replacing one means registering a new profile with the same model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub model: String,
    pub name: String,
    /// Firmware application name reported by Gen2+ devices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    pub generation: Generation,
    pub series: Series,
    pub form_factor: FormFactor,
    pub power_source: PowerSource,
    pub components: Components,
    pub capabilities: Capabilities,
    pub protocols: Protocols,
    pub limits: Limits,
    pub sensors: BTreeSet<SensorType>,
}

impl Profile {
    pub fn new(model: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// The app name, treating an empty string the same as none.
    pub fn app(&self) -> Option<&str> {
        self.app.as_deref().filter(|a| !a.is_empty())
    }

    pub fn has_component(&self, kind: ComponentType) -> bool {
        self.component_count(kind) > 0
    }

    /// Number of instances of `kind` this model exposes.
    ///
    /// Counted components read `Components`; if the count is zero but a
    /// matching sensor tag is present the count is 1. Boolean and
    /// capability-backed components count as 0 or 1.
    pub fn component_count(&self, kind: ComponentType) -> u32 {
        let c = &self.components;
        let caps = &self.capabilities;
        let flag = |b: bool| u32::from(b);
        let counted = |n: u32, sensor: SensorType| {
            if n > 0 {
                n
            } else {
                flag(self.sensors.contains(&sensor))
            }
        };

        match kind {
            ComponentType::Switch => c.switches,
            ComponentType::Cover => c.covers,
            ComponentType::Light => c.lights,
            ComponentType::Input => c.inputs,
            ComponentType::PowerMeter => counted(c.power_meters, SensorType::Power),
            ComponentType::EnergyMeter => counted(c.energy_meters, SensorType::Energy),
            ComponentType::Voltmeter => counted(c.voltmeters, SensorType::Voltage),
            ComponentType::Temperature => {
                counted(c.temperature_sensors, SensorType::Temperature)
            }
            ComponentType::Humidity => counted(c.humidity_sensors, SensorType::Humidity),
            ComponentType::Analog => c.analog_inputs,
            ComponentType::Rgb => c.rgb_channels,
            ComponentType::White => c.white_channels,
            ComponentType::Thermostat => flag(c.has_thermostat),
            ComponentType::Display => flag(c.has_display),
            ComponentType::Script => flag(caps.scripting),
            ComponentType::Schedule => flag(caps.schedules),
            ComponentType::Webhook => flag(caps.webhooks),
            ComponentType::Kvs => flag(caps.kvs),
            ComponentType::Virtual => flag(caps.virtual_components),
            ComponentType::Smoke => flag(self.sensors.contains(&SensorType::Smoke)),
            ComponentType::Flood => flag(self.sensors.contains(&SensorType::Flood)),
            ComponentType::Motion => flag(self.sensors.contains(&SensorType::Motion)),
            ComponentType::Contact => flag(self.sensors.contains(&SensorType::Contact)),
            ComponentType::Tilt => flag(self.sensors.contains(&SensorType::Tilt)),
            ComponentType::Illuminance => {
                flag(self.sensors.contains(&SensorType::Illuminance))
            }
            ComponentType::Gas => flag(self.sensors.contains(&SensorType::Gas)),
            ComponentType::Battery => flag(self.sensors.contains(&SensorType::Battery)),
        }
    }

    /// Look a capability up by any of its accepted names.
    /// Unknown names report `false`.
    pub fn has_capability(&self, name: &str) -> bool {
        Capability::from_name(name).is_some_and(|c| c.get(&self.capabilities))
    }

    pub fn has_protocol(&self, name: &str) -> bool {
        Protocol::from_name(name).is_some_and(|p| p.get(&self.protocols))
    }

    pub fn is_gen1(&self) -> bool {
        self.generation == Generation::Gen1
    }

    pub fn is_gen2_plus(&self) -> bool {
        self.generation.is_rpc()
    }

    pub fn is_battery_powered(&self) -> bool {
        matches!(
            self.power_source,
            PowerSource::Battery | PowerSource::MainsOrBattery
        )
    }

    pub fn supports_scripting(&self) -> bool {
        self.capabilities.scripting
    }
}

/// Build a registry holding every built-in product family.
///
/// Each family registers itself through an explicit call so the catalog's
/// contents do not depend on initialization order.
pub fn build_default_registry() -> Registry {
    let registry = Registry::new();
    classic::register(&registry);
    plus::register(&registry);
    gen3::register(&registry);
    gen4::register(&registry);
    blu::register(&registry);
    wave::register(&registry);
    tracing::debug!(count = registry.count(), "built default profile registry");
    registry
}
