//! BLU Bluetooth Low Energy devices.
//!
//! They run no RPC firmware of their own and report through a gateway, so
//! their generation is `Unknown`, matching what prefix inference gives `SB`
//! model codes.

use super::{FormFactor, Generation, PowerSource, Profile, Protocols, SensorType, Series};
use crate::registry::Registry;

fn blu(
    model: &str,
    name: &str,
    app: &str,
    form_factor: FormFactor,
    sensors: &[SensorType],
) -> Profile {
    let mut p = Profile {
        app: Some(app.to_string()),
        generation: Generation::Unknown,
        series: Series::Blu,
        form_factor,
        power_source: PowerSource::Battery,
        protocols: Protocols {
            ble: true,
            ..Default::default()
        },
        ..Profile::new(model, name)
    };
    p.sensors.extend(sensors.iter().copied());
    p.sensors.insert(SensorType::Battery);
    p
}

fn profiles() -> Vec<Profile> {
    let mut button = blu("SBBT-002C", "Shelly BLU Button1", "BluButton1", FormFactor::Button, &[]);
    button.components.inputs = 1;
    button.capabilities.input_events = true;

    let mut remote = blu(
        "SBBT-004CEU",
        "Shelly BLU Wall Switch 4",
        "BluWallSwitch4",
        FormFactor::Button,
        &[],
    );
    remote.components.inputs = 4;
    remote.capabilities.input_events = true;

    let door_window = blu(
        "SBDW-002C",
        "Shelly BLU Door/Window",
        "BluDoorWindow",
        FormFactor::Sensor,
        &[SensorType::Contact, SensorType::Tilt, SensorType::Illuminance],
    );
    let motion = blu(
        "SBMO-003Z",
        "Shelly BLU Motion",
        "BluMotion",
        FormFactor::Sensor,
        &[SensorType::Motion, SensorType::Illuminance],
    );

    let mut ht = blu(
        "SBHT-003C",
        "Shelly BLU H&T",
        "BluHT",
        FormFactor::Sensor,
        &[SensorType::Temperature, SensorType::Humidity],
    );
    ht.components.temperature_sensors = 1;
    ht.components.humidity_sensors = 1;
    ht.components.inputs = 1;

    let mut trv = blu(
        "SBTR-EU867",
        "Shelly BLU TRV",
        "BluTRV",
        FormFactor::Sensor,
        &[SensorType::Temperature],
    );
    trv.components.has_thermostat = true;
    trv.components.temperature_sensors = 1;
    trv.capabilities.calibration = true;

    let mut gateway = blu("SNGW-BT01", "Shelly BLU Gateway", "BluGw", FormFactor::Gateway, &[]);
    gateway.sensors.clear();
    gateway.generation = Generation::Gen2;
    gateway.power_source = PowerSource::Usb;
    gateway.protocols.http = true;
    gateway.protocols.websocket = true;
    gateway.protocols.mqtt = true;
    gateway.capabilities.scripting = true;
    gateway.capabilities.schedules = true;
    gateway.capabilities.webhooks = true;
    gateway.capabilities.kvs = true;

    vec![button, remote, door_window, motion, ht, trv, gateway]
}

pub fn register(registry: &Registry) {
    registry.register_all(profiles());
}
