//! Gen4 devices (`S4` model codes). Adds Matter and Zigbee alongside RPC.

use super::{
    Capabilities, Components, FormFactor, Generation, Limits, PowerSource, Profile, Protocols,
    SensorType, Series,
};
use crate::registry::Registry;

fn switch(
    model: &str,
    name: &str,
    app: &str,
    series: Series,
    switches: u32,
    metered: bool,
    max_current: f64,
) -> Profile {
    let mut p = Profile {
        app: Some(app.to_string()),
        generation: Generation::Gen4,
        series,
        form_factor: FormFactor::Flush,
        power_source: PowerSource::Mains,
        protocols: Protocols {
            http: true,
            websocket: true,
            mqtt: true,
            ble: true,
            matter: true,
            zigbee: true,
            ..Default::default()
        },
        capabilities: Capabilities {
            scripting: true,
            schedules: true,
            advanced_schedules: true,
            webhooks: true,
            kvs: true,
            virtual_components: true,
            input_events: true,
            power_metering: metered,
            energy_metering: metered,
            ..Default::default()
        },
        components: Components {
            switches,
            inputs: switches,
            power_meters: if metered { switches } else { 0 },
            temperature_sensors: 1,
            ..Default::default()
        },
        limits: Limits {
            max_scripts: 10,
            max_schedules: 20,
            max_webhooks: 20,
            max_kvs_entries: 50,
            max_script_size: 20 * 1024,
            max_output_current: max_current,
            max_power: max_current * 230.0,
            min_voltage: 110.0,
            max_voltage: 240.0,
            ..Default::default()
        },
        ..Profile::new(model, name)
    };
    p.sensors.insert(SensorType::Temperature);
    if metered {
        p.sensors.extend([
            SensorType::Voltage,
            SensorType::Current,
            SensorType::Power,
            SensorType::Energy,
        ]);
    }
    p
}

fn profiles() -> Vec<Profile> {
    let mut s1 = switch("S4SW-001X16EU", "Shelly 1 Gen4", "S1G4", Series::Standard, 1, false, 16.0);
    s1.power_source = PowerSource::MainsOrDc;
    s1.capabilities.sensor_addon = true;

    let mut s1pm = switch(
        "S4SW-001P16EU",
        "Shelly 1PM Gen4",
        "S1PMG4",
        Series::Standard,
        1,
        true,
        16.0,
    );
    s1pm.capabilities.sensor_addon = true;

    let mut s2pm = switch(
        "S4SW-002P16EU",
        "Shelly 2PM Gen4",
        "S2PMG4",
        Series::Standard,
        2,
        true,
        10.0,
    );
    s2pm.components.covers = 1;
    s2pm.capabilities.cover_support = true;
    s2pm.capabilities.calibration = true;

    let mini1 = switch(
        "S4SW-001X8EU",
        "Shelly 1 Mini Gen4",
        "Mini1G4",
        Series::Mini,
        1,
        false,
        8.0,
    );
    let mini1pm = switch(
        "S4SW-001P8EU",
        "Shelly 1PM Mini Gen4",
        "Mini1PMG4",
        Series::Mini,
        1,
        true,
        8.0,
    );

    let mut plug = switch(
        "S4PL-00116EU",
        "Shelly Plug Gen4",
        "PlugG4",
        Series::Standard,
        1,
        true,
        16.0,
    );
    plug.form_factor = FormFactor::Plug;
    plug.components.inputs = 0;
    plug.capabilities.input_events = false;
    plug.capabilities.effects = true;

    vec![s1, s1pm, s2pm, mini1, mini1pm, plug]
}

pub fn register(registry: &Registry) {
    registry.register_all(profiles());
}
