//! Gen3 devices (`S3` model codes).

use super::{
    Capabilities, Components, FormFactor, Generation, Limits, PowerSource, Profile, Protocols,
    SensorType, Series,
};
use crate::registry::Registry;

fn base(model: &str, name: &str, app: &str, series: Series, form_factor: FormFactor) -> Profile {
    Profile {
        app: Some(app.to_string()),
        generation: Generation::Gen3,
        series,
        form_factor,
        power_source: PowerSource::Mains,
        protocols: Protocols {
            http: true,
            websocket: true,
            mqtt: true,
            ble: true,
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
            ..Default::default()
        },
        limits: Limits {
            max_scripts: 10,
            max_schedules: 20,
            max_webhooks: 20,
            max_kvs_entries: 50,
            max_script_size: 20 * 1024,
            min_voltage: 110.0,
            max_voltage: 240.0,
            ..Default::default()
        },
        ..Profile::new(model, name)
    }
}

fn switch(
    model: &str,
    name: &str,
    app: &str,
    series: Series,
    switches: u32,
    metered: bool,
    max_current: f64,
) -> Profile {
    let mut p = base(model, name, app, series, FormFactor::Flush);
    p.components = Components {
        switches,
        inputs: switches,
        power_meters: if metered { switches } else { 0 },
        temperature_sensors: 1,
        ..Default::default()
    };
    p.capabilities.power_metering = metered;
    p.capabilities.energy_metering = metered;
    p.limits.max_output_current = max_current;
    p.limits.max_power = max_current * 230.0;
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
    let mut s1 = switch("S3SW-001X16EU", "Shelly 1 Gen3", "S1G3", Series::Standard, 1, false, 16.0);
    s1.power_source = PowerSource::MainsOrDc;
    s1.capabilities.sensor_addon = true;
    s1.capabilities.external_sensors = true;

    let mut s1pm = switch(
        "S3SW-001P16EU",
        "Shelly 1PM Gen3",
        "S1PMG3",
        Series::Standard,
        1,
        true,
        16.0,
    );
    s1pm.capabilities.sensor_addon = true;
    s1pm.capabilities.external_sensors = true;

    let mut s2pm = switch(
        "S3SW-002P16EU",
        "Shelly 2PM Gen3",
        "S2PMG3",
        Series::Standard,
        2,
        true,
        10.0,
    );
    s2pm.components.covers = 1;
    s2pm.capabilities.cover_support = true;
    s2pm.capabilities.calibration = true;

    let mini1 = switch(
        "S3SW-001X8EU",
        "Shelly 1 Mini Gen3",
        "Mini1G3",
        Series::Mini,
        1,
        false,
        8.0,
    );
    let mini1pm = switch(
        "S3SW-001P8EU",
        "Shelly 1PM Mini Gen3",
        "Mini1PMG3",
        Series::Mini,
        1,
        true,
        8.0,
    );

    let mut pm_mini = base(
        "S3PM-001PCEU16",
        "Shelly PM Mini Gen3",
        "MiniPMG3",
        Series::Mini,
        FormFactor::Flush,
    );
    pm_mini.components.power_meters = 1;
    pm_mini.capabilities.input_events = false;
    pm_mini.capabilities.power_metering = true;
    pm_mini.capabilities.energy_metering = true;
    pm_mini.capabilities.bidirectional_metering = true;
    pm_mini.sensors.extend([
        SensorType::Voltage,
        SensorType::Current,
        SensorType::Power,
        SensorType::Energy,
    ]);

    let mut dimmer = base(
        "S3DM-0010WW",
        "Shelly Dimmer 0/1-10V PM Gen3",
        "Dimmer0110VPMG3",
        Series::Standard,
        FormFactor::Flush,
    );
    dimmer.components = Components {
        lights: 1,
        inputs: 2,
        power_meters: 1,
        ..Default::default()
    };
    dimmer.capabilities.dimming = true;
    dimmer.capabilities.power_metering = true;
    dimmer.capabilities.energy_metering = true;
    dimmer.capabilities.calibration = true;
    dimmer.limits.max_output_current = 10.0;

    let mut ht = base(
        "S3SN-0U12A",
        "Shelly H&T Gen3",
        "HTG3",
        Series::Standard,
        FormFactor::Sensor,
    );
    ht.power_source = PowerSource::MainsOrBattery;
    ht.protocols.websocket = false;
    ht.capabilities = Capabilities {
        webhooks: true,
        ..Default::default()
    };
    ht.limits = Limits::default();
    ht.components = Components {
        temperature_sensors: 1,
        humidity_sensors: 1,
        has_display: true,
        ..Default::default()
    };
    ht.sensors.extend([SensorType::Temperature, SensorType::Humidity, SensorType::Battery]);

    let mut plug_s = base(
        "S3PL-00112EU",
        "Shelly Plug S Gen3",
        "PlugSG3",
        Series::Standard,
        FormFactor::Plug,
    );
    plug_s.components = Components {
        switches: 1,
        power_meters: 1,
        ..Default::default()
    };
    plug_s.capabilities.power_metering = true;
    plug_s.capabilities.energy_metering = true;
    plug_s.capabilities.effects = true;
    plug_s.limits.max_output_current = 12.0;
    plug_s.limits.max_power = 2500.0;
    plug_s.sensors.extend([SensorType::Power, SensorType::Energy]);

    let mut em = base(
        "S3EM-002CXCEU",
        "Shelly EM Gen3",
        "EMG3",
        Series::Standard,
        FormFactor::DinRail,
    );
    em.components = Components {
        switches: 1,
        energy_meters: 2,
        voltmeters: 1,
        ..Default::default()
    };
    em.capabilities.power_metering = true;
    em.capabilities.energy_metering = true;
    em.capabilities.bidirectional_metering = true;
    em.capabilities.input_events = false;

    vec![s1, s1pm, s2pm, mini1, mini1pm, pm_mini, dimmer, ht, plug_s, em]
}

pub fn register(registry: &Registry) {
    registry.register_all(profiles());
}
