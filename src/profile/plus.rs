//! Gen2 Plus, Pro and Mini devices.

use super::{
    Capabilities, Components, FormFactor, Generation, Limits, PowerSource, Profile, Protocols,
    SensorType, Series,
};
use crate::registry::Registry;

fn base(
    model: &str,
    name: &str,
    app: &str,
    series: Series,
    form_factor: FormFactor,
    power_source: PowerSource,
) -> Profile {
    Profile {
        app: Some(app.to_string()),
        generation: Generation::Gen2,
        series,
        form_factor,
        power_source,
        protocols: Protocols {
            http: true,
            websocket: true,
            mqtt: true,
            ble: true,
            ethernet: series == Series::Pro,
            ..Default::default()
        },
        capabilities: Capabilities {
            scripting: true,
            schedules: true,
            webhooks: true,
            kvs: true,
            input_events: true,
            ..Default::default()
        },
        limits: Limits {
            max_scripts: 10,
            max_schedules: 20,
            max_webhooks: 20,
            max_kvs_entries: 50,
            max_script_size: 16 * 1024,
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
) -> Profile {
    let form_factor = if series == Series::Pro {
        FormFactor::DinRail
    } else {
        FormFactor::Flush
    };
    let mut p = base(model, name, app, series, form_factor, PowerSource::Mains);
    p.components = Components {
        switches,
        inputs: switches,
        power_meters: if metered { switches } else { 0 },
        temperature_sensors: 1,
        ..Default::default()
    };
    p.capabilities.power_metering = metered;
    p.capabilities.energy_metering = metered;
    p.limits.max_output_current = 16.0;
    p.limits.max_power = 3500.0;
    p.limits.min_voltage = 110.0;
    p.limits.max_voltage = 240.0;
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
    let mut plus1 = switch("SNSW-001X16EU", "Shelly Plus 1", "Plus1", Series::Plus, 1, false);
    plus1.power_source = PowerSource::MainsOrDc;
    plus1.capabilities.sensor_addon = true;
    plus1.capabilities.external_sensors = true;

    let mut plus1pm = switch("SNSW-001P16EU", "Shelly Plus 1PM", "Plus1PM", Series::Plus, 1, true);
    plus1pm.capabilities.sensor_addon = true;
    plus1pm.capabilities.external_sensors = true;

    let mut plus2pm = switch("SNSW-102P16EU", "Shelly Plus 2PM", "Plus2PM", Series::Plus, 2, true);
    plus2pm.components.covers = 1;
    plus2pm.capabilities.cover_support = true;
    plus2pm.capabilities.calibration = true;
    plus2pm.limits.max_output_current = 10.0;

    let mut plug_s = base(
        "SNPL-00112EU",
        "Shelly Plus Plug S",
        "PlusPlugS",
        Series::Plus,
        FormFactor::Plug,
        PowerSource::Mains,
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

    let mut ht = base(
        "SNSN-0013A",
        "Shelly Plus H&T",
        "PlusHT",
        Series::Plus,
        FormFactor::Sensor,
        PowerSource::MainsOrBattery,
    );
    ht.protocols.websocket = false;
    ht.capabilities.scripting = false;
    ht.capabilities.schedules = false;
    ht.capabilities.input_events = false;
    ht.limits = Limits::default();
    ht.components.temperature_sensors = 1;
    ht.components.humidity_sensors = 1;
    ht.components.has_display = true;
    ht.sensors.extend([SensorType::Temperature, SensorType::Humidity, SensorType::Battery]);

    let mut wall_dimmer = base(
        "SNDM-0013US",
        "Shelly Plus Wall Dimmer",
        "PlusWallDimmer",
        Series::Plus,
        FormFactor::Flush,
        PowerSource::Mains,
    );
    wall_dimmer.components.lights = 1;
    wall_dimmer.capabilities.dimming = true;
    wall_dimmer.limits.max_power = 300.0;

    let mut rgbw_pm = base(
        "SNDC-0D4P10WW",
        "Shelly Plus RGBW PM",
        "PlusRGBWPM",
        Series::Plus,
        FormFactor::Flush,
        PowerSource::Dc,
    );
    rgbw_pm.components = Components {
        lights: 4,
        inputs: 4,
        power_meters: 4,
        rgb_channels: 3,
        white_channels: 1,
        ..Default::default()
    };
    rgbw_pm.capabilities.dimming = true;
    rgbw_pm.capabilities.color_control = true;
    rgbw_pm.capabilities.power_metering = true;
    rgbw_pm.capabilities.energy_metering = true;
    rgbw_pm.limits.min_voltage = 12.0;
    rgbw_pm.limits.max_voltage = 24.0;

    let mut pro1 = switch("SPSW-001XE16EU", "Shelly Pro 1", "Pro1", Series::Pro, 1, false);
    pro1.components.inputs = 2;

    let mut pro1pm = switch("SPSW-001PE16EU", "Shelly Pro 1PM", "Pro1PM", Series::Pro, 1, true);
    pro1pm.components.inputs = 2;

    let mut pro2pm = switch("SPSW-002PE16EU", "Shelly Pro 2PM", "Pro2PM", Series::Pro, 2, true);
    pro2pm.components.covers = 1;
    pro2pm.capabilities.cover_support = true;
    pro2pm.capabilities.calibration = true;

    let mut pro4pm = switch("SPSW-104PE16EU", "Shelly Pro 4PM", "Pro4PM", Series::Pro, 4, true);
    pro4pm.components.has_display = true;
    pro4pm.limits.max_output_current = 16.0;

    let mut pro3em = base(
        "SPEM-003CEBEU",
        "Shelly Pro 3EM",
        "Pro3EM",
        Series::Pro,
        FormFactor::DinRail,
        PowerSource::Mains,
    );
    pro3em.components = Components {
        energy_meters: 3,
        voltmeters: 3,
        temperature_sensors: 1,
        ..Default::default()
    };
    pro3em.capabilities.input_events = false;
    pro3em.capabilities.power_metering = true;
    pro3em.capabilities.energy_metering = true;
    pro3em.capabilities.three_phase = true;
    pro3em.capabilities.bidirectional_metering = true;
    pro3em.capabilities.calibration = true;
    pro3em.sensors.extend([
        SensorType::Temperature,
        SensorType::Voltage,
        SensorType::Current,
        SensorType::Power,
        SensorType::Energy,
        SensorType::PowerFactor,
    ]);

    let mut mini1 = switch("SNSW-001X8EU", "Shelly Plus 1 Mini", "Mini1", Series::Mini, 1, false);
    mini1.limits.max_output_current = 8.0;
    let mut mini1pm = switch(
        "SNSW-001P8EU",
        "Shelly Plus 1PM Mini",
        "Mini1PM",
        Series::Mini,
        1,
        true,
    );
    mini1pm.limits.max_output_current = 8.0;

    let mut pm_mini = base(
        "SNPM-001PCEU16",
        "Shelly Plus PM Mini",
        "MiniPM",
        Series::Mini,
        FormFactor::Flush,
        PowerSource::Mains,
    );
    pm_mini.components.power_meters = 1;
    pm_mini.capabilities.input_events = false;
    pm_mini.capabilities.power_metering = true;
    pm_mini.capabilities.energy_metering = true;
    pm_mini.sensors.extend([
        SensorType::Voltage,
        SensorType::Current,
        SensorType::Power,
        SensorType::Energy,
    ]);

    vec![
        plus1,
        plus1pm,
        plus2pm,
        plug_s,
        ht,
        wall_dimmer,
        rgbw_pm,
        pro1,
        pro1pm,
        pro2pm,
        pro4pm,
        pro3em,
        mini1,
        mini1pm,
        pm_mini,
    ]
}

pub fn register(registry: &Registry) {
    registry.register_all(profiles());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_has_unique_app() {
        let profiles = profiles();
        let mut apps: Vec<_> = profiles.iter().filter_map(|p| p.app()).collect();
        apps.sort();
        apps.dedup();
        assert_eq!(apps.len(), profiles.len());
    }

    #[test]
    fn test_pro_devices_have_ethernet() {
        for p in profiles().iter().filter(|p| p.series == Series::Pro) {
            assert!(p.protocols.ethernet, "{}", p.model);
            assert_eq!(p.form_factor, FormFactor::DinRail);
        }
    }
}
