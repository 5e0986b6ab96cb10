//! Gen1 devices, identified by the `type` field of `/shelly`.

use super::{
    Capabilities, Components, FormFactor, Generation, Limits, PowerSource, Profile, Protocols,
    SensorType, Series,
};
use crate::registry::Registry;

fn protocols() -> Protocols {
    Protocols {
        http: true,
        mqtt: true,
        coiot: true,
        ..Default::default()
    }
}

fn base(model: &str, name: &str, form_factor: FormFactor, power_source: PowerSource) -> Profile {
    Profile {
        generation: Generation::Gen1,
        series: Series::Classic,
        form_factor,
        power_source,
        protocols: protocols(),
        capabilities: Capabilities {
            schedules: true,
            legacy_actions: true,
            ..Default::default()
        },
        ..Profile::new(model, name)
    }
}

fn relay(model: &str, name: &str, switches: u32, metered: bool) -> Profile {
    let mut p = base(model, name, FormFactor::Flush, PowerSource::MainsOrDc);
    p.components = Components {
        switches,
        inputs: switches,
        power_meters: if metered { switches } else { 0 },
        ..Default::default()
    };
    p.capabilities.input_events = true;
    p.capabilities.power_metering = metered;
    p.capabilities.energy_metering = metered;
    p.limits = Limits {
        max_output_current: if metered { 16.0 } else { 16.0 / switches as f64 },
        max_power: 3500.0,
        min_voltage: 110.0,
        max_voltage: 240.0,
        ..Default::default()
    };
    if metered {
        p.sensors.insert(SensorType::Temperature);
        p.sensors.insert(SensorType::Power);
        p.sensors.insert(SensorType::Energy);
    }
    p
}

fn battery_sensor(model: &str, name: &str, sensors: &[SensorType]) -> Profile {
    let mut p = base(model, name, FormFactor::Sensor, PowerSource::Battery);
    p.capabilities.schedules = false;
    p.sensors.extend(sensors.iter().copied());
    p.sensors.insert(SensorType::Battery);
    p.components.temperature_sensors = u32::from(sensors.contains(&SensorType::Temperature));
    p.components.humidity_sensors = u32::from(sensors.contains(&SensorType::Humidity));
    p
}

fn profiles() -> Vec<Profile> {
    let mut shelly1 = relay("SHSW-1", "Shelly 1", 1, false);
    shelly1.capabilities.sensor_addon = true;
    shelly1.capabilities.external_sensors = true;

    let mut shelly1pm = relay("SHSW-PM", "Shelly 1PM", 1, true);
    shelly1pm.capabilities.sensor_addon = true;
    shelly1pm.capabilities.external_sensors = true;
    shelly1pm.power_source = PowerSource::Mains;

    let mut shelly25 = relay("SHSW-25", "Shelly 2.5", 2, true);
    shelly25.components.covers = 1;
    shelly25.capabilities.cover_support = true;
    shelly25.capabilities.calibration = true;
    shelly25.limits.max_output_current = 10.0;
    shelly25.limits.max_power = 2300.0;

    let mut dimmer2 = base("SHDM-2", "Shelly Dimmer 2", FormFactor::Flush, PowerSource::Mains);
    dimmer2.components = Components {
        lights: 1,
        inputs: 2,
        power_meters: 1,
        ..Default::default()
    };
    dimmer2.capabilities.dimming = true;
    dimmer2.capabilities.power_metering = true;
    dimmer2.capabilities.energy_metering = true;
    dimmer2.capabilities.calibration = true;
    dimmer2.capabilities.no_neutral = true;
    dimmer2.capabilities.input_events = true;
    dimmer2.limits.max_power = 220.0;
    dimmer2.sensors.extend([SensorType::Temperature, SensorType::Power]);

    let mut rgbw2 = base("SHRGBW2", "Shelly RGBW2", FormFactor::Flush, PowerSource::Dc);
    rgbw2.components = Components {
        lights: 4,
        inputs: 1,
        power_meters: 4,
        rgb_channels: 3,
        white_channels: 1,
        ..Default::default()
    };
    rgbw2.capabilities.dimming = true;
    rgbw2.capabilities.color_control = true;
    rgbw2.capabilities.effects = true;
    rgbw2.capabilities.power_metering = true;
    rgbw2.limits = Limits {
        min_voltage: 12.0,
        max_voltage: 24.0,
        max_power: 288.0,
        ..Default::default()
    };

    let mut em3 = base("SHEM-3", "Shelly 3EM", FormFactor::DinRail, PowerSource::Mains);
    em3.components = Components {
        switches: 1,
        energy_meters: 3,
        voltmeters: 3,
        ..Default::default()
    };
    em3.capabilities.power_metering = true;
    em3.capabilities.energy_metering = true;
    em3.capabilities.three_phase = true;
    em3.capabilities.bidirectional_metering = true;
    em3.sensors.extend([
        SensorType::Voltage,
        SensorType::Current,
        SensorType::Power,
        SensorType::Energy,
        SensorType::PowerFactor,
    ]);

    let mut em = base("SHEM", "Shelly EM", FormFactor::DinRail, PowerSource::Mains);
    em.components = Components {
        switches: 1,
        energy_meters: 2,
        voltmeters: 1,
        ..Default::default()
    };
    em.capabilities.power_metering = true;
    em.capabilities.energy_metering = true;
    em.capabilities.bidirectional_metering = true;

    let mut plug_s = base("SHPLG-S", "Shelly Plug S", FormFactor::Plug, PowerSource::Mains);
    plug_s.components = Components {
        switches: 1,
        power_meters: 1,
        ..Default::default()
    };
    plug_s.capabilities.power_metering = true;
    plug_s.capabilities.energy_metering = true;
    plug_s.limits.max_output_current = 12.0;
    plug_s.limits.max_power = 2500.0;
    plug_s.sensors.extend([SensorType::Temperature, SensorType::Power]);

    let mut duo = base("SHBDUO-1", "Shelly Duo", FormFactor::Bulb, PowerSource::Mains);
    duo.components.lights = 1;
    duo.components.white_channels = 1;
    duo.capabilities.dimming = true;
    duo.capabilities.color_temperature = true;
    duo.capabilities.power_metering = true;

    let mut bulb = base("SHCB-1", "Shelly Bulb RGBW", FormFactor::Bulb, PowerSource::Mains);
    bulb.components = Components {
        lights: 1,
        rgb_channels: 3,
        white_channels: 1,
        ..Default::default()
    };
    bulb.capabilities.dimming = true;
    bulb.capabilities.color_control = true;
    bulb.capabilities.color_temperature = true;
    bulb.capabilities.effects = true;

    let ht = battery_sensor(
        "SHHT-1",
        "Shelly H&T",
        &[SensorType::Temperature, SensorType::Humidity],
    );
    let flood = battery_sensor(
        "SHWT-1",
        "Shelly Flood",
        &[SensorType::Flood, SensorType::Temperature],
    );
    let door_window = battery_sensor(
        "SHDW-2",
        "Shelly Door/Window 2",
        &[
            SensorType::Contact,
            SensorType::Tilt,
            SensorType::Illuminance,
            SensorType::Temperature,
        ],
    );
    let smoke = battery_sensor("SHSM-01", "Shelly Smoke", &[SensorType::Smoke]);

    let motion = battery_sensor(
        "SHMOS-01",
        "Shelly Motion",
        &[SensorType::Motion, SensorType::Illuminance],
    );

    let mut gas = base("SHGS-1", "Shelly Gas", FormFactor::Sensor, PowerSource::Mains);
    gas.capabilities.schedules = false;
    gas.sensors.insert(SensorType::Gas);

    let mut button = battery_sensor("SHBTN-2", "Shelly Button1", &[]);
    button.form_factor = FormFactor::Button;
    button.power_source = PowerSource::MainsOrBattery;
    button.components.inputs = 1;
    button.capabilities.input_events = true;

    let mut uni = base("SHUNI-1", "Shelly UNI", FormFactor::Flush, PowerSource::Dc);
    uni.components = Components {
        switches: 2,
        inputs: 2,
        analog_inputs: 1,
        ..Default::default()
    };
    uni.capabilities.external_sensors = true;
    uni.capabilities.input_events = true;
    uni.limits.min_voltage = 12.0;
    uni.limits.max_voltage = 36.0;

    vec![
        shelly1,
        shelly1pm,
        shelly25,
        dimmer2,
        rgbw2,
        em3,
        em,
        plug_s,
        duo,
        bulb,
        ht,
        flood,
        door_window,
        smoke,
        motion,
        gas,
        button,
        uni,
    ]
}

pub fn register(registry: &Registry) {
    registry.register_all(profiles());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::detect_generation;
    use crate::profile::ComponentType;

    #[test]
    fn test_models_follow_gen1_prefix() {
        for p in profiles() {
            assert_eq!(detect_generation(&p.model), Generation::Gen1, "{}", p.model);
            assert!(p.app.is_none(), "{} should have no app", p.model);
        }
    }

    #[test]
    fn test_shelly25_cover_mode() {
        let p = profiles().into_iter().find(|p| p.model == "SHSW-25").unwrap();
        assert_eq!(p.component_count(ComponentType::Switch), 2);
        assert!(p.has_component(ComponentType::Cover));
        assert!(p.has_capability("cover"));
    }

    #[test]
    fn test_battery_sensors() {
        let p = profiles().into_iter().find(|p| p.model == "SHWT-1").unwrap();
        assert!(p.is_battery_powered());
        assert!(p.has_component(ComponentType::Flood));
        assert_eq!(p.component_count(ComponentType::Temperature), 1);
    }
}
