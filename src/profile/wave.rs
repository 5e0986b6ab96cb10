//! Wave and Wave Pro Z-Wave devices.

use super::{
    Capabilities, Components, FormFactor, Generation, Limits, PowerSource, Profile, Protocols,
    SensorType, Series,
};
use crate::registry::Registry;

fn wave(model: &str, name: &str, series: Series, switches: u32, metered: bool) -> Profile {
    let form_factor = if series == Series::WavePro {
        FormFactor::DinRail
    } else {
        FormFactor::Flush
    };
    let mut p = Profile {
        generation: Generation::Unknown,
        series,
        form_factor,
        power_source: PowerSource::Mains,
        protocols: Protocols {
            zwave: true,
            ..Default::default()
        },
        components: Components {
            switches,
            inputs: switches,
            power_meters: if metered { switches } else { 0 },
            ..Default::default()
        },
        capabilities: Capabilities {
            power_metering: metered,
            energy_metering: metered,
            input_events: true,
            ..Default::default()
        },
        limits: Limits {
            max_output_current: 16.0,
            max_power: 3680.0,
            min_voltage: 110.0,
            max_voltage: 240.0,
            ..Default::default()
        },
        ..Profile::new(model, name)
    };
    if metered {
        p.sensors.extend([SensorType::Power, SensorType::Energy]);
    }
    p
}

fn profiles() -> Vec<Profile> {
    let mut wave1 = wave("QNSW-001X16EU", "Shelly Wave 1", Series::Wave, 1, false);
    wave1.power_source = PowerSource::MainsOrDc;

    let wave1pm = wave("QNSW-001P16EU", "Shelly Wave 1PM", Series::Wave, 1, true);

    let mut wave2pm = wave("QNSW-002P16EU", "Shelly Wave 2PM", Series::Wave, 2, true);
    wave2pm.components.covers = 1;
    wave2pm.capabilities.cover_support = true;
    wave2pm.capabilities.calibration = true;
    wave2pm.limits.max_output_current = 10.0;

    let mut shutter = wave("QNSH-001P10EU", "Shelly Wave Shutter", Series::Wave, 0, true);
    shutter.components.covers = 1;
    shutter.components.inputs = 2;
    shutter.components.power_meters = 1;
    shutter.capabilities.cover_support = true;
    shutter.capabilities.calibration = true;

    let mut dimmer = wave("QNDM-0013EU", "Shelly Wave Dimmer", Series::Wave, 0, true);
    dimmer.components.lights = 1;
    dimmer.components.inputs = 2;
    dimmer.components.power_meters = 1;
    dimmer.capabilities.dimming = true;
    dimmer.capabilities.no_neutral = true;

    let pro1 = wave("QPSW-0116", "Shelly Wave Pro 1", Series::WavePro, 1, false);
    let pro1pm = wave("QPSW-0116P", "Shelly Wave Pro 1PM", Series::WavePro, 1, true);
    let mut pro2pm = wave("QPSW-0216P", "Shelly Wave Pro 2PM", Series::WavePro, 2, true);
    pro2pm.components.covers = 1;
    pro2pm.capabilities.cover_support = true;

    vec![wave1, wave1pm, wave2pm, shutter, dimmer, pro1, pro1pm, pro2pm]
}

pub fn register(registry: &Registry) {
    registry.register_all(profiles());
}
