use crate::detect::DetectionResult;
use crate::profile::{Capabilities, ComponentType, Profile};
use colored::Colorize;
use std::sync::Arc;

const LABEL_W: usize = 18;

/// Components shown in the profile box, in display order.
const SHOWN_COMPONENTS: &[(&str, ComponentType)] = &[
    ("Switches", ComponentType::Switch),
    ("Covers", ComponentType::Cover),
    ("Lights", ComponentType::Light),
    ("Inputs", ComponentType::Input),
    ("Power meters", ComponentType::PowerMeter),
    ("Energy meters", ComponentType::EnergyMeter),
    ("Voltmeters", ComponentType::Voltmeter),
    ("Temperature", ComponentType::Temperature),
    ("Humidity", ComponentType::Humidity),
    ("Analog inputs", ComponentType::Analog),
];

fn join_or_none(items: Vec<String>) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn capability_list(caps: &Capabilities) -> String {
    join_or_none(caps.enabled().iter().map(|c| c.to_string()).collect())
}

/// Sort by model so repeated runs print the same order.
pub fn sorted(mut profiles: Vec<Arc<Profile>>) -> Vec<Arc<Profile>> {
    profiles.sort_by(|a, b| a.model.cmp(&b.model));
    profiles
}

fn print_box(title: &str, rows: &[(&str, String)]) {
    let inner_w = rows
        .iter()
        .map(|(l, v)| l.len().max(LABEL_W) + 2 + v.chars().count())
        .max()
        .unwrap_or(40)
        .max(title.len() + 2);

    let fill = inner_w.saturating_sub(1 + title.len());
    println!("╭─ {} {}╮", title.bold(), "─".repeat(fill));

    for (label, value) in rows {
        let padded = format!("{:<w$}", label, w = LABEL_W);
        let pad = inner_w.saturating_sub(LABEL_W + 2 + value.chars().count());
        println!("│ {}  {}{} │", padded.dimmed(), value, " ".repeat(pad));
    }

    println!("╰{}╯", "─".repeat(inner_w + 2));
}

pub fn print_profile(profile: &Profile) {
    let mut rows: Vec<(&str, String)> = vec![
        ("Model", profile.model.clone()),
        ("App", profile.app().unwrap_or("-").to_string()),
        ("Generation", profile.generation.to_string()),
        ("Series", profile.series.to_string()),
        ("Form factor", profile.form_factor.to_string()),
        ("Power source", profile.power_source.to_string()),
    ];

    for (label, kind) in SHOWN_COMPONENTS {
        let count = profile.component_count(*kind);
        if count > 0 {
            rows.push((*label, count.to_string()));
        }
    }
    if profile.components.has_thermostat {
        rows.push(("Thermostat", "yes".to_string()));
    }
    if profile.components.has_display {
        rows.push(("Display", "yes".to_string()));
    }

    rows.push(("Capabilities", capability_list(&profile.capabilities)));
    rows.push((
        "Protocols",
        join_or_none(
            profile
                .protocols
                .enabled()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
        ),
    ));
    if !profile.sensors.is_empty() {
        rows.push((
            "Sensors",
            profile
                .sensors
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ));
    }

    let limits = &profile.limits;
    if limits.max_scripts > 0 {
        rows.push(("Max scripts", limits.max_scripts.to_string()));
    }
    if limits.max_output_current > 0.0 {
        rows.push(("Max current", format!("{:.1} A", limits.max_output_current)));
    }
    if limits.max_power > 0.0 {
        rows.push(("Max power", format!("{:.0} W", limits.max_power)));
    }
    if limits.max_voltage > 0.0 {
        rows.push((
            "Voltage",
            format!("{:.0}-{:.0} V", limits.min_voltage, limits.max_voltage),
        ));
    }

    print_box(&profile.name, &rows);
}

pub fn print_profile_table(profiles: &[Arc<Profile>]) {
    if profiles.is_empty() {
        println!("{}", "  No matching profiles.".yellow());
        return;
    }

    let model_w = profiles.iter().map(|p| p.model.len()).max().unwrap_or(5).max(5);
    let app_w = profiles
        .iter()
        .map(|p| p.app().map_or(1, str::len))
        .max()
        .unwrap_or(3)
        .max(3);

    println!(
        "  {}",
        format!(
            "{:<mw$}  {:<aw$}  {:<7}  {:<8}  NAME",
            "MODEL",
            "APP",
            "GEN",
            "SERIES",
            mw = model_w,
            aw = app_w
        )
        .bold()
    );
    for p in profiles {
        println!(
            "  {}  {:<aw$}  {:<7}  {:<8}  {}",
            format!("{:<mw$}", p.model, mw = model_w).cyan(),
            p.app().unwrap_or("-"),
            p.generation.to_string(),
            p.series.to_string(),
            p.name,
            aw = app_w
        );
    }
    println!("  {}", format!("{} profile(s)", profiles.len()).dimmed());
}

pub fn print_detection(result: &DetectionResult) {
    let model = if result.model.is_empty() {
        "(none)"
    } else {
        result.model.as_str()
    };
    println!("  {} {}", "Generation:".bold(), result.generation);
    println!("  {} {}", "Model:".bold(), model);

    match &result.profile {
        Some(profile) => {
            println!("  {} {}", "Matched profile:".bold(), profile.name.green());
            println!();
            print_profile(profile);
        }
        None => println!("  {} no catalog entry for this device", "Note:".yellow()),
    }
}

pub fn print_inferred(app: &str, caps: &Capabilities) {
    println!(
        "  {} capabilities guessed from app name {}",
        "Heuristic:".yellow().bold(),
        app.cyan()
    );
    println!("  {}", capability_list(caps));
    println!(
        "  {}",
        "Advisory only. A catalog profile is authoritative when one exists.".dimmed()
    );
}

pub fn detection_json(result: &DetectionResult) -> serde_json::Value {
    serde_json::json!({
        "generation": result.generation,
        "model": result.model,
        "matched": result.is_match(),
        "profile": result.profile.as_deref(),
    })
}

pub fn profiles_json(profiles: &[Arc<Profile>]) -> serde_json::Value {
    serde_json::json!(profiles.iter().map(|p| p.as_ref()).collect::<Vec<&Profile>>())
}

pub fn print_json(value: &serde_json::Value) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Generation;

    #[test]
    fn test_detection_json_shape() {
        let mut profile = Profile::new("SNSW-001P16EU", "Shelly Plus 1PM");
        profile.generation = Generation::Gen2;
        let result = DetectionResult {
            generation: Generation::Gen2,
            model: "SNSW-001P16EU".to_string(),
            profile: Some(Arc::new(profile)),
        };
        let json = detection_json(&result);
        assert_eq!(json["generation"], "gen2");
        assert_eq!(json["matched"], true);
        assert_eq!(json["profile"]["name"], "Shelly Plus 1PM");

        let none = detection_json(&DetectionResult::unknown());
        assert_eq!(none["generation"], "unknown");
        assert!(none["profile"].is_null());
    }

    #[test]
    fn test_sorted_by_model() {
        let profiles = vec![
            Arc::new(Profile::new("B", "b")),
            Arc::new(Profile::new("A", "a")),
        ];
        let sorted = sorted(profiles);
        assert_eq!(sorted[0].model, "A");
        assert_eq!(profiles_json(&sorted)[1]["model"], "B");
    }

    #[test]
    fn test_capability_list_empty() {
        assert_eq!(capability_list(&Capabilities::default()), "none");
    }
}
