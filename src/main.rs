use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use shelly_profiles::cli::{Cli, Command, MatchArgs};
use shelly_profiles::config::Config;
use shelly_profiles::profile::{Capabilities, Capability, Components};
use shelly_profiles::{Detector, Profile, Registry, catalog, detect, matching, output};
use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SHELLY_PROFILES_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn build_registry(config: &Config) -> Result<Registry> {
    let registry = if config.catalog.builtin {
        shelly_profiles::build_default_registry()
    } else {
        Registry::new()
    };
    catalog::load_into(&registry, &config.catalog.extra)
        .context("failed to load extra catalog files")?;
    Ok(registry)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = shelly_profiles::config::load(cli.config.as_deref());
    if !config.output.color {
        colored::control::set_override(false);
    }
    let json = cli.json || config.output.json;

    if let Command::Completions { shell } = cli.command {
        shelly_profiles::cli::print_completions(shell);
        return Ok(());
    }

    let registry = build_registry(&config)?;

    match cli.command {
        Command::List {
            generation,
            series,
            form_factor,
            power_source,
        } => {
            let profiles = registry.filter(|p| {
                generation.is_none_or(|g| p.generation == g)
                    && series.is_none_or(|s| p.series == s)
                    && form_factor.is_none_or(|f| p.form_factor == f)
                    && power_source.is_none_or(|ps| p.power_source == ps)
            });
            print_profiles(output::sorted(profiles), json)?
        }
        Command::Show { model } => cmd_show(&registry, &model, json)?,
        Command::Search { query } => print_profiles(output::sorted(registry.search(&query)), json)?,
        Command::Detect { file } => cmd_detect(&registry, file, json)?,
        Command::Match(args) => cmd_match(&registry, &args, json)?,
        Command::Similar { model } => cmd_similar(&registry, &model, json)?,
        Command::Infer { app } => cmd_infer(&registry, &app, json)?,
        Command::Completions { .. } => {}
    }

    Ok(())
}

fn print_profiles(profiles: Vec<Arc<Profile>>, json: bool) -> Result<()> {
    if json {
        output::print_json(&output::profiles_json(&profiles))?;
    } else {
        output::print_profile_table(&profiles);
    }
    Ok(())
}

fn cmd_show(registry: &Registry, model: &str, json: bool) -> Result<()> {
    let profile = registry
        .get(model)
        .or_else(|| registry.get_by_app(model))
        .with_context(|| format!("no profile for model or app '{}'", model))?;

    if json {
        output::print_json(&serde_json::to_value(profile.as_ref())?)?;
    } else {
        output::print_profile(&profile);
    }
    Ok(())
}

fn cmd_detect(registry: &Registry, file: Option<PathBuf>, json: bool) -> Result<()> {
    let mut payload = Vec::new();
    match &file {
        Some(path) => {
            payload = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_end(&mut payload)
                .context("failed to read stdin")?;
        }
    }

    let result = Detector::new(registry).detect_from_json(&payload);

    if json {
        output::print_json(&output::detection_json(&result))?;
    } else {
        output::print_detection(&result);
    }
    Ok(())
}

fn cmd_match(registry: &Registry, args: &MatchArgs, json: bool) -> Result<()> {
    let mut required = Capabilities::default();
    for name in &args.capabilities {
        let capability: Capability = name.parse()?;
        capability.set(&mut required, true);
    }

    let profiles = match_both(registry, &required, &args.minimum_components());
    print_profiles(output::sorted(profiles), json)
}

/// Profiles passing both the capability and the component matcher.
fn match_both(
    registry: &Registry,
    required: &Capabilities,
    minimum: &Components,
) -> Vec<Arc<Profile>> {
    let by_components: HashSet<String> = matching::match_components(registry, minimum)
        .into_iter()
        .map(|p| p.model.clone())
        .collect();
    matching::match_capabilities(registry, required)
        .into_iter()
        .filter(|p| by_components.contains(&p.model))
        .collect()
}

fn cmd_similar(registry: &Registry, model: &str, json: bool) -> Result<()> {
    let similar = matching::find_similar(registry, model)
        .with_context(|| format!("no profile for model '{}'", model))?;
    print_profiles(output::sorted(similar), json)
}

fn cmd_infer(registry: &Registry, app: &str, json: bool) -> Result<()> {
    let catalog_entry = registry.get_by_app(app);
    let caps = detect::infer_capabilities_from_app(app);

    if json {
        output::print_json(&serde_json::json!({
            "app": app,
            "heuristic": true,
            "catalog_model": catalog_entry.as_ref().map(|p| p.model.as_str()),
            "capabilities": caps,
        }))?;
        return Ok(());
    }

    match catalog_entry {
        Some(profile) => {
            println!(
                "  {} {} is in the catalog as {}; showing the catalog entry.",
                "Note:".yellow(),
                app.cyan(),
                profile.model.bold()
            );
            println!();
            output::print_profile(&profile);
        }
        None => output::print_inferred(app, &caps),
    }
    Ok(())
}
