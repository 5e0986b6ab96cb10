use crate::profile::{Components, FormFactor, Generation, PowerSource, Series};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shelly-profiles",
    about = "Shelly device profile catalog - look up, detect and match device models",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON instead of formatted tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Use only this config file instead of the system and user ones
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log catalog and detection decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List catalog profiles, optionally filtered
    List {
        #[arg(long)]
        generation: Option<Generation>,
        #[arg(long)]
        series: Option<Series>,
        #[arg(long)]
        form_factor: Option<FormFactor>,
        #[arg(long)]
        power_source: Option<PowerSource>,
    },

    /// Show one profile by model code or app name
    Show {
        /// Model code (e.g., SNSW-001P16EU) or app name (e.g., Plus1PM)
        model: String,
    },

    /// Case-insensitive search over model, name and app
    Search { query: String },

    /// Identify a device from its /shelly or Shelly.GetDeviceInfo response
    Detect {
        /// JSON file to read (default: stdin)
        file: Option<PathBuf>,
    },

    /// Find profiles with at least the given capabilities and components
    Match(MatchArgs),

    /// List profiles of the same generation, series and form factor
    Similar { model: String },

    /// Guess capabilities from an app name (heuristic, not a catalog lookup)
    Infer { app: String },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (auto-detected if omitted)
        shell: Option<Shell>,
    },
}

#[derive(Args, Debug, Default)]
pub struct MatchArgs {
    /// Required capability (repeatable), e.g. power_metering, cover, scripting
    #[arg(short, long = "capability", value_name = "NAME")]
    pub capabilities: Vec<String>,

    #[arg(long, default_value_t = 0)]
    pub switches: u32,
    #[arg(long, default_value_t = 0)]
    pub covers: u32,
    #[arg(long, default_value_t = 0)]
    pub lights: u32,
    #[arg(long, default_value_t = 0)]
    pub inputs: u32,
    #[arg(long, default_value_t = 0)]
    pub power_meters: u32,
    #[arg(long, default_value_t = 0)]
    pub energy_meters: u32,
}

impl MatchArgs {
    pub fn minimum_components(&self) -> Components {
        Components {
            switches: self.switches,
            covers: self.covers,
            lights: self.lights,
            inputs: self.inputs,
            power_meters: self.power_meters,
            energy_meters: self.energy_meters,
            ..Default::default()
        }
    }
}

/// Print shell completions to stdout.
pub fn print_completions(shell: Option<Shell>) {
    let shell = shell.or_else(Shell::from_env).unwrap_or_else(|| {
        eprintln!(
            "Could not detect shell. Specify one: shelly-profiles completions bash|zsh|fish|elvish|powershell"
        );
        std::process::exit(1);
    });
    clap_complete::generate(
        shell,
        &mut Cli::command(),
        "shelly-profiles",
        &mut std::io::stdout(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "shelly-profiles",
            "list",
            "--generation",
            "gen2",
            "--series",
            "wave-pro",
        ])
        .unwrap();
        match cli.command {
            Command::List {
                generation, series, ..
            } => {
                assert_eq!(generation, Some(Generation::Gen2));
                assert_eq!(series, Some(Series::WavePro));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_parse_match() {
        let cli = Cli::try_parse_from([
            "shelly-profiles",
            "--json",
            "match",
            "-c",
            "pm",
            "--capability",
            "cover",
            "--switches",
            "2",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Match(args) => {
                assert_eq!(args.capabilities, ["pm", "cover"]);
                assert_eq!(args.minimum_components().switches, 2);
            }
            _ => panic!("expected match"),
        }
    }

    #[test]
    fn test_invalid_generation_rejected() {
        assert!(Cli::try_parse_from(["shelly-profiles", "list", "--generation", "gen9"]).is_err());
    }
}
