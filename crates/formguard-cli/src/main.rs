mod commands;
mod config;
mod report;
mod values;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use config::{Config, OutputFormat};
use formguard_engine::{presets, FormValues, PredicateRegistry, RuleSet};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formguard")]
#[command(version, about = "formguard CLI - rule-driven form validation", long_about = None)]
struct Cli {
    /// Config file (default: ./formguard.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every field of a form, as on submit
    Check {
        #[command(flatten)]
        source: RuleSource,

        #[command(flatten)]
        values: ValueArgs,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Validate a single field, as on blur
    Field {
        /// Field id
        id: String,

        /// Raw field value
        value: String,

        #[command(flatten)]
        source: RuleSource,

        #[command(flatten)]
        values: ValueArgs,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the fields and rules of a rule file or preset
    Rules {
        #[command(flatten)]
        source: RuleSource,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[derive(Args)]
struct RuleSource {
    /// TOML rule file
    #[arg(short, long, conflicts_with = "preset")]
    rules: Option<PathBuf>,

    /// Built-in preset: login or registration
    #[arg(short, long)]
    preset: Option<String>,
}

#[derive(Args)]
struct ValueArgs {
    /// TOML or JSON file with the form's field values
    #[arg(long)]
    values: Option<PathBuf>,

    /// Set a field value (repeatable): --set email=a@b.co
    #[arg(short, long = "set")]
    set: Vec<String>,
}

impl RuleSource {
    /// Flags first, then config, then give up
    fn load(&self, config: &Config) -> Result<RuleSet> {
        if let Some(path) = &self.rules {
            return Ok(RuleSet::load(path, &PredicateRegistry::default())?);
        }
        if let Some(name) = &self.preset {
            return preset(name);
        }
        if let Some(path) = &config.rules.rules_file {
            return Ok(RuleSet::load(path, &PredicateRegistry::default())?);
        }
        if let Some(name) = &config.rules.default_preset {
            return preset(name);
        }
        bail!("No rules given: pass --rules FILE or --preset NAME")
    }
}

impl ValueArgs {
    fn collect(&self) -> Result<FormValues> {
        values::collect_values(self.values.as_deref(), &self.set)
    }
}

fn preset(name: &str) -> Result<RuleSet> {
    match presets::by_name(name) {
        Some(rules) => Ok(rules),
        None => bail!(
            "Unknown preset '{}'. Available presets: {}",
            name,
            presets::PRESET_NAMES.join(", ")
        ),
    }
}

fn init_logging(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.logging.max_level(),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    init_logging(&config, cli.verbose);
    if !config.output.color {
        colored::control::set_override(false);
    }

    // Execute command
    let ok = match cli.command {
        Commands::Check {
            source,
            values,
            format,
        } => {
            let rules = source.load(&config)?;
            let form = values.collect()?;
            commands::check::execute(rules, &form, format.unwrap_or(config.output.format))?
        }
        Commands::Field {
            id,
            value,
            source,
            values,
            format,
        } => {
            let rules = source.load(&config)?;
            let form = values.collect()?;
            commands::field::execute(
                rules,
                &id,
                &value,
                &form,
                format.unwrap_or(config.output.format),
            )?
        }
        Commands::Rules { source, format } => {
            let rules = source.load(&config)?;
            commands::rules::execute(&rules, format.unwrap_or(config.output.format))?;
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
