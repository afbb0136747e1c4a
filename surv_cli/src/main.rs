//! surv - boss survivability calculator
//!
//! Loads the saved loadout, fetches game data from the public sources,
//! and prints hitpoint and per-mechanic mitigation breakdowns.

mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::path::PathBuf;
use surv_core::api::ApiClient;
use surv_core::config::UserConfig;
use surv_core::loadout::{GameData, Loadout};
use surv_core::types::CombatStyle;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Boss survivability calculator
#[derive(Parser)]
#[command(name = "surv")]
#[command(about = "Compute hitpoints and mitigated boss damage for a loadout", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Print hitpoint and mitigation breakdowns (the default)
    Show(LoadoutArgs),

    /// Probe every data source and report freshness
    Sources,

    /// Persist the given overrides into the config file
    Save(LoadoutArgs),
}

#[derive(Args, Default)]
struct LoadoutArgs {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured combat style
    #[arg(long, value_parser = parse_style)]
    style: Option<CombatStyle>,

    /// Override the constitution level
    #[arg(long)]
    constitution: Option<u32>,

    /// Override the boss selection by id
    #[arg(long)]
    boss: Option<String>,

    /// Override the boss mode by id
    #[arg(long)]
    mode: Option<String>,

    /// Override the enrage percentage
    #[arg(long)]
    enrage: Option<u32>,
}

fn parse_style(s: &str) -> Result<CombatStyle, String> {
    s.parse()
}

impl LoadoutArgs {
    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => UserConfig::default_path().context("locating config file"),
        }
    }

    /// Load the saved config and fold the CLI overrides into it
    fn resolve_config(&self) -> Result<(PathBuf, UserConfig)> {
        let path = self.config_path()?;
        let mut config = UserConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?;

        if let Some(style) = self.style {
            config.combat_style = style;
        }
        if let Some(constitution) = self.constitution {
            config.constitution_level = constitution;
        }
        if let Some(boss) = &self.boss {
            config.boss = Some(boss.clone());
        }
        if let Some(mode) = &self.mode {
            config.boss_mode = Some(mode.clone());
        }
        if let Some(enrage) = self.enrage {
            config.enrage = enrage;
        }
        config.clamp();
        Ok((path, config))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Show(args)) => run_show(args).await,
        Some(Command::Sources) => run_sources().await,
        Some(Command::Save(args)) => run_save(args),
        None => run_show(LoadoutArgs::default()).await,
    }
}

async fn run_show(args: LoadoutArgs) -> Result<()> {
    let (_, config) = args.resolve_config()?;

    let client = ApiClient::new();
    let data = GameData::load(&client, config.combat_style)
        .await
        .context("fetching game data")?;
    debug!(
        armor = data.armor.len(),
        prayers = data.prayers.len(),
        bosses = data.bosses.len(),
        "game data loaded"
    );
    let loadout = Loadout::resolve(&config, &data);

    report::print_loadout(&loadout);
    report::print_hitpoints(&loadout.hitpoints());

    match loadout.boss {
        Some(boss) => {
            let breakdowns = loadout.boss_mitigation();
            report::print_boss_mitigation(boss, loadout.enrage, &breakdowns);
        }
        None => println!("\nNo boss selected; pass --boss <id> to see mitigation."),
    }
    Ok(())
}

async fn run_sources() -> Result<()> {
    let client = ApiClient::new();
    let checks = client.check_sources().await;

    report::separator("Data sources");
    for check in checks {
        let status = match (&check.error, check.age) {
            (Some(message), _) => format!("error: {message}"),
            (None, Some(age)) => format!("fresh ({}s old)", age.as_secs()),
            (None, None) => "expired".to_string(),
        };
        println!(
            "  {:<18} ttl {:>6}s  {}",
            check.endpoint.key,
            check.endpoint.ttl.as_secs(),
            status
        );
        println!("    {}", check.endpoint.url);
    }
    Ok(())
}

fn run_save(args: LoadoutArgs) -> Result<()> {
    let (path, config) = args.resolve_config()?;
    config
        .save(&path)
        .with_context(|| format!("saving config to {}", path.display()))?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}
