//! ROI Estimator - command-line entry point
//!
//! Lists pricing tiers and projects the return of each one for a given
//! deal volume.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use roi_estimator_lib::core::Config;
use roi_estimator_lib::estimator::{roi_estimator, EstimatorConfig};
use roi_estimator_lib::i18n::I18n;
use roi_estimator_lib::report;
use roi_estimator_lib::roi::RoiEngine;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path).context("failed to load configuration")?;

    let catalog_path = cli.catalog.as_deref().or(config.estimator.catalog_path.as_deref());
    let i18n = I18n::new(cli.lang.as_deref().unwrap_or(&config.general.language));
    let symbol = config.general.currency_symbol.as_str();

    match cli.command {
        Commands::Config => {
            println!("# {}", config_path.display());
            println!("{}", toml::to_string_pretty(&config)?);
        }
        Commands::Tiers => {
            let engine = build_engine(catalog_path, &config)?;
            println!(
                "{}",
                report::render_tier_list(&engine.tiers(), engine.default_tier_key(), &i18n, symbol)
            );
        }
        Commands::Compute { inputs, tier, json } => {
            let engine = build_engine(catalog_path, &config)?;
            let partial = inputs.to_partial()?;
            let result = engine.compute(Some(&partial), tier.as_deref());

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let coerced = engine.coerce(Some(&partial));
                println!(
                    "{}",
                    report::render_text(&result, &coerced, engine.estimator(), &i18n, symbol)
                );
            }
        }
        Commands::Compare { inputs, json } => {
            let engine = build_engine(catalog_path, &config)?;
            let partial = inputs.to_partial()?;
            let results = engine.compare(Some(&partial));

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("{}", report::render_comparison(&results, &i18n, symbol));
            }
        }
    }

    Ok(())
}

/// Engine over the configured catalog, with the configured default tier applied
fn build_engine(catalog_path: Option<&Path>, config: &Config) -> anyhow::Result<RoiEngine> {
    let mut estimator = load_estimator(catalog_path)?;
    if let Some(default_tier) = &config.estimator.default_tier {
        estimator = estimator.with_default_tier_key(Some(default_tier.clone()));
    }
    Ok(RoiEngine::new(&estimator))
}

fn load_estimator(path: Option<&Path>) -> anyhow::Result<EstimatorConfig> {
    match path {
        Some(path) => EstimatorConfig::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(roi_estimator().clone()),
    }
}
