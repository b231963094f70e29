use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use roi_estimator_lib::core::PartialInputs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roi-estimator", version, about = "Estimate ROI across pricing tiers")]
pub struct Cli {
    /// Configuration file path (defaults to the user config directory)
    #[arg(short, long, global = true, env = "ROI_ESTIMATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Estimator catalog file (TOML or JSON); overrides the configured catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Report language: auto, en, fr
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the catalog's tiers
    Tiers,

    /// Compute the ROI of one tier
    Compute {
        #[command(flatten)]
        inputs: InputArgs,

        /// Tier key; unknown keys use the default tier
        #[arg(short, long)]
        tier: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute every tier side by side
    Compare {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Industry, reported alongside the results
    #[arg(long)]
    pub industry: Option<String>,

    /// Average deal amount
    #[arg(long)]
    pub average_deal_amount: Option<f64>,

    /// Deals closed per month
    #[arg(long)]
    pub monthly_deals_closed: Option<f64>,

    /// Average hours spent per deal
    #[arg(long = "hours-per-deal")]
    pub average_time_per_deal_hours: Option<f64>,

    /// General monthly operating cost
    #[arg(long)]
    pub monthly_operating_cost: Option<f64>,

    /// Partial inputs as a JSON object; explicit flags take precedence
    #[arg(long)]
    pub input_json: Option<String>,
}

impl InputArgs {
    pub fn to_partial(&self) -> anyhow::Result<PartialInputs> {
        let from_json = match &self.input_json {
            Some(raw) => {
                let value: serde_json::Value =
                    serde_json::from_str(raw).context("--input-json is not valid JSON")?;
                PartialInputs::from_json(&value)
            }
            None => PartialInputs::default(),
        };

        Ok(PartialInputs {
            industry: self.industry.clone().or(from_json.industry),
            average_deal_amount: self.average_deal_amount.or(from_json.average_deal_amount),
            monthly_deals_closed: self.monthly_deals_closed.or(from_json.monthly_deals_closed),
            average_time_per_deal_hours: self
                .average_time_per_deal_hours
                .or(from_json.average_time_per_deal_hours),
            monthly_operating_cost: self.monthly_operating_cost.or(from_json.monthly_operating_cost),
        })
    }
}
