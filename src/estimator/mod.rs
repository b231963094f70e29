//! Estimator catalog
//!
//! An [`EstimatorConfig`] is the read-only description of every pricing tier
//! together with the default inputs and the general assumptions the ROI
//! arithmetic runs on. A catalog can only be obtained through validation, so
//! code downstream may rely on it having at least one tier.

mod catalog;

pub use catalog::roi_estimator;

use crate::core::{CalculatorInputs, Error, Result, TierEntry, ValueRange};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Industry looked up when the requested one has no factor
pub const FALLBACK_INDUSTRY: &str = "Other";

/// Assumptions shared by every tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatorAssumptions {
    /// Low/high share of monthly deal volume attributed to the product
    #[serde(default = "default_revenue_lift")]
    pub revenue_lift: ValueRange,
    /// Share of manual deal handling removed by automation
    #[serde(default = "default_automation_reduction")]
    pub automation_reduction: f64,
    #[serde(default = "default_max_average_deal_amount")]
    pub max_average_deal_amount: f64,
    #[serde(default = "default_max_monthly_deals")]
    pub max_monthly_deals: f64,
    #[serde(default = "default_max_hours_per_deal")]
    pub max_hours_per_deal: f64,
}

fn default_revenue_lift() -> ValueRange { ValueRange::new(0.15, 0.3) }
fn default_automation_reduction() -> f64 { 0.35 }
fn default_max_average_deal_amount() -> f64 { 250_000.0 }
fn default_max_monthly_deals() -> f64 { 200.0 }
fn default_max_hours_per_deal() -> f64 { 40.0 }

impl Default for EstimatorAssumptions {
    fn default() -> Self {
        Self {
            revenue_lift: default_revenue_lift(),
            automation_reduction: default_automation_reduction(),
            max_average_deal_amount: default_max_average_deal_amount(),
            max_monthly_deals: default_max_monthly_deals(),
            max_hours_per_deal: default_max_hours_per_deal(),
        }
    }
}

/// Immutable catalog of pricing tiers and input defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawEstimatorConfig")]
pub struct EstimatorConfig {
    tiers: Vec<TierEntry>,
    example_input: CalculatorInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_tier_key: Option<String>,
    assumptions: EstimatorAssumptions,
    industry_factors: BTreeMap<String, f64>,
}

/// Unchecked deserialization target for [`EstimatorConfig`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEstimatorConfig {
    #[serde(default)]
    tiers: Vec<TierEntry>,
    example_input: CalculatorInputs,
    #[serde(default)]
    default_tier_key: Option<String>,
    #[serde(default)]
    assumptions: EstimatorAssumptions,
    #[serde(default)]
    industry_factors: BTreeMap<String, f64>,
}

impl TryFrom<RawEstimatorConfig> for EstimatorConfig {
    type Error = Error;

    fn try_from(raw: RawEstimatorConfig) -> Result<Self> {
        Self::new(
            raw.tiers,
            raw.example_input,
            raw.default_tier_key,
            raw.assumptions,
            raw.industry_factors,
        )
    }
}

impl EstimatorConfig {
    /// Build and validate a catalog
    pub fn new(
        tiers: Vec<TierEntry>,
        example_input: CalculatorInputs,
        default_tier_key: Option<String>,
        assumptions: EstimatorAssumptions,
        industry_factors: BTreeMap<String, f64>,
    ) -> Result<Self> {
        let config = Self {
            tiers,
            example_input,
            default_tier_key,
            assumptions,
            industry_factors,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a catalog from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::InvalidCatalog(format!("Failed to parse catalog: {}", e)))
    }

    /// Parse a catalog from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::InvalidCatalog(format!("Failed to parse catalog: {}", e)))
    }

    /// Load a catalog file; `.json` files are read as JSON, anything else as TOML
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        log::info!(
            "Loaded estimator catalog from {} ({} tiers)",
            path.display(),
            catalog.tiers.len()
        );
        Ok(catalog)
    }

    /// Replace the declared default tier key.
    ///
    /// The key is not required to exist; resolution falls back to the first
    /// tier when it does not.
    pub fn with_default_tier_key(mut self, key: Option<String>) -> Self {
        self.default_tier_key = key;
        self.warn_on_dangling_default();
        self
    }

    pub fn tiers(&self) -> &[TierEntry] {
        &self.tiers
    }

    pub fn tier(&self, key: &str) -> Option<&TierEntry> {
        self.tiers.iter().find(|entry| entry.key == key)
    }

    /// First declared tier
    pub fn first_tier(&self) -> &TierEntry {
        // Non-empty by construction.
        &self.tiers[0]
    }

    pub fn example_input(&self) -> &CalculatorInputs {
        &self.example_input
    }

    pub fn default_tier_key(&self) -> Option<&str> {
        self.default_tier_key.as_deref()
    }

    pub fn assumptions(&self) -> &EstimatorAssumptions {
        &self.assumptions
    }

    /// Display multiplier for an industry, falling back to "Other" and then 1.0
    pub fn industry_factor(&self, industry: &str) -> f64 {
        self.industry_factors
            .get(industry)
            .or_else(|| self.industry_factors.get(FALLBACK_INDUSTRY))
            .copied()
            .unwrap_or(1.0)
    }

    fn validate(&self) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(invalid("catalog declares no tiers"));
        }

        let mut seen = HashSet::new();
        for entry in &self.tiers {
            if entry.key.trim().is_empty() {
                return Err(invalid("tier key must not be empty"));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(invalid(format!("duplicate tier key '{}'", entry.key)));
            }

            let costs = &entry.tier.costs;
            if let Some(range) = costs.setup_range {
                if !is_amount(range.low) || !is_amount(range.high) {
                    return Err(invalid(format!("tier '{}' has a negative setup cost", entry.key)));
                }
                if !range.is_ordered() {
                    return Err(invalid(format!(
                        "tier '{}' setup range high is below low",
                        entry.key
                    )));
                }
            }
            if let Some(monthly) = costs.monthly_cost {
                if !is_amount(monthly) {
                    return Err(invalid(format!("tier '{}' has a negative monthly cost", entry.key)));
                }
            }
            if let Some(efficiency) = entry.tier.efficiency {
                if !is_amount(efficiency) {
                    return Err(invalid(format!("tier '{}' has a negative efficiency", entry.key)));
                }
            }
        }

        let lift = self.assumptions.revenue_lift;
        if !is_amount(lift.low) || !is_amount(lift.high) {
            return Err(invalid("revenue lift must be non-negative"));
        }
        if !lift.is_ordered() {
            return Err(invalid("revenue lift high is below low"));
        }
        if !(0.0..=1.0).contains(&self.assumptions.automation_reduction) {
            return Err(invalid("automation reduction must be between 0 and 1"));
        }
        let ceilings = [
            self.assumptions.max_average_deal_amount,
            self.assumptions.max_monthly_deals,
            self.assumptions.max_hours_per_deal,
        ];
        if ceilings.iter().any(|&max| !max.is_finite() || max <= 0.0) {
            return Err(invalid("input ceilings must be positive numbers"));
        }

        let input = &self.example_input;
        let example_amounts = [
            input.average_deal_amount,
            input.monthly_deals_closed,
            input.average_time_per_deal_hours,
            input.monthly_operating_cost,
        ];
        if !example_amounts.iter().all(|value| is_amount(*value)) {
            return Err(invalid("example input values must be non-negative numbers"));
        }

        self.warn_on_dangling_default();
        Ok(())
    }

    fn warn_on_dangling_default(&self) {
        if let Some(key) = &self.default_tier_key {
            if self.tier(key).is_none() {
                log::warn!("Default tier '{}' is not in the catalog, the first tier will be used", key);
            }
        }
    }
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidCatalog(message.into())
}
