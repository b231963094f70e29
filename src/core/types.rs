//! Common types used across the application
//!
//! Everything that crosses the JSON/TOML boundary uses camelCase keys so the
//! catalog and result shapes match what the pricing pages consume.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inclusive low/high pair used for gain multipliers and setup costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
}

impl ValueRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn is_ordered(&self) -> bool {
        self.high >= self.low
    }
}

/// How a tier is sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TierKind {
    /// One-time license, optionally with a setup engagement
    SelfHosted,
    /// Recurring monthly plan
    Subscription,
}

impl TierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierKind::SelfHosted => "selfHosted",
            TierKind::Subscription => "subscription",
        }
    }

    /// Share of gross gain assumed to be realized in the profit projection
    pub fn default_efficiency(&self) -> f64 {
        match self {
            TierKind::SelfHosted => 0.5,
            TierKind::Subscription => 0.4,
        }
    }
}

/// Cost structure of a tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCosts {
    /// One-time setup cost range
    #[serde(default)]
    pub setup_range: Option<ValueRange>,
    /// Recurring subscription cost per month
    #[serde(default)]
    pub monthly_cost: Option<f64>,
}

impl TierCosts {
    pub fn has_setup(&self) -> bool {
        self.setup_range.is_some()
    }

    pub fn has_monthly(&self) -> bool {
        self.monthly_cost.is_some()
    }

    /// Free or baseline tier with nothing to pay
    pub fn is_free(&self) -> bool {
        !self.has_setup() && !self.has_monthly()
    }
}

/// One pricing option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierConfig {
    /// Display name
    pub label: String,
    pub kind: TierKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub costs: TierCosts,
    /// Overrides the kind's default efficiency in profit projections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
    /// Selector group; falls back to the tier kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Selector group heading; falls back to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    #[serde(default)]
    pub default_for_group: bool,
}

impl TierConfig {
    pub fn efficiency(&self) -> f64 {
        self.efficiency.unwrap_or_else(|| self.kind.default_efficiency())
    }

    /// Surface the setup cost only for one-time purchases
    pub fn shows_setup_by_default(&self) -> bool {
        self.costs.has_setup() && !self.costs.has_monthly()
    }
}

/// A tier together with its catalog key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierEntry {
    pub key: String,
    #[serde(flatten)]
    pub tier: TierConfig,
}

/// Business parameters supplied by the user, fully populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    /// Carried through for reporting; does not change the arithmetic
    pub industry: String,
    pub average_deal_amount: f64,
    pub monthly_deals_closed: f64,
    #[serde(default)]
    pub average_time_per_deal_hours: f64,
    #[serde(default)]
    pub monthly_operating_cost: f64,
}

/// Partially specified inputs, merged with the catalog defaults by
/// [`crate::roi::coerce_inputs`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_deal_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_deals_closed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_time_per_deal_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_operating_cost: Option<f64>,
}

impl PartialInputs {
    /// Pick fields out of an untyped JSON object.
    ///
    /// Each field is type-checked on its own: a string where a number is
    /// expected (even `"15000"`) is dropped rather than failing the whole
    /// object, and anything that is not an object yields no overrides.
    pub fn from_json(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        let number = |name: &str| fields.get(name).and_then(Value::as_f64);

        Self {
            industry: fields
                .get("industry")
                .and_then(Value::as_str)
                .map(str::to_string),
            average_deal_amount: number("averageDealAmount"),
            monthly_deals_closed: number("monthlyDealsClosed"),
            average_time_per_deal_hours: number("averageTimePerDealHours"),
            monthly_operating_cost: number("monthlyOperatingCost"),
        }
    }
}

/// One selectable tier, as shown in a tier picker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierOption {
    pub key: String,
    pub tier: TierConfig,
    pub show_setup_default: bool,
    pub group: String,
    pub group_label: String,
    pub is_group_default: bool,
}

/// Outcome of one ROI calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierResult {
    pub tier_key: String,
    pub tier: TierConfig,
    /// Net monthly gain range after operating and subscription costs
    pub gain_low: f64,
    pub gain_high: f64,
    /// Monthly gain range before any cost deduction
    pub gross_gain_low: f64,
    pub gross_gain_high: f64,
    /// Headline figure; the high bound of the net range
    pub monthly_net_benefit: f64,
    pub monthly_operating_cost: f64,
    pub costs: TierCosts,
    pub show_setup_default: bool,
    pub setup_low: f64,
    pub setup_high: f64,
    pub year1_profit: f64,
    pub year5_profit: f64,
    pub year10_profit: f64,
    /// Months to recover the setup cost; `None` when the tier never pays back
    pub payback_months: Option<f64>,
    pub manual_hours_monthly: f64,
    pub time_saved_monthly: f64,
    pub time_saved_annual: f64,
    pub automation_reduction_percent: f64,
}
