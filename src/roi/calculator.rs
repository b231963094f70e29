//! ROI arithmetic over an estimator catalog
//!
//! Everything here is total. Bad input fields are replaced by defaults and
//! unknown tier keys resolve to the default tier; none of it should be turned
//! into errors, the results feed a pricing page that must always render.

use crate::core::{CalculatorInputs, PartialInputs, TierEntry, TierOption, TierResult};
use crate::estimator::EstimatorConfig;

const YEAR5_RETENTION: f64 = 0.55;
const YEAR10_GROWTH: f64 = 1.1;

/// Merge `partial` over the catalog's example input.
///
/// A field is taken from `partial` only when it is a finite, non-negative
/// number (or a non-blank industry). Operating cost falls back to zero, not
/// to the example value: an omitted cost means "none provided".
pub fn coerce_inputs(estimator: &EstimatorConfig, partial: Option<&PartialInputs>) -> CalculatorInputs {
    let example = estimator.example_input();
    let empty = PartialInputs::default();
    let partial = partial.unwrap_or(&empty);

    CalculatorInputs {
        industry: partial
            .industry
            .as_deref()
            .filter(|industry| !industry.trim().is_empty())
            .map_or_else(|| example.industry.clone(), str::to_string),
        average_deal_amount: accept_amount(partial.average_deal_amount, "averageDealAmount")
            .unwrap_or(example.average_deal_amount),
        monthly_deals_closed: accept_amount(partial.monthly_deals_closed, "monthlyDealsClosed")
            .unwrap_or(example.monthly_deals_closed),
        average_time_per_deal_hours: accept_amount(
            partial.average_time_per_deal_hours,
            "averageTimePerDealHours",
        )
        .unwrap_or(example.average_time_per_deal_hours),
        monthly_operating_cost: accept_amount(partial.monthly_operating_cost, "monthlyOperatingCost")
            .unwrap_or(0.0),
    }
}

fn accept_amount(value: Option<f64>, field: &str) -> Option<f64> {
    let value = value?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        log::debug!("Ignoring invalid {} ({}), using default", field, value);
        None
    }
}

/// Every tier in declaration order, with selector metadata
pub fn resolve_tier_configs(estimator: &EstimatorConfig) -> Vec<TierOption> {
    estimator
        .tiers()
        .iter()
        .map(|entry| {
            let tier = &entry.tier;
            TierOption {
                key: entry.key.clone(),
                tier: tier.clone(),
                show_setup_default: tier.shows_setup_by_default(),
                group: tier
                    .group
                    .clone()
                    .unwrap_or_else(|| tier.kind.as_str().to_string()),
                group_label: tier.group_label.clone().unwrap_or_else(|| tier.label.clone()),
                is_group_default: tier.default_for_group,
            }
        })
        .collect()
}

/// The declared default tier key, or the first tier's key when the declared
/// one is missing from the catalog
pub fn get_default_tier_key(estimator: &EstimatorConfig) -> &str {
    resolve_default_tier(estimator).key.as_str()
}

fn resolve_default_tier(estimator: &EstimatorConfig) -> &TierEntry {
    estimator
        .default_tier_key()
        .and_then(|key| estimator.tier(key))
        .unwrap_or_else(|| estimator.first_tier())
}

fn resolve_tier<'a>(estimator: &'a EstimatorConfig, tier_key: Option<&str>) -> &'a TierEntry {
    match tier_key {
        Some(key) => estimator.tier(key).unwrap_or_else(|| {
            log::debug!("Unknown tier '{}', using the default tier", key);
            resolve_default_tier(estimator)
        }),
        None => resolve_default_tier(estimator),
    }
}

/// Compute the ROI projection of one tier.
///
/// `tier_key` selects the tier; `None` or a key absent from the catalog
/// selects the default tier. Net gains are not floored at zero: a negative
/// value means the tier does not pay for itself at these inputs.
pub fn compute_tier_result(
    estimator: &EstimatorConfig,
    inputs: &CalculatorInputs,
    tier_key: Option<&str>,
) -> TierResult {
    let entry = resolve_tier(estimator, tier_key);
    let tier = &entry.tier;
    let assumptions = estimator.assumptions();

    let average_deal = clamp_amount(inputs.average_deal_amount, assumptions.max_average_deal_amount);
    let monthly_deals = clamp_amount(inputs.monthly_deals_closed, assumptions.max_monthly_deals);
    let hours_per_deal = clamp_amount(inputs.average_time_per_deal_hours, assumptions.max_hours_per_deal);
    let monthly_operating_cost = non_negative(inputs.monthly_operating_cost);

    let monthly_base = average_deal * monthly_deals;
    let gross_gain_low = monthly_base * assumptions.revenue_lift.low;
    let gross_gain_high = monthly_base * assumptions.revenue_lift.high;

    let monthly_plan_cost = tier.costs.monthly_cost.unwrap_or(0.0);
    let total_monthly_cost = monthly_plan_cost + monthly_operating_cost;

    let gain_low = gross_gain_low - total_monthly_cost;
    let gain_high = gross_gain_high - total_monthly_cost;

    let (setup_low, setup_high) = tier
        .costs
        .setup_range
        .map_or((0.0, 0.0), |range| (range.low, range.high));

    let total_year_one_cost = setup_high + total_monthly_cost * 12.0;
    let year1_profit = gross_gain_high * 12.0 * tier.efficiency() - total_year_one_cost;
    let year5_profit = year1_profit * 5.0 * YEAR5_RETENTION;
    let year10_profit = year1_profit * 10.0 * YEAR5_RETENTION * YEAR10_GROWTH;

    let payback_months = (gain_high > 0.0).then(|| setup_high / gain_high);

    let manual_hours_monthly = hours_per_deal * monthly_deals;
    let time_saved_monthly = manual_hours_monthly * assumptions.automation_reduction;

    TierResult {
        tier_key: entry.key.clone(),
        tier: tier.clone(),
        gain_low,
        gain_high,
        gross_gain_low,
        gross_gain_high,
        monthly_net_benefit: gain_high,
        monthly_operating_cost,
        costs: tier.costs.clone(),
        show_setup_default: tier.shows_setup_by_default(),
        setup_low,
        setup_high,
        year1_profit,
        year5_profit,
        year10_profit,
        payback_months,
        manual_hours_monthly,
        time_saved_monthly,
        time_saved_annual: time_saved_monthly * 12.0,
        automation_reduction_percent: assumptions.automation_reduction * 100.0,
    }
}

/// Results for every tier, in declaration order
pub fn compare_tiers(estimator: &EstimatorConfig, inputs: &CalculatorInputs) -> Vec<TierResult> {
    estimator
        .tiers()
        .iter()
        .map(|entry| compute_tier_result(estimator, inputs, Some(&entry.key)))
        .collect()
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn clamp_amount(value: f64, max: f64) -> f64 {
    non_negative(value).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::roi_estimator;

    fn default_inputs() -> CalculatorInputs {
        coerce_inputs(roi_estimator(), None)
    }

    #[test]
    fn test_default_tier_result() {
        let estimator = roi_estimator();
        let inputs = default_inputs();

        let result = compute_tier_result(estimator, &inputs, None);

        assert_eq!(result.tier_key, get_default_tier_key(estimator));
        assert!(result.gain_low > 0.0);
        assert!(result.gross_gain_high >= result.gain_high);
        assert!(result.costs.setup_range.is_some());
        assert!(result.show_setup_default);
    }

    #[test]
    fn test_basic_monthly_tier() {
        let estimator = roi_estimator();
        let inputs = default_inputs();

        let result = compute_tier_result(estimator, &inputs, Some("basicMonthly"));

        assert_eq!(result.tier.label, "Basic Monthly");
        assert_eq!(result.costs.monthly_cost, Some(2000.0));
        assert!(!result.show_setup_default);
        assert!(result.monthly_net_benefit < result.gross_gain_high);
    }

    #[test]
    fn test_gross_gain_uses_revenue_lift() {
        let estimator = roi_estimator();
        let inputs = CalculatorInputs {
            industry: "SaaS".to_string(),
            average_deal_amount: 10_000.0,
            monthly_deals_closed: 10.0,
            average_time_per_deal_hours: 5.0,
            monthly_operating_cost: 1_000.0,
        };

        let result = compute_tier_result(estimator, &inputs, Some("basicMonthly"));

        assert!((result.gross_gain_low - 15_000.0).abs() < 1e-6);
        assert!((result.gross_gain_high - 30_000.0).abs() < 1e-6);
        assert!((result.gain_low - 12_000.0).abs() < 1e-6);
        assert!((result.gain_high - 27_000.0).abs() < 1e-6);
        assert_eq!(result.monthly_net_benefit, result.gain_high);
    }

    #[test]
    fn test_operating_cost_reduces_net_gain() {
        let estimator = roi_estimator();
        let base = default_inputs();
        let raised = CalculatorInputs {
            monthly_operating_cost: 3000.0,
            ..base.clone()
        };

        let before = compute_tier_result(estimator, &base, Some("selfHosted"));
        let after = compute_tier_result(estimator, &raised, Some("selfHosted"));
        let delta = raised.monthly_operating_cost - base.monthly_operating_cost;

        assert!(after.gain_high <= after.gross_gain_high - delta);
        assert!(after.gain_high < before.gain_high);
        assert_eq!(after.gross_gain_high, before.gross_gain_high);
    }

    #[test]
    fn test_zero_deals_is_pure_loss() {
        let estimator = roi_estimator();
        let inputs = CalculatorInputs {
            monthly_deals_closed: 0.0,
            monthly_operating_cost: 750.0,
            ..default_inputs()
        };

        let result = compute_tier_result(estimator, &inputs, Some("basicMonthly"));

        assert_eq!(result.gross_gain_low, 0.0);
        assert_eq!(result.gross_gain_high, 0.0);
        assert_eq!(result.gain_low, -2750.0);
        assert_eq!(result.gain_high, -2750.0);
        assert_eq!(result.payback_months, None);
    }

    #[test]
    fn test_zero_deal_amount_is_pure_loss() {
        let estimator = roi_estimator();
        let inputs = CalculatorInputs {
            average_deal_amount: 0.0,
            ..default_inputs()
        };

        let result = compute_tier_result(estimator, &inputs, Some("selfHosted"));

        assert_eq!((result.gross_gain_low, result.gross_gain_high), (0.0, 0.0));
        assert_eq!((result.gain_low, result.gain_high), (0.0, 0.0));
    }

    #[test]
    fn test_unknown_tier_falls_back_to_default() {
        let estimator = roi_estimator();
        let inputs = default_inputs();

        let result = compute_tier_result(estimator, &inputs, Some("platinum"));

        assert_eq!(result, compute_tier_result(estimator, &inputs, None));
    }

    #[test]
    fn test_dangling_default_uses_first_tier() {
        let estimator = roi_estimator()
            .clone()
            .with_default_tier_key(Some("retired".to_string()));

        assert_eq!(get_default_tier_key(&estimator), "selfHosted");

        let estimator = roi_estimator()
            .clone()
            .with_default_tier_key(Some("growthMonthly".to_string()));
        assert_eq!(get_default_tier_key(&estimator), "growthMonthly");
    }

    #[test]
    fn test_inputs_clamped_to_ceilings() {
        let estimator = roi_estimator();
        let huge = CalculatorInputs {
            average_deal_amount: 10_000_000.0,
            monthly_deals_closed: 5_000.0,
            average_time_per_deal_hours: 1_000.0,
            ..default_inputs()
        };

        let result = compute_tier_result(estimator, &huge, Some("selfHosted"));

        assert!((result.gross_gain_high - 250_000.0 * 200.0 * 0.3).abs() < 1e-6);
        assert!((result.manual_hours_monthly - 40.0 * 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_profit_projection_and_payback() {
        let estimator = roi_estimator();
        let inputs = CalculatorInputs {
            industry: "Legal".to_string(),
            average_deal_amount: 10_000.0,
            monthly_deals_closed: 10.0,
            average_time_per_deal_hours: 4.0,
            monthly_operating_cost: 0.0,
        };

        let result = compute_tier_result(estimator, &inputs, Some("selfHosted"));

        // 30,000 gross high * 12 * 0.5 efficiency - 14,999 setup
        assert!((result.year1_profit - 165_001.0).abs() < 1e-6);
        assert!((result.year5_profit - 165_001.0 * 5.0 * 0.55).abs() < 1e-6);
        assert!((result.year10_profit - 165_001.0 * 10.0 * 0.55 * 1.1).abs() < 1e-6);
        assert_eq!(result.setup_low, 7_999.0);
        assert_eq!(result.setup_high, 14_999.0);

        let payback = result.payback_months.unwrap();
        assert!((payback - 14_999.0 / 30_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_savings() {
        let estimator = roi_estimator();
        let inputs = default_inputs();

        let result = compute_tier_result(estimator, &inputs, None);

        assert!((result.manual_hours_monthly - 48.0).abs() < 1e-9);
        assert!((result.time_saved_monthly - 48.0 * 0.35).abs() < 1e-9);
        assert!((result.time_saved_annual - 48.0 * 0.35 * 12.0).abs() < 1e-9);
        assert!((result.automation_reduction_percent - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_coerce_partial_override() {
        let estimator = roi_estimator();
        let partial = PartialInputs {
            average_deal_amount: Some(15000.0),
            monthly_deals_closed: Some(10.0),
            ..Default::default()
        };

        let inputs = coerce_inputs(estimator, Some(&partial));

        assert_eq!(inputs.average_deal_amount, 15000.0);
        assert_eq!(inputs.monthly_deals_closed, 10.0);
        assert_eq!(inputs.industry, estimator.example_input().industry);
        assert_eq!(
            inputs.average_time_per_deal_hours,
            estimator.example_input().average_time_per_deal_hours
        );
        assert_eq!(inputs.monthly_operating_cost, 0.0);
        assert_ne!(estimator.example_input().monthly_operating_cost, 0.0);
    }

    #[test]
    fn test_coerce_replaces_invalid_values() {
        let estimator = roi_estimator();
        let partial = PartialInputs {
            industry: Some("   ".to_string()),
            average_deal_amount: Some(f64::NAN),
            monthly_deals_closed: Some(-4.0),
            average_time_per_deal_hours: Some(f64::INFINITY),
            monthly_operating_cost: Some(-10.0),
        };

        let inputs = coerce_inputs(estimator, Some(&partial));
        let example = estimator.example_input();

        assert_eq!(inputs.industry, example.industry);
        assert_eq!(inputs.average_deal_amount, example.average_deal_amount);
        assert_eq!(inputs.monthly_deals_closed, example.monthly_deals_closed);
        assert_eq!(inputs.average_time_per_deal_hours, example.average_time_per_deal_hours);
        assert_eq!(inputs.monthly_operating_cost, 0.0);
    }

    #[test]
    fn test_resolve_tier_configs_keeps_order_and_groups() {
        let options = resolve_tier_configs(roi_estimator());

        let keys: Vec<_> = options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["selfHosted", "basicMonthly", "growthMonthly", "enterpriseHybrid"]);

        let basic = &options[1];
        assert_eq!(basic.group, "monthly");
        assert_eq!(basic.group_label, "Managed Plans");
        assert!(basic.is_group_default);
        assert!(!basic.show_setup_default);

        // Setup plus subscription: setup is not surfaced by default
        assert!(!options[3].show_setup_default);
        assert!(options[0].show_setup_default);
    }

    #[test]
    fn test_compare_tiers_covers_catalog() {
        let estimator = roi_estimator();
        let results = compare_tiers(estimator, &default_inputs());

        assert_eq!(results.len(), estimator.tiers().len());
        for (result, entry) in results.iter().zip(estimator.tiers()) {
            assert_eq!(result.tier_key, entry.key);
        }
    }
}
