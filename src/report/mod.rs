//! Plain-text rendering of ROI results

use crate::core::{CalculatorInputs, TierOption, TierResult};
use crate::estimator::EstimatorConfig;
use crate::i18n::I18n;

/// Whole-unit currency amount with thousands separators ("-$2,000")
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.abs() as u64))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_hours(hours: f64, i18n: &I18n) -> String {
    format!("{} {}", group_thousands(hours.max(0.0).round() as u64), i18n.get("report.hours"))
}

/// Full report for one tier result
pub fn render_text(
    result: &TierResult,
    inputs: &CalculatorInputs,
    estimator: &EstimatorConfig,
    i18n: &I18n,
    symbol: &str,
) -> String {
    let money = |value: f64| format_currency(value, symbol);
    let mut lines = Vec::new();

    lines.push(format!("=== {} ===", i18n.get("report.title")));
    lines.push(format!("{}: {} ({})", i18n.get("report.tier"), result.tier.label, result.tier_key));
    lines.push(format!("{}: {}", i18n.get("report.industry"), inputs.industry));
    lines.push(String::new());

    lines.push(format!("[{}]", i18n.get("report.net_uplift")));
    lines.push(format!(
        "  {} {} {}",
        money(result.gain_low),
        i18n.get("report.to"),
        money(result.gain_high)
    ));
    lines.push(format!(
        "  {} - {} {}-{}",
        i18n.get("report.after_costs"),
        i18n.get("report.gross_potential"),
        money(result.gross_gain_low),
        money(result.gross_gain_high)
    ));
    lines.push(String::new());

    lines.push(format!("[{}]", i18n.get("report.time_reclaimed")));
    lines.push(format!("  {}", format_hours(result.time_saved_monthly, i18n)));
    lines.push(format!(
        "  ~ {:.1} {}",
        result.time_saved_monthly / 8.0,
        i18n.get("report.workdays_monthly")
    ));
    lines.push(format!(
        "  {} {}",
        format_hours(result.time_saved_annual, i18n),
        i18n.get("report.annually_saved")
    ));
    lines.push(format!(
        "  {}% {}",
        result.automation_reduction_percent.round(),
        i18n.get("report.manual_removed")
    ));

    if result.show_setup_default && result.setup_high > 0.0 {
        lines.push(String::new());
        lines.push(format!("[{}]", i18n.get("report.setup_investment")));
        lines.push(format!(
            "  {} {} {}",
            money(result.setup_low),
            i18n.get("report.to"),
            money(result.setup_high)
        ));
        lines.push(match result.payback_months {
            Some(months) => format!(
                "  {} {:.1} {}",
                i18n.get("report.payback"),
                months,
                i18n.get("report.months")
            ),
            None => format!("  {}", i18n.get("report.no_payback")),
        });
    }

    if let Some(monthly) = result.costs.monthly_cost {
        lines.push(String::new());
        lines.push(format!("[{}]", i18n.get("report.tier_costs")));
        lines.push(format!(
            "  {}: {}",
            i18n.get("report.net_monthly_benefit"),
            money(result.monthly_net_benefit)
        ));
        lines.push(format!("  {}: {}", i18n.get("report.monthly_plan"), money(monthly)));
        if result.monthly_operating_cost > 0.0 {
            lines.push(format!(
                "  {}: {}",
                i18n.get("report.operating_cost"),
                money(result.monthly_operating_cost)
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("[{}]", i18n.get("report.roi_projection")));
    lines.push(format!(
        "  {}: {} {}",
        i18n.get("report.year1"),
        money(result.year1_profit),
        i18n.get("report.net_uplift_suffix")
    ));
    lines.push(format!(
        "  {}: {} {}",
        i18n.get("report.year5"),
        money(result.year5_profit),
        i18n.get("report.cumulative")
    ));
    lines.push(format!(
        "  {}: {} {}",
        i18n.get("report.year10"),
        money(result.year10_profit),
        i18n.get("report.cumulative")
    ));
    lines.push(format!(
        "  {}: x {:.1}",
        i18n.get("report.industry_factor"),
        estimator.industry_factor(&inputs.industry)
    ));

    lines.join("\n")
}

/// Tier picker listing, grouped the way the catalog groups them
pub fn render_tier_list(options: &[TierOption], default_key: &str, i18n: &I18n, symbol: &str) -> String {
    let mut lines = vec![format!("=== {} ===", i18n.get("tiers.title"))];
    let mut current_group: Option<&str> = None;

    for option in options {
        if current_group != Some(option.group.as_str()) {
            lines.push(format!("{}:", option.group_label));
            current_group = Some(option.group.as_str());
        }

        let costs = &option.tier.costs;
        let mut price = Vec::new();
        if let Some(range) = costs.setup_range {
            price.push(format!(
                "{} {}-{}",
                i18n.get("tiers.setup"),
                format_currency(range.low, symbol),
                format_currency(range.high, symbol)
            ));
        }
        if let Some(monthly) = costs.monthly_cost {
            price.push(format!("{}{}", format_currency(monthly, symbol), i18n.get("tiers.per_month")));
        }
        if costs.is_free() {
            price.push(i18n.get("tiers.free"));
        }

        let marker = if option.key == default_key {
            format!(" ({})", i18n.get("tiers.default"))
        } else {
            String::new()
        };
        lines.push(format!(
            "  {:<18} {:<20} {}{}",
            option.key,
            option.tier.label,
            price.join(" + "),
            marker
        ));
    }

    lines.join("\n")
}

/// Side-by-side net ranges for several tiers
pub fn render_comparison(results: &[TierResult], i18n: &I18n, symbol: &str) -> String {
    let mut lines = vec![format!("=== {} ===", i18n.get("compare.title"))];
    lines.push(format!(
        "  {:<20} {:>25} {:>14}",
        i18n.get("report.tier"),
        i18n.get("compare.net_range"),
        i18n.get("compare.year1")
    ));

    for result in results {
        let range = format!(
            "{} {} {}",
            format_currency(result.gain_low, symbol),
            i18n.get("report.to"),
            format_currency(result.gain_high, symbol)
        );
        lines.push(format!(
            "  {:<20} {:>25} {:>14}",
            result.tier.label,
            range,
            format_currency(result.year1_profit, symbol)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::roi_estimator;
    use crate::roi::{coerce_inputs, compare_tiers, compute_tier_result, resolve_tier_configs};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "$"), "$0");
        assert_eq!(format_currency(999.4, "$"), "$999");
        assert_eq!(format_currency(1000.0, "$"), "$1,000");
        assert_eq!(format_currency(28_800.0, "$"), "$28,800");
        assert_eq!(format_currency(1_234_567.8, "\u{20AC}"), "\u{20AC}1,234,568");
        assert_eq!(format_currency(-2_000.0, "$"), "-$2,000");
        assert_eq!(format_currency(-0.2, "$"), "$0");
        assert_eq!(format_currency(f64::NAN, "$"), "n/a");
    }

    #[test]
    fn test_one_time_report_shows_setup() {
        let estimator = roi_estimator();
        let inputs = coerce_inputs(estimator, None);
        let result = compute_tier_result(estimator, &inputs, Some("selfHosted"));

        let text = render_text(&result, &inputs, estimator, &I18n::new("en"), "$");

        assert!(text.contains("Self-Hosted (selfHosted)"));
        assert!(text.contains("Setup Investment"));
        assert!(text.contains("$7,999 to $14,999"));
        assert!(text.contains("Payback in"));
        assert!(!text.contains("Tier Costs"));
        assert!(text.contains("Industry Factor: x 1.2"));
    }

    #[test]
    fn test_subscription_report_shows_costs() {
        let estimator = roi_estimator();
        let inputs = coerce_inputs(estimator, None);
        let result = compute_tier_result(estimator, &inputs, Some("basicMonthly"));

        let text = render_text(&result, &inputs, estimator, &I18n::new("en"), "$");

        assert!(text.contains("Tier Costs"));
        assert!(text.contains("Monthly plan: $2,000"));
        assert!(text.contains("Net monthly benefit: $26,800"));
        assert!(!text.contains("Setup Investment"));
    }

    #[test]
    fn test_french_report() {
        let estimator = roi_estimator();
        let inputs = coerce_inputs(estimator, None);
        let result = compute_tier_result(estimator, &inputs, None);

        let text = render_text(&result, &inputs, estimator, &I18n::new("fr"), "$");

        assert!(text.contains("Gain mensuel net"));
        assert!(text.contains("Estimation du ROI"));
    }

    #[test]
    fn test_tier_list_marks_default() {
        let estimator = roi_estimator();
        let text = render_tier_list(&resolve_tier_configs(estimator), "basicMonthly", &I18n::new("en"), "$");

        let basic = text.lines().find(|line| line.contains("basicMonthly")).unwrap();
        assert!(basic.contains("$2,000/month"));
        assert!(basic.ends_with("(default)"));
        assert!(text.contains("Managed Plans:"));
        assert_eq!(text.matches("(default)").count(), 1);
    }

    #[test]
    fn test_comparison_has_row_per_tier() {
        let estimator = roi_estimator();
        let results = compare_tiers(estimator, &coerce_inputs(estimator, None));

        let text = render_comparison(&results, &I18n::new("en"), "$");

        assert_eq!(text.lines().count(), 2 + results.len());
        assert!(text.contains("Growth Monthly"));
    }
}
