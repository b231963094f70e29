//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Report header
    t.insert("report.title".into(), "ROI Estimate".into());
    t.insert("report.tier".into(), "Tier".into());
    t.insert("report.industry".into(), "Industry".into());

    // Net uplift
    t.insert("report.net_uplift".into(), "Net Monthly Uplift".into());
    t.insert("report.to".into(), "to".into());
    t.insert("report.after_costs".into(), "After plan fees & operating costs".into());
    t.insert("report.gross_potential".into(), "Gross potential".into());

    // Time
    t.insert("report.time_reclaimed".into(), "Time Reclaimed".into());
    t.insert("report.hours".into(), "hrs".into());
    t.insert("report.workdays_monthly".into(), "workdays each month".into());
    t.insert("report.annually_saved".into(), "annually saved".into());
    t.insert("report.manual_removed".into(), "manual follow-up removed".into());

    // Setup
    t.insert("report.setup_investment".into(), "Setup Investment".into());
    t.insert("report.payback".into(), "Payback in".into());
    t.insert("report.months".into(), "months at projected gains".into());
    t.insert("report.no_payback".into(), "Does not pay back at projected gains".into());

    // Costs
    t.insert("report.tier_costs".into(), "Tier Costs".into());
    t.insert("report.net_monthly_benefit".into(), "Net monthly benefit".into());
    t.insert("report.operating_cost".into(), "Operating cost".into());
    t.insert("report.monthly_plan".into(), "Monthly plan".into());

    // Projection
    t.insert("report.roi_projection".into(), "ROI Projection".into());
    t.insert("report.year1".into(), "Year 1".into());
    t.insert("report.year5".into(), "Year 5".into());
    t.insert("report.year10".into(), "Year 10".into());
    t.insert("report.net_uplift_suffix".into(), "net uplift".into());
    t.insert("report.cumulative".into(), "cumulative profit".into());
    t.insert("report.industry_factor".into(), "Industry Factor".into());

    // Tier listing
    t.insert("tiers.title".into(), "Available Tiers".into());
    t.insert("tiers.default".into(), "default".into());
    t.insert("tiers.setup".into(), "setup".into());
    t.insert("tiers.per_month".into(), "/month".into());
    t.insert("tiers.free".into(), "free".into());

    // Comparison
    t.insert("compare.title".into(), "Tier Comparison".into());
    t.insert("compare.net_range".into(), "Net range".into());
    t.insert("compare.year1".into(), "Year 1".into());

    t
}
