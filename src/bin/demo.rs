//! ROI Estimator - Demo CLI
//!
//! Walks the built-in catalog: lists the tiers, then shows how net monthly
//! gain moves with deal volume for each of them.

use roi_estimator_lib::core::PartialInputs;
use roi_estimator_lib::estimator::roi_estimator;
use roi_estimator_lib::i18n::I18n;
use roi_estimator_lib::report::{format_currency, render_comparison, render_tier_list};
use roi_estimator_lib::roi::RoiEngine;

const DEAL_VOLUMES: [f64; 6] = [0.0, 2.0, 5.0, 10.0, 25.0, 50.0];

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   ROI Estimator - Demo CLI");
    println!("==============================================\n");

    let engine = RoiEngine::new(roi_estimator());
    let i18n = I18n::new("en");

    // 1. Catalog
    println!("[1/3] Built-in catalog\n");
    println!("{}\n", render_tier_list(&engine.tiers(), engine.default_tier_key(), &i18n, "$"));

    // 2. Example inputs
    let example = engine.estimator().example_input();
    println!("[2/3] Example inputs\n");
    println!("      Industry:        {}", example.industry);
    println!("      Avg deal:        {}", format_currency(example.average_deal_amount, "$"));
    println!("      Deals / month:   {}", example.monthly_deals_closed);
    println!("      Hours / deal:    {}", example.average_time_per_deal_hours);
    println!("      Operating cost:  {}\n", format_currency(example.monthly_operating_cost, "$"));

    let with_costs = PartialInputs {
        monthly_operating_cost: Some(example.monthly_operating_cost),
        ..Default::default()
    };
    println!("{}\n", render_comparison(&engine.compare(Some(&with_costs)), &i18n, "$"));

    // 3. Sensitivity to deal volume
    println!("[3/3] Net monthly gain (high) by deals closed\n");

    let tiers = engine.tiers();
    let mut header = format!("  {:>6} |", "deals");
    for option in &tiers {
        header.push_str(&format!(" {:>16} |", option.tier.label));
    }
    println!("{}", header);
    println!("  {}", "-".repeat(header.len().saturating_sub(2)));

    for deals in DEAL_VOLUMES {
        let partial = PartialInputs {
            monthly_deals_closed: Some(deals),
            ..with_costs.clone()
        };
        let mut row = format!("  {:>6} |", deals);
        for option in &tiers {
            let result = engine.compute(Some(&partial), Some(&option.key));
            row.push_str(&format!(" {:>16} |", format_currency(result.gain_high, "$")));
        }
        println!("{}", row);
    }

    println!("\n==============================================\n");
}
