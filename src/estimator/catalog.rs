//! Built-in DealScale ROI catalog

use super::{EstimatorAssumptions, EstimatorConfig};
use crate::core::{CalculatorInputs, TierConfig, TierCosts, TierEntry, TierKind, ValueRange};
use std::collections::BTreeMap;
use std::sync::OnceLock;

static ROI_ESTIMATOR: OnceLock<EstimatorConfig> = OnceLock::new();

/// The catalog shipped with the pricing pages, built on first use
pub fn roi_estimator() -> &'static EstimatorConfig {
    ROI_ESTIMATOR.get_or_init(|| {
        let catalog = builtin();
        if let Err(e) = catalog.validate() {
            panic!("built-in catalog is invalid: {}", e);
        }
        catalog
    })
}

fn builtin() -> EstimatorConfig {
    EstimatorConfig {
        tiers: vec![
            TierEntry {
                key: "selfHosted".to_string(),
                tier: TierConfig {
                    label: "Self-Hosted".to_string(),
                    kind: TierKind::SelfHosted,
                    description: Some(
                        "Enterprise license with full source access, deployed on your infrastructure"
                            .to_string(),
                    ),
                    costs: TierCosts {
                        setup_range: Some(ValueRange::new(7_999.0, 14_999.0)),
                        monthly_cost: None,
                    },
                    efficiency: None,
                    group: Some("selfHosted".to_string()),
                    group_label: Some("Self-Hosted".to_string()),
                    default_for_group: true,
                },
            },
            TierEntry {
                key: "basicMonthly".to_string(),
                tier: TierConfig {
                    label: "Basic Monthly".to_string(),
                    kind: TierKind::Subscription,
                    description: Some("Managed lead delivery billed monthly".to_string()),
                    costs: TierCosts {
                        setup_range: None,
                        monthly_cost: Some(2_000.0),
                    },
                    efficiency: None,
                    group: Some("monthly".to_string()),
                    group_label: Some("Managed Plans".to_string()),
                    default_for_group: true,
                },
            },
            TierEntry {
                key: "growthMonthly".to_string(),
                tier: TierConfig {
                    label: "Growth Monthly".to_string(),
                    kind: TierKind::Subscription,
                    description: Some("Higher volume delivery with deeper enrichment".to_string()),
                    costs: TierCosts {
                        setup_range: None,
                        monthly_cost: Some(5_000.0),
                    },
                    efficiency: Some(0.45),
                    group: Some("monthly".to_string()),
                    group_label: Some("Managed Plans".to_string()),
                    default_for_group: false,
                },
            },
            TierEntry {
                key: "enterpriseHybrid".to_string(),
                tier: TierConfig {
                    label: "Enterprise Hybrid".to_string(),
                    kind: TierKind::Subscription,
                    description: Some(
                        "Private deployment with a managed operations retainer".to_string(),
                    ),
                    costs: TierCosts {
                        setup_range: Some(ValueRange::new(10_000.0, 20_000.0)),
                        monthly_cost: Some(7_500.0),
                    },
                    efficiency: Some(0.5),
                    group: Some("enterprise".to_string()),
                    group_label: Some("Enterprise".to_string()),
                    default_for_group: true,
                },
            },
        ],
        example_input: CalculatorInputs {
            industry: "Real Estate".to_string(),
            average_deal_amount: 12_000.0,
            monthly_deals_closed: 8.0,
            average_time_per_deal_hours: 6.0,
            monthly_operating_cost: 1_500.0,
        },
        default_tier_key: Some("selfHosted".to_string()),
        assumptions: EstimatorAssumptions::default(),
        industry_factors: [
            ("Real Estate", 1.2),
            ("Legal", 1.1),
            ("Healthcare", 1.3),
            ("Financial Services", 1.25),
            ("SaaS", 1.0),
            ("Other", 1.0),
        ]
        .into_iter()
        .map(|(industry, factor)| (industry.to_string(), factor))
        .collect::<BTreeMap<_, _>>(),
    }
}
