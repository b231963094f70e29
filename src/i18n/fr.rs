//! French translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Report header
    t.insert("report.title".into(), "Estimation du ROI".into());
    t.insert("report.tier".into(), "Offre".into());
    t.insert("report.industry".into(), "Secteur".into());

    // Net uplift
    t.insert("report.net_uplift".into(), "Gain mensuel net".into());
    t.insert("report.to".into(), "\u{00E0}".into());
    t.insert("report.after_costs".into(), "Apr\u{00E8}s abonnement et co\u{00FB}ts d'exploitation".into());
    t.insert("report.gross_potential".into(), "Potentiel brut".into());

    // Time
    t.insert("report.time_reclaimed".into(), "Temps r\u{00E9}cup\u{00E9}r\u{00E9}".into());
    t.insert("report.hours".into(), "h".into());
    t.insert("report.workdays_monthly".into(), "jours ouvr\u{00E9}s par mois".into());
    t.insert("report.annually_saved".into(), "\u{00E9}conomis\u{00E9}es par an".into());
    t.insert("report.manual_removed".into(), "de relances manuelles supprim\u{00E9}es".into());

    // Setup
    t.insert("report.setup_investment".into(), "Investissement initial".into());
    t.insert("report.payback".into(), "Rentabilis\u{00E9} en".into());
    t.insert("report.months".into(), "mois aux gains projet\u{00E9}s".into());
    t.insert("report.no_payback".into(), "Non rentabilis\u{00E9} aux gains projet\u{00E9}s".into());

    // Costs
    t.insert("report.tier_costs".into(), "Co\u{00FB}ts de l'offre".into());
    t.insert("report.net_monthly_benefit".into(), "B\u{00E9}n\u{00E9}fice mensuel net".into());
    t.insert("report.operating_cost".into(), "Co\u{00FB}t d'exploitation".into());
    t.insert("report.monthly_plan".into(), "Abonnement mensuel".into());

    // Projection
    t.insert("report.roi_projection".into(), "Projection du ROI".into());
    t.insert("report.year1".into(), "Ann\u{00E9}e 1".into());
    t.insert("report.year5".into(), "Ann\u{00E9}e 5".into());
    t.insert("report.year10".into(), "Ann\u{00E9}e 10".into());
    t.insert("report.net_uplift_suffix".into(), "de gain net".into());
    t.insert("report.cumulative".into(), "de profit cumul\u{00E9}".into());
    t.insert("report.industry_factor".into(), "Facteur sectoriel".into());

    // Tier listing
    t.insert("tiers.title".into(), "Offres disponibles".into());
    t.insert("tiers.default".into(), "par d\u{00E9}faut".into());
    t.insert("tiers.setup".into(), "mise en place".into());
    t.insert("tiers.per_month".into(), "/mois".into());
    t.insert("tiers.free".into(), "gratuit".into());

    // Comparison
    t.insert("compare.title".into(), "Comparaison des offres".into());
    t.insert("compare.net_range".into(), "Fourchette nette".into());
    t.insert("compare.year1".into(), "Ann\u{00E9}e 1".into());

    t
}
