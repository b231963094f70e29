//! ROI engine for pricing tier comparisons
//!
//! Given a catalog and a user's deal volume, estimates how much each tier
//! returns per month once operating and subscription costs are paid.

mod calculator;

pub use calculator::{
    coerce_inputs, compare_tiers, compute_tier_result, get_default_tier_key, resolve_tier_configs,
};

use crate::core::{CalculatorInputs, PartialInputs, TierOption, TierResult};
use crate::estimator::EstimatorConfig;

/// ROI engine bound to one estimator catalog
pub struct RoiEngine {
    estimator: EstimatorConfig,
}

impl RoiEngine {
    /// Create a new engine over the given catalog
    pub fn new(estimator: &EstimatorConfig) -> Self {
        Self {
            estimator: estimator.clone(),
        }
    }

    /// Swap in a different catalog
    pub fn update_estimator(&mut self, estimator: &EstimatorConfig) {
        self.estimator = estimator.clone();
    }

    pub fn estimator(&self) -> &EstimatorConfig {
        &self.estimator
    }

    pub fn coerce(&self, partial: Option<&PartialInputs>) -> CalculatorInputs {
        coerce_inputs(&self.estimator, partial)
    }

    pub fn tiers(&self) -> Vec<TierOption> {
        resolve_tier_configs(&self.estimator)
    }

    pub fn default_tier_key(&self) -> &str {
        get_default_tier_key(&self.estimator)
    }

    /// Coerce `partial` and compute the result for `tier_key`
    pub fn compute(&self, partial: Option<&PartialInputs>, tier_key: Option<&str>) -> TierResult {
        let inputs = self.coerce(partial);
        compute_tier_result(&self.estimator, &inputs, tier_key)
    }

    /// Coerce `partial` and compute every tier
    pub fn compare(&self, partial: Option<&PartialInputs>) -> Vec<TierResult> {
        let inputs = self.coerce(partial);
        compare_tiers(&self.estimator, &inputs)
    }
}
