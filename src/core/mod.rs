//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, EstimatorSettings, GeneralConfig};
pub use error::{Error, Result};
pub use types::{
    CalculatorInputs, PartialInputs, TierConfig, TierCosts, TierEntry, TierKind, TierOption,
    TierResult, ValueRange,
};
