//! Configuration types for the Split Allocation Engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::CURRENCY_SCALE;

/// Engine tuning parameters.
///
/// The defaults match the domain conventions: amounts carry two fractional
/// digits, and explicit weights may drift up to one cent (or one hundredth
/// of a percentage point) off target before rescaling kicks in.
///
/// # Example
///
/// ```
/// use split_engine::config::SplitConfig;
/// use rust_decimal::Decimal;
///
/// let config = SplitConfig::default();
/// assert_eq!(config.currency_scale, 2);
/// assert_eq!(config.rescale_tolerance, Decimal::new(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fractional digits carried by monetary amounts.
    #[serde(default = "default_currency_scale")]
    pub currency_scale: u32,
    /// Maximum drift between supplied explicit weights and their target sum
    /// before the weights are rescaled.
    #[serde(default = "default_rescale_tolerance")]
    pub rescale_tolerance: Decimal,
}

fn default_currency_scale() -> u32 {
    CURRENCY_SCALE
}

fn default_rescale_tolerance() -> Decimal {
    // one cent / one hundredth of a percentage point
    Decimal::new(1, 2)
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            currency_scale: default_currency_scale(),
            rescale_tolerance: default_rescale_tolerance(),
        }
    }
}
