//! Competitor price-gap analysis.
//!
//! Two distinct use cases share the same sign convention:
//!
//! 1. Interactive single calculation: one reference price against one
//!    competitor price, producing a gap, a lower-price recommendation,
//!    and an elasticity-scaled demand uplift estimate.
//! 2. Batch catalog classification: our price against every known
//!    competitor price for an item, producing a hold/raise/lower action
//!    for table annotation.
//!
//! The gap is always computed from the first price argument against the
//! second: ((reference - competitor) / reference) x 100. Positive means
//! the competitor is cheaper. The asymmetry is part of the contract.

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, CoreError, CoreResult};
use crate::thresholds::{LOWER_PRICE_GAP_PCT, RAISE_PRICE_GAP_PCT};

/// Result of an interactive price-gap evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PriceGapAssessment {
    /// ((reference - competitor) / reference) x 100.
    pub price_gap_pct: f64,
    pub should_lower_price: bool,
    /// |gap| x elasticity when a lower-price move is recommended, else 0.
    pub demand_uplift_pct: f64,
}

/// Price action for one catalog entry in batch annotation mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceAction {
    HoldPrice,
    RaisePrice,
    LowerPrice,
}

impl PriceAction {
    pub fn label(self) -> &'static str {
        match self {
            PriceAction::HoldPrice => "Hold Price",
            PriceAction::RaisePrice => "Raise Price",
            PriceAction::LowerPrice => "Lower Price",
        }
    }
}

fn require_positive_price(field: &'static str, value: f64) -> CoreResult<f64> {
    let value = require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CoreError::invalid_input(
            field,
            format!("must be > 0, got {}", value),
        ));
    }
    Ok(value)
}

/// Evaluate one reference price against one competitor price.
pub fn evaluate(
    reference_price: f64,
    competitor_price: f64,
    elasticity: f64,
) -> CoreResult<PriceGapAssessment> {
    let reference = require_positive_price("reference_price", reference_price)?;
    let competitor = require_positive_price("competitor_price", competitor_price)?;
    let elasticity = require_positive_price("elasticity", elasticity)?;

    let price_gap_pct = ((reference - competitor) / reference) * 100.0;
    let should_lower_price = price_gap_pct > LOWER_PRICE_GAP_PCT;
    let demand_uplift_pct = if should_lower_price {
        price_gap_pct.abs() * elasticity
    } else {
        0.0
    };

    Ok(PriceGapAssessment {
        price_gap_pct,
        should_lower_price,
        demand_uplift_pct,
    })
}

/// Classify one catalog entry against its competitor price set.
///
/// The gap is measured against the cheapest competitor. A large
/// positive gap (we are pricier) recommends lowering; undercutting the
/// cheapest rival by more than the raise margin recommends raising.
pub fn classify_entry(our_price: f64, competitor_prices: &[f64]) -> CoreResult<PriceAction> {
    let our_price = require_positive_price("our_price", our_price)?;
    if competitor_prices.is_empty() {
        return Err(CoreError::invalid_input(
            "competitor_prices",
            "at least one competitor price is required",
        ));
    }

    let mut cheapest = f64::INFINITY;
    for (i, price) in competitor_prices.iter().enumerate() {
        let price = require_positive_price("competitor_prices", *price).map_err(|_| {
            CoreError::invalid_input(
                "competitor_prices",
                format!("entry {} must be a positive finite number", i),
            )
        })?;
        if price < cheapest {
            cheapest = price;
        }
    }

    let gap_pct = ((our_price - cheapest) / our_price) * 100.0;
    let action = if gap_pct > LOWER_PRICE_GAP_PCT {
        PriceAction::LowerPrice
    } else if gap_pct < RAISE_PRICE_GAP_PCT {
        PriceAction::RaisePrice
    } else {
        PriceAction::HoldPrice
    };

    Ok(action)
}
