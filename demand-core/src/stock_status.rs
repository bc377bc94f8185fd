//! Stock health classification.
//!
//! Maps current vs. required stock into an ordinal health tier. The
//! ratio drives everything; a required stock of zero is rejected rather
//! than allowed to produce an infinite ratio.

use serde::Serialize;

use crate::error::{require_finite, CoreError, CoreResult};
use crate::thresholds::{STOCK_LOW_RATIO, STOCK_SUFFICIENT_RATIO};
use crate::types::StockTier;

/// Classification result for one SKU's stock position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StockStatus {
    pub tier: StockTier,
    pub ratio: f64,
}

/// Classify a stock position into a health tier.
///
/// ratio = current / required; >= 1.0 is sufficient, >= 0.7 low,
/// anything below that critical. Pure and deterministic.
pub fn classify(current_stock: f64, required_stock: f64) -> CoreResult<StockStatus> {
    let current = require_finite("current_stock", current_stock)?;
    let required = require_finite("required_stock", required_stock)?;

    if current < 0.0 {
        return Err(CoreError::invalid_input(
            "current_stock",
            "must be non-negative",
        ));
    }
    if required <= 0.0 {
        return Err(CoreError::invalid_input(
            "required_stock",
            format!("must be > 0, got {}", required),
        ));
    }

    let ratio = current / required;
    let tier = if ratio >= STOCK_SUFFICIENT_RATIO {
        StockTier::Sufficient
    } else if ratio >= STOCK_LOW_RATIO {
        StockTier::Low
    } else {
        StockTier::Critical
    };

    Ok(StockStatus { tier, ratio })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sufficient_at_ratio_one() {
        let status = classify(350.0, 350.0).unwrap();
        assert_eq!(status.tier, StockTier::Sufficient);
        assert!((status.ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn low_band_is_inclusive_at_bottom() {
        assert_eq!(classify(70.0, 100.0).unwrap().tier, StockTier::Low);
        assert_eq!(classify(99.0, 100.0).unwrap().tier, StockTier::Low);
    }

    #[test]
    fn critical_below_seventy_percent() {
        assert_eq!(classify(45.0, 200.0).unwrap().tier, StockTier::Critical);
        assert_eq!(classify(0.0, 100.0).unwrap().tier, StockTier::Critical);
    }

    #[test]
    fn zero_required_stock_is_rejected() {
        let err = classify(100.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "required_stock");
        // Any current stock value fails the same way.
        assert!(classify(0.0, 0.0).is_err());
        assert!(classify(1.0e9, 0.0).is_err());
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(classify(-1.0, 100.0).is_err());
        assert!(classify(100.0, -5.0).is_err());
    }

    #[test]
    fn tier_is_monotonic_in_ratio() {
        // Sweep ratios upward; the tier must never get worse.
        let mut last = StockTier::Critical;
        for i in 0..300 {
            let current = i as f64;
            let status = classify(current, 100.0).unwrap();
            assert!(
                status.tier >= last,
                "tier regressed at ratio {}",
                status.ratio
            );
            last = status.tier;
        }
    }
}
