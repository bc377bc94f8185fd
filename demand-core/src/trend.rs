//! Social-trend demand spike prediction.
//!
//! spike% = round(volume x sentiment x index / 20000)
//! confidence% = min(95, 60 + sentiment x 10 + index x 5)
//!
//! The confidence formula applies only the cap, no floor. That is the
//! contract: the cap is replicated exactly and nothing else bounds the
//! value.

use serde::Serialize;

use crate::error::{require_finite, CoreError, CoreResult};
use crate::thresholds::{
    SPIKE_IMMEDIATE_PCT, SPIKE_MODERATE_PCT, TREND_CONFIDENCE_BASE_PCT, TREND_CONFIDENCE_CAP_PCT,
    TREND_INDEX_WEIGHT, TREND_SENTIMENT_WEIGHT, TREND_SPIKE_DIVISOR,
};

/// Recommended response tier for a predicted spike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpikeResponse {
    MonitorClosely,
    PrepareModerateSpike,
    IncreaseInventoryImmediately,
}

impl SpikeResponse {
    pub fn label(self) -> &'static str {
        match self {
            SpikeResponse::MonitorClosely => "Monitor closely",
            SpikeResponse::PrepareModerateSpike => "Prepare for moderate spike",
            SpikeResponse::IncreaseInventoryImmediately => "Increase inventory immediately",
        }
    }
}

/// Predicted demand spike from social-trend metrics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrendSpike {
    /// Rounded spike percentage.
    pub spike_pct: f64,
    pub confidence_pct: f64,
    pub recommendation: SpikeResponse,
}

fn require_in_range(field: &'static str, value: f64, low: f64, high: f64) -> CoreResult<f64> {
    let value = require_finite(field, value)?;
    if !(low..=high).contains(&value) {
        return Err(CoreError::invalid_input(
            field,
            format!("must be within {}-{}, got {}", low, high, value),
        ));
    }
    Ok(value)
}

/// Predict a demand spike from mention volume, sentiment, and trend index.
pub fn predict(mention_volume: f64, sentiment_score: f64, trend_index: f64) -> CoreResult<TrendSpike> {
    let volume = require_finite("mention_volume", mention_volume)?;
    if volume < 0.0 {
        return Err(CoreError::invalid_input(
            "mention_volume",
            "must be non-negative",
        ));
    }
    let sentiment = require_in_range("sentiment_score", sentiment_score, 1.0, 10.0)?;
    let index = require_in_range("trend_index", trend_index, 1.0, 10.0)?;

    let spike_pct = (volume * sentiment * index / TREND_SPIKE_DIVISOR).round();
    let confidence_pct = TREND_CONFIDENCE_CAP_PCT.min(
        TREND_CONFIDENCE_BASE_PCT + sentiment * TREND_SENTIMENT_WEIGHT + index * TREND_INDEX_WEIGHT,
    );

    let recommendation = if spike_pct > SPIKE_IMMEDIATE_PCT {
        SpikeResponse::IncreaseInventoryImmediately
    } else if spike_pct > SPIKE_MODERATE_PCT {
        SpikeResponse::PrepareModerateSpike
    } else {
        SpikeResponse::MonitorClosely
    };

    Ok(TrendSpike {
        spike_pct,
        confidence_pct,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viral_product_example() {
        // 15420 x 8.4 x 9.2 / 20000 = 59.58... -> 60
        let spike = predict(15420.0, 8.4, 9.2).unwrap();
        assert_eq!(spike.spike_pct, 60.0);
        // 60 + 84 + 46 = 190, capped at 95.
        assert_eq!(spike.confidence_pct, 95.0);
        assert_eq!(
            spike.recommendation,
            SpikeResponse::IncreaseInventoryImmediately
        );
    }

    #[test]
    fn moderate_spike_band() {
        // 8930 x 7.8 x 6.5 / 20000 = 22.6... -> 23, monitor band.
        let spike = predict(8930.0, 7.8, 6.5).unwrap();
        assert_eq!(spike.spike_pct, 23.0);
        assert_eq!(spike.recommendation, SpikeResponse::MonitorClosely);

        // Push into the moderate band.
        let spike = predict(12000.0, 7.0, 7.0).unwrap();
        assert_eq!(spike.spike_pct, 29.0);
        assert_eq!(spike.recommendation, SpikeResponse::PrepareModerateSpike);
    }

    #[test]
    fn quiet_product_monitors() {
        let spike = predict(3420.0, 6.2, 4.1).unwrap();
        assert_eq!(spike.spike_pct, 4.0);
        assert_eq!(spike.recommendation, SpikeResponse::MonitorClosely);
    }

    #[test]
    fn confidence_is_capped_not_floored() {
        // Minimum in-range inputs: 60 + 10 + 5 = 75, under the cap.
        let spike = predict(0.0, 1.0, 1.0).unwrap();
        assert_eq!(spike.confidence_pct, 75.0);
        // Maximum in-range inputs hit the cap.
        let spike = predict(0.0, 10.0, 10.0).unwrap();
        assert_eq!(spike.confidence_pct, 95.0);
    }

    #[test]
    fn negative_volume_is_rejected() {
        let err = predict(-1.0, 5.0, 5.0).unwrap_err();
        assert_eq!(err.field(), "mention_volume");
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        assert!(predict(1000.0, 0.5, 5.0).is_err());
        assert!(predict(1000.0, 5.0, 11.0).is_err());
        assert!(predict(1000.0, f64::NAN, 5.0).is_err());
    }
}
