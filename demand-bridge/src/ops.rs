//! Forecast operations — the complete vocabulary of valid requests.
//!
//! Caller input gets parsed into exactly one of these variants. If it
//! doesn't parse, the request is rejected. No partial execution, no
//! malformed calculations.
//!
//! This enum is exhaustive: the compiler guarantees every variant has
//! a handler in the protocol module, so adding an operation means
//! handling it everywhere.

use serde::{Deserialize, Serialize};

use demand_core::types::{ProductCategory, EventType};
use demand_core::Signal;

/// Every valid operation a caller can request of the forecast engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "params")]
pub enum ForecastOperation {
    /// Classify a single SKU's stock position.
    /// Returns: health tier and stock ratio.
    ClassifyStock {
        current_stock: f64,
        required_stock: f64,
    },

    /// Evaluate one reference price against one competitor price.
    /// Returns: gap percentage, lower-price recommendation, uplift.
    EvaluatePriceGap {
        reference_price: f64,
        competitor_price: f64,
        elasticity: f64,
    },

    /// Map a weather reading onto a product category.
    /// Returns: demand multiplier and rationale.
    AdjustWeather {
        temperature_f: f64,
        precipitation_pct: f64,
        category: ProductCategory,
    },

    /// Predict a demand spike from social-trend metrics.
    /// Returns: spike percentage, confidence, response tier.
    PredictTrend {
        mention_volume: f64,
        sentiment_score: f64,
        trend_index: f64,
    },

    /// Estimate the demand impact of a regional event.
    /// Returns: multiplier, rationale, expected duration.
    EstimateEvent {
        region: String,
        event_score: f64,
        event_type: EventType,
    },

    /// Run the full aggregation over an ordered list of signals.
    /// Omitting `base_demand` uses the engine default.
    /// Returns: adjusted demand, per-signal results, recommended action.
    Aggregate {
        #[serde(default)]
        base_demand: Option<f64>,
        signals: Vec<Signal>,
    },
}

impl ForecastOperation {
    /// Human-readable description for the audit trail.
    pub fn describe(&self) -> String {
        match self {
            ForecastOperation::ClassifyStock {
                current_stock,
                required_stock,
            } => format!("Classify stock {current_stock}/{required_stock}"),
            ForecastOperation::EvaluatePriceGap {
                reference_price,
                competitor_price,
                ..
            } => format!("Price gap {reference_price} vs {competitor_price}"),
            ForecastOperation::AdjustWeather {
                temperature_f,
                precipitation_pct,
                category,
            } => format!(
                "Weather {temperature_f}F/{precipitation_pct}% rain for {category}"
            ),
            ForecastOperation::PredictTrend { mention_volume, .. } => {
                format!("Trend spike from {mention_volume} mentions")
            }
            ForecastOperation::EstimateEvent {
                region, event_type, ..
            } => format!("Event impact of {event_type} in {region}"),
            ForecastOperation::Aggregate { signals, .. } => {
                format!("Aggregate {} signals", signals.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classify_stock() {
        let json = r#"{"op": "ClassifyStock", "params": {"current_stock": 450, "required_stock": 600}}"#;
        let op: ForecastOperation = serde_json::from_str(json).unwrap();
        assert!(op.describe().contains("450"));
    }

    #[test]
    fn parse_aggregate_with_default_base() {
        let json = r#"{
            "op": "Aggregate",
            "params": {
                "signals": [
                    {"weather": {"temperature_f": 90.0, "precipitation_pct": 10.0, "category": "electronics"}}
                ]
            }
        }"#;
        let op: ForecastOperation = serde_json::from_str(json).unwrap();
        match op {
            ForecastOperation::Aggregate {
                base_demand,
                signals,
            } => {
                assert!(base_demand.is_none());
                assert_eq!(signals.len(), 1);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn invalid_op_rejected() {
        let json = r#"{"op": "DeleteEverything", "params": {}}"#;
        let result: Result<ForecastOperation, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn all_ops_described() {
        let ops = vec![
            ForecastOperation::ClassifyStock {
                current_stock: 1.0,
                required_stock: 2.0,
            },
            ForecastOperation::EvaluatePriceGap {
                reference_price: 100.0,
                competitor_price: 85.0,
                elasticity: 1.2,
            },
            ForecastOperation::AdjustWeather {
                temperature_f: 90.0,
                precipitation_pct: 10.0,
                category: ProductCategory::Electronics,
            },
            ForecastOperation::PredictTrend {
                mention_volume: 15420.0,
                sentiment_score: 8.4,
                trend_index: 9.2,
            },
            ForecastOperation::EstimateEvent {
                region: "Mumbai".into(),
                event_score: 9.5,
                event_type: EventType::Festival,
            },
            ForecastOperation::Aggregate {
                base_demand: None,
                signals: vec![],
            },
        ];
        for op in &ops {
            assert!(!op.describe().is_empty(), "Empty description for {:?}", op);
        }
    }
}
