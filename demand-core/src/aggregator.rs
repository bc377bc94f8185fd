//! Signal aggregation.
//!
//! The one component with cross-cutting logic: combines a base forecast
//! with any subset of contextual signals into a final adjusted demand
//! figure and an overall recommended action. Every signal is evaluated
//! eagerly; an invalid input in any requested signal aborts the whole
//! aggregate call, because a forecast built on a partially-invalid
//! signal is misleading.

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, CoreError, CoreResult};
use crate::price_gap;
use crate::stock_status;
use crate::thresholds::RAISE_PRICE_GAP_PCT;
use crate::trend::{self, SpikeResponse};
use crate::types::{
    AdjustmentResult, AggregatedForecast, EventMetric, PriceQuote, RecommendedAction, SignalKind,
    SignalTier, StockRecord, StockTier, TrendMetric, WeatherReading,
};
use crate::{event, weather};

/// One contextual input to the aggregator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Stock(StockRecord),
    PriceGap(PriceQuote),
    Weather(WeatherReading),
    Trend(TrendMetric),
    Event(EventMetric),
}

/// Evaluate a single signal into the uniform adjustment envelope.
///
/// Delta-producing adjusters (price uplift, trend spike) are converted
/// to an equivalent multiplier `1 + pct/100` so the aggregator can
/// combine everything multiplicatively.
fn evaluate_signal(signal: &Signal) -> CoreResult<AdjustmentResult> {
    match signal {
        Signal::Stock(record) => {
            let status =
                stock_status::classify(record.current_stock as f64, record.required_stock)?;
            let tier = match status.tier {
                StockTier::Sufficient => SignalTier::Sufficient,
                StockTier::Low => SignalTier::Low,
                StockTier::Critical => SignalTier::Critical,
            };
            Ok(AdjustmentResult {
                kind: SignalKind::Stock,
                multiplier: 1.0,
                rationale: format!(
                    "{} stock at {:.0}% of required level",
                    record.product_id,
                    status.ratio * 100.0
                ),
                confidence_pct: None,
                tier,
            })
        }
        Signal::PriceGap(quote) => {
            let assessment =
                price_gap::evaluate(quote.our_price, quote.competitor_price, quote.elasticity)?;
            let (tier, rationale) = if assessment.should_lower_price {
                (
                    SignalTier::LowerPrice,
                    format!(
                        "Competitor {:.1}% cheaper; lowering price lifts demand {:.1}%",
                        assessment.price_gap_pct, assessment.demand_uplift_pct
                    ),
                )
            } else if assessment.price_gap_pct < RAISE_PRICE_GAP_PCT {
                (
                    SignalTier::RaisePrice,
                    format!(
                        "Competitor {:.1}% pricier; room to raise",
                        -assessment.price_gap_pct
                    ),
                )
            } else {
                (
                    SignalTier::HoldPrice,
                    format!(
                        "Price gap {:.1}% inside hold band",
                        assessment.price_gap_pct
                    ),
                )
            };
            Ok(AdjustmentResult {
                kind: SignalKind::PriceGap,
                multiplier: 1.0 + assessment.demand_uplift_pct / 100.0,
                rationale,
                confidence_pct: None,
                tier,
            })
        }
        Signal::Weather(reading) => {
            let impact =
                weather::adjust(reading.temperature_f, reading.precipitation_pct, reading.category)?;
            Ok(AdjustmentResult {
                kind: SignalKind::Weather,
                multiplier: impact.multiplier,
                rationale: impact.rationale.to_string(),
                confidence_pct: None,
                tier: SignalTier::from_multiplier(impact.multiplier),
            })
        }
        Signal::Trend(metric) => {
            let spike = trend::predict(
                metric.mention_volume,
                metric.sentiment_score,
                metric.trend_index,
            )?;
            let tier = match spike.recommendation {
                SpikeResponse::MonitorClosely => SignalTier::MonitorClosely,
                SpikeResponse::PrepareModerateSpike => SignalTier::PrepareModerateSpike,
                SpikeResponse::IncreaseInventoryImmediately => {
                    SignalTier::IncreaseInventoryImmediately
                }
            };
            Ok(AdjustmentResult {
                kind: SignalKind::Trend,
                multiplier: 1.0 + spike.spike_pct / 100.0,
                rationale: format!(
                    "Social trend predicts {:.0}% spike: {}",
                    spike.spike_pct,
                    spike.recommendation.label()
                ),
                confidence_pct: Some(spike.confidence_pct),
                tier,
            })
        }
        Signal::Event(metric) => {
            let impact = event::estimate(metric.event_score, metric.event_type, &metric.region)?;
            Ok(AdjustmentResult {
                kind: SignalKind::Event,
                multiplier: impact.multiplier,
                rationale: format!("{} ({})", impact.rationale, impact.expected_duration),
                confidence_pct: None,
                tier: SignalTier::from_multiplier(impact.multiplier),
            })
        }
    }
}

/// Resolve the overall action from the applied signals, highest
/// priority first: critical reorder > soon reorder > price action >
/// monitor.
fn resolve_action(applied: &[AdjustmentResult]) -> RecommendedAction {
    let mut price_action: Option<RecommendedAction> = None;
    let mut stock_action: Option<RecommendedAction> = None;

    for result in applied {
        match result.tier {
            SignalTier::Critical => return RecommendedAction::ReorderCritical,
            SignalTier::Low => {
                stock_action = Some(RecommendedAction::ReorderSoon);
            }
            SignalTier::LowerPrice => {
                price_action.get_or_insert(RecommendedAction::LowerPrice);
            }
            SignalTier::RaisePrice => {
                price_action.get_or_insert(RecommendedAction::RaisePrice);
            }
            SignalTier::HoldPrice => {
                price_action.get_or_insert(RecommendedAction::Hold);
            }
            _ => {}
        }
    }

    stock_action
        .or(price_action)
        .unwrap_or(RecommendedAction::Monitor)
}

/// Combine a base forecast with any subset of signals.
///
/// adjusted = base x product of all supplied multipliers. Applied
/// signals keep the order they were supplied. Idempotent: identical
/// inputs always produce identical output.
pub fn aggregate(base_demand: f64, signals: &[Signal]) -> CoreResult<AggregatedForecast> {
    let base = require_finite("base_demand", base_demand)?;
    if base < 0.0 {
        return Err(CoreError::invalid_input(
            "base_demand",
            "must be non-negative",
        ));
    }

    let mut applied = Vec::with_capacity(signals.len());
    for signal in signals {
        applied.push(evaluate_signal(signal)?);
    }

    let combined: f64 = applied.iter().map(|r| r.multiplier).product();
    let recommended_action = resolve_action(&applied);

    Ok(AggregatedForecast {
        base_demand: base,
        adjusted_demand: base * combined,
        applied_signals: applied,
        recommended_action,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventType, ProductCategory};

    fn weather_signal(temp: f64, precip: f64) -> Signal {
        Signal::Weather(WeatherReading {
            temperature_f: temp,
            precipitation_pct: precip,
            category: ProductCategory::Electronics,
        })
    }

    #[test]
    fn multiplies_weather_and_event() {
        let signals = vec![
            weather_signal(75.0, 60.0), // 1.3
            Signal::Event(EventMetric {
                region: "Mumbai".into(),
                event_score: 9.5,
                event_type: EventType::Festival, // 1.95
            }),
        ];
        let forecast = aggregate(1000.0, &signals).unwrap();
        assert!((forecast.adjusted_demand - 2535.0).abs() < 1e-6);
        assert_eq!(forecast.applied_signals.len(), 2);
        assert_eq!(forecast.recommended_action, RecommendedAction::Monitor);
    }

    #[test]
    fn empty_signal_list_passes_base_through() {
        let forecast = aggregate(500.0, &[]).unwrap();
        assert_eq!(forecast.adjusted_demand, 500.0);
        assert_eq!(forecast.recommended_action, RecommendedAction::Monitor);
        assert!(forecast.applied_signals.is_empty());
    }

    #[test]
    fn critical_stock_outranks_price_action() {
        let signals = vec![
            Signal::PriceGap(PriceQuote {
                our_price: 100.0,
                competitor_price: 85.0,
                elasticity: 1.2,
            }),
            Signal::Stock(StockRecord {
                product_id: "SKU-1".into(),
                current_stock: 45,
                forecasted_demand: 156.0,
                required_stock: 200.0,
            }),
        ];
        let forecast = aggregate(1000.0, &signals).unwrap();
        assert_eq!(
            forecast.recommended_action,
            RecommendedAction::ReorderCritical
        );
        // Price uplift still applies to demand: 1.18 multiplier.
        assert!((forecast.adjusted_demand - 1180.0).abs() < 1e-6);
    }

    #[test]
    fn low_stock_outranks_price_but_not_critical() {
        let signals = vec![
            Signal::Stock(StockRecord {
                product_id: "SKU-2".into(),
                current_stock: 89,
                forecasted_demand: 145.0,
                required_stock: 120.0,
            }),
            Signal::PriceGap(PriceQuote {
                our_price: 100.0,
                competitor_price: 85.0,
                elasticity: 1.0,
            }),
        ];
        let forecast = aggregate(1000.0, &signals).unwrap();
        assert_eq!(forecast.recommended_action, RecommendedAction::ReorderSoon);
    }

    #[test]
    fn price_hold_surfaces_when_stock_sufficient() {
        let signals = vec![
            Signal::Stock(StockRecord {
                product_id: "SKU-3".into(),
                current_stock: 234,
                forecasted_demand: 89.0,
                required_stock: 120.0,
            }),
            Signal::PriceGap(PriceQuote {
                our_price: 94.99,
                competitor_price: 89.99,
                elasticity: 1.2,
            }),
        ];
        let forecast = aggregate(1000.0, &signals).unwrap();
        assert_eq!(forecast.recommended_action, RecommendedAction::Hold);
    }

    #[test]
    fn pricier_competitor_surfaces_a_raise() {
        // Gap = (129.99 - 134.99) / 129.99 = -3.85%, past the raise cutoff.
        let signals = vec![Signal::PriceGap(PriceQuote {
            our_price: 129.99,
            competitor_price: 134.99,
            elasticity: 1.0,
        })];
        let forecast = aggregate(1000.0, &signals).unwrap();
        assert_eq!(forecast.recommended_action, RecommendedAction::RaisePrice);
        assert_eq!(forecast.applied_signals[0].tier, SignalTier::RaisePrice);
        // No uplift applies when the price is not being lowered.
        assert_eq!(forecast.adjusted_demand, 1000.0);
    }

    #[test]
    fn invalid_signal_aborts_the_whole_aggregate() {
        let signals = vec![
            weather_signal(75.0, 60.0),
            Signal::Stock(StockRecord {
                product_id: "SKU-4".into(),
                current_stock: 10,
                forecasted_demand: 0.0,
                required_stock: 0.0, // invalid
            }),
        ];
        let err = aggregate(1000.0, &signals).unwrap_err();
        assert_eq!(err.field(), "required_stock");
    }

    #[test]
    fn applied_signals_preserve_supply_order() {
        let signals = vec![
            Signal::Event(EventMetric {
                region: "Pune".into(),
                event_score: 6.8,
                event_type: EventType::Concert,
            }),
            weather_signal(90.0, 10.0),
            Signal::Trend(TrendMetric {
                mention_volume: 15420.0,
                sentiment_score: 8.4,
                trend_index: 9.2,
            }),
        ];
        let forecast = aggregate(100.0, &signals).unwrap();
        let kinds: Vec<SignalKind> = forecast
            .applied_signals
            .iter()
            .map(|r| r.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![SignalKind::Event, SignalKind::Weather, SignalKind::Trend]
        );
    }

    #[test]
    fn aggregation_is_idempotent() {
        let signals = vec![
            weather_signal(75.0, 60.0),
            Signal::Trend(TrendMetric {
                mention_volume: 12100.0,
                sentiment_score: 9.1,
                trend_index: 8.7,
            }),
        ];
        let a = aggregate(1000.0, &signals).unwrap();
        let b = aggregate(1000.0, &signals).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.adjusted_demand.to_bits(), b.adjusted_demand.to_bits());
    }

    #[test]
    fn negative_base_demand_is_rejected() {
        assert!(aggregate(-1.0, &[]).is_err());
        assert!(aggregate(f64::NAN, &[]).is_err());
    }
}
