//! Weather-driven demand adjustment.
//!
//! Each product category carries its own decision table. Rules are
//! evaluated in the stated order and the first match wins, so for
//! electronics a rainy heat wave resolves to the rain rule, not the
//! heat rule.

use serde::Serialize;

use crate::error::{require_finite, CoreError, CoreResult};
use crate::thresholds::*;
use crate::types::ProductCategory;

/// Demand impact of a weather reading on one product category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeatherImpact {
    pub multiplier: f64,
    pub rationale: &'static str,
}

/// Map a (temperature, precipitation, category) triple to a demand
/// multiplier and rationale.
pub fn adjust(
    temperature_f: f64,
    precipitation_pct: f64,
    category: ProductCategory,
) -> CoreResult<WeatherImpact> {
    let temp = require_finite("temperature_f", temperature_f)?;
    let precip = require_finite("precipitation_pct", precipitation_pct)?;

    if !(0.0..=100.0).contains(&precip) {
        return Err(CoreError::invalid_input(
            "precipitation_pct",
            format!("must be within 0-100, got {}", precip),
        ));
    }

    let impact = match category {
        ProductCategory::Electronics => {
            if precip > ELECTRONICS_RAIN_PRECIP_PCT {
                WeatherImpact {
                    multiplier: ELECTRONICS_RAIN_MULTIPLIER,
                    rationale: "High rain increases indoor entertainment demand",
                }
            } else if temp > ELECTRONICS_HEAT_TEMP_F {
                WeatherImpact {
                    multiplier: ELECTRONICS_HEAT_MULTIPLIER,
                    rationale: "Hot weather drives cooling-device sales",
                }
            } else {
                WeatherImpact {
                    multiplier: 1.0,
                    rationale: "Normal weather conditions",
                }
            }
        }
        ProductCategory::Apparel => {
            if temp < APPAREL_COLD_TEMP_F {
                WeatherImpact {
                    multiplier: APPAREL_COLD_MULTIPLIER,
                    rationale: "Cold weather boosts winter clothing",
                }
            } else if temp > APPAREL_HEAT_TEMP_F {
                WeatherImpact {
                    multiplier: APPAREL_HEAT_MULTIPLIER,
                    rationale: "Hot weather increases summer wear",
                }
            } else {
                WeatherImpact {
                    multiplier: APPAREL_MILD_MULTIPLIER,
                    rationale: "Mild seasonal adjustment",
                }
            }
        }
        ProductCategory::Outdoor => {
            if precip > OUTDOOR_RAIN_PRECIP_PCT {
                WeatherImpact {
                    multiplier: OUTDOOR_RAIN_MULTIPLIER,
                    rationale: "Rain reduces outdoor activity products",
                }
            } else if temp > OUTDOOR_IDEAL_TEMP_LOW_F && temp < OUTDOOR_IDEAL_TEMP_HIGH_F {
                WeatherImpact {
                    multiplier: OUTDOOR_IDEAL_MULTIPLIER,
                    rationale: "Perfect weather boosts outdoor gear",
                }
            } else {
                WeatherImpact {
                    multiplier: 1.0,
                    rationale: "Weather neutral for outdoor products",
                }
            }
        }
        // The category exists in catalogs but has no weather rules.
        ProductCategory::Home => WeatherImpact {
            multiplier: 1.0,
            rationale: "Weather neutral for home goods",
        },
    };

    Ok(impact)
}

/// Apply a weather impact to a caller-supplied base demand, rounded to
/// whole units.
pub fn adjusted_demand(base_demand: f64, impact: &WeatherImpact) -> CoreResult<f64> {
    let base = require_finite("base_demand", base_demand)?;
    if base < 0.0 {
        return Err(CoreError::invalid_input(
            "base_demand",
            "must be non-negative",
        ));
    }
    Ok((base * impact.multiplier).round())
}
