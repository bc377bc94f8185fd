//! Centralized thresholds and coefficients for demand adjustment.
//!
//! These values are calibrated for general-merchandise warehouse
//! operations. Changing a value here affects BOTH the interactive
//! single-calculation paths and the batch matrix annotation in
//! `demand-pipeline`.

/// Stock ratio at or above which inventory is considered sufficient.
pub const STOCK_SUFFICIENT_RATIO: f64 = 1.0;

/// Stock ratio at or above which inventory is merely low (below it, critical).
pub const STOCK_LOW_RATIO: f64 = 0.7;

/// Price gap (percent) above which we recommend lowering our price.
/// The gap is computed from the reference price against the competitor
/// price, so a positive gap means the competitor is cheaper.
pub const LOWER_PRICE_GAP_PCT: f64 = 10.0;

/// Price gap (percent, same sign convention) below which we recommend
/// raising our price in batch catalog classification. We undercut the
/// cheapest rival by more than this margin before a raise is suggested.
pub const RAISE_PRICE_GAP_PCT: f64 = -3.5;

// ---------------------------------------------------------------------------
// Weather decision table
// ---------------------------------------------------------------------------

/// Electronics: precipitation (percent) above which rain drives indoor demand.
pub const ELECTRONICS_RAIN_PRECIP_PCT: f64 = 50.0;
/// Electronics rain multiplier.
pub const ELECTRONICS_RAIN_MULTIPLIER: f64 = 1.3;
/// Electronics: temperature (F) above which cooling-device demand rises.
pub const ELECTRONICS_HEAT_TEMP_F: f64 = 85.0;
/// Electronics heat multiplier.
pub const ELECTRONICS_HEAT_MULTIPLIER: f64 = 1.2;

/// Apparel: temperature (F) below which winter clothing demand spikes.
pub const APPAREL_COLD_TEMP_F: f64 = 40.0;
/// Apparel cold multiplier.
pub const APPAREL_COLD_MULTIPLIER: f64 = 1.4;
/// Apparel: temperature (F) above which summer wear demand rises.
pub const APPAREL_HEAT_TEMP_F: f64 = 80.0;
/// Apparel heat multiplier.
pub const APPAREL_HEAT_MULTIPLIER: f64 = 1.3;
/// Apparel baseline seasonal lift applied in mild weather.
pub const APPAREL_MILD_MULTIPLIER: f64 = 1.1;

/// Outdoor: precipitation (percent) above which rain suppresses purchases.
pub const OUTDOOR_RAIN_PRECIP_PCT: f64 = 30.0;
/// Outdoor rain multiplier (demand suppression).
pub const OUTDOOR_RAIN_MULTIPLIER: f64 = 0.7;
/// Outdoor: lower bound (F, exclusive) of the ideal-weather window.
pub const OUTDOOR_IDEAL_TEMP_LOW_F: f64 = 70.0;
/// Outdoor: upper bound (F, exclusive) of the ideal-weather window.
pub const OUTDOOR_IDEAL_TEMP_HIGH_F: f64 = 85.0;
/// Outdoor ideal-weather multiplier.
pub const OUTDOOR_IDEAL_MULTIPLIER: f64 = 1.5;

/// Default base demand when the caller supplies none. A default, not a
/// constant baked into the adjusters; every adjusted-demand path takes
/// base demand as a parameter.
pub const DEFAULT_BASE_DEMAND: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Trend spike model
// ---------------------------------------------------------------------------

/// Divisor in the spike formula: volume x sentiment x index / divisor.
pub const TREND_SPIKE_DIVISOR: f64 = 20_000.0;
/// Base confidence (percent) before sentiment/index contributions.
pub const TREND_CONFIDENCE_BASE_PCT: f64 = 60.0;
/// Confidence contribution per sentiment point.
pub const TREND_SENTIMENT_WEIGHT: f64 = 10.0;
/// Confidence contribution per trend-index point.
pub const TREND_INDEX_WEIGHT: f64 = 5.0;
/// Hard cap on confidence. There is no corresponding floor; the cap is
/// the only bound the formula applies.
pub const TREND_CONFIDENCE_CAP_PCT: f64 = 95.0;
/// Spike (percent) above which inventory should be increased immediately.
pub const SPIKE_IMMEDIATE_PCT: f64 = 50.0;
/// Spike (percent) above which a moderate spike should be prepared for.
pub const SPIKE_MODERATE_PCT: f64 = 25.0;

// ---------------------------------------------------------------------------
// Event impact model: multiplier = 1.0 + score x coefficient
// ---------------------------------------------------------------------------

/// Festival demand coefficient per event-score point.
pub const FESTIVAL_COEFFICIENT: f64 = 0.10;
/// Conference demand coefficient per event-score point.
pub const CONFERENCE_COEFFICIENT: f64 = 0.05;
/// Sports demand coefficient per event-score point.
pub const SPORTS_COEFFICIENT: f64 = 0.15;
/// Concert demand coefficient per event-score point.
pub const CONCERT_COEFFICIENT: f64 = 0.08;
