use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input entities
//
// All of these are immutable value objects created fresh per computation
// request. Nothing here persists beyond a single evaluation.
// ---------------------------------------------------------------------------

/// A single SKU's stock position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub product_id: String,
    pub current_stock: u32,
    pub forecasted_demand: f64,
    pub required_stock: f64,
}

/// Our price against a single competitor reference point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub our_price: f64,
    pub competitor_price: f64,
    /// Demand elasticity coefficient, typically 0.5-3.0.
    pub elasticity: f64,
}

/// A weather reading paired with the product category it affects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_f: f64,
    pub precipitation_pct: f64,
    pub category: ProductCategory,
}

/// Social-trend metrics for a product over a recent window.
///
/// `mention_volume` is a count in spirit but carried as f64 so that a
/// negative value arriving over the wire is rejected with `InvalidInput`
/// rather than failing opaquely at deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendMetric {
    pub mention_volume: f64,
    /// Sentiment score, 1-10.
    pub sentiment_score: f64,
    /// Trend index, 1-10.
    pub trend_index: f64,
}

/// A local event expected to move regional demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventMetric {
    pub region: String,
    /// Event score, 0-10.
    pub event_score: f64,
    pub event_type: EventType,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Product categories with weather sensitivity rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Electronics,
    Apparel,
    Outdoor,
    Home,
}

impl ProductCategory {
    /// Parse a category name as it appears in catalog data.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "electronics" => Some(ProductCategory::Electronics),
            "apparel" | "clothing" => Some(ProductCategory::Apparel),
            "outdoor" | "outdoor gear" | "sports" => Some(ProductCategory::Outdoor),
            "home" | "home & garden" => Some(ProductCategory::Home),
            _ => None,
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::Electronics => write!(f, "electronics"),
            ProductCategory::Apparel => write!(f, "apparel"),
            ProductCategory::Outdoor => write!(f, "outdoor"),
            ProductCategory::Home => write!(f, "home"),
        }
    }
}

/// Recognized local event types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Festival,
    Conference,
    Sports,
    Concert,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Festival => write!(f, "festival"),
            EventType::Conference => write!(f, "conference"),
            EventType::Sports => write!(f, "sports"),
            EventType::Concert => write!(f, "concert"),
        }
    }
}

/// Ordinal stock-health classification. Ordering is by health:
/// `Critical < Low < Sufficient`, so a higher stock ratio never
/// produces a smaller tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockTier {
    Critical,
    Low,
    Sufficient,
}

impl fmt::Display for StockTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockTier::Critical => write!(f, "Critical"),
            StockTier::Low => write!(f, "Low"),
            StockTier::Sufficient => write!(f, "Sufficient"),
        }
    }
}

/// Which contextual signal produced an adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Stock,
    PriceGap,
    Weather,
    Trend,
    Event,
}

/// Per-signal tier attached to every adjustment result. The vocabulary
/// is flat across signal kinds: stock health, price posture, trend
/// response, and demand direction for weather/event multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalTier {
    Sufficient,
    Low,
    Critical,
    HoldPrice,
    LowerPrice,
    RaisePrice,
    MonitorClosely,
    PrepareModerateSpike,
    IncreaseInventoryImmediately,
    Suppressed,
    Neutral,
    Boosted,
}

impl SignalTier {
    /// Demand-direction tier for a raw multiplier.
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > 1.0 {
            SignalTier::Boosted
        } else if multiplier < 1.0 {
            SignalTier::Suppressed
        } else {
            SignalTier::Neutral
        }
    }
}

/// The overall action the aggregator recommends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    Hold,
    RaisePrice,
    LowerPrice,
    ReorderCritical,
    ReorderSoon,
    Monitor,
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendedAction::Hold => write!(f, "Hold Price"),
            RecommendedAction::RaisePrice => write!(f, "Raise Price"),
            RecommendedAction::LowerPrice => write!(f, "Lower Price"),
            RecommendedAction::ReorderCritical => write!(f, "Reorder (Critical)"),
            RecommendedAction::ReorderSoon => write!(f, "Reorder Soon"),
            RecommendedAction::Monitor => write!(f, "Monitor"),
        }
    }
}

// ---------------------------------------------------------------------------
// Output envelopes
// ---------------------------------------------------------------------------

/// Uniform envelope for one adjuster's contribution.
///
/// Adjusters that natively produce a percentage delta (price uplift,
/// trend spike) record the equivalent multiplier `1 + pct/100` here so
/// the aggregator can combine everything by plain multiplication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    pub kind: SignalKind,
    pub multiplier: f64,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_pct: Option<f64>,
    pub tier: SignalTier,
}

/// The aggregator's final output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregatedForecast {
    pub base_demand: f64,
    pub adjusted_demand: f64,
    /// Per-signal results in the order the signals were supplied, kept
    /// for auditability.
    pub applied_signals: Vec<AdjustmentResult>,
    pub recommended_action: RecommendedAction,
}
