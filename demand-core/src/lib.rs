pub mod aggregator;
pub mod error;
pub mod event;
pub mod price_gap;
pub mod stock_status;
pub mod thresholds;
pub mod trend;
pub mod types;
pub mod weather;

pub use aggregator::{aggregate, Signal};
pub use error::{CoreError, CoreResult};
pub use event::{estimate, EventImpact};
pub use price_gap::{classify_entry, evaluate, PriceAction, PriceGapAssessment};
pub use stock_status::{classify, StockStatus};
pub use trend::{predict, SpikeResponse, TrendSpike};
pub use types::{
    AdjustmentResult, AggregatedForecast, EventMetric, EventType, PriceQuote, ProductCategory,
    RecommendedAction, SignalKind, SignalTier, StockRecord, StockTier, TrendMetric,
    WeatherReading,
};
pub use weather::{adjust, adjusted_demand, WeatherImpact};
