//! Bridge protocol — request parsing, execution, and response
//! formatting.
//!
//! The flow for every request:
//! 1. Raw JSON -> parse into a `ForecastOperation` (reject if invalid)
//! 2. Execute against the demand core (reject on invalid input)
//! 3. Wrap the result with the echoed request id
//! 4. Append an audit entry for the operation

use chrono::Utc;
use serde::{Deserialize, Serialize};

use demand_core::price_gap::PriceGapAssessment;
use demand_core::stock_status::StockStatus;
use demand_core::trend::TrendSpike;
use demand_core::types::AggregatedForecast;
use demand_core::weather::WeatherImpact;
use demand_core::EventImpact;
use demand_core::{aggregate, estimate, evaluate, predict, weather};
use demand_core::{classify, thresholds};

use crate::error::{BridgeError, BridgeResult};
use crate::ops::ForecastOperation;

/// A request from a caller to the forecast engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeRequest {
    /// The operation to perform.
    pub operation: ForecastOperation,

    /// Request ID for tracking.
    pub request_id: String,

    /// Optional context: why is the caller making this request?
    pub context: Option<String>,
}

/// The result payload for one executed operation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperationResult {
    StockStatus(StockStatus),
    PriceGap(PriceGapAssessment),
    Weather(WeatherImpact),
    Trend(TrendSpike),
    Event(EventImpact),
    Forecast(AggregatedForecast),
}

/// A response from the forecast engine.
#[derive(Debug, Clone, Serialize)]
pub struct BridgeResponse {
    /// The operation result.
    pub result: OperationResult,

    /// Request ID (echoed back).
    pub request_id: String,
}

/// Audit log entry, one per executed request.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub timestamp: String,
    pub request_id: String,
    pub operation: String,
    pub success: bool,
    pub error: Option<String>,
}

/// The bridge — parses, executes, and audits forecast requests.
#[derive(Default)]
pub struct Bridge {
    /// Audit log of all executed operations.
    pub audit_log: Vec<AuditEntry>,
}

impl Bridge {
    pub fn new() -> Self {
        Bridge {
            audit_log: Vec::new(),
        }
    }

    /// Parse raw caller JSON into a `BridgeRequest`.
    ///
    /// First line of defense: if the payload doesn't parse into a
    /// known operation, it's rejected here.
    pub fn parse_request(&self, raw_json: &str) -> BridgeResult<BridgeRequest> {
        serde_json::from_str(raw_json)
            .map_err(|e| BridgeError::MalformedRequest(format!("failed to parse request: {}", e)))
    }

    /// Execute a validated request and record it in the audit log.
    pub fn execute(&mut self, request: &BridgeRequest) -> BridgeResult<BridgeResponse> {
        let result = self.dispatch(&request.operation);

        self.audit_log.push(AuditEntry {
            timestamp: Utc::now().to_rfc3339(),
            request_id: request.request_id.clone(),
            operation: request.operation.describe(),
            success: result.is_ok(),
            error: result.as_ref().err().map(|e| e.to_string()),
        });

        Ok(BridgeResponse {
            result: result?,
            request_id: request.request_id.clone(),
        })
    }

    /// Parse, execute, and serialize in one step.
    pub fn handle_raw(&mut self, raw_json: &str) -> BridgeResult<String> {
        let request = self.parse_request(raw_json)?;
        let response = self.execute(&request)?;
        Ok(serde_json::to_string(&response)?)
    }

    fn dispatch(&self, op: &ForecastOperation) -> BridgeResult<OperationResult> {
        match op {
            ForecastOperation::ClassifyStock {
                current_stock,
                required_stock,
            } => Ok(OperationResult::StockStatus(classify(
                *current_stock,
                *required_stock,
            )?)),
            ForecastOperation::EvaluatePriceGap {
                reference_price,
                competitor_price,
                elasticity,
            } => Ok(OperationResult::PriceGap(evaluate(
                *reference_price,
                *competitor_price,
                *elasticity,
            )?)),
            ForecastOperation::AdjustWeather {
                temperature_f,
                precipitation_pct,
                category,
            } => Ok(OperationResult::Weather(weather::adjust(
                *temperature_f,
                *precipitation_pct,
                *category,
            )?)),
            ForecastOperation::PredictTrend {
                mention_volume,
                sentiment_score,
                trend_index,
            } => Ok(OperationResult::Trend(predict(
                *mention_volume,
                *sentiment_score,
                *trend_index,
            )?)),
            ForecastOperation::EstimateEvent {
                region,
                event_score,
                event_type,
            } => Ok(OperationResult::Event(estimate(
                *event_score,
                *event_type,
                region,
            )?)),
            ForecastOperation::Aggregate {
                base_demand,
                signals,
            } => {
                let base = base_demand.unwrap_or(thresholds::DEFAULT_BASE_DEMAND);
                Ok(OperationResult::Forecast(aggregate(base, signals)?))
            }
        }
    }
}
