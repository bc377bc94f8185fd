use serde::Serialize;

use demand_core::price_gap::PriceAction;
use demand_core::types::StockTier;

use crate::candidate_pipeline::HasRequestId;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Catalog filters as they arrive from the caller. `None` or the
/// literal `"all"` (any case) means no filtering on that dimension.
#[derive(Clone, Debug, Default)]
pub struct CatalogFilters {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

/// Query for one matrix/reorder pipeline run.
#[derive(Clone, Debug)]
pub struct MatrixQuery {
    pub request_id: String,
    pub filters: CatalogFilters,
    /// Maximum rows in the selected output.
    pub result_size: usize,
}

impl HasRequestId for MatrixQuery {
    fn request_id(&self) -> &str {
        &self.request_id
    }
}

// ---------------------------------------------------------------------------
// Candidate types
// ---------------------------------------------------------------------------

/// One annotated row of the inventory demand matrix.
#[derive(Clone, Debug, Default, Serialize)]
pub struct MatrixRow {
    pub sku: String,
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub location: String,
    pub current_stock: u32,
    pub forecasted_demand: f64,
    /// Effective required stock: max(forecasted demand, catalog floor).
    pub required_stock: f64,
    pub unit_price: f64,
    pub max_capacity: f64,
    pub stock_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StockTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_action: Option<PriceAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<f64>,
}

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Summary counters over an annotated matrix.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatrixMetrics {
    pub total_skus: usize,
    pub reorder_required: usize,
    pub critical_items: usize,
    pub low_items: usize,
    pub sufficient_items: usize,
    /// Total current stock as a percentage of total warehouse capacity,
    /// rounded to two decimals.
    pub capacity_utilization_pct: f64,
    /// Revenue tied to the required stock positions (unit price x
    /// required), in millions, rounded to two decimals.
    pub revenue_impact_millions: f64,
}

/// One line of the reorder report.
#[derive(Clone, Debug, Serialize)]
pub struct ReorderItem {
    pub sku: String,
    pub product_name: String,
    pub current_stock: u32,
    pub required_stock: f64,
}

/// The reorder report handed to the presentation layer.
#[derive(Clone, Debug, Serialize)]
pub struct ReorderReport {
    pub total_reorder_items: usize,
    pub items: Vec<ReorderItem>,
}
