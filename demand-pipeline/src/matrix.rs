//! Direct batch operations over a catalog: matrix annotation, summary
//! metrics, and the reorder report.
//!
//! These are the synchronous entry points the server and tests use
//! when the full staged pipeline is not needed. The staged pipeline's
//! `CatalogSource` builds its candidates through the same row
//! annotation so the two paths cannot drift.

use demand_core::price_gap::{self, PriceAction};
use demand_core::stock_status;
use demand_core::types::{ProductCategory, StockTier};

use crate::catalog_loader::CatalogRecord;
use crate::types::{CatalogFilters, MatrixMetrics, MatrixRow, ReorderItem, ReorderReport};

impl CatalogFilters {
    /// Normalize a single filter value: empty or the literal "all"
    /// means no filtering on that dimension.
    fn normalize(value: &Option<String>) -> Option<String> {
        value.as_deref().and_then(|v| {
            let v = v.trim();
            if v.is_empty() || v.eq_ignore_ascii_case("all") {
                None
            } else {
                Some(v.to_string())
            }
        })
    }

    /// A copy with all dimensions normalized.
    pub fn normalized(&self) -> CatalogFilters {
        CatalogFilters {
            brand: Self::normalize(&self.brand),
            category: Self::normalize(&self.category),
            location: Self::normalize(&self.location),
        }
    }

    /// Whether a catalog record passes every active dimension.
    ///
    /// Category comparison recognizes catalog synonyms: a filter of
    /// "apparel" matches a record categorized "Clothing" because both
    /// parse to the same canonical category.
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        let dim = |filter: &Option<String>, value: &str| {
            filter
                .as_deref()
                .map(|f| f.eq_ignore_ascii_case(value))
                .unwrap_or(true)
        };
        let category_ok = match self.category.as_deref() {
            None => true,
            Some(f) => {
                f.eq_ignore_ascii_case(&record.category)
                    || matches!(
                        (ProductCategory::from_name(f), ProductCategory::from_name(&record.category)),
                        (Some(a), Some(b)) if a == b
                    )
            }
        };
        dim(&self.brand, &record.brand) && category_ok && dim(&self.location, &record.location)
    }
}

/// Annotate one catalog record with its stock position.
///
/// Fails (naming the SKU) when the record cannot be classified, e.g. a
/// zero effective required stock. No partially-annotated row is ever
/// returned.
pub fn build_row(record: &CatalogRecord) -> Result<MatrixRow, String> {
    let required = record.effective_required();
    let status = stock_status::classify(record.current_stock as f64, required)
        .map_err(|e| format!("catalog row {}: {}", record.sku, e))?;

    Ok(MatrixRow {
        sku: record.sku.clone(),
        product_name: record.product_name.clone(),
        brand: record.brand.clone(),
        category: record.category.clone(),
        location: record.location.clone(),
        current_stock: record.current_stock,
        forecasted_demand: record.forecasted_demand,
        required_stock: required,
        unit_price: record.unit_price,
        max_capacity: record.max_capacity,
        stock_ratio: status.ratio,
        status: Some(status.tier),
        price_action: None,
        priority_score: None,
    })
}

/// Price action for one record: competitor prices win when present,
/// otherwise the forecast-vs-stock rule applies (demand below current
/// stock argues for a price cut to move units).
pub fn price_action_for(record: &CatalogRecord) -> Result<PriceAction, String> {
    let competitors = record.competitor_prices();
    if !competitors.is_empty() {
        return price_gap::classify_entry(record.unit_price, &competitors)
            .map_err(|e| format!("catalog row {}: {}", record.sku, e));
    }
    if record.forecasted_demand < record.current_stock as f64 {
        Ok(PriceAction::LowerPrice)
    } else {
        Ok(PriceAction::HoldPrice)
    }
}

/// Annotate the full matrix for every record passing the filters.
pub fn annotate(
    records: &[CatalogRecord],
    filters: &CatalogFilters,
) -> Result<Vec<MatrixRow>, String> {
    let filters = filters.normalized();
    let mut rows = Vec::new();
    for record in records.iter().filter(|r| filters.matches(r)) {
        let mut row = build_row(record)?;
        row.price_action = Some(price_action_for(record)?);
        rows.push(row);
    }
    Ok(rows)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summary counters over an annotated matrix. Critical and low rows
/// both count toward reorder-required. Capacity utilization and
/// revenue impact aggregate the whole filtered matrix, not just
/// shortfall rows.
pub fn metrics(rows: &[MatrixRow]) -> MatrixMetrics {
    let mut critical = 0;
    let mut low = 0;
    let mut sufficient = 0;
    let mut total_stock = 0.0;
    let mut total_capacity = 0.0;
    let mut revenue = 0.0;
    for row in rows {
        match row.status {
            Some(StockTier::Critical) => critical += 1,
            Some(StockTier::Low) => low += 1,
            Some(StockTier::Sufficient) => sufficient += 1,
            None => {}
        }
        total_stock += row.current_stock as f64;
        total_capacity += row.max_capacity;
        revenue += row.unit_price * row.required_stock;
    }
    let capacity_utilization_pct = if total_capacity > 0.0 {
        round2(total_stock / total_capacity * 100.0)
    } else {
        0.0
    };
    MatrixMetrics {
        total_skus: rows.len(),
        reorder_required: critical + low,
        critical_items: critical,
        low_items: low,
        sufficient_items: sufficient,
        capacity_utilization_pct,
        revenue_impact_millions: round2(revenue / 1_000_000.0),
    }
}

/// Rows whose current stock sits below the effective required stock.
pub fn reorder_report(rows: &[MatrixRow]) -> ReorderReport {
    let items: Vec<ReorderItem> = rows
        .iter()
        .filter(|r| (r.current_stock as f64) < r.required_stock)
        .map(|r| ReorderItem {
            sku: r.sku.clone(),
            product_name: r.product_name.clone(),
            current_stock: r.current_stock,
            required_stock: r.required_stock,
        })
        .collect();
    ReorderReport {
        total_reorder_items: items.len(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sku: &str, current: u32, forecast: f64, required: f64) -> CatalogRecord {
        CatalogRecord {
            sku: sku.into(),
            product_name: format!("Product {}", sku),
            brand: "TechCorp".into(),
            category: "Electronics".into(),
            location: "Warehouse A".into(),
            current_stock: current,
            forecasted_demand: forecast,
            required_stock: required,
            unit_price: 89.99,
            max_capacity: 500.0,
            walmart_price: None,
            amazon_price: None,
        }
    }

    #[test]
    fn annotates_status_from_effective_required() {
        let rows = annotate(
            &[record("SKU-1", 156, 280.0, 350.0)],
            &CatalogFilters::default(),
        )
        .unwrap();
        assert_eq!(rows[0].required_stock, 350.0);
        assert_eq!(rows[0].status, Some(StockTier::Critical));
    }

    #[test]
    fn forecast_raises_the_required_floor() {
        let rows = annotate(
            &[record("SKU-2", 100, 150.0, 120.0)],
            &CatalogFilters::default(),
        )
        .unwrap();
        assert_eq!(rows[0].required_stock, 150.0);
    }

    #[test]
    fn zero_required_row_fails_with_sku_context() {
        let err = annotate(
            &[record("SKU-3", 10, 0.0, 0.0)],
            &CatalogFilters::default(),
        )
        .unwrap_err();
        assert!(err.contains("SKU-3"), "got: {}", err);
    }

    #[test]
    fn price_action_prefers_competitor_prices() {
        let mut r = record("SKU-4", 45, 156.0, 200.0);
        r.unit_price = 79.99;
        r.walmart_price = Some(69.99);
        r.amazon_price = Some(72.99);
        assert_eq!(price_action_for(&r).unwrap(), PriceAction::LowerPrice);
    }

    #[test]
    fn price_action_falls_back_to_forecast_rule() {
        // Forecast below current stock: cut price to move units.
        let r = record("SKU-5", 234, 89.0, 120.0);
        assert_eq!(price_action_for(&r).unwrap(), PriceAction::LowerPrice);
        // Forecast above current stock: hold.
        let r = record("SKU-6", 89, 145.0, 120.0);
        assert_eq!(price_action_for(&r).unwrap(), PriceAction::HoldPrice);
    }

    #[test]
    fn filters_normalize_all_and_match_case_insensitively() {
        let records = vec![record("SKU-7", 10, 5.0, 8.0)];
        let filters = CatalogFilters {
            brand: Some("All".into()),
            category: Some("electronics".into()),
            location: None,
        };
        let rows = annotate(&records, &filters).unwrap();
        assert_eq!(rows.len(), 1);

        let filters = CatalogFilters {
            brand: Some("OtherBrand".into()),
            ..Default::default()
        };
        assert!(annotate(&records, &filters).unwrap().is_empty());
    }

    #[test]
    fn category_filter_matches_catalog_synonyms() {
        let mut r = record("SKU-8", 10, 5.0, 8.0);
        r.category = "Clothing".into();
        let records = vec![r];

        let filters = CatalogFilters {
            category: Some("apparel".into()),
            ..Default::default()
        };
        assert_eq!(annotate(&records, &filters).unwrap().len(), 1);

        let filters = CatalogFilters {
            category: Some("electronics".into()),
            ..Default::default()
        };
        assert!(annotate(&records, &filters).unwrap().is_empty());
    }

    #[test]
    fn metrics_count_tiers() {
        let rows = annotate(
            &[
                record("A", 156, 280.0, 350.0), // critical
                record("B", 89, 100.0, 120.0),  // low (0.74)
                record("C", 234, 89.0, 120.0),  // sufficient
            ],
            &CatalogFilters::default(),
        )
        .unwrap();
        let m = metrics(&rows);
        assert_eq!(m.total_skus, 3);
        assert_eq!(m.critical_items, 1);
        assert_eq!(m.low_items, 1);
        assert_eq!(m.sufficient_items, 1);
        assert_eq!(m.reorder_required, 2);
        // 479 units in stock across 1500 units of capacity.
        assert_eq!(m.capacity_utilization_pct, 31.93);
        // 89.99 x (350 + 120 + 120) = 53,094.10 -> 0.05M.
        assert_eq!(m.revenue_impact_millions, 0.05);
    }

    #[test]
    fn metrics_on_empty_matrix_report_zero_utilization() {
        let m = metrics(&[]);
        assert_eq!(m.total_skus, 0);
        assert_eq!(m.capacity_utilization_pct, 0.0);
        assert_eq!(m.revenue_impact_millions, 0.0);
    }

    #[test]
    fn reorder_report_lists_shortfalls_only() {
        let rows = annotate(
            &[
                record("A", 156, 280.0, 350.0),
                record("C", 234, 89.0, 120.0),
            ],
            &CatalogFilters::default(),
        )
        .unwrap();
        let report = reorder_report(&rows);
        assert_eq!(report.total_reorder_items, 1);
        assert_eq!(report.items[0].sku, "A");
    }
}
