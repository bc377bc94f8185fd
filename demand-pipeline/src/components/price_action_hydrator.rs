use async_trait::async_trait;
use std::collections::HashMap;

use crate::catalog_loader::CatalogRecord;
use crate::hydrator::Hydrator;
use crate::matrix;
use crate::types::{MatrixQuery, MatrixRow};

/// Attaches a price action to each row.
///
/// Rows with known competitor prices are classified against the
/// cheapest competitor; rows without fall back to the forecast rule
/// (forecast below current stock argues for a cut).
pub struct PriceActionHydrator {
    by_sku: HashMap<String, CatalogRecord>,
}

impl PriceActionHydrator {
    pub fn new(records: &[CatalogRecord]) -> Self {
        Self {
            by_sku: records
                .iter()
                .map(|r| (r.sku.clone(), r.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl Hydrator<MatrixQuery, MatrixRow> for PriceActionHydrator {
    async fn hydrate(
        &self,
        _query: &MatrixQuery,
        candidates: &[MatrixRow],
    ) -> Result<Vec<MatrixRow>, String> {
        candidates
            .iter()
            .map(|row| {
                let mut hydrated = row.clone();
                if let Some(record) = self.by_sku.get(&row.sku) {
                    hydrated.price_action = Some(matrix::price_action_for(record)?);
                }
                Ok(hydrated)
            })
            .collect()
    }

    fn update(&self, candidate: &mut MatrixRow, hydrated: MatrixRow) {
        candidate.price_action = hydrated.price_action;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogFilters;
    use demand_core::price_gap::PriceAction;

    fn record(sku: &str, price: f64, walmart: Option<f64>) -> CatalogRecord {
        CatalogRecord {
            sku: sku.into(),
            product_name: format!("Product {}", sku),
            brand: "TechCorp".into(),
            category: "Electronics".into(),
            location: "Warehouse A".into(),
            current_stock: 100,
            forecasted_demand: 150.0,
            required_stock: 120.0,
            unit_price: price,
            max_capacity: 500.0,
            walmart_price: walmart,
            amazon_price: None,
        }
    }

    fn row(sku: &str) -> MatrixRow {
        MatrixRow {
            sku: sku.into(),
            ..Default::default()
        }
    }

    fn query() -> MatrixQuery {
        MatrixQuery {
            request_id: "req-1".into(),
            filters: CatalogFilters::default(),
            result_size: 10,
        }
    }

    #[tokio::test]
    async fn classifies_against_cheapest_competitor() {
        // 79.99 vs 69.99 is a 12.5% gap: lower.
        let hydrator = PriceActionHydrator::new(&[record("SKU-1", 79.99, Some(69.99))]);
        let hydrated = hydrator.hydrate(&query(), &[row("SKU-1")]).await.unwrap();
        assert_eq!(hydrated[0].price_action, Some(PriceAction::LowerPrice));
    }

    #[tokio::test]
    async fn falls_back_to_forecast_rule() {
        // Forecast 150 above current 100: hold.
        let hydrator = PriceActionHydrator::new(&[record("SKU-2", 24.99, None)]);
        let hydrated = hydrator.hydrate(&query(), &[row("SKU-2")]).await.unwrap();
        assert_eq!(hydrated[0].price_action, Some(PriceAction::HoldPrice));
    }

    #[tokio::test]
    async fn unknown_sku_left_unannotated() {
        let hydrator = PriceActionHydrator::new(&[]);
        let hydrated = hydrator.hydrate(&query(), &[row("SKU-3")]).await.unwrap();
        assert!(hydrated[0].price_action.is_none());
    }
}
