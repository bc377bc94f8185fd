use async_trait::async_trait;

use crate::catalog_loader::CatalogRecord;
use crate::matrix;
use crate::source::Source;
use crate::types::{MatrixQuery, MatrixRow};

/// Turns the loaded catalog into annotated matrix rows, applying the
/// query's filters. Each row arrives with its stock status already
/// classified; price actions come from the hydrator stage.
pub struct CatalogSource {
    records: Vec<CatalogRecord>,
}

impl CatalogSource {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl Source<MatrixQuery, MatrixRow> for CatalogSource {
    fn enable(&self, _query: &MatrixQuery) -> bool {
        !self.records.is_empty()
    }

    async fn get_candidates(&self, query: &MatrixQuery) -> Result<Vec<MatrixRow>, String> {
        let filters = query.filters.normalized();
        self.records
            .iter()
            .filter(|r| filters.matches(r))
            .map(matrix::build_row)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogFilters;
    use demand_core::types::StockTier;

    fn record(sku: &str, brand: &str, current: u32, required: f64) -> CatalogRecord {
        CatalogRecord {
            sku: sku.into(),
            product_name: format!("Product {}", sku),
            brand: brand.into(),
            category: "Electronics".into(),
            location: "Warehouse A".into(),
            current_stock: current,
            forecasted_demand: 0.0,
            required_stock: required,
            unit_price: 49.99,
            max_capacity: 500.0,
            walmart_price: None,
            amazon_price: None,
        }
    }

    fn query(brand: Option<&str>) -> MatrixQuery {
        MatrixQuery {
            request_id: "req-1".into(),
            filters: CatalogFilters {
                brand: brand.map(String::from),
                category: None,
                location: None,
            },
            result_size: 10,
        }
    }

    #[tokio::test]
    async fn annotates_and_filters() {
        let source = CatalogSource::new(vec![
            record("SKU-1", "TechCorp", 50, 100.0),
            record("SKU-2", "SoundWave", 120, 100.0),
        ]);
        let rows = source.get_candidates(&query(Some("TechCorp"))).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sku, "SKU-1");
        assert_eq!(rows[0].status, Some(StockTier::Critical));
    }

    #[test]
    fn disabled_when_catalog_empty() {
        let source = CatalogSource::new(Vec::new());
        assert!(!source.enable(&query(None)));
    }

    #[tokio::test]
    async fn bad_row_fails_the_source() {
        let source = CatalogSource::new(vec![record("SKU-0", "TechCorp", 10, 0.0)]);
        let err = source.get_candidates(&query(None)).await.unwrap_err();
        assert!(err.contains("SKU-0"));
    }
}
