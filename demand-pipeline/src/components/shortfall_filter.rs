use async_trait::async_trait;

use crate::filter::{Filter, FilterOutcome};
use crate::types::{MatrixQuery, MatrixRow};

/// Keeps only rows whose current stock sits below the required stock.
/// Sufficiently stocked items have nothing to reorder.
pub struct ShortfallFilter;

#[async_trait]
impl Filter<MatrixQuery, MatrixRow> for ShortfallFilter {
    async fn filter(
        &self,
        _query: &MatrixQuery,
        candidates: Vec<MatrixRow>,
    ) -> Result<FilterOutcome<MatrixRow>, String> {
        let (kept, removed) = candidates
            .into_iter()
            .partition(|row| (row.current_stock as f64) < row.required_stock);
        Ok(FilterOutcome { kept, removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogFilters;

    fn row(sku: &str, current: u32, required: f64) -> MatrixRow {
        MatrixRow {
            sku: sku.into(),
            current_stock: current,
            required_stock: required,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn partitions_on_shortfall() {
        let query = MatrixQuery {
            request_id: "req-1".into(),
            filters: CatalogFilters::default(),
            result_size: 10,
        };
        let outcome = ShortfallFilter
            .filter(
                &query,
                vec![row("A", 50, 100.0), row("B", 120, 100.0), row("C", 100, 100.0)],
            )
            .await
            .unwrap();
        assert_eq!(outcome.kept.len(), 1);
        assert_eq!(outcome.kept[0].sku, "A");
        assert_eq!(outcome.removed.len(), 2);
    }
}
