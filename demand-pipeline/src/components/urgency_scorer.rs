use async_trait::async_trait;

use crate::scorer::Scorer;
use crate::types::{MatrixQuery, MatrixRow};

/// Scores rows by how badly they need restocking.
///
/// Severity is the shortfall fraction `(1 - ratio)`, clamped at zero,
/// weighted by log demand so high-velocity items outrank slow movers
/// with the same relative shortfall.
pub struct UrgencyScorer;

impl UrgencyScorer {
    fn priority(row: &MatrixRow) -> f64 {
        let severity = (1.0 - row.stock_ratio).max(0.0);
        severity * (row.forecasted_demand + 1.0).ln()
    }
}

#[async_trait]
impl Scorer<MatrixQuery, MatrixRow> for UrgencyScorer {
    async fn score(
        &self,
        _query: &MatrixQuery,
        candidates: &[MatrixRow],
    ) -> Result<Vec<MatrixRow>, String> {
        Ok(candidates
            .iter()
            .map(|row| {
                let mut scored = row.clone();
                scored.priority_score = Some(Self::priority(row));
                scored
            })
            .collect())
    }

    fn update(&self, candidate: &mut MatrixRow, scored: MatrixRow) {
        candidate.priority_score = scored.priority_score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogFilters;

    fn row(sku: &str, ratio: f64, forecast: f64) -> MatrixRow {
        MatrixRow {
            sku: sku.into(),
            stock_ratio: ratio,
            forecasted_demand: forecast,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn deeper_shortfall_scores_higher() {
        let query = MatrixQuery {
            request_id: "req-1".into(),
            filters: CatalogFilters::default(),
            result_size: 10,
        };
        let scored = UrgencyScorer
            .score(&query, &[row("A", 0.45, 280.0), row("B", 0.74, 280.0)])
            .await
            .unwrap();
        assert!(scored[0].priority_score.unwrap() > scored[1].priority_score.unwrap());
    }

    #[test]
    fn overstocked_rows_score_zero() {
        assert_eq!(UrgencyScorer::priority(&row("C", 1.8, 500.0)), 0.0);
    }

    #[test]
    fn demand_breaks_ties_between_equal_ratios() {
        let fast = UrgencyScorer::priority(&row("A", 0.5, 500.0));
        let slow = UrgencyScorer::priority(&row("B", 0.5, 20.0));
        assert!(fast > slow);
    }
}
