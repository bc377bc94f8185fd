use crate::selector::Selector;
use crate::types::{MatrixQuery, MatrixRow};

/// Keeps the highest-priority rows, up to a configured limit.
pub struct TopKSelector {
    limit: usize,
}

impl TopKSelector {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Selector<MatrixQuery, MatrixRow> for TopKSelector {
    fn score(&self, candidate: &MatrixRow) -> f64 {
        candidate.priority_score.unwrap_or(f64::NEG_INFINITY)
    }

    fn size(&self) -> Option<usize> {
        Some(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogFilters;

    fn row(sku: &str, score: Option<f64>) -> MatrixRow {
        MatrixRow {
            sku: sku.into(),
            priority_score: score,
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

    #[test]
    fn sorts_descending_and_truncates() {
        let selector = TopKSelector::new(2);
        let selected = selector.select(
            &query(),
            vec![
                row("A", Some(1.0)),
                row("B", Some(5.0)),
                row("C", Some(3.0)),
            ],
        );
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].sku, "B");
        assert_eq!(selected[1].sku, "C");
    }

    #[test]
    fn unscored_rows_sink_to_the_end() {
        let selector = TopKSelector::new(10);
        let selected = selector.select(&query(), vec![row("A", None), row("B", Some(0.1))]);
        assert_eq!(selected[0].sku, "B");
    }
}
