use async_trait::async_trait;
use std::sync::Arc;

use crate::side_effect::{SideEffect, SideEffectInput};
use crate::types::{MatrixQuery, MatrixRow};

/// Logs the selected reorder rows at the end of a pipeline run so
/// operators can trace which items a digest surfaced.
pub struct ReorderLogSideEffect;

#[async_trait]
impl SideEffect<MatrixQuery, MatrixRow> for ReorderLogSideEffect {
    async fn run(&self, input: Arc<SideEffectInput<MatrixQuery, MatrixRow>>) -> Result<(), String> {
        log::info!(
            "request_id={} reorder digest selected {} rows",
            input.query.request_id,
            input.selected_candidates.len()
        );
        for row in &input.selected_candidates {
            log::info!(
                "request_id={} sku={} location={} stock={}/{} priority={:.3}",
                input.query.request_id,
                row.sku,
                row.location,
                row.current_stock,
                row.required_stock,
                row.priority_score.unwrap_or(0.0)
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogFilters;

    #[tokio::test]
    async fn runs_without_error_on_empty_selection() {
        let input = Arc::new(SideEffectInput {
            query: Arc::new(MatrixQuery {
                request_id: "req-1".into(),
                filters: CatalogFilters::default(),
                result_size: 10,
            }),
            selected_candidates: Vec::<MatrixRow>::new(),
        });
        assert!(ReorderLogSideEffect.run(input).await.is_ok());
    }
}
