use async_trait::async_trait;

use crate::query_hydrator::QueryHydrator;
use crate::types::MatrixQuery;

/// Normalizes catalog filters on the query: trims whitespace and maps
/// the wildcard `"all"` (any case) and empty strings to `None`.
pub struct FilterNormalizer;

#[async_trait]
impl QueryHydrator<MatrixQuery> for FilterNormalizer {
    async fn hydrate(&self, query: &MatrixQuery) -> Result<MatrixQuery, String> {
        let mut hydrated = query.clone();
        hydrated.filters = query.filters.normalized();
        Ok(hydrated)
    }

    fn update(&self, query: &mut MatrixQuery, hydrated: MatrixQuery) {
        query.filters = hydrated.filters;
    }
}
