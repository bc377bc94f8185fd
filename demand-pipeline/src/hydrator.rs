use async_trait::async_trait;

use crate::util;

/// Hydrators enrich candidates with derived or contextual fields
/// without adding or removing candidates.
#[async_trait]
pub trait Hydrator<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    /// Decide if this hydrator should run for the given query.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    /// Produce an enriched copy of every candidate, in input order.
    async fn hydrate(&self, query: &Q, candidates: &[C]) -> Result<Vec<C>, String>;

    /// Copy enriched fields back onto the working candidate.
    fn update(&self, candidate: &mut C, hydrated: C);

    /// Stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
