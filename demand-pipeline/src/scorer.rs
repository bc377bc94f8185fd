use async_trait::async_trait;

use crate::util;

/// Scorers assign or adjust a priority score on each candidate.
///
/// `score` returns a scored copy of every candidate; `update` copies
/// the scored fields back onto the working candidate. Splitting the two
/// lets scorers stay pure over their input slice.
#[async_trait]
pub trait Scorer<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    /// Decide if this scorer should run for the given query.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    /// Score all candidates, returning one scored value per input in
    /// the same order.
    async fn score(&self, query: &Q, candidates: &[C]) -> Result<Vec<C>, String>;

    /// Copy scored fields back onto the working candidate.
    fn update(&self, candidate: &mut C, scored: C);

    /// Stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
