use async_trait::async_trait;

use crate::util;

/// Query hydrators normalize or fill in query fields before any
/// candidates are fetched.
#[async_trait]
pub trait QueryHydrator<Q>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
{
    /// Produce a normalized copy of the query.
    async fn hydrate(&self, query: &Q) -> Result<Q, String>;

    /// Copy the normalized fields back onto the working query.
    fn update(&self, query: &mut Q, hydrated: Q);

    /// Stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
