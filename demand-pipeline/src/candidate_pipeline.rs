//! Generic staged candidate pipeline.
//!
//! A pipeline wires concrete stage components together:
//! query hydrators → sources → hydrators → filters → scorers →
//! selector → side effects. Stage failures are logged and skipped so
//! one misbehaving component cannot take down the whole run; the pure
//! computation core does its own fail-fast validation inside the
//! source.

use async_trait::async_trait;
use std::sync::Arc;

use crate::filter::Filter;
use crate::hydrator::Hydrator;
use crate::query_hydrator::QueryHydrator;
use crate::scorer::Scorer;
use crate::selector::Selector;
use crate::side_effect::{SideEffect, SideEffectInput};
use crate::source::Source;

/// Queries carry a request id for log correlation.
pub trait HasRequestId {
    fn request_id(&self) -> &str;
}

/// Everything a pipeline run produced.
pub struct PipelineResult<Q, C> {
    /// The query after hydration.
    pub query: Q,
    /// All candidates fetched from sources, before filtering.
    pub retrieved_candidates: Vec<C>,
    /// Candidates removed by filters.
    pub removed_count: usize,
    /// The final, scored, selected candidates.
    pub selected_candidates: Vec<C>,
}

#[async_trait]
pub trait CandidatePipeline<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + HasRequestId + 'static,
    C: Clone + Send + Sync + 'static,
{
    fn query_hydrators(&self) -> &[Box<dyn QueryHydrator<Q>>];
    fn sources(&self) -> &[Box<dyn Source<Q, C>>];
    fn hydrators(&self) -> &[Box<dyn Hydrator<Q, C>>];
    fn filters(&self) -> &[Box<dyn Filter<Q, C>>];
    fn scorers(&self) -> &[Box<dyn Scorer<Q, C>>];
    fn selector(&self) -> &dyn Selector<Q, C>;
    fn side_effects(&self) -> Arc<Vec<Box<dyn SideEffect<Q, C>>>>;
    fn result_size(&self) -> usize;

    /// Run the full pipeline for one query.
    async fn execute(&self, query: Q) -> PipelineResult<Q, C> {
        let mut query = query;

        // Normalize the query first.
        for hydrator in self.query_hydrators() {
            match hydrator.hydrate(&query).await {
                Ok(hydrated) => hydrator.update(&mut query, hydrated),
                Err(e) => log::warn!(
                    "request_id={} query hydrator {} failed: {}",
                    query.request_id(),
                    hydrator.name(),
                    e
                ),
            }
        }

        // Gather candidates from every enabled source.
        let mut candidates: Vec<C> = Vec::new();
        for source in self.sources() {
            if !source.enable(&query) {
                continue;
            }
            match source.get_candidates(&query).await {
                Ok(mut fetched) => candidates.append(&mut fetched),
                Err(e) => log::warn!(
                    "request_id={} source {} failed: {}",
                    query.request_id(),
                    source.name(),
                    e
                ),
            }
        }
        let retrieved_candidates = candidates.clone();

        // Enrich.
        for hydrator in self.hydrators() {
            if !hydrator.enable(&query) {
                continue;
            }
            match hydrator.hydrate(&query, &candidates).await {
                Ok(hydrated) => {
                    for (candidate, enriched) in candidates.iter_mut().zip(hydrated) {
                        hydrator.update(candidate, enriched);
                    }
                }
                Err(e) => log::warn!(
                    "request_id={} hydrator {} failed: {}",
                    query.request_id(),
                    hydrator.name(),
                    e
                ),
            }
        }

        // Filter.
        let mut removed_count = 0;
        for filter in self.filters() {
            if !filter.enable(&query) {
                continue;
            }
            // Pass a copy so a failing filter leaves the set intact.
            match filter.filter(&query, candidates.clone()).await {
                Ok(outcome) => {
                    removed_count += outcome.removed.len();
                    candidates = outcome.kept;
                }
                Err(e) => {
                    log::warn!(
                        "request_id={} filter {} failed: {}",
                        query.request_id(),
                        filter.name(),
                        e
                    );
                }
            }
        }

        // Score.
        for scorer in self.scorers() {
            if !scorer.enable(&query) {
                continue;
            }
            match scorer.score(&query, &candidates).await {
                Ok(scored) => {
                    for (candidate, s) in candidates.iter_mut().zip(scored) {
                        scorer.update(candidate, s);
                    }
                }
                Err(e) => log::warn!(
                    "request_id={} scorer {} failed: {}",
                    query.request_id(),
                    scorer.name(),
                    e
                ),
            }
        }

        // Select.
        let mut selected = self.selector().select(&query, candidates);
        selected.truncate(self.result_size());

        // Fire side effects; they cannot change the result.
        let input = Arc::new(SideEffectInput {
            query: Arc::new(query.clone()),
            selected_candidates: selected.clone(),
        });
        for effect in self.side_effects().iter() {
            if !effect.enable(Arc::new(query.clone())) {
                continue;
            }
            if let Err(e) = effect.run(Arc::clone(&input)).await {
                log::warn!(
                    "request_id={} side effect {} failed: {}",
                    query.request_id(),
                    effect.name(),
                    e
                );
            }
        }

        PipelineResult {
            query,
            retrieved_candidates,
            removed_count,
            selected_candidates: selected,
        }
    }
}
