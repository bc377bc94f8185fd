//! The reorder digest pipeline: catalog in, prioritized shortage list
//! out.
//!
//! Stage order: normalize filters, annotate the catalog, attach price
//! actions, drop fully stocked rows, score urgency, dampen
//! single-location runs, keep the top K, log the selection.

use std::sync::Arc;

use crate::candidate_pipeline::CandidatePipeline;
use crate::catalog_loader::CatalogRecord;
use crate::components::{
    CatalogSource, FilterNormalizer, LocationDiversityScorer, PriceActionHydrator,
    ReorderLogSideEffect, ShortfallFilter, TopKSelector, UrgencyScorer,
};
use crate::filter::Filter;
use crate::hydrator::Hydrator;
use crate::query_hydrator::QueryHydrator;
use crate::scorer::Scorer;
use crate::selector::Selector;
use crate::side_effect::SideEffect;
use crate::source::Source;
use crate::types::{MatrixQuery, MatrixRow};

const DEFAULT_RESULT_SIZE: usize = 20;

pub struct ReorderDigestPipeline {
    query_hydrators: Vec<Box<dyn QueryHydrator<MatrixQuery>>>,
    sources: Vec<Box<dyn Source<MatrixQuery, MatrixRow>>>,
    hydrators: Vec<Box<dyn Hydrator<MatrixQuery, MatrixRow>>>,
    filters: Vec<Box<dyn Filter<MatrixQuery, MatrixRow>>>,
    scorers: Vec<Box<dyn Scorer<MatrixQuery, MatrixRow>>>,
    selector: TopKSelector,
    side_effects: Arc<Vec<Box<dyn SideEffect<MatrixQuery, MatrixRow>>>>,
    result_size: usize,
}

impl ReorderDigestPipeline {
    /// Standard composition over a loaded catalog.
    pub fn with_catalog(records: Vec<CatalogRecord>) -> Self {
        Self::with_catalog_and_size(records, DEFAULT_RESULT_SIZE)
    }

    /// Standard composition with an explicit result size.
    pub fn with_catalog_and_size(records: Vec<CatalogRecord>, result_size: usize) -> Self {
        Self {
            query_hydrators: vec![Box::new(FilterNormalizer)],
            hydrators: vec![Box::new(PriceActionHydrator::new(&records))],
            sources: vec![Box::new(CatalogSource::new(records))],
            filters: vec![Box::new(ShortfallFilter)],
            scorers: vec![Box::new(UrgencyScorer), Box::new(LocationDiversityScorer)],
            selector: TopKSelector::new(result_size),
            side_effects: Arc::new(vec![Box::new(ReorderLogSideEffect)
                as Box<dyn SideEffect<MatrixQuery, MatrixRow>>]),
            result_size,
        }
    }
}

impl CandidatePipeline<MatrixQuery, MatrixRow> for ReorderDigestPipeline {
    fn query_hydrators(&self) -> &[Box<dyn QueryHydrator<MatrixQuery>>] {
        &self.query_hydrators
    }

    fn sources(&self) -> &[Box<dyn Source<MatrixQuery, MatrixRow>>] {
        &self.sources
    }

    fn hydrators(&self) -> &[Box<dyn Hydrator<MatrixQuery, MatrixRow>>] {
        &self.hydrators
    }

    fn filters(&self) -> &[Box<dyn Filter<MatrixQuery, MatrixRow>>] {
        &self.filters
    }

    fn scorers(&self) -> &[Box<dyn Scorer<MatrixQuery, MatrixRow>>] {
        &self.scorers
    }

    fn selector(&self) -> &dyn Selector<MatrixQuery, MatrixRow> {
        &self.selector
    }

    fn side_effects(&self) -> Arc<Vec<Box<dyn SideEffect<MatrixQuery, MatrixRow>>>> {
        Arc::clone(&self.side_effects)
    }

    fn result_size(&self) -> usize {
        self.result_size
    }
}
