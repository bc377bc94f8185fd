//! Staged batch-annotation pipeline over a warehouse catalog.
//!
//! The generic stage traits (`Source`, `Hydrator`, `Filter`, `Scorer`,
//! `Selector`, `SideEffect`) compose into a `CandidatePipeline`; the
//! concrete `ReorderDigestPipeline` wires them up to turn a loaded
//! catalog into a prioritized shortage list. `matrix` holds the direct
//! synchronous batch operations the server uses for the full matrix,
//! metrics, and reorder report.

pub mod candidate_pipeline;
pub mod catalog_loader;
pub mod components;
pub mod export;
pub mod filter;
pub mod hydrator;
pub mod matrix;
pub mod pipelines;
pub mod query_hydrator;
pub mod scorer;
pub mod selector;
pub mod side_effect;
pub mod source;
pub mod types;
pub mod util;

pub use candidate_pipeline::{CandidatePipeline, HasRequestId, PipelineResult};
pub use catalog_loader::{load_catalog, load_catalog_file, CatalogRecord};
pub use export::write_matrix_csv;
pub use filter::{Filter, FilterOutcome};
pub use hydrator::Hydrator;
pub use matrix::{annotate, build_row, metrics, price_action_for, reorder_report};
pub use pipelines::ReorderDigestPipeline;
pub use query_hydrator::QueryHydrator;
pub use scorer::Scorer;
pub use selector::Selector;
pub use side_effect::{SideEffect, SideEffectInput};
pub use source::Source;
pub use types::{
    CatalogFilters, MatrixMetrics, MatrixQuery, MatrixRow, ReorderItem, ReorderReport,
};
