//! Concrete pipeline components for the reorder digest pipeline.

pub mod catalog_source;
pub mod filter_normalizer;
pub mod location_diversity_scorer;
pub mod price_action_hydrator;
pub mod reorder_log_side_effect;
pub mod shortfall_filter;
pub mod top_k_selector;
pub mod urgency_scorer;

pub use catalog_source::CatalogSource;
pub use filter_normalizer::FilterNormalizer;
pub use location_diversity_scorer::LocationDiversityScorer;
pub use price_action_hydrator::PriceActionHydrator;
pub use reorder_log_side_effect::ReorderLogSideEffect;
pub use shortfall_filter::ShortfallFilter;
pub use top_k_selector::TopKSelector;
pub use urgency_scorer::UrgencyScorer;
