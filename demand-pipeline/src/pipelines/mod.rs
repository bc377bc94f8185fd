pub mod reorder_digest;

pub use reorder_digest::ReorderDigestPipeline;
