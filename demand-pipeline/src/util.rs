/// Extract a short type name from a full module path.
///
/// Given `"demand_pipeline::components::TopKSelector"`, returns
/// `"TopKSelector"`. Used for stage names in logs.
pub fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
