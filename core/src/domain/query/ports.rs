use super::value_objects::Predicate;

/// Chainable handle over a not-yet-executed database query.
///
/// Methods consume and return the handle (functional update); the caller
/// keeps the latest value and runs it when the chain is done. `constrain`
/// calls combine conjunctively; a single predicate may itself encode a
/// disjunction.
pub trait QueryHandle: Sized {
    fn constrain(self, predicate: Predicate) -> Self;

    /// Restrict the result to a space-separated field list. An empty list
    /// leaves the engine default (all fields) in place.
    fn project(self, field_list: &str) -> Self;

    /// Apply an ordering from the engine's sort-spec convention:
    /// comma or space separated field names, leading `-` for descending.
    fn order(self, sort_spec: &str) -> Self;

    /// Skip the first `skip` matching records, return at most `limit`.
    fn window(self, skip: u64, limit: u64) -> Self;
}
