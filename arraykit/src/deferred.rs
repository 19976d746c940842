//! Asynchronous variants of the operations that collect or modify their input.
//!
//! These functions complete on their first poll,
//! they only exist so that the operations can be awaited inside of async code.

use crate::{
    error::Error,
    projection::Projection,
    sorting::SortKey,
    value::{Record, Value},
};

/// Asynchronous variant of [crate::permutation::permute].
pub async fn permute<T: Clone>(sequence: &[T]) -> Vec<Vec<T>> {
    crate::permutation::permute(sequence)
}

/// Asynchronous variant of [crate::sorting::sort_records].
pub async fn sort_records(records: &mut [Record], keys: &[SortKey]) {
    crate::sorting::sort_records(records, keys)
}

/// Asynchronous variant of [crate::projection::project_records].
pub async fn project_records(records: &mut [Record], projection: &Projection) {
    crate::projection::project_records(records, projection)
}

/// Asynchronous variant of [crate::prune::prune_empty].
pub async fn prune_empty(value: &mut Value, nested: bool) -> Result<(), Error> {
    crate::prune::prune_empty(value, nested)
}

/// Asynchronous variant of [crate::prune::prune_empty_with].
pub async fn prune_empty_with<F>(value: &mut Value, nested: bool, transform: F) -> Result<(), Error>
where
    F: FnMut(Value) -> Value,
{
    crate::prune::prune_empty_with(value, nested, transform)
}

/// Asynchronous variant of [crate::traversal::map_elements].
pub async fn map_elements<F>(value: &mut Value, f: F)
where
    F: FnMut(Value) -> Value,
{
    crate::traversal::map_elements(value, f)
}
