//! This crate provides utilities for sequences and records of dynamically shaped values,
//! as they appear after decoding JSON documents.
//!
//! It contains
//! - a lazy generator of all permutations of a sequence ([permutation]),
//! - shallow structural equality of sequences and flat records ([equality]),
//! - detection and removal of duplicates ([duplicates]),
//! - multi-key sorting and field projection of records ([sorting], [projection]),
//! - pruning of empty entries and recursive mapping of nested values ([prune], [traversal]).
//!
//! Operations that are only defined for inputs of a certain shape return a [Support],
//! misuse of an operation is reported as an [Error].

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod deferred;
pub mod duplicates;
pub mod equality;
pub mod error;
pub mod permutation;
pub mod projection;
pub mod prune;
pub mod sorting;
pub mod support;
pub mod traversal;
pub mod value;

pub use duplicates::{
    filter_duplicated_records, find_duplicated_records, find_duplicated_records_by,
    find_duplicates,
};
pub use equality::{is_same_array, is_same_object, is_same_record, is_same_value_array};
pub use error::Error;
pub use permutation::{
    permutation_count, permute, permute_in_place, swap_elements, HeapPermutations,
};
pub use projection::{project_records, Projection};
pub use prune::{prune_empty, prune_empty_with};
pub use sorting::{sort_by_column, sort_records, SortDirection, SortKey};
pub use support::Support;
pub use traversal::map_elements;
pub use value::{Record, Value, ValueDomain};
