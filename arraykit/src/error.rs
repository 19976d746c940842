//! Error-handling module for the crate

use thiserror::Error;

use crate::value::ValueDomain;

/// Error-Collection for all the possible Errors occurring in this crate
///
/// These errors signal a programming error at the call site.
/// Values of an unexpected shape are not errors,
/// they are reported as [`Support::Unsupported`][crate::support::Support::Unsupported].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field was marked for inclusion in a projection that excludes fields
    #[error("Cannot do inclusion on field {field} in exclusion projection")]
    InclusionInExclusion {
        /// Field that was marked for inclusion
        field: String,
    },
    /// A field was marked for exclusion in a projection that includes fields
    #[error("Cannot do exclusion on field {field} in inclusion projection")]
    ExclusionInInclusion {
        /// Field that was marked for exclusion
        field: String,
    },
    /// Operation expects a record or a sequence at the top level
    #[error("unsupported type {0:?}: only records and sequences can be processed")]
    UnsupportedContainer(ValueDomain),
    /// Index does not point into the slice
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Length of the sequence
        len: usize,
    },
}
