//! This module defines [Support], the result of operations
//! that only accept inputs of a certain shape.

/// Outcome of an operation that is only defined for inputs of a certain shape.
///
/// Keeps the rejection of an input apart from a computed result,
/// e.g. [`Support::Unsupported`] is distinct from `Supported(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Support<T> {
    /// The input was accepted and produced this result
    Supported(T),
    /// The input contains a value of a shape the operation does not handle
    Unsupported,
}

impl<T> Support<T> {
    /// Return whether the input was accepted.
    pub fn is_supported(&self) -> bool {
        matches!(self, Support::Supported(_))
    }

    /// Return whether the input was rejected.
    pub fn is_unsupported(&self) -> bool {
        !self.is_supported()
    }

    /// Convert into an [Option], discarding the reason for a missing result.
    pub fn supported(self) -> Option<T> {
        match self {
            Support::Supported(value) => Some(value),
            Support::Unsupported => None,
        }
    }

    /// Borrow the result.
    pub fn as_ref(&self) -> Support<&T> {
        match self {
            Support::Supported(value) => Support::Supported(value),
            Support::Unsupported => Support::Unsupported,
        }
    }

    /// Apply a function to the result, keeping [`Support::Unsupported`] as is.
    pub fn map<U, F: FnOnce(T) -> U>(self, function: F) -> Support<U> {
        match self {
            Support::Supported(value) => Support::Supported(function(value)),
            Support::Unsupported => Support::Unsupported,
        }
    }

    /// Continue with another shape-restricted computation.
    pub fn and_then<U, F: FnOnce(T) -> Support<U>>(self, function: F) -> Support<U> {
        match self {
            Support::Supported(value) => function(value),
            Support::Unsupported => Support::Unsupported,
        }
    }

    /// Return the result or the given default for rejected inputs.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Support::Supported(value) => value,
            Support::Unsupported => default,
        }
    }
}

impl Support<bool> {
    /// Return `true` only for `Supported(true)`.
    pub fn is_true(&self) -> bool {
        matches!(self, Support::Supported(true))
    }
}

impl<T> From<Option<T>> for Support<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Support::Supported(value),
            None => Support::Unsupported,
        }
    }
}
