//! # Evaluation Errors
//!
//! Every operation in this crate returns a [`MetaResult`]. There are exactly two kinds of
//! failure:
//!
//! - **Soft** failures (`NotApplicable`): a metafunction class is simply not invocable
//!   with the given arguments. This is a queryable fact: [`crate::func::is_invocable`]
//!   turns it into `false`, and algorithms such as `find_if` rely on it.
//! - **Hard** failures (`RecursionLimit`, `Malformed`): something is wrong with the
//!   construction itself. These are never absorbed by an invocability query.
//!
//! ## Example Error Messages
//!
//! ```text
//! not applicable: std::pair expects 2 arguments, found 1
//! recursion limit of 256 exceeded while evaluating fact
//! malformed construct: variadic placeholder _args must be the last lambda parameter
//! ```

use thiserror::Error;

/// Error raised while evaluating terms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    /// The construct cannot be applied to these arguments.
    #[error("not applicable: {reason}")]
    NotApplicable { reason: String },

    /// Resolution nested deeper than [`crate::config::Config::max_depth`].
    #[error("recursion limit of {limit} exceeded while evaluating {while_evaluating}")]
    RecursionLimit {
        limit: usize,
        while_evaluating: String,
    },

    /// An expansion would produce more elements than [`crate::config::Config::max_length`].
    #[error("{what} would produce {length} elements, more than the limit of {limit}")]
    LimitExceeded {
        what: String,
        length: u128,
        limit: usize,
    },

    /// A construct that can never be well-formed, regardless of arguments.
    #[error("malformed construct: {reason}")]
    Malformed { reason: String },
}

impl MetaError {
    /// Create a soft invocation failure.
    pub fn not_applicable(reason: impl Into<String>) -> Self {
        MetaError::NotApplicable {
            reason: reason.into(),
        }
    }

    /// Create a hard error for a construct that is wrong in itself.
    pub fn malformed(reason: impl Into<String>) -> Self {
        MetaError::Malformed {
            reason: reason.into(),
        }
    }

    /// Whether this failure only means "not invocable here".
    pub fn is_soft(&self) -> bool {
        matches!(self, MetaError::NotApplicable { .. })
    }
}

pub type MetaResult<T> = Result<T, MetaError>;
