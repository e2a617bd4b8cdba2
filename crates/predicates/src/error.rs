//! Errors raised by the predicate layer.
//!
//! Every variant is a contract violation by the caller (the encoder or the
//! diagnostic layer). None of them leaves the registry partially mutated.

use sol_chc_smtlib::{ApplicationError, Sort};
use thiserror::Error;

use crate::registry::PredicateId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    #[error("predicate `{name}` already exists in this run")]
    DuplicateName { name: String },

    #[error("no predicate named `{name}`")]
    NotFound { name: String },

    #[error("predicate identity {id} was issued by another registry run")]
    Stale { id: PredicateId },

    #[error("predicate `{name}` has no version {index} (latest is {latest})")]
    InvalidVersion {
        name: String,
        index: usize,
        latest: usize,
    },

    #[error("arity mismatch for predicate `{name}`: expected {expected}, got {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "sort mismatch for predicate `{name}` at argument {position}: \
         expected {expected}, got {actual}"
    )]
    SortMismatch {
        name: String,
        position: usize,
        expected: Sort,
        actual: Sort,
    },

    #[error("predicate `{name}` has no state-variable scope")]
    NoStateScope { name: String },

    #[error(
        "predicate `{name}`: {count} state variables at offset {offset} do not fit in arity {arity}"
    )]
    InvalidStateLayout {
        name: String,
        offset: usize,
        count: usize,
        arity: usize,
    },
}

impl PredicateError {
    /// Attach the predicate name to a rejected application.
    pub(crate) fn from_application(name: &str, err: ApplicationError) -> Self {
        match err {
            ApplicationError::Arity { expected, actual } => PredicateError::ArityMismatch {
                name: name.to_string(),
                expected,
                actual,
            },
            ApplicationError::Sort {
                position,
                expected,
                actual,
            } => PredicateError::SortMismatch {
                name: name.to_string(),
                position,
                expected,
                actual,
            },
        }
    }
}

/// Result type for predicate operations.
pub type PredicateResult<T> = Result<T, PredicateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_duplicate() {
        let err = PredicateError::DuplicateName {
            name: "summary_3".into(),
        };
        assert_eq!(err.to_string(), "predicate `summary_3` already exists in this run");
    }

    #[test]
    fn display_invalid_version() {
        let err = PredicateError::InvalidVersion {
            name: "block_7".into(),
            index: 4,
            latest: 2,
        };
        assert_eq!(
            err.to_string(),
            "predicate `block_7` has no version 4 (latest is 2)"
        );
    }

    #[test]
    fn display_sort_mismatch_uses_smtlib_names() {
        let err = PredicateError::SortMismatch {
            name: "p".into(),
            position: 1,
            expected: Sort::Int,
            actual: Sort::BitVec(8),
        };
        assert_eq!(
            err.to_string(),
            "sort mismatch for predicate `p` at argument 1: expected Int, got (_ BitVec 8)"
        );
    }

    #[test]
    fn application_errors_gain_the_name() {
        let err = PredicateError::from_application(
            "p",
            ApplicationError::Arity {
                expected: 2,
                actual: 3,
            },
        );
        assert_eq!(
            err,
            PredicateError::ArityMismatch {
                name: "p".into(),
                expected: 2,
                actual: 3
            }
        );
    }
}
