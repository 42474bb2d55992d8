// src/partition/error.rs

use thiserror::Error;
use crate::factor::FactorKind;

/// Errors reported by the partitioner before any subset is constructed.
///
/// Validation is fully up front: on any error no partial result exists. All
/// three kinds are recoverable by the caller; there is no internal retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// A factor was not one of the four supported finite collection kinds.
    #[error("factor at position {position} is a {kind}; factors must be finite collections (list, array, set, or sorted set)")]
    UnsupportedFactorType {
        position: usize,
        kind: FactorKind,
    },

    /// The subset count was supplied but is not an integer.
    #[error("subset count must be an integer, got {found}")]
    InvalidCountType { found: String },

    /// The subset count is an integer but is less than one.
    #[error("subset count must be a positive integer, got {count}")]
    InvalidCountValue { count: i64 },
}
