// src/factor/factor.rs
//
// One factor contributes one coordinate to the Cartesian product. The kind
// of the source collection is kept at runtime so the partitioner can reject
// open-ended sources up front instead of looping forever on them.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;
use serde::{Deserialize, Serialize};

/// The runtime kind of a factor's source collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorKind {
    /// Growable ordered collection
    List,
    /// Fixed-length ordered collection
    Array,
    /// Unordered collection (hash set snapshot)
    Set,
    /// Ordered set (ascending)
    SortedSet,
    /// Opaque element source with no known end
    Stream,
}

impl FactorKind {
    /// Returns a human-readable name for the kind
    pub fn name(&self) -> &str {
        match self {
            Self::List => "list",
            Self::Array => "array",
            Self::Set => "set",
            Self::SortedSet => "sorted set",
            Self::Stream => "stream",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finite collection contributing one coordinate to the Cartesian product.
///
/// The four finite variants are accepted by the partitioner; `Stream` is
/// representable so that unbounded sources can be rejected with a proper
/// error instead of being enumerated. Duplicate elements within a factor are
/// preserved as distinct positions.
///
/// Element order is part of the contract only for the ordered kinds. A `Set`
/// factor holds a snapshot of its source `HashSet`'s own iteration order,
/// taken at conversion time; downstream consumers must not assume any
/// particular order of those coordinates, only that the snapshot stays fixed
/// for the lifetime of the factor.
pub enum Factor<T> {
    /// Ordered, growable; converted from `Vec<T>`.
    List(Vec<T>),
    /// Ordered, fixed length; converted from arrays, slices, and boxed slices.
    Array(Box<[T]>),
    /// Snapshot of a `HashSet<T>`, in the set's own iteration order.
    Set(Vec<T>),
    /// Snapshot of a `BTreeSet<T>`, in ascending order.
    SortedSet(Vec<T>),
    /// An opaque iterator source. Never enumerated; the partitioner rejects it.
    Stream(Box<dyn Iterator<Item = T>>),
}

impl<T> Factor<T> {
    /// Wraps an arbitrary iterator source as a stream factor.
    ///
    /// Stream factors exist to be rejected: the partitioner cannot prove the
    /// source finite, so it fails with an unsupported-factor error before any
    /// enumeration happens.
    pub fn stream<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Factor::Stream(Box::new(source.into_iter()))
    }

    /// Returns the runtime kind of this factor
    pub fn kind(&self) -> FactorKind {
        match self {
            Self::List(_) => FactorKind::List,
            Self::Array(_) => FactorKind::Array,
            Self::Set(_) => FactorKind::Set,
            Self::SortedSet(_) => FactorKind::SortedSet,
            Self::Stream(_) => FactorKind::Stream,
        }
    }

    /// Returns the elements of a finite factor, or `None` for a stream.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::List(items) => Some(items),
            Self::Array(items) => Some(items),
            Self::Set(items) => Some(items),
            Self::SortedSet(items) => Some(items),
            Self::Stream(_) => None,
        }
    }

    /// Number of elements in the factor. Streams report zero; they are
    /// rejected before any length is ever used.
    pub fn len(&self) -> usize {
        self.items().map_or(0, <[T]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: fmt::Debug> fmt::Debug for Factor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Self::Set(items) => f.debug_tuple("Set").field(items).finish(),
            Self::SortedSet(items) => f.debug_tuple("SortedSet").field(items).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl<T> From<Vec<T>> for Factor<T> {
    fn from(value: Vec<T>) -> Self {
        Factor::List(value)
    }
}

impl<T> From<Box<[T]>> for Factor<T> {
    fn from(value: Box<[T]>) -> Self {
        Factor::Array(value)
    }
}

impl<T, const N: usize> From<[T; N]> for Factor<T> {
    fn from(value: [T; N]) -> Self {
        Factor::Array(Vec::from(value).into_boxed_slice())
    }
}

impl<T: Clone> From<&[T]> for Factor<T> {
    fn from(value: &[T]) -> Self {
        Factor::Array(value.to_vec().into_boxed_slice())
    }
}

impl<T: Hash + Eq> From<HashSet<T>> for Factor<T> {
    fn from(value: HashSet<T>) -> Self {
        Factor::Set(value.into_iter().collect())
    }
}

impl<T> From<BTreeSet<T>> for Factor<T> {
    fn from(value: BTreeSet<T>) -> Self {
        Factor::SortedSet(value.into_iter().collect())
    }
}
