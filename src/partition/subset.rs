// src/partition/subset.rs
//
// One of the N disjoint subsets of the overall Cartesian product. Holds its
// assigned slice of the materialized prefix product plus a private copy of
// the suffix pools; the suffix product is enumerated from scratch for every
// prefix tuple rather than cached.

use crate::product::CartesianProduct;

/// A lazy, finite sequence of product tuples: one partition of the overall
/// Cartesian product.
///
/// Each subset owns its iteration state (the prefix slice position and a
/// suffix cursor), so separate subsets can be consumed in any order,
/// interleaved, or handed to independent callers without affecting one
/// another. Each `next` emits the concatenation of the current prefix tuple
/// and the current suffix tuple, with the last factor varying fastest.
pub struct ProductSubset<T> {
    prefix: Vec<Vec<T>>,
    suffix: CartesianProduct<T>,
    position: usize,
}

impl<T: Clone> ProductSubset<T> {
    pub(crate) fn new(prefix: Vec<Vec<T>>, suffix_pools: Vec<Vec<T>>) -> Self {
        ProductSubset {
            prefix,
            suffix: CartesianProduct::new(suffix_pools),
            position: 0,
        }
    }
}

impl<T: Clone> Iterator for ProductSubset<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.prefix.len() {
            if let Some(tail) = self.suffix.next() {
                let mut tuple = self.prefix[self.position].clone();
                tuple.extend(tail);
                return Some(tuple);
            }
            // Current prefix tuple exhausted; restart the suffix enumeration
            // for the next one.
            self.position += 1;
            self.suffix.reset();
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.position >= self.prefix.len() {
            return (0, Some(0));
        }

        let full_passes = self.prefix.len() - self.position - 1;
        let remaining = self.suffix.remaining_exact().and_then(|current_pass| {
            full_passes
                .checked_mul(self.suffix.total_size_exact()?)?
                .checked_add(current_pass)
        });

        match remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}
