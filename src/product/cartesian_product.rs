// src/product/cartesian_product.rs
//
// Lazy enumeration of the Cartesian product of a list of element pools.
// Index advancement is odometer style: the rightmost index moves first and
// cascades left on overflow, so the last pool varies fastest.

/// Lazy iterator over the Cartesian product of a list of element pools.
///
/// Tuples are produced in standard product order: one element from each pool
/// in pool order, with the last pool varying fastest. An empty pool list
/// produces exactly one empty tuple; any empty pool makes the whole product
/// empty.
///
/// # Examples
/// ```
/// use product_partition::product::CartesianProduct;
///
/// let tuples: Vec<Vec<i32>> = CartesianProduct::new(vec![vec![1, 2], vec![10, 20]]).collect();
/// assert_eq!(tuples, vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]]);
/// ```
pub struct CartesianProduct<T> {
    pools: Vec<Vec<T>>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Clone> CartesianProduct<T> {
    pub fn new(pools: Vec<Vec<T>>) -> Self {
        let done = pools.iter().any(Vec::is_empty);
        let indices = vec![0; pools.len()];
        CartesianProduct {
            pools,
            indices,
            started: false,
            done,
        }
    }

    /// Total number of tuples in the product, saturating at `usize::MAX`.
    ///
    /// An empty pool list counts as one tuple (the empty tuple).
    pub fn total_size(&self) -> usize {
        self.pools
            .iter()
            .fold(1usize, |acc, pool| acc.saturating_mul(pool.len()))
    }

    /// Rewinds the iterator to the start of the product.
    pub fn reset(&mut self) {
        self.indices.fill(0);
        self.started = false;
        self.done = self.pools.iter().any(Vec::is_empty);
    }

    fn current(&self) -> Vec<T> {
        self.indices
            .iter()
            .zip(&self.pools)
            .map(|(&index, pool)| pool[index].clone())
            .collect()
    }

    // Advances the odometer; returns false once every index has wrapped.
    fn advance(&mut self) -> bool {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.pools[position].len() {
                return true;
            }
            self.indices[position] = 0;
        }
        false
    }

    // Total tuple count without saturation, or None on overflow.
    pub(crate) fn total_size_exact(&self) -> Option<usize> {
        self.pools
            .iter()
            .try_fold(1usize, |acc, pool| acc.checked_mul(pool.len()))
    }

    // Exact number of tuples not yet produced, or None on overflow.
    pub(crate) fn remaining_exact(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }

        let total = self.total_size_exact()?;
        if !self.started {
            return Some(total);
        }

        // Mixed-radix rank of the tuple most recently produced.
        let mut rank = 0usize;
        for (&index, pool) in self.indices.iter().zip(&self.pools) {
            rank = rank.checked_mul(pool.len())?.checked_add(index)?;
        }
        Some(total - rank - 1)
    }
}

impl<T: Clone> Iterator for CartesianProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        if self.advance() {
            Some(self.current())
        } else {
            self.done = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining_exact() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}
