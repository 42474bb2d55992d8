// src/partition/partitioner.rs
//
// Partitions the Cartesian product of a list of factors into N disjoint lazy
// subsets without materializing the product. Only the smallest factor prefix
// whose own product reaches N is ever made concrete; the suffix product
// stays lazy inside each subset.

use log::debug;
use crate::factor::Factor;
use crate::partition::error::PartitionError;
use crate::partition::options::{Count, PartitionOptions};
use crate::partition::subset::ProductSubset;
use crate::product::CartesianProduct;
use crate::sequence::split_into;

/// Partitions the Cartesian product of `factors` into disjoint lazy subsets.
///
/// Returns exactly as many subsets as the options request (one when no count
/// is given). The subsets are pairwise disjoint and their union enumerates
/// every product tuple exactly once; when the requested count exceeds the
/// product size the surplus subsets are empty. With a single subset the
/// tuples come out in standard product order, last factor varying fastest.
///
/// Validation happens fully up front: on error no subset is constructed.
///
/// # Arguments
/// * `factors` - The ordered collections contributing one coordinate each
/// * `options` - The optional subset count
///
/// # Returns
/// The subsets, or the validation error:
/// * `UnsupportedFactorType` if any factor is a stream
/// * `InvalidCountType` if the count is not an integer
/// * `InvalidCountValue` if the count is an integer below one
///
/// # Examples
/// ```
/// use product_partition::factor::Factor;
/// use product_partition::partition::{partition, PartitionOptions};
///
/// let factors = vec![Factor::from(vec![1, 2]), Factor::from(vec![10, 20])];
/// let subsets = partition(&factors, &PartitionOptions::with_count(2)).unwrap();
/// let first: Vec<Vec<i32>> = subsets.into_iter().next().unwrap().collect();
/// assert_eq!(first, vec![vec![1, 10], vec![1, 20]]);
/// ```
pub fn partition<T: Clone>(
    factors: &[Factor<T>],
    options: &PartitionOptions,
) -> Result<Vec<ProductSubset<T>>, PartitionError> {
    // Factor kinds are checked before the count.
    let mut pools: Vec<&[T]> = Vec::with_capacity(factors.len());
    for (position, factor) in factors.iter().enumerate() {
        match factor.items() {
            Some(items) => pools.push(items),
            None => {
                return Err(PartitionError::UnsupportedFactorType {
                    position,
                    kind: factor.kind(),
                })
            }
        }
    }

    let count = match &options.count {
        None => 1,
        Some(Count::Integer(value)) if *value >= 1 => *value as usize,
        Some(Count::Integer(value)) => {
            return Err(PartitionError::InvalidCountValue { count: *value })
        }
        Some(other) => {
            return Err(PartitionError::InvalidCountType {
                found: other.to_string(),
            })
        }
    };

    if count == 1 {
        debug!(
            "Partition: single subset over {} factors, product stays lazy",
            pools.len()
        );
        let suffix_pools = pools.iter().map(|pool| pool.to_vec()).collect();
        return Ok(vec![ProductSubset::new(vec![Vec::new()], suffix_pools)]);
    }

    // Smallest prefix whose running product reaches the requested fan-out.
    // Falls through to the whole factor list when it never does.
    let mut split_index = pools.len();
    let mut running_size = 1usize;
    for (index, pool) in pools.iter().enumerate() {
        running_size = running_size.saturating_mul(pool.len());
        if running_size >= count {
            split_index = index + 1;
            break;
        }
    }

    let (prefix_pools, suffix_pools) = pools.split_at(split_index);
    let prefix_product: Vec<Vec<T>> = CartesianProduct::new(
        prefix_pools.iter().map(|pool| pool.to_vec()).collect(),
    )
    .collect();

    debug!(
        "Partition: split index {} of {} factors, {} prefix tuples across {} subsets",
        split_index,
        pools.len(),
        prefix_product.len(),
        count
    );

    let subsets = split_into(prefix_product, count)
        .into_iter()
        .map(|slice| {
            let suffix = suffix_pools.iter().map(|pool| pool.to_vec()).collect();
            ProductSubset::new(slice, suffix)
        })
        .collect();

    Ok(subsets)
}
