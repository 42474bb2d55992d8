// src/sequence/split.rs
//
// Equal split of a concrete sequence into N near-equal contiguous parts.
// Kept independent of the partitioner so it can be tested and reused on
// its own.

/// Divides `items` into exactly `parts` contiguous sub-sequences of
/// near-equal length.
///
/// Concatenating the returned sub-sequences in order reproduces `items`
/// exactly. Lengths differ by at most one: the leading `items.len() % parts`
/// sub-sequences hold one extra element. When `items.len() < parts` the
/// trailing sub-sequences are empty. Deterministic for a given input.
///
/// # Arguments
/// * `items` - The sequence to divide
/// * `parts` - The number of sub-sequences to produce (must be > 0)
///
/// # Panics
/// Panics if `parts` is zero.
///
/// # Examples
/// ```
/// use product_partition::sequence::split_into;
///
/// let pieces = split_into(vec![1, 2, 3, 4, 5], 2);
/// assert_eq!(pieces, vec![vec![1, 2, 3], vec![4, 5]]);
/// ```
pub fn split_into<T>(items: Vec<T>, parts: usize) -> Vec<Vec<T>> {
    assert!(parts > 0, "cannot split a sequence into zero parts");

    let base = items.len() / parts;
    let mut remainder = items.len() % parts;
    let mut pieces = Vec::with_capacity(parts);
    let mut rest = items.into_iter();

    for _ in 0..parts {
        let length = if remainder > 0 {
            remainder -= 1;
            base + 1
        } else {
            base
        };
        pieces.push(rest.by_ref().take(length).collect());
    }

    pieces
}
