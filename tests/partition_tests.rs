// Contract tests for the Cartesian product partitioner
use std::collections::{BTreeSet, HashSet};

use env_logger::Env;
use rand::Rng;

use product_partition::factor::Factor;
use product_partition::partition::{partition, PartitionOptions};
use product_partition::product::CartesianProduct;

fn init_logger() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}

fn full_product(pools: Vec<Vec<i32>>) -> Vec<Vec<i32>> {
    CartesianProduct::new(pools).collect()
}

#[test]
fn test_requested_count_is_returned() {
    init_logger();

    let factors = vec![
        Factor::from(vec![1, 2]),
        Factor::from(vec![10, 20]),
        Factor::from(vec![100, 200]),
    ];

    for requested in 1..=12usize {
        let subsets = partition(&factors, &PartitionOptions::with_count(requested)).unwrap();
        assert_eq!(subsets.len(), requested);
    }
}

#[test]
fn test_monotonic_subset_counts() {
    // The number of returned subsets always matches the request, no matter
    // how far it outruns the achievable balance.
    let factors = vec![Factor::from(vec![1, 2]), Factor::from(vec![3, 4])];

    let counts: Vec<usize> = (1..=30usize)
        .map(|n| {
            partition(&factors, &PartitionOptions::with_count(n))
                .unwrap()
                .len()
        })
        .collect();
    let expected: Vec<usize> = (1..=30).collect();
    assert_eq!(counts, expected);
}

#[test]
fn test_union_is_the_full_product_and_subsets_are_disjoint() {
    init_logger();

    let factors = vec![
        Factor::from(vec![1, 2, 3]),
        Factor::from(vec![40, 50]),
        Factor::from(vec![600, 700, 800, 900]),
    ];

    let subsets = partition(&factors, &PartitionOptions::with_count(5)).unwrap();
    let collected: Vec<Vec<Vec<i32>>> = subsets.into_iter().map(Iterator::collect).collect();

    let total: usize = collected.iter().map(Vec::len).sum();
    assert_eq!(total, 3 * 2 * 4);

    let as_sets: Vec<BTreeSet<Vec<i32>>> = collected
        .iter()
        .map(|tuples| tuples.iter().cloned().collect())
        .collect();
    for i in 0..as_sets.len() {
        for j in 0..as_sets.len() {
            if i != j {
                assert!(as_sets[i].is_disjoint(&as_sets[j]));
            }
        }
    }

    let union: BTreeSet<Vec<i32>> = as_sets.into_iter().flatten().collect();
    let expected: BTreeSet<Vec<i32>> = full_product(vec![
        vec![1, 2, 3],
        vec![40, 50],
        vec![600, 700, 800, 900],
    ])
    .into_iter()
    .collect();
    assert_eq!(union, expected);
}

#[test]
fn test_single_subset_preserves_product_order() {
    let factors = vec![
        Factor::from(vec![1, 2]),
        Factor::from(vec![3, 4]),
        Factor::from(vec![5, 6]),
    ];

    let mut subsets = partition(&factors, &PartitionOptions::new()).unwrap();
    assert_eq!(subsets.len(), 1);
    let tuples: Vec<Vec<i32>> = subsets.remove(0).collect();

    let expected = full_product(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    assert_eq!(tuples, expected);

    // count = 1 behaves identically to an absent count
    let mut subsets = partition(&factors, &PartitionOptions::with_count(1)).unwrap();
    let tuples_again: Vec<Vec<i32>> = subsets.remove(0).collect();
    assert_eq!(tuples_again, expected);
}

#[test]
fn test_two_subsets_exact_contents() {
    let factors = vec![Factor::from(vec![1, 2]), Factor::from(vec![10, 20])];

    let subsets = partition(&factors, &PartitionOptions::with_count(2)).unwrap();
    let collected: Vec<Vec<Vec<i32>>> = subsets.into_iter().map(Iterator::collect).collect();

    assert_eq!(
        collected,
        vec![
            vec![vec![1, 10], vec![1, 20]],
            vec![vec![2, 10], vec![2, 20]],
        ]
    );
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Coordinate {
    Number(i64),
    Letter(char),
    Flag(bool),
}

#[test]
fn test_heterogeneous_factors_through_a_coordinate_enum() {
    init_logger();

    let letters: HashSet<Coordinate> =
        HashSet::from([Coordinate::Letter('a'), Coordinate::Letter('b')]);
    let factors = vec![
        Factor::from(vec![Coordinate::Number(1), Coordinate::Number(2)]),
        Factor::from(letters),
        Factor::from([Coordinate::Flag(false), Coordinate::Flag(true)]),
    ];

    let subsets = partition(&factors, &PartitionOptions::with_count(3)).unwrap();
    assert_eq!(subsets.len(), 3);

    let union: BTreeSet<Vec<Coordinate>> = subsets.into_iter().flatten().collect();

    let mut expected = BTreeSet::new();
    for number in [1, 2] {
        for letter in ['a', 'b'] {
            for flag in [false, true] {
                expected.insert(vec![
                    Coordinate::Number(number),
                    Coordinate::Letter(letter),
                    Coordinate::Flag(flag),
                ]);
            }
        }
    }
    assert_eq!(union, expected);
}

#[test]
fn test_subsets_iterate_independently_and_interleaved() {
    let factors = vec![Factor::from(vec![1, 2]), Factor::from(vec![10, 20, 30])];

    let mut subsets = partition(&factors, &PartitionOptions::with_count(2)).unwrap();
    let mut second = subsets.pop().unwrap();
    let mut first = subsets.pop().unwrap();

    // Alternate pulls across the two subsets; neither disturbs the other.
    let mut combined = Vec::new();
    loop {
        let a = first.next();
        let b = second.next();
        if a.is_none() && b.is_none() {
            break;
        }
        combined.extend(a);
        combined.extend(b);
    }

    combined.sort();
    let mut expected = full_product(vec![vec![1, 2], vec![10, 20, 30]]);
    expected.sort();
    assert_eq!(combined, expected);
}

#[test]
fn test_duplicate_elements_are_distinct_positions() {
    let factors = vec![Factor::from(vec![1, 1]), Factor::from(vec![2])];

    let mut subsets = partition(&factors, &PartitionOptions::new()).unwrap();
    let tuples: Vec<Vec<i32>> = subsets.remove(0).collect();
    assert_eq!(tuples, vec![vec![1, 2], vec![1, 2]]);
}

#[test]
fn test_options_embedded_in_json() {
    let factors = vec![Factor::from(vec![1, 2]), Factor::from(vec![3, 4])];

    let options: PartitionOptions = serde_json::from_str(r#"{"count": 3}"#).unwrap();
    let subsets = partition(&factors, &options).unwrap();
    assert_eq!(subsets.len(), 3);

    let options: PartitionOptions = serde_json::from_str(r#"{"count": "x"}"#).unwrap();
    assert!(partition(&factors, &options).is_err());
}

#[test]
fn test_random_shapes_keep_the_partition_invariants() {
    init_logger();
    let mut rng = rand::rng();

    for _ in 0..50 {
        let factor_count = rng.random_range(0..=4);
        let mut sizes = Vec::with_capacity(factor_count);
        let mut factors = Vec::with_capacity(factor_count);
        for factor_index in 0..factor_count {
            let size = rng.random_range(0..=4);
            sizes.push(size);
            // Distinct elements per factor so value sets track positions.
            let items: Vec<i32> = (0..size)
                .map(|offset| (factor_index as i32) * 100 + offset as i32)
                .collect();
            factors.push(Factor::from(items));
        }
        let requested = rng.random_range(1..=10usize);

        let subsets = partition(&factors, &PartitionOptions::with_count(requested)).unwrap();
        assert_eq!(subsets.len(), requested);

        let collected: Vec<Vec<Vec<i32>>> =
            subsets.into_iter().map(Iterator::collect).collect();
        let total: usize = collected.iter().map(Vec::len).sum();
        assert_eq!(total, sizes.iter().product::<usize>());

        let as_sets: Vec<BTreeSet<Vec<i32>>> = collected
            .iter()
            .map(|tuples| tuples.iter().cloned().collect())
            .collect();
        for (i, left) in as_sets.iter().enumerate() {
            // No duplicate tuples inside a subset either.
            assert_eq!(left.len(), collected[i].len());
            for right in as_sets.iter().skip(i + 1) {
                assert!(left.is_disjoint(right));
            }
        }

        let union: BTreeSet<Vec<i32>> = as_sets.into_iter().flatten().collect();
        let expected: BTreeSet<Vec<i32>> = CartesianProduct::new(
            factors
                .iter()
                .map(|factor| factor.items().unwrap().to_vec())
                .collect(),
        )
        .collect();
        assert_eq!(union, expected);
    }
}
