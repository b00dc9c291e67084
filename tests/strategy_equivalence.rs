//! The linear and binary insertion strategies must build identical tableaux.
//!
//! Every signed permutation up to size 5 is checked exhaustively, larger
//! ones are sampled with a seeded rng and with proptest.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use domino_rs::drs::compute_tableau_checked;
use domino_rs::insertion::{Binary, InsertionStrategy, Linear};
use domino_rs::{SignedPermutation, Tableau};
use domino_rs::Strategy as Algorithm;

// =============================================================================
// Helpers
// =============================================================================

/// All permutations of `1..=n`, in lexicographic order.
fn permutations(n: usize) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    let mut current: Vec<i64> = (1..=n as i64).collect();
    loop {
        out.push(current.clone());
        // Next lexicographic permutation.
        let Some(i) = (1..current.len()).rev().find(|&i| current[i - 1] < current[i]) else {
            break;
        };
        let j = (i..current.len()).rev().find(|&j| current[j] > current[i - 1]).unwrap();
        current.swap(i - 1, j);
        current[i..].reverse();
    }
    return out;
}

/// All signed permutations of size `n`.
fn signed_permutations(n: usize) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    for perm in permutations(n) {
        for signs in 0u32..(1 << n) {
            let signed = perm
                .iter()
                .enumerate()
                .map(|(i, &v)| if signs & (1 << i) != 0 { -v } else { v })
                .collect();
            out.push(signed);
        }
    }
    return out;
}

/// Step both strategies in lockstep, comparing placements and tableaux.
fn assert_lockstep(entries: &[i64]) {
    let mut linear = Tableau::new();
    let mut binary = Tableau::new();
    for (step, &value) in entries.iter().enumerate() {
        assert_eq!(
            Linear::landing(&linear, value),
            Binary::landing(&binary, value),
            "landing differs at step {} of {:?}",
            step + 1,
            entries
        );
        let a = linear.next_robinson_schensted(value);
        let b = binary.next_robinson_schensted_binary(value);
        assert_eq!(a, b, "placement differs at step {} of {:?}", step + 1, entries);
    }
    assert_eq!(linear, binary, "tableaux differ for {:?}", entries);
}

fn random_signed(rng: &mut StdRng, n: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (1..=n as i64).collect();
    values.shuffle(rng);
    for value in values.iter_mut() {
        if rng.gen_bool(0.5) {
            *value = -*value;
        }
    }
    return values;
}

// =============================================================================
// Exhaustive
// =============================================================================

#[test]
fn permutation_helper_counts() {
    assert_eq!(permutations(0).len(), 1);
    assert_eq!(permutations(4).len(), 24);
    assert_eq!(signed_permutations(3).len(), 48);
}

#[test]
fn exhaustive_up_to_five() {
    for n in 0..=5 {
        for entries in signed_permutations(n) {
            assert_lockstep(&entries);
        }
    }
}

// =============================================================================
// Sampled
// =============================================================================

#[test]
fn seeded_random_permutations() {
    let mut rng = StdRng::seed_from_u64(0x0d0d_1e5);
    for _ in 0..200 {
        let n = rng.gen_range(6..=120);
        assert_lockstep(&random_signed(&mut rng, n));
    }
}

#[test]
fn long_monotone_runs() {
    let ascending: Vec<i64> = (1..=500).collect();
    let descending: Vec<i64> = (1..=500).rev().map(|v| -v).collect();
    assert_lockstep(&ascending);
    assert_lockstep(&descending);
}

#[test]
fn checked_driver_accepts_random_input() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.gen_range(0..=60);
        let permutation = SignedPermutation::from_signed(&random_signed(&mut rng, n));
        let checked = compute_tableau_checked(&permutation).unwrap();
        let linear = domino_rs::compute_tableau_with(&permutation, Algorithm::Linear).unwrap();
        assert_eq!(checked, linear);
    }
}

// =============================================================================
// Property based
// =============================================================================

fn arbitrary_signed_permutation(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    return (0..=max_len).prop_flat_map(|n| {
        (
            Just((1..=n as i64).collect::<Vec<i64>>()).prop_shuffle(),
            prop::collection::vec(any::<bool>(), n),
        )
            .prop_map(|(values, signs)| {
                values
                    .into_iter()
                    .zip(signs)
                    .map(|(v, negative)| if negative { -v } else { v })
                    .collect::<Vec<i64>>()
            })
    });
}

/// Distinct absolute values that are not `1..=n`.
fn arbitrary_sparse_signed(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    return prop::collection::hash_set(1i64..1_000_000, 0..=max_len)
        .prop_flat_map(|set| {
            let values: Vec<i64> = set.into_iter().collect();
            let n = values.len();
            (Just(values).prop_shuffle(), prop::collection::vec(any::<bool>(), n))
        })
        .prop_map(|(values, signs)| {
            values
                .into_iter()
                .zip(signs)
                .map(|(v, negative)| if negative { -v } else { v })
                .collect::<Vec<i64>>()
        });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn strategies_agree(entries in arbitrary_signed_permutation(80)) {
        let permutation = SignedPermutation::from_signed(&entries);
        let linear = domino_rs::compute_tableau_with(&permutation, Algorithm::Linear).unwrap();
        let binary = domino_rs::compute_tableau_with(&permutation, Algorithm::Binary).unwrap();
        prop_assert_eq!(linear, binary);
    }

    #[test]
    fn strategies_agree_on_sparse_values(entries in arbitrary_sparse_signed(60)) {
        assert_lockstep(&entries);
    }
}
