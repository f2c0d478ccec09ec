//! Subset generator tests.

use core::num::NonZeroUsize;

use eqrs::{FIVE_OF_SEVEN, SubsetError, Subsets, binomial, generate};

#[test]
fn five_choose_two_in_lexicographic_order() {
    let pairs = generate(5, 2, None).unwrap();
    assert_eq!(
        pairs,
        vec![
            vec![1, 2],
            vec![1, 3],
            vec![1, 4],
            vec![1, 5],
            vec![2, 3],
            vec![2, 4],
            vec![2, 5],
            vec![3, 4],
            vec![3, 5],
            vec![4, 5],
        ]
    );
}

#[test]
fn unbounded_generation_is_exhaustive() {
    for n in 1..=9 {
        for k in 1..=n {
            let subsets = generate(n, k, None).unwrap();
            assert_eq!(subsets.len() as u64, binomial(n, k), "C({n}, {k})");

            for subset in &subsets {
                assert_eq!(subset.len(), k);
                assert!(subset.windows(2).all(|w| w[0] < w[1]));
                assert!(subset.iter().all(|&i| (1..=n).contains(&i)));
            }
            // strictly increasing order implies distinct subsets
            assert!(subsets.windows(2).all(|w| w[0] < w[1]));

            assert_eq!(subsets.first(), Some(&(1..=k).collect::<Vec<_>>()));
            assert_eq!(subsets.last(), Some(&(n - k + 1..=n).collect::<Vec<_>>()));
        }
    }
}

#[test]
fn choosing_zero_yields_nothing() {
    for n in 0..=5 {
        assert!(generate(n, 0, None).unwrap().is_empty());
        assert!(generate(n, 0, NonZeroUsize::new(10)).unwrap().is_empty());
    }
    assert_eq!(Subsets::new(4, 0).unwrap().count(), 0);
}

#[test]
fn limit_caps_the_output() {
    let capped = generate(5, 2, NonZeroUsize::new(3)).unwrap();
    assert_eq!(capped, vec![vec![1, 2], vec![1, 3], vec![1, 4]]);

    let generous = generate(5, 2, NonZeroUsize::new(1000)).unwrap();
    assert_eq!(generous.len(), 10);
}

#[test]
fn full_selection_is_single_subset() {
    assert_eq!(generate(4, 4, None).unwrap(), vec![vec![1, 2, 3, 4]]);
    assert_eq!(generate(1, 1, None).unwrap(), vec![vec![1]]);
}

#[test]
fn oversized_selection_is_rejected() {
    assert_eq!(
        generate(3, 4, None).unwrap_err(),
        SubsetError::TooLarge { n: 3, k: 4 }
    );
    assert!(Subsets::new(0, 1).is_err());
}

#[test]
fn five_of_seven_table() {
    assert_eq!(FIVE_OF_SEVEN.len(), 21);
    assert_eq!(FIVE_OF_SEVEN[0], [1, 2, 3, 4, 5]);
    assert_eq!(FIVE_OF_SEVEN[20], [3, 4, 5, 6, 7]);

    let generated = generate(7, 5, None).unwrap();
    for (row, subset) in FIVE_OF_SEVEN.iter().zip(&generated) {
        assert_eq!(&row[..], &subset[..]);
    }
}

#[test]
fn binomial_values() {
    assert_eq!(binomial(7, 5), 21);
    assert_eq!(binomial(45, 2), 990);
    assert_eq!(binomial(52, 5), 2_598_960);
    assert_eq!(binomial(10, 0), 1);
    assert_eq!(binomial(3, 5), 0);
}

#[test]
fn borrowed_walk_matches_iterator() {
    let expected = generate(6, 3, None).unwrap();
    let mut subsets = Subsets::new(6, 3).unwrap();
    let mut walked = Vec::new();
    while let Some(subset) = subsets.next_subset() {
        walked.push(subset.to_vec());
    }
    assert_eq!(walked, expected);
    assert_eq!(subsets.next_subset(), None);

    let mut empty = Subsets::new(6, 0).unwrap();
    assert_eq!(empty.next_subset(), None);
}

#[test]
fn starting_rank_resumes_the_sequence() {
    for (n, k) in [(5, 2), (6, 3), (7, 5), (8, 1), (4, 4)] {
        let all = generate(n, k, None).unwrap();
        for rank in 0..all.len() {
            let tail: Vec<_> = Subsets::from_rank(n, k, rank as u64).unwrap().collect();
            assert_eq!(tail, all[rank..], "n={n} k={k} rank={rank}");
        }
    }
}

#[test]
fn starting_rank_past_the_end_is_empty() {
    assert_eq!(Subsets::from_rank(5, 2, 10).unwrap().next(), None);
    assert_eq!(Subsets::from_rank(5, 2, u64::MAX).unwrap().next(), None);
    assert_eq!(Subsets::from_rank(5, 0, 0).unwrap().next(), None);
    assert_eq!(
        Subsets::from_rank(2, 3, 0).unwrap_err(),
        SubsetError::TooLarge { n: 2, k: 3 }
    );
}

#[test]
fn chunked_ranks_cover_every_subset_once() {
    let chunk = 64;
    let total = binomial(45, 2);
    let mut joined = Vec::new();
    for start in (0..total).step_by(chunk) {
        joined.extend(Subsets::from_rank(45, 2, start).unwrap().take(chunk));
    }
    assert_eq!(joined, generate(45, 2, None).unwrap());
}
