//! Uniform sampling without replacement.
//!
//! The domain owns the algorithm; the caller owns the randomness. `pick_index`
//! is called with the population size `n` and must return an index in
//! `[0, n)`. The engine backs it with the OS CSPRNG, tests back it with fixed
//! sequences.

use std::collections::HashSet;

/// Draw `k` distinct items uniformly at random from `items`.
///
/// When `k >= items.len()` every item is returned in its original order and
/// `pick_index` is never called. Otherwise indices are drawn one at a time and
/// redrawn when they repeat an earlier pick (rejection sampling), so each
/// remaining index is equally likely on every draw. Expected draws grow as `k`
/// approaches `n`; callers sample small `k` from larger pools.
///
/// An index outside `[0, n)` is rejected the same way a duplicate is.
pub fn sample_without_replacement<T, F>(items: &[T], k: usize, mut pick_index: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize) -> usize,
{
    let n = items.len();
    if k >= n {
        return items.to_vec();
    }

    let mut chosen = HashSet::with_capacity(k);
    let mut out = Vec::with_capacity(k);
    while out.len() < k {
        let index = pick_index(n);
        let Some(item) = items.get(index) else {
            continue;
        };
        if chosen.insert(index) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed index sequence, cycling when exhausted.
    fn scripted(indices: &[usize]) -> impl FnMut(usize) -> usize + '_ {
        let mut cursor = 0;
        move |_n| {
            let index = indices[cursor % indices.len()];
            cursor += 1;
            index
        }
    }

    #[test]
    fn returns_everything_when_k_covers_the_population() {
        let items = vec!["water", "fire", "earth"];
        let never = |_n: usize| -> usize { panic!("should not draw") };

        assert_eq!(sample_without_replacement(&items, 3, never), items);
        assert_eq!(sample_without_replacement(&items, 10, never), items);
    }

    #[test]
    fn empty_population_yields_empty_sample() {
        let items: Vec<u8> = Vec::new();
        let never = |_n: usize| -> usize { panic!("should not draw") };
        assert!(sample_without_replacement(&items, 2, never).is_empty());
    }

    #[test]
    fn zero_k_yields_empty_sample() {
        let items = vec![1, 2, 3];
        assert!(sample_without_replacement(&items, 0, scripted(&[0])).is_empty());
    }

    #[test]
    fn draws_items_in_pick_order() {
        let items = vec!["water", "fire", "earth", "air"];
        let sample = sample_without_replacement(&items, 2, scripted(&[3, 1]));
        assert_eq!(sample, vec!["air", "fire"]);
    }

    #[test]
    fn rejects_repeated_indices() {
        let items = vec![10, 20, 30, 40, 50];
        let sample = sample_without_replacement(&items, 3, scripted(&[2, 2, 2, 0, 2, 0, 4]));
        assert_eq!(sample, vec![30, 10, 50]);
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let items = vec!['a', 'b', 'c'];
        let sample = sample_without_replacement(&items, 2, scripted(&[7, 1, 99, 0]));
        assert_eq!(sample, vec!['b', 'a']);
    }

    #[test]
    fn passes_population_size_to_picker() {
        let items = vec![1, 2, 3, 4, 5, 6];
        let mut seen = Vec::new();
        let mut next = 0;
        let sample = sample_without_replacement(&items, 2, |n| {
            seen.push(n);
            next += 1;
            next
        });
        assert_eq!(sample, vec![2, 3]);
        assert!(seen.iter().all(|&n| n == 6));
    }

    #[test]
    fn never_mutates_input() {
        let items = vec![String::from("water"), String::from("fire"), String::from("air")];
        let before = items.clone();
        let _ = sample_without_replacement(&items, 1, scripted(&[2]));
        assert_eq!(items, before);
    }

    #[test]
    fn every_sample_is_a_distinct_subset() {
        let items: Vec<u32> = (0..8).collect();
        // A simple LCG walk stands in for randomness; only structure is checked.
        let mut state: usize = 17;
        for k in 0..=items.len() {
            let sample = sample_without_replacement(&items, k, |n| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 8) % n
            });
            assert_eq!(sample.len(), k);
            let unique: HashSet<_> = sample.iter().collect();
            assert_eq!(unique.len(), k);
            assert!(sample.iter().all(|item| items.contains(item)));
        }
    }
}
