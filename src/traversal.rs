//! # Traversal over the pairs of a [`BiMap`]
//!
//! All traversals visit each pair **exactly once** in an unspecified order. The order may
//! differ between two maps holding the same pairs, and between two runs of the program, so
//! callers must treat the output as a set.
//!
//! | Operation                      | Visits            | Result                     |
//! |--------------------------------|-------------------|----------------------------|
//! | [`BiMap::iter`]                | `(&L, &R)`        | iterator                   |
//! | [`BiMap::left_values`]         | `&L`              | iterator                   |
//! | [`BiMap::right_values`]        | `&R`              | iterator                   |
//! | [`BiMap::fold`]                | `(acc, &L, &R)`   | final accumulator          |
//! | [`BiMap::for_each`]            | `(&L, &R)`        | nothing (side effects)     |
//! | [`BiMap::filter`]              | `(&L, &R)`        | a new [`BiMap`]            |
use std::collections::hash_map;
use std::hash::{BuildHasher, Hash};

use crate::bimap::BiMap;

impl<L, R, S> BiMap<L, R, S> {
    pub fn iter(&self) -> hash_map::Iter<'_, L, R> {
        self.forward.iter()
    }

    /// Every left value, i.e. the keys of the forward index.
    pub fn left_values(&self) -> hash_map::Keys<'_, L, R> {
        self.forward.keys()
    }

    /// Every right value, i.e. the keys of the reverse index.
    pub fn right_values(&self) -> hash_map::Keys<'_, R, L> {
        self.reverse.keys()
    }

    /// Accumulate over every pair.
    ///
    /// Arguments
    /// ---------
    /// * `init`: the initial accumulator.
    /// * `combine`: called once per pair with the running accumulator.
    ///
    /// Return
    /// ------
    /// * The accumulator after the last pair. With no pairs, `init` is returned as is.
    ///
    /// ```rust
    /// use bimap::BiMap;
    ///
    /// let map = BiMap::from_list([(1, 2), (3, 4), (5, 6)]);
    /// assert_eq!(map.fold(0, |sum, a, b| sum + a * b), 44);
    /// ```
    pub fn fold<A, F>(&self, init: A, mut combine: F) -> A
    where
        F: FnMut(A, &L, &R) -> A,
    {
        self.forward
            .iter()
            .fold(init, |acc, (left, right)| combine(acc, left, right))
    }

    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&L, &R),
    {
        self.forward
            .iter()
            .for_each(|(left, right)| action(left, right));
    }
}

impl<L, R, S> BiMap<L, R, S>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// A new map holding exactly the pairs for which `predicate` returns `true`.
    ///
    /// The retained pairs are already unique on both sides, so rebuilding them through
    /// [`BiMap::insert`] never displaces anything. `self` is left untouched.
    ///
    /// ```rust
    /// use bimap::BiMap;
    ///
    /// let map = BiMap::from_list([(1, 5), (3, 4), (8, 6), (9, 2)]);
    /// let odd_even = map.filter(|a, b| a % 2 == 1 && b % 2 == 0);
    /// assert_eq!(odd_even, BiMap::from_list([(3, 4), (9, 2)]));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&L, &R) -> bool,
    {
        let empty = Self::with_hasher(self.forward.hasher().clone());
        self.fold(empty, |kept, left, right| {
            if predicate(left, right) {
                kept.insert(left.clone(), right.clone())
            } else {
                kept
            }
        })
    }
}

#[cfg(test)]
mod traversal_test {
    use super::*;

    fn sample() -> BiMap<i32, i32> {
        BiMap::from_list([(1, 5), (3, 4), (8, 6), (9, 2)])
    }

    #[test]
    fn test_fold_sum_of_products() {
        let map = BiMap::from_list([(1, 2), (3, 4), (5, 6)]);
        assert_eq!(map.fold(0, |sum, a, b| sum + a * b), 44);
    }

    #[test]
    fn test_fold_empty_returns_init() {
        let map: BiMap<i32, i32> = BiMap::new();
        assert_eq!(map.fold(7, |sum, a, b| sum + a + b), 7);
    }

    #[test]
    fn test_fold_visits_each_pair_once() {
        let map = sample();
        let mut visited = map.fold(Vec::new(), |mut acc, a, b| {
            acc.push((*a, *b));
            acc
        });
        visited.sort();
        assert_eq!(visited, vec![(1, 5), (3, 4), (8, 6), (9, 2)]);
    }

    #[test]
    fn test_for_each_visits_each_pair_once() {
        let map = sample();
        let mut count = 0;
        let mut left_sum = 0;
        let mut right_sum = 0;
        map.for_each(|a, b| {
            count += 1;
            left_sum += a;
            right_sum += b;
        });
        assert_eq!(count, 4);
        assert_eq!(left_sum, 21);
        assert_eq!(right_sum, 17);
    }

    #[test]
    fn test_filter_odd_left_even_right() {
        let map = sample();
        let filtered = map.filter(|a, b| a % 2 == 1 && b % 2 == 0);

        assert_eq!(filtered, BiMap::from_list([(3, 4), (9, 2)]));
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_filter_keep_all_and_none() {
        let map = sample();
        assert_eq!(map.filter(|_, _| true), map);
        assert!(map.filter(|_, _| false).is_empty());
    }

    #[test]
    fn test_left_and_right_values() {
        let map = sample();

        let mut lefts: Vec<i32> = map.left_values().copied().collect();
        lefts.sort();
        assert_eq!(lefts, vec![1, 3, 8, 9]);

        let mut rights: Vec<i32> = map.right_values().copied().collect();
        rights.sort();
        assert_eq!(rights, vec![2, 4, 5, 6]);
    }

    #[test]
    fn test_iter_matches_lookups() {
        let map = sample();
        assert_eq!(map.iter().count(), map.len());
        for (left, right) in map.iter() {
            assert_eq!(map.get_by_left(left), Ok(right));
            assert_eq!(map.get_by_right(right), Ok(left));
        }
    }
}
