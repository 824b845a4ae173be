#![allow(dead_code)]

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use bimap::BiMap;

/// Check that both indices describe the same pairs and that every pair resolves both ways.
pub fn assert_bijective<L, R>(map: &BiMap<L, R>)
where
    L: Eq + Hash + Clone + Debug,
    R: Eq + Hash + Clone + Debug,
{
    let pairs = map.to_list();
    assert_eq!(pairs.len(), map.len());
    assert_eq!(map.forward_map().len(), map.reverse_map().len());

    for (left, right) in &pairs {
        assert_eq!(map.get_by_left(left), Ok(right));
        assert_eq!(map.get_by_right(right), Ok(left));
    }
}

/// The pairs of `map` as a set, for order-independent comparisons.
pub fn pair_set<L, R>(map: &BiMap<L, R>) -> HashSet<(L, R)>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    map.to_list().into_iter().collect()
}
