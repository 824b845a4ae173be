//! # Building and exporting a [`BiMap`]
//!
//! Conversions between a [`BiMap`] and plain data:
//!
//! - **From pairs**: [`BiMap::from_list`] and the [`FromIterator`] impl fold
//!   [`BiMap::insert`] over the input, left to right.
//! - **From a single-valued mapping**: [`BiMap::from_single_valued_map`], the [`From`] impl
//!   for `HashMap`, and the [`SingleValuedMapExt`] extension trait.
//! - **To pairs**: [`BiMap::to_list`] and the [`IntoIterator`] impls.
//! - **To indices**: borrowed ([`BiMap::forward_map`]), cloned ([`BiMap::to_forward_map`])
//!   or owned ([`BiMap::into_forward_map`]) access to either index.
//!
//! ## Collisions while building
//!
//! Building goes through the displacement rule of [`BiMap::insert`], so the input order
//! matters when pairs collide: the **last** pair touching a given left or right value wins,
//! and every earlier pair it collides with is removed entirely.
//!
//! ```rust
//! use bimap::BiMap;
//!
//! let map = BiMap::from_list([(1, 2), (3, 2)]);
//! assert_eq!(map, BiMap::from_list([(3, 2)]));
//! ```
use std::collections::{hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use ahash::RandomState;
use log::debug;

use crate::bimap::BiMap;

impl<L, R> BiMap<L, R>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    /// Build a map by inserting every pair of `pairs` in order.
    ///
    /// Arguments
    /// ---------
    /// * `pairs`: an ordered sequence of `(left, right)` pairs.
    ///
    /// Return
    /// ------
    /// * A map where, for colliding inputs, the last pair touching a given left or right
    ///   value is the one kept.
    pub fn from_list<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
    {
        Self::from_list_with_hasher(pairs, RandomState::new())
    }

    /// Build a map from a single-valued mapping `left -> right`.
    ///
    /// For an injective source the forward index equals the source. When two keys share a
    /// value, the key processed last (in the source's own iteration order) keeps it and the
    /// other key is dropped from both indices.
    ///
    /// Arguments
    /// ---------
    /// * `map`: any single-valued mapping yielding `(key, value)` entries, e.g. a `HashMap`
    ///   or a `BTreeMap`.
    ///
    /// See also
    /// ------------
    /// * [`SingleValuedMapExt::to_bimap`] – the same conversion from a borrowed map.
    pub fn from_single_valued_map<M>(map: M) -> Self
    where
        M: IntoIterator<Item = (L, R)>,
    {
        Self::from_single_valued_map_with_hasher(map, RandomState::new())
    }
}

impl<L, R, S> BiMap<L, R, S>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            forward: HashMap::with_capacity_and_hasher(capacity, hasher.clone()),
            reverse: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// [`BiMap::from_list`] with the indices hashing through `hasher`.
    pub fn from_list_with_hasher<I>(pairs: I, hasher: S) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let pairs = pairs.into_iter();
        let (lower, _) = pairs.size_hint();
        pairs.fold(
            Self::with_capacity_and_hasher(lower, hasher),
            |map, (left, right)| map.insert(left, right),
        )
    }

    /// [`BiMap::from_single_valued_map`] with the indices hashing through `hasher`.
    pub fn from_single_valued_map_with_hasher<M>(map: M, hasher: S) -> Self
    where
        M: IntoIterator<Item = (L, R)>,
    {
        let entries = map.into_iter();
        let (lower, _) = entries.size_hint();
        let mut dropped = 0usize;

        let bimap = entries.fold(
            Self::with_capacity_and_hasher(lower, hasher),
            |bimap, (left, right)| {
                if bimap.has_right(&right) {
                    dropped += 1;
                }
                bimap.insert(left, right)
            },
        );

        if dropped > 0 {
            debug!(
                "from_single_valued_map: source is not injective, {} key(s) dropped",
                dropped
            );
        }
        bimap
    }

    /// Every pair of the map, cloned, in unspecified order.
    pub fn to_list(&self) -> Vec<(L, R)> {
        self.forward
            .iter()
            .map(|(left, right)| (left.clone(), right.clone()))
            .collect()
    }
}

impl<L, R, S> BiMap<L, R, S> {
    /// The forward index `left -> right`.
    pub fn forward_map(&self) -> &HashMap<L, R, S> {
        &self.forward
    }

    /// The reverse index `right -> left`.
    pub fn reverse_map(&self) -> &HashMap<R, L, S> {
        &self.reverse
    }

    pub fn to_forward_map(&self) -> HashMap<L, R, S>
    where
        L: Clone,
        R: Clone,
        S: Clone,
    {
        self.forward.clone()
    }

    pub fn to_reverse_map(&self) -> HashMap<R, L, S>
    where
        L: Clone,
        R: Clone,
        S: Clone,
    {
        self.reverse.clone()
    }

    pub fn into_forward_map(self) -> HashMap<L, R, S> {
        self.forward
    }

    pub fn into_reverse_map(self) -> HashMap<R, L, S> {
        self.reverse
    }

    /// Split the map into its `(forward, reverse)` indices.
    pub fn into_indices(self) -> (HashMap<L, R, S>, HashMap<R, L, S>) {
        (self.forward, self.reverse)
    }
}

impl<L, R, S> FromIterator<(L, R)> for BiMap<L, R, S>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        Self::from_list_with_hasher(iter, S::default())
    }
}

impl<L, R, S> From<HashMap<L, R, S>> for BiMap<L, R, S>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn from(map: HashMap<L, R, S>) -> Self {
        let hasher = map.hasher().clone();
        Self::from_single_valued_map_with_hasher(map, hasher)
    }
}

impl<L, R, S> IntoIterator for BiMap<L, R, S> {
    type Item = (L, R);
    type IntoIter = hash_map::IntoIter<L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.forward.into_iter()
    }
}

impl<'a, L, R, S> IntoIterator for &'a BiMap<L, R, S> {
    type Item = (&'a L, &'a R);
    type IntoIter = hash_map::Iter<'a, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.forward.iter()
    }
}

/// Extension trait turning a borrowed single-valued map into a [`BiMap`].
///
/// Implemented for `HashMap` and `BTreeMap`. Entries are cloned; see
/// [`BiMap::from_single_valued_map`] for how a non-injective source is handled.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use bimap::SingleValuedMapExt;
///
/// let codes = BTreeMap::from([("F51", 0u16), ("I41", 1u16)]);
/// let sites = codes.to_bimap();
/// assert_eq!(sites.get_by_right(&1), Ok(&"I41"));
/// ```
pub trait SingleValuedMapExt<L, R> {
    fn to_bimap(&self) -> BiMap<L, R>;
}

impl<L, R, S> SingleValuedMapExt<L, R> for HashMap<L, R, S>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    fn to_bimap(&self) -> BiMap<L, R> {
        BiMap::from_single_valued_map(self.iter().map(|(l, r)| (l.clone(), r.clone())))
    }
}

impl<L, R> SingleValuedMapExt<L, R> for BTreeMap<L, R>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    fn to_bimap(&self) -> BiMap<L, R> {
        BiMap::from_single_valued_map(self.iter().map(|(l, r)| (l.clone(), r.clone())))
    }
}
