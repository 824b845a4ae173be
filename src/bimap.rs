//! # The bidirectional map
//!
//! [`BiMap`] associates left values with right values so that either side can be used to
//! look up the other. Uniqueness is enforced on **both** sides at once: a left value maps to
//! exactly one right value and vice versa.
//!
//! ## Layout
//!
//! Two single-valued indices are kept in exact correspondence:
//!
//! ```text
//! forward : L -> R        forward[l] == r  <=>  reverse[r] == l
//! reverse : R -> L        forward.len() == reverse.len()
//! ```
//!
//! Every mutating operation touches both indices before returning, so no caller can observe
//! a half-updated map.
//!
//! ## Value semantics
//!
//! Mutating operations ([`insert`](BiMap::insert), [`delete_by_left`](BiMap::delete_by_left),
//! [`delete_by_right`](BiMap::delete_by_right)) consume the map and return the transformed
//! value. A caller that needs the previous state keeps a `clone()` of it; the clone is never
//! affected by later operations on the returned map.
//!
//! ```rust
//! use bimap::BiMap;
//!
//! let before = BiMap::new().insert("wibble", 1).insert("wobble", 2);
//! let after = before.clone().insert("wubble", 2);
//!
//! assert_eq!(before.get_by_right(&2), Ok(&"wobble"));
//! assert_eq!(after.get_by_right(&2), Ok(&"wubble"));
//! assert!(!after.has_left(&"wobble"));
//! ```
//!
//! ## Hashing
//!
//! Both indices are `HashMap`s using [`ahash`](https://docs.rs/ahash) by default. Any other
//! `BuildHasher` can be supplied through [`BiMap::with_hasher`].
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use ahash::RandomState;
use log::trace;

use crate::bimap_errors::{BiMapError, Result, Side};

/// A bijective map between `L` (left) and `R` (right) values.
///
/// See the [module documentation](self) for the invariants maintained by every operation.
#[derive(Clone)]
pub struct BiMap<L, R, S = RandomState> {
    pub(crate) forward: HashMap<L, R, S>,
    pub(crate) reverse: HashMap<R, L, S>,
}

impl<L, R> BiMap<L, R, RandomState> {
    /// Create an empty map using the default `ahash` hasher.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<L, R, S> Default for BiMap<L, R, S>
where
    S: Default,
{
    fn default() -> Self {
        Self {
            forward: HashMap::default(),
            reverse: HashMap::default(),
        }
    }
}

impl<L, R, S> BiMap<L, R, S> {
    /// Create an empty map whose indices hash with `hasher`.
    pub fn with_hasher(hasher: S) -> Self
    where
        S: Clone,
    {
        Self {
            forward: HashMap::with_hasher(hasher.clone()),
            reverse: HashMap::with_hasher(hasher),
        }
    }

    /// Number of pairs in the map.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl<L, R, S> BiMap<L, R, S>
where
    L: Eq + Hash,
    R: Eq + Hash,
    S: BuildHasher,
{
    /// Look up the right value associated with `key`.
    ///
    /// Arguments
    /// ---------
    /// * `key`: a left value, or anything `L` borrows as (e.g. `&str` for `String`).
    ///
    /// Return
    /// ------
    /// * `Ok(&R)` when `key` is present in the forward index.
    /// * `Err(BiMapError::NotFound(Side::Left))` otherwise.
    pub fn get_by_left<Q>(&self, key: &Q) -> Result<&R>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward
            .get(key)
            .ok_or(BiMapError::NotFound(Side::Left))
    }

    /// Look up the left value associated with `key`.
    ///
    /// Arguments
    /// ---------
    /// * `key`: a right value, or anything `R` borrows as.
    ///
    /// Return
    /// ------
    /// * `Ok(&L)` when `key` is present in the reverse index.
    /// * `Err(BiMapError::NotFound(Side::Right))` otherwise.
    pub fn get_by_right<Q>(&self, key: &Q) -> Result<&L>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse
            .get(key)
            .ok_or(BiMapError::NotFound(Side::Right))
    }

    pub fn has_left<Q>(&self, key: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(key)
    }

    pub fn has_right<Q>(&self, key: &Q) -> bool
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.contains_key(key)
    }

    /// Remove the pair whose left value is `key`, returning its right value.
    pub(crate) fn remove_left<Q>(&mut self, key: &Q) -> Option<R>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let right = self.forward.remove(key)?;
        self.reverse.remove(&right);
        Some(right)
    }

    /// Remove the pair whose right value is `key`, returning its left value.
    pub(crate) fn remove_right<Q>(&mut self, key: &Q) -> Option<L>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let left = self.reverse.remove(key)?;
        self.forward.remove(&left);
        Some(left)
    }

    /// Remove the pair with left value `key`.
    ///
    /// Deleting an absent key is a no-op: the map is returned unchanged.
    #[must_use]
    pub fn delete_by_left<Q>(mut self, key: &Q) -> Self
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.remove_left(key).is_none() {
            trace!("delete_by_left: key absent, map left unchanged");
        }
        self
    }

    /// Remove the pair with right value `key`.
    ///
    /// Deleting an absent key is a no-op: the map is returned unchanged.
    #[must_use]
    pub fn delete_by_right<Q>(mut self, key: &Q) -> Self
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.remove_right(key).is_none() {
            trace!("delete_by_right: key absent, map left unchanged");
        }
        self
    }
}

impl<L, R, S> BiMap<L, R, S>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Associate `left` with `right`, displacing whatever collides with either of them.
    ///
    /// Any pair whose left value equals `left` is removed from both indices, and so is any
    /// pair whose right value equals `right`. The new pair is then added. The size of the map
    /// therefore changes by:
    ///
    /// * `+1` when neither value was present,
    /// * `0` when one existing pair was displaced (including re-inserting an existing pair),
    /// * `-1` when two distinct pairs were displaced, one matching on each side.
    ///
    /// Arguments
    /// ---------
    /// * `left`: the left value of the new pair.
    /// * `right`: the right value of the new pair.
    ///
    /// Return
    /// ------
    /// * The map containing `(left, right)`, with [`get_by_left`](Self::get_by_left) and
    ///   [`get_by_right`](Self::get_by_right) resolving to each other.
    #[must_use]
    pub fn insert(mut self, left: L, right: R) -> Self {
        let displaced = self.displace(&left, &right);
        if displaced > 0 {
            trace!(
                "insert displaced {} existing pair(s), {} pair(s) remain before adding",
                displaced,
                self.len()
            );
        }
        self.reverse.insert(right.clone(), left.clone());
        self.forward.insert(left, right);
        self
    }

    /// Remove every pair colliding with `(left, right)` and report how many went away.
    ///
    /// Both lookups describe the pre-insert map: if the pair found through `left` already
    /// owns `right`, the second lookup finds nothing left to remove.
    fn displace(&mut self, left: &L, right: &R) -> usize {
        let by_left = self.remove_left(left).is_some();
        let by_right = self.remove_right(right).is_some();
        usize::from(by_left) + usize::from(by_right)
    }
}

impl<L, R, S> PartialEq for BiMap<L, R, S>
where
    L: Eq + Hash,
    R: Eq + Hash,
    S: BuildHasher,
{
    /// Two maps are equal when they hold the same set of pairs, whatever their insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<L, R, S> Eq for BiMap<L, R, S>
where
    L: Eq + Hash,
    R: Eq + Hash,
    S: BuildHasher,
{
}

impl<L, R, S> fmt::Debug for BiMap<L, R, S>
where
    L: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.forward.iter()).finish()
    }
}
