//! `Serialize` / `Deserialize` for [`BiMap`], behind the `serde` feature.
//!
//! A map is written as a sequence of `(left, right)` pairs rather than as a serde map, so
//! legs that are not strings still round-trip through formats such as JSON:
//!
//! ```text
//! [["wibble", 1], ["wobble", 2]]
//! ```
//!
//! Reading goes through [`BiMap::from_list_with_hasher`]: if the input repeats a left or
//! right value, the last pair wins, and the resulting map always keeps both indices in sync.
use std::hash::{BuildHasher, Hash};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::bimap::BiMap;

impl<L, R, S> Serialize for BiMap<L, R, S>
where
    L: Serialize,
    R: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, L, R, S> Deserialize<'de> for BiMap<L, R, S>
where
    L: Deserialize<'de> + Eq + Hash + Clone,
    R: Deserialize<'de> + Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(L, R)>::deserialize(deserializer)?;
        Ok(Self::from_list_with_hasher(pairs, S::default()))
    }
}
