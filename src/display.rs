//! # Diagnostic rendering of a [`BiMap`]
//!
//! [`BiMapDisplay`] borrows a map and renders its pairs when used with Rust formatting,
//! without cloning the map:
//!
//! - `{}` renders on one line: `{1 <-> "a", 2 <-> "b"}`
//! - `{:#}` renders one pair per line, indented.
//!
//! Each leg is rendered through its `Debug` impl. The output is meant for humans: the
//! format is not parseable, and pairs come out in the map's unspecified iteration order
//! unless [`BiMapDisplay::sorted`] is requested, which sorts the **rendered rows**
//! lexicographically (no `Ord` bound on the legs).
//!
//! ```rust
//! use bimap::BiMap;
//!
//! let map = BiMap::from_list([(2, "b"), (1, "a")]);
//! assert_eq!(map.display().sorted().to_string(), r#"{1 <-> "a", 2 <-> "b"}"#);
//! ```
use std::fmt;

use itertools::Itertools;

use crate::bimap::BiMap;

/// Display adaptor returned by [`BiMap::display`].
pub struct BiMapDisplay<'a, L, R, S> {
    map: &'a BiMap<L, R, S>,
    sorted: bool,
}

impl<L, R, S> BiMapDisplay<'_, L, R, S> {
    /// Render rows sorted by their text instead of in iteration order.
    pub fn sorted(mut self) -> Self {
        self.sorted = true;
        self
    }
}

impl<L, R, S> BiMap<L, R, S> {
    pub fn display(&self) -> BiMapDisplay<'_, L, R, S> {
        BiMapDisplay {
            map: self,
            sorted: false,
        }
    }

    /// Human-readable rendering of the pairs, for debugging only.
    ///
    /// The format and the pair order are unstable; do not parse it.
    pub fn describe(&self) -> String
    where
        L: fmt::Debug,
        R: fmt::Debug,
    {
        self.display().to_string()
    }
}

impl<L, R, S> fmt::Display for BiMapDisplay<'_, L, R, S>
where
    L: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: Vec<String> = self
            .map
            .iter()
            .map(|(left, right)| format!("{left:?} <-> {right:?}"))
            .collect();
        if self.sorted {
            rows.sort_unstable();
        }

        if rows.is_empty() {
            return write!(f, "{{}}");
        }

        if f.alternate() {
            writeln!(f, "{{")?;
            for row in &rows {
                writeln!(f, "    {row},")?;
            }
            write!(f, "}}")
        } else {
            write!(f, "{{{}}}", rows.iter().join(", "))
        }
    }
}
