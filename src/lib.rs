//! # bimap
//!
//! A **bidirectional map**: every left value is associated with exactly one right value and
//! every right value with exactly one left value, so either side can be used to look up the
//! other.
//!
//! ## Overview
//!
//! - [`BiMap`] keeps two single-valued indices (`left -> right` and `right -> left`) in exact
//!   correspondence on every operation.
//! - [`BiMap::insert`] **displaces** whatever collides with the new pair on either side,
//!   so uniqueness holds on both sides after every call.
//! - Mutating operations consume the map and return the new value; clone first to keep the
//!   previous state around.
//! - Lookups return [`Result`], failing with [`BiMapError::NotFound`] when the key is absent.
//!   Every other operation is total.
//!
//! ## Quick start
//!
//! ```rust
//! use bimap::{BiMap, BiMapError, Side};
//!
//! let map = BiMap::new()
//!     .insert("wibble", 1)
//!     .insert("wobble", 2)
//!     .insert("wubble", 2); // displaces ("wobble", 2)
//!
//! assert_eq!(map, BiMap::from_list([("wibble", 1), ("wubble", 2)]));
//! assert_eq!(map.get_by_right(&2), Ok(&"wubble"));
//! assert_eq!(map.get_by_left(&"wobble"), Err(BiMapError::NotFound(Side::Left)));
//!
//! let map = map.delete_by_left(&"wibble");
//! assert_eq!(map.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`bimap`] – the map itself: lookups, insertion with displacement, deletion.
//! - [`conversion`] – building from pairs or single-valued maps, exporting pairs and indices.
//! - [`traversal`] – iteration, `fold`, `for_each`, `filter`.
//! - [`display`] – human-readable rendering for diagnostics.
//! - [`bimap_errors`] – the crate error type.
//!
//! ## Cargo features
//!
//! - `serde` – `Serialize`/`Deserialize` for [`BiMap`], as a sequence of pairs.
//!
//! ## Logging
//!
//! The crate emits `trace`/`debug` records through the [`log`](https://docs.rs/log) facade
//! (displacements on insert, no-op deletions, non-injective sources). It never installs a
//! logger.
pub mod bimap;
pub mod bimap_errors;
pub mod conversion;
pub mod display;
pub mod traversal;

#[cfg(feature = "serde")]
mod serde_impl;

pub use crate::bimap::BiMap;
pub use crate::bimap_errors::{BiMapError, Result, Side};
pub use crate::conversion::SingleValuedMapExt;
pub use crate::display::BiMapDisplay;
