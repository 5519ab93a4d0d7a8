//! # Map Diff
//!
//! Recursive structural comparison of maps and records.
//!
//! Comparing two [`Value`]s yields a [`Patch`] tree that classifies every
//! key as equal, added, removed, or changed, with nested maps compared key by
//! key and tagged records compared field by field when their tags match.
//!
//! ```
//! use map_diff::{compare, Patch, Value};
//!
//! let old = Value::map([("a", 1), ("b", 2)]);
//! let new = Value::map([("a", 1), ("b", 3)]);
//!
//! let patch = compare(&old, &new);
//! assert_eq!(
//!     patch.child("b"),
//!     Some(&Patch::PrimitiveChange { removed: Value::Int(2), added: Value::Int(3) })
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of the compared data, with JSON/YAML codecs
//! - [`diff`] - The comparison itself
//! - [`patch`] - The patch tree and its path-flattened summary
//! - [`error`] - Errors raised while loading or rendering documents

pub mod diff;
pub mod error;
pub mod patch;
pub mod value;

pub use diff::compare;
pub use error::{Error, Result};
pub use patch::{Patch, PatchKind, Path, Summary};
pub use value::{Map, Record, Value};
