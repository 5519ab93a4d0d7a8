//! Patch module - The result of comparing two values.
//!
//! A [`Patch`] is a tree mirroring the keyed structure of its inputs. A
//! [`Summary`] flattens it into [`Path`]s for reporting.

mod patch;
mod path;
mod summary;

pub use patch::*;
pub use path::*;
pub use summary::*;
