//! Diff module - The recursive comparison producing a [`Patch`](crate::patch::Patch).

mod differ;



pub use differ::*;
