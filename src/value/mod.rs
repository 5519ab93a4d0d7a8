//! Value module - In-memory representation of the data being compared.
//!
//! Values are either keyed (maps and tagged records) or primitive.

mod document;
mod value;

pub use document::*;
pub use value::*;
