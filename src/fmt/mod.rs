//! Printing terms
//!
//! Every term implements `Display`, printing the same notation the
//! [`crate::notation`] layer reads, so printed results can be fed back in.
//! [`pretty`] lays wide terms out over several lines.

mod pretty;
mod term;

pub use pretty::{DEFAULT_WIDTH, pretty, pretty_with_width};
