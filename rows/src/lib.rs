//! Result flattening for the Boost KYC demo.
//!
//! Turns an arbitrary nested JSON result document into an ordered list of
//! [`DisplayRow`]s: one header per top-level key followed by its leaf rows.
//! Object keys are always visited in lexicographic order and array elements
//! in index order, so the output is a pure function of the input.

pub mod flatten;
pub mod render;
pub mod row;

pub use flatten::{build_rows, flatten, format_scalar, is_container, INDENT};
pub use render::render_rows;
pub use row::DisplayRow;
