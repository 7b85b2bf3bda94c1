//! Array rules for the cargo bay.
//!
//! Pure functions over container slices. They never touch a
//! [`GameState`](crate::GameState) directly so they can be reused by the
//! store and by front ends that want to preview an operation.

pub mod random_fill;
pub mod search;

pub use random_fill::{random_fill, shuffled_items};
pub use search::{SearchTrace, linear_search, linear_search_trace};
