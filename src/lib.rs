//! Minimum-sum top-to-bottom path through a numeric triangle.
//!
//! Rows are read one line at a time; each node records the cheapest sum from
//! the apex and which parent produced it, so the path is recovered by walking
//! parent links up from the cheapest node of the last row.

pub mod cli;
pub mod error;
pub mod exitcode;
pub mod logging;
pub mod path;
pub mod triangle;

pub use error::{ErrorKind, TriangleError};
pub use path::{minimal_path, MinimumPath};
pub use triangle::{Node, Triangle};
