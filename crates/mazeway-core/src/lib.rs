//! **mazeway-core** — geometry shared by the *mazeway* crates.
//!
//! Maze cells are addressed with [`Point`] (`x` is the column, `y` the row)
//! and grids are described by a half-open [`Range`].

pub mod geom;

pub use geom::{Point, Range, RangeIter};
