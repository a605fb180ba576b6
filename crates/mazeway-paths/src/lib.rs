//! Pathfinding over weighted 2D grids.
//!
//! The search is a uniform-cost (Dijkstra) search in which stepping onto a
//! cell costs that cell's own weight. Grids plug in through two traits:
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | entry costs, used by [`dijkstra_path`] |
//!
//! Every call owns its scratch state, so a shared grid can be searched from
//! several threads at once.

mod dijkstra;
mod path;
mod traits;

pub use dijkstra::dijkstra_path;
pub use path::{NO_PATH_COST, Path, into_pair};
pub use traits::{Pather, WeightedPather};
