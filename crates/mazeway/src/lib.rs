//! Cheapest door-to-door routes through weighted text mazes.
//!
//! A maze is a block of text. Each symbol costs something to step onto
//! (see [`CostTable`]); negative costs are walls. Doors (`|`) in the first
//! column are entries, doors in the last column are exits, and
//! [`solve`] finds the cheapest walk from any entry to any exit.
//!
//! ```
//! use mazeway::{Maze, Point};
//!
//! let maze = Maze::parse("|  .  |\n#######")?;
//! let path = maze.solve().expect("doors are connected");
//! assert_eq!(path.cost, 6);
//! assert_eq!(path.start(), Some(Point::new(0, 0)));
//! # Ok::<(), mazeway::MalformedGrid>(())
//! ```

pub mod config;
pub mod maze;
pub mod solver;

pub use config::CostTable;
pub use maze::{DOOR, MalformedGrid, Maze};
pub use mazeway_core::{Point, Range};
pub use mazeway_paths::{NO_PATH_COST, Path, into_pair};
pub use solver::{shortest_path, solve, solve_parallel};
