//! Door-to-door route search.

use std::thread;

use mazeway_core::Point;
use mazeway_paths::{Path, dijkstra_path};

use crate::maze::Maze;

/// Cheapest path from `start` to `goal`, counting the start cell's cost.
///
/// `None` if either point is outside the maze, the start is a wall, or the
/// goal cannot be reached.
pub fn shortest_path(maze: &Maze, start: Point, goal: Point) -> Option<Path> {
    dijkstra_path(maze, maze.bounds(), start, goal)
}

/// Cheapest path from any entry door to any exit door.
///
/// Every entry × exit pair is searched independently. `None` if either side
/// has no doors or no pair is connected. Among equally cheap routes the one
/// found first (entries, then exits, top to bottom) wins.
pub fn solve(maze: &Maze) -> Option<Path> {
    log::debug!(
        "solving {} entry x {} exit door pairs",
        maze.entry_doors().len(),
        maze.exit_doors().len()
    );
    let best = maze
        .entry_doors()
        .iter()
        .map(|&entry| best_from(maze, entry))
        .fold(None, cheaper);
    log_outcome(&best);
    best
}

/// Like [`solve`], with one scoped thread per entry door.
///
/// Returns a route of the same cost as [`solve`], and the same route when
/// the search order picks it; the maze is shared read-only.
pub fn solve_parallel(maze: &Maze) -> Option<Path> {
    let best = thread::scope(|s| {
        let handles: Vec<_> = maze
            .entry_doors()
            .iter()
            .map(|&entry| s.spawn(move || best_from(maze, entry)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .fold(None, cheaper)
    });
    log_outcome(&best);
    best
}

/// Cheapest route from `entry` to any exit door.
fn best_from(maze: &Maze, entry: Point) -> Option<Path> {
    maze.exit_doors()
        .iter()
        .map(|&exit| {
            let found = shortest_path(maze, entry, exit);
            log::trace!(
                "{entry} -> {exit}: {}",
                found.as_ref().map_or(-1, |p| p.cost)
            );
            found
        })
        .fold(None, cheaper)
}

/// Keep `best` unless `candidate` is strictly cheaper.
fn cheaper(best: Option<Path>, candidate: Option<Path>) -> Option<Path> {
    match (best, candidate) {
        (Some(b), Some(c)) if c.cost < b.cost => Some(c),
        (Some(b), _) => Some(b),
        (None, c) => c,
    }
}

fn log_outcome(best: &Option<Path>) {
    match best {
        Some(p) => log::debug!("best route costs {} over {} cells", p.cost, p.len()),
        None => log::debug!("no route between doors"),
    }
}

impl Maze {
    /// See [`shortest_path`].
    pub fn shortest_path(&self, start: Point, goal: Point) -> Option<Path> {
        shortest_path(self, start, goal)
    }

    /// See [`solve`].
    pub fn solve(&self) -> Option<Path> {
        solve(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostTable;
    use crate::maze::DOOR;
    use mazeway_paths::into_pair;

    fn pts(cells: &[(i32, i32)]) -> Vec<Point> {
        cells.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    /// Checks that `path` is a legal door-to-door walk with the stated cost.
    fn assert_valid_route(maze: &Maze, path: &Path) {
        let start = path.start().unwrap();
        let goal = path.goal().unwrap();
        assert!(maze.entry_doors().contains(&start), "{start} is not an entry");
        assert!(maze.exit_doors().contains(&goal), "{goal} is not an exit");
        for pair in path.cells.windows(2) {
            assert!(pair[0].is_adjacent_4(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
        assert!(path.cells.iter().all(|&p| maze.is_passable(p)));
        let total: i32 = path.cells.iter().filter_map(|&p| maze.cost_at(p)).sum();
        assert_eq!(total, path.cost);
    }

    // -----------------------------------------------------------------------
    // Scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn straight_corridor() {
        let maze = Maze::parse(
            "
########
#      #
|      |
########
",
        )
        .unwrap();
        let path = solve(&maze).unwrap();
        assert_eq!(path.cost, 6);
        assert_eq!(path.cells, (0..8).map(|x| Point::new(x, 2)).collect::<Vec<_>>());
        assert_valid_route(&maze, &path);
    }

    #[test]
    fn detour_around_walls() {
        let maze = Maze::parse(
            "
#####
#   #
| # #
# # |
#####
    ",
        )
        .unwrap();
        let path = solve(&maze).unwrap();
        assert_eq!(path.cost, 6);
        assert_eq!(
            path.cells,
            pts(&[(0, 2), (1, 2), (1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (4, 3)])
        );
    }

    #[test]
    fn no_exit_doors() {
        let maze = Maze::parse(
            "
#####
|   #
|   #
#####
",
        )
        .unwrap();
        assert_eq!(maze.entry_doors().len(), 2);
        assert!(solve(&maze).is_none());
        assert_eq!(into_pair(solve(&maze)), (None, -1));
    }

    #[test]
    fn no_entry_doors() {
        let maze = Maze::parse("#  |\n#  |").unwrap();
        assert!(solve(&maze).is_none());
    }

    #[test]
    fn expensive_cell_in_only_corridor() {
        let maze = Maze::parse(
            "
#######
|  w  |
#######
",
        )
        .unwrap();
        let path = solve(&maze).unwrap();
        assert_eq!(path.cost, 14);
        assert!(path.cells.contains(&Point::new(3, 1)));
    }

    #[test]
    fn expensive_cell_avoided_when_detour_is_cheaper() {
        let maze = Maze::parse(
            "
#######
#     #
|  w  |
#######
",
        )
        .unwrap();
        let path = solve(&maze).unwrap();
        assert_eq!(path.cost, 7);
        assert!(!path.cells.contains(&Point::new(3, 2)));
        assert_valid_route(&maze, &path);
    }

    #[test]
    fn solid_wall_blocks_every_pair() {
        let maze = Maze::parse(
            "
#######
|  #  |
|  #  |
#######
",
        )
        .unwrap();
        assert!(solve(&maze).is_none());
        assert!(solve_parallel(&maze).is_none());
    }

    #[test]
    fn picks_cheapest_door_pair() {
        let maze = Maze::parse(
            "
#####
#   |
#   |
| # #
#####
| # |
#####
",
        )
        .unwrap();
        let path = solve(&maze).unwrap();
        assert_eq!(path.cost, 4);
        assert_eq!(path.start(), Some(Point::new(0, 3)));
        assert_valid_route(&maze, &path);

        let via_door = shortest_path(&maze, Point::new(0, 3), Point::new(4, 1)).unwrap();
        assert_eq!(via_door.cost, 4);
        assert!(shortest_path(&maze, Point::new(0, 5), Point::new(4, 5)).is_none());
    }

    #[test]
    fn long_route_through_rooms() {
        let maze = Maze::parse(
            "
###############
#         w   |
#    w  www   |
| # #      ####
##########    |
",
        )
        .unwrap();
        let path = solve(&maze).unwrap();
        assert_eq!(path.cost, 18);
        assert_valid_route(&maze, &path);
    }

    #[test]
    fn unmapped_symbols_make_free_route() {
        let maze = Maze::parse(
            "
EEE
|w|
.-|
###
",
        )
        .unwrap();
        let path = solve(&maze).unwrap();
        assert_eq!(path.cost, 0);
        assert_eq!(path.cells, pts(&[(0, 1), (0, 0), (1, 0), (2, 0), (2, 1)]));
    }

    #[test]
    fn custom_table_changes_route() {
        let text = "
#####
|...|
|www|
#####
";
        let default = Maze::parse(text).unwrap();
        let path = solve(&default).unwrap();
        assert_eq!(path.cost, 6);
        assert_valid_route(&default, &path);

        let cheap_water = CostTable::default().with('w', 1);
        let maze = Maze::new(text, &cheap_water).unwrap();
        let path = solve(&maze).unwrap();
        assert_eq!(path.cost, 3);
        assert_valid_route(&maze, &path);
    }

    // -----------------------------------------------------------------------
    // Single pair
    // -----------------------------------------------------------------------

    #[test]
    fn start_cell_cost_is_counted() {
        let maze = Maze::parse(
            "
########
#      #
|    w |
########
",
        )
        .unwrap();
        let a = shortest_path(&maze, Point::new(4, 2), Point::new(5, 2)).unwrap();
        assert_eq!(a.cost, 11);
        let b = shortest_path(&maze, Point::new(4, 2), Point::new(7, 2)).unwrap();
        assert_eq!(b.cost, 5);
        assert_eq!(
            b.cells,
            pts(&[(4, 2), (4, 1), (5, 1), (6, 1), (6, 2), (7, 2)])
        );
    }

    #[test]
    fn single_cell_paths() {
        let maze = Maze::parse("|. |\n####").unwrap();
        for p in [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)] {
            let path = shortest_path(&maze, p, p).unwrap();
            assert_eq!(path.cells, vec![p]);
            let expected = if maze.symbol_at(p) == Some(DOOR) {
                0
            } else {
                maze.cost_at(p).unwrap()
            };
            assert_eq!(path.cost, expected);
        }
        assert!(shortest_path(&maze, Point::new(0, 1), Point::new(0, 1)).is_none());
    }

    #[test]
    fn neighbouring_door_is_unreachable_through_wall() {
        let maze = Maze::parse(
            "
########
#      #
#      #
|      |
########
",
        )
        .unwrap();
        let step = shortest_path(&maze, Point::new(0, 3), Point::new(1, 3)).unwrap();
        assert_eq!(into_pair(Some(step)), (Some(pts(&[(0, 3), (1, 3)])), 1));
        assert!(shortest_path(&maze, Point::new(0, 3), Point::new(0, 2)).is_none());
        assert!(maze.shortest_path(Point::new(0, 3), Point::new(9, 3)).is_none());
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn repeated_solves_agree() {
        let maze = Maze::parse(
            "
#########
|   .   |
|  ---  |
|   w   |
#########
",
        )
        .unwrap();
        let first = maze.solve().unwrap();
        for _ in 0..5 {
            assert_eq!(maze.solve().unwrap().cost, first.cost);
        }
        assert_eq!(solve_parallel(&maze).unwrap().cost, first.cost);
    }

    #[test]
    fn maze_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Maze>();

        let maze = Maze::parse("|  |\n|  |\n####").unwrap();
        let costs: Vec<i32> = thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| solve(&maze))).collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap().cost)
                .collect()
        });
        assert_eq!(costs, vec![2; 4]);
    }

    /// Minimum over every simple door-to-door walk, by exhaustive search.
    fn brute_force(maze: &Maze) -> Option<i32> {
        fn walk(
            maze: &Maze,
            p: Point,
            cost: i32,
            seen: &mut Vec<Point>,
            best: &mut Option<i32>,
        ) {
            if maze.exit_doors().contains(&p) {
                *best = Some(best.map_or(cost, |b| b.min(cost)));
            }
            for (n, c) in maze.neighbors(p) {
                if seen.contains(&n) {
                    continue;
                }
                seen.push(n);
                walk(maze, n, cost + c, seen, best);
                seen.pop();
            }
        }

        let mut best = None;
        for &entry in maze.entry_doors() {
            let mut seen = vec![entry];
            walk(maze, entry, 0, &mut seen, &mut best);
        }
        best
    }

    #[test]
    fn matches_exhaustive_search_on_small_grids() {
        const TERRAIN: [char; 4] = [' ', '#', '.', 'w'];
        const EDGES: [(&str, &str); 2] = [("|#|", "#||"), ("#|#", "|#|")];

        for (left, right) in EDGES {
            let left: Vec<char> = left.chars().collect();
            let right: Vec<char> = right.chars().collect();
            for code in 0..TERRAIN.len().pow(6) {
                let mut n = code;
                let mut text = String::new();
                for y in 0..3 {
                    text.push(left[y]);
                    for _ in 0..2 {
                        text.push(TERRAIN[n % TERRAIN.len()]);
                        n /= TERRAIN.len();
                    }
                    text.push(right[y]);
                    text.push('\n');
                }
                let maze = Maze::parse(&text).unwrap();
                let found = solve(&maze);
                assert_eq!(
                    found.as_ref().map(|p| p.cost),
                    brute_force(&maze),
                    "maze:\n{text}"
                );
                if let Some(path) = &found {
                    assert_valid_route(&maze, path);
                }
            }
        }
    }
}
