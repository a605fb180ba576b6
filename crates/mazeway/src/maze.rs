//! Text mazes resolved into per-cell movement costs.
//!
//! A [`Maze`] is parsed from rows of single-character symbols. Each symbol
//! is priced through a [`CostTable`]; cells with a negative cost are walls.
//! Doors (`|`) in the first and last column are the entries and exits used
//! by [`solve`](crate::solve).

use std::fmt;
use std::str::FromStr;

use mazeway_core::{Point, Range};
use mazeway_paths::{Pather, WeightedPather};

use crate::config::CostTable;

/// Door symbol. Always costs 0.
pub const DOOR: char = '|';

/// An immutable maze with resolved cell costs.
#[derive(Debug, Clone)]
pub struct Maze {
    bounds: Range,
    symbols: Vec<char>,
    costs: Vec<i32>,
    entries: Vec<Point>,
    exits: Vec<Point>,
}

impl Maze {
    /// Parse `text` and price every cell with `table`.
    ///
    /// Leading and trailing blank lines are dropped; the remaining rows are
    /// kept verbatim (a trailing `\r` excepted) and must all have the same
    /// number of characters. An empty line between rows is not padded with
    /// spaces; it is reported as [`MalformedGrid::InconsistentWidth`].
    pub fn new(text: &str, table: &CostTable) -> Result<Self, MalformedGrid> {
        let (bounds, symbols) = parse_rows(text)?;
        let costs: Vec<i32> = symbols.iter().map(|&ch| table.cost_of(ch)).collect();

        let door_at = |p: Point| {
            bounds
                .index_of(p)
                .is_some_and(|i| symbols[i] == DOOR)
        };
        let entries: Vec<Point> = bounds.column(0).iter().filter(|&p| door_at(p)).collect();
        let exits: Vec<Point> = bounds
            .column(bounds.width() - 1)
            .iter()
            .filter(|&p| door_at(p))
            .collect();

        log::debug!(
            "parsed {}x{} maze with {} entry and {} exit doors",
            bounds.width(),
            bounds.height(),
            entries.len(),
            exits.len()
        );

        Ok(Self {
            bounds,
            symbols,
            costs,
            entries,
            exits,
        })
    }

    /// Parse `text` with the default [`CostTable`].
    pub fn parse(text: &str) -> Result<Self, MalformedGrid> {
        Self::new(text, &CostTable::default())
    }

    /// The grid rectangle, anchored at (0, 0).
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Cost of stepping onto `p`, or `None` outside the maze.
    pub fn cost_at(&self, p: Point) -> Option<i32> {
        self.bounds.index_of(p).map(|i| self.costs[i])
    }

    /// Symbol at `p`, or `None` outside the maze.
    pub fn symbol_at(&self, p: Point) -> Option<char> {
        self.bounds.index_of(p).map(|i| self.symbols[i])
    }

    /// Whether `p` is inside the maze and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.cost_at(p).is_some_and(|c| c >= 0)
    }

    /// Doors in the first column, top to bottom.
    pub fn entry_doors(&self) -> &[Point] {
        &self.entries
    }

    /// Doors in the last column, top to bottom.
    pub fn exit_doors(&self) -> &[Point] {
        &self.exits
    }

    /// Passable cardinal neighbours of `p` with their entry costs.
    pub fn neighbors(&self, p: Point) -> Vec<(Point, i32)> {
        self.open_neighbors(p).collect()
    }

    fn open_neighbors(&self, p: Point) -> impl Iterator<Item = (Point, i32)> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter_map(|n| self.cost_at(n).filter(|&c| c >= 0).map(|c| (n, c)))
    }

    /// Find every placement of `area` inside the maze.
    ///
    /// `area` is parsed with the same rules as a maze. Characters equal to
    /// `unknown` match anything. For each placement whose top-left corner
    /// lands on `corner`, `corner + offset` is reported, so `offset` names
    /// the cell of interest relative to the area. Results are row-major.
    pub fn locate(
        &self,
        area: &str,
        offset: Point,
        unknown: Option<char>,
    ) -> Result<Vec<Point>, MalformedGrid> {
        let (area_bounds, area_symbols) = parse_rows(area)?;
        let size = area_bounds.size();
        let corners = Range::new(
            0,
            0,
            (self.width() - size.x + 1).max(0),
            (self.height() - size.y + 1).max(0),
        );

        let found = corners
            .iter()
            .filter(|&corner| {
                area_bounds.iter().zip(&area_symbols).all(|(ap, &ch)| {
                    Some(ch) == unknown || self.symbol_at(corner + ap) == Some(ch)
                })
            })
            .map(|corner| corner + offset)
            .collect();
        Ok(found)
    }
}

impl FromStr for Maze {
    type Err = MalformedGrid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.open_neighbors(p).map(|(n, _)| n));
    }
}

impl WeightedPather for Maze {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.cost_at(to).unwrap_or(-1)
    }

    fn origin_cost(&self, p: Point) -> i32 {
        self.cost_at(p).unwrap_or(-1)
    }
}

/// Split maze text into a bounding range and row-major symbols.
fn parse_rows(text: &str) -> Result<(Range, Vec<char>), MalformedGrid> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    let is_blank = |l: &&str| l.trim().is_empty();
    let first = lines.iter().position(|l| !is_blank(l));
    let last = lines.iter().rposition(|l| !is_blank(l));
    let (Some(first), Some(last)) = (first, last) else {
        return Err(MalformedGrid::Empty);
    };

    let rows = &lines[first..=last];
    let width = rows[0].chars().count();
    let mut symbols = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        let before = symbols.len();
        symbols.extend(row.chars());
        let found = symbols.len() - before;
        if found != width {
            return Err(MalformedGrid::InconsistentWidth {
                row: y,
                expected: width,
                found,
            });
        }
    }

    Ok((Range::new(0, 0, width as i32, rows.len() as i32), symbols))
}

/// Errors that can occur when parsing maze text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedGrid {
    /// No rows remain once blank leading and trailing lines are removed.
    Empty,
    /// A row's length differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for MalformedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for MalformedGrid {}
