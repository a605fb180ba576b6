use mazeway_core::Point;

/// Cost reported alongside a missing path by [`into_pair`].
pub const NO_PATH_COST: i32 = -1;

/// A found route: the visited cells in order, and the summed cost of every
/// cell on it (start included).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cells: Vec<Point>,
    pub cost: i32,
}

impl Path {
    /// First cell of the path.
    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    /// Last cell of the path.
    pub fn goal(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Split into `(cells, cost)`.
    pub fn into_parts(self) -> (Vec<Point>, i32) {
        (self.cells, self.cost)
    }
}

/// Flatten a search result into the `(path, cost)` pair form, where a
/// missing path is reported as `(None, NO_PATH_COST)`.
pub fn into_pair(result: Option<Path>) -> (Option<Vec<Point>>, i32) {
    match result {
        Some(path) => {
            let (cells, cost) = path.into_parts();
            (Some(cells), cost)
        }
        None => (None, NO_PATH_COST),
    }
}
