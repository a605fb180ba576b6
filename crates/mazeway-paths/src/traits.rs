use mazeway_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the enterable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather whose moves carry a cost.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` onto adjacent `to`. Must be >= 0.
    fn cost(&self, from: Point, to: Point) -> i32;

    /// Cost charged for occupying the start cell of a search.
    ///
    /// A negative value means `p` cannot be occupied and the search yields
    /// no path.
    fn origin_cost(&self, _p: Point) -> i32 {
        0
    }
}
