use std::collections::BinaryHeap;

use mazeway_core::{Point, Range};

use crate::path::Path;
use crate::traits::WeightedPather;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Search arena
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Node {
    g: i32,
    parent: usize,
    reached: bool,
    closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            reached: false,
            closed: false,
        }
    }
}

/// Frontier entry, ordered by accumulated cost for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest entry first.
        other.g.cmp(&self.g)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Compute the cheapest path from `start` to `goal` with a uniform-cost
/// search.
///
/// The search starts at `pather.origin_cost(start)` and every step onto a
/// neighbour adds `pather.cost(from, to)`, so the returned cost is the sum
/// over every cell of the path. Only points inside `bounds` are considered.
///
/// Returns `None` when either endpoint is outside `bounds`, when the start
/// cannot be occupied (negative origin cost), or when the goal is not
/// reachable. When `start == goal` the path is `[start]`.
///
/// Among equal-cost routes any one may be returned.
pub fn dijkstra_path<P: WeightedPather>(
    pather: &P,
    bounds: Range,
    start: Point,
    goal: Point,
) -> Option<Path> {
    let start_idx = bounds.index_of(start)?;
    let goal_idx = bounds.index_of(goal)?;

    let origin = pather.origin_cost(start);
    if origin < 0 {
        return None;
    }

    let mut nodes = vec![Node::default(); bounds.len()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    nodes[start_idx].g = origin;
    nodes[start_idx].reached = true;
    open.push(NodeRef {
        idx: start_idx,
        g: origin,
    });

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale entries.
        if nodes[ci].closed || current.g > nodes[ci].g {
            continue;
        }

        if ci == goal_idx {
            return Some(Path {
                cells: reconstruct(&nodes, bounds, goal_idx),
                cost: current.g,
            });
        }

        nodes[ci].closed = true;
        let cp = bounds.point_at(ci);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            let n = &mut nodes[ni];
            if n.closed {
                continue;
            }
            let tentative = current.g.saturating_add(pather.cost(cp, np));
            if n.reached && tentative >= n.g {
                continue;
            }
            n.g = tentative;
            n.reached = true;
            n.parent = ci;
            open.push(NodeRef {
                idx: ni,
                g: tentative,
            });
        }
    }

    log::trace!("no path from {start} to {goal}: frontier exhausted");
    None
}

fn reconstruct(nodes: &[Node], bounds: Range, goal_idx: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        path.push(bounds.point_at(ci));
        ci = nodes[ci].parent;
    }
    path.reverse();
    path
}
