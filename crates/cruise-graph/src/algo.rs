//! Graph algorithms over a [`StreetGraph`] snapshot.
//!
//! Three computations feed the agent's decision loop:
//!
//! | Function                | Answers                                         |
//! |-------------------------|-------------------------------------------------|
//! | [`shortest_paths_from`] | weighted driving distance + predecessor chains  |
//! | [`hop_matrix`]          | all-pairs hop counts (the walking approximation)|
//! | [`bfs_order`]           | traversal order from the destination            |
//!
//! All three are pure functions of the snapshot: deterministic, no shared
//! state.  Ties in the Dijkstra heap break on `NodeId`; ties within a BFS
//! layer break on CSR edge order.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use ordered_float::OrderedFloat;

use cruise_core::NodeId;

use crate::graph::StreetGraph;
use crate::{GraphError, GraphResult};

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// Single-source shortest-path result: weighted distances and predecessor
/// chains from one origin to every node.
///
/// Unreachable nodes have distance `f64::INFINITY` and no predecessor.  The
/// origin itself has distance `0.0` and no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    origin: NodeId,
    dist: Vec<f64>,
    pred: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Shortest weighted distance from the origin to `node`.
    ///
    /// `f64::INFINITY` means unreachable.
    ///
    /// # Panics
    /// Panics if `node` is out of range for the queried graph, like slice
    /// indexing.
    #[inline]
    pub fn distance(&self, node: NodeId) -> f64 {
        self.dist[node.index()]
    }

    /// Predecessor of `node` on its shortest path, or `None` for the origin
    /// and for unreachable nodes.
    ///
    /// # Panics
    /// Panics if `node` is out of range, like slice indexing.
    #[inline]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.pred[node.index()]
    }

    /// `true` iff a path from the origin to `node` exists.
    #[inline]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.dist[node.index()].is_finite()
    }

    /// Reconstruct the shortest path from the origin to `target` by walking
    /// the predecessor chain backward, then reversing into forward order.
    ///
    /// The result starts at the origin and ends at `target`; `target ==
    /// origin` yields a single-element path.  Returns
    /// [`GraphError::Unreachable`] when no predecessor chain connects the two
    /// — an explicit failure instead of a sentinel-following loop.
    pub fn path_to(&self, target: NodeId) -> GraphResult<Vec<NodeId>> {
        if target.index() >= self.dist.len() {
            return Err(GraphError::InvalidNode {
                node: target,
                node_count: self.dist.len(),
            });
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.pred[current.index()] {
            path.push(prev);
            current = prev;
        }
        if current != self.origin {
            return Err(GraphError::Unreachable { from: self.origin, to: target });
        }
        path.reverse();
        Ok(path)
    }
}

/// Single-source shortest paths under directed edge weights (Dijkstra).
///
/// Requires the snapshot's non-negative weights (the builder guarantees
/// them).  The heap carries `(cost, NodeId)` so equal-cost pops resolve in
/// `NodeId` order — deterministic for identical input.
pub fn shortest_paths_from(graph: &StreetGraph, origin: NodeId) -> GraphResult<ShortestPaths> {
    graph.check_node(origin)?;

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<NodeId>> = vec![None; n];
    dist[origin.index()] = 0.0;

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), origin)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        let cost = cost.into_inner();

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            let next = cost + graph.edge_weight[edge.index()];

            if next < dist[neighbor.index()] {
                dist[neighbor.index()] = next;
                pred[neighbor.index()] = Some(node);
                heap.push(Reverse((OrderedFloat(next), neighbor)));
            }
        }
    }

    Ok(ShortestPaths { origin, dist, pred })
}

// ── HopMatrix ─────────────────────────────────────────────────────────────────

/// All-pairs minimum hop counts, directed, ignoring edge weights.
///
/// Used to approximate walking distance: pedestrians ignore driving traffic,
/// so a hop is a unit of walking cost.  Stored row-major; `hops(i, j)` and
/// `hops(j, i)` can differ when the directed edges differ.
#[derive(Debug, Clone)]
pub struct HopMatrix {
    n: usize,
    hops: Vec<u32>,
}

/// Internal unreachable marker in the flat storage.
const NO_PATH: u32 = u32::MAX;

impl HopMatrix {
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Minimum hop count `from -> to`, or `None` if unreachable.
    ///
    /// # Panics
    /// Panics if either node is out of range, like slice indexing.
    pub fn hops(&self, from: NodeId, to: NodeId) -> Option<u32> {
        assert!(
            from.index() < self.n && to.index() < self.n,
            "node out of range for {}-node hop matrix",
            self.n
        );
        match self.hops[from.index() * self.n + to.index()] {
            NO_PATH => None,
            h => Some(h),
        }
    }
}

/// All-pairs unweighted distances, computed as one breadth-first sweep per
/// origin over the CSR adjacency — O(N·(N+E)), equivalent to an unweighted
/// Floyd–Warshall but cheaper on sparse street graphs.
pub fn hop_matrix(graph: &StreetGraph) -> HopMatrix {
    let n = graph.node_count();
    let mut hops = vec![NO_PATH; n * n];
    let mut queue = VecDeque::new();

    for origin in 0..n {
        let row = origin * n;
        hops[row + origin] = 0;
        queue.clear();
        queue.push_back(NodeId(origin as u32));

        while let Some(node) = queue.pop_front() {
            let d = hops[row + node.index()];
            for edge in graph.out_edges(node) {
                let neighbor = graph.edge_to[edge.index()];
                if hops[row + neighbor.index()] == NO_PATH {
                    hops[row + neighbor.index()] = d + 1;
                    queue.push_back(neighbor);
                }
            }
        }
    }

    HopMatrix { n, hops }
}

// ── BFS order ─────────────────────────────────────────────────────────────────

/// Breadth-first traversal order from `origin`, following edge direction.
///
/// Every node reachable from `origin` appears exactly once, in non-decreasing
/// hop order; `origin` is always first.  Within one layer, nodes appear in
/// CSR edge order (stable for identical input).  An origin with no outgoing
/// edges yields just `[origin]`.
pub fn bfs_order(graph: &StreetGraph, origin: NodeId) -> GraphResult<Vec<NodeId>> {
    graph.check_node(origin)?;

    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[origin.index()] = true;
    queue.push_back(origin);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            if !visited[neighbor.index()] {
                visited[neighbor.index()] = true;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(order)
}
