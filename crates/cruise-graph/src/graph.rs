//! Street-graph snapshot and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_weight`) are sorted by
//! source node and indexed by `EdgeId`.  Iteration over a node's outgoing
//! edges is therefore a contiguous memory scan — ideal for the Dijkstra and
//! BFS inner loops.
//!
//! # Snapshot semantics
//!
//! A `StreetGraph` is immutable once built.  The environment publishes a new
//! snapshot on every traffic refresh; it never mutates one in place, so a
//! snapshot handed to an in-progress step stays valid for the whole step.

use cruise_core::{EdgeId, NodeId};

use crate::{GraphError, GraphResult};

// ── StreetGraph ───────────────────────────────────────────────────────────────

/// Directed weighted street graph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`StreetGraphBuilder`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetGraph {
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge.  Redundant with CSR but convenient for
    /// edge-wise iteration and tests.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Traversal cost of each edge (e.g. driving time).  Finite and
    /// non-negative; the builder rejects anything else.
    pub edge_weight: Vec<f64>,
}

impl StreetGraph {
    /// Construct an empty graph with no nodes or edges.
    pub fn empty() -> Self {
        StreetGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// `true` iff `node` is a valid node of this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Validate that `node` is in range, with an explicit error otherwise.
    pub fn check_node(&self, node: NodeId) -> GraphResult<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                node,
                node_count: self.node_count(),
            })
        }
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Weight of the directed edge `from -> to`, or `None` if absent.
    pub fn edge_weight_between(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.out_edges(from)
            .find(|&e| self.edge_to[e.index()] == to)
            .map(|e| self.edge_weight[e.index()])
    }

    /// `true` iff the directed edge `from -> to` exists.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edge_weight_between(from, to).is_some()
    }
}

// ── StreetGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`StreetGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts directed edges in any order.  `build()` sorts edges by
/// source node (stable, so insertion order within one source is preserved —
/// traversal tie-breaks depend on this) and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use cruise_graph::StreetGraphBuilder;
///
/// let mut b = StreetGraphBuilder::with_nodes(2);
/// let (a, c) = (b.node(0), b.node(1));
/// b.add_street(a, c, 1.5, 2.0)?; // both directions, independent weights
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), cruise_graph::GraphError>(())
/// ```
pub struct StreetGraphBuilder {
    node_count: usize,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    weight: f64,
}

impl StreetGraphBuilder {
    pub fn new() -> Self {
        Self { node_count: 0, raw_edges: Vec::new() }
    }

    /// Start from a fixed dense node set `0..n`.
    pub fn with_nodes(n: usize) -> Self {
        Self { node_count: n, raw_edges: Vec::new() }
    }

    /// Add one node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count as u32);
        self.node_count += 1;
        id
    }

    /// The `NodeId` for index `i` (must be `< node_count`).
    pub fn node(&self, i: usize) -> NodeId {
        NodeId(i as u32)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Add a **directed** edge `from -> to` with the given traversal cost.
    ///
    /// Rejects out-of-range nodes, self-loops, and weights that are negative
    /// or non-finite.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> GraphResult<()> {
        for node in [from, to] {
            if node.index() >= self.node_count {
                return Err(GraphError::InvalidNode { node, node_count: self.node_count });
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        self.raw_edges.push(RawEdge { from, to, weight });
        Ok(())
    }

    /// Convenience: add a two-way street between `a` and `b` with independent
    /// per-direction weights (the common case for urban traffic).
    pub fn add_street(&mut self, a: NodeId, b: NodeId, w_ab: f64, w_ba: f64) -> GraphResult<()> {
        self.add_directed_edge(a, b, w_ab)?;
        self.add_directed_edge(b, a, w_ba)
    }

    /// Consume the builder and produce a [`StreetGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort, where E = edges.
    pub fn build(self) -> StreetGraph {
        let node_count = self.node_count;
        let edge_count = self.raw_edges.len();

        // Stable sort: insertion order within one source node is preserved,
        // which makes traversal order reproducible for identical input.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64> = raw.iter().map(|e| e.weight).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        StreetGraph {
            node_out_start,
            edge_from,
            edge_to,
            edge_weight,
        }
    }
}

impl Default for StreetGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
