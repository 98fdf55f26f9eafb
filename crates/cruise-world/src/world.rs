//! The simulation environment: street graph snapshot plus parking lots.
//!
//! # Snapshot publication
//!
//! The current graph lives behind an `Arc` and is replaced wholesale on every
//! [`World::refresh`] — never mutated in place.  A caller that clones the
//! `Arc` at the start of a step therefore holds a stable snapshot for the
//! whole step, no matter how many refreshes happen afterwards.
//!
//! # What a refresh changes
//!
//! Only edge weights.  The grid topology is rebuilt identically, and the
//! parking-lot table (chosen once at construction) is untouched, mirroring a
//! city where traffic shifts but streets and garages stay put.

use std::sync::Arc;

use rand::seq::index;
use rustc_hash::FxHashMap;

use cruise_core::{NodeId, SimRng};
use cruise_graph::{GraphResult, StreetGraph, StreetGraphBuilder};

use crate::{WorldConfig, WorldError, WorldResult};

// ── World ─────────────────────────────────────────────────────────────────────

/// How this world obtains new snapshots.
#[derive(Debug)]
enum Source {
    /// Generated grid: refresh redraws every edge weight from `rng`.
    Grid { config: WorldConfig, rng: SimRng },
    /// Caller-supplied graph: the snapshot is permanent.
    Fixed,
}

/// The environment an agent drives through.
#[derive(Debug)]
pub struct World {
    graph: Arc<StreetGraph>,
    /// Parking-lot node → cost.  Fixed for the lifetime of the world.
    lots: FxHashMap<NodeId, f64>,
    source: Source,
}

impl World {
    /// Generate a grid world from `config`, deterministically from `seed`.
    pub fn generate(config: WorldConfig, seed: u64) -> WorldResult<World> {
        config.validate()?;

        let mut rng = SimRng::new(seed);
        let graph = grid_graph(&config, &mut rng)?;
        let lots = sample_lots(&config, &mut rng);

        let mut lot_nodes: Vec<NodeId> = lots.keys().copied().collect();
        lot_nodes.sort();
        log::info!(
            "world: {}x{} grid, {} edges, lots at {:?}",
            config.rows,
            config.cols,
            graph.edge_count(),
            lot_nodes
        );

        Ok(World {
            graph: Arc::new(graph),
            lots,
            source: Source::Grid { config, rng },
        })
    }

    /// Build a world around a caller-supplied snapshot and lot table.
    ///
    /// Every lot node must exist in `graph` and carry a finite, non-negative
    /// cost.  `refresh` on such a world keeps the snapshot as-is.
    pub fn with_lots(graph: StreetGraph, lots: &[(NodeId, f64)]) -> WorldResult<World> {
        let mut table = FxHashMap::default();
        for &(node, cost) in lots {
            graph.check_node(node)?;
            if !cost.is_finite() || cost < 0.0 {
                return Err(WorldError::Config(format!(
                    "lot {node} has invalid cost {cost}"
                )));
            }
            table.insert(node, cost);
        }
        Ok(World {
            graph: Arc::new(graph),
            lots: table,
            source: Source::Fixed,
        })
    }

    // ── Snapshot access ───────────────────────────────────────────────────

    /// The graph currently in effect.  The returned `Arc` stays valid and
    /// unchanged across any number of later refreshes.
    pub fn current_graph(&self) -> Arc<StreetGraph> {
        Arc::clone(&self.graph)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Replace the snapshot with freshly drawn traffic on the same topology.
    ///
    /// Parking lots are untouched.  Fixed-graph worlds keep their snapshot.
    pub fn refresh(&mut self) -> WorldResult<()> {
        match &mut self.source {
            Source::Grid { config, rng } => {
                let graph = grid_graph(config, rng)?;
                self.graph = Arc::new(graph);
                log::debug!("world: redrew traffic on {} edges", self.graph.edge_count());
            }
            Source::Fixed => {
                log::debug!("world: fixed snapshot, nothing to refresh");
            }
        }
        Ok(())
    }

    // ── Parking lots ──────────────────────────────────────────────────────

    /// `true` iff `node` is one of the fixed parking-lot locations.
    pub fn is_parking_lot(&self, node: NodeId) -> bool {
        self.lots.contains_key(&node)
    }

    /// The configured cost of the lot at `node`.
    pub fn cost_of_lot(&self, node: NodeId) -> WorldResult<f64> {
        self.lots
            .get(&node)
            .copied()
            .ok_or(WorldError::NotParkingLot(node))
    }

    /// All parking-lot nodes, in ascending order.
    pub fn parking_lot_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.lots.keys().copied().collect();
        nodes.sort();
        nodes
    }

    pub fn lot_count(&self) -> usize {
        self.lots.len()
    }
}

// ── Generation internals ──────────────────────────────────────────────────────

/// Build the rows×cols 4-neighbor grid with fresh per-direction weights.
///
/// Every undirected neighbor pair gets two directed edges with independent
/// uniform weights in `[weight_low, weight_high)`.
fn grid_graph(config: &WorldConfig, rng: &mut SimRng) -> GraphResult<StreetGraph> {
    let mut b = StreetGraphBuilder::with_nodes(config.node_count());

    for r in 0..config.rows {
        for c in 0..config.cols {
            let u = b.node(r * config.cols + c);
            if c + 1 < config.cols {
                let right = b.node(r * config.cols + c + 1);
                let (w_out, w_back) = (draw_weight(config, rng), draw_weight(config, rng));
                b.add_street(u, right, w_out, w_back)?;
            }
            if r + 1 < config.rows {
                let down = b.node((r + 1) * config.cols + c);
                let (w_out, w_back) = (draw_weight(config, rng), draw_weight(config, rng));
                b.add_street(u, down, w_out, w_back)?;
            }
        }
    }

    Ok(b.build())
}

#[inline]
fn draw_weight(config: &WorldConfig, rng: &mut SimRng) -> f64 {
    rng.gen_range(config.weight_low..config.weight_high)
}

/// Sample `lot_count` distinct lot nodes with uniform costs.
fn sample_lots(config: &WorldConfig, rng: &mut SimRng) -> FxHashMap<NodeId, f64> {
    let mut lots = FxHashMap::default();
    let picked = index::sample(rng.inner(), config.node_count(), config.lot_count);
    for idx in picked.into_iter() {
        let cost = rng.gen_range(config.cost_low..config.cost_high);
        lots.insert(NodeId(idx as u32), cost);
    }
    lots
}
