//! The agent state machine: one decision step per call.

use cruise_core::NodeId;
use cruise_graph::{bfs_order, hop_matrix, shortest_paths_from, GraphError};
use cruise_world::World;

use crate::selector::select_lot;
use crate::{AgentError, AgentResult};

/// An agent driving through the world toward a parking lot near its
/// destination.
///
/// The agent is either **traveling** (its position differs from the chosen
/// lot, or no lot has been chosen yet) or **arrived** (it stands on the lot).
/// Every [`step`](Self::step) re-plans from scratch against the current
/// snapshot: the target lot is recomputed each time, so it may move between
/// steps as traffic shifts — deliberate, continuous re-planning.
///
/// # Step atomicity
///
/// A step either fully completes (snapshot queried, lot selected, path
/// reconstructed, position advanced) or returns an error before any state
/// mutation.  Callers can safely retry a failed step after changing the
/// world.
pub struct Agent {
    current_pos: NodeId,
    destination: NodeId,
    max_walking_dist: f64,
    /// `None` until the first selection has run.
    target_lot: Option<NodeId>,
    /// Remaining planned route, current position first, target lot last.
    path: Vec<NodeId>,
}

impl Agent {
    /// Create an agent at `start` heading to `destination`.
    ///
    /// Both nodes must exist in `world`'s current snapshot, and
    /// `max_walking_dist` must be finite and non-negative.
    pub fn new(
        start: NodeId,
        destination: NodeId,
        max_walking_dist: f64,
        world: &World,
    ) -> AgentResult<Agent> {
        for node in [start, destination] {
            if node.index() >= world.node_count() {
                return Err(AgentError::InvalidNode {
                    node,
                    node_count: world.node_count(),
                });
            }
        }
        if !max_walking_dist.is_finite() || max_walking_dist < 0.0 {
            return Err(AgentError::Config(format!(
                "max_walking_dist must be finite and non-negative (got {max_walking_dist})"
            )));
        }

        Ok(Agent {
            current_pos: start,
            destination,
            max_walking_dist,
            target_lot: None,
            path: Vec::new(),
        })
    }

    /// Execute one decision step: re-plan, pick a lot, advance one hop.
    ///
    /// Returns `true` once the agent stands on its target lot (which can
    /// happen on the very step that selects it, when the agent is already
    /// there).
    pub fn step(&mut self, world: &World) -> AgentResult<bool> {
        let graph = world.current_graph();

        let driving = shortest_paths_from(&graph, self.current_pos)?;
        let walking = hop_matrix(&graph);
        let order = bfs_order(&graph, self.destination)?;

        let target = select_lot(
            world,
            self.destination,
            self.max_walking_dist,
            &driving,
            &walking,
            &order,
        )?;

        let mut path = driving.path_to(target).map_err(|e| match e {
            GraphError::Unreachable { from, to } => AgentError::UnreachableTarget { from, to },
            other => AgentError::Graph(other),
        })?;

        // Commit point — nothing before this line mutated the agent.
        self.target_lot = Some(target);
        if path.len() > 1 {
            path.remove(0);
            self.current_pos = path[0];
        }
        self.path = path;

        let arrived = self.finished();
        if arrived {
            log::info!("agent: arrived at lot {target}");
        } else {
            log::debug!(
                "agent: at {}, heading to lot {target} via {:?}",
                self.current_pos,
                self.path
            );
        }
        Ok(arrived)
    }

    /// `true` iff the agent stands on its chosen lot.  Pure query; always
    /// `false` before the first step.
    pub fn finished(&self) -> bool {
        self.target_lot == Some(self.current_pos)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn current_position(&self) -> NodeId {
        self.current_pos
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn max_walking_dist(&self) -> f64 {
        self.max_walking_dist
    }

    /// The lot chosen by the most recent step, if any.
    pub fn target_lot(&self) -> Option<NodeId> {
        self.target_lot
    }

    /// The remaining planned route: current position first, target lot last.
    /// Empty before the first step.
    pub fn planned_path(&self) -> &[NodeId] {
        &self.path
    }
}
