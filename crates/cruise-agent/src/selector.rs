//! Parking-lot selection policy.
//!
//! The selector trades off three signals:
//!
//! - **walking**: hop count from the lot to the destination (pedestrians
//!   ignore driving traffic, so a hop is the unit of walking cost);
//! - **driving**: weighted shortest-path distance from the agent's current
//!   position to the lot;
//! - **price**: the lot's configured cost.
//!
//! Lots within the walking threshold are ranked by driving distance, then
//! cost, then node id — a total order, so selection is deterministic and
//! idempotent.  When no lot is within walking range the policy compromises:
//! it takes the lot the destination's breadth-first traversal reaches first,
//! ignoring price entirely.

use ordered_float::OrderedFloat;

use cruise_core::NodeId;
use cruise_graph::{HopMatrix, ShortestPaths};
use cruise_world::World;

use crate::{AgentError, AgentResult};

/// Choose a parking lot for an agent heading to `destination`.
///
/// `candidates` must be the breadth-first traversal order from the
/// destination ([`cruise_graph::bfs_order`]); it bounds the candidate set to
/// lots the destination can reach and provides the fallback ordering.
/// `driving` must originate at the agent's current position.
///
/// Lots unreachable from the agent are not excluded — infinite driving
/// distance ranks them last, and an unreachable winner surfaces as a
/// reconstruction failure in the caller rather than a silent substitution.
///
/// Returns [`AgentError::NoLotAvailable`] when the candidate set contains no
/// parking lot at all.
pub fn select_lot(
    world: &World,
    destination: NodeId,
    max_walking_dist: f64,
    driving: &ShortestPaths,
    walking: &HopMatrix,
    candidates: &[NodeId],
) -> AgentResult<NodeId> {
    // Lots whose walk to the destination is acceptable.
    let mut near: Vec<(NodeId, f64, f64)> = Vec::new();
    for &node in candidates {
        if !world.is_parking_lot(node) {
            continue;
        }
        let Some(hops) = walking.hops(node, destination) else {
            continue;
        };
        if f64::from(hops) <= max_walking_dist {
            near.push((node, driving.distance(node), world.cost_of_lot(node)?));
        }
    }

    if !near.is_empty() {
        near.sort_by_key(|&(node, dist, cost)| (OrderedFloat(dist), OrderedFloat(cost), node));
        let (lot, dist, cost) = near[0];
        log::debug!(
            "selector: {lot} within walking range of {destination} \
             (driving distance {dist:.3}, cost {cost:.2})"
        );
        return Ok(lot);
    }

    // No lot within walking range: compromise on the lot the destination's
    // traversal reaches first, whatever it costs.
    match candidates.iter().copied().find(|&n| world.is_parking_lot(n)) {
        Some(lot) => {
            log::debug!("selector: no lot within walking range of {destination}, compromise {lot}");
            Ok(lot)
        }
        None => Err(AgentError::NoLotAvailable),
    }
}
