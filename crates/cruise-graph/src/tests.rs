//! Unit tests for cruise-graph.
//!
//! All tests use hand-crafted graphs so expected distances are exact.

#[cfg(test)]
mod helpers {
    use crate::{StreetGraph, StreetGraphBuilder};
    use cruise_core::NodeId;

    /// Build a small weighted test graph with two competing routes.
    ///
    /// Nodes 0..5, two-way streets:
    ///
    ///   0 -1.0- 1 -1.0- 2 -1.0- 4
    ///   0 -5.0- 3 -1.0- 4
    ///
    /// Shortest 0→4 by weight: 0→1→2→4 = 3.0 (vs 0→3→4 = 6.0).
    /// Fewest hops 0→4: 0→3→4 = 2 hops (vs 3 hops via 1, 2).
    pub fn two_route_graph() -> (StreetGraph, [NodeId; 5]) {
        let mut b = StreetGraphBuilder::with_nodes(5);
        let [n0, n1, n2, n3, n4] = [b.node(0), b.node(1), b.node(2), b.node(3), b.node(4)];

        b.add_street(n0, n1, 1.0, 1.0).unwrap();
        b.add_street(n1, n2, 1.0, 1.0).unwrap();
        b.add_street(n2, n4, 1.0, 1.0).unwrap();
        b.add_street(n0, n3, 5.0, 5.0).unwrap();
        b.add_street(n3, n4, 1.0, 1.0).unwrap();

        (b.build(), [n0, n1, n2, n3, n4])
    }

    /// Directed 4-cycle 0→1→2→3→0, every weight 1.0.
    pub fn four_cycle() -> (StreetGraph, [NodeId; 4]) {
        let mut b = StreetGraphBuilder::with_nodes(4);
        let [n0, n1, n2, n3] = [b.node(0), b.node(1), b.node(2), b.node(3)];

        b.add_directed_edge(n0, n1, 1.0).unwrap();
        b.add_directed_edge(n1, n2, 1.0).unwrap();
        b.add_directed_edge(n2, n3, 1.0).unwrap();
        b.add_directed_edge(n3, n0, 1.0).unwrap();

        (b.build(), [n0, n1, n2, n3])
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use crate::{GraphError, StreetGraph, StreetGraphBuilder};
    use cruise_core::NodeId;

    #[test]
    fn empty_build() {
        let graph = StreetGraph::empty();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn street_is_bidirectional() {
        let mut b = StreetGraphBuilder::with_nodes(2);
        b.add_street(b.node(0), b.node(1), 1.5, 2.5).unwrap();
        let graph = b.build();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight_between(NodeId(0), NodeId(1)), Some(1.5));
        assert_eq!(graph.edge_weight_between(NodeId(1), NodeId(0)), Some(2.5));
    }

    #[test]
    fn csr_out_edges() {
        let (graph, [n0, n1, n2, n3, n4]) = super::helpers::two_route_graph();

        assert_eq!(graph.out_degree(n0), 2); // n0→n1, n0→n3
        assert_eq!(graph.out_degree(n1), 2); // n1→n0, n1→n2
        assert_eq!(graph.out_degree(n2), 2);
        assert_eq!(graph.out_degree(n3), 2);
        assert_eq!(graph.out_degree(n4), 2); // n4→n2, n4→n3

        // Every outgoing edge of n0 has n0 as its source.
        for e in graph.out_edges(n0) {
            assert_eq!(graph.edge_from[e.index()], n0);
        }
    }

    #[test]
    fn directed_only_edge() {
        let mut b = StreetGraphBuilder::with_nodes(2);
        b.add_directed_edge(b.node(0), b.node(1), 1.0).unwrap();
        let graph = b.build();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(NodeId(0), NodeId(1)));
        assert!(!graph.has_edge(NodeId(1), NodeId(0)));
    }

    #[test]
    fn rejects_self_loop() {
        let mut b = StreetGraphBuilder::with_nodes(2);
        let err = b.add_directed_edge(b.node(0), b.node(0), 1.0).unwrap_err();
        assert!(matches!(err, GraphError::SelfLoop(n) if n == NodeId(0)));
    }

    #[test]
    fn rejects_bad_weights() {
        let mut b = StreetGraphBuilder::with_nodes(2);
        let (a, c) = (b.node(0), b.node(1));
        assert!(matches!(
            b.add_directed_edge(a, c, -1.0),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            b.add_directed_edge(a, c, f64::NAN),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            b.add_directed_edge(a, c, f64::INFINITY),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_node() {
        let mut b = StreetGraphBuilder::with_nodes(2);
        let err = b.add_directed_edge(b.node(0), NodeId(9), 1.0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidNode { node_count: 2, .. }));
    }

    #[test]
    fn check_node() {
        let (graph, _) = super::helpers::two_route_graph();
        assert!(graph.check_node(NodeId(4)).is_ok());
        assert!(matches!(
            graph.check_node(NodeId(5)),
            Err(GraphError::InvalidNode { node_count: 5, .. })
        ));
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use crate::{shortest_paths_from, GraphError, StreetGraphBuilder};
    use cruise_core::NodeId;

    #[test]
    fn origin_distance_is_zero() {
        let (graph, [n0, ..]) = super::helpers::two_route_graph();
        let paths = shortest_paths_from(&graph, n0).unwrap();
        assert_eq!(paths.origin(), n0);
        assert_eq!(paths.distance(n0), 0.0);
        assert_eq!(paths.predecessor(n0), None);
    }

    #[test]
    fn picks_cheaper_route() {
        let (graph, [n0, _, n2, _, n4]) = super::helpers::two_route_graph();
        let paths = shortest_paths_from(&graph, n0).unwrap();
        assert_eq!(paths.distance(n4), 3.0);
        assert_eq!(paths.predecessor(n4), Some(n2));
    }

    #[test]
    fn triangle_inequality_along_edges() {
        let (graph, [n0, ..]) = super::helpers::two_route_graph();
        let paths = shortest_paths_from(&graph, n0).unwrap();
        for e in 0..graph.edge_count() {
            let (u, v) = (graph.edge_from[e], graph.edge_to[e]);
            let w = graph.edge_weight[e];
            assert!(
                paths.distance(v) <= paths.distance(u) + w + 1e-12,
                "dist[{v}] > dist[{u}] + w({u},{v})"
            );
        }
    }

    #[test]
    fn unreachable_is_infinite() {
        // 0→1 one-way plus an isolated node 2.
        let mut b = StreetGraphBuilder::with_nodes(3);
        b.add_directed_edge(b.node(0), b.node(1), 1.0).unwrap();
        let graph = b.build();

        let paths = shortest_paths_from(&graph, NodeId(0)).unwrap();
        assert!(paths.distance(NodeId(2)).is_infinite());
        assert_eq!(paths.predecessor(NodeId(2)), None);
        assert!(!paths.is_reachable(NodeId(2)));
    }

    #[test]
    fn respects_edge_direction() {
        let (graph, [n0, _, _, n3]) = super::helpers::four_cycle();
        let paths = shortest_paths_from(&graph, n0).unwrap();
        // Only the cycle direction is available: 0→1→2→3 costs 3.
        assert_eq!(paths.distance(n3), 3.0);
    }

    #[test]
    fn invalid_origin_errors() {
        let (graph, _) = super::helpers::two_route_graph();
        assert!(matches!(
            shortest_paths_from(&graph, NodeId(99)),
            Err(GraphError::InvalidNode { .. })
        ));
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

#[cfg(test)]
mod path_to {
    use crate::{shortest_paths_from, GraphError, StreetGraphBuilder};
    use cruise_core::NodeId;

    #[test]
    fn roundtrip_endpoints_and_edges() {
        let (graph, [n0, _, _, _, n4]) = super::helpers::two_route_graph();
        let paths = shortest_paths_from(&graph, n0).unwrap();
        let path = paths.path_to(n4).unwrap();

        assert_eq!(path.first(), Some(&n0));
        assert_eq!(path.last(), Some(&n4));
        for pair in path.windows(2) {
            assert!(graph.has_edge(pair[0], pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn target_equals_origin() {
        let (graph, [n0, ..]) = super::helpers::two_route_graph();
        let paths = shortest_paths_from(&graph, n0).unwrap();
        assert_eq!(paths.path_to(n0).unwrap(), vec![n0]);
    }

    #[test]
    fn unreachable_target_errors() {
        let mut b = StreetGraphBuilder::with_nodes(4);
        // Two disconnected components: {0,1} and {2,3}.
        b.add_street(b.node(0), b.node(1), 1.0, 1.0).unwrap();
        b.add_street(b.node(2), b.node(3), 1.0, 1.0).unwrap();
        let graph = b.build();

        let paths = shortest_paths_from(&graph, NodeId(0)).unwrap();
        let err = paths.path_to(NodeId(3)).unwrap_err();
        assert!(
            matches!(err, GraphError::Unreachable { from, to } if from == NodeId(0) && to == NodeId(3))
        );
    }

    #[test]
    fn out_of_range_target_errors() {
        let (graph, [n0, ..]) = super::helpers::two_route_graph();
        let paths = shortest_paths_from(&graph, n0).unwrap();
        assert!(matches!(
            paths.path_to(NodeId(50)),
            Err(GraphError::InvalidNode { .. })
        ));
    }
}

// ── Hop matrix ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod hops {
    use crate::{hop_matrix, StreetGraphBuilder};
    use cruise_core::NodeId;

    #[test]
    fn diagonal_is_zero() {
        let (graph, nodes) = super::helpers::two_route_graph();
        let hops = hop_matrix(&graph);
        assert_eq!(hops.node_count(), 5);
        for &n in &nodes {
            assert_eq!(hops.hops(n, n), Some(0));
        }
    }

    #[test]
    fn ignores_weights() {
        let (graph, [n0, _, _, _, n4]) = super::helpers::two_route_graph();
        let hops = hop_matrix(&graph);
        // The weight-expensive route 0→3→4 is the hop-cheap one.
        assert_eq!(hops.hops(n0, n4), Some(2));
    }

    #[test]
    fn directed_input_is_asymmetric() {
        let mut b = StreetGraphBuilder::with_nodes(3);
        // 0→1→2 one-way, plus a direct return 2→0.
        b.add_directed_edge(b.node(0), b.node(1), 1.0).unwrap();
        b.add_directed_edge(b.node(1), b.node(2), 1.0).unwrap();
        b.add_directed_edge(b.node(2), b.node(0), 1.0).unwrap();
        let graph = b.build();

        let hops = hop_matrix(&graph);
        assert_eq!(hops.hops(NodeId(0), NodeId(2)), Some(2));
        assert_eq!(hops.hops(NodeId(2), NodeId(0)), Some(1));
    }

    #[test]
    fn unreachable_pair_is_none() {
        let mut b = StreetGraphBuilder::with_nodes(3);
        b.add_directed_edge(b.node(0), b.node(1), 1.0).unwrap();
        let graph = b.build();

        let hops = hop_matrix(&graph);
        assert_eq!(hops.hops(NodeId(1), NodeId(0)), None);
        assert_eq!(hops.hops(NodeId(0), NodeId(2)), None);
        assert_eq!(hops.hops(NodeId(2), NodeId(0)), None);
    }
}

// ── BFS order ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bfs {
    use crate::{bfs_order, hop_matrix, GraphError, StreetGraphBuilder};
    use cruise_core::NodeId;

    #[test]
    fn starts_at_origin_in_layer_order() {
        let (graph, [n0, ..]) = super::helpers::two_route_graph();
        let order = bfs_order(&graph, n0).unwrap();
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], n0);

        // Hop distances along the order never decrease.
        let hops = hop_matrix(&graph);
        let dists: Vec<u32> = order.iter().map(|&n| hops.hops(n0, n).unwrap()).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]), "{dists:?}");
    }

    #[test]
    fn visits_each_reachable_node_once() {
        let (graph, [n0, ..]) = super::helpers::four_cycle();
        let order = bfs_order(&graph, n0).unwrap();
        let mut sorted = order.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), order.len());
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn origin_without_out_edges() {
        let mut b = StreetGraphBuilder::with_nodes(3);
        b.add_directed_edge(b.node(0), b.node(1), 1.0).unwrap();
        let graph = b.build();
        // Node 2 has no outgoing edges at all.
        assert_eq!(bfs_order(&graph, NodeId(2)).unwrap(), vec![NodeId(2)]);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let (g1, [n0, ..]) = super::helpers::two_route_graph();
        let (g2, _) = super::helpers::two_route_graph();
        assert_eq!(bfs_order(&g1, n0).unwrap(), bfs_order(&g2, n0).unwrap());
    }

    #[test]
    fn invalid_origin_errors() {
        let (graph, _) = super::helpers::two_route_graph();
        assert!(matches!(
            bfs_order(&graph, NodeId(77)),
            Err(GraphError::InvalidNode { .. })
        ));
    }
}
