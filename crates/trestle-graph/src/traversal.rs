//! Cluster discovery over the node/beam bipartite graph.

use std::collections::VecDeque;

use indexmap::IndexSet;

use trestle_core::{BeamId, NodeId};

use crate::registry::StructuralRegistry;

/// Every beam reachable from `start` through registered connections.
///
/// Breadth-first search alternating between a node's incident beams and
/// a beam's far endpoint. Nodes and beams are each visited at most
/// once, so the cost is O(nodes + beams) in the connected component
/// containing `start`. Only a set is returned, so traversal order does
/// not affect the result; the set itself iterates in discovery order,
/// which is deterministic for a given registry.
///
/// Returns an empty set when `start` has no incident beams.
pub fn reachable_beams(registry: &StructuralRegistry, start: NodeId) -> IndexSet<BeamId> {
    let mut beams = IndexSet::new();
    if !registry.contains_node(start) {
        return beams;
    }

    let mut seen_nodes = IndexSet::new();
    let mut queue = VecDeque::new();
    seen_nodes.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for &beam in registry.incident(node) {
            if !beams.insert(beam) {
                continue;
            }
            let Some(ends) = registry.endpoints(beam) else {
                continue;
            };
            for end in ends {
                if seen_nodes.insert(end) {
                    queue.push_back(end);
                }
            }
        }
    }

    beams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beam(i: u32) -> BeamId {
        BeamId::new(i, 0)
    }

    /// A–b0–B–b1–C path plus a detached D–b2–E pair.
    fn two_clusters() -> StructuralRegistry {
        let mut reg = StructuralRegistry::new();
        reg.link(beam(0), NodeId(0), NodeId(1));
        reg.link(beam(1), NodeId(1), NodeId(2));
        reg.link(beam(2), NodeId(3), NodeId(4));
        reg
    }

    #[test]
    fn isolated_node_yields_empty_set() {
        let reg = two_clusters();
        assert!(reachable_beams(&reg, NodeId(99)).is_empty());
    }

    #[test]
    fn path_is_fully_discovered_from_either_end() {
        let reg = two_clusters();
        for start in [NodeId(0), NodeId(1), NodeId(2)] {
            let cluster = reachable_beams(&reg, start);
            assert_eq!(cluster.len(), 2, "start {start}");
            assert!(cluster.contains(&beam(0)));
            assert!(cluster.contains(&beam(1)));
        }
    }

    #[test]
    fn disconnected_cluster_is_not_reached() {
        let reg = two_clusters();
        let cluster = reachable_beams(&reg, NodeId(0));
        assert!(!cluster.contains(&beam(2)));
        let other = reachable_beams(&reg, NodeId(3));
        assert_eq!(other.len(), 1);
        assert!(other.contains(&beam(2)));
    }

    #[test]
    fn cycle_terminates_and_covers_all_beams() {
        let mut reg = StructuralRegistry::new();
        reg.link(beam(0), NodeId(0), NodeId(1));
        reg.link(beam(1), NodeId(1), NodeId(2));
        reg.link(beam(2), NodeId(2), NodeId(0));
        let cluster = reachable_beams(&reg, NodeId(0));
        assert_eq!(cluster.len(), 3);
    }

    #[test]
    fn parallel_beams_are_all_discovered() {
        let mut reg = StructuralRegistry::new();
        reg.link(beam(0), NodeId(0), NodeId(1));
        reg.link(beam(1), NodeId(0), NodeId(1));
        let cluster = reachable_beams(&reg, NodeId(0));
        assert_eq!(cluster.len(), 2);
    }

    #[test]
    fn unlink_splits_the_cluster() {
        let mut reg = two_clusters();
        reg.unlink(beam(1));
        let cluster = reachable_beams(&reg, NodeId(0));
        assert_eq!(cluster.len(), 1);
        assert!(cluster.contains(&beam(0)));
        assert!(reachable_beams(&reg, NodeId(2)).is_empty());
    }
}
