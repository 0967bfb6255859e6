//! Bidirectional node/beam adjacency.
//!
//! [`StructuralRegistry`] is pure bookkeeping: it records which beams
//! touch which nodes and nothing else. Traversal lives in
//! [`traversal`](crate::traversal); bonus accounting lives in
//! [`ledger`](crate::ledger).

use indexmap::IndexMap;
use smallvec::SmallVec;

use trestle_core::{BeamId, NodeId};

/// Incident beam list for one node.
///
/// Nodes rarely anchor more than a handful of beams, so the list stays
/// inline for typical bridges.
pub type IncidentBeams = SmallVec<[BeamId; 4]>;

/// Bidirectional adjacency between nodes and beams.
///
/// # Invariants
///
/// After every public operation:
/// - a beam appears in a node's incident list iff that node is one of
///   the beam's recorded endpoints;
/// - a node with zero incident beams has no entry at all (entries are
///   pruned, never left empty).
///
/// Iteration order over nodes and beams is deterministic (insertion
/// order), which keeps traversal results and emitted command lists
/// reproducible across runs.
#[derive(Clone, Debug, Default)]
pub struct StructuralRegistry {
    incident: IndexMap<NodeId, IncidentBeams>,
    endpoints: IndexMap<BeamId, [NodeId; 2]>,
}

impl StructuralRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a beam between `a` and `b`.
    ///
    /// Adds the beam to both nodes' incident lists, creating entries on
    /// demand. Returns `false` without changing anything if the beam is
    /// already known (redundant edit).
    pub fn link(&mut self, beam: BeamId, a: NodeId, b: NodeId) -> bool {
        if self.endpoints.contains_key(&beam) {
            return false;
        }
        self.endpoints.insert(beam, [a, b]);
        self.incident.entry(a).or_default().push(beam);
        if b != a {
            self.incident.entry(b).or_default().push(beam);
        }
        true
    }

    /// Remove a beam, pruning endpoint entries that become empty.
    ///
    /// Returns the beam's endpoints, or `None` if the beam was unknown
    /// (making repeated unlinks a no-op).
    pub fn unlink(&mut self, beam: BeamId) -> Option<[NodeId; 2]> {
        let ends = self.endpoints.shift_remove(&beam)?;
        for node in dedup_ends(ends) {
            if let Some(list) = self.incident.get_mut(&node) {
                list.retain(|&mut b| b != beam);
                if list.is_empty() {
                    self.incident.shift_remove(&node);
                }
            }
        }
        Some(ends)
    }

    /// The two endpoints of a beam, if it is registered.
    pub fn endpoints(&self, beam: BeamId) -> Option<[NodeId; 2]> {
        self.endpoints.get(&beam).copied()
    }

    /// Beams incident to a node. Empty for unknown nodes.
    pub fn incident(&self, node: NodeId) -> &[BeamId] {
        self.incident.get(&node).map_or(&[], |list| list.as_slice())
    }

    /// Whether the beam is registered.
    pub fn contains_beam(&self, beam: BeamId) -> bool {
        self.endpoints.contains_key(&beam)
    }

    /// Whether the node has at least one incident beam.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.incident.contains_key(&node)
    }

    /// Number of registered beams.
    pub fn beam_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Number of nodes with at least one incident beam.
    pub fn node_count(&self) -> usize {
        self.incident.len()
    }

    /// Iterate over all registered beams in insertion order.
    pub fn beams(&self) -> impl Iterator<Item = BeamId> + '_ {
        self.endpoints.keys().copied()
    }

    /// Iterate over all nodes with incident beams, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.incident.keys().copied()
    }

    /// Drop every beam and node entry.
    pub fn clear(&mut self) {
        self.incident.clear();
        self.endpoints.clear();
    }
}

/// Endpoint pair with a self-loop collapsed to a single node.
fn dedup_ends(ends: [NodeId; 2]) -> impl Iterator<Item = NodeId> {
    let second = (ends[1] != ends[0]).then_some(ends[1]);
    std::iter::once(ends[0]).chain(second)
}
