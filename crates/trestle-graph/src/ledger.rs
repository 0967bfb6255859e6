//! Per-beam support-bonus accounting.
//!
//! [`BonusLedger`] records which supporting nodes have already credited
//! which beams. It is the source of idempotency for the propagation
//! engine: a (node, beam) pair is credited at most once, and revoking a
//! pair that was never credited changes nothing.
//!
//! The ledger is bidirectional. The forward map (beam → nodes) answers
//! "how strong should this beam be"; the reverse map (node → beams)
//! answers "which beams carry this node's bonus" so that revocation can
//! walk exactly the credited set instead of re-traversing a graph that
//! may have lost edges since the bonus was applied.

use indexmap::{IndexMap, IndexSet};

use trestle_core::{BeamId, NodeId};

/// Exactly-once bonus accounting between supporting nodes and beams.
#[derive(Clone, Debug, Default)]
pub struct BonusLedger {
    by_beam: IndexMap<BeamId, IndexSet<NodeId>>,
    by_node: IndexMap<NodeId, IndexSet<BeamId>>,
}

impl BonusLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an (empty) entry for a newly registered beam.
    ///
    /// Idempotent: an existing entry is left untouched.
    pub fn track(&mut self, beam: BeamId) {
        self.by_beam.entry(beam).or_default();
    }

    /// Drop a beam's entry entirely, both directions.
    ///
    /// No-op for untracked beams.
    pub fn untrack(&mut self, beam: BeamId) {
        let Some(nodes) = self.by_beam.shift_remove(&beam) else {
            return;
        };
        for node in nodes {
            if let Some(beams) = self.by_node.get_mut(&node) {
                beams.shift_remove(&beam);
                if beams.is_empty() {
                    self.by_node.shift_remove(&node);
                }
            }
        }
    }

    /// Record `node`'s bonus on `beam`.
    ///
    /// Returns `true` if the pair was newly credited, `false` if the
    /// beam is untracked or the pair was already credited.
    pub fn credit(&mut self, beam: BeamId, node: NodeId) -> bool {
        let Some(nodes) = self.by_beam.get_mut(&beam) else {
            return false;
        };
        if !nodes.insert(node) {
            return false;
        }
        self.by_node.entry(node).or_default().insert(beam);
        true
    }

    /// Remove `node`'s bonus from `beam`.
    ///
    /// Returns `true` if the pair was credited, `false` otherwise.
    pub fn revoke(&mut self, beam: BeamId, node: NodeId) -> bool {
        let Some(nodes) = self.by_beam.get_mut(&beam) else {
            return false;
        };
        if !nodes.shift_remove(&node) {
            return false;
        }
        if let Some(beams) = self.by_node.get_mut(&node) {
            beams.shift_remove(&beam);
            if beams.is_empty() {
                self.by_node.shift_remove(&node);
            }
        }
        true
    }

    /// Whether `node`'s bonus is currently applied to `beam`.
    pub fn is_credited(&self, beam: BeamId, node: NodeId) -> bool {
        self.by_beam
            .get(&beam)
            .is_some_and(|nodes| nodes.contains(&node))
    }

    /// Number of distinct supporting nodes credited to `beam`.
    ///
    /// Zero for untracked beams.
    pub fn supporter_count(&self, beam: BeamId) -> usize {
        self.by_beam.get(&beam).map_or(0, IndexSet::len)
    }

    /// Whether the beam has an entry (even an empty one).
    pub fn tracks(&self, beam: BeamId) -> bool {
        self.by_beam.contains_key(&beam)
    }

    /// Iterate over the nodes credited to `beam`, in credit order.
    pub fn supporters(&self, beam: BeamId) -> impl Iterator<Item = NodeId> + '_ {
        self.by_beam
            .get(&beam)
            .into_iter()
            .flat_map(|nodes| nodes.iter().copied())
    }

    /// Every beam currently carrying `node`'s bonus, in credit order.
    pub fn credited_beams(&self, node: NodeId) -> Vec<BeamId> {
        self.by_node
            .get(&node)
            .map_or_else(Vec::new, |beams| beams.iter().copied().collect())
    }

    /// Number of tracked beams.
    pub fn tracked_count(&self) -> usize {
        self.by_beam.len()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.by_beam.clear();
        self.by_node.clear();
    }
}
