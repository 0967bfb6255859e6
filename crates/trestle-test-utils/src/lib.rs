//! Test utilities and fixtures for Trestle development.
//!
//! Provides short-hand identifier constructors, a [`ThresholdBoard`]
//! mock adapter for inspecting command effects without a real rig, and
//! builders for common bridge topologies.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;

use trestle_core::{BeamCommand, BeamId, NodeId};
use trestle_graph::BridgeGraph;

/// Generation-zero beam handle, as minted for a fresh rig slot.
pub fn beam(index: u32) -> BeamId {
    BeamId::new(index, 0)
}

/// Node handle from a bare value.
pub fn node(id: u64) -> NodeId {
    NodeId(id)
}

/// Recorded state of one beam on a [`ThresholdBoard`].
#[derive(Clone, Copy, Debug, PartialEq)]
struct BoardEntry {
    force: f32,
    torque: f32,
    locked: bool,
}

/// Mock beam adapter that records applied commands.
///
/// Beams come into existence on their first `SetBreakLimits`, unlocked,
/// mirroring a rig body initialized with the default swing. Use this to
/// assert on the absolute thresholds and lock state a command stream
/// produces, without constructing a physical rig.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThresholdBoard {
    entries: IndexMap<BeamId, BoardEntry>,
}

impl ThresholdBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command list in order.
    ///
    /// Lock/unlock commands for beams the board has never seen are
    /// ignored, matching the adapter's stale-handle policy.
    pub fn apply(&mut self, commands: &[BeamCommand]) {
        for command in commands {
            match *command {
                BeamCommand::SetBreakLimits { beam, force, torque } => {
                    let entry = self.entries.entry(beam).or_insert(BoardEntry {
                        force,
                        torque,
                        locked: false,
                    });
                    entry.force = force;
                    entry.torque = torque;
                }
                BeamCommand::LockRotation { beam } => {
                    if let Some(entry) = self.entries.get_mut(&beam) {
                        entry.locked = true;
                    }
                }
                BeamCommand::UnlockRotation { beam } => {
                    if let Some(entry) = self.entries.get_mut(&beam) {
                        entry.locked = false;
                    }
                }
            }
        }
    }

    /// Last applied break force, if the beam has been commanded at all.
    pub fn force(&self, beam: BeamId) -> Option<f32> {
        self.entries.get(&beam).map(|e| e.force)
    }

    /// Last applied break torque.
    pub fn torque(&self, beam: BeamId) -> Option<f32> {
        self.entries.get(&beam).map(|e| e.torque)
    }

    /// Current lock state.
    pub fn locked(&self, beam: BeamId) -> Option<bool> {
        self.entries.get(&beam).map(|e| e.locked)
    }

    /// Number of beams the board has seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A straight bridge: `n_nodes` nodes chained by `n_nodes - 1` beams.
///
/// Registration commands are discarded; pair with a [`ThresholdBoard`]
/// and register manually when the command stream itself matters.
pub fn path_graph(n_nodes: usize) -> (BridgeGraph, Vec<NodeId>, Vec<BeamId>) {
    let mut graph = BridgeGraph::default();
    let nodes: Vec<NodeId> = (0..n_nodes as u64).map(node).collect();
    let mut beams = Vec::new();
    for i in 1..n_nodes {
        let b = beam(i as u32 - 1);
        let _ = graph.register_beam(b, nodes[i - 1], nodes[i]);
        beams.push(b);
    }
    (graph, nodes, beams)
}

/// A `width × height` lattice with beams between orthogonal neighbours.
pub fn grid_graph(width: usize, height: usize) -> (BridgeGraph, Vec<NodeId>, Vec<BeamId>) {
    let mut graph = BridgeGraph::default();
    let nodes: Vec<NodeId> = (0..(width * height) as u64).map(node).collect();
    let mut beams = Vec::new();
    let mut next_beam = 0u32;
    let at = |x: usize, y: usize| nodes[y * width + x];
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                let b = beam(next_beam);
                next_beam += 1;
                let _ = graph.register_beam(b, at(x, y), at(x + 1, y));
                beams.push(b);
            }
            if y + 1 < height {
                let b = beam(next_beam);
                next_beam += 1;
                let _ = graph.register_beam(b, at(x, y), at(x, y + 1));
                beams.push(b);
            }
        }
    }
    (graph, nodes, beams)
}
