//! The bridge-building session.
//!
//! One [`BridgeSession`] owns the entire structural state of a bridge:
//! the propagation graph, the physical rig, the spawned node set, and
//! the placed support pieces. Collaborators (placement input, the
//! motion solver, level flow) drive it through the methods below, one
//! call at a time; every method runs synchronously to completion.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use trestle_core::{BeamId, BridgeConfig, ConfigError, NodeId, SupportId};
use trestle_graph::BridgeGraph;
use trestle_phys::{BeamBody, BeamRig, LoadSample};

/// A complete bridge-construction session.
///
/// A single owned instance rather than process-wide state: lifetime and
/// test isolation stay explicit, and `&mut self` on every mutator makes
/// the one-mutator-at-a-time discipline a compile-time guarantee.
///
/// # Example
///
/// ```
/// use trestle_core::BridgeConfig;
/// use trestle_engine::BridgeSession;
///
/// let mut session = BridgeSession::new(BridgeConfig::default())?;
/// let a = session.spawn_node();
/// let b = session.spawn_node();
/// let beam = session.connect(a, b).expect("both nodes exist");
///
/// let support = session.place_support(a, b).expect("both nodes exist");
/// assert_eq!(session.supporter_count(beam), 2);
///
/// session.remove_support(support);
/// assert_eq!(session.supporter_count(beam), 0);
/// # Ok::<(), trestle_core::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BridgeSession {
    graph: BridgeGraph,
    rig: BeamRig,
    nodes: IndexSet<NodeId>,
    supports: IndexMap<SupportId, [NodeId; 2]>,
    next_node: u64,
    next_support: u64,
}

impl BridgeSession {
    /// Create an empty session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(config: BridgeConfig) -> Result<Self, ConfigError> {
        let graph = BridgeGraph::new(config)?;
        Ok(Self {
            graph,
            rig: BeamRig::new(config),
            nodes: IndexSet::new(),
            supports: IndexMap::new(),
            next_node: 0,
            next_support: 0,
        })
    }

    // ── Node lifecycle ──────────────────────────────────────────────

    /// Place a structural node and mint its handle.
    ///
    /// Handles come from a monotonic counter and are never reused
    /// within a session.
    pub fn spawn_node(&mut self) -> NodeId {
        let node = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.insert(node);
        debug!(%node, "spawned node");
        node
    }

    /// Remove a node that has no incident beams.
    ///
    /// Any braced state the node still holds is withdrawn first.
    /// Returns `false` (logged, nothing changed) if beams are still
    /// attached or the node is unknown.
    pub fn despawn_node(&mut self, node: NodeId) -> bool {
        if !self.nodes.contains(&node) {
            warn!(%node, "ignoring despawn of unknown node");
            return false;
        }
        if self.graph.registry().contains_node(node) {
            warn!(%node, "ignoring despawn of node with attached beams");
            return false;
        }
        let commands = self.graph.unmark_supported(node);
        self.rig.apply(&commands);
        self.nodes.shift_remove(&node);
        debug!(%node, "despawned node");
        true
    }

    // ── Beam lifecycle ──────────────────────────────────────────────

    /// Create a beam between two distinct, existing nodes.
    ///
    /// The physical body starts at base thresholds; if either endpoint
    /// is already braced, the returned beam immediately carries the
    /// inherited bonus. Returns `None` (logged) for self-edges or
    /// unknown endpoints.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Option<BeamId> {
        if a == b {
            warn!(%a, "ignoring beam from a node to itself");
            return None;
        }
        if !self.nodes.contains(&a) || !self.nodes.contains(&b) {
            warn!(%a, %b, "ignoring beam between unknown nodes");
            return None;
        }
        let beam = self.rig.insert();
        let commands = self.graph.register_beam(beam, a, b);
        self.rig.apply(&commands);
        debug!(%beam, %a, %b, "connected beam");
        Some(beam)
    }

    /// Tear down a beam.
    ///
    /// The destruction event reaches the graph while the handle is
    /// still valid, then the body is freed. Idempotent: tearing down a
    /// dead beam returns `false` and changes nothing.
    pub fn disconnect(&mut self, beam: BeamId) -> bool {
        if !self.rig.contains(beam) {
            debug!(%beam, "ignoring disconnect of dead beam");
            return false;
        }
        self.graph.unregister_beam(beam);
        self.rig.remove(beam);
        debug!(%beam, "disconnected beam");
        true
    }

    // ── Support pieces ──────────────────────────────────────────────

    /// Place a support piece bracing two nodes.
    ///
    /// Both endpoints are marked supported, propagating the bonus
    /// through their clusters. Returns `None` (logged) if either node
    /// is unknown.
    pub fn place_support(&mut self, a: NodeId, b: NodeId) -> Option<SupportId> {
        if !self.nodes.contains(&a) || !self.nodes.contains(&b) {
            warn!(%a, %b, "ignoring support between unknown nodes");
            return None;
        }
        let id = SupportId(self.next_support);
        self.next_support += 1;
        self.supports.insert(id, [a, b]);
        for endpoint in [a, b] {
            let commands = self.graph.mark_supported(endpoint);
            self.rig.apply(&commands);
        }
        debug!(%id, %a, %b, "placed support");
        Some(id)
    }

    /// Remove a support piece, unbracing both its endpoints.
    ///
    /// Returns `false` for unknown support handles.
    pub fn remove_support(&mut self, id: SupportId) -> bool {
        let Some(ends) = self.supports.shift_remove(&id) else {
            debug!(%id, "ignoring removal of unknown support");
            return false;
        };
        for endpoint in ends {
            let commands = self.graph.unmark_supported(endpoint);
            self.rig.apply(&commands);
        }
        debug!(%id, "removed support");
        true
    }

    // ── Load resolution ─────────────────────────────────────────────

    /// Tear down every beam whose measured load exceeds its thresholds.
    ///
    /// The motion solver reports joint loads once per tick; overloaded
    /// beams are unregistered (while their handles are still valid) and
    /// freed. Returns the broken beams in first-exceeded order.
    pub fn settle_loads(&mut self, loads: &[LoadSample]) -> Vec<BeamId> {
        let broken = self.rig.overloaded(loads);
        for &beam in &broken {
            debug!(%beam, "beam broke under load");
            self.graph.unregister_beam(beam);
            self.rig.remove(beam);
        }
        broken
    }

    /// Demolish everything: beams, nodes, supports, braced state.
    ///
    /// Handle counters keep running, so handles from before the reset
    /// are never reissued.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.rig.clear();
        self.nodes.clear();
        self.supports.clear();
        debug!("cleared session");
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Whether the node is currently braced.
    pub fn is_supported(&self, node: NodeId) -> bool {
        self.graph.is_supported(node)
    }

    /// Number of distinct supporting nodes credited to a beam.
    pub fn supporter_count(&self, beam: BeamId) -> usize {
        self.graph.supporter_count(beam)
    }

    /// The live physical body of a beam, if it exists.
    pub fn body(&self, beam: BeamId) -> Option<&BeamBody> {
        self.rig.body(beam)
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live beams.
    pub fn beam_count(&self) -> usize {
        self.rig.live_count()
    }

    /// Number of placed support pieces.
    pub fn support_count(&self) -> usize {
        self.supports.len()
    }

    /// Read access to the propagation graph.
    pub fn graph(&self) -> &BridgeGraph {
        &self.graph
    }

    /// Read access to the physical rig.
    pub fn rig(&self) -> &BeamRig {
        &self.rig
    }

    /// The physics configuration this session was built with.
    pub fn config(&self) -> &BridgeConfig {
        self.graph.config()
    }
}
