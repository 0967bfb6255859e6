//! The support-bonus propagation engine.
//!
//! [`BridgeGraph`] owns the registry, the ledger, and the supported-node
//! set, and turns structural edits into [`BeamCommand`] lists. It never
//! touches physical beams itself; the caller applies the returned
//! commands to the adapter after the operation returns.

use indexmap::IndexSet;
use tracing::debug;

use trestle_core::{BeamCommand, BeamId, BridgeConfig, ConfigError, NodeId};

use crate::ledger::BonusLedger;
use crate::registry::StructuralRegistry;
use crate::traversal::reachable_beams;

/// Structural registry plus support-bonus propagation.
///
/// Every public edit operation runs synchronously to completion and is
/// safe to call in any order; redundant edits are no-ops. Mutating
/// methods take `&mut self`, so the single-mutator discipline is
/// enforced by the borrow checker.
///
/// The graph is the single source of truth for derived beam strength:
/// collaborators must query [`expected_break_force`](Self::expected_break_force)
/// rather than caching thresholds.
#[derive(Clone, Debug)]
pub struct BridgeGraph {
    registry: StructuralRegistry,
    ledger: BonusLedger,
    supported: IndexSet<NodeId>,
    config: BridgeConfig,
}

impl BridgeGraph {
    /// Create an empty graph with the given physics configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(config: BridgeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry: StructuralRegistry::new(),
            ledger: BonusLedger::new(),
            supported: IndexSet::new(),
            config,
        })
    }

    /// The physics configuration this graph was built with.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    // ── Structural edits ────────────────────────────────────────────

    /// Record a new beam between `a` and `b`.
    ///
    /// Links the beam into the adjacency maps, opens its ledger entry,
    /// and emits a command setting its thresholds to the base values.
    /// If either endpoint is already supported, bonus propagation runs
    /// from that endpoint immediately, so a beam placed against an
    /// already-supported cluster inherits the bonus without a separate
    /// mark event.
    ///
    /// Registering an already-known beam is a logged no-op returning an
    /// empty command list.
    pub fn register_beam(&mut self, beam: BeamId, a: NodeId, b: NodeId) -> Vec<BeamCommand> {
        if !self.registry.link(beam, a, b) {
            debug!(%beam, "ignoring redundant beam registration");
            return Vec::new();
        }
        self.ledger.track(beam);
        debug!(%beam, %a, %b, "registered beam");

        let mut commands = vec![BeamCommand::SetBreakLimits {
            beam,
            force: self.config.base_break_force,
            torque: self.config.base_break_torque,
        }];
        for endpoint in [a, b] {
            if self.supported.contains(&endpoint) {
                self.apply_bonus_from(endpoint, &mut commands);
            }
        }
        commands
    }

    /// Remove a beam from the books.
    ///
    /// Unlinks it from both endpoints (pruning emptied node entries)
    /// and drops its ledger entry. Supported state of the endpoints is
    /// untouched. No commands are emitted: the physical object is being
    /// torn down by whoever raised the event. No-op for unknown beams.
    pub fn unregister_beam(&mut self, beam: BeamId) {
        if self.registry.unlink(beam).is_none() {
            debug!(%beam, "ignoring unregister of unknown beam");
            return;
        }
        self.ledger.untrack(beam);
        debug!(%beam, "unregistered beam");
    }

    /// Mark a node as braced by a support piece.
    ///
    /// On the first mark, every beam reachable from the node receives
    /// the configured bonus exactly once and is commanded to lock its
    /// rotation. Marking an already-supported node is a no-op.
    pub fn mark_supported(&mut self, node: NodeId) -> Vec<BeamCommand> {
        if !self.supported.insert(node) {
            debug!(%node, "node already supported");
            return Vec::new();
        }
        debug!(%node, "marked node supported");
        let mut commands = Vec::new();
        self.apply_bonus_from(node, &mut commands);
        commands
    }

    /// Remove a node's braced state.
    ///
    /// Subtracts the node's bonus from every beam it credited; beams
    /// whose last supporter departs are commanded to restore their
    /// default swing. Unmarking a node that is not supported is a
    /// no-op.
    pub fn unmark_supported(&mut self, node: NodeId) -> Vec<BeamCommand> {
        if !self.supported.shift_remove(&node) {
            debug!(%node, "node was not supported");
            return Vec::new();
        }
        debug!(%node, "unmarked node supported");
        let mut commands = Vec::new();
        self.revoke_bonus_from(node, &mut commands);
        commands
    }

    /// Drop every beam, ledger entry, and supported flag.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.ledger.clear();
        self.supported.clear();
        debug!("cleared bridge graph");
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Whether the node is currently braced.
    pub fn is_supported(&self, node: NodeId) -> bool {
        self.supported.contains(&node)
    }

    /// Iterate over the currently supported nodes, in mark order.
    pub fn supported_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.supported.iter().copied()
    }

    /// Number of distinct supporting nodes credited to a beam.
    pub fn supporter_count(&self, beam: BeamId) -> usize {
        self.ledger.supporter_count(beam)
    }

    /// The break force a registered beam should currently have.
    ///
    /// `None` for unknown beams.
    pub fn expected_break_force(&self, beam: BeamId) -> Option<f32> {
        self.registry
            .contains_beam(beam)
            .then(|| self.config.break_force_for(self.ledger.supporter_count(beam)))
    }

    /// The break torque a registered beam should currently have.
    ///
    /// `None` for unknown beams.
    pub fn expected_break_torque(&self, beam: BeamId) -> Option<f32> {
        self.registry
            .contains_beam(beam)
            .then(|| self.config.break_torque_for(self.ledger.supporter_count(beam)))
    }

    /// Read access to the adjacency maps.
    pub fn registry(&self) -> &StructuralRegistry {
        &self.registry
    }

    /// Read access to the bonus ledger.
    pub fn ledger(&self) -> &BonusLedger {
        &self.ledger
    }

    // ── Propagation ─────────────────────────────────────────────────

    /// Credit `node`'s bonus to every reachable beam that lacks it.
    ///
    /// Each newly credited beam gets an absolute threshold command and
    /// a rotation lock; already-credited beams are skipped, so calling
    /// this repeatedly for the same node converges after the first run.
    fn apply_bonus_from(&mut self, node: NodeId, out: &mut Vec<BeamCommand>) {
        if !self.registry.contains_node(node) {
            debug!(%node, "support bonus: node has no beams");
            return;
        }
        for beam in reachable_beams(&self.registry, node) {
            if !self.ledger.credit(beam, node) {
                continue;
            }
            let supporters = self.ledger.supporter_count(beam);
            out.push(BeamCommand::SetBreakLimits {
                beam,
                force: self.config.break_force_for(supporters),
                torque: self.config.break_torque_for(supporters),
            });
            out.push(BeamCommand::LockRotation { beam });
            debug!(%node, %beam, supporters, "applied support bonus");
        }
    }

    /// Withdraw `node`'s bonus from every beam it credited.
    ///
    /// Walks the reverse ledger entry rather than the current graph, so
    /// beams that have since been cut off from `node` still give the
    /// bonus back. A beam losing its last supporter is unlocked.
    fn revoke_bonus_from(&mut self, node: NodeId, out: &mut Vec<BeamCommand>) {
        for beam in self.ledger.credited_beams(node) {
            if !self.ledger.revoke(beam, node) {
                continue;
            }
            let supporters = self.ledger.supporter_count(beam);
            out.push(BeamCommand::SetBreakLimits {
                beam,
                force: self.config.break_force_for(supporters),
                torque: self.config.break_torque_for(supporters),
            });
            if supporters == 0 {
                out.push(BeamCommand::UnlockRotation { beam });
            }
            debug!(%node, %beam, supporters, "removed support bonus");
        }
    }
}

impl Default for BridgeGraph {
    fn default() -> Self {
        Self::new(BridgeConfig::default()).expect("default config is valid")
    }
}
