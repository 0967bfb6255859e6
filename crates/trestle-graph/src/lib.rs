//! Structural registry and support-bonus propagation for Trestle bridges.
//!
//! The types in this crate are pure bookkeeping: they track which beams
//! connect which nodes, discover clusters by breadth-first search, and
//! account for support bonuses exactly once per (node, beam) pair. All
//! side effects on physical beams are returned as
//! [`BeamCommand`](trestle_core::BeamCommand) lists for the adapter to
//! apply after traversal completes.
//!
//! # Layering
//!
//! - [`StructuralRegistry`] — bidirectional node/beam adjacency, no
//!   traversal.
//! - [`reachable_beams`] — BFS over the bipartite graph.
//! - [`BonusLedger`] — which supporting nodes have credited which beams;
//!   the source of idempotency.
//! - [`BridgeGraph`] — the propagation engine orchestrating the three.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod graph;
pub mod ledger;
pub mod registry;
pub mod traversal;

pub use graph::BridgeGraph;
pub use ledger::BonusLedger;
pub use registry::StructuralRegistry;
pub use traversal::reachable_beams;
