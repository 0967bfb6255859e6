//! Trestle: physically-simulated bridge construction.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Trestle sub-crates. For most users, adding `trestle` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use trestle::prelude::*;
//!
//! let mut session = BridgeSession::new(BridgeConfig::default()).unwrap();
//!
//! // Build a two-span deck: A — B — C.
//! let a = session.spawn_node();
//! let b = session.spawn_node();
//! let c = session.spawn_node();
//! let left = session.connect(a, b).unwrap();
//! let right = session.connect(b, c).unwrap();
//!
//! // A support piece under A stiffens every beam it can reach.
//! let support = session.place_support(a, b).unwrap();
//! assert!(session.body(left).unwrap().is_locked());
//! assert!(session.body(right).unwrap().is_locked());
//!
//! // Overloaded beams break and are torn down in one sweep.
//! let broken = session.settle_loads(&[LoadSample {
//!     beam: right,
//!     force: 100.0,
//!     torque: 0.0,
//! }]);
//! assert_eq!(broken, vec![right]);
//!
//! // Removing the support restores base strength and mobility.
//! session.remove_support(support);
//! assert!(!session.body(left).unwrap().is_locked());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trestle-core` | IDs, beam commands, configuration, errors |
//! | [`graph`] | `trestle-graph` | Registry, traversal, ledger, propagation |
//! | [`phys`] | `trestle-phys` | Beam bodies, the rig, load sweeps |
//! | [`engine`] | `trestle-engine` | The bridge-building session |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs, commands, and configuration (`trestle-core`).
pub use trestle_core as types;

/// Structural registry and support-bonus propagation (`trestle-graph`).
///
/// [`graph::BridgeGraph`] is the pure bookkeeping core; use it directly
/// when wiring a custom adapter instead of the built-in rig.
pub use trestle_graph as graph;

/// Physical beam bodies and command application (`trestle-phys`).
pub use trestle_phys as phys;

/// Session orchestration (`trestle-engine`).
///
/// [`engine::BridgeSession`] ties the graph to the rig and is the
/// entry point for typical use.
pub use trestle_engine as engine;

/// Common imports for typical Trestle usage.
///
/// ```rust
/// use trestle::prelude::*;
/// ```
pub mod prelude {
    pub use trestle_core::{
        BeamCommand, BeamId, BridgeConfig, ConfigError, NodeId, RotationLimits, SupportId,
    };
    pub use trestle_engine::BridgeSession;
    pub use trestle_graph::{reachable_beams, BonusLedger, BridgeGraph, StructuralRegistry};
    pub use trestle_phys::{BeamBody, BeamRig, LoadSample, RotationState};
}
