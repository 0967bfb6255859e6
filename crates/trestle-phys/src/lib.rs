//! Physical beam bodies and command application for Trestle bridges.
//!
//! The rig is the propagation engine's only window onto the simulated
//! world: it owns per-beam break thresholds and rotational limits,
//! resolves generation-scoped handles in O(1), and applies
//! [`BeamCommand`](trestle_core::BeamCommand) lists produced by the
//! graph. Commands addressing beams that died between traversal and
//! application are skipped, never surfaced.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod body;
pub mod rig;

pub use body::{BeamBody, RotationState};
pub use rig::{BeamRig, LoadSample};
