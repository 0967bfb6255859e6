//! Commands issued to the physical beam adapter.
//!
//! Propagation never mutates beam bodies directly. Each public graph
//! operation returns a list of [`BeamCommand`]s which the caller applies
//! to the rig after traversal completes, keeping the traversal and
//! ledger logic pure.

use crate::id::BeamId;

/// An instruction for the physical beam adapter.
///
/// Commands carry absolute target values, never deltas: a duplicated or
/// replayed command converges on the same state instead of drifting the
/// thresholds. Commands addressing a beam that has died since traversal
/// are skipped by the adapter.
///
/// # Examples
///
/// ```
/// use trestle_core::{BeamCommand, BeamId};
///
/// let beam = BeamId::new(0, 0);
/// let cmd = BeamCommand::SetBreakLimits {
///     beam,
///     force: 18.0,
///     torque: 8.0,
/// };
/// assert_eq!(cmd.beam(), beam);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BeamCommand {
    /// Set a beam's break thresholds to absolute values
    /// (base, or base plus the accumulated support bonus).
    SetBreakLimits {
        /// The beam to adjust.
        beam: BeamId,
        /// New break force threshold.
        force: f32,
        /// New break torque threshold.
        torque: f32,
    },
    /// Clamp the beam's rotational limits to a zero-width range.
    ///
    /// Issued on every bonus application; re-locking a locked beam is a
    /// no-op at the adapter.
    LockRotation {
        /// The beam to lock.
        beam: BeamId,
    },
    /// Restore the beam's default rotational swing.
    ///
    /// Issued only on the transition from one supporting node to none.
    UnlockRotation {
        /// The beam to unlock.
        beam: BeamId,
    },
}

impl BeamCommand {
    /// The beam this command addresses.
    pub fn beam(&self) -> BeamId {
        match self {
            Self::SetBreakLimits { beam, .. }
            | Self::LockRotation { beam }
            | Self::UnlockRotation { beam } => *beam,
        }
    }
}
