//! Per-beam physical state.

use trestle_core::RotationLimits;

/// Rotational mobility of a beam's joints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationState {
    /// Braced: joints are clamped to a zero-width range.
    Locked,
    /// Free to pivot within the given limits.
    Swinging(RotationLimits),
}

impl RotationState {
    /// The effective limit range for this state.
    pub fn limits(&self) -> RotationLimits {
        match self {
            Self::Locked => RotationLimits::LOCKED,
            Self::Swinging(limits) => *limits,
        }
    }
}

/// The physical state of one live beam.
///
/// Thresholds are written exclusively through rig command application;
/// the solver that integrates motion reads them and reports measured
/// joint loads back via [`LoadSample`](crate::LoadSample)s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamBody {
    /// Force above which a joint on this beam gives way.
    pub break_force: f32,
    /// Torque above which a joint on this beam gives way.
    pub break_torque: f32,
    /// Current rotational mobility.
    pub rotation: RotationState,
}

impl BeamBody {
    /// A fresh body with the given base thresholds and swing.
    pub fn new(break_force: f32, break_torque: f32, swing: RotationLimits) -> Self {
        Self {
            break_force,
            break_torque,
            rotation: RotationState::Swinging(swing),
        }
    }

    /// Whether the body's joints are currently clamped.
    pub fn is_locked(&self) -> bool {
        matches!(self.rotation, RotationState::Locked)
    }
}
