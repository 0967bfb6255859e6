//! Bridge physics configuration and validation.
//!
//! [`BridgeConfig`] holds the base break thresholds, the per-supporter
//! bonus increments, and the default rotational swing. It is consumed at
//! session construction; [`validate()`](BridgeConfig::validate) checks
//! the numeric invariants up front so the propagation engine never has
//! to re-check them.

use std::fmt;

use crate::error::ConfigError;

/// An angular limit range for a beam's joints, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationLimits {
    /// Lower limit.
    pub min: f32,
    /// Upper limit.
    pub max: f32,
}

impl RotationLimits {
    /// The zero-width range used while a beam is braced.
    pub const LOCKED: Self = Self { min: 0.0, max: 0.0 };

    /// Width of the range.
    pub fn width(&self) -> f32 {
        self.max - self.min
    }
}

impl fmt::Display for RotationLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Physics constants for beam strength and mobility.
///
/// A beam's thresholds are always `base + bonus × supporter_count`; the
/// graph is the single source of truth for `supporter_count` and
/// computes absolute command values from this config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BridgeConfig {
    /// Break force threshold of an unsupported beam.
    pub base_break_force: f32,
    /// Break torque threshold of an unsupported beam.
    pub base_break_torque: f32,
    /// Force added per distinct supporting node.
    pub bonus_break_force: f32,
    /// Torque added per distinct supporting node.
    pub bonus_break_torque: f32,
    /// Rotational swing of a beam with no supporting nodes.
    pub default_swing: RotationLimits,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_break_force: 15.0,
            base_break_torque: 6.0,
            bonus_break_force: 3.0,
            bonus_break_torque: 2.0,
            default_swing: RotationLimits {
                min: -1.0,
                max: 1.0,
            },
        }
    }
}

impl BridgeConfig {
    /// Validate all numeric invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a base threshold is non-finite or not
    /// positive, a bonus is non-finite or negative, or the default swing
    /// is non-finite or inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_break_force.is_finite() || self.base_break_force <= 0.0 {
            return Err(ConfigError::InvalidBaseThreshold {
                name: "base_break_force",
                value: self.base_break_force,
            });
        }
        if !self.base_break_torque.is_finite() || self.base_break_torque <= 0.0 {
            return Err(ConfigError::InvalidBaseThreshold {
                name: "base_break_torque",
                value: self.base_break_torque,
            });
        }
        if !self.bonus_break_force.is_finite() || self.bonus_break_force < 0.0 {
            return Err(ConfigError::InvalidBonus {
                name: "bonus_break_force",
                value: self.bonus_break_force,
            });
        }
        if !self.bonus_break_torque.is_finite() || self.bonus_break_torque < 0.0 {
            return Err(ConfigError::InvalidBonus {
                name: "bonus_break_torque",
                value: self.bonus_break_torque,
            });
        }
        let swing = self.default_swing;
        if !swing.min.is_finite() || !swing.max.is_finite() || swing.min > swing.max {
            return Err(ConfigError::InvalidSwing {
                min: swing.min,
                max: swing.max,
            });
        }
        Ok(())
    }

    /// Break force for a beam credited by `supporters` distinct nodes.
    pub fn break_force_for(&self, supporters: usize) -> f32 {
        self.base_break_force + self.bonus_break_force * supporters as f32
    }

    /// Break torque for a beam credited by `supporters` distinct nodes.
    pub fn break_torque_for(&self, supporters: usize) -> f32 {
        self.base_break_torque + self.bonus_break_torque * supporters as f32
    }
}
