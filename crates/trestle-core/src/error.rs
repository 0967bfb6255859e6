//! Error types for the Trestle workspace.
//!
//! Runtime structural edits never fail fatally: unknown handles are
//! logged and ignored, stale handles are skipped, redundant edits are
//! no-ops. The only fallible surface is construction-time configuration
//! validation.

use std::error::Error;
use std::fmt;

/// Errors detected by [`BridgeConfig::validate()`](crate::BridgeConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A base break threshold is non-finite or not positive.
    InvalidBaseThreshold {
        /// Which config field failed.
        name: &'static str,
        /// The offending value.
        value: f32,
    },
    /// A per-supporter bonus is non-finite or negative.
    InvalidBonus {
        /// Which config field failed.
        name: &'static str,
        /// The offending value.
        value: f32,
    },
    /// The default rotational swing is non-finite or inverted.
    InvalidSwing {
        /// Lower limit.
        min: f32,
        /// Upper limit.
        max: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseThreshold { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::InvalidBonus { name, value } => {
                write!(f, "{name} must be finite and non-negative, got {value}")
            }
            Self::InvalidSwing { min, max } => {
                write!(f, "default swing [{min}, {max}] is not a valid range")
            }
        }
    }
}

impl Error for ConfigError {}
