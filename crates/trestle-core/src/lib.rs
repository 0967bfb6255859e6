//! Core types for the Trestle bridge-construction toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Trestle workspace:
//! node and beam identifiers, beam commands, physics configuration,
//! and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod error;
pub mod id;

pub use command::BeamCommand;
pub use config::{BridgeConfig, RotationLimits};
pub use error::ConfigError;
pub use id::{BeamId, NodeId, SupportId};
