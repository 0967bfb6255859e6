//! Session orchestration for Trestle bridge construction.
//!
//! [`BridgeSession`] ties the propagation engine to the physical rig:
//! it mints node handles, routes structural edit events into the graph,
//! applies the resulting command lists, and runs the load sweep that
//! tears down overloaded beams.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod session;

pub use session::BridgeSession;
