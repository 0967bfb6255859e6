//! Benchmark profiles for the Trestle bridge-construction toolkit.
//!
//! Provides pre-built sessions for benchmarking:
//!
//! - [`span_session`]: a long single-path deck, worst case for cluster
//!   traversal depth
//! - [`lattice_session`]: a dense rectangular truss, worst case for
//!   per-node fan-out

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trestle_core::{BeamId, BridgeConfig, NodeId};
use trestle_engine::BridgeSession;

/// A straight deck of `spans` beams (`spans + 1` nodes).
pub fn span_session(spans: usize) -> (BridgeSession, Vec<NodeId>, Vec<BeamId>) {
    let mut session = BridgeSession::new(BridgeConfig::default()).unwrap();
    let nodes: Vec<NodeId> = (0..=spans).map(|_| session.spawn_node()).collect();
    let beams = (1..=spans)
        .map(|i| session.connect(nodes[i - 1], nodes[i]).unwrap())
        .collect();
    (session, nodes, beams)
}

/// A `width × height` truss with beams between orthogonal neighbours.
pub fn lattice_session(width: usize, height: usize) -> (BridgeSession, Vec<NodeId>, Vec<BeamId>) {
    let mut session = BridgeSession::new(BridgeConfig::default()).unwrap();
    let nodes: Vec<NodeId> = (0..width * height).map(|_| session.spawn_node()).collect();
    let mut beams = Vec::new();
    let at = |x: usize, y: usize| nodes[y * width + x];
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                beams.push(session.connect(at(x, y), at(x + 1, y)).unwrap());
            }
            if y + 1 < height {
                beams.push(session.connect(at(x, y), at(x, y + 1)).unwrap());
            }
        }
    }
    (session, nodes, beams)
}
