//! Strongly-typed identifiers for nodes, beams, and support pieces.

use std::fmt;

/// Identifies a structural node (a joint point where beams meet).
///
/// Node IDs are minted by the session from a monotonic counter and are
/// never reused while the session lives. The registry treats them as
/// opaque: it never inspects the underlying value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a placed support piece bracing two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SupportId(pub u64);

impl fmt::Display for SupportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SupportId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Generation-scoped handle to a physical beam body.
///
/// Minted by the beam rig at insertion time. The `generation` field is
/// bumped every time a slot is freed, so a handle held across a beam's
/// destruction stops resolving instead of aliasing whatever body reuses
/// the slot. Staleness checks are O(1), no lookup table required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct BeamId {
    index: u32,
    generation: u32,
}

impl BeamId {
    /// Create a handle from its raw parts.
    ///
    /// Outside the rig this is mainly useful in tests; a handle
    /// fabricated for a slot the rig never issued will not resolve.
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the rig.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for BeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BeamId(idx={}, gen={})", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beam_id_round_trip() {
        let b = BeamId::new(7, 3);
        assert_eq!(b.index(), 7);
        assert_eq!(b.generation(), 3);
    }

    #[test]
    fn beam_ids_differ_across_generations() {
        assert_ne!(BeamId::new(0, 0), BeamId::new(0, 1));
    }

    #[test]
    fn node_id_display_is_bare_value() {
        assert_eq!(NodeId(42).to_string(), "42");
    }
}
