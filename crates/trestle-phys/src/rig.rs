//! Generational slab of beam bodies.
//!
//! [`BeamRig`] mints [`BeamId`] handles and resolves them in O(1).
//! Freeing a slot bumps its generation, so a handle that outlives its
//! beam stops resolving instead of aliasing the slot's next occupant.

use indexmap::IndexSet;
use tracing::debug;

use trestle_core::{BeamCommand, BeamId, BridgeConfig};

use crate::body::{BeamBody, RotationState};

/// One measured joint load, as reported by the motion solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadSample {
    /// The loaded beam.
    pub beam: BeamId,
    /// Magnitude of the joint reaction force.
    pub force: f32,
    /// Magnitude of the joint reaction torque.
    pub torque: f32,
}

/// One slab slot. `body` is `None` while the slot sits on the free list.
#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    body: Option<BeamBody>,
}

/// Slab of live beam bodies with generation-checked handles.
///
/// Slots are reused through a free list; each free bumps the slot's
/// generation so stale handles resolve to `None` rather than to the
/// new occupant. All resolution is a direct index, never a scan.
#[derive(Clone, Debug)]
pub struct BeamRig {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    config: BridgeConfig,
}

impl BeamRig {
    /// Create an empty rig.
    ///
    /// The config supplies the base thresholds and default swing that
    /// new bodies start with; the caller is expected to have validated
    /// it at session construction.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            config,
        }
    }

    /// Insert a fresh beam body and mint its handle.
    ///
    /// The body starts at the base thresholds with the default swing.
    pub fn insert(&mut self) -> BeamId {
        let body = BeamBody::new(
            self.config.base_break_force,
            self.config.base_break_torque,
            self.config.default_swing,
        );
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            BeamId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                body: Some(body),
            });
            BeamId::new(index, 0)
        }
    }

    /// Free a beam's slot, invalidating every outstanding handle to it.
    ///
    /// Returns `false` (and changes nothing) if the handle is already
    /// dead or was never issued.
    pub fn remove(&mut self, beam: BeamId) -> bool {
        let Some(slot) = self.slots.get_mut(beam.index() as usize) else {
            return false;
        };
        if slot.generation != beam.generation() || slot.body.is_none() {
            return false;
        }
        slot.body = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(beam.index());
        self.live -= 1;
        true
    }

    /// Resolve a handle to its live body.
    pub fn body(&self, beam: BeamId) -> Option<&BeamBody> {
        let slot = self.slots.get(beam.index() as usize)?;
        if slot.generation != beam.generation() {
            return None;
        }
        slot.body.as_ref()
    }

    /// Resolve a handle to its live body, mutably.
    pub fn body_mut(&mut self, beam: BeamId) -> Option<&mut BeamBody> {
        let slot = self.slots.get_mut(beam.index() as usize)?;
        if slot.generation != beam.generation() {
            return None;
        }
        slot.body.as_mut()
    }

    /// Whether the handle resolves to a live body.
    pub fn contains(&self, beam: BeamId) -> bool {
        self.body(beam).is_some()
    }

    /// Number of live beams.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Iterate over all live beams in slot order.
    pub fn beams(&self) -> impl Iterator<Item = (BeamId, &BeamBody)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.body
                .as_ref()
                .map(|body| (BeamId::new(index as u32, slot.generation), body))
        })
    }

    /// Apply a command list in order.
    ///
    /// Commands addressing a beam that died between traversal and
    /// application are skipped with a debug log; the rest of the list
    /// still applies.
    pub fn apply(&mut self, commands: &[BeamCommand]) {
        for command in commands {
            let beam = command.beam();
            let swing = self.config.default_swing;
            let Some(body) = self.body_mut(beam) else {
                debug!(%beam, ?command, "skipping command for dead beam");
                continue;
            };
            match *command {
                BeamCommand::SetBreakLimits { force, torque, .. } => {
                    body.break_force = force;
                    body.break_torque = torque;
                }
                BeamCommand::LockRotation { .. } => {
                    body.rotation = RotationState::Locked;
                }
                BeamCommand::UnlockRotation { .. } => {
                    body.rotation = RotationState::Swinging(swing);
                }
            }
        }
    }

    /// Beams whose measured load exceeds their current thresholds.
    ///
    /// Dead handles in the samples are ignored; each overloaded beam is
    /// reported once, in first-exceeded order. The caller owns teardown.
    pub fn overloaded(&self, loads: &[LoadSample]) -> Vec<BeamId> {
        let mut broken = IndexSet::new();
        for sample in loads {
            let Some(body) = self.body(sample.beam) else {
                continue;
            };
            if sample.force > body.break_force || sample.torque > body.break_torque {
                broken.insert(sample.beam);
            }
        }
        broken.into_iter().collect()
    }

    /// Free every slot, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.body.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        self.live = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> BeamRig {
        BeamRig::new(BridgeConfig::default())
    }

    #[test]
    fn insert_starts_at_base_thresholds() {
        let mut rig = rig();
        let beam = rig.insert();
        let body = rig.body(beam).unwrap();
        assert_eq!(body.break_force, 15.0);
        assert_eq!(body.break_torque, 6.0);
        assert!(!body.is_locked());
    }

    #[test]
    fn removed_handle_stops_resolving() {
        let mut rig = rig();
        let beam = rig.insert();
        assert!(rig.remove(beam));
        assert!(rig.body(beam).is_none());
        assert!(!rig.remove(beam), "second remove is a no-op");
        assert_eq!(rig.live_count(), 0);
    }

    #[test]
    fn slot_reuse_bumps_generation() {
        let mut rig = rig();
        let first = rig.insert();
        rig.remove(first);
        let second = rig.insert();

        assert_eq!(second.index(), first.index(), "slot is reused");
        assert_ne!(second.generation(), first.generation());
        assert!(rig.body(first).is_none(), "stale handle must not resolve");
        assert!(rig.body(second).is_some());
    }

    #[test]
    fn apply_sets_thresholds_and_lock_state() {
        let mut rig = rig();
        let beam = rig.insert();
        rig.apply(&[
            BeamCommand::SetBreakLimits {
                beam,
                force: 18.0,
                torque: 8.0,
            },
            BeamCommand::LockRotation { beam },
        ]);
        let body = rig.body(beam).unwrap();
        assert_eq!(body.break_force, 18.0);
        assert_eq!(body.break_torque, 8.0);
        assert!(body.is_locked());

        rig.apply(&[BeamCommand::UnlockRotation { beam }]);
        let body = rig.body(beam).unwrap();
        assert_eq!(
            body.rotation,
            RotationState::Swinging(BridgeConfig::default().default_swing)
        );
    }

    #[test]
    fn apply_skips_dead_beam_and_continues() {
        let mut rig = rig();
        let dead = rig.insert();
        let live = rig.insert();
        rig.remove(dead);

        rig.apply(&[
            BeamCommand::SetBreakLimits {
                beam: dead,
                force: 99.0,
                torque: 99.0,
            },
            BeamCommand::SetBreakLimits {
                beam: live,
                force: 21.0,
                torque: 10.0,
            },
        ]);
        assert_eq!(rig.body(live).unwrap().break_force, 21.0);
    }

    #[test]
    fn lock_is_idempotent() {
        let mut rig = rig();
        let beam = rig.insert();
        rig.apply(&[BeamCommand::LockRotation { beam }]);
        rig.apply(&[BeamCommand::LockRotation { beam }]);
        assert!(rig.body(beam).unwrap().is_locked());
    }

    #[test]
    fn overloaded_reports_threshold_violations_once() {
        let mut rig = rig();
        let a = rig.insert();
        let b = rig.insert();
        let loads = [
            LoadSample {
                beam: a,
                force: 20.0,
                torque: 0.0,
            },
            LoadSample {
                beam: a,
                force: 30.0,
                torque: 0.0,
            },
            LoadSample {
                beam: b,
                force: 1.0,
                torque: 1.0,
            },
        ];
        assert_eq!(rig.overloaded(&loads), vec![a]);
    }

    #[test]
    fn overloaded_checks_torque_independently() {
        let mut rig = rig();
        let beam = rig.insert();
        let loads = [LoadSample {
            beam,
            force: 1.0,
            torque: 7.0,
        }];
        assert_eq!(rig.overloaded(&loads), vec![beam]);
    }

    #[test]
    fn overloaded_ignores_dead_handles() {
        let mut rig = rig();
        let beam = rig.insert();
        rig.remove(beam);
        let loads = [LoadSample {
            beam,
            force: 1e9,
            torque: 1e9,
        }];
        assert!(rig.overloaded(&loads).is_empty());
    }

    #[test]
    fn exactly_at_threshold_survives() {
        let mut rig = rig();
        let beam = rig.insert();
        let loads = [LoadSample {
            beam,
            force: 15.0,
            torque: 6.0,
        }];
        assert!(rig.overloaded(&loads).is_empty());
    }

    #[test]
    fn clear_invalidates_all_handles() {
        let mut rig = rig();
        let a = rig.insert();
        let b = rig.insert();
        rig.clear();
        assert!(rig.body(a).is_none());
        assert!(rig.body(b).is_none());
        assert_eq!(rig.live_count(), 0);

        let c = rig.insert();
        assert!(rig.body(c).is_some());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Random insert/remove churn: live count matches the set of
            /// handles that still resolve, and no freed handle resolves.
            #[test]
            fn churn_keeps_handles_sound(
                ops in proptest::collection::vec(proptest::bool::ANY, 1..100),
            ) {
                let mut rig = rig();
                let mut live: Vec<BeamId> = Vec::new();
                let mut freed: Vec<BeamId> = Vec::new();
                for insert in ops {
                    if insert || live.is_empty() {
                        live.push(rig.insert());
                    } else {
                        let beam = live.remove(live.len() / 2);
                        prop_assert!(rig.remove(beam));
                        freed.push(beam);
                    }
                }
                prop_assert_eq!(rig.live_count(), live.len());
                for beam in &live {
                    prop_assert!(rig.body(*beam).is_some());
                }
                for beam in &freed {
                    prop_assert!(rig.body(*beam).is_none());
                }
                prop_assert_eq!(rig.beams().count(), live.len());
            }
        }
    }
}
