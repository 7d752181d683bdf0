//! Raw input contracts: the per-tick control snapshot supplied by the host.
//!
//! The core never reaches into ambient input state; the host input layer
//! builds a [`ControlSnapshot`] each tick and passes it to
//! [`ActionDispatcher::tick`](crate::actions::ActionDispatcher::tick).

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Opaque id of one physical control (a key or a button).
/// The host decides the numbering; the core only compares ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ControlId(pub u32);

/// Latest pressed state per control. Controls absent from the map read as
/// released, so hosts may send sparse snapshots.
#[derive(Clone, Debug, Default)]
pub struct ControlSnapshot {
    pressed: HashMap<ControlId, bool>,
}

impl ControlSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pressed(&mut self, control: ControlId, pressed: bool) {
        self.pressed.insert(control, pressed);
    }

    #[inline]
    pub fn is_pressed(&self, control: ControlId) -> bool {
        self.pressed.get(&control).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_controls_read_as_released() {
        let mut snap = ControlSnapshot::new();
        assert!(!snap.is_pressed(ControlId(7)));
        snap.set_pressed(ControlId(7), true);
        assert!(snap.is_pressed(ControlId(7)));
        snap.set_pressed(ControlId(7), false);
        assert!(!snap.is_pressed(ControlId(7)));
    }
}
