//=========================================================================
// Box Rig
//=========================================================================
//
// The host-side handles of a UIBox plus its morph parameters.
//
// Handles are optional: a box built without them keeps running, and every
// operation touching a missing handle becomes a no-op. Each missing handle
// is reported with `error!` the first time it is needed, never again.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::error;

//=== Internal Dependencies ===============================================

use crate::core::handles::{PhysicsBody, TextLabel, TransformHandle};

//=== Missing Reference Reporting =========================================

/// Host references a box can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Missing {
    Root,
    Box,
    Body,
    Label,
}

impl Missing {
    fn bit(self) -> u8 {
        match self {
            Self::Root => 1 << 0,
            Self::Box => 1 << 1,
            Self::Body => 1 << 2,
            Self::Label => 1 << 3,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Root => "Root transform is not assigned",
            Self::Box => "Box transform is not assigned",
            Self::Body => "Box physics body is not assigned",
            Self::Label => "Text label is not assigned",
        }
    }
}

//=== BoxRig ==============================================================

/// Handles and morph targets driven by the box state machine.
pub(crate) struct BoxRig {
    pub(crate) root: Option<Box<dyn TransformHandle>>,
    pub(crate) box_transform: Option<Box<dyn TransformHandle>>,
    pub(crate) body: Option<Box<dyn PhysicsBody>>,
    pub(crate) label: Option<Box<dyn TextLabel>>,
    pub(crate) target_position: Vec3,
    pub(crate) target_scale: Vec3,
    pub(crate) morph_speed: f32,
    reported: u8,
}

impl BoxRig {
    pub(crate) fn new() -> Self {
        Self {
            root: None,
            box_transform: None,
            body: None,
            label: None,
            target_position: Vec3::ZERO,
            target_scale: Vec3::ONE,
            morph_speed: 1.0,
            reported: 0,
        }
    }

    //--- Reporting --------------------------------------------------------

    /// Logs a missing reference once per rig.
    pub(crate) fn report_missing(&mut self, missing: Missing) {
        if self.reported & missing.bit() == 0 {
            self.reported |= missing.bit();
            error!("{}", missing.message());
        }
    }

    #[cfg(test)]
    pub(crate) fn was_reported(&self, missing: Missing) -> bool {
        self.reported & missing.bit() != 0
    }

    //--- Physics ----------------------------------------------------------

    pub(crate) fn set_kinematic(&mut self, kinematic: bool) {
        match self.body.as_mut() {
            Some(body) => body.set_kinematic(kinematic),
            None => self.report_missing(Missing::Body),
        }
    }

    pub(crate) fn set_collision(&mut self, enabled: bool) {
        match self.body.as_mut() {
            Some(body) => body.set_collision_enabled(enabled),
            None => self.report_missing(Missing::Body),
        }
    }

    //--- Morphing ---------------------------------------------------------

    /// Moves the root toward the target position and the box toward the
    /// target scale.
    ///
    /// The blend factor is `morph_speed * dt`, clamped to `[0, 1]`, so each
    /// call closes a fixed fraction of the remaining distance.
    pub(crate) fn lerp_to_target(&mut self, dt: f32) {
        let t = (self.morph_speed * dt).clamp(0.0, 1.0);

        match self.root.as_mut() {
            Some(root) => {
                let position = root.position().lerp(self.target_position, t);
                root.set_position(position);
            }
            None => self.report_missing(Missing::Root),
        }

        match self.box_transform.as_mut() {
            Some(transform) => {
                let scale = transform.local_scale().lerp(self.target_scale, t);
                transform.set_local_scale(scale);
            }
            None => self.report_missing(Missing::Box),
        }
    }
}

//=== Tests ===============================================================
