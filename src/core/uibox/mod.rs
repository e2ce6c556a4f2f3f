//=========================================================================
// UIBox Controller
//=========================================================================
//
// Drives one morphing box and its text label.
//
// Architecture:
//   BoxController
//     ├─ rig: BoxRig            (host handles + morph targets)
//     ├─ state: BoxState        (Idle / Morphing / Kinematic)
//     ├─ effects: Vec<EffectNode>
//     └─ effect_events          (drained by the caller)
//
// Tick order:
//   1. state update
//   2. apply + process every effect, in list order
//   3. write text to label
//   4. lay the label out against the box's current scale
//
//=========================================================================

//=== Module Declarations =================================================

mod builder;
mod rig;
mod state;

//=== Public API ==========================================================

pub use builder::BoxControllerBuilder;
pub use state::BoxState;

//=== External Dependencies ===============================================

use glam::{Vec2, Vec3};
use log::{error, trace};

//=== Internal Dependencies ===============================================

use crate::core::effect::{EffectEvent, EffectEvents, EffectNode};
use crate::core::handles::{PhysicsBody, TextLabel, TransformHandle};
use rig::{BoxRig, Missing};

//=== BoxView =============================================================

/// Read-only snapshot of a box, handed to widget behaviours.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxView<'a> {
    pub state: BoxState,
    pub text: &'a str,
}

//=== BoxController =======================================================

/// Per-frame controller of a single UIBox.
///
/// Create one with [`BoxController::builder`]. The controller never fails:
/// missing host handles are reported once and the dependent work is
/// skipped.
pub struct BoxController {
    rig: BoxRig,
    state: BoxState,
    effects: Vec<EffectNode>,
    effect_events: EffectEvents,
    text: String,
    text_offset: Vec3,
}

impl BoxController {
    /// Starts building a controller.
    pub fn builder() -> BoxControllerBuilder {
        BoxControllerBuilder::new()
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        trace!("Box tick (state: {}, dt: {})", self.state, dt);

        self.state.update(&mut self.rig, dt);

        for effect in &mut self.effects {
            effect.apply(&mut self.effect_events);
            effect.process(&mut self.effect_events, dt);
        }

        if let Some(label) = self.rig.label.as_mut() {
            label.set_text(&self.text);
        }

        self.sync_label_layout();
    }

    fn sync_label_layout(&mut self) {
        let Some(box_transform) = self.rig.box_transform.as_ref() else {
            self.rig.report_missing(Missing::Box);
            return;
        };
        let scale = box_transform.local_scale();

        let Some(label) = self.rig.label.as_mut() else {
            self.rig.report_missing(Missing::Label);
            return;
        };
        label.set_local_position(self.text_offset - Vec3::new(0.0, 0.0, scale.z));
        label.set_size(Vec2::new(scale.x, scale.y));
    }

    //--- State Machine ----------------------------------------------------

    /// Exits the current state and enters `new_state`.
    ///
    /// Runs even when `new_state` equals the current state.
    pub fn change_state(&mut self, new_state: BoxState) {
        self.state.exit(&mut self.rig);
        self.state = new_state;
        self.state.enter(&mut self.rig);
    }

    pub fn state(&self) -> BoxState {
        self.state
    }

    pub fn view(&self) -> BoxView<'_> {
        BoxView {
            state: self.state,
            text: &self.text,
        }
    }

    /// Retargets the box and switches to `initial_state` (Idle if `None`).
    pub fn init(
        &mut self,
        position: Vec3,
        scale: Vec3,
        morph_speed: f32,
        text: impl Into<String>,
        initial_state: Option<BoxState>,
    ) {
        self.rig.target_position = position;
        self.rig.target_scale = scale;
        self.rig.morph_speed = morph_speed;
        self.text = text.into();
        self.change_state(initial_state.unwrap_or_default());
    }

    //--- Effects ----------------------------------------------------------

    /// Appends an effect to the end of the effect list.
    ///
    /// `None` (e.g. a failed library lookup) is rejected with an error log.
    pub fn add_effect(&mut self, effect: Option<EffectNode>) {
        match effect {
            Some(effect) => self.effects.push(effect),
            None => error!("Effect is missing, not added"),
        }
    }

    pub fn effects(&self) -> &[EffectNode] {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut [EffectNode] {
        &mut self.effects
    }

    /// Takes every effect event raised since the last drain.
    pub fn drain_effect_events(&mut self) -> Vec<EffectEvent> {
        self.effect_events.take()
    }

    //--- Morphing ---------------------------------------------------------

    /// Eases position and scale toward their targets over `dt` seconds.
    pub fn lerp_to_target(&mut self, dt: f32) {
        self.rig.lerp_to_target(dt);
    }

    pub fn set_target(&mut self, position: Vec3, scale: Vec3) {
        self.rig.target_position = position;
        self.rig.target_scale = scale;
    }

    pub fn target_position(&self) -> Vec3 {
        self.rig.target_position
    }

    pub fn target_scale(&self) -> Vec3 {
        self.rig.target_scale
    }

    pub fn morph_speed(&self) -> f32 {
        self.rig.morph_speed
    }

    pub fn set_morph_speed(&mut self, morph_speed: f32) {
        self.rig.morph_speed = morph_speed;
    }

    //--- Physics ----------------------------------------------------------

    pub fn set_kinematic(&mut self, kinematic: bool) {
        self.rig.set_kinematic(kinematic);
    }

    pub fn set_collision(&mut self, enabled: bool) {
        self.rig.set_collision(enabled);
    }

    //--- Label ------------------------------------------------------------

    /// Sets the label text and pushes it to the label immediately.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        match self.rig.label.as_mut() {
            Some(label) => label.set_text(&self.text),
            None => self.rig.report_missing(Missing::Label),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_offset(&self) -> Vec3 {
        self.text_offset
    }

    pub fn set_text_offset(&mut self, offset: Vec3) {
        self.text_offset = offset;
    }

    //--- Host Handles -----------------------------------------------------

    pub fn root(&self) -> Option<&dyn TransformHandle> {
        self.rig.root.as_deref()
    }

    pub fn box_transform(&self) -> Option<&dyn TransformHandle> {
        self.rig.box_transform.as_deref()
    }

    pub fn body(&self) -> Option<&dyn PhysicsBody> {
        self.rig.body.as_deref()
    }

    pub fn label(&self) -> Option<&dyn TextLabel> {
        self.rig.label.as_deref()
    }
}

//=========================================================================
// Tests
//=========================================================================
