//=========================================================================
// Box Controller Builder
//=========================================================================
//
// Fluent construction of a `BoxController`.
//
// Handles are optional. `build()` reports the ones a box needs (box
// transform + body, label) when they are absent, then enters the initial
// state.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::info;

//=== Internal Dependencies ===============================================

use super::rig::{BoxRig, Missing};
use super::{BoxController, BoxState};
use crate::config::BoxConfig;
use crate::core::effect::{EffectEvents, EffectLibrary, EffectNode};
use crate::core::handles::{PhysicsBody, TextLabel, TransformHandle};

//=== BoxControllerBuilder ================================================

/// Builder for [`BoxController`].
///
/// # Default Values
///
/// - **Initial state**: Idle
/// - **Morph speed**: 1.0
/// - **Target**: origin, unit scale
/// - **Text**: empty, no offset
pub struct BoxControllerBuilder {
    rig: BoxRig,
    initial_state: BoxState,
    effects: Vec<EffectNode>,
    text: String,
    text_offset: Vec3,
}

impl BoxControllerBuilder {
    /// Creates a builder with default settings and no handles.
    pub fn new() -> Self {
        Self {
            rig: BoxRig::new(),
            initial_state: BoxState::Idle,
            effects: Vec::new(),
            text: String::new(),
            text_offset: Vec3::ZERO,
        }
    }

    //--- Handles ----------------------------------------------------------

    /// Sets the transform moved toward the target position.
    pub fn with_root(mut self, root: impl TransformHandle + 'static) -> Self {
        self.rig.root = Some(Box::new(root));
        self
    }

    /// Sets the box's transform (scaled toward the target scale) and its
    /// physics body.
    pub fn with_box(
        mut self,
        transform: impl TransformHandle + 'static,
        body: impl PhysicsBody + 'static,
    ) -> Self {
        self.rig.box_transform = Some(Box::new(transform));
        self.rig.body = Some(Box::new(body));
        self
    }

    pub fn with_label(mut self, label: impl TextLabel + 'static) -> Self {
        self.rig.label = Some(Box::new(label));
        self
    }

    //--- Settings ---------------------------------------------------------

    pub fn with_initial_state(mut self, state: BoxState) -> Self {
        self.initial_state = state;
        self
    }

    pub fn with_morph_speed(mut self, morph_speed: f32) -> Self {
        self.rig.morph_speed = morph_speed;
        self
    }

    pub fn with_target(mut self, position: Vec3, scale: Vec3) -> Self {
        self.rig.target_position = position;
        self.rig.target_scale = scale;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_text_offset(mut self, offset: Vec3) -> Self {
        self.text_offset = offset;
        self
    }

    pub fn with_effect(mut self, effect: EffectNode) -> Self {
        self.effects.push(effect);
        self
    }

    /// Applies a box configuration, instantiating its effects from
    /// `library`. Unknown effect names are skipped with a warning.
    pub fn with_config(mut self, config: &BoxConfig, library: &EffectLibrary) -> Self {
        self.initial_state = config.initial_state;
        self.rig.morph_speed = config.morph_speed;
        self.rig.target_position = config.target_position;
        self.rig.target_scale = config.target_scale;
        self.text = config.text.clone();
        self.text_offset = config.text_offset;
        self.effects
            .extend(library.instantiate_all(config.effects.iter().map(String::as_str)));
        self
    }

    //--- Build ------------------------------------------------------------

    /// Builds the controller and enters the initial state.
    pub fn build(self) -> BoxController {
        let mut rig = self.rig;

        if rig.box_transform.is_none() {
            rig.report_missing(Missing::Box);
        }
        if rig.label.is_none() {
            rig.report_missing(Missing::Label);
        }

        info!(
            "Building box controller (state: {}, effects: {}, morph speed: {})",
            self.initial_state,
            self.effects.len(),
            rig.morph_speed
        );

        let mut controller = BoxController {
            rig,
            state: self.initial_state,
            effects: self.effects,
            effect_events: EffectEvents::new(),
            text: self.text,
            text_offset: self.text_offset,
        };
        controller.state.enter(&mut controller.rig);
        controller
    }
}

impl Default for BoxControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
