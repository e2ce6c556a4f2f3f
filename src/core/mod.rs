//=========================================================================
// Core Systems
//
// Engine-agnostic logic of a UIBox.
//
// Responsibilities:
// - Box state machine and per-frame box/label update (`uibox`)
// - Timed, tree-structured effects (`effect`)
// - Widget type state and pluggable behaviours (`widget`)
// - Explicit process-wide manager context (`globals`)
// - Collaborator traits toward the host engine (`handles`)
//
// Notes:
// Nothing here owns a thread. Every operation runs to completion inside
// the tick that calls it. `UiBox` bundles a box with its optional widget
// and is what the runtime drives.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod effect;
pub mod globals;
pub mod handles;
pub mod uibox;
pub mod widget;

//=== External Crates =====================================================
use log::info;

//=== Internal Modules ====================================================
use crate::config::UiBoxConfig;
use handles::{PhysicsBody, TextLabel, TransformHandle};
use uibox::BoxController;
use widget::{BehaviourRegistry, WidgetController};

//=== UiBox ===============================================================
//
// A box controller together with the widget controller attached to it.
// Ticks the box first, then the widget.
//
pub struct UiBox {
    pub body: BoxController,
    pub widget: Option<WidgetController>,
    frames: u64,
}

impl UiBox {
    //--- Construction -----------------------------------------------------

    pub fn new(body: BoxController, widget: Option<WidgetController>) -> Self {
        Self {
            body,
            widget,
            frames: 0,
        }
    }

    //--- from_config() ----------------------------------------------------
    //
    // Builds a box and its widget from configuration. Effects are
    // instantiated fresh for this box; behaviours come from `registry`.
    //
    pub fn from_config(
        config: &UiBoxConfig,
        registry: &BehaviourRegistry,
        root: impl TransformHandle + 'static,
        box_transform: impl TransformHandle + 'static,
        body: impl PhysicsBody + 'static,
        label: impl TextLabel + 'static,
    ) -> Self {
        let library = config.effect_library();
        let controller = BoxController::builder()
            .with_root(root)
            .with_box(box_transform, body)
            .with_label(label)
            .with_config(&config.box_config, &library)
            .build();

        let widget = config.widget.as_ref().map(|w| w.build(registry));

        info!(
            "UIBox assembled (effects: {}, widget: {})",
            controller.effects().len(),
            widget.is_some()
        );
        Self::new(controller, widget)
    }

    //--- Lifecycle --------------------------------------------------------

    /// Starts the widget, if any. Idempotent.
    pub fn start(&mut self) {
        if let Some(widget) = self.widget.as_mut() {
            if !widget.is_started() {
                widget.start(self.body.view());
            }
        }
    }

    /// Runs one frame: box first, then widget.
    pub fn tick(&mut self, dt: f32) {
        self.frames += 1;
        self.body.tick(dt);
        if let Some(widget) = self.widget.as_mut() {
            widget.tick(self.body.view(), dt);
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handles::{SimBody, SimLabel, SimTransform};
    use crate::core::uibox::BoxState;
    use crate::core::widget::{Behaviour, WidgetContext};
    use glam::Vec3;
    use std::sync::{Arc, Mutex};

    fn sim_box(config: &UiBoxConfig) -> UiBox {
        UiBox::from_config(
            config,
            &BehaviourRegistry::with_builtins(),
            SimTransform::default(),
            SimTransform::default(),
            SimBody::default(),
            SimLabel::default(),
        )
    }

    #[test]
    fn from_config_without_widget() {
        let config = UiBoxConfig::from_json(r#"{ "box": { "initial_state": "kinematic" } }"#).unwrap();
        let mut ui_box = sim_box(&config);
        ui_box.start();
        ui_box.tick(0.1);

        assert!(ui_box.widget.is_none());
        assert_eq!(ui_box.body.state(), BoxState::Kinematic);
        assert_eq!(ui_box.frames(), 1);
    }

    #[test]
    fn tick_drives_box_toward_target() {
        let config = UiBoxConfig::from_json(
            r#"{ "box": { "initial_state": "morphing", "target_position": [2.0, 0.0, 0.0] } }"#,
        )
        .unwrap();
        let mut ui_box = sim_box(&config);

        ui_box.tick(0.5);

        let x = ui_box.body.root().unwrap().position().x;
        assert!(x > 0.0 && x < 2.0);
        assert_eq!(ui_box.body.target_position(), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn two_boxes_from_one_config_keep_separate_timers() {
        let config = UiBoxConfig::from_json(
            r#"{ "box": { "effects": ["pulse"] }, "effects": [ { "name": "pulse", "duration": 1.0 } ] }"#,
        )
        .unwrap();
        let mut first = sim_box(&config);
        let second = sim_box(&config);

        first.tick(0.25);

        assert!(first.body.effects()[0].is_applied());
        assert!(!second.body.effects()[0].is_applied());
    }

    struct Watcher {
        seen: Arc<Mutex<Vec<(BoxState, String)>>>,
    }

    impl Behaviour for Watcher {
        fn name(&self) -> &str {
            "watcher"
        }

        fn process(&mut self, widget: &WidgetContext<'_>, _dt: f32) {
            self.seen
                .lock()
                .unwrap()
                .push((widget.host.state, widget.host.text.to_owned()));
        }
    }

    #[test]
    fn widget_behaviours_see_the_box() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry = BehaviourRegistry::new();
        let shared = Arc::clone(&seen);
        registry.register("watcher", move || {
            Box::new(Watcher {
                seen: Arc::clone(&shared),
            })
        });

        let config = UiBoxConfig::from_json(
            r#"{ "box": { "text": "Quit" }, "widget": { "behaviours": ["watcher"] } }"#,
        )
        .unwrap();
        let mut ui_box = UiBox::from_config(
            &config,
            &registry,
            SimTransform::default(),
            SimTransform::default(),
            SimBody::default(),
            SimLabel::default(),
        );
        ui_box.start();

        ui_box.tick(0.1);
        ui_box.body.change_state(BoxState::Kinematic);
        ui_box.body.set_text("Bye");
        ui_box.tick(0.1);

        assert_eq!(
            *seen.lock().unwrap(),
            [
                (BoxState::Idle, "Quit".to_owned()),
                (BoxState::Kinematic, "Bye".to_owned())
            ]
        );
    }
}
