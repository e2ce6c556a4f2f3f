//=========================================================================
// UIBox Engine: Library Root
//
// This crate drives morphing 3D "UI boxes": a box with an attached text
// label, a small state machine for the box, another for its UI widget,
// and a tree of timed effects.
//
// Responsibilities:
// - Expose the engine-agnostic core (`core`): controllers, effects,
//   state machines, the global context and the host handle traits
// - Load UIBox descriptions from JSON (`config`)
// - Provide a fixed-rate frame driver for hosts without a frame loop
//   (`runtime`)
//
// Typical usage:
// ```no_run
// use uibox_engine::prelude::*;
//
// let config = UiBoxConfig::load("uibox.json").unwrap();
// let mut ui_box = UiBox::from_config(
//     &config,
//     &BehaviourRegistry::with_builtins(),
//     SimTransform::default(),
//     SimTransform::default(),
//     SimBody::default(),
//     SimLabel::default(),
// );
// let mut globals = GlobalContext::new();
//
// RuntimeBuilder::new()
//     .with_frame_limit(600)
//     .build()
//     .run(&mut ui_box, &mut globals);
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every controller and the traits the host implements.
// `config` turns JSON into controllers. `runtime` is optional: hosts with
// their own frame loop call `UiBox::tick` directly.
//
pub mod config;
pub mod core;
pub mod prelude;
pub mod runtime;

//--- Public Exports ------------------------------------------------------

pub use crate::core::UiBox;
pub use runtime::{Runtime, RuntimeBuilder};
