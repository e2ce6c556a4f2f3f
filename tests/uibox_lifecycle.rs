//=========================================================================
// UIBox Lifecycle
//=========================================================================
//
// End-to-end behaviour of a configured UIBox: config → controllers →
// runtime frames.
//
//=========================================================================

use glam::{Vec2, Vec3};
use uibox_engine::prelude::*;

const DEMO: &str = include_str!("../demos/uibox.json");

fn demo_box() -> UiBox {
    let config = UiBoxConfig::from_json(DEMO).unwrap();
    UiBox::from_config(
        &config,
        &BehaviourRegistry::with_builtins(),
        SimTransform::default(),
        SimTransform::default(),
        SimBody::default(),
        SimLabel::default(),
    )
}

fn count(events: &[EffectEvent], wanted: &EffectEvent) -> usize {
    events.iter().filter(|e| *e == wanted).count()
}

#[test]
fn demo_config_assembles_box_and_widget() {
    let ui_box = demo_box();

    assert_eq!(ui_box.body.state(), BoxState::Morphing);
    assert_eq!(ui_box.body.effects().len(), 2);

    let widget = ui_box.widget.as_ref().unwrap();
    assert_eq!(widget.type_state(), WidgetTypeState::Button);
    assert_eq!(widget.buttons()[0].prefab.as_deref(), Some("ui/button_wide"));

    // morphing entry switched physics off
    let body = ui_box.body.body().unwrap();
    assert!(!body.is_kinematic());
    assert!(!body.collision_enabled());
}

#[test]
fn effects_tick_and_expire_over_frames() {
    let mut ui_box = demo_box();
    ui_box.start();

    for _ in 0..4 {
        ui_box.tick(0.25);
    }
    let events = ui_box.body.drain_effect_events();

    // intro: applied on frame 1, cleared on frame 4 when its second ends
    assert_eq!(count(&events, &EffectEvent::Applied("intro".into())), 1);
    assert_eq!(count(&events, &EffectEvent::Cleared("intro".into())), 1);
    assert_eq!(count(&events, &EffectEvent::Ticked("intro".into())), 2);

    // flash lasts 0.2s inside intro
    assert_eq!(count(&events, &EffectEvent::Cleared("flash".into())), 1);

    // shimmer ticks every frame and never expires
    assert_eq!(count(&events, &EffectEvent::Ticked("shimmer".into())), 4);
    assert!(ui_box.body.effects()[0].children()[0].is_applied());

    // inactive sub-effect never took part
    assert!(events.iter().all(|e| !matches!(e,
        EffectEvent::Applied(n) | EffectEvent::Cleared(n) | EffectEvent::Ticked(n) if n == "disabled")));
}

#[test]
fn label_tracks_morphing_box() {
    let mut ui_box = demo_box();

    for _ in 0..600 {
        ui_box.tick(1.0 / 60.0);
    }

    let scale = ui_box.body.box_transform().unwrap().local_scale();
    assert!(scale.distance(Vec3::new(3.0, 1.0, 0.25)) < 1e-3);

    let label = ui_box.body.label().unwrap();
    assert_eq!(label.text(), "Start Game");
    assert_eq!(label.size(), Vec2::new(scale.x, scale.y));
    assert_eq!(label.local_position(), Vec3::new(0.0, 0.0, -0.05 - scale.z));
}

#[test]
fn kinematic_switch_mid_run() {
    let mut ui_box = demo_box();
    ui_box.tick(0.1);

    ui_box.body.change_state(BoxState::Kinematic);
    let position = ui_box.body.root().unwrap().position();
    ui_box.tick(0.1);

    assert_eq!(ui_box.body.root().unwrap().position(), position);
    let body = ui_box.body.body().unwrap();
    assert!(body.is_kinematic());
    assert!(body.collision_enabled());
}

#[test]
fn runtime_runs_demo_with_global_manager() {
    let mut ui_box = demo_box();
    let mut globals = GlobalContext::new();
    assert_eq!(globals.bootstrap(GlobalManager::new()), Bootstrap::Registered);
    assert_eq!(globals.bootstrap(GlobalManager::new()), Bootstrap::Destroyed);

    let summary = RuntimeBuilder::new()
        .with_tps(500.0)
        .with_frame_limit(20)
        .build()
        .run(&mut ui_box, &mut globals);

    assert_eq!(summary.frames, 20);
    assert!(summary.effect_events > 0);
    assert!(ui_box.body.drain_effect_events().is_empty());
    assert!(ui_box.widget.as_ref().unwrap().is_started());
    assert_eq!(globals.instance().map(GlobalManager::frames), Some(20));
}
