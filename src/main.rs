//=========================================================================
// uibox-sim
//
// Runs a UIBox description headless, against in-memory handles.
//
// Usage:
//   uibox-sim --config uibox.json --frames 300 --tps 60
//   RUST_LOG=debug uibox-sim --config uibox.json --state morphing
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::path::PathBuf;

//=== External Crates =====================================================
use clap::Parser;
use log::info;

//=== Internal Modules ====================================================
use uibox_engine::prelude::*;

//=== Cli =================================================================

#[derive(Debug, Parser)]
#[command(name = "uibox-sim", version, about = "Simulate a UIBox without an engine")]
struct Cli {
    /// JSON description of the box, its effects and its widget.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run.
    #[arg(short, long, default_value_t = 120)]
    frames: u64,

    /// Frames per second.
    #[arg(short, long, default_value_t = 60.0)]
    tps: f64,

    /// Overrides the configured initial box state.
    #[arg(short, long)]
    state: Option<BoxState>,
}

//=== main() ==============================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if !(cli.tps > 0.0) {
        return Err(format!("--tps must be positive, got {}", cli.tps).into());
    }

    let mut config = match &cli.config {
        Some(path) => UiBoxConfig::load(path)?,
        None => UiBoxConfig::default(),
    };
    if let Some(state) = cli.state {
        config.box_config.initial_state = state;
    }

    let mut globals = GlobalContext::new();
    globals.bootstrap(GlobalManager::new());

    let mut ui_box = UiBox::from_config(
        &config,
        &BehaviourRegistry::with_builtins(),
        SimTransform::default(),
        SimTransform::default(),
        SimBody::default(),
        SimLabel::default(),
    );

    let summary = RuntimeBuilder::new()
        .with_tps(cli.tps)
        .with_frame_limit(cli.frames)
        .build()
        .run_with(&mut ui_box, &mut globals, |event| info!("{:?}", event));

    if let Some(root) = ui_box.body.root() {
        info!("Final position: {}", root.position());
    }
    if let Some(label) = ui_box.body.label() {
        info!("Label {:?} at {} size {}", label.text(), label.local_position(), label.size());
    }
    info!(
        "Simulated {} frames ({:.2}s, {} effect events) in {} state",
        summary.frames,
        summary.simulated_secs,
        summary.effect_events,
        ui_box.body.state()
    );

    globals.teardown();
    Ok(())
}
