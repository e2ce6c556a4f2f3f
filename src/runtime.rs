//=========================================================================
// UIBox Runtime
//
// Fixed-rate frame driver for hosts without their own frame loop.
//
// Architecture:
// ```text
//     RuntimeBuilder  ──build()──>  Runtime  ──run()──>  [Frames]
//         │                           │
//         ├─ with_tps()               ├─ spawns clock thread
//         ├─ with_channel_capacity()  └─ ticks UiBox on caller thread
//         └─ with_frame_limit()          until limit / stop / disconnect
// ```
//
// The clock thread owns no UIBox state. It only emits `FrameEvent`s over
// a bounded crossbeam channel; every controller call happens on the
// thread that called `run()`.
//
// Effect events are drained after every frame and handed to the caller's
// sink (`run_with`) or logged (`run`), so the box's queue never holds more
// than one frame's worth.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Dependencies ===============================================
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, error, info};

//=== Internal Dependencies ===============================================
use crate::core::effect::EffectEvent;
use crate::core::globals::GlobalContext;
use crate::core::UiBox;

//=== FrameEvent ==========================================================

/// Events sent from the clock thread to the tick consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum FrameEvent {
    /// One frame of `dt` seconds.
    Tick { dt: f32 },

    /// No more frames will follow.
    Stop,
}

//=== RunSummary ==========================================================

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub simulated_secs: f64,

    /// Effect events drained from the box during the run.
    pub effect_events: u64,
}

//=== StopHandle ==========================================================

/// Requests a running [`Runtime`] to stop after the current frame.
#[derive(Debug, Clone)]
pub struct StopHandle {
    sender: Sender<()>,
}

impl StopHandle {
    pub fn stop(&self) {
        // the runtime may already have finished
        let _ = self.sender.send(());
    }
}

//=== RuntimeBuilder ======================================================

/// Builder for configuring a [`Runtime`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (frames per second)
/// - **Channel capacity**: 16 frames
/// - **Frame limit**: none (runs until stopped)
///
/// # Examples
///
/// ```no_run
/// use uibox_engine::prelude::*;
///
/// let mut ui_box = UiBox::new(BoxController::builder().build(), None);
/// let mut globals = GlobalContext::new();
///
/// let summary = RuntimeBuilder::new()
///     .with_tps(120.0)
///     .with_frame_limit(240)
///     .build()
///     .run(&mut ui_box, &mut globals);
///
/// assert_eq!(summary.frames, 240);
/// ```
pub struct RuntimeBuilder {
    tps: f64,
    channel_capacity: usize,
    frame_limit: Option<u64>,
}

impl RuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 16,
            frame_limit: None,
        }
    }

    /// Sets the number of frames emitted per second.
    ///
    /// Every frame carries a fixed `dt` of `1 / tps` seconds.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets how many frames may queue up when the consumer falls behind.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Stops the run after `frames` frames.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Builds the runtime.
    pub fn build(self) -> Runtime {
        info!(
            "Building runtime (TPS: {}, channel: {}, frame limit: {:?})",
            self.tps, self.channel_capacity, self.frame_limit
        );

        let (stop_tx, stop_rx) = unbounded();
        Runtime {
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            frame_limit: self.frame_limit,
            stop_tx,
            stop_rx,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Runtime =============================================================

/// Fixed-rate frame driver.
pub struct Runtime {
    tps: f64,
    channel_capacity: usize,
    frame_limit: Option<u64>,
    stop_tx: Sender<()>,
    stop_rx: Receiver<()>,
}

impl Runtime {
    /// Returns a handle that stops this runtime from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            sender: self.stop_tx.clone(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Drives `ui_box` until the frame limit is reached or a stop is
    /// requested, and blocks until then. Effect events are logged at debug
    /// level.
    pub fn run(self, ui_box: &mut UiBox, globals: &mut GlobalContext) -> RunSummary {
        self.run_with(ui_box, globals, |event| debug!("Effect event: {:?}", event))
    }

    /// Like [`Runtime::run`], but hands every effect event to `on_event`.
    ///
    /// # Lifecycle
    ///
    /// 1. Starts the UIBox (widget behaviours are initialized)
    /// 2. Spawns the clock thread
    /// 3. Per frame: global manager update, UIBox tick, then the box's
    ///    effect events are drained into `on_event` in order
    /// 4. Joins the clock thread
    pub fn run_with<F>(
        self,
        ui_box: &mut UiBox,
        globals: &mut GlobalContext,
        mut on_event: F,
    ) -> RunSummary
    where
        F: FnMut(EffectEvent),
    {
        info!("Starting runtime (TPS: {})", self.tps);

        ui_box.start();

        //--- 1. Create frame channel --------------------------------------
        let (tx, rx) = bounded(self.channel_capacity);

        //--- 2. Spawn the clock thread ------------------------------------
        let clock = spawn_clock(tx, self.stop_rx, self.tps, self.frame_limit);

        //--- 3. Consume frames --------------------------------------------
        let mut summary = RunSummary {
            frames: 0,
            simulated_secs: 0.0,
            effect_events: 0,
        };

        for event in rx.iter() {
            match event {
                FrameEvent::Tick { dt } => {
                    globals.update();
                    ui_box.tick(dt);
                    for effect_event in ui_box.body.drain_effect_events() {
                        summary.effect_events += 1;
                        on_event(effect_event);
                    }
                    summary.frames += 1;
                    summary.simulated_secs += f64::from(dt);
                }
                FrameEvent::Stop => break,
            }
        }
        drop(rx);

        //--- 4. Cleanup ---------------------------------------------------
        match clock.join() {
            Ok(()) => info!("Clock thread terminated cleanly"),
            Err(e) => error!("Clock thread panicked: {:?}", e),
        }

        info!(
            "Runtime finished ({} frames, {:.3}s simulated)",
            summary.frames, summary.simulated_secs
        );
        summary
    }
}

//--- spawn_clock() -------------------------------------------------------
//
// Emits one `Tick` per frame period until the frame limit, a stop request
// or a vanished consumer, then a final `Stop`.
//
fn spawn_clock(
    tx: Sender<FrameEvent>,
    stop: Receiver<()>,
    tps: f64,
    frame_limit: Option<u64>,
) -> thread::JoinHandle<()> {
    let frame_duration = Duration::from_secs_f64(1.0 / tps);
    let dt = frame_duration.as_secs_f32();

    thread::spawn(move || {
        let mut emitted: u64 = 0;

        loop {
            let frame_start = Instant::now();

            if stop.try_recv().is_ok() {
                info!("Stop requested after {} frames", emitted);
                break;
            }
            if frame_limit.is_some_and(|limit| emitted >= limit) {
                break;
            }
            if tx.send(FrameEvent::Tick { dt }).is_err() {
                return;
            }
            emitted += 1;

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }

        let _ = tx.send(FrameEvent::Stop);
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
