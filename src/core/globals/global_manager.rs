//=========================================================================
// Global Manager
//=========================================================================
//
// Process-wide coordinator holding non-owning references to the game's
// subsystem managers (state, game, ui, audio).
//
// Subsystems are owned by the host; the manager keeps `Weak` handles and
// never extends their lifetime.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Weak};

use log::{info, trace};

//=== Subsystem Trait =====================================================

/// A subsystem manager referenced by the global manager.
pub trait Subsystem: Send + Sync {
    fn name(&self) -> &str;
}

//=== Subsystems ==========================================================

/// The four subsystem slots of a global manager.
#[derive(Default, Clone)]
pub struct Subsystems {
    pub state: Option<Weak<dyn Subsystem>>,
    pub game: Option<Weak<dyn Subsystem>>,
    pub ui: Option<Weak<dyn Subsystem>>,
    pub audio: Option<Weak<dyn Subsystem>>,
}

impl Subsystems {
    /// Names of the subsystems that are assigned and still alive.
    pub fn live_names(&self) -> Vec<String> {
        [&self.state, &self.game, &self.ui, &self.audio]
            .into_iter()
            .flatten()
            .filter_map(Weak::upgrade)
            .map(|subsystem| subsystem.name().to_owned())
            .collect()
    }
}

//=== GlobalManager =======================================================

pub struct GlobalManager {
    subsystems: Subsystems,
    frames: u64,
}

impl GlobalManager {
    pub fn new() -> Self {
        Self {
            subsystems: Subsystems::default(),
            frames: 0,
        }
    }

    //--- Subsystem Wiring -------------------------------------------------

    pub fn with_state_manager(mut self, manager: &Arc<dyn Subsystem>) -> Self {
        self.subsystems.state = Some(Arc::downgrade(manager));
        self
    }

    pub fn with_game_manager(mut self, manager: &Arc<dyn Subsystem>) -> Self {
        self.subsystems.game = Some(Arc::downgrade(manager));
        self
    }

    pub fn with_ui_manager(mut self, manager: &Arc<dyn Subsystem>) -> Self {
        self.subsystems.ui = Some(Arc::downgrade(manager));
        self
    }

    pub fn with_audio_manager(mut self, manager: &Arc<dyn Subsystem>) -> Self {
        self.subsystems.audio = Some(Arc::downgrade(manager));
        self
    }

    pub fn subsystems(&self) -> &Subsystems {
        &self.subsystems
    }

    //--- Lifecycle --------------------------------------------------------

    pub(crate) fn start(&self) {
        info!("Game started");
    }

    /// Per-frame hook.
    pub fn update(&mut self) {
        self.frames += 1;
        trace!("Game updating (frame {})", self.frames);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for GlobalManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GlobalManager {
    fn drop(&mut self) {
        info!("Global manager destroyed after {} frames", self.frames);
    }
}

//=== Tests ===============================================================
