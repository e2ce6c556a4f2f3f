//=========================================================================
// Global Context
//=========================================================================
//
// Explicit owner of the single global manager instance.
//
// Replaces a hidden static singleton: the host creates one context,
// passes it by reference, bootstraps a manager into it and tears it down
// explicitly. A second bootstrap while an instance exists is rejected and
// the duplicate is destroyed.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::GlobalManager;

//=== Bootstrap ===========================================================

/// Outcome of [`GlobalContext::bootstrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// The manager became the instance.
    Registered,

    /// An instance already existed; the new manager was destroyed.
    Destroyed,
}

//=== GlobalContext =======================================================

/// Holds at most one [`GlobalManager`].
pub struct GlobalContext {
    instance: Option<GlobalManager>,
}

impl GlobalContext {
    /// Creates a context with no instance.
    pub fn new() -> Self {
        Self { instance: None }
    }

    /// Registers `manager` as the instance unless one already exists.
    pub fn bootstrap(&mut self, manager: GlobalManager) -> Bootstrap {
        info!("Global manager loading");

        if self.instance.is_some() {
            drop(manager);
            warn!("Duplicate global manager destroyed");
            return Bootstrap::Destroyed;
        }

        manager.start();
        self.instance = Some(manager);
        info!("Game initialized");
        Bootstrap::Registered
    }

    pub fn instance(&self) -> Option<&GlobalManager> {
        self.instance.as_ref()
    }

    pub fn instance_mut(&mut self) -> Option<&mut GlobalManager> {
        self.instance.as_mut()
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.is_some()
    }

    /// Runs the instance's per-frame hook, if any.
    pub fn update(&mut self) {
        if let Some(manager) = self.instance.as_mut() {
            manager.update();
        }
    }

    /// Removes and returns the instance.
    pub fn teardown(&mut self) -> Option<GlobalManager> {
        let manager = self.instance.take();
        if manager.is_some() {
            info!("Global manager torn down");
        }
        manager
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
