//=========================================================================
// Global Engine State
//=========================================================================
//
// Process-wide manager and its explicit owner.
//
// Architecture:
//   GlobalContext: at most one GlobalManager (bootstrap / teardown)
//   GlobalManager: weak references to state, game, ui, audio subsystems
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;
mod global_manager;

//=== Public API ==========================================================

pub use global_context::{Bootstrap, GlobalContext};
pub use global_manager::{GlobalManager, Subsystem, Subsystems};
