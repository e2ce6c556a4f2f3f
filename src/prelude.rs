//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use uibox_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::runtime::{RunSummary, Runtime, RuntimeBuilder, StopHandle};

// Configuration
pub use crate::config::{BoxConfig, ConfigError, UiBoxConfig, WidgetConfig};

// Box controller
pub use crate::core::uibox::{BoxController, BoxControllerBuilder, BoxState, BoxView};
pub use crate::core::UiBox;

// Effects
pub use crate::core::effect::{
    EffectDef, EffectDuration, EffectEvent, EffectLibrary, EffectNode, EffectTarget, TickSchedule,
};

// Widget
pub use crate::core::widget::{
    Behaviour, BehaviourRegistry, ButtonConfig, WidgetContext, WidgetController, WidgetTypeState,
};

// Global context
pub use crate::core::globals::{Bootstrap, GlobalContext, GlobalManager, Subsystem};

// Host handles
pub use crate::core::handles::{
    PhysicsBody, SimBody, SimLabel, SimTransform, TextLabel, TransformHandle,
};
