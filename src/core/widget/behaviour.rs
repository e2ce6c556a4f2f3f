//=========================================================================
// Widget Behaviours
//=========================================================================
//
// Pluggable per-frame logic attached to a widget controller.
//
// Behaviours are configured by name. A `BehaviourRegistry` maps names to
// factories so that configuration can be resolved at load time.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::{ButtonConfig, WidgetTypeState};
use crate::core::uibox::BoxView;

//=== WidgetContext =======================================================

/// Read-only view of the widget and the box it belongs to, handed to
/// behaviours.
#[derive(Debug, Clone, Copy)]
pub struct WidgetContext<'a> {
    pub type_state: WidgetTypeState,
    pub buttons: &'a [ButtonConfig],
    pub host: BoxView<'a>,
}

//=== Behaviour Trait =====================================================

/// Per-frame widget logic.
///
/// Only `process()` is required; `initialize()` defaults to doing nothing.
pub trait Behaviour: Send {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Called once when the widget controller starts.
    fn initialize(&mut self, _widget: &WidgetContext<'_>) {}

    /// Called every tick, in configuration order.
    fn process(&mut self, widget: &WidgetContext<'_>, dt: f32);
}

//=== Built-in Behaviours =================================================

/// Logs every processed frame at trace level and counts them.
#[derive(Debug, Default)]
pub struct TraceBehaviour {
    frames: u64,
}

impl TraceBehaviour {
    pub const NAME: &'static str = "trace";

    pub fn new() -> Self {
        Self { frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Behaviour for TraceBehaviour {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn initialize(&mut self, widget: &WidgetContext<'_>) {
        debug!(
            "Trace behaviour initialized ({} widget, {} buttons, box {:?} in {} state)",
            widget.type_state,
            widget.buttons.len(),
            widget.host.text,
            widget.host.state
        );
    }

    fn process(&mut self, widget: &WidgetContext<'_>, dt: f32) {
        self.frames += 1;
        trace!(
            "Widget frame {} ({}, box {}, dt: {})",
            self.frames,
            widget.type_state,
            widget.host.state,
            dt
        );
    }
}

//=== BehaviourRegistry ===================================================

type BehaviourFactory = Box<dyn Fn() -> Box<dyn Behaviour> + Send + Sync>;

/// Named behaviour factories.
pub struct BehaviourRegistry {
    factories: HashMap<String, BehaviourFactory>,
}

impl BehaviourRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry pre-loaded with the built-in behaviours.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(TraceBehaviour::NAME, || Box::new(TraceBehaviour::new()));
        registry
    }

    /// Registers a factory, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Behaviour> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Box::new(factory)).is_some() {
            warn!("Behaviour {:?} was already registered and has been replaced", name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Creates a fresh behaviour, or `None` for unknown names.
    pub fn create(&self, name: &str) -> Option<Box<dyn Behaviour>> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Creates every named behaviour in order, skipping unknown names with
    /// a warning.
    pub fn create_all<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<Box<dyn Behaviour>> {
        names
            .into_iter()
            .filter_map(|name| {
                let behaviour = self.create(name);
                if behaviour.is_none() {
                    warn!("Unknown behaviour {:?} skipped", name);
                }
                behaviour
            })
            .collect()
    }
}

impl Default for BehaviourRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_behaviour_counts_frames() {
        let mut behaviour = TraceBehaviour::new();
        let widget = WidgetContext {
            type_state: WidgetTypeState::Button,
            buttons: &[],
            host: BoxView::default(),
        };

        behaviour.process(&widget, 0.1);
        behaviour.process(&widget, 0.1);
        assert_eq!(behaviour.frames(), 2);
    }

    #[test]
    fn registry_skips_unknown_names() {
        let registry = BehaviourRegistry::with_builtins();
        let behaviours = registry.create_all(["trace", "hover", "trace"]);
        assert_eq!(behaviours.len(), 2);
        assert!(behaviours.iter().all(|b| b.name() == TraceBehaviour::NAME));
    }

    #[test]
    fn empty_registry_creates_nothing() {
        let registry = BehaviourRegistry::new();
        assert!(!registry.contains("trace"));
        assert!(registry.create("trace").is_none());
    }
}
