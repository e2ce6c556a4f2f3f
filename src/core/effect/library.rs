//=========================================================================
// Effect Library
//=========================================================================
//
// Static effect definitions and per-controller instantiation.
//
// Definitions are loaded once (usually from configuration) and stored by
// name. Every call to `instantiate` builds a brand-new `EffectNode` tree,
// so two boxes using the same definition never share timer state.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::{EffectDuration, EffectNode, TickSchedule};

//=== Definitions =========================================================

/// Serializable description of an effect tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDef {
    pub name: String,

    #[serde(default = "default_active")]
    pub active: bool,

    /// Seconds; `-1` means infinite.
    #[serde(default = "default_duration")]
    pub duration: f32,

    #[serde(default)]
    pub tick: Option<TickDef>,

    #[serde(default)]
    pub sub_effects: Vec<EffectDef>,
}

/// Serializable tick capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickDef {
    pub interval: f32,

    /// Seconds after apply during which ticks fire. Unlimited when absent.
    #[serde(default)]
    pub window: Option<f32>,
}

fn default_active() -> bool {
    true
}

fn default_duration() -> f32 {
    EffectDuration::INFINITE_SENTINEL
}

impl EffectDef {
    /// Creates an active definition without tick capability or children.
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            active: true,
            duration,
            tick: None,
            sub_effects: Vec::new(),
        }
    }

    /// Builds a fresh node tree from this definition.
    ///
    /// Tick definitions with an interval below [`TickSchedule::MIN_INTERVAL`]
    /// are dropped with a warning; the node keeps its timer but loses the
    /// tick capability.
    pub fn build(&self) -> EffectNode {
        let mut node = EffectNode::new(self.name.clone(), EffectDuration::from_secs(self.duration))
            .with_active(self.active);

        if let Some(tick) = self.tick {
            if tick.interval >= TickSchedule::MIN_INTERVAL {
                node = node.with_schedule(TickSchedule::new(tick.interval, tick.window));
            } else {
                warn!(
                    "Effect '{}' has tick interval {} below {}s, ticking disabled",
                    self.name,
                    tick.interval,
                    TickSchedule::MIN_INTERVAL
                );
            }
        }

        self.sub_effects
            .iter()
            .fold(node, |node, sub| node.with_child(sub.build()))
    }
}

//=== EffectLibrary =======================================================

/// Named collection of effect definitions.
#[derive(Debug, Clone, Default)]
pub struct EffectLibrary {
    defs: HashMap<String, EffectDef>,
}

impl EffectLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self {
            defs: HashMap::new(),
        }
    }

    /// Creates a library from a list of definitions.
    pub fn from_defs(defs: impl IntoIterator<Item = EffectDef>) -> Self {
        let mut library = Self::new();
        for def in defs {
            library.register(def);
        }
        library
    }

    /// Registers a definition under its name, replacing any previous one.
    pub fn register(&mut self, def: EffectDef) {
        let name = def.name.clone();
        if self.defs.insert(name.clone(), def).is_some() {
            warn!("Effect {:?} was already registered and has been replaced", name);
        } else {
            debug!("Registered effect {:?}", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&EffectDef> {
        self.defs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Builds an independent effect tree for the named definition.
    ///
    /// Returns `None` for unknown names.
    pub fn instantiate(&self, name: &str) -> Option<EffectNode> {
        self.defs.get(name).map(EffectDef::build)
    }

    /// Instantiates every named effect, skipping unknown names with a
    /// warning.
    pub fn instantiate_all<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<EffectNode> {
        names
            .into_iter()
            .filter_map(|name| {
                let node = self.instantiate(name);
                if node.is_none() {
                    warn!("Unknown effect {:?} skipped", name);
                }
                node
            })
            .collect()
    }
}

//=== Tests ===============================================================
