//=========================================================================
// Effect System
//=========================================================================
//
// Composable, timed, tree-structured modifiers applied to a UIBox.
//
// Architecture:
//   EffectNode
//     ├─ duration / remaining   (finite timer or infinite)
//     ├─ schedule               (optional periodic tick capability)
//     └─ children: Vec<EffectNode>
//
// Flow (per controller tick):
//   apply() → process(dt) → [timer expires] → clear()
//
// Every operation is a no-op on an inactive node and recurses depth-first
// into active children, in order.
//
//=========================================================================

//=== Module Declarations =================================================

mod events;
mod library;
mod tick;

//=== Public API ==========================================================

pub use events::{EffectEvent, EffectEvents, EffectTarget};
pub use library::{EffectDef, EffectLibrary, TickDef};
pub use tick::TickSchedule;

//=== EffectDuration ======================================================

/// Lifetime of an applied effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectDuration {
    /// Stays applied until cleared explicitly.
    Infinite,

    /// Clears itself after this many seconds of processing.
    Seconds(f32),
}

impl EffectDuration {
    /// Sentinel used in effect definitions for an infinite duration.
    pub const INFINITE_SENTINEL: f32 = -1.0;

    /// Relative slack when deciding a finite timer has run out. Absorbs the
    /// rounding of repeated `f32` subtraction (0.3s of three 0.1s frames).
    const EXPIRY_TOLERANCE: f32 = 1.0e-5;

    /// Converts a raw duration, treating the `-1` sentinel as infinite.
    pub fn from_secs(secs: f32) -> Self {
        if secs == Self::INFINITE_SENTINEL {
            Self::Infinite
        } else {
            Self::Seconds(secs)
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Seconds(_))
    }

    /// Whether a timer started at this duration has run out.
    fn expired(&self, remaining: f32) -> bool {
        match *self {
            Self::Infinite => false,
            Self::Seconds(secs) => remaining <= Self::EXPIRY_TOLERANCE * secs.max(1.0),
        }
    }
}

//=== EffectNode ==========================================================

/// A node of an effect tree.
///
/// Nodes are owned by exactly one box controller. Instantiate a fresh tree
/// per controller (see [`EffectLibrary::instantiate`]); timers are never
/// shared between boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectNode {
    name: String,
    active: bool,
    applied: bool,
    duration: EffectDuration,
    remaining: f32,
    schedule: Option<TickSchedule>,
    children: Vec<EffectNode>,
}

impl EffectNode {
    //--- Construction -----------------------------------------------------

    /// Creates an active, unapplied node without children.
    pub fn new(name: impl Into<String>, duration: EffectDuration) -> Self {
        Self {
            name: name.into(),
            active: true,
            applied: false,
            duration,
            remaining: 0.0,
            schedule: None,
            children: Vec::new(),
        }
    }

    /// Appends a sub-effect.
    pub fn with_child(mut self, child: EffectNode) -> Self {
        self.children.push(child);
        self
    }

    /// Gives the node a periodic tick capability.
    pub fn with_schedule(mut self, schedule: TickSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Sets whether the node takes part in apply/process/clear.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    pub fn duration(&self) -> EffectDuration {
        self.duration
    }

    /// Seconds left before the node clears itself. Meaningless for
    /// infinite nodes.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn schedule(&self) -> Option<&TickSchedule> {
        self.schedule.as_ref()
    }

    /// Whether the node responds to [`EffectNode::tick`] cascades.
    pub fn ticks(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn children(&self) -> &[EffectNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [EffectNode] {
        &mut self.children
    }

    //--- Lifecycle --------------------------------------------------------

    /// Applies the node and its active descendants.
    ///
    /// Does nothing if the node is inactive or already applied, so calling
    /// it every frame never restarts a running timer.
    pub fn apply(&mut self, target: &mut dyn EffectTarget) {
        if !self.active || self.applied {
            return;
        }

        self.applied = true;
        if let EffectDuration::Seconds(secs) = self.duration {
            self.remaining = secs;
        }
        if let Some(schedule) = self.schedule.as_mut() {
            schedule.reset();
        }
        target.effect_applied(&self.name);

        for child in self.children.iter_mut().filter(|c| c.active) {
            child.apply(target);
        }
    }

    /// Advances timers by `dt` seconds.
    ///
    /// A finite node clears itself (and its subtree) once its remaining
    /// time reaches zero. Active children are processed regardless of
    /// whether this node is applied.
    pub fn process(&mut self, target: &mut dyn EffectTarget, dt: f32) {
        if !self.active {
            return;
        }

        if self.applied {
            let due = self.schedule.as_mut().map_or(0, |s| s.advance(dt));
            for _ in 0..due {
                target.effect_ticked(&self.name);
            }

            if self.duration.is_finite() {
                self.remaining -= dt;
                if self.duration.expired(self.remaining) {
                    self.clear(target);
                }
            }
        }

        for child in self.children.iter_mut().filter(|c| c.active) {
            child.process(target, dt);
        }
    }

    /// Clears the node and its active descendants.
    pub fn clear(&mut self, target: &mut dyn EffectTarget) {
        if !self.active {
            return;
        }

        if self.applied {
            self.applied = false;
            target.effect_cleared(&self.name);
        }

        for child in self.children.iter_mut().filter(|c| c.active) {
            child.clear(target);
        }
    }

    /// Fires a tick on this node and cascades into active tick-capable
    /// children.
    pub fn tick(&mut self, target: &mut dyn EffectTarget) {
        if !self.active {
            return;
        }

        target.effect_ticked(&self.name);

        for child in self.children.iter_mut().filter(|c| c.active && c.ticks()) {
            child.tick(target);
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
