//=========================================================================
// Effect Events
//=========================================================================
//
// Notifications raised while an effect tree is applied, processed,
// ticked and cleared.
//
// Effects report to an `EffectTarget`. The box controller uses an
// `EffectEvents` queue as its target; callers drain it between ticks.
//
//=========================================================================

//=== EffectEvent =========================================================

/// A lifecycle notification from a single effect node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectEvent {
    /// The node went from cleared to applied.
    Applied(String),

    /// The node's tick schedule fired.
    Ticked(String),

    /// The node went from applied to cleared.
    Cleared(String),
}

//=== EffectTarget ========================================================

/// Receiver of effect lifecycle notifications.
///
/// All hooks default to doing nothing.
pub trait EffectTarget {
    fn effect_applied(&mut self, _name: &str) {}
    fn effect_ticked(&mut self, _name: &str) {}
    fn effect_cleared(&mut self, _name: &str) {}
}

//=== EffectEvents ========================================================

/// Queue of effect events collected during ticks.
#[derive(Debug, Default)]
pub struct EffectEvents {
    queue: Vec<EffectEvent>,
}

impl EffectEvents {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Returns an iterator over the queued events.
    pub fn iter(&self) -> impl Iterator<Item = &EffectEvent> {
        self.queue.iter()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all events from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<EffectEvent> {
        std::mem::take(&mut self.queue)
    }
}

impl EffectTarget for EffectEvents {
    fn effect_applied(&mut self, name: &str) {
        self.queue.push(EffectEvent::Applied(name.to_owned()));
    }

    fn effect_ticked(&mut self, name: &str) {
        self.queue.push(EffectEvent::Ticked(name.to_owned()));
    }

    fn effect_cleared(&mut self, name: &str) {
        self.queue.push(EffectEvent::Cleared(name.to_owned()));
    }
}

//=== Tests ===============================================================
