//=========================================================================
// Tick Schedule
//=========================================================================
//
// Fixed-interval accumulator for tick-capable effects.
//
// While the owning effect is applied, elapsed frame time is accumulated
// and converted into a whole number of ticks. A tick fires every
// `interval` seconds; the optional `window` stops ticking once that many
// seconds have passed since the effect was applied.
//
// Intervals are bounded below by `MIN_INTERVAL`, so a single frame never
// owes more than a bounded number of ticks.
//
//=========================================================================

/// Periodic tick scheduler attached to an effect node.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSchedule {
    interval: f32,
    window: Option<f32>,
    accumulator: f32,
    elapsed: f32,
    fired: u64,
}

impl TickSchedule {
    /// Shortest accepted interval, in seconds.
    pub const MIN_INTERVAL: f32 = 1.0e-3;

    /// Creates a schedule firing every `interval` seconds.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is below [`TickSchedule::MIN_INTERVAL`] or not
    /// finite.
    pub fn new(interval: f32, window: Option<f32>) -> Self {
        assert!(
            interval.is_finite() && interval >= Self::MIN_INTERVAL,
            "Tick interval must be at least {}s, got {}",
            Self::MIN_INTERVAL,
            interval
        );
        Self {
            interval,
            window,
            accumulator: 0.0,
            elapsed: 0.0,
            fired: 0,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn window(&self) -> Option<f32> {
        self.window
    }

    /// Total ticks fired since the last reset.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Rewinds the schedule. Called when the owning effect is applied.
    pub(crate) fn reset(&mut self) {
        self.accumulator = 0.0;
        self.elapsed = 0.0;
        self.fired = 0;
    }

    /// Advances the schedule by `dt` and returns how many ticks are due.
    pub(crate) fn advance(&mut self, dt: f32) -> u32 {
        let mut step = dt.max(0.0);

        if let Some(window) = self.window {
            let left = (window - self.elapsed).max(0.0);
            step = step.min(left);
        }

        self.elapsed += dt.max(0.0);
        self.accumulator += step;

        let whole = (f64::from(self.accumulator) / f64::from(self.interval)).floor();
        let due = whole.min(f64::from(u32::MAX)) as u32;
        if due > 0 {
            let rest = f64::from(self.accumulator) - f64::from(due) * f64::from(self.interval);
            self.accumulator = (rest as f32).clamp(0.0, self.interval);
        }

        self.fired += u64::from(due);
        due
    }
}

//=== Tests ===============================================================
