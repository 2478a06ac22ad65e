use std::time::Instant;

/// Measures the wall time between physics ticks
///
/// The first tick measures from construction (or the last `reset`).
#[derive(Debug, Clone, Copy)]
pub struct StepClock {
    last: Instant,
}

impl StepClock {
    /// Starts measuring now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Starts measuring from `start`
    pub fn starting_at(start: Instant) -> Self {
        Self { last: start }
    }

    /// Seconds elapsed since the previous tick
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Seconds elapsed between the previous tick and `now`
    ///
    /// A `now` earlier than the previous tick yields zero.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }

    /// Restarts measuring now, dropping the time accumulated since the last tick
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}
