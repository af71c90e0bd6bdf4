//! Fixed-timestep accumulator for the external game loop.
//!
//! Real elapsed time is banked as lag; the loop runs one `update()` per
//! whole step of lag and renders with the leftover fraction as the delay.

use invaders_core::constants::TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestep {
    step_ms: u64,
    lag_ms: u64,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl FixedTimestep {
    /// A zero step is bumped to 1 ms.
    pub fn new(step_ms: u64) -> Self {
        Self {
            step_ms: step_ms.max(1),
            lag_ms: 0,
        }
    }

    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }

    pub fn lag_ms(&self) -> u64 {
        self.lag_ms
    }

    /// Bank elapsed wall time.
    pub fn accumulate(&mut self, elapsed_ms: u64) {
        self.lag_ms = self.lag_ms.saturating_add(elapsed_ms);
    }

    /// Take one step from the lag if a whole step is available.
    pub fn consume_tick(&mut self) -> bool {
        if self.lag_ms >= self.step_ms {
            self.lag_ms -= self.step_ms;
            true
        } else {
            false
        }
    }

    /// Fraction of the next step already elapsed, in `[0, 1)` once every
    /// available tick has been consumed.
    pub fn delay(&self) -> f32 {
        self.lag_ms as f32 / self.step_ms as f32
    }
}
