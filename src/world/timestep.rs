//! Fixed-timestep clock owned by the caller.

use crate::error::{ensure_positive, PhysicsError, Result};

/// Logical step length in seconds.
pub const DEFAULT_STEP: f64 = 1.0 / 60.0;
/// Most logical steps a single update may run before dropping time.
pub const DEFAULT_MAX_STEPS_PER_UPDATE: usize = 8;

/// Turns variable frame times into a whole number of fixed steps.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    step: f64,
    accumulator: f64,
    max_steps_per_update: usize,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            accumulator: 0.0,
            max_steps_per_update: DEFAULT_MAX_STEPS_PER_UPDATE,
        }
    }
}

impl FixedTimestep {
    pub fn new(step: f64, max_steps_per_update: usize) -> Result<Self> {
        ensure_positive("step", step)?;
        if max_steps_per_update == 0 {
            return Err(PhysicsError::InvalidConfig(
                "max_steps_per_update must be at least 1",
            ));
        }
        Ok(Self {
            step,
            accumulator: 0.0,
            max_steps_per_update,
        })
    }

    pub fn step_size(&self) -> f64 {
        self.step
    }

    /// Unconsumed time, always below one step after `accumulate`.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn max_steps_per_update(&self) -> usize {
        self.max_steps_per_update
    }

    /// Adds `elapsed` seconds and returns how many fixed steps are due.
    ///
    /// Negative or non-finite `elapsed` values are ignored. When more than
    /// `max_steps_per_update` steps are due, the surplus time is discarded.
    pub fn accumulate(&mut self, elapsed: f64) -> usize {
        if !elapsed.is_finite() || elapsed < 0.0 {
            log::debug!("ignoring elapsed time {elapsed}");
            return 0;
        }

        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps_per_update {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            log::warn!(
                "simulation is falling behind, dropping {:.3}s after {steps} steps",
                self.accumulator
            );
            self.accumulator = 0.0;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
