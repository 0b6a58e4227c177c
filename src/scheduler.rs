//! Wall-clock to logical-tick conversion
//!
//! Real time accumulates frame by frame and is spent in whole steps. The
//! remainder carries over, so the number of ticks for a given stretch of time
//! is always `floor(accumulated / step)` regardless of frame rate.

/// Fixed-step accumulator driven by a millisecond clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedStep {
    step_ms: u64,
    last_time_ms: u64,
    accumulator_ms: u64,
}

impl FixedStep {
    pub fn new(step_ms: u64, now_ms: u64) -> Self {
        debug_assert!(step_ms > 0, "step must be positive");
        Self {
            step_ms,
            last_time_ms: now_ms,
            accumulator_ms: 0,
        }
    }

    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }

    pub fn accumulator_ms(&self) -> u64 {
        self.accumulator_ms
    }

    /// Bank the time elapsed since the last observation.
    ///
    /// A zero elapsed time (clock coarser than the frame) leaves the last
    /// observation untouched. Returns the elapsed milliseconds.
    pub fn accumulate(&mut self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.last_time_ms);
        if elapsed != 0 {
            self.last_time_ms = now_ms;
        }
        self.accumulator_ms += elapsed;
        elapsed
    }

    /// Spend one step if enough time is banked
    pub fn try_step(&mut self) -> bool {
        if self.accumulator_ms >= self.step_ms {
            self.accumulator_ms -= self.step_ms;
            true
        } else {
            false
        }
    }

    /// Steps the banked time currently covers
    pub fn pending_ticks(&self) -> u64 {
        self.accumulator_ms / self.step_ms
    }

    /// Forget banked time and restart from `now_ms`
    pub fn reset(&mut self, now_ms: u64) {
        self.last_time_ms = now_ms;
        self.accumulator_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(step: &mut FixedStep) -> u32 {
        let mut ticks = 0;
        while step.try_step() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_fifty_ms_is_three_ticks_of_sixteen() {
        let mut step = FixedStep::new(16, 1000);
        assert_eq!(step.accumulate(1050), 50);
        assert_eq!(step.pending_ticks(), 3);
        assert_eq!(drain(&mut step), 3);
        assert_eq!(step.accumulator_ms(), 2);
    }

    #[test]
    fn test_remainder_carries_to_next_frame() {
        let mut step = FixedStep::new(16, 0);
        step.accumulate(10);
        assert_eq!(drain(&mut step), 0);
        step.accumulate(20);
        assert_eq!(drain(&mut step), 1);
        assert_eq!(step.accumulator_ms(), 4);
    }

    #[test]
    fn test_zero_elapsed_keeps_last_time() {
        let mut step = FixedStep::new(16, 100);
        assert_eq!(step.accumulate(100), 0);
        assert_eq!(step.accumulate(116), 16);
        assert_eq!(drain(&mut step), 1);
    }

    #[test]
    fn test_tick_count_independent_of_frame_rate() {
        let mut coarse = FixedStep::new(16, 0);
        let mut fine = FixedStep::new(16, 0);
        let mut coarse_ticks = 0;
        let mut fine_ticks = 0;

        for frame in 1..=10u64 {
            coarse.accumulate(frame * 33);
            coarse_ticks += drain(&mut coarse);
        }
        for frame in 1..=330u64 {
            fine.accumulate(frame);
            fine_ticks += drain(&mut fine);
        }

        assert_eq!(coarse_ticks, 330 / 16);
        assert_eq!(fine_ticks, 330 / 16);
    }

    #[test]
    fn test_reset_drops_banked_time() {
        let mut step = FixedStep::new(16, 0);
        step.accumulate(100);
        step.reset(500);
        assert_eq!(step.accumulator_ms(), 0);
        step.accumulate(516);
        assert_eq!(drain(&mut step), 1);
    }
}
