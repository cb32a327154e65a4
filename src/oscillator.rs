//! Triangle-wave phase oscillator.
//!
//! Drives back-and-forth motion: a scalar phase advances by a fixed step
//! each tick and reflects off configurable bounds. The phase lives in an
//! explicit struct threaded through the frame loop, so state stays with its
//! owner instead of in module globals.

/// A scalar phase that sweeps between two bounds, reversing at each.
///
/// `step` is a fraction of the range per tick: with bounds `(0.0, 5.0)` and
/// a step of `0.01`, the phase moves 0.05 per tick and completes a full
/// up-and-down sweep in 200 ticks.
///
/// # Example
///
/// ```
/// use sightline::PhaseOscillator;
///
/// let mut osc = PhaseOscillator::new(0.0, 5.0, 0.01);
/// for _ in 0..1000 {
///     let phase = osc.tick();
///     assert!((0.0..=5.0).contains(&phase));
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PhaseOscillator {
    phase: f32,
    lower: f32,
    upper: f32,
    step: f32,
    direction: f32,
}

impl PhaseOscillator {
    /// Creates an oscillator starting at `lower`, moving upward.
    ///
    /// `step` must be at most 1.0 (one full range per tick) for the
    /// reflection at the bounds to stay inside the range.
    pub fn new(lower: f32, upper: f32, step: f32) -> Self {
        Self {
            phase: lower,
            lower,
            upper,
            step,
            direction: 1.0,
        }
    }

    /// Sets the starting phase, clamped into the bounds.
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase.clamp(self.lower, self.upper);
        self
    }

    /// The current phase, unchanged.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Current sweep direction: `1.0` upward, `-1.0` downward.
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Advances one tick and returns the new phase.
    ///
    /// On crossing a bound the direction inverts and the overshoot is folded
    /// back inside the range, so the returned phase never leaves
    /// `[lower, upper]`.
    pub fn tick(&mut self) -> f32 {
        self.phase += self.direction * self.step * (self.upper - self.lower);

        if self.phase > self.upper {
            self.phase = self.upper - (self.phase - self.upper);
            self.direction = -self.direction;
        } else if self.phase < self.lower {
            self.phase = self.lower + (self.lower - self.phase);
            self.direction = -self.direction;
        }

        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_inside_bounds() {
        let mut osc = PhaseOscillator::new(0.0, 5.0, 0.01);
        for _ in 0..10_000 {
            let phase = osc.tick();
            assert!(phase >= 0.0, "phase {} fell below lower bound", phase);
            assert!(phase <= 5.0, "phase {} exceeded upper bound", phase);
        }
    }

    #[test]
    fn reverses_at_each_bound() {
        let mut osc = PhaseOscillator::new(0.0, 5.0, 0.01);
        let mut reversals = 0;
        let mut prev_direction = osc.direction();

        for _ in 0..1000 {
            osc.tick();
            if osc.direction() != prev_direction {
                reversals += 1;
                // A reversal only ever happens at a bound.
                let phase = osc.phase();
                let near_bound = phase > 5.0 - 0.05 || phase < 0.05;
                assert!(near_bound, "reversed mid-range at phase {}", phase);
                prev_direction = osc.direction();
            }
        }

        // 0.05 per tick over 1000 ticks is ten full half-sweeps.
        assert_eq!(reversals, 10);
    }

    #[test]
    fn sweep_is_linear_away_from_bounds() {
        let mut osc = PhaseOscillator::new(0.0, 5.0, 0.01).with_phase(1.0);
        let before = osc.phase();
        osc.tick();
        assert!((osc.phase() - before - 0.05).abs() < 1e-6);
    }

    #[test]
    fn overshoot_reflects_back_inside() {
        // Start one tick shy of the top; the next tick would land at 5.03
        // and must fold back to 4.97.
        let mut osc = PhaseOscillator::new(0.0, 5.0, 0.01).with_phase(4.98);
        let phase = osc.tick();
        assert!((phase - 4.97).abs() < 1e-5, "got {}", phase);
        assert_eq!(osc.direction(), -1.0);
    }

    #[test]
    fn starting_phase_is_clamped() {
        let osc = PhaseOscillator::new(0.0, 5.0, 0.01).with_phase(9.0);
        assert_eq!(osc.phase(), 5.0);
    }
}
