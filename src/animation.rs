//! Parametric target animation.
//!
//! Combines a [`PhaseOscillator`] with a per-axis sinusoid to move the
//! tracked object along a closed curve, one fresh position per tick. Only
//! the phase persists between frames; positions are computed, consumed and
//! discarded.

use glam::Vec3;

use crate::oscillator::PhaseOscillator;

/// A Lissajous-style path: per-axis amplitude and frequency around a base
/// point, cosine on X and sine on Y and Z.
///
/// The default reproduces the demo curve `(2cos 2t, 4sin 4t, 2sin 2t)`.
#[derive(Clone, Copy, Debug)]
pub struct OrbitPath {
    /// Center of the curve.
    pub base: Vec3,
    /// Per-axis swing from the base point.
    pub amplitude: Vec3,
    /// Per-axis phase multiplier.
    pub frequency: Vec3,
}

impl Default for OrbitPath {
    fn default() -> Self {
        Self {
            base: Vec3::ZERO,
            amplitude: Vec3::new(2.0, 4.0, 2.0),
            frequency: Vec3::new(2.0, 4.0, 2.0),
        }
    }
}

impl OrbitPath {
    /// Evaluates the path at the given phase.
    pub fn position(&self, phase: f32) -> Vec3 {
        self.base
            + Vec3::new(
                self.amplitude.x * (self.frequency.x * phase).cos(),
                self.amplitude.y * (self.frequency.y * phase).sin(),
                self.amplitude.z * (self.frequency.z * phase).sin(),
            )
    }
}

/// The moving target: an oscillator sweeping a phase along an [`OrbitPath`].
///
/// # Example
///
/// ```
/// use sightline::TargetAnimation;
///
/// let mut animation = TargetAnimation::default();
/// let p0 = animation.advance();
/// let p1 = animation.advance();
/// assert_ne!(p0, p1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TargetAnimation {
    pub oscillator: PhaseOscillator,
    pub path: OrbitPath,
}

impl Default for TargetAnimation {
    fn default() -> Self {
        // The demo's sweep: phase 0..5 at 0.05 per tick.
        Self {
            oscillator: PhaseOscillator::new(0.0, 5.0, 0.01),
            path: OrbitPath::default(),
        }
    }
}

impl TargetAnimation {
    pub fn new(oscillator: PhaseOscillator, path: OrbitPath) -> Self {
        Self { oscillator, path }
    }

    /// Advances the phase one tick and returns the target's new position.
    pub fn advance(&mut self) -> Vec3 {
        let phase = self.oscillator.tick();
        self.path.position(phase)
    }

    /// The position at the current phase, without advancing.
    pub fn position(&self) -> Vec3 {
        self.path.position(self.oscillator.phase())
    }
}
