// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Pointer smoothing, parallax and idle oscillation

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Delay between neighbouring diagonals in the solved celebration
pub const STAGGER_MS: f64 = 40.0;
/// Length of one tile's celebration pulse
pub const CELEBRATION_MS: f64 = 400.0;
/// Peak scale of the celebration pulse
pub const CELEBRATION_PEAK: f64 = 1.15;
/// Idle phase shift per step along the grid diagonal, in radians
pub const PHASE_STEP: f64 = 0.4;

/// Motion tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Degrees of rotation at full pointer deflection for an edge tile
    pub strength: f64,
    /// Fraction of the remaining distance covered per tick
    pub smoothing: f64,
    /// Idle oscillation amplitude in degrees
    pub idle_amplitude: f64,
    /// Idle oscillation period in milliseconds
    pub idle_period_ms: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            strength: 30.0,
            smoothing: 0.12,
            idle_amplitude: 3.0,
            idle_period_ms: 4000.0,
        }
    }
}

impl MotionSettings {
    /// Bring every field into its usable range: `smoothing` into (0, 1],
    /// the rest non-negative. Non-finite values fall back to the defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f64, d: f64| if v.is_finite() { v } else { d };
        let smoothing = finite_or(self.smoothing, defaults.smoothing);
        Self {
            strength: finite_or(self.strength, defaults.strength).max(0.0),
            smoothing: if smoothing > 0.0 { smoothing.min(1.0) } else { defaults.smoothing },
            idle_amplitude: finite_or(self.idle_amplitude, defaults.idle_amplitude).max(0.0),
            idle_period_ms: finite_or(self.idle_period_ms, defaults.idle_period_ms).max(0.0),
        }
    }
}

/// Linear interpolation
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Pointer target and its smoothed follower, both in [-1, 1]²
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    target: (f64, f64),
    smoothed: (f64, f64),
}

impl Pointer {
    /// Set the target; each axis is clamped to [-1, 1] and the vector to
    /// the unit disc
    pub fn set_target(&mut self, x: f64, y: f64) {
        let x = if x.is_finite() { x.clamp(-1.0, 1.0) } else { 0.0 };
        let y = if y.is_finite() { y.clamp(-1.0, 1.0) } else { 0.0 };
        let len = x.hypot(y);
        self.target = if len > 1.0 { (x / len, y / len) } else { (x, y) };
    }

    /// Pointer left the widget: decay towards the centre
    pub fn clear(&mut self) {
        self.target = (0.0, 0.0);
    }

    /// Move the smoothed vector a `smoothing` fraction towards the target.
    /// The fraction is clamped to [0, 1] so the follower never overshoots.
    pub fn step(&mut self, smoothing: f64) {
        let smoothing = if smoothing.is_finite() { smoothing.clamp(0.0, 1.0) } else { 0.0 };
        self.smoothed.0 = lerp(self.smoothed.0, self.target.0, smoothing);
        self.smoothed.1 = lerp(self.smoothed.1, self.target.1, smoothing);
    }

    /// Current target
    #[must_use]
    pub fn target(&self) -> (f64, f64) {
        self.target
    }

    /// Current smoothed vector
    #[must_use]
    pub fn smoothed(&self) -> (f64, f64) {
        self.smoothed
    }

    /// Drop all motion state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Offset of position `i` of `count` from the centre, in [-1, 1]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn normalized_offset(i: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    let half = (count - 1) as f64 / 2.0;
    (i as f64 - half) / half
}

/// Parallax rotation: the tile offset dotted with the pointer, scaled
#[must_use]
pub fn pointer_delta(offset: (f64, f64), pointer: (f64, f64), strength: f64) -> f64 {
    (offset.0 * pointer.0 + offset.1 * pointer.1) * strength
}

/// Ambient sinusoidal rotation at `now_ms`
#[must_use]
pub fn idle_delta(now_ms: f64, phase: f64, amplitude: f64, period_ms: f64) -> f64 {
    if period_ms <= 0.0 || amplitude == 0.0 {
        return 0.0;
    }
    amplitude * (TAU * now_ms / period_ms + phase).sin()
}

/// Scale of a tile `elapsed_ms` into the celebration, given its stagger delay
#[must_use]
pub fn celebration_scale(elapsed_ms: f64, delay_ms: f64) -> f64 {
    let t = (elapsed_ms - delay_ms) / CELEBRATION_MS;
    if !(0.0..=1.0).contains(&t) {
        return 1.0;
    }
    1.0 + (CELEBRATION_PEAK - 1.0) * (PI * t).sin()
}
