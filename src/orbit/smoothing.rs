//! Per-frame exponential smoothing (first-order low-pass).
//!
//! Each call closes `dampening` of the remaining distance, so the number of
//! frames needed to get within a fraction ε of the target is roughly
//! `-ln(ε) / dampening`, regardless of how far away the target is.

use super::solver::shortest_angle_diff;

/// One smoothing step for an angle, always along the shorter arc.
#[inline]
pub fn smooth_angle(current: f64, target: f64, dampening: f64) -> f64 {
    current + shortest_angle_diff(target, current) * dampening
}

/// One smoothing step for a scalar (scale). No wraparound.
#[inline]
pub fn smooth_scalar(current: f64, target: f64, dampening: f64) -> f64 {
    current + (target - current) * dampening
}

/// Frames until the remaining distance drops below `epsilon` of the start.
pub fn frames_to_converge(dampening: f64, epsilon: f64) -> u32 {
    if dampening >= 1.0 {
        return 1;
    }
    (epsilon.ln() / (1.0 - dampening).ln()).ceil().max(0.0) as u32
}
