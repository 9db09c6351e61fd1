//! Geometry / angle solver.
//!
//! Pure functions, no state:
//! - Ring mode: node `i` sits at `base + i · 2π/N`
//! - Expanded mode: the selected node keeps offset 0, the other N−1 nodes
//!   are spread evenly over the arc left outside the reserved window
//! - Shortest-path angle difference for wraparound smoothing

use std::f64::consts::{PI, TAU};

/// Angular spacing between neighbours in ring mode.
#[inline]
pub fn ring_spacing(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    TAU / count as f64
}

/// Ring-mode target angle of node `index`.
#[inline]
pub fn ring_angle(base_rotation: f64, index: usize, count: usize) -> f64 {
    base_rotation + index as f64 * ring_spacing(count)
}

/// Circular index distance `index − selected`, wrapped into `[−N/2, N/2)`.
///
/// For even N the tie at |diff| = N/2 resolves to the negative (left) side.
pub fn index_distance(index: usize, selected: usize, count: usize) -> isize {
    let n = count as isize;
    let mut diff = index as isize - selected as isize;
    // 2·diff keeps the comparison exact for odd N
    while 2 * diff >= n {
        diff -= n;
    }
    while 2 * diff < -n {
        diff += n;
    }
    diff
}

/// Width of one non-selected slot in expanded mode. `None` for N < 2.
pub fn slot_width(count: usize, reserved_arc: f64) -> Option<f64> {
    if count < 2 {
        return None;
    }
    Some((TAU - reserved_arc) / (count - 1) as f64)
}

/// Offset from the anchor for a node `diff` places away from the selection.
///
/// `diff == 0` is the selected node itself.
pub fn offset_for_distance(diff: isize, step: f64, reserved_arc: f64) -> f64 {
    if diff == 0 {
        return 0.0;
    }
    let magnitude =
        reserved_arc * 0.5 + (diff.unsigned_abs() - 1) as f64 * step + step * 0.5;
    if diff > 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Relative offsets of every node for a selection at `selected`.
///
/// A single-node ring has nowhere to redistribute to, so every offset is 0.
pub fn expanded_offsets(count: usize, selected: usize, reserved_arc: f64) -> Vec<f64> {
    let Some(step) = slot_width(count, reserved_arc) else {
        return vec![0.0; count];
    };
    (0..count)
        .map(|i| offset_for_distance(index_distance(i, selected, count), step, reserved_arc))
        .collect()
}

/// The reserved window followed by the N−1 slot widths. Sums to 2π.
pub fn arc_segments(count: usize, reserved_arc: f64) -> Vec<f64> {
    match slot_width(count, reserved_arc) {
        Some(step) => std::iter::once(reserved_arc)
            .chain(std::iter::repeat(step).take(count - 1))
            .collect(),
        None => vec![TAU],
    }
}

/// `target − current`, normalized into (−π, π].
pub fn shortest_angle_diff(target: f64, current: f64) -> f64 {
    let diff = target - current;
    if !diff.is_finite() {
        return 0.0;
    }
    let wrapped = (diff + PI).rem_euclid(TAU) - PI;
    // rem_euclid lands on [−π, π); −π folds over to π
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}
