//! The "drifting away from target" pruning heuristic.
//!
//! A lossy, intentionally aggressive filter: branches whose trailing moves
//! keep receding from the target are abandoned early. It trades completeness
//! for runtime and may discard paths that only succeed after a temporary
//! recession.

use crate::coord::Coord;
use crate::path::PathStep;

/// True iff the last `window` recorded steps all receded from `target`,
/// judged against the step just before them.
///
/// Inactive until `window` moves are on the path. With exactly `window`
/// steps only `window - 1` samples follow the base, so the first possible
/// cutoff is at move `window + 1`.
///
/// Recession is judged per axis as growth of `|target| - |position|`, a
/// distance-from-origin proxy rather than a true distance to target; it
/// misreads starts and targets on opposite sides of an axis. The proxy is
/// kept as-is: it decides which branches are pruned, and with them which of
/// several equally short paths a search discovers first.
pub fn is_drifting_away(steps: &[PathStep], target: Coord, window: usize) -> bool {
    assert!(window >= 1);

    if steps.len() < window {
        return false;
    }

    let sample_len = (window + 1).min(steps.len());
    let tail = &steps[steps.len() - sample_len..];

    let base = tail[0].to;
    let base_dx = target.x.abs() - base.x.abs();
    let base_dy = target.y.abs() - base.y.abs();

    let mut away = 0;
    for step in &tail[1..] {
        let dx = target.x.abs() - step.to.x.abs();
        let dy = target.y.abs() - step.to.y.abs();
        if dx > base_dx || dy > base_dy {
            away += 1;
        }
    }

    away > window - 1
}
