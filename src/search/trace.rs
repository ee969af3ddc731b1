//! Search tracing collaborators.
//!
//! The searcher narrates progress through a [`TraceLike`] value supplied by
//! the caller; there is no global logger and the core reads no process-wide
//! state. [`NoTrace`] ignores everything; [`ConsoleTrace`] prints a
//! verbosity-gated account to stdout.

use crate::path::Path;
use crate::piece::Piece;

/// Progress callbacks reported during a search.
///
/// All methods default to no-ops. A trace observes the search; it can never
/// steer it.
pub trait TraceLike {
    /// A move was applied, extending the branch to `path`.
    #[inline]
    fn on_move(&mut self, _piece: Piece, _path: &Path) {}

    /// The move budget was exhausted on this branch.
    #[inline]
    fn on_budget_cutoff(&mut self, _path: &Path) {}

    /// The drift heuristic abandoned this branch.
    #[inline]
    fn on_drift_cutoff(&mut self, _path: &Path) {}

    /// A candidate path reaching the target was recorded.
    #[inline]
    fn on_path_found(&mut self, _path: &Path) {}

    /// Selection advanced to a shorter candidate.
    #[inline]
    fn on_better_path(&mut self, _path: &Path) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;
impl TraceLike for NoTrace {}

#[derive(Debug, Clone, Copy)]
/// Stdout narration with a 0..=3 verbosity ladder:
/// 0 silent, 1 adds candidate/best paths, 2 adds drift cutoffs, 3 adds
/// per-move chatter and budget cutoffs.
pub struct ConsoleTrace {
    verbosity: u8,
}

impl ConsoleTrace {
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }
}

impl TraceLike for ConsoleTrace {
    fn on_move(&mut self, piece: Piece, path: &Path) {
        if self.verbosity >= 3 {
            if let Some(step) = path.last() {
                let at = piece.coord();
                println!(
                    "  [{}] {} plays {} to ({}, {})",
                    path.len(),
                    piece.kind().name(),
                    step.mv,
                    at.x,
                    at.y
                );
            }
        }
    }

    fn on_budget_cutoff(&mut self, path: &Path) {
        if self.verbosity >= 3 {
            println!("  [{}] cutoff: move budget exhausted", path.len());
        }
    }

    fn on_drift_cutoff(&mut self, path: &Path) {
        if self.verbosity >= 2 {
            println!("  [{}] cutoff: drifting away from target", path.len());
        }
    }

    fn on_path_found(&mut self, path: &Path) {
        if self.verbosity >= 1 {
            println!("candidate found: {} moves", path.len());
        }
    }

    fn on_better_path(&mut self, path: &Path) {
        if self.verbosity >= 1 {
            println!("best so far: {} moves", path.len());
        }
    }
}
