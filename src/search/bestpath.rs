//! Exhaustive depth-bounded search for a shortest move sequence.
//!
//! Move sequences are explored depth-first in the piece's fixed move order.
//! A branch is abandoned once it exhausts the move budget or trips the
//! drift heuristic. Every sequence reaching the target is collected; the
//! shortest wins, with ties resolved to the first discovered. Identical
//! inputs yield identical reports.

use crate::coord::Coord;
use crate::path::{Path, PathStep};
use crate::piece::Piece;
use crate::search::drift::is_drifting_away;
use crate::search::trace::TraceLike;
use crate::search::{
    bump_nodes, check_piece, check_target, SearchConfig, SearchCounts, SearchError, SearchOutcome,
    SearchReport,
};

#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Shortest move sequence carrying `piece` to `target` within the move
    /// budget.
    ///
    /// Contract violations surface as errors before any recursion. A piece
    /// already on the target reports [`SearchOutcome::AlreadyThere`]; an
    /// empty candidate set reports [`SearchOutcome::NoSolution`]. Neither is
    /// an error.
    pub fn find_best_path<T: TraceLike>(
        &self,
        piece: Piece,
        target: Coord,
        trace: &mut T,
    ) -> Result<SearchReport, SearchError> {
        check_piece(&piece)?;
        check_target(target)?;

        let mut counts = SearchCounts::default();

        if piece.is_at(target) {
            return Ok(SearchReport {
                outcome: SearchOutcome::AlreadyThere,
                counts,
            });
        }

        let mut found: Vec<Path> = Vec::new();
        self.explore(piece, target, &Path::new(), &mut found, &mut counts, trace)?;

        // Scan candidates in discovery order, keeping the strictly shorter
        // path, so the first-discovered wins among equals.
        let mut best: Option<Path> = None;
        for path in found {
            let better = match &best {
                None => true,
                Some(b) => path.len() < b.len(),
            };
            if better {
                trace.on_better_path(&path);
                best = Some(path);
            }
        }

        let outcome = match best {
            Some(path) => SearchOutcome::Found(path),
            None => SearchOutcome::NoSolution,
        };
        Ok(SearchReport { outcome, counts })
    }

    fn explore<T: TraceLike>(
        &self,
        piece: Piece,
        target: Coord,
        path: &Path,
        found: &mut Vec<Path>,
        counts: &mut SearchCounts,
        trace: &mut T,
    ) -> Result<(), SearchError> {
        bump_nodes("explore", self.config.limits, counts)?;

        if path.len() >= self.config.max_moves {
            counts.budget_cutoffs += 1;
            trace.on_budget_cutoff(path);
            return Ok(());
        }
        if is_drifting_away(path.steps(), target, self.config.drift_window) {
            counts.drift_cutoffs += 1;
            trace.on_drift_cutoff(path);
            return Ok(());
        }

        for &mv in piece.moves() {
            let moved = piece.apply(mv);
            let mut next = path.clone();
            next.push(PathStep::new(mv, moved.coord()));
            trace.on_move(moved, &next);

            if moved.is_at(target) {
                // Record and keep scanning siblings; deeper continuations of
                // a hit cannot be shorter.
                counts.paths_found += 1;
                trace.on_path_found(&next);
                found.push(next);
            } else {
                self.explore(moved, target, &next, found, counts, trace)?;
            }
        }

        Ok(())
    }
}
